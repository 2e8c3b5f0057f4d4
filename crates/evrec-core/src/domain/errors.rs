pub type EvrecResult<T> = Result<T, EvrecError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EvrecErrorCategory {
    InputValidationError,
    IoSystemError,
    InternalError,
}

impl EvrecErrorCategory {
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::InputValidationError => 2,
            Self::IoSystemError => 3,
            Self::InternalError => 5,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::InputValidationError => "InputValidationError",
            Self::IoSystemError => "IoSystemError",
            Self::InternalError => "InternalError",
        }
    }
}

/// Domain error carrying a stable placeholder code (`INPUT.*`, `IO.*`,
/// `SYS.*`) alongside the human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{} [{}] {}", .category.label(), .placeholder, .message)]
pub struct EvrecError {
    category: EvrecErrorCategory,
    placeholder: &'static str,
    message: String,
}

impl EvrecError {
    pub fn new(
        category: EvrecErrorCategory,
        placeholder: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            placeholder,
            message: message.into(),
        }
    }

    pub fn input_validation(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(
            EvrecErrorCategory::InputValidationError,
            placeholder,
            message,
        )
    }

    pub fn io_system(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(EvrecErrorCategory::IoSystemError, placeholder, message)
    }

    pub fn internal(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(EvrecErrorCategory::InternalError, placeholder, message)
    }

    pub const fn category(&self) -> EvrecErrorCategory {
        self.category
    }

    pub const fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn exit_code(&self) -> i32 {
        self.category.exit_code()
    }

    pub fn diagnostic_line(&self) -> String {
        format!("ERROR: [{}] {}", self.placeholder, self.message)
    }
}
