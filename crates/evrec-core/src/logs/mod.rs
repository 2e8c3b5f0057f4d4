mod classifier;
mod locator;

pub use classifier::classify_suite;
pub use locator::{LineRange, locate};

use crate::domain::{EvrecError, EvrecResult};
use regex::Regex;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::LazyLock;

static ANSI_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-?]*[ -/]*[@-~]").unwrap());

/// Raw text of one suite's runner log. An absent file reads as an empty
/// document; classification of an empty document never inspects content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogDocument {
    raw: String,
}

impl LogDocument {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Read a log from disk. Missing file is an empty document, not an
    /// error; invalid UTF-8 bytes are replaced rather than rejected.
    pub fn read(path: &Path) -> EvrecResult<Self> {
        match fs::read(path) {
            Ok(bytes) => Ok(Self {
                raw: String::from_utf8_lossy(&bytes).into_owned(),
            }),
            Err(source) if source.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(EvrecError::io_system(
                "IO.LOG_READ",
                format!("failed to read log '{}': {}", path.display(), source),
            )),
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Matching view: ANSI control sequences stripped, lowercased. Derived on
    /// demand; the raw text stays the single source of truth.
    pub fn stripped_lowercase(&self) -> String {
        ANSI_ESCAPE.replace_all(&self.raw, "").to_lowercase()
    }
}
