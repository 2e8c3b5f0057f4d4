pub mod errors;

pub use errors::{EvrecError, EvrecErrorCategory, EvrecResult};

use std::fmt::{Display, Formatter};

/// One of the three independent runner suites a catalog slot can belong to.
/// The short code is the one embedded in test-case identifiers in the logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuiteCategory {
    Contract,
    Api,
    Ui,
}

impl SuiteCategory {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Contract => "SC",
            Self::Api => "API",
            Self::Ui => "UI",
        }
    }

    /// Figure label used as the evidence source reference for this suite.
    pub const fn evidence_source(self) -> &'static str {
        match self {
            Self::Contract => "Figure 3.1 (contract test run)",
            Self::Api => "Figure 3.2 (API test run)",
            Self::Ui => "Figure 3.3 (UI test run)",
        }
    }

    /// Human-readable test-case identifier for a catalog slot, e.g. `TC-SC-07`.
    pub fn test_case_id(self, slot: usize) -> String {
        format!("TC-{}-{:02}", self.as_str(), slot)
    }
}

impl Display for SuiteCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

/// Whole-suite outcome attributed to one runner invocation. Exactly one per
/// suite per run; never mixed per test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuiteVerdict {
    Pass,
    Fail,
    Unknown,
}

impl SuiteVerdict {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl Display for SuiteVerdict {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

/// Role segment of a placeholder token key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceholderRole {
    Result,
    Status,
    Evidence,
}

impl PlaceholderRole {
    pub const ALL: [PlaceholderRole; 3] = [Self::Result, Self::Status, Self::Evidence];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Result => "RESULT",
            Self::Status => "STATUS",
            Self::Evidence => "EVIDENCE",
        }
    }
}

impl Display for PlaceholderRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}
