use crate::domain::{PlaceholderRole, SuiteCategory, SuiteVerdict};

/// The three synthesized strings for one catalog slot. Ephemeral; only the
/// fields are written into the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCaseRecord {
    pub result: String,
    pub status: String,
    pub evidence: String,
}

impl TestCaseRecord {
    pub fn value_for(&self, role: PlaceholderRole) -> &str {
        match role {
            PlaceholderRole::Result => &self.result,
            PlaceholderRole::Status => &self.status,
            PlaceholderRole::Evidence => &self.evidence,
        }
    }
}

/// One verdict per suite per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuiteVerdicts {
    pub contract: SuiteVerdict,
    pub api: SuiteVerdict,
    pub ui: SuiteVerdict,
}

impl SuiteVerdicts {
    pub fn for_category(&self, category: SuiteCategory) -> SuiteVerdict {
        match category {
            SuiteCategory::Contract => self.contract,
            SuiteCategory::Api => self.api,
            SuiteCategory::Ui => self.ui,
        }
    }
}

/// What happened to one catalog slot: the synthesized record plus which
/// tokens received it and which roles had no token to receive it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotOutcome {
    pub slot: usize,
    pub category: SuiteCategory,
    pub record: TestCaseRecord,
    pub updated_tokens: Vec<String>,
    pub skipped_roles: Vec<PlaceholderRole>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileReport {
    pub verdicts: SuiteVerdicts,
    pub slots: Vec<SlotOutcome>,
    pub updated_tokens: usize,
    pub skipped_roles: usize,
}
