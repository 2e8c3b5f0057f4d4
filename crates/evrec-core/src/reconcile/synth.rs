use super::model::TestCaseRecord;
use crate::catalog::TestCatalogEntry;
use crate::domain::{SuiteCategory, SuiteVerdict};
use crate::logs::{LineRange, LogDocument};

/// Build the result/status/evidence strings for one slot.
///
/// Result and status are derived separately on purpose: the result can claim
/// a confirmed expected failure while the suite-level status still reports
/// FAIL, because one broken case in a suite must not erase an evidenced
/// negative-test confirmation.
pub fn synthesize_record(
    entry: &TestCatalogEntry,
    log: &LogDocument,
    verdict: SuiteVerdict,
    range: Option<LineRange>,
) -> TestCaseRecord {
    TestCaseRecord {
        result: build_result(entry, log, verdict),
        status: build_status(verdict),
        evidence: evidence_text(entry.category, range),
    }
}

fn build_result(entry: &TestCatalogEntry, log: &LogDocument, verdict: SuiteVerdict) -> String {
    if let Some(keyword) = entry.confirm(log) {
        return format!("confirmed expected failure ({keyword})");
    }

    match verdict {
        SuiteVerdict::Pass => "passed in suite (see log)".to_string(),
        SuiteVerdict::Fail => {
            "TODO: suite failed; locate specific error for this test".to_string()
        }
        SuiteVerdict::Unknown => "TODO: confirm actual result from logs".to_string(),
    }
}

fn build_status(verdict: SuiteVerdict) -> String {
    match verdict {
        SuiteVerdict::Pass => "PASS".to_string(),
        SuiteVerdict::Fail => "FAIL".to_string(),
        SuiteVerdict::Unknown => "TODO: set PASS/FAIL after running tests".to_string(),
    }
}

fn evidence_text(category: SuiteCategory, range: Option<LineRange>) -> String {
    match range {
        Some(range) => format!("{}; log {}", category.evidence_source(), range),
        None => category.evidence_source().to_string(),
    }
}
