use super::LogDocument;
use crate::domain::SuiteVerdict;
use regex::Regex;
use std::sync::LazyLock;

// Summary phrasings for the two runner vocabularies the engine tolerates:
// "Test Files N failed" / "Test Suites: N failed" style summary lines and
// bare "N failing" / "N passing" counters.
static FILES_FAILED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"test files\s+\d+\s+failed").unwrap());
static SUITES_FAILED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"test suites:\s+\d+\s+failed").unwrap());
static COUNT_FAILING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d+\s+failing\b").unwrap());
static ZERO_FAILING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b0\s+failing\b").unwrap());
static FILES_PASSED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"test files\s+\d+\s+passed").unwrap());
static SUITES_PASSED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"test suites:\s+\d+\s+passed").unwrap());
static COUNT_PASSING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d+\s+passing\b").unwrap());

/// Reduce one runner log to a whole-suite verdict. Failure phrasings are
/// checked first so a log reporting both counts never classifies as passing.
pub fn classify_suite(log: &LogDocument) -> SuiteVerdict {
    if log.is_empty() {
        return SuiteVerdict::Unknown;
    }

    let text = log.stripped_lowercase();

    if FILES_FAILED.is_match(&text) || SUITES_FAILED.is_match(&text) {
        return SuiteVerdict::Fail;
    }
    if COUNT_FAILING.is_match(&text) && !ZERO_FAILING.is_match(&text) {
        return SuiteVerdict::Fail;
    }

    if FILES_PASSED.is_match(&text) || SUITES_PASSED.is_match(&text) {
        return SuiteVerdict::Pass;
    }
    if COUNT_PASSING.is_match(&text) && !COUNT_FAILING.is_match(&text) {
        return SuiteVerdict::Pass;
    }

    SuiteVerdict::Unknown
}

#[cfg(test)]
mod tests {
    use super::classify_suite;
    use crate::domain::SuiteVerdict;
    use crate::logs::LogDocument;

    fn verdict(text: &str) -> SuiteVerdict {
        classify_suite(&LogDocument::new(text))
    }

    #[test]
    fn empty_log_is_unknown_without_inspection() {
        assert_eq!(verdict(""), SuiteVerdict::Unknown);
    }

    #[test]
    fn summary_file_counts_classify_both_ways() {
        assert_eq!(verdict("Test Files  1 failed (3)\n"), SuiteVerdict::Fail);
        assert_eq!(verdict("Test Files  4 passed (4)\n"), SuiteVerdict::Pass);
        assert_eq!(
            verdict("Test Suites: 2 failed, 1 total\n"),
            SuiteVerdict::Fail
        );
        assert_eq!(
            verdict("Test Suites: 3 passed, 3 total\n"),
            SuiteVerdict::Pass
        );
    }

    #[test]
    fn counter_vocabulary_classifies_both_ways() {
        assert_eq!(verdict("  12 passing (4s)\n  2 failing\n"), SuiteVerdict::Fail);
        assert_eq!(verdict("  12 passing (4s)\n"), SuiteVerdict::Pass);
        assert_eq!(verdict("  12 passing (4s)\n  0 failing\n"), SuiteVerdict::Unknown);
    }

    #[test]
    fn failure_counts_take_precedence_over_passing_counts() {
        assert_eq!(
            verdict("Test Files  1 failed | 3 passed (4)\n"),
            SuiteVerdict::Fail
        );
        assert_eq!(
            verdict("Test Suites: 1 failed, 2 passed, 3 total\n"),
            SuiteVerdict::Fail
        );
    }

    #[test]
    fn ansi_wrapped_summaries_still_classify() {
        assert_eq!(
            verdict("\x1b[31mTest Files  1 failed\x1b[0m (1)\n"),
            SuiteVerdict::Fail
        );
    }

    #[test]
    fn irrelevant_content_is_unknown() {
        assert_eq!(
            verdict("compiling 14 files\nserver listening on :8545\n"),
            SuiteVerdict::Unknown
        );
    }
}
