use crate::domain::SuiteCategory;
use crate::logs::LogDocument;

/// Number of catalog slots reconciled per run.
pub const SLOT_COUNT: usize = 32;

/// Band a slot index into its suite. Slots past the UI band are additional
/// contract cases appended by the upstream report generator; they keep the
/// contract suite here even though their synthetic `TC-SC-<slot>` identifiers
/// do not normally appear in the logs.
pub const fn category_for_slot(slot: usize) -> SuiteCategory {
    match slot {
        1..=15 => SuiteCategory::Contract,
        16..=21 => SuiteCategory::Api,
        22..=27 => SuiteCategory::Ui,
        _ => SuiteCategory::Contract,
    }
}

const BUILTIN_EXPECTED_FAILURES: [(SuiteCategory, usize, &str); 15] = [
    (SuiteCategory::Contract, 2, "NotAdmin"),
    (SuiteCategory::Contract, 3, "WrongPhase"),
    (SuiteCategory::Contract, 5, "WrongPhase"),
    (SuiteCategory::Contract, 6, "EmptyHash"),
    (SuiteCategory::Contract, 7, "NotEligible"),
    (SuiteCategory::Contract, 8, "AlreadyCommitted"),
    (SuiteCategory::Contract, 10, "NoCommit"),
    (SuiteCategory::Contract, 11, "HashMismatch"),
    (SuiteCategory::Contract, 12, "AlreadyRevealed"),
    (SuiteCategory::Contract, 13, "InactiveCandidate"),
    (SuiteCategory::Contract, 14, "WrongPhase"),
    (SuiteCategory::Contract, 15, "CanOnlyResetAfterFinish"),
    (SuiteCategory::Contract, 16, "WrongPhase"),
    (SuiteCategory::Api, 2, "NotEligible"),
    (SuiteCategory::Api, 5, "demo join is unavailable"),
];

/// Failure-signature rules for negative test cases, keyed by suite and
/// catalog key. Passed into catalog construction so tests can substitute
/// their own rule set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpectedFailureTable {
    rules: Vec<ExpectedFailureRule>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ExpectedFailureRule {
    category: SuiteCategory,
    key: usize,
    keyword: String,
}

impl ExpectedFailureTable {
    pub fn new<I, K>(rules: I) -> Self
    where
        I: IntoIterator<Item = (SuiteCategory, usize, K)>,
        K: Into<String>,
    {
        Self {
            rules: rules
                .into_iter()
                .map(|(category, key, keyword)| ExpectedFailureRule {
                    category,
                    key,
                    keyword: keyword.into(),
                })
                .collect(),
        }
    }

    /// The rule set shipped with the binary catalog.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_EXPECTED_FAILURES)
    }

    pub fn keyword_for(&self, category: SuiteCategory, key: usize) -> Option<&str> {
        self.rules
            .iter()
            .find(|rule| rule.category == category && rule.key == key)
            .map(|rule| rule.keyword.as_str())
    }
}

/// One compiled-in test case the engine must produce a result for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCatalogEntry {
    pub slot: usize,
    pub category: SuiteCategory,
    pub expected_keyword: Option<String>,
}

impl TestCatalogEntry {
    /// Literal substring used to locate this case in its suite's log.
    pub fn needle(&self) -> String {
        self.category.test_case_id(self.slot)
    }

    /// Check the expected failure keyword verbatim against the RAW log text.
    /// Independent of the suite verdict: a failing suite can still confirm an
    /// individual negative case.
    pub fn confirm<'a>(&'a self, log: &LogDocument) -> Option<&'a str> {
        let keyword = self.expected_keyword.as_deref()?;
        log.raw().contains(keyword).then_some(keyword)
    }
}

/// The fixed 32-slot catalog, compiled into the program rather than loaded
/// from input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCatalog {
    entries: Vec<TestCatalogEntry>,
}

impl TestCatalog {
    pub fn for_table(table: &ExpectedFailureTable) -> Self {
        let entries = (1..=SLOT_COUNT)
            .map(|slot| {
                let category = category_for_slot(slot);
                TestCatalogEntry {
                    slot,
                    category,
                    expected_keyword: table.keyword_for(category, slot).map(str::to_owned),
                }
            })
            .collect();
        Self { entries }
    }

    pub fn builtin() -> Self {
        Self::for_table(&ExpectedFailureTable::builtin())
    }

    pub fn entries(&self) -> &[TestCatalogEntry] {
        &self.entries
    }
}
