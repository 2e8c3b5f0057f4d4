mod model;
mod synth;

pub use model::{ReconcileReport, SlotOutcome, SuiteVerdicts, TestCaseRecord};
pub use synth::synthesize_record;

use crate::catalog::{ExpectedFailureTable, TestCatalog};
use crate::domain::{EvrecResult, PlaceholderRole, SuiteCategory};
use crate::logs::{LogDocument, classify_suite, locate};
use crate::store::PlaceholderStore;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileConfig {
    pub placeholders_path: PathBuf,
    pub contract_log: PathBuf,
    pub api_log: PathBuf,
    pub ui_log: PathBuf,
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            placeholders_path: PathBuf::from("placeholders.json"),
            contract_log: PathBuf::from("evidence/logs/contract-tests.log"),
            api_log: PathBuf::from("evidence/logs/api-tests.log"),
            ui_log: PathBuf::from("evidence/logs/ui-tests.log"),
        }
    }
}

/// Reconcile the builtin catalog against the configured logs and rewrite the
/// placeholder store.
pub fn run_reconciliation(config: &ReconcileConfig) -> EvrecResult<ReconcileReport> {
    reconcile_with_table(config, &ExpectedFailureTable::builtin())
}

/// Reconciliation entry point with an injectable expected-failure table.
///
/// Single pass: load the store once, classify each suite once, walk the 32
/// catalog slots, persist the store once. A malformed store aborts before
/// anything is written; a missing token for a role is skipped silently.
pub fn reconcile_with_table(
    config: &ReconcileConfig,
    table: &ExpectedFailureTable,
) -> EvrecResult<ReconcileReport> {
    let mut store = PlaceholderStore::load(&config.placeholders_path)?;

    let contract = LogDocument::read(&config.contract_log)?;
    let api = LogDocument::read(&config.api_log)?;
    let ui = LogDocument::read(&config.ui_log)?;

    let verdicts = SuiteVerdicts {
        contract: classify_suite(&contract),
        api: classify_suite(&api),
        ui: classify_suite(&ui),
    };

    let catalog = TestCatalog::for_table(table);
    let mut slots = Vec::with_capacity(catalog.entries().len());
    let mut updated_tokens = 0_usize;
    let mut skipped_roles = 0_usize;

    for entry in catalog.entries() {
        let log = match entry.category {
            SuiteCategory::Contract => &contract,
            SuiteCategory::Api => &api,
            SuiteCategory::Ui => &ui,
        };
        let verdict = verdicts.for_category(entry.category);
        let range = locate(log, &entry.needle());
        let record = synthesize_record(entry, log, verdict, range);

        let mut outcome = SlotOutcome {
            slot: entry.slot,
            category: entry.category,
            record,
            updated_tokens: Vec::new(),
            skipped_roles: Vec::new(),
        };

        for role in PlaceholderRole::ALL {
            match store.find(role, entry.slot).map(str::to_owned) {
                Some(token) => {
                    store.upsert(&token, outcome.record.value_for(role));
                    outcome.updated_tokens.push(token);
                    updated_tokens += 1;
                }
                None => {
                    outcome.skipped_roles.push(role);
                    skipped_roles += 1;
                }
            }
        }

        slots.push(outcome);
    }

    store.persist(&config.placeholders_path)?;

    Ok(ReconcileReport {
        verdicts,
        slots,
        updated_tokens,
        skipped_roles,
    })
}

pub fn render_human_summary(report: &ReconcileReport) -> String {
    format!(
        "Suite verdicts: SC={} API={} UI={}\n\
         Placeholders: {} updated, {} skipped (no matching token)\n\
         Reconciliation status: OK",
        report.verdicts.contract,
        report.verdicts.api,
        report.verdicts.ui,
        report.updated_tokens,
        report.skipped_roles
    )
}
