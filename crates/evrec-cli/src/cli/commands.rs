use super::CliError;
use anyhow::Context;
use evrec_core::reconcile::{ReconcileConfig, render_human_summary, run_reconciliation};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(clap::Args)]
pub(super) struct ReconcileArgs {
    /// Placeholder store path
    #[arg(long, default_value = "placeholders.json")]
    placeholders: PathBuf,

    /// Contract-suite log path
    #[arg(long, default_value = "evidence/logs/contract-tests.log")]
    contract_log: PathBuf,

    /// API-suite log path
    #[arg(long, default_value = "evidence/logs/api-tests.log")]
    api_log: PathBuf,

    /// UI-suite log path
    #[arg(long, default_value = "evidence/logs/ui-tests.log")]
    ui_log: PathBuf,
}

impl ReconcileArgs {
    fn into_config(self, working_dir: &Path) -> ReconcileConfig {
        ReconcileConfig {
            placeholders_path: resolve_cli_path(working_dir, &self.placeholders),
            contract_log: resolve_cli_path(working_dir, &self.contract_log),
            api_log: resolve_cli_path(working_dir, &self.api_log),
            ui_log: resolve_cli_path(working_dir, &self.ui_log),
        }
    }
}

pub(super) fn run_reconcile_command(args: ReconcileArgs) -> Result<i32, CliError> {
    let working_dir =
        std::env::current_dir().context("failed to read current working directory")?;
    let config = args.into_config(&working_dir);
    debug!(
        placeholders = %config.placeholders_path.display(),
        contract_log = %config.contract_log.display(),
        api_log = %config.api_log.display(),
        ui_log = %config.ui_log.display(),
        "resolved reconciliation paths"
    );

    let report = run_reconciliation(&config).map_err(CliError::Compute)?;
    info!(
        updated = report.updated_tokens,
        skipped = report.skipped_roles,
        "placeholder store rewritten"
    );

    println!("{}", render_human_summary(&report));
    println!("Placeholder store: {}", config.placeholders_path.display());
    Ok(0)
}

fn resolve_cli_path(working_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        working_dir.join(path)
    }
}
