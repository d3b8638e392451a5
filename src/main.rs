//! Build check for the site: loads translations, audits coverage and writes
//! the service chart.

use std::path::Path;
use std::process::ExitCode;

use scholar_site::Locale;
use scholar_site::chart::{
    Page,
    RenderOutcome,
    SERVICE_MIX,
    ServiceChart,
    render_chart,
};
use scholar_site::config::SiteSettings;
use scholar_site::translation::{
    self,
    TranslationTable,
};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let workspace_root = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(error) => {
            tracing::error!(%error, "Cannot determine workspace root");
            return ExitCode::FAILURE;
        }
    };

    let settings = match SiteSettings::load(&workspace_root) {
        Ok(settings) => settings,
        Err(error) => {
            tracing::error!("{error}");
            return ExitCode::FAILURE;
        }
    };

    let table = match load_table(&workspace_root, &settings) {
        Ok(table) => table,
        Err(error) => {
            tracing::error!("{error}");
            return ExitCode::FAILURE;
        }
    };

    let missing = audit(&table);
    if missing > 0 && settings.audit.fail_on_missing {
        tracing::error!(missing, "Translations are incomplete");
        return ExitCode::FAILURE;
    }

    if let Err(error) = write_chart(&workspace_root, &settings) {
        tracing::error!(%error, "Failed to write chart");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Workspace locale files, or the bundled ones when the workspace has none.
fn load_table(
    workspace_root: &Path,
    settings: &SiteSettings,
) -> Result<TranslationTable, translation::LoadError> {
    let pattern = &settings.translation_files.file_pattern;
    if let Some(table) = translation::load_from_dir(workspace_root, pattern)? {
        tracing::info!(pattern = pattern.as_str(), "Loaded workspace translations");
        return Ok(table);
    }

    tracing::info!("No workspace translation files, using bundled translations");
    Ok(translation::bundled().clone())
}

/// Logs every key a locale cannot resolve and returns how many there were.
fn audit(table: &TranslationTable) -> usize {
    let mut total = 0;
    for locale in Locale::ALL {
        let missing = table.missing_keys(locale);
        for key in &missing {
            tracing::warn!(%locale, key = key.as_str(), "Missing translation");
        }
        total += missing.len();
    }
    tracing::info!(missing = total, "Translation audit finished");
    total
}

fn write_chart(workspace_root: &Path, settings: &SiteSettings) -> std::io::Result<()> {
    let Some(output) = &settings.chart.output else {
        tracing::debug!("No chart output configured");
        return Ok(());
    };

    let chart_config = &settings.chart;
    let mut page = Page::new().with_container(&chart_config.container_id);
    let chart = ServiceChart::new(&SERVICE_MIX, chart_config.width, chart_config.height);
    if render_chart(&mut page, &chart_config.container_id, &chart) != RenderOutcome::Rendered {
        return Ok(());
    }

    let svg =
        page.container(&chart_config.container_id).map(|c| c.inner_html()).unwrap_or_default();
    let path = workspace_root.join(output);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, svg)?;
    tracing::info!(path = %path.display(), "Wrote service chart");
    Ok(())
}
