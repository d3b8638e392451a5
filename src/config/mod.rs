//! Workspace configuration (`.scholar-site.json`).
mod loader;
mod types;

pub use types::{
    AuditConfig,
    ChartConfig,
    ConfigError,
    SiteSettings,
    TranslationFilesConfig,
    ValidationError,
};
