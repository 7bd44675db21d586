use std::fs;
use std::path::Path;

use alb_audit_core::ScanMode;
use serde::Deserialize;
use thiserror::Error;

/// A report section that can run without extra arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    ScanInfo,
    List,
    Coverage,
    NoWaf,
    AdvancedStats,
    ByType,
    ByRegion,
}

/// Display labels per scan mode.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ModeLabels {
    pub quick: String,
    pub standard: String,
    pub full: String,
    pub unknown: String,
}

impl ModeLabels {
    pub fn label(&self, mode: ScanMode) -> &str {
        match mode {
            ScanMode::Quick => &self.quick,
            ScanMode::Standard => &self.standard,
            ScanMode::Full => &self.full,
            ScanMode::Unknown => &self.unknown,
        }
    }
}

/// Report settings loaded from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReportConfig {
    pub default_sections: Vec<Section>,
    pub mode_labels: ModeLabels,
}

/// Errors returned when loading a report config file.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
    #[error("invalid config file {path}: {reason}")]
    Invalid { path: String, reason: String },
}

/// Load report settings from a TOML file.
pub fn load_report_config(path: &Path) -> Result<ReportConfig, ConfigLoadError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    parse_config(&raw, path.display().to_string())
}

/// Built-in settings shipped with the binary.
pub fn default_report_config() -> ReportConfig {
    let embedded = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config/report.toml"));
    parse_config(embedded, "embedded config".to_string()).unwrap_or_else(|_| fallback_config())
}

fn parse_config(raw: &str, path: String) -> Result<ReportConfig, ConfigLoadError> {
    let parsed: ReportConfig = toml::from_str(raw).map_err(|source| ConfigLoadError::Parse {
        path: path.clone(),
        source,
    })?;
    if parsed.default_sections.is_empty() {
        return Err(ConfigLoadError::Invalid {
            path,
            reason: "default_sections must name at least one section".to_string(),
        });
    }
    Ok(parsed)
}

fn fallback_config() -> ReportConfig {
    ReportConfig {
        default_sections: vec![
            Section::ScanInfo,
            Section::List,
            Section::Coverage,
            Section::AdvancedStats,
            Section::ByType,
            Section::ByRegion,
        ],
        mode_labels: ModeLabels {
            quick: "quick".to_string(),
            standard: "standard".to_string(),
            full: "full".to_string(),
            unknown: "unknown".to_string(),
        },
    }
}
