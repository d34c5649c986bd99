use crate::SCHEMA_VERSION;
use anyhow::{anyhow, bail, Context, Result};
use hotspot_overlay::{LineMetric, MetricSet};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Source file reference plus the metrics sampled for its lines
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SourceViewFile {
    pub schema_version: u32,
    #[serde(default)]
    pub file: SourceFileRef,
    #[serde(default)]
    pub lines: Vec<LineEntry>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SourceFileRef {
    /// Path of the profiled source file, relative to the metrics file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// 1-based line to show first; 0 disables navigation
    #[serde(default)]
    pub line: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct LineEntry {
    /// 1-based line number
    pub line: u32,
    #[serde(default)]
    pub total_percent: f64,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub self_percent: f64,
    #[serde(default, rename = "self")]
    pub self_cost: f64,
}

impl From<LineEntry> for LineMetric {
    fn from(entry: LineEntry) -> Self {
        Self::new(
            entry.line,
            entry.total_percent,
            entry.total,
            entry.self_percent,
            entry.self_cost,
        )
    }
}

impl SourceViewFile {
    /// Parse JSON, falling back to TOML
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let parsed: Self = match serde_json::from_slice(bytes) {
            Ok(value) => value,
            Err(json_err) => {
                let utf8 = std::str::from_utf8(bytes).map_err(|err| anyhow!("{json_err}; {err}"))?;
                toml::from_str(utf8).map_err(|toml_err| {
                    anyhow!(
                        "Source view is not valid JSON or TOML ({json_err}); TOML parse error: {toml_err}"
                    )
                })?
            }
        };

        if parsed.schema_version != SCHEMA_VERSION {
            bail!(
                "Unsupported schema_version {} (expected {SCHEMA_VERSION})",
                parsed.schema_version
            );
        }
        Ok(parsed)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&bytes).with_context(|| format!("Invalid source view file {}", path.display()))
    }

    /// Metrics in file order; duplicates are kept for the mapper to resolve
    #[must_use]
    pub fn metrics(&self) -> MetricSet {
        self.lines.iter().copied().map(LineMetric::from).collect()
    }
}
