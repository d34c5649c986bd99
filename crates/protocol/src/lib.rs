//! Wire formats shared by hotspot tools.
//!
//! Input: a [`SourceViewFile`] (JSON or TOML) naming a source file and the
//! metrics sampled for its lines. Output: an [`OverlayPayload`] with
//! pre-formatted per-line fields that renderers display verbatim.

use anyhow::Result;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

mod input;
mod output;

pub use input::{LineEntry, SourceFileRef, SourceViewFile};
pub use output::{
    ColumnPayload, FieldsPayload, NavigationPayload, OverlayPayload, RecordKindPayload,
    RecordPayload, StatsPayload,
};

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
pub struct ErrorEnvelope {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorEnvelope {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            hint: None,
        }
    }

    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// JSON Schema of [`SourceViewFile`]
pub fn input_schema() -> Result<serde_json::Value> {
    serde_json::to_value(schemars::schema_for!(SourceViewFile)).map_err(Into::into)
}

/// JSON Schema of [`OverlayPayload`]
pub fn output_schema() -> Result<serde_json::Value> {
    serde_json::to_value(schemars::schema_for!(OverlayPayload)).map_err(Into::into)
}

pub fn serialize_json_pretty<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(Into::into)
}
