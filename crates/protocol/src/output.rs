use crate::SCHEMA_VERSION;
use hotspot_overlay::{
    AnnotationFields, AnnotationRecord, Column, Overlay, OverlayStats, RecordKind,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Serialized form of an overlay, consumed by renderers
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
pub struct OverlayPayload {
    pub schema_version: u32,
    pub columns: Vec<ColumnPayload>,
    pub records: Vec<RecordPayload>,
    pub navigation: NavigationPayload,
    pub stats: StatsPayload,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
pub struct ColumnPayload {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RecordKindPayload {
    Header,
    Data,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
pub struct RecordPayload {
    pub line_index: usize,
    pub kind: RecordKindPayload,
    pub fields: FieldsPayload,
}

/// Field order matches the column order
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
pub struct FieldsPayload {
    #[serde(rename = "TotalPercent")]
    pub total_percent: String,
    #[serde(rename = "Total")]
    pub total: String,
    #[serde(rename = "SelfPercent")]
    pub self_percent: String,
    #[serde(rename = "Self")]
    pub self_cost: String,
}

impl FieldsPayload {
    #[must_use]
    pub fn get(&self, column: Column) -> &str {
        match column {
            Column::TotalPercent => &self.total_percent,
            Column::Total => &self.total,
            Column::SelfPercent => &self.self_percent,
            Column::SelfCost => &self.self_cost,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema)]
pub struct NavigationPayload {
    /// 1-based line; 0 means no navigation
    pub target_line: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema)]
pub struct StatsPayload {
    pub accepted: usize,
    pub out_of_range: usize,
    pub duplicates: usize,
    pub header_replaced_data: bool,
}

impl From<&AnnotationFields> for FieldsPayload {
    fn from(fields: &AnnotationFields) -> Self {
        Self {
            total_percent: fields.get(Column::TotalPercent).to_string(),
            total: fields.get(Column::Total).to_string(),
            self_percent: fields.get(Column::SelfPercent).to_string(),
            self_cost: fields.get(Column::SelfCost).to_string(),
        }
    }
}

impl From<&AnnotationRecord> for RecordPayload {
    fn from(record: &AnnotationRecord) -> Self {
        Self {
            line_index: record.line_index,
            kind: match record.kind {
                RecordKind::Header => RecordKindPayload::Header,
                RecordKind::Data => RecordKindPayload::Data,
            },
            fields: FieldsPayload::from(&record.fields),
        }
    }
}

impl From<OverlayStats> for StatsPayload {
    fn from(stats: OverlayStats) -> Self {
        Self {
            accepted: stats.accepted,
            out_of_range: stats.out_of_range,
            duplicates: stats.duplicates,
            header_replaced_data: stats.header_replaced_data,
        }
    }
}

impl From<&Overlay> for OverlayPayload {
    fn from(overlay: &Overlay) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            columns: Column::ALL
                .into_iter()
                .map(|column| ColumnPayload {
                    id: column.as_str().to_string(),
                    label: column.label().to_string(),
                })
                .collect(),
            records: overlay.records().iter().map(RecordPayload::from).collect(),
            navigation: NavigationPayload {
                target_line: overlay.navigation().target_line,
            },
            stats: overlay.stats().into(),
        }
    }
}
