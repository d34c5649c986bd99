//! # Hotspot Overlay
//!
//! Maps per-line profiling samples onto a source document and produces a
//! per-line annotation overlay for source viewers.
//!
//! ## Architecture
//!
//! ```text
//! SourceDocument + MetricSet
//!     │
//!     ├──> LineAnnotationMapper
//!     │    ├─> line number → 0-based index (out of range: dropped)
//!     │    ├─> first metric per line wins
//!     │    ├─> MetricFormatter → TotalPercent | Total | SelfPercent | Self
//!     │    └─> caption row on index 0
//!     │
//!     └──> Overlay
//!          ├─> AnnotationRecord[] (sorted, one per line)
//!          └─> NavigationDirective (focus line)
//! ```
//!
//! The overlay is plain data; a renderer attaches it to its own line
//! representation through [`LineDecorator`].
//!
//! ## Example
//!
//! ```rust
//! use hotspot_overlay::{Column, LineAnnotationMapper, LineMetric, MetricSet, SourceDocument};
//!
//! let document = SourceDocument::new(10, 5);
//! let metrics: MetricSet = [LineMetric::new(5, 12.345, 0.4567, 3.0, 0.1)]
//!     .into_iter()
//!     .collect();
//!
//! let overlay = LineAnnotationMapper::default().annotate(&document, &metrics);
//! let record = overlay.get(4).unwrap();
//! assert_eq!(record.fields.get(Column::TotalPercent), "12.35%");
//! assert_eq!(overlay.navigation().scroll_target(), Some(5));
//! ```

mod annotation;
mod columns;
mod config;
mod error;
mod format;
mod mapper;
mod types;
mod view;

pub use annotation::{AnnotationFields, AnnotationRecord, Overlay, OverlayStats, RecordKind};
pub use columns::{default_columns, Column, ColumnSpec};
pub use config::{OverlayConfig, MAX_FRACTION_DIGITS};
pub use error::{OverlayError, Result};
pub use format::{
    format_metric, MetricFormatter, MetricKind, DEFAULT_MAGNITUDE_DIGITS, DEFAULT_PERCENT_DIGITS,
};
pub use mapper::LineAnnotationMapper;
pub use types::{LineMetric, MetricSet, NavigationDirective, SourceDocument};
pub use view::{LineDecorator, SourceView};
