use crate::annotation::{AnnotationFields, AnnotationRecord, Overlay, OverlayStats};
use crate::config::OverlayConfig;
use crate::error::Result;
use crate::format::MetricFormatter;
use crate::types::{MetricSet, NavigationDirective, SourceDocument};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

/// Builds annotation overlays from per-line metrics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineAnnotationMapper {
    formatter: MetricFormatter,
    emit_header: bool,
}

impl Default for LineAnnotationMapper {
    fn default() -> Self {
        Self {
            formatter: MetricFormatter::default(),
            emit_header: true,
        }
    }
}

impl LineAnnotationMapper {
    /// Create a mapper from a validated configuration
    pub fn new(config: &OverlayConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            formatter: config.formatter(),
            emit_header: config.emit_header,
        })
    }

    #[must_use]
    pub const fn formatter(&self) -> &MetricFormatter {
        &self.formatter
    }

    /// Map `metrics` onto the lines of `document`.
    ///
    /// Metrics outside the document are dropped, and when several metrics
    /// name the same line the first one in iteration order is kept. On a
    /// non-empty document the caption row always occupies index 0, even if
    /// line 1 had data. Nothing here fails; anomalies only show up in
    /// [`OverlayStats`].
    #[must_use]
    pub fn annotate(&self, document: &SourceDocument, metrics: &MetricSet) -> Overlay {
        let line_count = document.line_count();
        let mut slots: BTreeMap<usize, AnnotationRecord> = BTreeMap::new();
        let mut stats = OverlayStats::default();

        for metric in metrics {
            let Some(index) = metric.line_index().filter(|&index| index < line_count) else {
                stats.out_of_range += 1;
                continue;
            };

            match slots.entry(index) {
                Entry::Occupied(_) => stats.duplicates += 1,
                Entry::Vacant(slot) => {
                    let fields = AnnotationFields::from_metric(metric, &self.formatter);
                    slot.insert(AnnotationRecord::data(index, fields));
                    stats.accepted += 1;
                }
            }
        }

        if line_count > 0 && self.emit_header {
            stats.header_replaced_data = slots.insert(0, AnnotationRecord::header()).is_some();
        }

        if stats.out_of_range > 0 || stats.duplicates > 0 {
            log::debug!(
                "overlay: dropped {} out-of-range and {} duplicate metrics ({} lines)",
                stats.out_of_range,
                stats.duplicates,
                line_count
            );
        }

        Overlay::new(
            slots.into_values().collect(),
            NavigationDirective {
                target_line: document.focus_line(),
            },
            stats,
        )
    }
}
