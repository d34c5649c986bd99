use crate::columns::Column;
use crate::format::MetricFormatter;
use crate::types::{LineMetric, NavigationDirective};

/// Display strings for one line, one per [`Column`], in column order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationFields {
    values: [String; Column::COUNT],
}

impl AnnotationFields {
    /// Format every column of `metric`
    #[must_use]
    pub fn from_metric(metric: &LineMetric, formatter: &MetricFormatter) -> Self {
        Self {
            values: Column::ALL.map(|column| formatter.format(metric.value(column), column.kind())),
        }
    }

    /// Column captions, used for the header row
    #[must_use]
    pub fn header() -> Self {
        Self {
            values: Column::ALL.map(|column| column.label().to_string()),
        }
    }

    #[must_use]
    pub fn get(&self, column: Column) -> &str {
        &self.values[column.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Column, &str)> + '_ {
        Column::ALL
            .into_iter()
            .map(move |column| (column, self.get(column)))
    }
}

/// Whether a record carries data or column captions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Header,
    Data,
}

/// Annotation attached to one rendered line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationRecord {
    /// 0-based position in the rendered line sequence
    pub line_index: usize,
    pub kind: RecordKind,
    pub fields: AnnotationFields,
}

impl AnnotationRecord {
    #[must_use]
    pub const fn data(line_index: usize, fields: AnnotationFields) -> Self {
        Self {
            line_index,
            kind: RecordKind::Data,
            fields,
        }
    }

    /// Caption row, always placed on the first line
    #[must_use]
    pub fn header() -> Self {
        Self {
            line_index: 0,
            kind: RecordKind::Header,
            fields: AnnotationFields::header(),
        }
    }

    #[must_use]
    pub fn is_header(&self) -> bool {
        self.kind == RecordKind::Header
    }
}

/// Counters describing how the input metrics were placed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverlayStats {
    /// Metrics that produced a record (including one later covered by the header)
    pub accepted: usize,
    /// Metrics whose line fell outside the document
    pub out_of_range: usize,
    /// Metrics dropped because their line already had a record
    pub duplicates: usize,
    /// The header replaced a data record on the first line
    pub header_replaced_data: bool,
}

/// Result of one annotation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overlay {
    records: Vec<AnnotationRecord>,
    navigation: NavigationDirective,
    stats: OverlayStats,
}

impl Overlay {
    /// `records` must already be sorted by line index with no repeats
    pub(crate) fn new(
        records: Vec<AnnotationRecord>,
        navigation: NavigationDirective,
        stats: OverlayStats,
    ) -> Self {
        Self {
            records,
            navigation,
            stats,
        }
    }

    /// Records sorted by line index, at most one per line
    #[must_use]
    pub fn records(&self) -> &[AnnotationRecord] {
        &self.records
    }

    #[must_use]
    pub const fn navigation(&self) -> NavigationDirective {
        self.navigation
    }

    #[must_use]
    pub const fn stats(&self) -> OverlayStats {
        self.stats
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record for a 0-based line, if any
    #[must_use]
    pub fn get(&self, line_index: usize) -> Option<&AnnotationRecord> {
        self.records
            .binary_search_by_key(&line_index, |record| record.line_index)
            .ok()
            .map(|pos| &self.records[pos])
    }

    #[must_use]
    pub fn header(&self) -> Option<&AnnotationRecord> {
        self.records.first().filter(|record| record.is_header())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fields_follow_column_order() {
        let metric = LineMetric::new(5, 12.345, 0.4567, 3.0, 0.1);
        let fields = AnnotationFields::from_metric(&metric, &MetricFormatter::default());
        let pairs: Vec<_> = fields.iter().collect();
        assert_eq!(
            pairs,
            vec![
                (Column::TotalPercent, "12.35%"),
                (Column::Total, "0.457"),
                (Column::SelfPercent, "3%"),
                (Column::SelfCost, "0.1"),
            ]
        );
    }

    #[test]
    fn header_fields_are_labels() {
        let header = AnnotationRecord::header();
        assert!(header.is_header());
        assert_eq!(header.line_index, 0);
        for (column, value) in header.fields.iter() {
            assert_eq!(value, column.label());
        }
    }

    #[test]
    fn overlay_lookup_by_line_index() {
        let fields = AnnotationFields::from_metric(
            &LineMetric::new(4, 1.0, 1.0, 1.0, 1.0),
            &MetricFormatter::default(),
        );
        let overlay = Overlay::new(
            vec![AnnotationRecord::header(), AnnotationRecord::data(3, fields)],
            NavigationDirective { target_line: 4 },
            OverlayStats::default(),
        );

        assert_eq!(overlay.len(), 2);
        assert!(overlay.header().is_some());
        assert_eq!(overlay.get(3).map(|record| record.kind), Some(RecordKind::Data));
        assert!(overlay.get(1).is_none());
        assert_eq!(overlay.navigation().scroll_target(), Some(4));
    }
}
