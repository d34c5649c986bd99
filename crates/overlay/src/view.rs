use crate::annotation::{AnnotationRecord, Overlay};
use crate::mapper::LineAnnotationMapper;
use crate::types::{MetricSet, SourceDocument};

/// Rendering side of an overlay: whatever owns the visible lines.
///
/// Records are handed over already formatted; implementations must not
/// reformat field values.
pub trait LineDecorator {
    /// Drop decorations left over from a previous bind
    fn clear(&mut self);

    /// Attach `record` to the line at `record.line_index`
    fn decorate(&mut self, record: &AnnotationRecord);

    /// Bring the 1-based `line` into view
    fn scroll_to(&mut self, line: u32);
}

impl Overlay {
    /// Push every record to `decorator`, then issue the scroll request
    pub fn apply_to<D: LineDecorator + ?Sized>(&self, decorator: &mut D) {
        decorator.clear();
        for record in self.records() {
            decorator.decorate(record);
        }
        if let Some(line) = self.navigation().scroll_target() {
            decorator.scroll_to(line);
        }
    }
}

/// A document bound to its metrics, plus the overlay built from them.
///
/// Every [`SourceView::rebind`] rebuilds the overlay from scratch; nothing
/// is carried over between binds.
#[derive(Debug, Clone, Default)]
pub struct SourceView {
    mapper: LineAnnotationMapper,
    document: SourceDocument,
    metrics: MetricSet,
    overlay: Overlay,
}

impl SourceView {
    #[must_use]
    pub fn new(mapper: LineAnnotationMapper) -> Self {
        Self {
            mapper,
            ..Default::default()
        }
    }

    /// Bind a new document and metric set
    pub fn rebind(&mut self, document: SourceDocument, metrics: MetricSet) -> &Overlay {
        self.overlay = self.mapper.annotate(&document, &metrics);
        self.document = document;
        self.metrics = metrics;
        log::debug!(
            "source view bound: {} lines, {} metrics, {} records",
            self.document.line_count(),
            self.metrics.len(),
            self.overlay.len()
        );
        &self.overlay
    }

    /// Rebind and push the result straight to `decorator`
    pub fn rebind_into<D: LineDecorator + ?Sized>(
        &mut self,
        document: SourceDocument,
        metrics: MetricSet,
        decorator: &mut D,
    ) {
        self.rebind(document, metrics);
        self.overlay.apply_to(decorator);
    }

    #[must_use]
    pub const fn document(&self) -> &SourceDocument {
        &self.document
    }

    #[must_use]
    pub const fn metrics(&self) -> &MetricSet {
        &self.metrics
    }

    #[must_use]
    pub const fn overlay(&self) -> &Overlay {
        &self.overlay
    }
}
