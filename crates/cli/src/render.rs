use hotspot_overlay::{AnnotationRecord, Column, LineDecorator};
use std::collections::BTreeMap;

const CELL_GAP: &str = "  ";

/// Plain-text source listing with the annotation columns in a left gutter
#[derive(Debug, Default)]
pub struct Listing {
    rows: BTreeMap<usize, Vec<String>>,
    scroll: Option<u32>,
}

impl LineDecorator for Listing {
    fn clear(&mut self) {
        self.rows.clear();
        self.scroll = None;
    }

    fn decorate(&mut self, record: &AnnotationRecord) {
        let cells = record
            .fields
            .iter()
            .map(|(_, value)| value.to_string())
            .collect();
        self.rows.insert(record.line_index, cells);
    }

    fn scroll_to(&mut self, line: u32) {
        self.scroll = Some(line);
    }
}

impl Listing {
    /// Render `lines` with their decorations
    pub fn render(&self, lines: &[&str]) -> String {
        let widths: Vec<usize> = (0..Column::COUNT)
            .map(|col| {
                self.rows
                    .values()
                    .map(|cells| cells[col].chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect();
        let number_width = lines.len().to_string().len();

        let mut out = String::new();
        if let Some(line) = self.scroll {
            out.push_str(&format!("-> line {line}\n"));
        }

        for (index, text) in lines.iter().enumerate() {
            if !self.rows.is_empty() {
                let gutter: Vec<String> = widths
                    .iter()
                    .enumerate()
                    .map(|(col, &width)| match self.rows.get(&index) {
                        Some(cells) => format!("{:>width$}", cells[col]),
                        None => " ".repeat(width),
                    })
                    .collect();
                out.push_str(&gutter.join(CELL_GAP));
                out.push_str(" | ");
            }
            out.push_str(&format!("{:>number_width$} {text}\n", index + 1));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotspot_overlay::{LineAnnotationMapper, LineMetric, MetricSet, SourceDocument};
    use pretty_assertions::assert_eq;

    fn listing_for(text: &str, focus: u32, metrics: &[LineMetric]) -> String {
        let document = SourceDocument::from_text(text, focus);
        let metrics: MetricSet = metrics.iter().copied().collect();
        let overlay = LineAnnotationMapper::default().annotate(&document, &metrics);
        let mut listing = Listing::default();
        overlay.apply_to(&mut listing);
        listing.render(&document.lines())
    }

    #[test]
    fn renders_gutter_and_scroll_marker() {
        let out = listing_for("a\nb\nc", 3, &[LineMetric::new(3, 50.0, 1.5, 10.0, 0.25)]);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "-> line 3");
        assert_eq!(lines[1], "TotalPercent  Total  SelfPercent  Self | 1 a");
        assert_eq!(
            lines[2],
            format!(
                "{}  {}  {}  {} | 2 b",
                " ".repeat(12),
                " ".repeat(5),
                " ".repeat(11),
                " ".repeat(4)
            )
        );
        assert_eq!(
            lines[3],
            format!(
                "{}50%  {}1.5  {}10%  0.25 | 3 c",
                " ".repeat(9),
                " ".repeat(2),
                " ".repeat(8)
            )
        );
    }

    #[test]
    fn empty_overlay_prints_plain_source() {
        let mut listing = Listing::default();
        listing.clear();
        assert_eq!(listing.render(&["x", "y"]), "1 x\n2 y\n");
    }

    #[test]
    fn line_numbers_are_right_aligned() {
        let text = (1..=10).map(|n| n.to_string()).collect::<Vec<_>>().join("\n");
        let out = listing_for(&text, 0, &[]);
        let last = out.lines().last().unwrap();
        assert!(last.ends_with("| 10 10"), "{last}");
        let first = out.lines().next().unwrap();
        assert!(first.ends_with("|  1 1"), "{first}");
    }
}
