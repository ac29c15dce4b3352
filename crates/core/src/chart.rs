use crate::models::AnalysisReport;

pub const DEFAULT_CHART_WIDTH: usize = 40;
const BAR_GLYPH: char = '█';

/// Horizontal bar chart of occurrences per document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarChart {
    pub title: String,
    pub labels: Vec<String>,
    pub counts: Vec<usize>,
}

impl BarChart {
    pub fn from_report(report: &AnalysisReport) -> Self {
        Self {
            title: format!("Occurrences of «{}» per PDF", report.phrase),
            labels: report.rows.iter().map(|row| row.document.clone()).collect(),
            counts: report.rows.iter().map(|row| row.occurrences).collect(),
        }
    }

    /// Bars are scaled so the largest count spans `width` cells. A non-zero
    /// count gets at least one cell unless `width` is zero.
    pub fn render(&self, width: usize) -> String {
        let mut out = String::new();
        out.push_str(&self.title);
        out.push('\n');

        let label_width = self
            .labels
            .iter()
            .map(|label| label.chars().count())
            .max()
            .unwrap_or(0);
        let max_count = self.counts.iter().copied().max().unwrap_or(0);

        for (label, count) in self.labels.iter().zip(&self.counts) {
            let cells = bar_cells(*count, max_count, width);
            let padding = label_width - label.chars().count();

            out.push_str(label);
            out.extend(std::iter::repeat(' ').take(padding));
            out.push_str(" | ");
            out.extend(std::iter::repeat(BAR_GLYPH).take(cells));
            if cells > 0 {
                out.push(' ');
            }
            out.push_str(&count.to_string());
            out.push('\n');
        }

        out
    }
}

fn bar_cells(count: usize, max_count: usize, width: usize) -> usize {
    if count == 0 || max_count == 0 {
        return 0;
    }

    (count.saturating_mul(width) / max_count).max(1).min(width)
}
