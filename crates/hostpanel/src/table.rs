/// Box-drawn table with one column per header.
pub struct TableFormatter {
    headers: Vec<String>,
    widths: Vec<usize>,
}

/// Widest a column may grow before cells are truncated.
const MAX_COLUMN_WIDTH: usize = 40;

impl TableFormatter {
    pub fn new(headers: &[&str], rows: &[Vec<String>]) -> Self {
        let widths = headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                rows.iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.chars().count())
                    .max()
                    .unwrap_or(0)
                    .max(header.chars().count())
                    .min(MAX_COLUMN_WIDTH)
            })
            .collect();

        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            widths,
        }
    }

    pub fn print_table(&self, rows: &[Vec<String>], empty_message: &str) {
        print!("{}", self.render(rows, empty_message));
    }

    /// Render the whole table; an empty `rows` yields a single row with
    /// `empty_message` spanning all columns.
    pub fn render(&self, rows: &[Vec<String>], empty_message: &str) -> String {
        let mut out = String::new();
        out.push_str(&self.border('┌', '┬', '┐'));
        out.push_str(&self.row(&self.headers));
        out.push_str(&self.border('├', '┼', '┤'));

        if rows.is_empty() {
            // Inner width: every column plus its padding and the separators between.
            let span = self.widths.iter().map(|w| w + 3).sum::<usize>().saturating_sub(3);
            out.push_str(&format!(
                "│ {:<span$} │\n",
                truncate(empty_message, span),
                span = span
            ));
        } else {
            for row in rows {
                out.push_str(&self.row(row));
            }
        }

        out.push_str(&self.border('└', '┴', '┘'));
        out
    }

    fn row(&self, cells: &[String]) -> String {
        let rendered: Vec<String> = self
            .widths
            .iter()
            .enumerate()
            .map(|(i, &width)| {
                let cell = cells.get(i).map(String::as_str).unwrap_or("");
                format!("{:<width$}", truncate(cell, width), width = width)
            })
            .collect();
        format!("│ {} │\n", rendered.join(" │ "))
    }

    fn border(&self, left: char, middle: char, right: char) -> String {
        let segments: Vec<String> = self.widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}\n", left, segments.join(&middle.to_string()), right)
    }
}

pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}
