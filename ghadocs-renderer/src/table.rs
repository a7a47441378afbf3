//! Fixed-width markdown table rendering.

/// Render a header plus data rows as an aligned markdown table.
///
/// Column width is the maximum raw character count among the header cell and
/// every data cell in that column. Output is header row, a `-`-filled
/// separator row, then the data rows; each cell is left-aligned and padded to
/// its column width. Cell content is trusted to be single-line — callers
/// strip newlines before this stage, and nothing is escaped here.
///
/// A header with no rows is valid input and renders header + separator only;
/// the wholly-absent case (no table at all) is the caller's fallback.
pub fn render(header: &[String], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = header
        .iter()
        .enumerate()
        .map(|(col, head)| {
            rows.iter()
                .map(|row| cell(row, col).chars().count())
                .chain([head.chars().count()])
                .max()
                .unwrap_or(0)
        })
        .collect();

    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();

    let mut result = String::new();
    render_row(&mut result, header, &widths);
    render_row(&mut result, &separator, &widths);
    for row in rows {
        render_row(&mut result, row, &widths);
    }
    result
}

fn render_row(out: &mut String, row: &[String], widths: &[usize]) {
    for (col, &width) in widths.iter().enumerate() {
        out.push_str(&format!("| {: <width$} ", cell(row, col)));
    }
    out.push_str("|\n");
}

fn cell(row: &[String], col: usize) -> &str {
    row.get(col).map(String::as_str).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(items: &[&str]) -> Vec<String> {
        items.iter().map(|i| i.to_string()).collect()
    }

    #[test]
    fn columns_pad_to_longest_value() {
        let out = render(&s(&["k"]), &[s(&["xx"]), s(&["x"])]);
        assert_eq!(out, "| k  |\n| -- |\n| xx |\n| x  |\n");
    }

    #[test]
    fn header_wins_width_when_longest() {
        let out = render(&s(&["parameter", "required"]), &[s(&["a", "true"])]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "| parameter | required |");
        assert_eq!(lines[1], "| --------- | -------- |");
        assert_eq!(lines[2], "| a         | true     |");
    }

    #[test]
    fn rows_render_in_input_order() {
        let rows = vec![s(&["a", "1"]), s(&["b", "2"]), s(&["c", "3"])];
        let out = render(&s(&["p", "d"]), &rows);
        let data: Vec<&str> = out.lines().skip(2).collect();
        assert!(data[0].starts_with("| a"));
        assert!(data[1].starts_with("| b"));
        assert!(data[2].starts_with("| c"));
    }

    #[test]
    fn header_only_renders_header_and_separator() {
        let out = render(&s(&["parameter", "description"]), &[]);
        assert_eq!(out.lines().count(), 2);
    }
}
