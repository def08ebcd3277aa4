use unicode_width::UnicodeWidthStr;

/// Render an aligned plain-text table.
///
/// Column widths are measured in display columns, not bytes, so names with
/// wide glyphs keep the grid straight. The last column is never padded.
pub fn render(headers: &[&str], rows: &[Vec<String>]) -> String {
    let columns = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(columns) {
            widths[i] = widths[i].max(cell.width());
        }
    }

    let mut out = String::new();
    push_row(&mut out, headers, &widths);
    for row in rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        push_row(&mut out, &cells, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[&str], widths: &[usize]) {
    for (i, cell) in cells.iter().enumerate() {
        out.push_str(cell);
        if i + 1 < cells.len() {
            let pad = widths[i].saturating_sub(cell.width()) + 2;
            for _ in 0..pad {
                out.push(' ');
            }
        }
    }
    out.push('\n');
}
