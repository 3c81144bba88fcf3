//! Aligned text tables for `--format table`.

/// Narrowest a column may shrink to when fitting the terminal.
const MIN_COLUMN_WIDTH: usize = 6;

const SEPARATOR: &str = "  ";

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render `rows` under `headers`, one line per row.
///
/// Columns keep the order of `headers`. Numeric cells are right-aligned.
/// When `max_width` is set, the widest columns are shrunk first and their
/// cells truncated with an ellipsis.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| display_len(cell))
                .chain(std::iter::once(display_len(header)))
                .max()
                .unwrap_or(0)
        })
        .collect();

    if let Some(max_width) = options.max_width {
        shrink_to_fit(&mut widths, max_width);
    }

    let header_line = join_cells(headers.iter().zip(&widths).map(|(header, width)| {
        pad(&truncate(header, *width), *width, false)
    }));
    let divider = "-".repeat(display_len(&header_line));

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line);
    lines.push(divider);

    for row in rows {
        lines.push(join_cells(widths.iter().enumerate().map(|(index, width)| {
            let cell = row.get(index).map_or("-", String::as_str);
            let text = truncate(cell, *width);
            let padded = pad(&text, *width, is_numeric(&text));
            if options.color {
                colorize(&padded, &text)
            } else {
                padded
            }
        })));
    }

    lines.join("\n")
}

fn join_cells(cells: impl Iterator<Item = String>) -> String {
    cells.collect::<Vec<_>>().join(SEPARATOR).trim_end().to_string()
}

fn display_len(value: &str) -> usize {
    value.chars().count()
}

fn shrink_to_fit(widths: &mut [usize], max_width: usize) {
    let separators = widths.len().saturating_sub(1) * SEPARATOR.len();
    let mut total: usize = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        let Some((index, _)) = widths
            .iter()
            .enumerate()
            .filter(|(_, width)| **width > MIN_COLUMN_WIDTH)
            .max_by_key(|(_, width)| **width)
        else {
            break;
        };
        widths[index] -= 1;
        total -= 1;
    }
}

fn truncate(value: &str, width: usize) -> String {
    if display_len(value) <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }
    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(display_len(value)));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

fn is_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed.parse::<f64>().is_ok()
}

/// Color `padded` according to the cell value it contains.
fn colorize(padded: &str, value: &str) -> String {
    let code = match value.to_ascii_lowercase().as_str() {
        "active" | "true" => Some("32"),
        "planned" => Some("33"),
        "phd" | "expert" => Some("35"),
        "false" | "missing" => Some("2"),
        _ => None,
    };

    code.map_or_else(
        || padded.to_string(),
        |code| format!("\u{1b}[{code}m{padded}\u{1b}[0m"),
    )
}
