use console::style;
use regbookapp::form::FormSnapshot;
use regbookapp::model::{Field, Record};
use regbookapp::validation::FieldErrors;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const MAX_CELL_WIDTH: usize = 32;
const ELLIPSIS: char = '…';

/// Columns shown in the table. The password is never displayed.
const COLUMNS: [Field; 5] = [
    Field::Name,
    Field::Email,
    Field::Gender,
    Field::Address,
    Field::City,
];

pub(super) fn print_success(message: &str) {
    println!("{}", style(message).green());
}

pub(super) fn print_field_errors(errors: &FieldErrors) {
    for (field, message) in errors.iter() {
        println!("  {} {}", style(format!("{}:", field)).bold(), style(message).red());
    }
}

pub(super) fn print_snapshot_json(snapshot: &FormSnapshot) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(snapshot)?);
    Ok(())
}

pub(super) fn print_records(records: &[Record]) {
    if records.is_empty() {
        println!("{}", style("No records yet.").dim());
        return;
    }
    print!("{}", render_table(records));
}

fn header(field: Field) -> &'static str {
    match field {
        Field::Name => "Name",
        Field::Email => "Email",
        Field::Password => "Password",
        Field::Gender => "Gender",
        Field::Address => "Address",
        Field::City => "City",
    }
}

/// Plain-text table; styling is left to the terminal's defaults.
pub(super) fn render_table(records: &[Record]) -> String {
    let index_width = records.len().to_string().len();
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|r| COLUMNS.iter().map(|f| cell(r.get(*f))).collect())
        .collect();

    let widths: Vec<usize> = COLUMNS
        .iter()
        .enumerate()
        .map(|(i, f)| {
            rows.iter()
                .map(|row| row[i].width())
                .chain(std::iter::once(header(*f).width()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    let headers: Vec<String> = COLUMNS.iter().map(|f| header(*f).to_string()).collect();
    out.push_str(&format_row(&" ".repeat(index_width + 1), &headers, &widths));
    for (i, row) in rows.iter().enumerate() {
        let index = format!("{:>width$}.", i + 1, width = index_width);
        out.push_str(&format_row(&index, row, &widths));
    }
    out
}

fn format_row(index: &str, cells: &[String], widths: &[usize]) -> String {
    let mut line = format!("{} ", index);
    for (cell, width) in cells.iter().zip(widths) {
        line.push_str(cell);
        line.push_str(&" ".repeat(width - cell.width() + 2));
    }
    format!("{}\n", line.trim_end())
}

/// Flattens line breaks (addresses are multi-line) and truncates to fit.
fn cell(value: &str) -> String {
    let flat: String = value
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    if flat.width() <= MAX_CELL_WIDTH {
        return flat;
    }

    let mut out = String::new();
    let mut used = 0;
    for c in flat.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > MAX_CELL_WIDTH {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push(ELLIPSIS);
    out
}
