//! Bordered text tables sized by display width.

use std::io::Write;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::error::Result;

/// Cells wider than this are truncated with `..`.
const MAX_COLUMN_WIDTH: usize = 48;

#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(col, header)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(col))
                    .map(|cell| UnicodeWidthStr::width(cell.as_str()))
                    .chain(std::iter::once(UnicodeWidthStr::width(header.as_str())))
                    .max()
                    .unwrap_or(0)
                    .min(MAX_COLUMN_WIDTH)
            })
            .collect()
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        let widths = self.widths();
        let border = border(&widths);

        writeln!(out, "{}", border)?;
        writeln!(out, "{}", line(&self.headers, &widths))?;
        writeln!(out, "{}", border)?;
        for row in &self.rows {
            writeln!(out, "{}", line(row, &widths))?;
        }
        writeln!(out, "{}", border)?;
        Ok(())
    }
}

fn border(widths: &[usize]) -> String {
    let mut s = String::from("+");
    for width in widths {
        s.push_str(&"-".repeat(width + 2));
        s.push('+');
    }
    s
}

fn line(cells: &[String], widths: &[usize]) -> String {
    let mut s = String::from("|");
    for (col, width) in widths.iter().enumerate() {
        let cell = cells.get(col).map(String::as_str).unwrap_or("");
        s.push(' ');
        s.push_str(&pad_right(cell, *width));
        s.push_str(" |");
    }
    s
}

/// Truncate to `width` display columns, marking the cut with `..`.
fn truncate_display(s: &str, width: usize) -> String {
    if UnicodeWidthStr::width(s) <= width {
        return s.to_string();
    }
    if width < 3 {
        return s
            .chars()
            .find(|ch| UnicodeWidthChar::width(*ch).unwrap_or(0) <= width)
            .map(String::from)
            .unwrap_or_default();
    }

    let budget = width - 2;
    let mut used = 0;
    let mut end = 0;
    for (i, ch) in s.char_indices() {
        let cw = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + cw > budget {
            break;
        }
        used += cw;
        end = i + ch.len_utf8();
    }
    format!("{}..", &s[..end])
}

fn pad_right(s: &str, width: usize) -> String {
    let cut = truncate_display(s, width);
    let used = UnicodeWidthStr::width(cut.as_str());
    format!("{}{}", cut, " ".repeat(width.saturating_sub(used)))
}
