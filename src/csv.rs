// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Whole table as one string. Header line only when `headers` is given.
pub fn to_delimited(headers: Option<&[String]>, rows: &[Vec<String>], sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    // writes into a Vec cannot fail
    if let Some(h) = headers {
        let _ = write_row(&mut buf, h, sep);
    }
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

/* ---------------- Parsing ---------------- */

/// Minimal CSV/TSV reader (quotes + CRLF tolerant), the inverse of `write_row`.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && matches!(chars.peek(), Some('"')) => {
                chars.next(); // doubled quote
                field.push('"');
            }
            '"' => in_quotes = !in_quotes,
            c if c == sep && !in_quotes => row.push(take(&mut field)),
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                if row.len() == 1 && row[0].is_empty() {
                    row.clear();
                } else {
                    rows.push(take(&mut row));
                }
            }
            _ => field.push(ch),
        }
    }

    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_only_when_needed() {
        let row = vec![s!("FAQ Depth"), s!("Add 5-10 FAQs, with answers"), s!("say \"hi\"")];
        let out = to_delimited(None, &[row], ',');
        assert_eq!(out, "FAQ Depth,\"Add 5-10 FAQs, with answers\",\"say \"\"hi\"\"\"\n");
    }

    #[test]
    fn tab_separator_leaves_commas_alone() {
        let out = to_delimited(Some(&[s!("a"), s!("b")]), &[vec![s!("x, y"), s!("z")]], '\t');
        assert_eq!(out, "a\tb\nx, y\tz\n");
    }

    #[test]
    fn parse_reads_back_written_rows() {
        let rows = vec![
            vec![s!("Press / Best Of Mentions"), s!("POOR"), s!("line one\nline two")],
            vec![s!("Mobile UX & Speed"), s!("GOOD"), s!("\"quoted\", and comma")],
        ];
        let text = to_delimited(None, &rows, ',');
        assert_eq!(parse_rows(&text, ','), rows);
    }
}
