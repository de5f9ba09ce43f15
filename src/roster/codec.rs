//! # Line Codec
//!
//! Records are persisted one per line as delimiter-separated fields. Plain
//! fields are written verbatim, so a file holding only plain values reads
//! exactly like a hand-written comma-separated list:
//!
//! ```text
//! Alice,R1,CS,3.5,555-0100
//! ```
//!
//! A field containing the delimiter, a quote or a line break is wrapped in
//! double quotes, with embedded quotes doubled:
//!
//! ```text
//! "Doe, Jane",R2,"Math ""Honors""",3.9,555-0101
//! ```
//!
//! Inside quotes, line breaks are written as `\n` / `\r` and a backslash as
//! `\\`, so every record occupies exactly one physical line. Unquoted fields
//! never contain line breaks and keep their backslashes verbatim.
//!
//! Splitting never fails. Malformed quoting (an unterminated quote, or text
//! after a closing quote) is read leniently instead of being rejected.

pub const DELIMITER: char = ',';
const QUOTE: char = '"';
const ESCAPE: char = '\\';

/// Joins fields into a single line, quoting only the fields that need it.
pub fn join_fields<I, S>(fields: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut line = String::new();
    for (i, field) in fields.into_iter().enumerate() {
        if i > 0 {
            line.push(DELIMITER);
        }
        push_field(&mut line, field.as_ref());
    }
    line
}

fn needs_quoting(field: &str) -> bool {
    field
        .chars()
        .any(|c| c == DELIMITER || c == QUOTE || c == '\n' || c == '\r')
}

fn push_field(line: &mut String, field: &str) {
    if !needs_quoting(field) {
        line.push_str(field);
        return;
    }

    line.push(QUOTE);
    for c in field.chars() {
        match c {
            QUOTE => line.push_str("\"\""),
            ESCAPE => line.push_str("\\\\"),
            '\n' => line.push_str("\\n"),
            '\r' => line.push_str("\\r"),
            _ => line.push(c),
        }
    }
    line.push(QUOTE);
}

/// Splits a line into its fields.
///
/// An empty line yields a single empty field, mirroring `join_fields(&[""])`.
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut chars = line.chars().peekable();
    let mut at_field_start = true;
    let mut in_quotes = false;

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                QUOTE if chars.peek() == Some(&QUOTE) => {
                    chars.next();
                    current.push(QUOTE);
                }
                QUOTE => in_quotes = false,
                ESCAPE => match chars.peek().copied() {
                    Some('n') => {
                        chars.next();
                        current.push('\n');
                    }
                    Some('r') => {
                        chars.next();
                        current.push('\r');
                    }
                    Some(ESCAPE) => {
                        chars.next();
                        current.push(ESCAPE);
                    }
                    // unknown escapes stay literal
                    _ => current.push(ESCAPE),
                },
                _ => current.push(c),
            }
            continue;
        }

        if c == DELIMITER {
            fields.push(std::mem::take(&mut current));
            at_field_start = true;
            continue;
        }

        if c == QUOTE && at_field_start {
            in_quotes = true;
        } else {
            current.push(c);
        }
        at_field_start = false;
    }

    fields.push(current);
    fields
}
