//! Template-based record formatting
//!
//! A template is compiled once into a sequence of pieces; rendering then
//! walks the pieces in linear time over the output length with no per-call
//! parsing and no global lookups. Each writer compiles its template at
//! construction and reuses it for every record.
//!
//! Recognized placeholders:
//!
//! | Placeholder | Expansion                       |
//! |-------------|---------------------------------|
//! | `%T`        | time, `HH:MM`                   |
//! | `%t`        | full time, `HH:MM:SS TZ`        |
//! | `%D`        | date, `MM/DD/YY`                |
//! | `%d`        | full date, `YYYY/MM/DD`         |
//! | `%L`        | 4-char level code               |
//! | `%S`        | record source                   |
//! | `%M`        | record message                  |
//! | `%%`        | literal `%`                     |
//!
//! Anything else after a `%` is kept as literal text; formatting never fails.
//! Rendered output always ends with a newline.

use super::record::Record;
use std::fmt::Write;

/// Long form: `[2009/02/13 23:31:30 UTC] [EROR] (source) message`
pub const FORMAT_DEFAULT: &str = "[%d %t] [%L] (%S) %M";
/// Short form: `[23:31 02/13/09] [EROR] message`
pub const FORMAT_SHORT: &str = "[%T %D] [%L] %M";
/// Abbreviated form: `[EROR] message`
pub const FORMAT_ABBREV: &str = "[%L] %M";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece {
    Literal(String),
    TimeShort,
    TimeFull,
    DateShort,
    DateFull,
    Level,
    Source,
    Message,
}

/// A compiled format template.
#[derive(Debug, Clone)]
pub struct RecordFormat {
    pieces: Vec<Piece>,
}

impl RecordFormat {
    /// Parse `template` into its piece sequence.
    pub fn compile(template: &str) -> Self {
        let mut pieces = Vec::new();
        let mut literal = String::new();
        let mut chars = template.chars();

        fn flush(literal: &mut String, pieces: &mut Vec<Piece>) {
            if !literal.is_empty() {
                pieces.push(Piece::Literal(std::mem::take(literal)));
            }
        }

        while let Some(ch) = chars.next() {
            if ch != '%' {
                literal.push(ch);
                continue;
            }
            match chars.next() {
                Some('T') => {
                    flush(&mut literal, &mut pieces);
                    pieces.push(Piece::TimeShort);
                }
                Some('t') => {
                    flush(&mut literal, &mut pieces);
                    pieces.push(Piece::TimeFull);
                }
                Some('D') => {
                    flush(&mut literal, &mut pieces);
                    pieces.push(Piece::DateShort);
                }
                Some('d') => {
                    flush(&mut literal, &mut pieces);
                    pieces.push(Piece::DateFull);
                }
                Some('L') => {
                    flush(&mut literal, &mut pieces);
                    pieces.push(Piece::Level);
                }
                Some('S') => {
                    flush(&mut literal, &mut pieces);
                    pieces.push(Piece::Source);
                }
                Some('M') => {
                    flush(&mut literal, &mut pieces);
                    pieces.push(Piece::Message);
                }
                Some('%') => literal.push('%'),
                // Unknown placeholders degrade to literal text.
                Some(other) => {
                    literal.push('%');
                    literal.push(other);
                }
                None => literal.push('%'),
            }
        }
        flush(&mut literal, &mut pieces);

        Self { pieces }
    }

    /// Render `record` through this template, appending a trailing newline.
    pub fn render(&self, record: &Record) -> String {
        let mut out = String::with_capacity(64 + record.message.len());
        for piece in &self.pieces {
            match piece {
                Piece::Literal(text) => out.push_str(text),
                Piece::TimeShort => {
                    let _ = write!(out, "{}", record.created.format("%H:%M"));
                }
                Piece::TimeFull => {
                    let _ = write!(out, "{}", record.created.format("%H:%M:%S %Z"));
                }
                Piece::DateShort => {
                    let _ = write!(out, "{}", record.created.format("%m/%d/%y"));
                }
                Piece::DateFull => {
                    let _ = write!(out, "{}", record.created.format("%Y/%m/%d"));
                }
                Piece::Level => out.push_str(record.level.short_code()),
                Piece::Source => out.push_str(&record.source),
                Piece::Message => out.push_str(&record.message),
            }
        }
        out.push('\n');
        out
    }
}

impl Default for RecordFormat {
    fn default() -> Self {
        Self::compile(FORMAT_DEFAULT)
    }
}
