//! Record header templates.
//!
//! A template is literal text with a few expansions:
//!
//! | sequence        | expands to                                        |
//! |-----------------|---------------------------------------------------|
//! | `%D{...}`       | date block, see below                             |
//! | `%q` (in block) | milliseconds of the record timestamp, `0..=999`   |
//! | `%x` (in block) | strftime conversion `%x` of the record timestamp  |
//! | `F`             | source file of the call site                      |
//! | `M`             | function (or module) of the call site             |
//! | `L`             | line of the call site                             |
//! | `S`             | severity name                                     |
//! | `%%`            | a literal `%` (outside a date block)              |
//!
//! `F`, `M`, `L` and `S` are recognized anywhere outside a `%` conversion of a
//! date block, with or without a leading `%`. `D`, `{` and `}` are markers and
//! are never copied to the output, even after a `%` inside a date block: there
//! `%D` and `%{` are markers, `%}` closes the block and `%%` escapes the next
//! character again, so none of them reach strftime.
//!
//! Rendering never fails: an unknown conversion expands to nothing, a `%`
//! followed by an ordinary character outside a date block yields that
//! character, and a trailing `%` or an unmatched `}` is dropped.

use std::fmt::{self, Write};

use chrono::{
    DateTime, TimeZone,
    format::{Item, StrftimeItems},
};

use crate::{config::REGLOG_CONFIG, severity::Severity};

/// Call-site information of one record.
#[derive(Debug, Clone, Copy)]
pub struct RecordContext<'a> {
    pub file: &'a str,
    pub function: &'a str,
    pub line: u32,
    pub severity: Severity,
}

#[derive(Debug, Default)]
struct ScanState {
    /// `D` seen since the last `}`.
    in_date_block: bool,
    /// `{` seen since the last `}`.
    date_key_seen: bool,
    /// previous character was an unconsumed `%`.
    escaped: bool,
}

impl ScanState {
    fn in_open_date_block(&self) -> bool {
        self.in_date_block && self.date_key_seen
    }

    fn close_date_block(&mut self) {
        self.in_date_block = false;
        self.date_key_seen = false;
    }
}

/// A header template, ready to render.
#[derive(Debug, Clone, Copy)]
pub struct HeaderTemplate<'a> {
    template: &'a str,
    date_field_max_len: usize,
}

impl<'a> HeaderTemplate<'a> {
    pub fn new(template: &'a str) -> Self {
        Self {
            template,
            date_field_max_len: REGLOG_CONFIG.DATE_FIELD_MAX_LEN,
        }
    }

    /// Caps the output of each strftime conversion at `max_len` bytes.
    pub fn with_date_field_max_len(self, max_len: usize) -> Self {
        Self {
            date_field_max_len: max_len,
            ..self
        }
    }

    /// Renders the header of a record emitted at `at`.
    pub fn render<Tz>(&self, ctx: &RecordContext<'_>, at: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let mut out = String::with_capacity(self.template.len() + 32);
        let mut state = ScanState::default();
        for c in self.template.chars() {
            if !std::mem::take(&mut state.escaped) {
                if c == '%' {
                    state.escaped = true;
                } else {
                    push_plain(&mut out, &mut state, c, ctx);
                }
                continue;
            }
            if state.in_open_date_block() {
                match c {
                    '}' => state.close_date_block(),
                    'D' | '{' => push_plain(&mut out, &mut state, c, ctx),
                    '%' => state.escaped = true,
                    'q' => {
                        let _ = write!(out, "{}", at.timestamp_subsec_millis() % 1000);
                    }
                    _ => self.push_date_field(&mut out, c, at),
                }
            } else if c == '%' {
                out.push('%');
            } else {
                push_plain(&mut out, &mut state, c, ctx);
            }
        }
        out
    }

    fn push_date_field<Tz>(&self, out: &mut String, conversion: char, at: &DateTime<Tz>)
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let spec = format!("%{conversion}");
        if StrftimeItems::new(&spec).any(|item| matches!(item, Item::Error)) {
            return;
        }
        let mut field = String::new();
        if write!(field, "{}", at.format(&spec)).is_err() {
            return;
        }
        truncate_at_char_boundary(&mut field, self.date_field_max_len);
        out.push_str(&field);
    }
}

/// Handles a character that is not the target of a date conversion.
fn push_plain(out: &mut String, state: &mut ScanState, c: char, ctx: &RecordContext<'_>) {
    match c {
        'D' => state.in_date_block = true,
        '{' => state.date_key_seen = true,
        '}' => state.close_date_block(),
        'F' => out.push_str(ctx.file),
        'M' => out.push_str(ctx.function),
        'L' => {
            let _ = write!(out, "{}", ctx.line);
        }
        'S' => out.push_str(ctx.severity.name()),
        _ => out.push(c),
    }
}

fn truncate_at_char_boundary(s: &mut String, max_len: usize) {
    if s.len() <= max_len {
        return;
    }
    let mut end = max_len;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    s.truncate(end);
}
