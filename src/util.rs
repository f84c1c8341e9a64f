use chrono::{DateTime, Datelike, Utc};
use std::fmt::Write;

pub fn year_of(timestamp: &DateTime<Utc>) -> i32 {
    timestamp.year()
}

/// Replace every character outside printable 7-bit ASCII with a decimal
/// numeric character reference. Newlines pass through untouched.
pub fn escape_non_ascii(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c == '\n' || (' '..='~').contains(&c) {
            out.push(c);
        } else {
            let _ = write!(out, "&#{};", c as u32);
        }
    }
    out
}
