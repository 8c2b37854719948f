//! Scalar coercion rules
//!
//! One total function per primitive target. None of them fail: data that
//! has no sensible reading as the target yields the target's zero value.
//!
//! | target | rule |
//! |--------|------|
//! | string | string as-is; `true` → `"1"`, `false` → `""`; numbers as text; else `""` |
//! | int | int as-is; bool → 1/0; float truncated toward zero; numeric string parsed; else 0 |
//! | float | float as-is; bool → 1.0/0.0; int widened; numeric string parsed; else 0.0 |
//! | bool | bool as-is; number → equals 1; string → one of `true y t yes 1` (any case); else false |
//!
//! A numeric string is optional ASCII whitespace, an optional sign, decimal
//! digits with an optional fraction and exponent, then optional whitespace.

use crate::value::Data;

/// Strings that coerce to `true`, compared case-insensitively
pub const TRUTHY_STRINGS: [&str; 5] = ["true", "y", "t", "yes", "1"];

/// A parsed numeric string
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
    /// Fits an `i64` and has no fraction or exponent
    Int(i64),
    /// Anything else numeric
    Float(f64),
}

/// Parse a numeric string, `None` when it is not numeric
pub fn parse_numeric(s: &str) -> Option<Numeric> {
    let t = s.trim_matches(|c: char| c.is_ascii_whitespace() || c == '\u{0b}');
    if !is_decimal_literal(t) {
        return None;
    }
    if let Ok(i) = t.parse::<i64>() {
        return Some(Numeric::Int(i));
    }
    t.parse::<f64>().ok().map(Numeric::Float)
}

/// `[+-]? (digits [. digits?]? | . digits) ([eE] [+-]? digits)?`
fn is_decimal_literal(t: &str) -> bool {
    let b = t.as_bytes();
    let mut i = 0;
    if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
        i += 1;
    }
    let int_start = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;
    if i < b.len() && b[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        digits += i - frac_start;
    }
    if digits == 0 {
        return false;
    }
    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        i += 1;
        if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
            i += 1;
        }
        let exp_start = i;
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }
    i == b.len()
}

/// Truncate toward zero, saturating at the `i64` bounds; NaN becomes 0
fn truncate(f: f64) -> i64 {
    f as i64
}

/// Coerce any value to a string
pub fn to_string_value(data: &Data) -> String {
    match data {
        Data::String(s) => s.clone(),
        Data::Bool(true) => "1".to_string(),
        Data::Bool(false) => String::new(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => f.to_string(),
        _ => String::new(),
    }
}

/// Coerce any value to an integer
pub fn to_int_value(data: &Data) -> i64 {
    match data {
        Data::Int(i) => *i,
        Data::Bool(b) => i64::from(*b),
        Data::Float(f) => truncate(*f),
        Data::String(s) => match parse_numeric(s) {
            Some(Numeric::Int(i)) => i,
            Some(Numeric::Float(f)) => truncate(f),
            None => 0,
        },
        _ => 0,
    }
}

/// Coerce any value to a float
pub fn to_float_value(data: &Data) -> f64 {
    match data {
        Data::Float(f) => *f,
        Data::Bool(true) => 1.0,
        Data::Bool(false) => 0.0,
        Data::Int(i) => *i as f64,
        Data::String(s) => match parse_numeric(s) {
            Some(Numeric::Int(i)) => i as f64,
            Some(Numeric::Float(f)) => f,
            None => 0.0,
        },
        _ => 0.0,
    }
}

/// Coerce any value to a boolean
pub fn to_bool_value(data: &Data) -> bool {
    match data {
        Data::Bool(b) => *b,
        Data::Int(i) => *i == 1,
        Data::Float(f) => *f == 1.0,
        Data::String(s) => {
            let lower = s.to_lowercase();
            TRUTHY_STRINGS.contains(&lower.as_str())
        }
        _ => false,
    }
}
