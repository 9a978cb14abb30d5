// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bundled transformers.
//!
//! Every bundled transformer treats an unset variable and an empty string the
//! same way: the value is absent, so a default (if any) applies.

use crate::domain::{ConfigValue, FieldError, Resolved};
use crate::ports::{SharedTransformer, Transformer};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// The bundled transformers.
///
/// `Str`, `Num` and `Bool` can also be selected by their textual aliases
/// (`"str"`, `"num"`, `"bool"`) in the positional argument form.
///
/// # Examples
///
/// ```rust
/// use hexenv::adapters::Kind;
/// use hexenv::domain::ConfigValue;
/// use hexenv::ports::Transformer;
///
/// assert_eq!(Kind::Num.transform(Some(" 42 "), "PORT").unwrap(), Some(ConfigValue::from(42)));
/// assert_eq!(Kind::Bool.transform(Some("TRUE"), "DEBUG").unwrap(), Some(ConfigValue::from(true)));
/// assert_eq!(Kind::Str.transform(Some(""), "NAME").unwrap(), None);
/// assert!(Kind::Num.transform(Some("abc"), "PORT").is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    /// The string as read.
    Str,
    /// A number, parsed leniently.
    Num,
    /// `true`/`1` or `false`/`0`, case-insensitive.
    Bool,
    /// A comma-separated list of strings.
    Csv,
    /// A JSON document.
    Json,
}

impl Kind {
    /// Looks up a transformer by its textual alias.
    ///
    /// Only `"str"`, `"num"` and `"bool"` are aliases; any other text is not.
    pub fn from_alias(alias: &str) -> Option<Kind> {
        match alias {
            "str" => Some(Kind::Str),
            "num" => Some(Kind::Num),
            "bool" => Some(Kind::Bool),
            _ => None,
        }
    }

    /// A short name for this transformer.
    pub fn name(self) -> &'static str {
        match self {
            Kind::Str => "str",
            Kind::Num => "num",
            Kind::Bool => "bool",
            Kind::Csv => "csv",
            Kind::Json => "json",
        }
    }

    /// Wraps this transformer for use in a value spec.
    pub fn shared(self) -> SharedTransformer {
        Arc::new(self)
    }
}

impl Default for Kind {
    fn default() -> Self {
        Kind::Str
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Transformer for Kind {
    fn transform(&self, raw: Option<&str>, var_name: &str) -> Resolved<ConfigValue> {
        let raw = match raw {
            None | Some("") => return Ok(None),
            Some(raw) => raw,
        };

        match self {
            Kind::Str => Ok(Some(ConfigValue::from(raw))),
            Kind::Num => match parse_number(raw) {
                Some(n) => Ok(Some(ConfigValue::Number(n))),
                None => Err(FieldError::new(
                    var_name,
                    format!("This value must be a number. You passed {}", raw),
                )),
            },
            Kind::Bool => {
                let lowered = raw.to_lowercase();
                match lowered.as_str() {
                    "true" | "1" => Ok(Some(ConfigValue::Bool(true))),
                    "false" | "0" => Ok(Some(ConfigValue::Bool(false))),
                    _ => Err(FieldError::new(
                        var_name,
                        format!(
                            "This value must look like a boolean ('true', 'false', '0' or '1'). You provided '{}'",
                            lowered
                        ),
                    )),
                }
            }
            Kind::Csv => Ok(Some(ConfigValue::List(split_csv(raw)))),
            Kind::Json => serde_json::from_str::<serde_json::Value>(raw)
                .map(|v| Some(ConfigValue::Json(v)))
                .map_err(|e| FieldError::new(var_name, format!("Invalid JSON string passed: {}", e))),
        }
    }
}

/// Parses a number the way a lenient numeric prompt would.
///
/// Surrounding whitespace is ignored and a blank string is zero. Accepts
/// decimal and exponent notation, `Infinity` with an optional sign, and
/// unsigned `0x`/`0o`/`0b` integers. Rejects `NaN` and Rust-only spellings
/// such as `inf`.
fn parse_number(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() {
        return Some(0.0);
    }

    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    let radix = match s.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &s[2..];
        if digits.is_empty() {
            return None;
        }
        return digits.chars().try_fold(0.0, |acc: f64, c| {
            c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
        });
    }

    let well_formed = s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !well_formed {
        return None;
    }
    f64::from_str(s).ok()
}

/// Splits on commas, dropping the spaces that touch each comma.
fn split_csv(raw: &str) -> Vec<String> {
    let pieces: Vec<&str> = raw.split(',').collect();
    let last = pieces.len() - 1;
    pieces
        .iter()
        .enumerate()
        .map(|(i, piece)| {
            let mut piece = *piece;
            if i > 0 {
                piece = piece.trim_start_matches(' ');
            }
            if i < last {
                piece = piece.trim_end_matches(' ');
            }
            piece.to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(raw: &str) -> Resolved<ConfigValue> {
        Kind::Num.transform(Some(raw), "N")
    }

    #[test]
    fn test_from_alias() {
        assert_eq!(Kind::from_alias("str"), Some(Kind::Str));
        assert_eq!(Kind::from_alias("num"), Some(Kind::Num));
        assert_eq!(Kind::from_alias("bool"), Some(Kind::Bool));
        assert_eq!(Kind::from_alias("csv"), None);
        assert_eq!(Kind::from_alias("NUM"), None);
    }

    #[test]
    fn test_empty_and_unset_are_absent() {
        for kind in [Kind::Str, Kind::Num, Kind::Bool, Kind::Csv, Kind::Json] {
            assert_eq!(kind.transform(None, "X").unwrap(), None, "{kind}");
            assert_eq!(kind.transform(Some(""), "X").unwrap(), None, "{kind}");
        }
    }

    #[test]
    fn test_str_keeps_whitespace() {
        assert_eq!(
            Kind::Str.transform(Some("  padded "), "X").unwrap(),
            Some(ConfigValue::from("  padded "))
        );
    }

    #[test]
    fn test_num_accepts() {
        assert_eq!(num("42").unwrap(), Some(ConfigValue::from(42)));
        assert_eq!(num(" -1.5 ").unwrap(), Some(ConfigValue::from(-1.5)));
        assert_eq!(num("1e3").unwrap(), Some(ConfigValue::from(1000)));
        assert_eq!(num(".5").unwrap(), Some(ConfigValue::from(0.5)));
        assert_eq!(num("0x1F").unwrap(), Some(ConfigValue::from(31)));
        assert_eq!(num("0o17").unwrap(), Some(ConfigValue::from(15)));
        assert_eq!(num("0b101").unwrap(), Some(ConfigValue::from(5)));
        assert_eq!(num("   ").unwrap(), Some(ConfigValue::from(0)));
        assert_eq!(num("-Infinity").unwrap(), Some(ConfigValue::Number(f64::NEG_INFINITY)));
    }

    #[test]
    fn test_num_accepts_wide_radix_literals() {
        let raw = format!("0x{}", "f".repeat(40));
        let value = num(&raw).unwrap().and_then(|v| v.as_f64()).unwrap();
        let expected = 16f64.powi(40);
        assert!((value - expected).abs() / expected < 1e-12);

        let raw = format!("0b1{}", "0".repeat(200));
        assert_eq!(num(&raw).unwrap(), Some(ConfigValue::Number(2f64.powi(200))));
    }

    #[test]
    fn test_num_rejects() {
        for raw in ["abc", "NaN", "nan", "inf", "infinity", "1_000", "0x", "0xZZ", "-0x10", "12px"] {
            assert!(num(raw).is_err(), "{raw} should be rejected");
        }
    }

    #[test]
    fn test_num_error_message() {
        let err = num("abc").unwrap_err();
        assert_eq!(err.var_name(), Some("N"));
        assert_eq!(err.messages(), ["This value must be a number. You passed abc"]);
    }

    #[test]
    fn test_bool() {
        for (raw, expected) in [("true", true), ("TRUE", true), ("1", true), ("False", false), ("0", false)] {
            assert_eq!(
                Kind::Bool.transform(Some(raw), "B").unwrap(),
                Some(ConfigValue::Bool(expected))
            );
        }
    }

    #[test]
    fn test_bool_error_message_is_lowercased() {
        let err = Kind::Bool.transform(Some("Yes"), "B").unwrap_err();
        assert_eq!(
            err.messages(),
            ["This value must look like a boolean ('true', 'false', '0' or '1'). You provided 'yes'"]
        );
    }

    #[test]
    fn test_csv() {
        assert_eq!(
            Kind::Csv.transform(Some("a, b ,c"), "C").unwrap(),
            Some(ConfigValue::from(vec!["a", "b", "c"]))
        );
        assert_eq!(
            Kind::Csv.transform(Some(" a ,b "), "C").unwrap(),
            Some(ConfigValue::from(vec![" a", "b "]))
        );
        assert_eq!(
            Kind::Csv.transform(Some("single"), "C").unwrap(),
            Some(ConfigValue::from(vec!["single"]))
        );
        assert_eq!(
            Kind::Csv.transform(Some("a,,b"), "C").unwrap(),
            Some(ConfigValue::from(vec!["a", "", "b"]))
        );
    }

    #[test]
    fn test_json() {
        let value = Kind::Json.transform(Some(r#"{"one":1}"#), "J").unwrap().unwrap();
        assert_eq!(value.as_json(), Some(&serde_json::json!({"one": 1})));

        let err = Kind::Json.transform(Some("{nope"), "J").unwrap_err();
        assert!(err.messages()[0].starts_with("Invalid JSON string passed: "));
    }

    #[test]
    fn test_kind_display_and_default() {
        assert_eq!(Kind::default(), Kind::Str);
        assert_eq!(Kind::Csv.to_string(), "csv");
    }
}
