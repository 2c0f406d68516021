//! GGON Format Reference
//!
//! This module documents the GGON (Gang Garrison Object Notation) text
//! produced by this crate. It contains no code.
//!
//! # Overview
//!
//! GGON is the compact notation used by Gang Garrison 2 for configuration and
//! save data. It has two container forms, lists and maps, and a single leaf
//! type, the string. There is no whitespace between tokens.
//!
//! # Grammar
//!
//! ```text
//! value   := simple_string | quoted_string | list | map
//! list    := '[' ']' | '[' value (',' value)* ']'
//! map     := '{' '}' | '{' pair (',' pair)* '}'
//! pair    := (simple_string | quoted_string) ':' value
//! ```
//!
//! ## Strings
//!
//! A string is written bare when it is non-empty and every character is an
//! ASCII letter, a digit, `_`, `.`, `+` or `-`:
//!
//! ```rust
//! use ggon::{encode, Value};
//!
//! assert_eq!(encode(&Value::from("Gang_Garrison-2.3+")).unwrap(), "Gang_Garrison-2.3+");
//! ```
//!
//! Anything else, including the empty string, is wrapped in single quotes.
//! Inside the quotes:
//!
//! | Character | Written as |
//! |-----------|------------|
//! | `'` | `\'` |
//! | `\` | `\\` |
//! | newline | `\n` |
//! | carriage return | `\r` |
//! | tab | `\t` |
//! | NUL | `\0` |
//!
//! Every other character, including other control characters and non-ASCII
//! text, is written as is.
//!
//! ```rust
//! use ggon::{encode, Value};
//!
//! assert_eq!(encode(&Value::from("")).unwrap(), "''");
//! assert_eq!(encode(&Value::from("don't\tstop")).unwrap(), r"'don\'t\tstop'");
//! ```
//!
//! # Lists and Maps
//!
//! Lists and maps share one in-memory shape, the [`GgonMap`](crate::GgonMap).
//! A container is a list of length `N` when it has a `length` entry whose
//! text is all digits (`N`, empty meaning zero), holds exactly `N + 1`
//! entries, and has integer keys `0` through `N - 1`. The `length` entry
//! itself is not written.
//!
//! ```rust
//! use ggon::{encode, ggon};
//!
//! assert_eq!(encode(&ggon!({ "length": "2", 0: "x", 1: "y" })).unwrap(), "[x,y]");
//! assert_eq!(encode(&ggon!({ "length": "2", 0: "x" })).unwrap(), "{length:2,0:x}");
//! assert_eq!(encode(&ggon!({ "length": "" })).unwrap(), "[]");
//! ```
//!
//! Maps write their entries in insertion order. Integer keys are written as
//! their decimal text.
//!
//! # Numbers
//!
//! GGON has no number type. With numeric coercion enabled, integers and
//! floats are written as their decimal text and then follow the string rules;
//! without it they are rejected.
//!
//! ```rust
//! use ggon::{encode, encode_with_options, EncodeOptions, Value};
//!
//! assert_eq!(
//!     encode_with_options(&Value::from(-2.5), EncodeOptions::coerced()).unwrap(),
//!     "-2.5"
//! );
//! assert!(encode(&Value::from(-2.5)).is_err());
//! ```
//!
//! # Not Representable
//!
//! `null` and booleans have no GGON form. Encoding them, or a number without
//! coercion, fails with [`Error::UnencodableType`](crate::Error::UnencodableType)
//! and produces no output.
