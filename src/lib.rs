//! # ggon
//!
//! An encoder for GGON (Gang Garrison Object Notation).
//!
//! ## What is GGON?
//!
//! GGON is the compact text format Gang Garrison 2 uses for configuration
//! and save data. It knows strings, lists and maps, nothing else:
//!
//! ```text
//! {name:Scout,loadout:[scattergun,pistol],motd:'Welcome, friend!'}
//! ```
//!
//! ## Key Features
//!
//! - **Exact output**: quoting, escaping and list detection follow the rules
//!   the Gang Garrison ecosystem reads
//! - **One container shape**: lists and maps are both [`GgonMap`]s, classified
//!   at encode time
//! - **Serde Compatible**: any `T: Serialize` can be converted and encoded
//! - **No partial output**: encoding either returns the whole text or an
//!   [`Error`]
//!
//! ## Quick Start
//!
//! ### Encoding Values
//!
//! ```rust
//! use ggon::{encode, encode_with_options, ggon, EncodeOptions};
//!
//! let value = ggon!({
//!     "name": "Scout",
//!     "loadout": ["scattergun", "pistol"],
//!     "motd": "Welcome, friend!"
//! });
//!
//! assert_eq!(
//!     encode(&value).unwrap(),
//!     "{name:Scout,loadout:[scattergun,pistol],motd:'Welcome, friend!'}"
//! );
//!
//! // Numbers need coercion
//! let port = ggon!({ "port": 8190 });
//! assert!(encode(&port).is_err());
//! assert_eq!(
//!     encode_with_options(&port, EncodeOptions::coerced()).unwrap(),
//!     "{port:8190}"
//! );
//! ```
//!
//! ### Encoding Rust Types
//!
//! ```rust
//! use serde::Serialize;
//! use ggon::{to_string_with_options, EncodeOptions};
//!
//! #[derive(Serialize)]
//! struct Server {
//!     name: String,
//!     port: u16,
//!     maps: Vec<String>,
//! }
//!
//! let server = Server {
//!     name: "Test Server".to_string(),
//!     port: 8190,
//!     maps: vec!["ctf_truefort".to_string(), "cp_dirtbowl".to_string()],
//! };
//!
//! let text = to_string_with_options(&server, EncodeOptions::coerced()).unwrap();
//! assert_eq!(text, "{name:'Test Server',port:8190,maps:[ctf_truefort,cp_dirtbowl]}");
//! ```
//!
//! ## Limits
//!
//! Encoding recurses once per nested container. Inputs must have bounded
//! depth; set [`EncodeOptions::with_max_depth`] to turn runaway nesting into
//! [`Error::DepthExceeded`] instead of stack exhaustion.
//!
//! There is no decoder. See the [`format`] module for the output grammar.

pub mod error;
pub mod format;
pub mod macros;
pub mod map;
mod number;
pub mod options;
pub mod ser;
pub mod value;

pub use error::{Error, Result};
pub use map::{GgonMap, Key};
pub use options::EncodeOptions;
pub use ser::{Encoder, ValueSerializer};
pub use value::{Number, Value};

use serde::Serialize;

/// Encode a [`Value`] as GGON text, rejecting numbers.
///
/// # Examples
///
/// ```rust
/// use ggon::{encode, Value};
///
/// assert_eq!(encode(&Value::from("hello")).unwrap(), "hello");
/// assert_eq!(encode(&Value::from("hello world")).unwrap(), "'hello world'");
/// ```
///
/// # Errors
///
/// Returns [`Error::UnencodableType`] if the value contains a number, a
/// boolean or null.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode(value: &Value) -> Result<String> {
    encode_with_options(value, EncodeOptions::default())
}

/// Encode a [`Value`] as GGON text with custom options.
///
/// # Examples
///
/// ```rust
/// use ggon::{encode_with_options, EncodeOptions, Value};
///
/// let text = encode_with_options(&Value::from(3.14), EncodeOptions::coerced()).unwrap();
/// assert_eq!(text, "3.14");
/// ```
///
/// # Errors
///
/// Returns [`Error::UnencodableType`] at the first value GGON cannot
/// represent, or [`Error::DepthExceeded`] past a configured depth limit.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode_with_options(value: &Value, options: EncodeOptions) -> Result<String> {
    let mut encoder = Encoder::new(options);
    encoder.encode(value)?;
    Ok(encoder.into_inner())
}

/// Convert any `T: Serialize` to a [`Value`].
///
/// Sequences become list-shaped containers; structs and maps keep their
/// field order.
///
/// # Examples
///
/// ```rust
/// use ggon::{to_value, Value};
///
/// let value: Value = to_value(&vec!["a", "b"]).unwrap();
/// assert_eq!(value.as_container().and_then(|m| m.list_len()), Some(2));
/// ```
///
/// # Errors
///
/// Returns an error if a map key is neither text nor an integer.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Serialize any `T: Serialize` to a GGON string, rejecting numbers.
///
/// # Examples
///
/// ```rust
/// use ggon::to_string;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Player { name: String, team: String }
///
/// let player = Player { name: "Medic".to_string(), team: "red".to_string() };
/// assert_eq!(to_string(&player).unwrap(), "{name:Medic,team:red}");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be converted or contains a kind GGON
/// cannot represent.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, EncodeOptions::default())
}

/// Serialize any `T: Serialize` to a GGON string with custom options.
///
/// # Errors
///
/// Returns an error if the value cannot be converted or encoded.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: EncodeOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    encode_with_options(&to_value(value)?, options)
}
