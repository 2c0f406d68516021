//! Configuration options for GGON encoding.
//!
//! GGON output has no layout knobs: there is no whitespace, no delimiter
//! choice and no indentation. What callers can choose is which inputs are
//! accepted:
//!
//! - **Numeric coercion**: numbers are rejected by default; with coercion on
//!   they are written as their decimal text
//! - **Depth limit**: an optional bound on container nesting
//!
//! ## Examples
//!
//! ```rust
//! use ggon::{encode_with_options, EncodeOptions, Value};
//!
//! let options = EncodeOptions::new().with_coerce_numbers(true);
//! assert_eq!(encode_with_options(&Value::from(7), options).unwrap(), "7");
//! ```

/// Configuration options for GGON encoding.
///
/// # Examples
///
/// ```rust
/// use ggon::EncodeOptions;
///
/// // Strict: numbers are an error
/// let options = EncodeOptions::new();
/// assert!(!options.coerce_numbers);
///
/// // Numbers written as text, nesting capped at 32
/// let options = EncodeOptions::coerced().with_max_depth(32);
/// assert!(options.coerce_numbers);
/// assert_eq!(options.max_depth, Some(32));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Encode numbers as their decimal text instead of failing.
    pub coerce_numbers: bool,
    /// Maximum container nesting. `None` leaves recursion unbounded.
    pub max_depth: Option<usize>,
}

impl EncodeOptions {
    /// Creates default options (no numeric coercion, no depth limit).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options with numeric coercion enabled.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ggon::EncodeOptions;
    ///
    /// assert!(EncodeOptions::coerced().coerce_numbers);
    /// ```
    #[must_use]
    pub fn coerced() -> Self {
        EncodeOptions {
            coerce_numbers: true,
            ..Default::default()
        }
    }

    /// Sets whether numbers are written as text.
    #[must_use]
    pub fn with_coerce_numbers(mut self, coerce: bool) -> Self {
        self.coerce_numbers = coerce;
        self
    }

    /// Limits container nesting. The outermost container is depth 1.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ggon::{encode_with_options, ggon, EncodeOptions, Error};
    ///
    /// let nested = ggon!([[["deep"]]]);
    /// let options = EncodeOptions::new().with_max_depth(2);
    /// assert_eq!(
    ///     encode_with_options(&nested, options),
    ///     Err(Error::DepthExceeded { max_depth: 2 })
    /// );
    /// ```
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}
