//! # Parsing and serialization options
//!
//! Both option structs have defaults that suit untrusted input. With the `json` feature enabled
//! they can also be deserialized, e.g. from a host's JSON configuration, where missing keys fall
//! back to their defaults.

/// Options that bound what the parser accepts.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(
    feature = "json",
    derive(serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct ParseOptions {
    /// How deeply selection sets, list values, object values and list types may nest.
    ///
    /// Exceeding this depth fails the parse with a syntax error instead of exhausting the stack.
    /// The parser recurses once per level, so setting this field directly to a value far above
    /// [`ParseOptions::MAX_DEPTH_CEILING`] may overflow the stack on adversarial input.
    /// Deserialized values and [`ParseOptions::with_max_depth`] are capped at that ceiling.
    #[cfg_attr(feature = "json", serde(deserialize_with = "capped_max_depth"))]
    pub max_depth: usize,
}

impl ParseOptions {
    pub const DEFAULT_MAX_DEPTH: usize = 128;

    /// The deepest nesting a document may be allowed, which fits a 2 MiB thread stack.
    pub const MAX_DEPTH_CEILING: usize = 256;

    #[inline]
    pub fn with_max_depth(self, max_depth: usize) -> Self {
        ParseOptions {
            max_depth: max_depth.min(Self::MAX_DEPTH_CEILING),
        }
    }
}

#[cfg(feature = "json")]
fn capped_max_depth<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let max_depth = <usize as serde::Deserialize>::deserialize(deserializer)?;
    Ok(max_depth.min(ParseOptions::MAX_DEPTH_CEILING))
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}

/// Options for converting an AST to JSON.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Default)]
#[cfg_attr(
    feature = "json",
    derive(serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct JsonOptions {
    /// Adds a `loc` object with the start and end of its source span to every node.
    pub locations: bool,
}
