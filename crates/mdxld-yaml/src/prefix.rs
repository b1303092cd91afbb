//! Linked-data key prefixes.

/// The two prefix characters that mark a linked-data key.
pub const LD_PREFIX_CHARS: [char; 2] = ['$', '@'];

/// Canonical prefix for linked-data keys.
///
/// `$` is the default: it needs no quoting in YAML, unlike `@`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LdPrefix {
    #[default]
    Dollar,
    At,
}

impl LdPrefix {
    /// Pick the canonical prefix from a `prefer-dollar-prefix` setting.
    pub fn preferred(prefer_dollar: bool) -> Self {
        if prefer_dollar { Self::Dollar } else { Self::At }
    }

    pub fn as_char(&self) -> char {
        match self {
            Self::Dollar => '$',
            Self::At => '@',
        }
    }

    /// Build a key from a bare identifier, e.g. `type` -> `$type`.
    pub fn key(&self, identifier: &str) -> String {
        let mut key = String::with_capacity(identifier.len() + 1);
        key.push(self.as_char());
        key.push_str(identifier);
        key
    }

    /// Rewrite a linked-data key to this prefix.
    ///
    /// Only the leading character changes. Returns `None` for plain keys.
    pub fn canonicalize(&self, key: &str) -> Option<String> {
        identifier(key).map(|id| self.key(id))
    }
}

/// The part of a linked-data key after its prefix.
pub fn identifier(key: &str) -> Option<&str> {
    key.strip_prefix(LD_PREFIX_CHARS)
}
