//! Scope tokens and their generators

use std::fmt;

use nanoid::nanoid;

use crate::config::ScopeConfig;
use crate::error::{Error, Result};

/// Marker shared by a component instance's stylesheet and its elements.
/// Always usable as a CSS class name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ScopeToken(String);

impl ScopeToken {
    pub fn new(token: impl Into<String>) -> Self {
        let token = token.into();
        debug_assert!(is_valid_token(&token), "invalid scope token {:?}", token);
        ScopeToken(token)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The token as a class selector, e.g. `.s1Ab2x`.
    pub fn class_selector(&self) -> String {
        format!(".{}", self.0)
    }
}

impl fmt::Display for ScopeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ScopeToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Whether `token` can be used as a class name without escaping: it starts
/// with a letter or `_` and continues with letters, digits, `_` or `-`.
pub fn is_valid_token(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '-')
}

/// Source of fresh scope tokens. Implementations must never hand out the same
/// token twice and never produce one starting with a digit.
pub trait IdGenerator {
    fn next_id(&mut self) -> ScopeToken;
}

/// Random tokens: a fixed prefix followed by a nanoid suffix.
#[derive(Clone, Debug)]
pub struct NanoIdGenerator {
    prefix: String,
    length: usize,
}

impl NanoIdGenerator {
    pub fn new(config: &ScopeConfig) -> Result<Self> {
        config.validate()?;
        Ok(NanoIdGenerator {
            prefix: config.token_prefix.clone(),
            length: config.token_length,
        })
    }
}

impl Default for NanoIdGenerator {
    fn default() -> Self {
        let config = ScopeConfig::default();
        NanoIdGenerator {
            prefix: config.token_prefix,
            length: config.token_length,
        }
    }
}

impl IdGenerator for NanoIdGenerator {
    fn next_id(&mut self) -> ScopeToken {
        let length = self.length;
        ScopeToken::new(format!("{}{}", self.prefix, nanoid!(length)))
    }
}

/// Deterministic tokens: prefix plus a running counter.
#[derive(Clone, Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: u64,
}

impl SequentialIdGenerator {
    /// Fails unless `prefix` is itself a valid token, since the counter alone
    /// would start with a digit.
    pub fn new(prefix: impl Into<String>) -> Result<Self> {
        let prefix = prefix.into();
        if !is_valid_token(&prefix) {
            return Err(Error::InvalidConfig(format!(
                "token prefix {:?} must start with a letter or '_'",
                prefix
            )));
        }
        Ok(SequentialIdGenerator { prefix, next: 0 })
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        SequentialIdGenerator {
            prefix: ScopeConfig::default().token_prefix,
            next: 0,
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> ScopeToken {
        let token = ScopeToken::new(format!("{}{}", self.prefix, self.next));
        self.next += 1;
        token
    }
}

impl<G: IdGenerator + ?Sized> IdGenerator for Box<G> {
    fn next_id(&mut self) -> ScopeToken {
        (**self).next_id()
    }
}
