//! Validated API origin that relative image paths are resolved against.

use std::fmt;

use crate::config::ConfigError;

/// API origin with surrounding whitespace and trailing slashes removed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ApiBase(String);

impl ApiBase {
    pub fn new(raw: &str) -> Result<Self, ConfigError> {
        let base = Self::lenient(raw);
        if base.0.is_empty() {
            return Err(ConfigError::EmptyApiBase);
        }
        Ok(base)
    }

    /// Same trimming as `new` but accepts an empty origin. Used by the free
    /// normalization function, which must stay total.
    pub(crate) fn lenient(raw: &str) -> Self {
        Self(raw.trim().trim_end_matches('/').to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `base + "/" + path`.
    pub(super) fn join(&self, path: &str) -> String {
        let mut out = String::with_capacity(self.0.len() + 1 + path.len());
        out.push_str(&self.0);
        out.push('/');
        out.push_str(path);
        out
    }
}

impl fmt::Display for ApiBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for ApiBase {
    type Error = ConfigError;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}
