//! Image URL normalization.
//!
//! Upstream product and category records carry image references in many
//! shapes: absolute CDN URLs, storage paths with or without a stale host,
//! `/api/`-prefixed paths, bare relative paths, `localhost:<port>` URLs from
//! development databases, placeholder-service URLs, or nothing at all. The
//! normalizer maps every one of them onto a directly loadable URL under the
//! configured API origin, or onto [`FALLBACK_IMAGE`]. It never fails.

mod base;
mod placeholder;
mod shape;

pub use base::ApiBase;
pub use placeholder::{DEFAULT_PLACEHOLDER_HOSTS, FALLBACK_IMAGE};

use serde_json::Value;

use crate::config::{ConfigError, ShopfrontConfig};
use placeholder::is_placeholder_service;
use shape::{has_scheme, is_external_http, localhost_path};

/// Storage paths are always rooted at this segment.
const UPLOADS_MARKER: &str = "uploads";

/// A raw image reference as produced by an upstream record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ImageRef<'a, A> {
    /// `null` or absent.
    Missing,
    /// Caller-resolved asset (e.g. a bundled image); passed through untouched.
    Asset(A),
    /// Any string reference, including the empty string.
    Path(&'a str),
}

impl<'a> ImageRef<'a, &'a Value> {
    /// Classify a JSON image field: `null`, `false` and `0` are missing,
    /// strings are paths, everything else is an opaque asset.
    pub fn from_json(value: &'a Value) -> Self {
        match value {
            Value::Null | Value::Bool(false) => ImageRef::Missing,
            Value::Number(n) if n.as_f64() == Some(0.0) => ImageRef::Missing,
            Value::String(s) => ImageRef::Path(s.as_str()),
            other => ImageRef::Asset(other),
        }
    }
}

impl<'a, A> From<Option<&'a str>> for ImageRef<'a, A> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(ImageRef::Missing, ImageRef::Path)
    }
}

/// Result of normalizing an [`ImageRef`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizedImage<A> {
    Url(String),
    Asset(A),
}

impl<A> NormalizedImage<A> {
    pub fn as_url(&self) -> Option<&str> {
        match self {
            NormalizedImage::Url(u) => Some(u),
            NormalizedImage::Asset(_) => None,
        }
    }
}

/// Normalizes image references against one API origin.
#[derive(Debug, Clone)]
pub struct ImageNormalizer {
    base: ApiBase,
    placeholder_hosts: Vec<String>,
}

impl ImageNormalizer {
    /// Normalizer with the default placeholder-service blocklist.
    pub fn new(base: ApiBase) -> Self {
        Self {
            base,
            placeholder_hosts: DEFAULT_PLACEHOLDER_HOSTS
                .iter()
                .map(|h| h.to_string())
                .collect(),
        }
    }

    /// Replace the placeholder-service blocklist. Empty entries are ignored.
    pub fn with_placeholder_hosts<I, S>(mut self, hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.placeholder_hosts = hosts
            .into_iter()
            .map(Into::into)
            .filter(|h: &String| !h.is_empty())
            .collect();
        self
    }

    pub fn from_config(cfg: &ShopfrontConfig) -> Result<Self, ConfigError> {
        let base = ApiBase::new(&cfg.api_base_url)?;
        tracing::info!(api_base = %base, "image URLs resolve against API base");
        Ok(Self::new(base).with_placeholder_hosts(cfg.placeholder_hosts.iter().cloned()))
    }

    pub fn base(&self) -> &ApiBase {
        &self.base
    }

    /// Normalize any reference shape. Assets come back unchanged.
    pub fn normalize<A>(&self, reference: ImageRef<'_, A>) -> NormalizedImage<A> {
        match reference {
            ImageRef::Missing => NormalizedImage::Url(FALLBACK_IMAGE.to_string()),
            ImageRef::Asset(asset) => NormalizedImage::Asset(asset),
            ImageRef::Path(path) => NormalizedImage::Url(self.resolve(path)),
        }
    }

    /// Normalize a string reference; `None` and `""` yield the fallback image.
    pub fn normalize_str(&self, reference: Option<&str>) -> String {
        match reference {
            Some(path) => self.resolve(path),
            None => FALLBACK_IMAGE.to_string(),
        }
    }

    /// Normalize a JSON image field, keeping non-string objects as they are.
    pub fn normalize_json(&self, value: &Value) -> Value {
        match self.normalize(ImageRef::from_json(value)) {
            NormalizedImage::Url(url) => Value::String(url),
            NormalizedImage::Asset(asset) => asset.clone(),
        }
    }

    /// Normalize a gallery, one output per input in the same order.
    pub fn normalize_all<S: AsRef<str>>(&self, references: &[S]) -> Vec<String> {
        references
            .iter()
            .map(|r| self.resolve(r.as_ref()))
            .collect()
    }

    fn resolve(&self, reference: &str) -> String {
        let base = self.base.as_str();

        if reference.is_empty() {
            return FALLBACK_IMAGE.to_string();
        }
        if is_placeholder_service(reference, &self.placeholder_hosts) {
            tracing::trace!(reference, "placeholder service URL replaced by fallback");
            return FALLBACK_IMAGE.to_string();
        }
        // Storage paths win even behind a stale or foreign host.
        if let Some(idx) = reference.find(UPLOADS_MARKER) {
            return self.base.join(&reference[idx..]);
        }
        if !base.is_empty() && reference.starts_with(base) {
            return reference.to_string();
        }
        if base.is_empty() || !reference.contains(base) {
            if let Some(path) = localhost_path(reference) {
                return self.base.join(path);
            }
        }
        if let Some(rest) = reference.strip_prefix("/api/") {
            return self.base.join(rest);
        }
        if reference.starts_with('/') {
            return format!("{base}{reference}");
        }
        if !has_scheme(reference) {
            return self.base.join(reference);
        }
        if is_external_http(reference) {
            return reference.to_string();
        }

        tracing::trace!(reference, "unrecognized image reference passed through");
        reference.to_string()
    }
}

/// Normalize a string reference against `api_base` with the default blocklist.
///
/// Total for every input, including a blank `api_base`. Normalizing twice
/// gives the same result only when `api_base` is non-empty: with a blank base
/// `api/x.png` becomes `/api/x.png`, which then matches the `/api/` rule.
pub fn normalize_image_url(reference: Option<&str>, api_base: &str) -> String {
    ImageNormalizer::new(ApiBase::lenient(api_base)).normalize_str(reference)
}

#[cfg(test)]
mod tests;
