//! `shopfront image <REF>...` – print the normalized URL of each reference.

use anyhow::{Context, Result};
use serde_json::Value;
use shopfront_core::config::ShopfrontConfig;
use shopfront_core::image_url::ImageNormalizer;

pub fn run_image(
    cfg: &ShopfrontConfig,
    base: Option<&str>,
    json: bool,
    refs: &[String],
) -> Result<()> {
    let mut cfg = cfg.clone();
    if let Some(base) = base {
        cfg.api_base_url = base.to_string();
    }
    let normalizer = ImageNormalizer::from_config(&cfg)?;
    for line in normalize_lines(&normalizer, refs, json)? {
        println!("{line}");
    }
    Ok(())
}

/// One output line per reference. In JSON mode the output is JSON too.
pub(crate) fn normalize_lines(
    normalizer: &ImageNormalizer,
    refs: &[String],
    json: bool,
) -> Result<Vec<String>> {
    refs.iter()
        .map(|r| {
            if json {
                let value: Value = serde_json::from_str(r)
                    .with_context(|| format!("not a JSON value: {r}"))?;
                Ok(normalizer.normalize_json(&value).to_string())
            } else {
                Ok(normalizer.normalize_str(Some(r)))
            }
        })
        .collect()
}
