//! Rule-by-rule tests for image URL normalization.

use serde_json::json;

use super::*;

const BASE: &str = "http://api.shop.test";

fn normalizer() -> ImageNormalizer {
    ImageNormalizer::new(ApiBase::new(BASE).unwrap())
}

fn norm(reference: &str) -> String {
    normalizer().normalize_str(Some(reference))
}

#[test]
fn missing_and_empty_yield_fallback() {
    let n = normalizer();
    assert_eq!(n.normalize_str(None), FALLBACK_IMAGE);
    assert_eq!(n.normalize_str(Some("")), FALLBACK_IMAGE);
    assert_eq!(
        n.normalize::<()>(ImageRef::Missing),
        NormalizedImage::Url(FALLBACK_IMAGE.to_string())
    );
}

#[test]
fn assets_pass_through_unchanged() {
    #[derive(Debug, PartialEq)]
    struct BundledAsset {
        id: u32,
    }
    let n = normalizer();
    let out = n.normalize(ImageRef::Asset(BundledAsset { id: 7 }));
    assert_eq!(out, NormalizedImage::Asset(BundledAsset { id: 7 }));
    assert_eq!(out.as_url(), None);
}

#[test]
fn placeholder_services_are_treated_as_broken() {
    assert_eq!(
        norm("https://via.placeholder.com/300x300?text=Shoe"),
        FALLBACK_IMAGE
    );
    assert_eq!(norm("http://placehold.it/120"), FALLBACK_IMAGE);
}

#[test]
fn custom_placeholder_hosts_replace_defaults() {
    let n = normalizer().with_placeholder_hosts(["dummyimage.com", ""]);
    assert_eq!(
        n.normalize_str(Some("https://dummyimage.com/600x400")),
        FALLBACK_IMAGE
    );
    assert_eq!(
        n.normalize_str(Some("https://via.placeholder.com/300")),
        "https://via.placeholder.com/300"
    );
}

#[test]
fn uploads_suffix_is_rebased_whatever_precedes_it() {
    let expected = format!("{BASE}/uploads/x.png");
    assert_eq!(norm("http://oldhost:3000/uploads/x.png"), expected);
    assert_eq!(norm("/weird/uploads/x.png"), expected);
    assert_eq!(norm("uploads/x.png"), expected);
    assert_eq!(norm("/uploads/x.png"), expected);
    assert_eq!(norm("https://cdn.other.test/uploads/x.png"), expected);
    assert_eq!(norm("http://localhost:5000/uploads/x.png"), expected);
}

#[test]
fn uploads_rule_matches_first_occurrence() {
    assert_eq!(
        norm("/media/my-uploads/uploads/a.png"),
        format!("{BASE}/uploads/uploads/a.png")
    );
}

#[test]
fn already_rebased_urls_are_unchanged() {
    assert_eq!(
        norm("http://api.shop.test/images/a.png"),
        "http://api.shop.test/images/a.png"
    );
}

#[test]
fn localhost_urls_move_to_api_base() {
    assert_eq!(
        norm("http://localhost:3000/images/a.png"),
        format!("{BASE}/images/a.png")
    );
    assert_eq!(norm("localhost:8080/a.png"), format!("{BASE}/a.png"));
}

#[test]
fn localhost_base_keeps_its_own_urls() {
    let n = ImageNormalizer::new(ApiBase::new("http://localhost:5000").unwrap());
    assert_eq!(
        n.normalize_str(Some("http://localhost:5000/images/a.png")),
        "http://localhost:5000/images/a.png"
    );
    assert_eq!(
        n.normalize_str(Some("http://localhost:3000/images/a.png")),
        "http://localhost:5000/images/a.png"
    );
}

#[test]
fn api_prefix_collapses_to_single_slash() {
    assert_eq!(norm("/api/images/a.png"), format!("{BASE}/images/a.png"));
}

#[test]
fn rooted_paths_are_appended() {
    assert_eq!(norm("/images/a.png"), format!("{BASE}/images/a.png"));
    assert_eq!(norm("/api"), format!("{BASE}/api"));
}

#[test]
fn bare_relative_paths_get_a_slash() {
    assert_eq!(norm("images/a.png"), format!("{BASE}/images/a.png"));
    assert_eq!(norm("a.png"), format!("{BASE}/a.png"));
    assert_eq!(norm("cdn.test:8080/a.png"), format!("{BASE}/cdn.test:8080/a.png"));
}

#[test]
fn external_http_urls_are_trusted() {
    assert_eq!(
        norm("https://cdn.brand.test/p/1.jpg"),
        "https://cdn.brand.test/p/1.jpg"
    );
    assert_eq!(norm("http://images.test/a.png"), "http://images.test/a.png");
}

#[test]
fn other_schemed_references_fall_through_unchanged() {
    assert_eq!(norm("http://localhost/a.png"), "http://localhost/a.png");
    assert_eq!(norm("data:image/png;base64,AAAA"), "data:image/png;base64,AAAA");
    assert_eq!(norm("ftp://files.test/a.png"), "ftp://files.test/a.png");
}

#[test]
fn fallback_is_a_fixed_point() {
    assert_eq!(norm(FALLBACK_IMAGE), FALLBACK_IMAGE);
}

#[test]
fn normalization_is_idempotent() {
    let inputs = [
        "http://oldhost:3000/uploads/x.png",
        "/weird/uploads/x.png",
        "http://api.shop.test/images/a.png",
        "http://localhost:3000/images/a.png",
        "http://localhost:3000/",
        "/api/images/a.png",
        "/images/a.png",
        "images/a.png",
        "https://cdn.brand.test/p/1.jpg",
        "http://localhost/a.png",
        "data:image/png;base64,AAAA",
        "",
    ];
    let n = normalizer();
    for input in inputs {
        let once = n.normalize_str(Some(input));
        let twice = n.normalize_str(Some(once.as_str()));
        assert_eq!(once, twice, "not idempotent for {input:?}");
    }
}

#[test]
fn every_output_is_non_empty() {
    let n = normalizer();
    for input in [None, Some(""), Some("/"), Some("x"), Some("localhost:1/")] {
        assert!(!n.normalize_str(input).is_empty(), "empty output for {input:?}");
    }
}

#[test]
fn json_fields_are_classified_by_shape() {
    let n = normalizer();
    assert_eq!(
        n.normalize_json(&json!("uploads/a.png")),
        json!(format!("{BASE}/uploads/a.png"))
    );
    assert_eq!(n.normalize_json(&json!(null)), json!(FALLBACK_IMAGE));
    let asset = json!({ "src": "/static/media/logo.123.png", "width": 64 });
    assert_eq!(n.normalize_json(&asset), asset);
    assert_eq!(
        ImageRef::from_json(&asset),
        ImageRef::Asset(&asset),
    );
}

#[test]
fn gallery_keeps_order_and_length() {
    let n = normalizer();
    let out = n.normalize_all(&["b.png", "", "/uploads/c.png"]);
    assert_eq!(
        out,
        vec![
            format!("{BASE}/b.png"),
            FALLBACK_IMAGE.to_string(),
            format!("{BASE}/uploads/c.png"),
        ]
    );
}

#[test]
fn from_config_uses_configured_base_and_hosts() {
    let cfg = ShopfrontConfig {
        api_base_url: "https://api.shop.test/".to_string(),
        placeholder_hosts: vec!["dummyimage.com".to_string()],
    };
    let n = ImageNormalizer::from_config(&cfg).unwrap();
    assert_eq!(n.base().as_str(), "https://api.shop.test");
    assert_eq!(
        n.normalize_str(Some("https://dummyimage.com/1")),
        FALLBACK_IMAGE
    );
}

#[test]
fn from_config_rejects_blank_base() {
    let cfg = ShopfrontConfig {
        api_base_url: "  ".to_string(),
        ..ShopfrontConfig::default()
    };
    assert!(matches!(
        ImageNormalizer::from_config(&cfg),
        Err(ConfigError::EmptyApiBase)
    ));
}

#[test]
fn free_function_handles_trailing_slash_and_blank_base() {
    assert_eq!(
        normalize_image_url(Some("uploads/a.png"), "http://api.shop.test/"),
        "http://api.shop.test/uploads/a.png"
    );
    assert_eq!(normalize_image_url(None, BASE), FALLBACK_IMAGE);
    assert_eq!(normalize_image_url(Some("uploads/a.png"), ""), "/uploads/a.png");
    assert_eq!(normalize_image_url(Some("/a.png"), ""), "/a.png");
}

#[test]
fn optional_strings_convert_to_refs() {
    let n = normalizer();
    let missing: ImageRef<'_, ()> = ImageRef::from(None::<&str>);
    assert_eq!(missing, ImageRef::Missing);
    assert_eq!(
        n.normalize::<()>(Some("/api/a.png").into()).as_url(),
        Some("http://api.shop.test/a.png")
    );
}

#[test]
fn falsy_json_values_yield_fallback() {
    let n = normalizer();
    for falsy in [json!(false), json!(0), json!(0.0)] {
        assert_eq!(ImageRef::from_json(&falsy), ImageRef::Missing);
        assert_eq!(n.normalize_json(&falsy), json!(FALLBACK_IMAGE), "for {falsy}");
    }
    assert_eq!(n.normalize_json(&json!(true)), json!(true));
    assert_eq!(n.normalize_json(&json!(3)), json!(3));
}

#[test]
fn free_function_idempotence_depends_on_non_empty_base() {
    let once = normalize_image_url(Some("api/x.png"), BASE);
    assert_eq!(normalize_image_url(Some(once.as_str()), BASE), once);

    let blank_once = normalize_image_url(Some("api/x.png"), "");
    assert_eq!(blank_once, "/api/x.png");
    assert_eq!(normalize_image_url(Some(blank_once.as_str()), ""), "/x.png");
}
