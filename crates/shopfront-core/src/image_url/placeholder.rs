//! Fallback image and known placeholder services.

/// Inline "No Image" graphic returned for missing or broken references.
///
/// A URL-encoded SVG so it never hits the network. It contains neither
/// `uploads` nor `localhost:`, so normalizing it yields itself.
pub const FALLBACK_IMAGE: &str = "data:image/svg+xml;charset=UTF-8,\
%3Csvg%20xmlns%3D%22http%3A%2F%2Fwww.w3.org%2F2000%2Fsvg%22%20width%3D%22300%22%20height%3D%22300%22%3E\
%3Crect%20width%3D%22100%25%22%20height%3D%22100%25%22%20fill%3D%22%23eeeeee%22%2F%3E\
%3Ctext%20x%3D%2250%25%22%20y%3D%2250%25%22%20fill%3D%22%23999999%22%20font-family%3D%22sans-serif%22\
%20font-size%3D%2218%22%20text-anchor%3D%22middle%22%20dominant-baseline%3D%22middle%22%3ENo%20Image\
%3C%2Ftext%3E%3C%2Fsvg%3E";

/// Placeholder-image hosts whose URLs upstream data uses as stand-ins for real images.
pub const DEFAULT_PLACEHOLDER_HOSTS: &[&str] = &["via.placeholder.com", "placehold.it"];

/// True if `reference` points at any of the blocklisted placeholder services.
pub(super) fn is_placeholder_service(reference: &str, hosts: &[String]) -> bool {
    hosts.iter().any(|h| reference.contains(h.as_str()))
}
