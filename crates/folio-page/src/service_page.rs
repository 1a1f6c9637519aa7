//! Populates the generic service page from a URL query parameter.

use folio_core::services;

/// Site name suffixed onto the document title.
pub const SITE_NAME: &str = "Folio";

/// Query parameter carrying the service slug.
pub const SERVICE_PARAM: &str = "service";

/// Everything the service page template needs: title text, description text
/// and the benefits list rebuilt in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceView {
    pub title: String,
    pub description: String,
    pub benefits: Vec<String>,
    pub document_title: String,
}

/// Extract the service slug from a raw query string, percent-decoded and
/// lower-cased. Accepts an optional leading `?`. Returns `None` when the
/// parameter is absent.
pub fn service_slug(query: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (decode_component(key) == SERVICE_PARAM).then(|| decode_component(value).to_lowercase())
    })
}

/// Decode one query component: `+` becomes a space and `%xx` sequences become
/// their byte value. Malformed sequences pass through unchanged.
fn decode_component(component: &str) -> String {
    let bytes = component.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => match (hex_val(bytes[i + 1]), hex_val(bytes[i + 2])) {
                (Some(hi), Some(lo)) => {
                    out.push(hi * 16 + lo);
                    i += 3;
                }
                _ => {
                    out.push(b'%');
                    i += 1;
                }
            },
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8(out).unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}

fn hex_val(b: u8) -> Option<u8> {
    (b as char).to_digit(16).map(|d| d as u8)
}

/// Build the service page view for a raw query string. An absent or
/// unrecognized slug yields the fallback content; this never fails.
pub fn populate(query: &str) -> ServiceView {
    let slug = service_slug(query).unwrap_or_default();
    let content = services::resolve(&slug);
    ServiceView {
        title: content.title.to_string(),
        description: content.description.to_string(),
        benefits: content.benefits.iter().map(|b| (*b).to_string()).collect(),
        document_title: format!("{} — {}", content.title, SITE_NAME),
    }
}
