//! Link templates and capture extraction.
//!
//! Two anchored templates describe the accepted textual shapes of a resource
//! link. Matching is purely syntactic: any string with the right shape
//! matches, whether or not the version or namespace actually exists. The
//! compiled templates are process-wide immutable statics, built at most once.

use std::sync::OnceLock;

use regex::Regex;

/// Captures extracted from a generic resource link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResourceCaptures {
    pub version: String,
    pub namespace: String,
    /// The remaining path tail; may contain `/`.
    pub id: String,
}

/// Captures extracted from a string-object link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StringObjectCaptures {
    pub version: String,
    /// The raw query value; may be empty.
    pub value: String,
}

/// Template for path-based resource links: `/api/v{version}/{namespace}/{id}`.
///
/// The namespace is exactly one segment; the id is the greedy remaining tail,
/// so nested sub-resource addressing like `42/relations/7` lands in the id.
fn resource_template() -> &'static Regex {
    static TEMPLATE: OnceLock<Regex> = OnceLock::new();
    TEMPLATE.get_or_init(|| {
        Regex::new(r"^/api/v([^/]+)/([^/]+)/(.+)$").expect("resource template is a valid regex")
    })
}

/// Template for string-object links: `/api/v{version}/string_objects?value={value}`.
///
/// String objects are addressed via a query parameter instead of a path id,
/// so they need their own shape.
fn string_object_template() -> &'static Regex {
    static TEMPLATE: OnceLock<Regex> = OnceLock::new();
    TEMPLATE.get_or_init(|| {
        Regex::new(r"^/api/v([^/?]+)/string_objects\?value=(.*)$")
            .expect("string object template is a valid regex")
    })
}

/// Extracts the version, namespace, and id captures from a generic resource
/// link, or `None` if the link does not have that shape.
pub(crate) fn extract_resource(link: &str) -> Option<ResourceCaptures> {
    let captures = resource_template().captures(link)?;
    Some(ResourceCaptures {
        version: captures[1].to_string(),
        namespace: captures[2].to_string(),
        id: captures[3].to_string(),
    })
}

/// Extracts the version and raw value captures from a string-object link, or
/// `None` if the link does not have that shape.
pub(crate) fn extract_string_object(link: &str) -> Option<StringObjectCaptures> {
    let captures = string_object_template().captures(link)?;
    Some(StringObjectCaptures {
        version: captures[1].to_string(),
        value: captures[2].to_string(),
    })
}
