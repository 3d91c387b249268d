//! Resource link parsing and expectation validation.

use serde::Serialize;
use tracing::trace;

use crate::error::LinkError;
use crate::matcher;

/// Namespace reported for string-object links, which carry no namespace
/// segment of their own.
const STRING_OBJECTS_NAMESPACE: &str = "string_objects";

/// The identifying fields extracted from a resource link.
///
/// Always fully populated: a link that would leave any field empty or that
/// carries a trailing slash on the id does not parse at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedResource {
    /// API version token, without the literal `v` prefix.
    pub version: String,
    /// Resource-type path segment between the version and the id.
    pub namespace: String,
    /// Resource identifier; may contain `/` for nested sub-resource
    /// addressing, never ends with `/`.
    pub id: String,
}

/// An acceptable-values constraint for a parsed field.
///
/// Normalizes the scalar-or-collection shapes callers naturally have into one
/// explicit type at the call boundary.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Expectation {
    /// No constraint; any value matches.
    #[default]
    Any,
    /// Matches when the actual value equals any one element.
    OneOf(Vec<String>),
}

impl Expectation {
    /// Constraint accepting exactly one value.
    pub fn one(value: impl Into<String>) -> Self {
        Expectation::OneOf(vec![value.into()])
    }

    /// Constraint accepting any of the given values.
    ///
    /// An empty collection matches nothing.
    pub fn one_of<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Expectation::OneOf(values.into_iter().map(Into::into).collect())
    }

    fn matches(&self, actual: &str) -> bool {
        match self {
            Expectation::Any => true,
            Expectation::OneOf(values) => values.iter().any(|value| value == actual),
        }
    }
}

impl From<&str> for Expectation {
    fn from(value: &str) -> Self {
        Expectation::one(value)
    }
}

impl From<String> for Expectation {
    fn from(value: String) -> Self {
        Expectation::one(value)
    }
}

impl From<Vec<&str>> for Expectation {
    fn from(values: Vec<&str>) -> Self {
        Expectation::one_of(values)
    }
}

impl From<Vec<String>> for Expectation {
    fn from(values: Vec<String>) -> Self {
        Expectation::one_of(values)
    }
}

/// Parses a resource link into its identifying fields.
///
/// String-object links are tried first since their query-parameter shape
/// differs from all other resources; everything else goes through the generic
/// path template. Returns `None` for anything that does not fully match,
/// including malformed input. Purely syntactic, stateless, and idempotent.
pub fn parse(link: &str) -> Option<ParsedResource> {
    parse_string_object(link).or_else(|| parse_resource(link))
}

/// Parses a resource link and returns its id after validating the version and
/// namespace against the given expectations.
///
/// `link` is `Option` because it typically comes from an optional request
/// field: a `None` link is a caller bug and yields [`LinkError::MissingLink`],
/// while any present-but-wrong link (including the empty string) yields
/// [`LinkError::InvalidResourceLink`] carrying the offending `property` name,
/// the accepted link formats, and the original link.
pub fn parse_id(
    link: Option<&str>,
    property: &str,
    expected_version: Expectation,
    expected_namespace: Expectation,
) -> Result<String, LinkError> {
    let link = link.ok_or(LinkError::MissingLink)?;

    match parse(link) {
        Some(resource)
            if expected_version.matches(&resource.version)
                && expected_namespace.matches(&resource.namespace) =>
        {
            Ok(resource.id)
        }
        _ => Err(LinkError::InvalidResourceLink {
            property: property.to_string(),
            expected: expected_links(&expected_version, &expected_namespace),
            actual: link.to_string(),
        }),
    }
}

fn parse_resource(link: &str) -> Option<ParsedResource> {
    let captures = matcher::extract_resource(link)?;

    if captures.id.ends_with('/') {
        trace!(link = %link, "rejecting resource link with trailing slash on id");
        return None;
    }

    Some(ParsedResource {
        version: captures.version,
        namespace: captures.namespace,
        id: captures.id,
    })
}

fn parse_string_object(link: &str) -> Option<ParsedResource> {
    let captures = matcher::extract_string_object(link)?;

    // String-object ids are the leading word-character run of the value, so
    // they can never be absent or end with a slash.
    Some(ParsedResource {
        version: captures.version,
        namespace: STRING_OBJECTS_NAMESPACE.to_string(),
        id: leading_word_run(&captures.value).to_string(),
    })
}

/// Longest leading run of ASCII word characters, possibly empty.
fn leading_word_run(value: &str) -> &str {
    let end = value
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(value.len());
    &value[..end]
}

/// Builds the human-readable accepted-format templates for an error message:
/// one `/api/{version}/{namespace}/:id` string per acceptable namespace, with
/// `:apiVersion` / `:resource` placeholders for unconstrained slots.
fn expected_links(expected_version: &Expectation, expected_namespace: &Expectation) -> Vec<String> {
    let versions: Vec<String> = match expected_version {
        Expectation::Any => vec![":apiVersion".to_string()],
        Expectation::OneOf(values) => values.iter().map(|v| format!("v{v}")).collect(),
    };
    let namespaces: Vec<&str> = match expected_namespace {
        Expectation::Any => vec![":resource"],
        Expectation::OneOf(values) => values.iter().map(String::as_str).collect(),
    };

    namespaces
        .iter()
        .flat_map(|namespace| {
            versions
                .iter()
                .map(move |version| format!("/api/{version}/{namespace}/:id"))
        })
        .collect()
}
