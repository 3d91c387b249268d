//! # resource-link
//!
//! Resource link parsing and validation for versioned API resources.
//!
//! ## Design Principles
//!
//! - Matching is purely syntactic; no registry of versions or namespaces is
//!   consulted, so any string with the right shape parses
//! - A link either yields a fully populated [`ParsedResource`] or nothing;
//!   partially matched links collapse to `None`
//! - Expectations are normalized once at the call boundary into an explicit
//!   [`Expectation`], never branched on by runtime shape
//! - Validation failures carry structured context (property, accepted
//!   formats, offending link) for the HTTP boundary to render
//!
//! ## Link Format
//!
//! Two shapes are recognized:
//!
//! - `/api/v{version}/{namespace}/{id}` — path-based resources, where the id
//!   may span further segments: `/api/v3/work_packages/42/relations/7`
//! - `/api/v{version}/string_objects?value={value}` — string objects, scalar
//!   values addressed via a query parameter
//!
//! ## Usage
//!
//! ```
//! use resource_link::{parse_id, Expectation};
//!
//! let id = parse_id(
//!     Some("/api/v3/work_packages/42"),
//!     "id",
//!     Expectation::one("3"),
//!     Expectation::one("work_packages"),
//! )?;
//! assert_eq!(id, "42");
//! # Ok::<(), resource_link::LinkError>(())
//! ```

mod error;
mod matcher;
mod parser;

pub use error::LinkError;
pub use parser::{parse, parse_id, Expectation, ParsedResource};
