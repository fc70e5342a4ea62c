//! A validator, parser and normalizer for structured paths: hierarchical names of the form
//! `/domain[@label]/ident/ident/...` used to address resources.
//!
//! # Grammar
//! A path starts with a slash and a domain. The domain is one or two labels joined by '@', where a
//! label starts with a letter or digit and may contain '-' and '.'. The domain is optionally
//! followed by a subpath: slash-separated identifiers, each starting with a letter or '_' and
//! containing only letters, digits and '_'. See [`grammar`] for the full definition.
//!
//! # Normalization
//! [`StructuredPath`] only ever holds a valid path. Its domain is lower-cased on construction,
//! while subpath identifiers keep their case, so `/Domain/SubPath` becomes `/domain/SubPath`.
//! Equality, ordering and hashing all work on that normalized string.
//!
//! # Error Handling
//! Malformed input is an expected outcome, not an exceptional one. Nothing here panics on bad
//! input: every check returns a [`Diagnostic`] which explains what was violated and in which
//! component, e.g. `Invalid subpath "1seg": identifier cannot start with a number`. The `is_*`
//! functions answer the same questions without building a diagnostic at all.
//!
//! # Identifiers
//! [`make_valid_identifier`] sanitizes arbitrary text, such as a label typed by a user or a GUID,
//! into an identifier which can be used as a path segment.
//!
//! # Features
//! - `serde`: `Serialize` / `Deserialize` for [`StructuredPath`], validating on the way in.
//! - `uuid`: `identifier_from_uuid`, for turning a `Uuid` into an identifier.
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]

pub mod error;
pub mod grammar;
pub mod ident;
pub mod path;

pub use error::{Diagnostic, Rejected};
pub use grammar::{is_valid_domain, is_valid_full_path, is_valid_ident, is_valid_subpath};
pub use ident::*;
pub use path::{Segments, StructuredPath};
