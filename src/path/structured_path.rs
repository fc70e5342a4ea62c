use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use tracing::debug;

use crate::error::{Diagnostic, Rejected};
use crate::grammar;
use crate::path::Segments;

/// A validated, normalized structured path, e.g. `/domain@variant/Some/Thing`.
///
/// # Invariants
/// - The string is either empty (the default, invalid path) or satisfies the full path grammar.
/// - The domain portion (everything before the second '/') is lowercase.
///
/// Equality, ordering and hashing compare the normalized string byte for byte.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StructuredPath {
    pub(crate) inner: String,
}

impl StructuredPath {
    /// The empty, invalid path.
    pub const fn new() -> StructuredPath {
        StructuredPath {
            inner: String::new(),
        }
    }

    /// Validates `value` and builds a normalized path from a copy of it.
    ///
    /// # Errors
    /// Returns the [`Diagnostic`] explaining why `value` isn't a full path.
    pub fn try_make(value: &str) -> Result<StructuredPath, Diagnostic> {
        if let Err(diagnostic) = grammar::is_valid_full_path(value) {
            debug!(input = value, %diagnostic, "rejected structured path");
            Err(diagnostic)?
        }

        Ok(StructuredPath::normalized(value.to_owned()))
    }

    /// Validates `value` and takes ownership of it as a normalized path.
    ///
    /// # Errors
    /// Returns a [`Rejected`] holding both the untouched input and the [`Diagnostic`].
    pub fn try_make_owned(value: String) -> Result<StructuredPath, Rejected> {
        match grammar::is_valid_full_path(&value) {
            Ok(()) => Ok(StructuredPath::normalized(value)),
            Err(diagnostic) => {
                debug!(input = value.as_str(), %diagnostic, "rejected structured path");
                Err(Rejected {
                    input: value,
                    diagnostic,
                })
            },
        }
    }

    fn normalized(mut inner: String) -> StructuredPath {
        normalize_domain_case(&mut inner);
        StructuredPath {
            inner,
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.inner.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }

    pub fn into_string(self) -> String {
        self.inner
    }

    pub fn compare(&self, other: &StructuredPath) -> Ordering {
        self.inner.cmp(&other.inner)
    }

    /// Whether `other` is this path or lies beneath it. An invalid path is never a base.
    pub fn is_base_of(&self, other: &StructuredPath) -> bool {
        self.leaf_of(other).is_some()
    }

    /// The part of `other` beneath this path, without the separating '/'. Equal paths produce an
    /// empty leaf. Returns [`None`] if this path isn't a base of `other`.
    pub fn leaf_of<'a>(&self, other: &'a StructuredPath) -> Option<&'a str> {
        if self.inner.is_empty() {
            None?
        }
        let rest = other.inner.strip_prefix(self.inner.as_str())?;

        match rest.is_empty() {
            true => Some(rest),
            false => rest.strip_prefix('/'),
        }
    }

    /// The domain without its leading slash, including any '@' label.
    pub fn domain(&self) -> &str {
        let body = self.inner.get(1..).unwrap_or_default();
        body.split_once('/').map_or(body, |(domain, _)| domain)
    }

    /// The domain split into its first label and the optional label following '@'.
    pub fn domain_labels(&self) -> (&str, Option<&str>) {
        let domain = self.domain();
        match domain.split_once('@') {
            Some((first, second)) => (first, Some(second)),
            None => (domain, None),
        }
    }

    /// Everything after the domain and its separating slash, if there is a subpath at all.
    pub fn subpath(&self) -> Option<&str> {
        self.inner.get(1..)?.split_once('/').map(|(_, subpath)| subpath)
    }

    pub fn segments(&self) -> Segments<'_> {
        let head = match self.subpath() {
            Some(subpath) => self.inner.len() - subpath.len(),
            None => self.inner.len(),
        };

        Segments {
            path: &self.inner,
            head,
        }
    }

    /// The path without its last subpath segment. A bare domain has no parent.
    pub fn parent(&self) -> Option<StructuredPath> {
        match self.inner.rfind('/')? {
            0 => None,
            end => Some(StructuredPath {
                inner: self.inner[..end].to_owned(),
            }),
        }
    }

    /// Appends `segment` as a new subpath identifier. Joining onto the empty path produces a
    /// path with `segment` as its domain.
    ///
    /// # Errors
    /// Returns a [`Diagnostic`] if `segment` isn't a valid identifier.
    pub fn join(&self, segment: &str) -> Result<StructuredPath, Diagnostic> {
        grammar::is_valid_ident(segment, Some("segment"))?;

        Ok(StructuredPath::try_make_owned(format!("{}/{}", self.inner, segment))?)
    }
}

/// Lower-cases the domain of a valid path in place: from after the leading '/' up to the next '/'
/// or the end. Subpath segments keep their case.
pub(crate) fn normalize_domain_case(value: &mut str) {
    let Some(body) = value.get_mut(1..) else {
        return;
    };
    let end = body.find('/').unwrap_or(body.len());
    body[..end].make_ascii_lowercase();
}

impl Display for StructuredPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl FromStr for StructuredPath {
    type Err = Diagnostic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StructuredPath::try_make(s)
    }
}

impl TryFrom<&str> for StructuredPath {
    type Error = Diagnostic;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        StructuredPath::try_make(value)
    }
}

impl TryFrom<String> for StructuredPath {
    type Error = Rejected;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        StructuredPath::try_make_owned(value)
    }
}

impl AsRef<str> for StructuredPath {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl From<StructuredPath> for String {
    fn from(value: StructuredPath) -> Self {
        value.inner
    }
}
