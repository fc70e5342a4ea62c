#![cfg(feature = "serde")]

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::path::StructuredPath;

impl Serialize for StructuredPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.inner)
    }
}

/// Paths are validated and normalized on the way in. The empty string is the empty path, so the
/// default value survives a round trip.
impl<'de> Deserialize<'de> for StructuredPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;

        match value.is_empty() {
            true => Ok(StructuredPath::new()),
            false => StructuredPath::try_make_owned(value).map_err(de::Error::custom),
        }
    }
}
