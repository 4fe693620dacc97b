//! Point-set identifier parsing and validation

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Identifier of a point set held by the upstream manager.
///
/// Only the canonical textual form is accepted: lowercase, hyphenated,
/// 36 characters, equal to its own round-trip render. Braced, simple,
/// URN and uppercase spellings are rejected even though they name the
/// same UUID value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointSetId(Uuid);

impl PointSetId {
    /// Parse a canonical point-set id.
    pub fn parse(input: &str) -> Result<Self> {
        let uuid = Uuid::try_parse(input)
            .map_err(|_| Error::InvalidPointSetId(format!("'{input}' is not a valid UUID")))?;

        // Uuid::try_parse is lenient about the textual form; the id
        // contract is not.
        if uuid.as_hyphenated().to_string() != input {
            return Err(Error::InvalidPointSetId(format!(
                "'{input}' is not a valid UUID in canonical form"
            )));
        }

        Ok(Self(uuid))
    }

    /// The underlying UUID value.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for PointSetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.as_hyphenated())
    }
}

impl FromStr for PointSetId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_id() {
        let id = PointSetId::parse("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();
        assert_eq!(id.to_string(), "67e55044-10b1-426f-9247-bb680e5fe0c8");
    }

    #[test]
    fn test_parse_rejects_malformed_ids() {
        let malformed = [
            "not-a-uuid",
            "67e55044-10b1-426f-9247-bb680e5fe0",       // too short
            "67e55044-10b1-426f-9247-bb680e5fe0c8ff",   // too long
            "gge55044-10b1-426f-9247-bb680e5fe0c8",     // invalid chars
            "67e5504410b1426f9247bb680e5fe0c8",         // no hyphens
            "",
        ];

        for input in malformed {
            let err = PointSetId::parse(input).unwrap_err();
            assert!(
                matches!(err, Error::InvalidPointSetId(_)),
                "expected InvalidPointSetId for {input:?}"
            );
            assert!(err.to_string().to_lowercase().contains("not a valid uuid"));
        }
    }

    #[test]
    fn test_parse_rejects_non_canonical_spellings() {
        // Same UUID value, non-canonical text.
        for input in [
            "67E55044-10B1-426F-9247-BB680E5FE0C8",
            "{67e55044-10b1-426f-9247-bb680e5fe0c8}",
            "urn:uuid:67e55044-10b1-426f-9247-bb680e5fe0c8",
        ] {
            assert!(
                matches!(PointSetId::parse(input), Err(Error::InvalidPointSetId(_))),
                "expected rejection for {input:?}"
            );
        }
    }

    #[test]
    fn test_from_str_round_trip() {
        let text = "00000000-0000-0000-0000-000000000000";
        let id: PointSetId = text.parse().unwrap();
        assert_eq!(id.to_string(), text);
    }
}
