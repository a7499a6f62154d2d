//! The typed patient ID.
//!
//! [`PatientId`] wraps a string already verified to be in canonical form,
//! so holders of a value never need to re-validate it.

use crate::IdError;

/// A validated patient identifier.
///
/// Stores the canonical string form (`P` followed by ASCII digits). The only
/// way to obtain one is through strict parsing, so every `PatientId` in the
/// program is known-valid.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PatientId(String);

impl PatientId {
    /// The prefix every patient ID starts with.
    pub const PREFIX: &'static str = "P";

    /// Parses a patient ID from a string.
    ///
    /// The string must be the prefix `P` followed by one or more ASCII
    /// decimal digits. Unlike [`crate::is_valid`], a rejection carries the
    /// reason.
    pub fn parse(s: &str) -> Result<Self, IdError> {
        let mut chars = s.char_indices();

        let Some((_, first)) = chars.next() else {
            return Err(IdError::Empty);
        };

        if first != 'P' {
            return Err(IdError::InvalidPrefix {
                expected: Self::PREFIX,
                actual: first.to_string(),
            });
        }

        let mut saw_digit = false;
        for (position, c) in chars {
            if !c.is_ascii_digit() {
                return Err(IdError::InvalidDigit { found: c, position });
            }
            saw_digit = true;
        }

        if !saw_digit {
            return Err(IdError::MissingDigits);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the canonical string form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the digit portion after the prefix.
    #[must_use]
    pub fn digits(&self) -> &str {
        &self.0[Self::PREFIX.len()..]
    }
}

impl std::fmt::Display for PatientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for PatientId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for PatientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for PatientId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for PatientId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patient_id_roundtrip() {
        let id = PatientId::parse("P123").unwrap();
        let s = id.to_string();
        let parsed: PatientId = s.parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_patient_id_accessors() {
        let id = PatientId::parse("P456789").unwrap();
        assert_eq!(id.as_str(), "P456789");
        assert_eq!(id.digits(), "456789");
        assert!(id.as_str().starts_with(PatientId::PREFIX));
    }

    #[test]
    fn test_patient_id_invalid_prefix() {
        let result = PatientId::parse("A123");
        assert!(matches!(
            result.unwrap_err(),
            IdError::InvalidPrefix { expected: "P", .. }
        ));
    }

    #[test]
    fn test_patient_id_lowercase_prefix() {
        let err = PatientId::parse("p123").unwrap_err();
        assert!(err.is_prefix_error());
    }

    #[test]
    fn test_patient_id_empty() {
        let err = PatientId::parse("").unwrap_err();
        assert!(err.is_empty());
    }

    #[test]
    fn test_patient_id_missing_digits() {
        let result = PatientId::parse("P");
        assert_eq!(result.unwrap_err(), IdError::MissingDigits);
    }

    #[test]
    fn test_patient_id_invalid_digit_position() {
        let result = PatientId::parse("P12A");
        assert_eq!(
            result.unwrap_err(),
            IdError::InvalidDigit {
                found: 'A',
                position: 3
            }
        );
    }

    #[test]
    fn test_patient_id_json_roundtrip() {
        let id = PatientId::parse("P123").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"P123\"");
        let parsed: PatientId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_patient_id_json_rejects_invalid() {
        let result: Result<PatientId, _> = serde_json::from_str("\"p123\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_agrees_with_is_valid() {
        for s in ["P123", "P456789", "A123", "P", "", "p123", "P12A", "P12.3", "123"] {
            assert_eq!(
                PatientId::parse(s).is_ok(),
                crate::is_valid(Some(s)),
                "parse and is_valid disagree on {s:?}"
            );
        }
    }
}
