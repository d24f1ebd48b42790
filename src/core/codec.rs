//! Line codec for the flat-file store
//!
//! Every entity persists as a single pipe-delimited line; list-valued fields
//! comma-join inside their slot. Decoding tolerates lines with fewer fields
//! than the current format emits (down to a per-type legacy floor) so files
//! written by earlier format versions stay readable. A line that cannot be
//! decoded is reported as a [`DecodeError`] and skipped by the store, never
//! escalated.

use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Delimiter between fields of one record.
pub const FIELD_DELIMITER: char = '|';

/// Delimiter between members of a list-valued field.
pub const LIST_DELIMITER: char = ',';

/// Errors produced while decoding a persisted line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The line has fewer fields than the type's legacy floor.
    #[error("expected at least {expected} fields, found {found}")]
    FieldCount {
        /// Minimum accepted field count.
        expected: usize,
        /// Field count actually present.
        found: usize,
    },
    /// An identifier field does not hold a valid UUID.
    #[error("invalid identifier in field '{field}'")]
    InvalidId {
        /// Name of the offending field.
        field: &'static str,
    },
    /// A numeric field does not parse.
    #[error("invalid number in field '{field}': '{value}'")]
    InvalidNumber {
        /// Name of the offending field.
        field: &'static str,
        /// The raw value found.
        value: String,
    },
    /// A boolean field is neither `true` nor `false` (any case).
    #[error("invalid flag in field '{field}': '{value}'")]
    InvalidFlag {
        /// Name of the offending field.
        field: &'static str,
        /// The raw value found.
        value: String,
    },
    /// An enum field carries a code no variant maps to.
    #[error("unknown code {code} in field '{field}'")]
    UnknownCode {
        /// Name of the offending field.
        field: &'static str,
        /// The unmapped numeric code.
        code: u16,
    },
}

/// Capability shared by every persisted entity: identity plus line encode/decode.
///
/// Implemented per entity as plain data and associated functions; the store
/// drives whole-file reads and writes through this trait.
pub trait Record: Sized {
    /// Name of the data file this entity type persists to.
    const FILE_NAME: &'static str;

    /// The record's immutable identifier.
    fn id(&self) -> Uuid;

    /// Encode the record as one pipe-delimited line (no trailing newline).
    fn encode(&self) -> String;

    /// Decode a record from a pipe-delimited line.
    ///
    /// Trailing fields absent from legacy lines default (empty list, nil
    /// identifier, no grade).
    ///
    /// # Errors
    /// Returns a [`DecodeError`] when the line has too few fields or a field
    /// cannot be interpreted.
    fn decode(line: &str) -> Result<Self, DecodeError>;
}

/// Split a line into its raw fields.
#[must_use]
pub fn split_fields(line: &str) -> Vec<&str> {
    line.split(FIELD_DELIMITER).collect()
}

/// Check that a field slice meets the legacy floor for its type.
///
/// # Errors
/// Returns [`DecodeError::FieldCount`] when it does not.
pub fn require_fields(fields: &[&str], floor: usize) -> Result<(), DecodeError> {
    if fields.len() < floor {
        return Err(DecodeError::FieldCount {
            expected: floor,
            found: fields.len(),
        });
    }
    Ok(())
}

/// Parse a required identifier field.
///
/// # Errors
/// Returns [`DecodeError::InvalidId`] when the value is not a UUID.
pub fn parse_id(value: &str, field: &'static str) -> Result<Uuid, DecodeError> {
    Uuid::parse_str(value.trim()).map_err(|_| DecodeError::InvalidId { field })
}

/// Parse an identifier field that legacy lines may omit; absent defaults to nil.
///
/// A field that is present but malformed is still an error; only a missing
/// slot defaults.
///
/// # Errors
/// Returns [`DecodeError::InvalidId`] when a present value is not a UUID.
pub fn parse_trailing_id(
    fields: &[&str],
    index: usize,
    field: &'static str,
) -> Result<Uuid, DecodeError> {
    match fields.get(index) {
        Some(value) if !value.trim().is_empty() => parse_id(value, field),
        _ => Ok(Uuid::nil()),
    }
}

/// Parse a numeric field of any `FromStr` number type.
///
/// # Errors
/// Returns [`DecodeError::InvalidNumber`] when the value does not parse.
pub fn parse_num<T: FromStr>(value: &str, field: &'static str) -> Result<T, DecodeError> {
    value.trim().parse::<T>().map_err(|_| DecodeError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

/// Parse a boolean field, accepting any ASCII casing.
///
/// Files written by older exporters carry `True`/`False`; encoding always
/// emits lowercase.
///
/// # Errors
/// Returns [`DecodeError::InvalidFlag`] for anything but true/false.
pub fn parse_flag(value: &str, field: &'static str) -> Result<bool, DecodeError> {
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(DecodeError::InvalidFlag {
            field,
            value: value.to_string(),
        })
    }
}

/// Join identifiers into one comma-delimited list slot.
#[must_use]
pub fn join_ids(ids: &[Uuid]) -> String {
    ids.iter()
        .map(Uuid::to_string)
        .collect::<Vec<_>>()
        .join(&LIST_DELIMITER.to_string())
}

/// Parse a comma-delimited identifier list; empty slots yield an empty list.
///
/// # Errors
/// Returns [`DecodeError::InvalidId`] when any member is not a UUID.
pub fn parse_ids(value: &str, field: &'static str) -> Result<Vec<Uuid>, DecodeError> {
    value
        .split(LIST_DELIMITER)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| parse_id(part, field))
        .collect()
}

/// Parse an identifier-list field that legacy lines may omit entirely.
///
/// # Errors
/// Returns [`DecodeError::InvalidId`] when a present member is not a UUID.
pub fn parse_trailing_ids(
    fields: &[&str],
    index: usize,
    field: &'static str,
) -> Result<Vec<Uuid>, DecodeError> {
    fields
        .get(index)
        .map_or_else(|| Ok(Vec::new()), |value| parse_ids(value, field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_fields_preserves_empty_slots() {
        let fields = split_fields("a||c");
        assert_eq!(fields, vec!["a", "", "c"]);
    }

    #[test]
    fn test_require_fields() {
        let fields = vec!["a", "b", "c"];
        assert!(require_fields(&fields, 3).is_ok());
        assert_eq!(
            require_fields(&fields, 4),
            Err(DecodeError::FieldCount {
                expected: 4,
                found: 3
            })
        );
    }

    #[test]
    fn test_parse_id_rejects_garbage() {
        assert!(parse_id("7c9e6679-7425-40de-944b-e07fc1f90ae7", "id").is_ok());
        assert_eq!(
            parse_id("not-a-uuid", "id"),
            Err(DecodeError::InvalidId { field: "id" })
        );
    }

    #[test]
    fn test_parse_trailing_id_defaults_to_nil() {
        let fields = vec!["a", "b"];
        assert_eq!(parse_trailing_id(&fields, 5, "group_id"), Ok(Uuid::nil()));

        let with_empty = vec!["a", ""];
        assert_eq!(
            parse_trailing_id(&with_empty, 1, "group_id"),
            Ok(Uuid::nil())
        );
    }

    #[test]
    fn test_parse_flag_any_case() {
        assert_eq!(parse_flag("True", "f"), Ok(true));
        assert_eq!(parse_flag("FALSE", "f"), Ok(false));
        assert_eq!(parse_flag("true", "f"), Ok(true));
        assert!(parse_flag("yes", "f").is_err());
    }

    #[test]
    fn test_parse_num_reports_value() {
        assert_eq!(parse_num::<u16>("42", "hours"), Ok(42));
        let err = parse_num::<u16>("a lot", "hours").unwrap_err();
        assert_eq!(
            err,
            DecodeError::InvalidNumber {
                field: "hours",
                value: "a lot".to_string()
            }
        );
    }

    #[test]
    fn test_join_and_parse_ids_round_trip() {
        let ids = vec![Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4()];
        let joined = join_ids(&ids);
        let parsed = parse_ids(&joined, "ids").unwrap();
        assert_eq!(parsed, ids);
    }

    #[test]
    fn test_parse_ids_empty_slot() {
        assert_eq!(parse_ids("", "ids"), Ok(Vec::new()));
    }

    #[test]
    fn test_parse_ids_bad_member_fails_line() {
        let value = format!("{},oops", Uuid::new_v4());
        assert!(parse_ids(&value, "ids").is_err());
    }
}
