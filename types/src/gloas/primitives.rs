use enum_map::Enum;
use serde_repr::{Deserialize_repr, Serialize_repr};
use thiserror::Error;

use crate::gloas::consts::PAYLOAD_INVALID_STATUS;

#[derive(Debug, Error)]
#[error("invalid payload status: {0} (valid statuses are below {PAYLOAD_INVALID_STATUS})")]
pub struct InvalidPayloadStatusError(u8);

/// Verdict a PTC member casts about a builder's execution payload.
///
/// A closed enumeration rather than an integer so that out-of-range values
/// are rejected once, at the decoding boundary. The wire sentinel
/// [`PAYLOAD_INVALID_STATUS`] has no variant here.
#[derive(
    Clone, Copy, PartialEq, Eq, Debug, Default, Enum, Deserialize_repr, Serialize_repr,
)]
#[repr(u8)]
pub enum PayloadStatus {
    #[default]
    Absent = 0,
    Present = 1,
    Withheld = 2,
}

impl TryFrom<u8> for PayloadStatus {
    type Error = InvalidPayloadStatusError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Absent),
            1 => Ok(Self::Present),
            2 => Ok(Self::Withheld),
            _ => Err(InvalidPayloadStatusError(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(0, Some(PayloadStatus::Absent))]
    #[test_case(1, Some(PayloadStatus::Present))]
    #[test_case(2, Some(PayloadStatus::Withheld))]
    #[test_case(PAYLOAD_INVALID_STATUS, None; "the sentinel is not a valid status")]
    #[test_case(u8::MAX, None)]
    fn try_from_validates_the_bound(value: u8, expected: Option<PayloadStatus>) {
        assert_eq!(PayloadStatus::try_from(value).ok(), expected);
    }

    #[test]
    fn serializes_as_the_wire_integer() {
        let json = serde_json::to_string(&PayloadStatus::Withheld)
            .expect("payload status can be serialized");

        assert_eq!(json, "2");

        serde_json::from_str::<PayloadStatus>("3")
            .expect_err("the sentinel is rejected when deserializing");
    }
}
