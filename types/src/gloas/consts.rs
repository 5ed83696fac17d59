/// Wire-level bound on payload status values.
///
/// Only a size bound, never a valid verdict. Kept out of [`PayloadStatus`]
/// itself so the sentinel is unrepresentable past the decoding boundary.
pub const PAYLOAD_INVALID_STATUS: u8 = 3;

#[cfg(test)]
mod tests {
    use enum_map::Enum as _;

    use crate::gloas::primitives::PayloadStatus;

    use super::*;

    #[test]
    fn sentinel_matches_the_number_of_valid_statuses() {
        assert_eq!(usize::from(PAYLOAD_INVALID_STATUS), PayloadStatus::LENGTH);
    }
}
