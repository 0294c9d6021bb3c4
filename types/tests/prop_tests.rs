use proptest::prelude::*;

use zkid_types::{Address, AttemptId, Timestamp};

proptest! {
    /// Any 20 bytes render to a parseable address naming the same bytes.
    #[test]
    fn address_display_parses_back(bytes in prop::array::uniform20(0u8..)) {
        let addr = Address::new(bytes);
        let text = addr.to_string();
        prop_assert!(text.starts_with("0x"));
        prop_assert_eq!(text.len(), 42);
        let parsed: Address = text.parse().unwrap();
        prop_assert_eq!(parsed.as_bytes(), &bytes);
    }

    /// is_zero holds only for the all-zero address.
    #[test]
    fn address_is_zero_correct(bytes in prop::array::uniform20(0u8..)) {
        prop_assert_eq!(Address::new(bytes).is_zero(), bytes == [0u8; 20]);
    }

    /// Address survives bincode, which snapshots rely on.
    #[test]
    fn address_bincode_roundtrip(bytes in prop::array::uniform20(0u8..)) {
        let addr = Address::new(bytes);
        let encoded = bincode::serialize(&addr).unwrap();
        let decoded: Address = bincode::deserialize(&encoded).unwrap();
        prop_assert_eq!(decoded, addr);
    }

    /// Attempt ids order like the integers they wrap.
    #[test]
    fn attempt_id_ordering(a in any::<u64>(), b in any::<u64>()) {
        prop_assert_eq!(AttemptId::new(a) < AttemptId::new(b), a < b);
    }

    /// has_expired agrees with saturating arithmetic.
    #[test]
    fn timestamp_has_expired(
        start in 0u64..u64::MAX / 2,
        ttl in 0u64..1_000_000,
        now in 0u64..u64::MAX / 2,
    ) {
        let opened = Timestamp::new(start);
        prop_assert_eq!(
            opened.has_expired(ttl, Timestamp::new(now)),
            now >= start.saturating_add(ttl)
        );
    }
}
