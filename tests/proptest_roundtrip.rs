//! Property tests for the identifier codecs.

use keyspace_id::Identifier;
use keyspace_id::id::{bytes, decimal, structured};
use num_bigint::BigInt;
use proptest::prelude::*;
use uuid::Uuid;

fn arb_identifier() -> impl Strategy<Value = Identifier> {
    prop_oneof![
        any::<(u64, u64)>().prop_map(|(high, low)| Identifier::new(high, low)),
        Just(Identifier::ZERO),
        Just(Identifier::MAX),
        any::<u64>().prop_map(|low| Identifier::new(0, low)),
    ]
}

proptest! {
    #[test]
    fn buffer_round_trip(buf in any::<[u8; 16]>()) {
        let id = bytes::decode(Some(&buf)).unwrap();
        prop_assert_eq!(bytes::encode(id), buf);
    }

    #[test]
    fn buffer_length_other_than_16_rejected(buf in prop::collection::vec(any::<u8>(), 0..40)) {
        prop_assume!(buf.len() != 16);
        prop_assert!(bytes::decode(Some(buf.as_slice())).unwrap_err().is_shape_error());
    }

    #[test]
    fn structured_preserves_raw_bytes(raw in any::<[u8; 16]>()) {
        let uuid = Uuid::from_bytes(raw);
        let id = structured::decode(uuid);
        prop_assert_eq!(id.to_le_bytes(), raw);
        prop_assert_eq!(*structured::encode(id).as_bytes(), raw);
    }

    #[test]
    fn decimal_round_trip(id in arb_identifier()) {
        prop_assert_eq!(decimal::decode(&decimal::encode(id)), Ok(id));
        prop_assert_eq!(id.to_string().parse::<Identifier>(), Ok(id));
    }

    #[test]
    fn order_matches_magnitude(a in arb_identifier(), b in arb_identifier()) {
        prop_assert_eq!(a.cmp(&b), a.as_u128().cmp(&b.as_u128()));
        prop_assert_eq!(a.cmp(&b), decimal::encode(a).cmp(&decimal::encode(b)));
    }

    #[test]
    fn negative_decimals_rejected(n in 1u128..=u128::MAX) {
        let value = -BigInt::from(n);
        prop_assert!(decimal::decode(&value).unwrap_err().is_domain_error());
    }
}
