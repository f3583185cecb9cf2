//! Property tests for the expiry sort key (pure domain, no DB).
//!
//! Properties tested:
//! - Second and millisecond forms of the same instant agree
//! - RFC 3339 rendering of an instant maps back to the same key
//! - Key order follows timestamp order

use proptest::prelude::*;
use serde_json::json;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::domain::expiry::sort_key;

// 1970-01-01 .. 2100-01-01
const MAX_SECS: i64 = 4_102_444_800;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: seconds and milliseconds of one instant give one key
    #[test]
    fn prop_seconds_and_millis_agree(secs in 0i64..MAX_SECS) {
        let from_secs = sort_key(&json!(secs));
        let from_millis = sort_key(&json!(secs * 1000));
        prop_assert_eq!(from_secs, Some(secs * 1000));
        prop_assert_eq!(from_secs, from_millis);
    }

    /// Property: RFC 3339 strings round-trip to the instant they render
    #[test]
    fn prop_rfc3339_matches_timestamp(secs in 0i64..MAX_SECS) {
        let dt = OffsetDateTime::from_unix_timestamp(secs).unwrap();
        let rendered = dt.format(&Rfc3339).unwrap();
        prop_assert_eq!(sort_key(&json!(rendered)), Some(secs * 1000));
    }

    /// Property: key order is timestamp order
    #[test]
    fn prop_key_order_is_monotonic(a in 0i64..MAX_SECS, b in 0i64..MAX_SECS) {
        let ka = sort_key(&json!(a)).unwrap();
        let kb = sort_key(&json!(b)).unwrap();
        prop_assert_eq!(a.cmp(&b), ka.cmp(&kb));
    }
}
