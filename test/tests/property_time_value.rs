/// Property-based tests for TimeValue normalization and conversions

use proptest::prelude::*;

use tuio_shared::{TimeValue, MICROS_PER_SECOND};

fn wall_clock() -> impl Strategy<Value = TimeValue> {
    (0i64..2_000_000_000, 0i64..MICROS_PER_SECOND)
        .prop_map(|(seconds, micros)| TimeValue::new(seconds, micros))
}

proptest! {
    /// Any seconds/microseconds pair normalizes to micros in 0..1_000_000
    /// without changing the total
    #[test]
    fn prop_new_normalizes(
        seconds in -1_000_000i64..1_000_000,
        micros in -10_000_000_000i64..10_000_000_000,
    ) {
        let time = TimeValue::new(seconds, micros);
        prop_assert!((0..1_000_000).contains(&time.microseconds()));
        prop_assert_eq!(time.total_micros(), seconds * MICROS_PER_SECOND + micros);
    }

    #[test]
    fn prop_add_then_sub_is_identity(
        a in wall_clock(),
        delta in -10_000_000_000i64..10_000_000_000,
    ) {
        let shifted = a.add_micros(delta);
        prop_assert!((0..1_000_000).contains(&shifted.microseconds()));
        prop_assert_eq!(shifted.sub_micros(delta), a);
        prop_assert_eq!((a + TimeValue::from_micros(delta)) - TimeValue::from_micros(delta), a);
    }

    #[test]
    fn prop_ordering_follows_total_micros(a in wall_clock(), b in wall_clock()) {
        prop_assert_eq!(a.cmp(&b), a.total_micros().cmp(&b.total_micros()));
    }

    /// Converting to an OSC time tag and back loses nothing at microsecond
    /// resolution
    #[test]
    fn prop_osc_time_round_trip(time in wall_clock()) {
        prop_assert_eq!(TimeValue::from_osc_time(time.to_osc_time()), time);
    }
}
