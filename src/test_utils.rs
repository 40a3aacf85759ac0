//! Shared proptest strategies.

use proptest::prelude::*;

/// Text matching the strict numeric pattern whose value lies in `[0, 100]`.
pub(crate) fn arb_in_range_text() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u8..=100).prop_map(|n| n.to_string()),
        (0u8..100, 0u32..1000).prop_map(|(n, frac)| format!("{}.{}", n, frac)),
        (0u8..=100, "[ \t]{0,3}", "[ \t]{0,3}")
            .prop_map(|(n, lead, trail)| format!("{}{}{}", lead, n, trail)),
    ]
}

/// Integers outside `[0, 100]`.
pub(crate) fn arb_out_of_range_int() -> impl Strategy<Value = i64> {
    prop_oneof![i64::MIN..0, 101..=i64::MAX]
}
