//! Shared input builders for the microbenchmarks.
//!
//! Inputs are generated with a fixed linear congruential generator so
//! benchmark runs are comparable across machines and commits.

/// Deterministic pseudo-shuffled values, distinct, in no particular order.
#[must_use]
pub fn shuffled_values(n: usize) -> Vec<i64> {
    let mut values: Vec<i64> = (0..n as i64).map(|i| i * 3 + 1).collect();
    // Fisher-Yates with a fixed-seed LCG (Numerical Recipes constants).
    let mut state: u64 = 0x5eed_1234_abcd_0001;
    for i in (1..values.len()).rev() {
        state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1_442_695_040_888_963_407);
        #[allow(clippy::cast_possible_truncation)]
        let j = (state >> 33) as usize % (i + 1);
        values.swap(i, j);
    }
    values
}

/// Render values as the comma-separated text a user would type.
#[must_use]
pub fn raw_array_text(values: &[i64]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
