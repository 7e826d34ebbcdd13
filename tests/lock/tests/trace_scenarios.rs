//! Scenario and property locks for the trace core: worked examples,
//! boundaries, step-count bounds, per-step invariants, and the canonical
//! JSON surface.

use bisect_tracer::error::InputError;
use bisect_tracer::step::ProbeOutcomeV1;
use bisect_tracer::trace::{trace, trace_values};

// ---------------------------------------------------------------------------
// Worked scenarios
// ---------------------------------------------------------------------------

#[test]
fn scenario_mid_array_hit_in_three_steps() {
    let result = trace("5, 12, 23, 45, 67, 89, 100", "67").unwrap();
    assert_eq!(result.sorted, vec![5, 12, 23, 45, 67, 89, 100]);
    assert!(result.found);
    assert_eq!(result.found_index, Some(4));
    assert_eq!(result.step_count, 3);

    let probes: Vec<(usize, usize, usize, i64)> = result
        .steps
        .iter()
        .map(|s| (s.low, s.high, s.mid, s.probed))
        .collect();
    assert_eq!(probes, vec![(0, 6, 3, 45), (4, 6, 5, 89), (4, 4, 4, 67)]);

    let outcomes: Vec<ProbeOutcomeV1> = result.steps.iter().map(|s| s.outcome).collect();
    assert_eq!(
        outcomes,
        vec![
            ProbeOutcomeV1::SearchRight,
            ProbeOutcomeV1::SearchLeft,
            ProbeOutcomeV1::Found,
        ]
    );
}

#[test]
fn scenario_between_elements_miss() {
    let result = trace("100, 200, 300, 400, 500", "350").unwrap();
    assert_eq!(result.sorted, vec![100, 200, 300, 400, 500]);
    assert!(!result.found);
    assert_eq!(result.found_index, None);
    // Probes 300 then 400, then the interval inverts to [3, 2].
    assert_eq!(result.step_count, 2);
    assert_eq!(result.steps[1].outcome, ProbeOutcomeV1::SearchLeft);
}

// ---------------------------------------------------------------------------
// Boundaries
// ---------------------------------------------------------------------------

#[test]
fn boundary_single_element_hit() {
    let result = trace("42", "42").unwrap();
    assert_eq!(result.step_count, 1);
    assert_eq!(result.found_index, Some(0));
    assert_eq!(
        (result.steps[0].low, result.steps[0].high, result.steps[0].mid),
        (0, 0, 0)
    );
}

#[test]
fn boundary_empty_input_is_empty_array_error() {
    assert_eq!(trace("", "5"), Err(InputError::EmptyArray));
}

#[test]
fn boundary_alpha_input_is_not_a_number_error() {
    assert!(matches!(
        trace("a, b, c", "5"),
        Err(InputError::NotANumber { .. })
    ));
}

#[test]
fn boundary_bad_target_is_not_a_number_error() {
    assert!(matches!(
        trace("1, 2, 3", "five"),
        Err(InputError::NotANumber { .. })
    ));
}

// ---------------------------------------------------------------------------
// Property sweeps
// ---------------------------------------------------------------------------

#[test]
fn every_present_target_is_found_at_a_matching_index() {
    let values: Vec<i64> = vec![40, -3, 17, 0, 99, 23, 8, 64, -51, 12, 5];
    for &target in &values {
        let result = trace_values(values.clone(), target);
        assert!(result.found, "present target {target} must be found");
        let idx = result.found_index.unwrap();
        assert_eq!(result.sorted[idx], target);
    }
}

#[test]
fn absent_targets_terminate_within_log_bound() {
    for n in 1usize..=128 {
        let values: Vec<i64> = (0..n as i64).map(|i| i * 2 + 1).collect();
        let bound = u64::from(usize::BITS - n.leading_zeros()); // floor(log2 n) + 1
        for target in [i64::MIN, 0, 4, 2 * n as i64, i64::MAX] {
            let result = trace_values(values.clone(), target);
            assert!(!result.found, "even target {target} absent from odd array");
            assert!(
                result.step_count <= bound,
                "n={n} target={target}: {} steps exceeds {bound}",
                result.step_count
            );
        }
    }
}

#[test]
fn bounds_invariant_holds_for_every_recorded_step() {
    for n in 1usize..=40 {
        let values: Vec<i64> = (0..n as i64).collect();
        for target in -2..=(n as i64 + 1) {
            let result = trace_values(values.clone(), target);
            for s in &result.steps {
                assert!(s.low <= s.mid, "step {}: low > mid", s.step);
                assert!(s.mid <= s.high, "step {}: mid > high", s.step);
                assert!(s.high < n, "step {}: high out of bounds", s.step);
                assert_eq!(s.cells.len(), n, "cell row must cover the array");
            }
        }
    }
}

#[test]
fn step_numbers_are_contiguous_from_one() {
    let result = trace("2, 4, 6, 8, 10, 12, 14, 16, 18, 20", "1").unwrap();
    for (i, s) in result.steps.iter().enumerate() {
        assert_eq!(s.step, i as u64 + 1);
    }
    assert_eq!(result.step_count, result.steps.len() as u64);
}

#[test]
fn duplicate_targets_pin_midpoint_landing() {
    // Not canonicalized to first/last occurrence: the landing index is
    // whatever the midpoint formula produces.
    let result = trace_values(vec![7; 9], 7);
    assert_eq!(result.found_index, Some(4));
    assert_eq!(result.step_count, 1);

    let result = trace_values(vec![1, 7, 7, 7, 9], 7);
    assert_eq!(result.found_index, Some(2));
}

// ---------------------------------------------------------------------------
// Canonical JSON surface
// ---------------------------------------------------------------------------

#[test]
fn canonical_bytes_parse_back_to_expected_shape() {
    let result = trace("5, 12, 23, 45, 67, 89, 100", "67").unwrap();
    let bytes = result.to_canonical_json_bytes().unwrap();
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(value["found"], serde_json::json!(true));
    assert_eq!(value["found_index"], serde_json::json!(4));
    assert_eq!(value["step_count"], serde_json::json!(3));
    assert_eq!(value["target"], serde_json::json!(67));
    assert_eq!(value["sorted"], serde_json::json!([5, 12, 23, 45, 67, 89, 100]));

    let steps = value["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 3);
    assert_eq!(steps[0]["outcome"], serde_json::json!("search_right"));
    assert_eq!(steps[2]["outcome"], serde_json::json!("found"));
    assert_eq!(
        steps[0]["cells"].as_array().unwrap().len(),
        result.sorted.len()
    );
}

#[test]
fn not_found_serializes_found_index_as_null() {
    let result = trace("1, 2, 3", "9").unwrap();
    let bytes = result.to_canonical_json_bytes().unwrap();
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert!(value["found_index"].is_null());
}
