//! Trace entry point and the iterative search loop.

use crate::canon::{canonical_json_bytes, CanonError};
use crate::error::InputError;
use crate::input::{parse_array, parse_target};
use crate::step::{classify_cells, ProbeOutcomeV1, StepRecordV1};

/// Result of a traced search.
///
/// Produced once per invocation and immutable thereafter. The ordered
/// `steps` list is the normative record of the execution; `found`,
/// `found_index`, and `step_count` are derived conveniences for callers
/// that only need the verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceResultV1 {
    /// The working array: parsed input, sorted ascending.
    pub sorted: Vec<i64>,
    /// The target value searched for.
    pub target: i64,
    /// One record per loop iteration, in execution order.
    pub steps: Vec<StepRecordV1>,
    /// True if the target was found.
    pub found: bool,
    /// Index of the match in `sorted` (absent if not found).
    pub found_index: Option<usize>,
    /// Loop iterations taken, including the terminating one.
    pub step_count: u64,
}

impl TraceResultV1 {
    /// Serialize to canonical JSON bytes: sorted keys, compact separators,
    /// deterministic output. Identical traces always produce identical
    /// bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails; cannot happen for
    /// values built by [`trace`] since every field is integer, boolean,
    /// string-tagged, or null.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Convert to a `serde_json::Value` for canonical serialization.
    #[must_use]
    fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "found": self.found,
            "found_index": self.found_index,
            "sorted": self.sorted,
            "step_count": self.step_count,
            "steps": self.steps.iter().map(step_to_json).collect::<Vec<_>>(),
            "target": self.target,
        })
    }
}

fn step_to_json(s: &StepRecordV1) -> serde_json::Value {
    serde_json::json!({
        "cells": s.cells.iter().map(|c| c.as_str()).collect::<Vec<_>>(),
        "high": s.high,
        "low": s.low,
        "mid": s.mid,
        "outcome": s.outcome.as_str(),
        "probed": s.probed,
        "step": s.step,
    })
}

/// Parse, validate, sort, and trace.
///
/// The single operation exposed to the presentation layer. A pure function
/// of its two inputs: identical inputs always produce an identical step
/// sequence and verdict.
///
/// # Errors
///
/// Returns [`InputError::NotANumber`] or [`InputError::EmptyArray`] from
/// the input boundary. No trace is produced on error.
pub fn trace(raw_array: &str, raw_target: &str) -> Result<TraceResultV1, InputError> {
    let values = parse_array(raw_array)?;
    let target = parse_target(raw_target)?;
    Ok(trace_values(values, target))
}

/// Trace a search over already-validated values.
///
/// Sorts ascending (unstable; order among equal values is unobservable
/// downstream since only values are compared), then runs the iterative
/// loop. An empty `values` yields an empty trace with `found = false`.
///
/// Bounds are held as `i64` so the exhausted state `low > high` is
/// representable when `high` narrows past zero.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub fn trace_values(mut values: Vec<i64>, target: i64) -> TraceResultV1 {
    values.sort_unstable();
    let sorted = values;

    // While the loop runs, 0 <= low <= mid <= high < len, so the
    // usize casts below cannot truncate or lose sign.
    let mut low: i64 = 0;
    let mut high: i64 = sorted.len() as i64 - 1;
    let mut steps: Vec<StepRecordV1> = Vec::new();
    let mut step_count: u64 = 0;
    let mut found_index: Option<usize> = None;

    while low <= high {
        step_count += 1;
        let mid = low + (high - low) / 2;
        let mid_idx = mid as usize;
        let probed = sorted[mid_idx];

        let outcome = match probed.cmp(&target) {
            std::cmp::Ordering::Equal => ProbeOutcomeV1::Found,
            std::cmp::Ordering::Less => ProbeOutcomeV1::SearchRight,
            std::cmp::Ordering::Greater => ProbeOutcomeV1::SearchLeft,
        };

        // Snapshot uses the pre-update bounds.
        steps.push(StepRecordV1 {
            step: step_count,
            low: low as usize,
            high: high as usize,
            mid: mid_idx,
            probed,
            outcome,
            cells: classify_cells(sorted.len(), low as usize, high as usize, mid_idx),
        });

        match outcome {
            ProbeOutcomeV1::Found => {
                found_index = Some(mid_idx);
                break;
            }
            ProbeOutcomeV1::SearchRight => low = mid + 1,
            ProbeOutcomeV1::SearchLeft => high = mid - 1,
        }
    }

    TraceResultV1 {
        sorted,
        target,
        found: found_index.is_some(),
        found_index,
        steps,
        step_count,
    }
}
