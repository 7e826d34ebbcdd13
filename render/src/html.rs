//! Trace → HTML fragment renderer.
//!
//! The midpoint cell is highlighted gold, in-range cells light blue,
//! ruled-out cells gray; a green verdict line on success, red on failure.
//! Output is a fragment, not a page; the embedding UI owns the document.

use std::fmt::Write;

use bisect_tracer::error::InputError;
use bisect_tracer::step::{CellMarkV1, ProbeOutcomeV1, StepRecordV1};
use bisect_tracer::trace::{trace, TraceResultV1};

/// Cell background for the midpoint.
const COLOR_MIDPOINT: &str = "#FFD700";
/// Cell background for indices still inside `[low, high]`.
const COLOR_IN_RANGE: &str = "#ADD8E6";
/// Text color for indices already ruled out.
const COLOR_OUT_OF_RANGE: &str = "#CCCCCC";

/// Run a traced search on raw input and render the outcome.
///
/// On validation failure this renders the fixed error markup instead; no
/// search is performed. This is the one entry point a text-in/markup-out
/// caller needs.
#[must_use]
pub fn render_html(raw_array: &str, raw_target: &str) -> String {
    match trace(raw_array, raw_target) {
        Ok(result) => render_trace_html(&result),
        Err(err) => render_error_html(&err),
    }
}

/// Render a complete trace as an HTML fragment.
///
/// Total for any well-formed trace: every step's `cells` length matches
/// the working array, so indexing cannot fail.
#[must_use]
pub fn render_trace_html(result: &TraceResultV1) -> String {
    let mut out = String::new();
    out.push_str("<h3>\u{1f50d} Binary Search Visualization</h3>");
    let _ = write!(
        out,
        "<p><strong>Sorted Array:</strong> {}</p>",
        format_array(&result.sorted)
    );
    let _ = write!(out, "<p><strong>Target:</strong> {}</p>", result.target);
    out.push_str("<hr>");

    for step in &result.steps {
        render_step(&mut out, step, result);
        if step.outcome != ProbeOutcomeV1::Found {
            out.push_str("<hr style='border: 1px dashed #CCCCCC;'>");
        }
    }

    if result.found {
        let _ = write!(out, "<p>Total steps: {}</p>", result.step_count);
    } else {
        let _ = write!(
            out,
            "<p style='color: red;'><strong>\u{274c} Not Found! Target {} is not in the array.</strong></p>",
            result.target
        );
        let _ = write!(out, "<p>Total steps: {}</p>", result.step_count);
    }
    out
}

/// Render the fixed user-facing markup for an input error.
#[must_use]
pub fn render_error_html(err: &InputError) -> String {
    match err {
        InputError::NotANumber { .. } => {
            "<p style='color: red;'>\u{274c} Error: Please enter valid numbers separated by commas.</p>"
                .to_string()
        }
        InputError::EmptyArray => {
            "<p style='color: red;'>\u{274c} Error: Array cannot be empty.</p>".to_string()
        }
    }
}

fn render_step(out: &mut String, step: &StepRecordV1, result: &TraceResultV1) {
    out.push_str("<div style='font-family: monospace; font-size: 16px;'>");
    let _ = write!(out, "<p><strong>Step {}:</strong></p>", step.step);
    out.push_str("<p>Array: ");
    for (value, mark) in result.sorted.iter().zip(&step.cells) {
        render_cell(out, *value, *mark);
    }
    out.push_str("</p>");
    let _ = write!(
        out,
        "<p>\u{2192} Left index: {}, Right index: {}, Mid index: {}</p>",
        step.low, step.high, step.mid
    );
    let _ = write!(
        out,
        "<p>\u{2192} Comparing: arr[{}] = {} with target = {}</p>",
        step.mid, step.probed, result.target
    );
    match step.outcome {
        ProbeOutcomeV1::Found => {
            let _ = write!(
                out,
                "<p style='color: green;'><strong>\u{2705} Found! Target {} is at index {}</strong></p>",
                result.target, step.mid
            );
        }
        ProbeOutcomeV1::SearchRight => {
            let _ = write!(
                out,
                "<p>\u{2192} {} < {}, search RIGHT half</p>",
                step.probed, result.target
            );
        }
        ProbeOutcomeV1::SearchLeft => {
            let _ = write!(
                out,
                "<p>\u{2192} {} > {}, search LEFT half</p>",
                step.probed, result.target
            );
        }
    }
    out.push_str("</div>");
}

fn render_cell(out: &mut String, value: i64, mark: CellMarkV1) {
    match mark {
        CellMarkV1::Midpoint => {
            let _ = write!(
                out,
                "<span style='background-color: {COLOR_MIDPOINT}; padding: 2px 8px; \
                 margin: 2px; border-radius: 4px;'><strong>[{value}]</strong></span> "
            );
        }
        CellMarkV1::InRange => {
            let _ = write!(
                out,
                "<span style='background-color: {COLOR_IN_RANGE}; padding: 2px 8px; \
                 margin: 2px; border-radius: 4px;'>{value}</span> "
            );
        }
        CellMarkV1::OutOfRange => {
            let _ = write!(
                out,
                "<span style='color: {COLOR_OUT_OF_RANGE}; padding: 2px 8px; \
                 margin: 2px;'>{value}</span> "
            );
        }
    }
}

/// Format the working array like the demo's sorted-array line: `[5, 12, 23]`.
fn format_array(values: &[i64]) -> String {
    let mut out = String::from("[");
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{v}");
    }
    out.push(']');
    out
}
