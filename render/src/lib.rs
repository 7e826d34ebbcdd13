//! Bisect Render: HTML projection of a search trace.
//!
//! Rendering is a derived view: the trace is authoritative, and every
//! function here is a pure, deterministic projection of
//! [`bisect_tracer::trace::TraceResultV1`] (or of an input error) into
//! markup. The render layer never runs search logic and never mutates a
//! trace.
//!
//! Widget trees, event wiring, and hosting are out of scope; callers own
//! the surrounding page and feed these fragments into it.

#![forbid(unsafe_code)]

pub mod html;
pub mod presets;
