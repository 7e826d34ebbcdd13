//! Bisect Tracer: deterministic step-traced binary search.
//!
//! This crate is the algorithmic core of the workspace. It parses raw
//! comma-separated input, sorts the working array, runs iterative binary
//! search, and records every iteration as an immutable step record. It does
//! NOT produce markup; rendering is owned by `bisect-render`.
//!
//! # Crate dependency graph
//!
//! ```text
//! bisect_tracer  ←  bisect_render
//! (trace core)      (HTML projection, presets)
//! ```
//!
//! # Key types
//!
//! - [`StepRecordV1`] — one search iteration, snapshotted pre-narrowing
//! - [`TraceResultV1`] — ordered step records plus the final verdict
//! - [`InputError`] — the two recoverable input-boundary failures
//!
//! [`StepRecordV1`]: step::StepRecordV1
//! [`TraceResultV1`]: trace::TraceResultV1
//! [`InputError`]: error::InputError

#![forbid(unsafe_code)]

pub mod canon;
pub mod digest;
pub mod error;
pub mod input;
pub mod step;
pub mod trace;
