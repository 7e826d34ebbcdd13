//! Step record types: one immutable snapshot per search iteration.

/// Per-index classification of the working array at the time of a step.
///
/// Computed against the *pre-update* bounds, so the classification reflects
/// the interval as it was when the midpoint was compared, not after
/// narrowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellMarkV1 {
    /// Index lies outside `[low, high]`, already ruled out.
    OutOfRange,
    /// Index lies inside `[low, high]` but is not the midpoint.
    InRange,
    /// The midpoint being compared this step.
    Midpoint,
}

impl CellMarkV1 {
    /// Stable tag used in canonical JSON.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OutOfRange => "out_of_range",
            Self::InRange => "in_range",
            Self::Midpoint => "midpoint",
        }
    }
}

/// Outcome of the midpoint comparison for one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcomeV1 {
    /// `array[mid] == target`; the loop stops at this step.
    Found,
    /// `array[mid] > target`; the search narrows to `[low, mid - 1]`.
    SearchLeft,
    /// `array[mid] < target`; the search narrows to `[mid + 1, high]`.
    SearchRight,
}

impl ProbeOutcomeV1 {
    /// Stable tag used in canonical JSON.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Found => "found",
            Self::SearchLeft => "search_left",
            Self::SearchRight => "search_right",
        }
    }
}

/// An immutable snapshot of one search iteration.
///
/// `low`, `high`, and `mid` are the bounds as they were when the comparison
/// at `mid` happened; `low <= mid <= high` always holds and all three index
/// the working array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecordV1 {
    /// 1-based iteration index.
    pub step: u64,
    /// Inclusive lower bound at comparison time.
    pub low: usize,
    /// Inclusive upper bound at comparison time.
    pub high: usize,
    /// Midpoint index: `low + (high - low) / 2`.
    pub mid: usize,
    /// The value at `mid`.
    pub probed: i64,
    /// How the probed value compared to the target.
    pub outcome: ProbeOutcomeV1,
    /// One mark per working-array index.
    pub cells: Vec<CellMarkV1>,
}

/// Classify every index of a length-`len` array against `[low, high]` and
/// `mid`.
#[must_use]
pub fn classify_cells(len: usize, low: usize, high: usize, mid: usize) -> Vec<CellMarkV1> {
    (0..len)
        .map(|i| {
            if i == mid {
                CellMarkV1::Midpoint
            } else if i >= low && i <= high {
                CellMarkV1::InRange
            } else {
                CellMarkV1::OutOfRange
            }
        })
        .collect()
}
