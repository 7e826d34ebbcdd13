//! Illustrative preset input pairs shipped with the demo.

/// A raw input pair exactly as a user would type it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetV1 {
    /// Comma-separated array text.
    pub array: &'static str,
    /// Target text.
    pub target: &'static str,
}

/// The default textbox contents (unsorted on purpose, to show the sort).
pub const DEFAULT_INPUT: PresetV1 = PresetV1 {
    array: "10, 23, 45, 70, 11, 15, 36, 99, 2, 87",
    target: "45",
};

/// The four "try these" examples: a mid-array hit, a hit in a longer odd
/// array, a miss between elements, and a miss below all elements.
pub const PRESETS: [PresetV1; 4] = [
    PresetV1 {
        array: "5, 12, 23, 45, 67, 89, 100",
        target: "67",
    },
    PresetV1 {
        array: "1, 3, 5, 7, 9, 11, 13, 15, 17, 19",
        target: "13",
    },
    PresetV1 {
        array: "100, 200, 300, 400, 500",
        target: "350",
    },
    PresetV1 {
        array: "2, 4, 6, 8, 10, 12, 14, 16, 18, 20",
        target: "1",
    },
];
