/// Run-length encoded occupancy profile for a single (x, z) column
/// Stores alternating run lengths along y starting at the Y_MIN baseline
use crate::count_call;
use crate::perf::FUNCTION_COUNTERS;

/// Baseline y coordinate acting as "negative infinity" for run offsets.
///
/// Every column's first run starts here at the field's default value. The
/// usable y range is bounded below by `Y_MIN`; keeping it at -2^30 leaves
/// run-length sums (which can reach `y - Y_MIN`) comfortably inside `i32`
/// for any practical coordinate.
pub const Y_MIN: i32 = -(1 << 30);

/// One column of the voxel field, encoded as alternating run lengths.
///
/// Runs are stored relative to the field's default value: the run at index 0
/// starts at [`Y_MIN`] holding the default, and every run flips the value of
/// the one before it. Index parity therefore determines the value — even
/// runs hold the default ("baseline"), odd runs hold its complement
/// ("flipped"). Any y beyond the last run reads as baseline.
///
/// Zero-length runs appear transiently when a mutation splits a run exactly
/// at its boundary; [`Column::compress`] collapses them back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Column {
    runs: Vec<i32>,
}

impl Column {
    pub fn new() -> Self {
        Self { runs: Vec::new() }
    }

    /// Build a column directly from run lengths (primarily for tests).
    pub fn from_runs(runs: Vec<i32>) -> Self {
        debug_assert!(runs.iter().all(|&len| len >= 0), "run lengths must be non-negative");
        Self { runs }
    }

    /// Raw run lengths, in order from `Y_MIN` upward.
    #[inline]
    pub fn runs(&self) -> &[i32] {
        &self.runs
    }

    /// Number of explicit runs currently stored.
    #[inline]
    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    /// True if the column carries no explicit runs (entirely baseline).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Whether the cell at `y` differs from the baseline value.
    ///
    /// Walks runs from `Y_MIN` accumulating offsets; cells past the last run
    /// read as baseline.
    pub fn flipped_at(&self, y: i32) -> bool {
        let mut start = Y_MIN;
        for (i, &len) in self.runs.iter().enumerate() {
            let end = start + len;
            if y < end {
                return i % 2 == 1;
            }
            start = end;
        }
        false
    }

    /// Set the cell at `y` to baseline (`false`) or flipped (`true`).
    ///
    /// If `y` falls inside an existing run of the opposite value, that run is
    /// split into three: the part below `y`, a length-1 run at `y`, and the
    /// part above. Either outer part may come out zero-length when `y` sits
    /// exactly at a run boundary; those degenerate runs persist until
    /// [`Column::compress`].
    ///
    /// If `y` lies beyond all runs, the implicit trailing value (baseline for
    /// an even run count, flipped for odd) decides whether anything changes;
    /// when it does, a gap run at the trailing value plus a length-1 run at
    /// the new value are appended.
    pub fn set_flipped(&mut self, y: i32, flipped: bool) {
        debug_assert!(y >= Y_MIN, "y below the Y_MIN baseline is outside the usable range");

        let mut start = Y_MIN;
        for i in 0..self.runs.len() {
            let len = self.runs[i];
            let end = start + len;
            if y < end {
                let run_flipped = i % 2 == 1;
                if run_flipped == flipped {
                    return;
                }
                count_call!(FUNCTION_COUNTERS.run_splits);
                let below = y - start;
                let above = len - below - 1;
                self.runs[i] = below;
                self.runs.insert(i + 1, 1);
                self.runs.insert(i + 2, above);
                return;
            }
            start = end;
        }

        // y is beyond the last run; `start` now holds the end of the profile.
        let trailing_flipped = self.runs.len() % 2 == 1;
        if trailing_flipped == flipped {
            return;
        }
        self.runs.push(y - start);
        self.runs.push(1);
    }

    /// Collapse degenerate zero-length runs left behind by `set_flipped`.
    ///
    /// An interior zero-length run means the value toggled and immediately
    /// toggled back, so the runs on either side hold the same value: the run
    /// after the zero is removed and its length folded into the run before.
    /// Idempotent. Deliberately does NOT merge equal-value non-zero runs
    /// that are not separated by a zero run, and leaves a trailing zero run
    /// in place — dropping it would change the run-count parity that
    /// `set_flipped` uses for the implicit trailing value.
    pub fn compress(&mut self) {
        count_call!(FUNCTION_COUNTERS.compress_calls);
        let mut i = 1;
        while i + 1 < self.runs.len() {
            if self.runs[i] == 0 {
                count_call!(FUNCTION_COUNTERS.runs_merged);
                let folded = self.runs[i + 1];
                self.runs[i - 1] += folded;
                self.runs.drain(i..=i + 1);
                // The run now at `i` came from further up the profile;
                // re-examine the same index before advancing.
            } else {
                i += 1;
            }
        }
    }

    /// Half-open `[start, end)` y-ranges of the flipped (non-baseline) runs.
    pub fn flipped_ranges(&self) -> Vec<(i32, i32)> {
        let mut ranges = Vec::new();
        let mut start = Y_MIN;
        for (i, &len) in self.runs.iter().enumerate() {
            let end = start + len;
            if i % 2 == 1 && len > 0 {
                ranges.push((start, end));
            }
            start = end;
        }
        ranges
    }
}
