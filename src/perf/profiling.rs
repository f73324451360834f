/// Instrumentation infrastructure for microoptimization
/// Provides function call counting across the field and meshing hot paths
use std::sync::atomic::{AtomicU64, Ordering};

/// Thread-safe performance counters for function call tracking
pub struct FunctionCounters {
    // Column store counters
    pub point_query_calls: AtomicU64,
    pub point_mutate_calls: AtomicU64,
    pub run_splits: AtomicU64,
    pub compress_calls: AtomicU64,
    pub runs_merged: AtomicU64,
    pub raster_steps: AtomicU64,

    // Extraction counters
    pub extract_calls: AtomicU64,
    pub column_passes: AtomicU64,
    pub neighbor_passes: AtomicU64,
    pub cells_marched: AtomicU64,
    pub triangles_emitted: AtomicU64,
}

impl FunctionCounters {
    pub const fn new() -> Self {
        Self {
            point_query_calls: AtomicU64::new(0),
            point_mutate_calls: AtomicU64::new(0),
            run_splits: AtomicU64::new(0),
            compress_calls: AtomicU64::new(0),
            runs_merged: AtomicU64::new(0),
            raster_steps: AtomicU64::new(0),
            extract_calls: AtomicU64::new(0),
            column_passes: AtomicU64::new(0),
            neighbor_passes: AtomicU64::new(0),
            cells_marched: AtomicU64::new(0),
            triangles_emitted: AtomicU64::new(0),
        }
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        self.point_query_calls.store(0, Ordering::Relaxed);
        self.point_mutate_calls.store(0, Ordering::Relaxed);
        self.run_splits.store(0, Ordering::Relaxed);
        self.compress_calls.store(0, Ordering::Relaxed);
        self.runs_merged.store(0, Ordering::Relaxed);
        self.raster_steps.store(0, Ordering::Relaxed);
        self.extract_calls.store(0, Ordering::Relaxed);
        self.column_passes.store(0, Ordering::Relaxed);
        self.neighbor_passes.store(0, Ordering::Relaxed);
        self.cells_marched.store(0, Ordering::Relaxed);
        self.triangles_emitted.store(0, Ordering::Relaxed);
    }

    /// Get snapshot of all counters
    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            point_query_calls: self.point_query_calls.load(Ordering::Relaxed),
            point_mutate_calls: self.point_mutate_calls.load(Ordering::Relaxed),
            run_splits: self.run_splits.load(Ordering::Relaxed),
            compress_calls: self.compress_calls.load(Ordering::Relaxed),
            runs_merged: self.runs_merged.load(Ordering::Relaxed),
            raster_steps: self.raster_steps.load(Ordering::Relaxed),
            extract_calls: self.extract_calls.load(Ordering::Relaxed),
            column_passes: self.column_passes.load(Ordering::Relaxed),
            neighbor_passes: self.neighbor_passes.load(Ordering::Relaxed),
            cells_marched: self.cells_marched.load(Ordering::Relaxed),
            triangles_emitted: self.triangles_emitted.load(Ordering::Relaxed),
        }
    }
}

/// Snapshot of counter values at a point in time
#[derive(Debug, Clone, Copy)]
pub struct CounterSnapshot {
    pub point_query_calls: u64,
    pub point_mutate_calls: u64,
    pub run_splits: u64,
    pub compress_calls: u64,
    pub runs_merged: u64,
    pub raster_steps: u64,
    pub extract_calls: u64,
    pub column_passes: u64,
    pub neighbor_passes: u64,
    pub cells_marched: u64,
    pub triangles_emitted: u64,
}

impl CounterSnapshot {
    /// Print formatted report
    pub fn print_report(&self) {
        println!("\n=== Performance Counters Report ===");
        println!("\nColumn Store Operations:");
        println!("  point queries:              {:12}", self.point_query_calls);
        println!("  point mutations:            {:12}", self.point_mutate_calls);
        println!("  run splits:                 {:12}", self.run_splits);
        println!("  compress calls:             {:12}", self.compress_calls);
        println!("  runs merged:                {:12}", self.runs_merged);
        println!("  raster steps:               {:12}", self.raster_steps);

        println!("\nExtraction Operations:");
        println!("  extract calls:              {:12}", self.extract_calls);
        println!("  column passes:              {:12}", self.column_passes);
        println!("  neighbor passes:            {:12}", self.neighbor_passes);
        println!("  cells marched:              {:12}", self.cells_marched);
        println!("  triangles emitted:          {:12}", self.triangles_emitted);
        if self.cells_marched > 0 {
            let per_cell = self.triangles_emitted as f64 / self.cells_marched as f64;
            println!("  triangles per cell:         {:12.2}", per_cell);
        }

        println!();
    }
}

/// Global function counters instance
pub static FUNCTION_COUNTERS: FunctionCounters = FunctionCounters::new();

/// Macro for incrementing a counter (only when profiling feature is enabled)
#[macro_export]
macro_rules! count_call {
    ($counter:expr) => {
        #[cfg(feature = "profiling")]
        {
            $counter.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        }
    };
}

/// Macro for adding to a counter (only when profiling feature is enabled)
#[macro_export]
macro_rules! count_add {
    ($counter:expr, $value:expr) => {
        #[cfg(feature = "profiling")]
        {
            $counter.fetch_add($value, std::sync::atomic::Ordering::Relaxed);
        }
    };
}
