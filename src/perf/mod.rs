/// Performance measurement utilities
/// Field mutation and surface extraction stages can be timed and counted
/// for optimization analysis
pub mod profiling;

pub use profiling::{CounterSnapshot, FunctionCounters, FUNCTION_COUNTERS};

use std::time::{Duration, Instant};

pub struct PerfTimer {
    name: &'static str,
    start: Instant,
}

impl PerfTimer {
    #[inline]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            start: Instant::now(),
        }
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for PerfTimer {
    fn drop(&mut self) {
        let elapsed = self.elapsed();
        println!("[PERF] {}: {:.2}μs", self.name, elapsed.as_micros());
    }
}

/// Per-session accumulator for the major pipeline stages.
#[derive(Default)]
pub struct PerfStats {
    pub mutation_us: f64,
    pub compaction_us: f64,
    pub extraction_us: f64,
    pub total_us: f64,
}

impl PerfStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn print_summary(&self) {
        println!("\n========== PERFORMANCE SUMMARY ==========");
        println!(
            "Mutation:        {:8.2}μs ({:5.1}%)",
            self.mutation_us,
            (self.mutation_us / self.total_us) * 100.0
        );
        println!(
            "Compaction:      {:8.2}μs ({:5.1}%)",
            self.compaction_us,
            (self.compaction_us / self.total_us) * 100.0
        );
        println!(
            "Extraction:      {:8.2}μs ({:5.1}%)",
            self.extraction_us,
            (self.extraction_us / self.total_us) * 100.0
        );
        println!("─────────────────────────────────────────");
        println!("Total:           {:8.2}μs", self.total_us);
        println!("=========================================\n");
    }
}

/// Macro for easy performance measurement
#[macro_export]
macro_rules! perf_scope {
    ($name:expr) => {
        let _timer = $crate::perf::PerfTimer::new($name);
    };
}
