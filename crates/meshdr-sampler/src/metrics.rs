//! Batch metrics — data collected while draining a sample sequence.

use serde::{Deserialize, Serialize};

/// Metrics collected from one batch run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchMetrics {
    /// Number of samples delivered to the sink.
    pub samples: usize,
    /// Triangle count shared by the base and every sample.
    pub triangle_count: usize,
    /// Total wall-clock time (seconds).
    pub total_wall_time: f64,
    /// Average wall-clock time per sample, generation plus sink (seconds).
    pub avg_sample_time: f64,
    /// Minimum sample time.
    pub min_sample_time: f64,
    /// Maximum sample time.
    pub max_sample_time: f64,
    /// Largest distance any corner moved from the base, over all samples.
    pub max_displacement: f64,
}

impl BatchMetrics {
    /// Builds metrics from per-sample durations.
    pub fn from_times(
        triangle_count: usize,
        total_wall_time: f64,
        sample_times: &[f64],
        max_displacement: f64,
    ) -> Self {
        let (avg, min, max) = if sample_times.is_empty() {
            (0.0, 0.0, 0.0)
        } else {
            (
                sample_times.iter().sum::<f64>() / sample_times.len() as f64,
                sample_times.iter().copied().fold(f64::MAX, f64::min),
                sample_times.iter().copied().fold(0.0, f64::max),
            )
        };
        Self {
            samples: sample_times.len(),
            triangle_count,
            total_wall_time,
            avg_sample_time: avg,
            min_sample_time: min,
            max_sample_time: max,
            max_displacement,
        }
    }

    /// CSV header line.
    pub fn to_csv_header() -> String {
        "samples,triangle_count,total_wall_time_s,avg_sample_ms,min_sample_ms,max_sample_ms,max_displacement".to_string()
    }

    /// Format this metrics instance as a CSV data row.
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{:.6},{:.4},{:.4},{:.4},{:.6}",
            self.samples,
            self.triangle_count,
            self.total_wall_time,
            self.avg_sample_time * 1000.0,
            self.min_sample_time * 1000.0,
            self.max_sample_time * 1000.0,
            self.max_displacement,
        )
    }

    /// Header plus one row.
    pub fn to_csv(&self) -> String {
        format!("{}\n{}", Self::to_csv_header(), self.to_csv_row())
    }
}
