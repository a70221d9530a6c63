//! Progress bar utilities for long simulation runs
//!
//! Visual feedback while the day loop runs, using the indicatif crate.

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar ticking once per simulated day
pub struct SimulationProgress {
    pub progress: ProgressBar,
}

impl SimulationProgress {
    pub fn new(total_days: u32) -> Self {
        let progress = ProgressBar::new(total_days as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] day {pos}/{len} ({eta})")
                .unwrap()
                .progress_chars("#>-"),
        );

        Self { progress }
    }

    pub fn day_done(&self, day: u32) {
        self.progress.set_position(day as u64 + 1);
    }

    pub fn finish(&self) {
        self.progress.finish_with_message("✅ Simulation complete");
    }
}
