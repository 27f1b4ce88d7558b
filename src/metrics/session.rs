use serde::Serialize;
use std::time::{Duration, Instant};

use crate::game::TickInfo;

/// Running totals for one play session, across resets and restarts
pub struct SessionMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub targets_eaten: u32,
    pub resets: u32,
    pub longest_length: usize,
}

/// Snapshot of [`SessionMetrics`] for logs and reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub elapsed_secs: u64,
    pub targets_eaten: u32,
    pub resets: u32,
    pub longest_length: usize,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            targets_eaten: 0,
            resets: 0,
            longest_length: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    pub fn on_tick(&mut self, info: &TickInfo) {
        if info.ate_target {
            self.targets_eaten += 1;
        }
        if info.collided {
            self.resets += 1;
        }
        self.longest_length = self.longest_length.max(info.length);
    }

    /// Player restarted: the clock starts over, totals are kept
    pub fn on_restart(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            elapsed_secs: self.elapsed_time.as_secs(),
            targets_eaten: self.targets_eaten,
            resets: self.resets,
            longest_length: self.longest_length,
        }
    }
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self::new()
    }
}
