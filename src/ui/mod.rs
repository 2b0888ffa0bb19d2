//! Progress reporting for dump runs
//!
//! The pipeline reports through [`Ui`] so the CLI can log while tests stay quiet.

use tracing::{debug, info};

/// Stages of a dump run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Fetching,
    Extracting,
    Merging,
    Writing,
    Complete,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Fetching => write!(f, "Fetching data"),
            Phase::Extracting => write!(f, "Extracting rows"),
            Phase::Merging => write!(f, "Merging tricks"),
            Phase::Writing => write!(f, "Writing documents"),
            Phase::Complete => write!(f, "Complete"),
        }
    }
}

/// Trait for UI implementations - allows both logging and silent/test modes
pub trait Ui {
    fn set_phase(&mut self, phase: Phase);
    fn set_progress(&mut self, current: u64, total: u64, label: impl Into<String>);
    fn log(&mut self, message: impl Into<String>);
}

/// Reports through `tracing`, tagged with the data source being dumped
pub struct LogUi {
    source: &'static str,
    phase: Option<Phase>,
}

impl LogUi {
    pub fn new(source: &'static str) -> Self {
        Self {
            source,
            phase: None,
        }
    }
}

impl Ui for LogUi {
    fn set_phase(&mut self, phase: Phase) {
        if self.phase != Some(phase) {
            info!(source = self.source, "{}", phase);
            self.phase = Some(phase);
        }
    }

    fn set_progress(&mut self, current: u64, total: u64, label: impl Into<String>) {
        debug!(source = self.source, "{} ({}/{})", label.into(), current, total);
    }

    fn log(&mut self, message: impl Into<String>) {
        info!(source = self.source, "{}", message.into());
    }
}

/// Silent UI implementation for testing and non-interactive use
#[derive(Default)]
pub struct SilentUi;

impl SilentUi {
    pub fn new() -> Self {
        Self
    }
}

impl Ui for SilentUi {
    fn set_phase(&mut self, _phase: Phase) {}
    fn set_progress(&mut self, _current: u64, _total: u64, _label: impl Into<String>) {}
    fn log(&mut self, _message: impl Into<String>) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_display() {
        assert_eq!(Phase::Fetching.to_string(), "Fetching data");
        assert_eq!(Phase::Complete.to_string(), "Complete");
    }
}
