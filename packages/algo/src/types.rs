//! Common Types and Constants
//!
//! Shared data structures used across the classification modules.

use serde::{Deserialize, Serialize};

// ==================== Constants ====================

/// Delta at or above which a sample classifies as walking
pub const WALKING_THRESHOLD: f64 = 0.3;

/// Delta at or above which a sample classifies as running
pub const RUNNING_THRESHOLD: f64 = 1.2;

/// Minimum spacing between the timestamps of two accepted steps (ms)
pub const REFRACTORY_MS: u64 = 600;

/// Window after an accepted step during which no further step may be
/// accepted, regardless of refractory-period math (ms)
pub const DEBOUNCE_MS: u64 = 1000;

// ==================== Sample Types ====================

/// One timestamped 3-axis accelerometer reading.
///
/// Produced externally at a device-determined rate; immutable once received.
/// Timestamps must be monotonically non-decreasing within a feed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccelSample {
    pub x: f64,
    /// Vertical-axis reading, the sole classification signal
    pub y: f64,
    pub z: f64,
    pub timestamp_ms: u64,
}

impl AccelSample {
    pub fn new(x: f64, y: f64, z: f64, timestamp_ms: u64) -> Self {
        Self {
            x,
            y,
            z,
            timestamp_ms,
        }
    }
}

// ==================== Activity Status ====================

/// Activity label, recomputed on every sample from the vertical-axis delta
/// alone and independent of step acceptance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityStatus {
    #[default]
    Sitting,
    Walking,
    Running,
}

impl ActivityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityStatus::Sitting => "Sitting",
            ActivityStatus::Walking => "Walking",
            ActivityStatus::Running => "Running",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "sitting" => Some(ActivityStatus::Sitting),
            "walking" => Some(ActivityStatus::Walking),
            "running" => Some(ActivityStatus::Running),
            _ => None,
        }
    }
}

// ==================== Classifier State ====================

/// The complete classifier state, a single value transformed by
/// [`ClassifierState::process`](crate::classifier).
///
/// The default value is the reset state: all-zero, not debouncing,
/// status `Sitting`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassifierState {
    /// Vertical-axis baseline. Updated only when a step is accepted; rejected
    /// samples leave it unchanged for the next delta computation.
    pub last_y: f64,
    /// Timestamp of the last accepted step (0 before any acceptance)
    pub last_step_timestamp_ms: u64,
    /// Whether the state was inside the debounce window at the last
    /// processed sample. The authoritative check is time-driven; see
    /// [`ClassifierState::is_debouncing`](crate::classifier).
    pub debouncing: bool,
    /// Cumulative accepted steps, monotone between resets
    pub step_count: u64,
    /// Activity label emitted at the last processed sample
    pub status: ActivityStatus,
}

/// Per-sample result surfaced to the host.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProcessOutcome {
    /// Activity label for this sample
    pub status: ActivityStatus,
    /// Whether the label differs from the previous sample's label
    pub status_changed: bool,
    /// Whether this sample was accepted as a step
    pub step_accepted: bool,
    /// Cumulative step count after this sample
    pub step_count: u64,
}

// ==================== Tests ====================
