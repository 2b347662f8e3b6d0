//! Step Classification
//!
//! Streaming state machine that turns raw accelerometer samples into step
//! events and an activity label.
//!
//! Core principles:
//! - The activity label depends only on the absolute vertical-axis delta
//!   between the incoming sample and the last accepted baseline, checked
//!   against two fixed thresholds.
//! - A step is accepted only when the delta is strictly above the walking
//!   threshold, outside the 600 ms refractory period, and outside the
//!   1000 ms debounce window. Both windows are time-based, never
//!   sample-count-based, because sample arrival rate is device-dependent.
//! - State is a single immutable value transformed by a pure function of
//!   `(state, sample)`; the debounce window is an expiring flag evaluated
//!   against the sample clock rather than a scheduled callback, so there is
//!   no stale timer to cancel on reset.

use crate::types::{
    AccelSample, ActivityStatus, ClassifierState, ProcessOutcome, DEBOUNCE_MS, REFRACTORY_MS,
    RUNNING_THRESHOLD, WALKING_THRESHOLD,
};

/// Classify a vertical-axis delta against the fixed thresholds.
///
/// A delta of exactly [`WALKING_THRESHOLD`] classifies as `Walking`, sharing
/// the boundary with the step gate (which requires strictly greater).
pub fn classify_delta(delta: f64) -> ActivityStatus {
    if delta < WALKING_THRESHOLD {
        ActivityStatus::Sitting
    } else if delta < RUNNING_THRESHOLD {
        ActivityStatus::Walking
    } else {
        ActivityStatus::Running
    }
}

impl ClassifierState {
    /// Whether this state is inside the debounce window at `now_ms`.
    ///
    /// The window spans `[accept, accept + DEBOUNCE_MS)` and clears at
    /// exactly `accept + DEBOUNCE_MS`. The `step_count > 0` guard keeps the
    /// zeroed initial and reset states out of a phantom window anchored at
    /// t = 0.
    pub fn is_debouncing(&self, now_ms: u64) -> bool {
        self.step_count > 0 && now_ms < self.last_step_timestamp_ms + DEBOUNCE_MS
    }

    /// Process a single sample, returning the successor state and the
    /// per-sample outcome.
    ///
    /// Pure with respect to explicit state: `self` is not mutated and no
    /// clock other than the sample's own timestamp is consulted.
    pub fn process(&self, sample: &AccelSample) -> (ClassifierState, ProcessOutcome) {
        let now = sample.timestamp_ms;
        let delta = (sample.y - self.last_y).abs();
        let status = classify_delta(delta);
        let debouncing = self.is_debouncing(now);

        let accepted = delta > WALKING_THRESHOLD
            && !debouncing
            && now > self.last_step_timestamp_ms + REFRACTORY_MS;

        let next = if accepted {
            ClassifierState {
                last_y: sample.y,
                last_step_timestamp_ms: now,
                debouncing: true,
                step_count: self.step_count + 1,
                status,
            }
        } else {
            // Rejected samples deliberately leave last_y untouched; the next
            // delta is still measured against the last accepted baseline.
            ClassifierState {
                debouncing,
                status,
                ..*self
            }
        };

        let outcome = ProcessOutcome {
            status,
            status_changed: status != self.status,
            step_accepted: accepted,
            step_count: next.step_count,
        };
        (next, outcome)
    }

    /// The zeroed reset state: count 0, baseline 0, not debouncing,
    /// status `Sitting`. Idempotent by construction.
    pub fn reset() -> ClassifierState {
        ClassifierState::default()
    }
}

// ==================== Stateful Wrapper ====================

/// Mutable-object wrapper over [`ClassifierState`] for hosts that feed
/// samples one at a time and poll the observable signals.
#[derive(Clone, Debug, Default)]
pub struct StepClassifier {
    state: ClassifierState,
}

impl StepClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from a previously captured state snapshot.
    pub fn from_state(state: ClassifierState) -> Self {
        Self { state }
    }

    /// Process one sample in arrival order.
    pub fn process(&mut self, sample: &AccelSample) -> ProcessOutcome {
        let (next, outcome) = self.state.process(sample);
        self.state = next;
        outcome
    }

    /// Zero every state field atomically and force status back to `Sitting`.
    pub fn reset(&mut self) {
        self.state = ClassifierState::reset();
    }

    pub fn state(&self) -> &ClassifierState {
        &self.state
    }

    /// Cumulative accepted steps since the last reset.
    pub fn step_count(&self) -> u64 {
        self.state.step_count
    }

    /// Activity label at the last processed sample.
    pub fn status(&self) -> ActivityStatus {
        self.state.status
    }
}

// ==================== Tests ====================
