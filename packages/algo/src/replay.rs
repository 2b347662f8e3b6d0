//! Trace Replay
//!
//! Offline analysis of recorded sample traces. A replay runs a fresh
//! classifier over a trace in recorded order and summarizes what the live
//! session would have observed: final state, accepted-step timestamps, and
//! the status timeline.
//!
//! Batch replay parallelizes across traces with rayon; within a trace the
//! order-dependent semantics are preserved by processing sequentially.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::types::{AccelSample, ActivityStatus, ClassifierState};

/// Summary of one replayed trace.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReplaySummary {
    /// Classifier state after the last sample
    pub final_state: ClassifierState,
    /// Timestamps of every accepted step, in acceptance order
    pub step_timestamps_ms: Vec<u64>,
    /// `(timestamp_ms, status)` recorded at every label change
    pub status_timeline: Vec<(u64, ActivityStatus)>,
}

impl ReplaySummary {
    pub fn step_count(&self) -> u64 {
        self.final_state.step_count
    }
}

/// Replay a recorded trace through a fresh classifier.
pub fn replay_trace(trace: &[AccelSample]) -> ReplaySummary {
    let mut state = ClassifierState::default();
    let mut summary = ReplaySummary::default();

    for sample in trace {
        let (next, outcome) = state.process(sample);
        if outcome.step_accepted {
            summary.step_timestamps_ms.push(sample.timestamp_ms);
        }
        if outcome.status_changed {
            summary
                .status_timeline
                .push((sample.timestamp_ms, outcome.status));
        }
        state = next;
    }

    summary.final_state = state;
    summary
}

/// Replay many independent traces, parallel over traces.
pub fn replay_traces(traces: &[Vec<AccelSample>]) -> Vec<ReplaySummary> {
    traces
        .par_iter()
        .map(|trace| replay_trace(trace))
        .collect()
}
