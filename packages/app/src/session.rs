//! Step Session
//!
//! Glue between a sensor provider and the classifier. The session owns the
//! classifier, feeds it every well-formed sample in arrival order, and
//! exposes the two observable signals (step count and activity status) plus
//! the user-facing reset command.

use std::sync::Arc;

use jibu_algo::{sanitize, AccelSample, ActivityStatus, StepClassifier};
use parking_lot::Mutex;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::sensor::{AccelerometerProvider, SensorResult, SensorSubscription};

/// Result of starting a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SensorStatus {
    /// Subscribed; samples will be delivered.
    Subscribed,
    /// No accelerometer; the session stays at its last values indefinitely.
    /// Informational, not a fault.
    Unavailable,
}

/// The two observable signals consumed by the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub step_count: u64,
    pub status: ActivityStatus,
}

/// Live step-counting session.
pub struct StepSession {
    classifier: Arc<Mutex<StepClassifier>>,
    subscription: Option<SensorSubscription>,
}

impl Default for StepSession {
    fn default() -> Self {
        Self::new()
    }
}

impl StepSession {
    pub fn new() -> Self {
        Self {
            classifier: Arc::new(Mutex::new(StepClassifier::new())),
            subscription: None,
        }
    }

    /// Check availability, then subscribe the classifier to the provider's
    /// feed. An unavailable sensor is reported and the session is left in
    /// its no-op state.
    pub fn start(&mut self, provider: &dyn AccelerometerProvider) -> SensorResult<SensorStatus> {
        if !provider.is_available() {
            warn!("accelerometer not available; session will receive no samples");
            return Ok(SensorStatus::Unavailable);
        }

        let classifier = self.classifier.clone();
        let subscription = provider.subscribe(Box::new(move |sample: AccelSample| {
            if !sanitize::is_well_formed(&sample) {
                debug!(timestamp_ms = sample.timestamp_ms, "dropped malformed sample");
                return;
            }
            let outcome = classifier.lock().process(&sample);
            if outcome.step_accepted {
                debug!(step_count = outcome.step_count, "step accepted");
            }
            if outcome.status_changed {
                info!(status = outcome.status.as_str(), "activity changed");
            }
        }))?;

        self.subscription = Some(subscription);
        Ok(SensorStatus::Subscribed)
    }

    /// Current step count and activity status.
    pub fn snapshot(&self) -> SessionSnapshot {
        let classifier = self.classifier.lock();
        SessionSnapshot {
            step_count: classifier.step_count(),
            status: classifier.status(),
        }
    }

    /// User command: zero all classifier state atomically. The feed keeps
    /// running; subsequent samples act on the fresh state.
    pub fn reset(&self) {
        self.classifier.lock().reset();
        info!("session reset");
    }

    /// Detach from the feed; no callback runs after this returns.
    pub fn stop(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.remove();
        }
    }

    /// Block until a finite feed (a recorded script) runs out.
    pub fn run_to_completion(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.wait();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensor::SimulatedAccelerometer;

    fn sample(y: f64, t: u64) -> AccelSample {
        AccelSample::new(0.0, y, 9.81, t)
    }

    #[test]
    fn test_session_counts_scripted_steps() {
        // Three spikes, each past both windows of the previous acceptance.
        let provider = SimulatedAccelerometer::from_script(vec![
            sample(0.8, 700),
            sample(0.0, 1900),
            sample(0.8, 3100),
        ]);
        let mut session = StepSession::new();
        assert_eq!(session.start(&provider).unwrap(), SensorStatus::Subscribed);
        session.run_to_completion();

        let snap = session.snapshot();
        assert_eq!(snap.step_count, 3);
        assert_eq!(snap.status, ActivityStatus::Walking);
    }

    #[test]
    fn test_session_drops_malformed_samples() {
        let provider = SimulatedAccelerometer::from_script(vec![
            sample(f64::NAN, 700),
            sample(0.8, 800),
        ]);
        let mut session = StepSession::new();
        session.start(&provider).unwrap();
        session.run_to_completion();

        // The NaN sample is filtered before delivery; the classifier only
        // ever saw the valid one.
        assert_eq!(session.snapshot().step_count, 1);
    }

    #[test]
    fn test_unavailable_sensor_is_a_noop() {
        let provider = SimulatedAccelerometer::unavailable();
        let mut session = StepSession::new();
        assert_eq!(session.start(&provider).unwrap(), SensorStatus::Unavailable);

        let snap = session.snapshot();
        assert_eq!(snap.step_count, 0);
        assert_eq!(snap.status, ActivityStatus::Sitting);
    }

    #[test]
    fn test_reset_zeroes_the_session() {
        let provider = SimulatedAccelerometer::walking(3, 4, 1200);
        let mut session = StepSession::new();
        session.start(&provider).unwrap();
        session.run_to_completion();
        assert_eq!(session.snapshot().step_count, 4);

        session.reset();
        let snap = session.snapshot();
        assert_eq!(snap.step_count, 0);
        assert_eq!(snap.status, ActivityStatus::Sitting);
    }
}
