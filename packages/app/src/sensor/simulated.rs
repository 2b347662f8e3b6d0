//! Simulated accelerometer provider.
//!
//! Replays a fixed script or generates a seeded noisy walking pattern.
//! Used by the demo binary and by tests; stands in for the device sensor
//! bindings, which are out of scope.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use jibu_algo::{AccelSample, DEBOUNCE_MS};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::{AccelerometerProvider, SampleListener, SensorError, SensorResult, SensorSubscription};

/// Scripted sample feed delivered from a background thread.
#[derive(Clone, Debug)]
pub struct SimulatedAccelerometer {
    samples: Vec<AccelSample>,
    tick: Duration,
    available: bool,
}

impl SimulatedAccelerometer {
    /// Feed that replays `samples` in order as fast as the listener accepts
    /// them.
    pub fn from_script(samples: Vec<AccelSample>) -> Self {
        Self {
            samples,
            tick: Duration::ZERO,
            available: true,
        }
    }

    /// Provider that reports no accelerometer; `subscribe` fails with
    /// [`SensorError::Unavailable`].
    pub fn unavailable() -> Self {
        Self {
            samples: Vec::new(),
            tick: Duration::ZERO,
            available: false,
        }
    }

    /// Sleep `tick` between deliveries, approximating a device rate.
    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    /// Seeded noisy walking pattern: `steps` vertical spikes spaced
    /// `stride_ms` apart over a quiet 50 ms-sampled baseline.
    ///
    /// Spikes alternate between the resting baseline and a jittered
    /// amplitude in `0.5..1.0`, so every spike is a guaranteed step for the
    /// classifier as long as `stride_ms` exceeds the debounce window.
    pub fn walking(seed: u64, steps: usize, stride_ms: u64) -> Self {
        assert!(
            stride_ms > DEBOUNCE_MS,
            "stride_ms must exceed the debounce window for every spike to count"
        );
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut samples = Vec::new();
        let mut baseline = 0.0f64;

        for i in 0..steps {
            let spike_at = (i as u64 + 1) * stride_ms;
            // quiet samples leading up to the spike, near the current baseline
            let mut t = spike_at.saturating_sub(stride_ms) + 50;
            while t < spike_at {
                let y = baseline + rng.gen_range(-0.03..0.03);
                samples.push(AccelSample::new(0.0, y, 9.81, t));
                t += 50;
            }
            // the spike itself: jump away from the baseline, or back to rest
            let y = if baseline == 0.0 {
                rng.gen_range(0.5..1.0)
            } else {
                0.0
            };
            samples.push(AccelSample::new(0.0, y, 9.81, spike_at));
            baseline = y;
        }

        Self::from_script(samples)
    }
}

impl AccelerometerProvider for SimulatedAccelerometer {
    fn is_available(&self) -> bool {
        self.available
    }

    fn subscribe(&self, mut listener: SampleListener) -> SensorResult<SensorSubscription> {
        if !self.available {
            return Err(SensorError::Unavailable);
        }

        let samples = self.samples.clone();
        let tick = self.tick;
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = stop.clone();

        let handle = thread::spawn(move || {
            for sample in samples {
                if stop_flag.load(Ordering::SeqCst) {
                    break;
                }
                listener(sample);
                if !tick.is_zero() {
                    thread::sleep(tick);
                }
            }
        });

        Ok(SensorSubscription::new(stop, handle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[test]
    fn test_script_delivered_in_order() {
        let script = vec![
            AccelSample::new(0.0, 0.1, 9.81, 100),
            AccelSample::new(0.0, 0.2, 9.81, 200),
            AccelSample::new(0.0, 0.3, 9.81, 300),
        ];
        let provider = SimulatedAccelerometer::from_script(script.clone());
        assert!(provider.is_available());

        let received = Arc::new(Mutex::new(Vec::new()));
        let sink = received.clone();
        let sub = provider
            .subscribe(Box::new(move |s| sink.lock().push(s)))
            .unwrap();
        sub.wait();

        assert_eq!(*received.lock(), script);
    }

    #[test]
    fn test_unavailable_provider_rejects_subscription() {
        let provider = SimulatedAccelerometer::unavailable();
        assert!(!provider.is_available());
        let result = provider.subscribe(Box::new(|_| {}));
        assert!(matches!(result, Err(SensorError::Unavailable)));
    }

    #[test]
    fn test_remove_stops_delivery() {
        let script: Vec<AccelSample> = (0..10_000)
            .map(|i| AccelSample::new(0.0, 0.0, 9.81, i * 20))
            .collect();
        let provider =
            SimulatedAccelerometer::from_script(script).with_tick(Duration::from_millis(1));

        let count = Arc::new(Mutex::new(0u64));
        let sink = count.clone();
        let sub = provider
            .subscribe(Box::new(move |_| *sink.lock() += 1))
            .unwrap();
        sub.remove();

        // After remove() returns, the delivery thread is gone; the count no
        // longer moves.
        let after_remove = *count.lock();
        std::thread::sleep(Duration::from_millis(10));
        assert_eq!(*count.lock(), after_remove);
    }

    #[test]
    fn test_walking_pattern_timestamps_increase() {
        let provider = SimulatedAccelerometer::walking(7, 5, 1200);
        let mut last = 0;
        for s in &provider.samples {
            assert!(s.timestamp_ms > last);
            last = s.timestamp_ms;
        }
    }

    #[test]
    fn test_walking_pattern_is_deterministic_per_seed() {
        let a = SimulatedAccelerometer::walking(42, 8, 1200);
        let b = SimulatedAccelerometer::walking(42, 8, 1200);
        assert_eq!(a.samples, b.samples);

        let c = SimulatedAccelerometer::walking(43, 8, 1200);
        assert_ne!(a.samples, c.samples);
    }

    #[test]
    fn test_walking_pattern_counts_every_spike() {
        let provider = SimulatedAccelerometer::walking(11, 12, 1200);
        let summary = jibu_algo::replay_trace(&provider.samples);
        assert_eq!(summary.step_count(), 12);
    }
}
