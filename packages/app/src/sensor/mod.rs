//! Sensor Surface
//!
//! Subscription-style accelerometer feed. A provider is a black-box producer
//! of timestamped 3-axis samples delivered at a provider-determined rate;
//! availability must be queried before subscribing. An unavailable sensor
//! is an informational condition (the session simply receives no samples),
//! not a fault.

pub mod simulated;

pub use simulated::SimulatedAccelerometer;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;

use jibu_algo::AccelSample;
use thiserror::Error;

// ============================================================
// 错误类型定义
// ============================================================

/// Sensor surface error type
#[derive(Error, Debug)]
pub enum SensorError {
    #[error("accelerometer is not available on this device")]
    Unavailable,

    #[error("sample delivery failed: {0}")]
    Delivery(String),
}

pub type SensorResult<T> = Result<T, SensorError>;

// ============================================================
// 订阅接口
// ============================================================

/// Callback invoked once per delivered sample, in arrival order.
pub type SampleListener = Box<dyn FnMut(AccelSample) + Send>;

/// Black-box sample producer.
pub trait AccelerometerProvider {
    /// Whether the device has a usable accelerometer. Must be checked
    /// before [`subscribe`](Self::subscribe).
    fn is_available(&self) -> bool;

    /// Attach a listener. Returns the handle that detaches it; delivery
    /// stops when the handle is removed or dropped.
    fn subscribe(&self, listener: SampleListener) -> SensorResult<SensorSubscription>;
}

/// Handle to an active subscription.
///
/// Dropping the handle signals the feed to stop; [`remove`](Self::remove)
/// additionally waits for the delivery thread to finish so no callback runs
/// afterwards.
pub struct SensorSubscription {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl SensorSubscription {
    pub fn new(stop: Arc<AtomicBool>, handle: JoinHandle<()>) -> Self {
        Self {
            stop,
            handle: Some(handle),
        }
    }

    /// Detach the listener and wait for in-flight delivery to finish.
    pub fn remove(mut self) {
        self.stop.store(true, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Wait for the feed to run to completion without detaching early.
    /// Finite feeds (recorded scripts) end on their own; this blocks until
    /// they do.
    pub fn wait(mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for SensorSubscription {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
    }
}
