//! # jibu-app - 计步器宿主
//!
//! Host glue for the Jibu step counter. The algorithmic core lives in
//! [`jibu_algo`]; this crate wires it to the outside world:
//!
//! - [`sensor`] - accelerometer subscription surface and simulated provider
//! - [`session`] - live session: feed -> classifier -> observable signals
//! - [`settings`] - theme preference with JSON persistence
//! - [`logging`] - tracing subscriber setup

pub mod logging;
pub mod sensor;
pub mod session;
pub mod settings;

pub use sensor::{AccelerometerProvider, SensorError, SensorSubscription, SimulatedAccelerometer};
pub use session::{SensorStatus, SessionSnapshot, StepSession};
pub use settings::{AppSettings, SettingsStore, ThemePreference};
