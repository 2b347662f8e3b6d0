//! Demo binary: runs a simulated walk through a step session and logs what
//! the presentation layer would render.

use std::path::PathBuf;
use std::time::Duration;

use jibu_app::logging;
use jibu_app::sensor::SimulatedAccelerometer;
use jibu_app::session::{SensorStatus, StepSession};
use jibu_app::settings::SettingsStore;
use tracing::{error, info, warn};

fn main() {
    logging::init_tracing("info");

    let store = SettingsStore::default_location()
        .map(SettingsStore::new)
        .unwrap_or_else(|| SettingsStore::new(PathBuf::from("jibu-settings.json")));
    let mut settings = store.load();
    info!(theme = settings.theme.as_str(), "loaded settings");

    // 模拟用户切换主题并保存
    settings.toggle_theme();
    if let Err(err) = store.save(&settings) {
        warn!(%err, "failed to persist settings");
    } else {
        info!(theme = settings.theme.as_str(), "theme toggled and saved");
    }

    // 20 步的模拟行走，以 2ms 的加速节拍投递
    let provider = SimulatedAccelerometer::walking(42, 20, 1200)
        .with_tick(Duration::from_millis(2));

    let mut session = StepSession::new();
    match session.start(&provider) {
        Ok(SensorStatus::Subscribed) => info!("subscribed to accelerometer feed"),
        Ok(SensorStatus::Unavailable) => {
            info!("no accelerometer; nothing to count");
            return;
        }
        Err(err) => {
            error!(%err, "failed to start session");
            return;
        }
    }

    session.run_to_completion();

    let snapshot = session.snapshot();
    info!(
        steps = snapshot.step_count,
        status = snapshot.status.as_str(),
        "session finished"
    );
}
