use gyre::config;
use gyre::gui::app::AppModel;
use gyre::gui::indicator::IndicatorState;
use gyre::sys::runtime;
use relm4::prelude::*;
use std::time::Duration;

fn main() {
    env_logger::init();

    let config = config::load_or_setup();
    let state = IndicatorState::new(&config);
    let refresh_hold = Duration::from_millis(config.refresh_hold_ms);

    let (tx, rx) = async_channel::bounded(32);

    runtime::start_background_services(tx);

    let app = RelmApp::new("io.gyre.Gyre");

    app.run::<AppModel>((state, rx, refresh_hold));
}
