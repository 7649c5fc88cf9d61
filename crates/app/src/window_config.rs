//! Window configuration for the desktop app.

use std::env;

use app::APP_NAME;
use app::launch::parse_launch_args;
use core::GameConfig;
use macroquad::window::Conf;

/// Room under the board for the HUD line.
pub const HUD_BAND_HEIGHT: i32 = 36;

pub fn build_window_conf(config: &GameConfig) -> Conf {
    Conf {
        window_title: APP_NAME.to_owned(),
        window_width: (config.width * config.tile_size) as i32,
        window_height: (config.height * config.tile_size) as i32 + HUD_BAND_HEIGHT,
        window_resizable: false,
        high_dpi: true,
        ..Default::default()
    }
}

/// Sizes the window before the async entry point runs; falls back to the stock
/// dimensions when the arguments or the config file are unusable.
pub fn window_conf_from_env() -> Conf {
    let args: Vec<String> = env::args().collect();
    let config = parse_launch_args(&args, 0)
        .and_then(|options| options.load_config())
        .unwrap_or_default();
    build_window_conf(&config)
}
