use std::env;

use app::format_snapshot_hash;
use app::launch::{SeedChoice, generate_runtime_seed, parse_launch_args};
use app::scene::{HudPanel, SceneCache};
use core::{InputSource, Session, SessionEvent};
use log::{error, info};
use macroquad::prelude::*;

mod board_render;
mod frame_input;
mod window_config;

use board_render::draw_frame;
use frame_input::capture_frame_input;
use window_config::window_conf_from_env;

#[macroquad::main(window_conf_from_env)]
async fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let options = match parse_launch_args(&args, generate_runtime_seed()) {
        Ok(options) => options,
        Err(message) => {
            error!("{message}");
            return;
        }
    };
    let config = match options.load_config() {
        Ok(config) => config,
        Err(message) => {
            error!("could not load config {message}");
            return;
        }
    };
    let seed = options.seed.value();
    if let SeedChoice::Generated(seed) = options.seed {
        info!("no --seed given, using generated seed {seed}");
    }

    let tile_size = config.tile_size as f32;
    let mut session =
        match Session::start(config, seed, SceneCache::default(), HudPanel::default()) {
            Ok(session) => session,
            Err(e) => {
                error!("could not generate a dungeon for seed {seed}: {e}");
                return;
            }
        };

    loop {
        let mut input = capture_frame_input();
        if input.quit {
            break;
        }
        while let Some(event) = input.next_input() {
            let finished_hash = session.game().snapshot_hash();
            match session.handle(event) {
                Ok(SessionEvent::Restarted { seed }) => {
                    info!("left run at {}; new seed {seed}", format_snapshot_hash(finished_hash));
                }
                Ok(_) => {}
                Err(e) => error!("restart failed, keeping the current run: {e}"),
            }
        }

        if let Some(scene) = session.renderer().scene() {
            draw_frame(scene, session.hud(), tile_size);
        }
        next_frame().await
    }
}
