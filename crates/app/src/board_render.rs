//! Draws the cached scene, the HUD band and the end-of-run overlay.

use app::scene::{HudPanel, Scene, Sprite};
use core::TileKind;
use macroquad::prelude::*;

const FLOOR_COLOR: Color = Color { r: 0.08, g: 0.08, b: 0.1, a: 1.0 };
const WALL_COLOR: Color = Color { r: 0.35, g: 0.33, b: 0.3, a: 1.0 };
const SWORD_COLOR: Color = Color { r: 0.75, g: 0.8, b: 0.95, a: 1.0 };
const POTION_COLOR: Color = Color { r: 0.9, g: 0.2, b: 0.45, a: 1.0 };
const HERO_COLOR: Color = Color { r: 0.25, g: 0.7, b: 1.0, a: 1.0 };
const ENEMY_COLOR: Color = Color { r: 0.85, g: 0.3, b: 0.15, a: 1.0 };
const BAR_BACK: Color = Color { r: 0.25, g: 0.0, b: 0.0, a: 1.0 };
const BAR_FRONT: Color = Color { r: 0.2, g: 0.85, b: 0.25, a: 1.0 };
const OVERLAY_SHADE: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 0.65 };

pub fn draw_frame(scene: &Scene, hud: &HudPanel, tile_size: f32) {
    clear_background(BLACK);
    draw_tiles(scene, tile_size);
    for enemy in &scene.enemies {
        draw_actor(enemy, ENEMY_COLOR, tile_size);
    }
    draw_actor(&scene.hero, HERO_COLOR, tile_size);
    draw_hud(scene, hud, tile_size);
    if let Some((title, hint)) = hud.overlay() {
        draw_overlay(title, hint);
    }
}

fn draw_tiles(scene: &Scene, tile_size: f32) {
    for (x, y, tile) in scene.cells() {
        let (px, py) = (x as f32 * tile_size, y as f32 * tile_size);
        let base = if tile == TileKind::Wall { WALL_COLOR } else { FLOOR_COLOR };
        draw_rectangle(px, py, tile_size, tile_size, base);

        let pickup = match tile {
            TileKind::Sword => Some(SWORD_COLOR),
            TileKind::Potion => Some(POTION_COLOR),
            TileKind::Empty | TileKind::Wall => None,
        };
        if let Some(color) = pickup {
            let half = tile_size / 2.0;
            draw_circle(px + half, py + half, tile_size * 0.25, color);
        }
    }
}

fn draw_actor(sprite: &Sprite, color: Color, tile_size: f32) {
    let (px, py) = (sprite.pos.x as f32 * tile_size, sprite.pos.y as f32 * tile_size);
    let inset = tile_size * 0.15;
    draw_rectangle(px + inset, py + inset, tile_size - 2.0 * inset, tile_size - 2.0 * inset, color);

    let bar_height = (tile_size * 0.12).max(2.0);
    draw_rectangle(px, py, tile_size, bar_height, BAR_BACK);
    draw_rectangle(px, py, tile_size * sprite.health, bar_height, BAR_FRONT);
}

fn draw_hud(scene: &Scene, hud: &HudPanel, tile_size: f32) {
    let band_top = scene.height as f32 * tile_size;
    draw_text(&hud.status_line(), 10.0, band_top + 24.0, 22.0, WHITE);
}

fn draw_overlay(title: &str, hint: &str) {
    let (width, height) = (screen_width(), screen_height());
    draw_rectangle(0.0, 0.0, width, height, OVERLAY_SHADE);

    let title_size = 56.0;
    let title_dims = measure_text(title, None, title_size as u16, 1.0);
    draw_text(title, (width - title_dims.width) / 2.0, height / 2.0, title_size, WHITE);

    let hint_size = 24.0;
    let hint_dims = measure_text(hint, None, hint_size as u16, 1.0);
    draw_text(hint, (width - hint_dims.width) / 2.0, height / 2.0 + 40.0, hint_size, LIGHTGRAY);
}
