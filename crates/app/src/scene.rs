//! Drawable snapshot of the world plus the HUD text, kept between frames.
//!
//! The session pushes a new scene only when the world changes; the window loop
//! redraws the cached one every frame.

use core::{Actor, GameState, HudReporter, HudStats, Phase, Pos, Renderer, TileKind};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sprite {
    pub pos: Pos,
    /// `hp / max_hp`, clamped to `0.0..=1.0`.
    pub health: f32,
}

impl Sprite {
    fn from_actor(actor: &Actor) -> Self {
        let health = if actor.max_hp > 0 {
            (actor.hp as f32 / actor.max_hp as f32).clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self { pos: actor.pos, health }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: usize,
    pub height: usize,
    pub tiles: Vec<TileKind>,
    pub hero: Sprite,
    pub enemies: Vec<Sprite>,
}

impl Scene {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            width: state.map.width,
            height: state.map.height,
            tiles: state.map.tiles.clone(),
            hero: Sprite::from_actor(&state.hero),
            enemies: state.enemies.values().map(Sprite::from_actor).collect(),
        }
    }

    /// Row-major tiles paired with their grid position.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, TileKind)> + '_ {
        self.tiles.iter().enumerate().map(|(index, tile)| {
            (index % self.width, index / self.width, *tile)
        })
    }
}

#[derive(Default)]
pub struct SceneCache {
    scene: Option<Scene>,
    frames_pushed: u64,
}

impl SceneCache {
    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    pub fn frames_pushed(&self) -> u64 {
        self.frames_pushed
    }
}

impl Renderer for SceneCache {
    fn render(&mut self, state: &GameState) {
        self.scene = Some(Scene::from_state(state));
        self.frames_pushed += 1;
    }
}

#[derive(Default)]
pub struct HudPanel {
    stats: Option<HudStats>,
}

impl HudPanel {
    pub fn stats(&self) -> Option<HudStats> {
        self.stats
    }

    pub fn status_line(&self) -> String {
        self.stats.map(hud_line).unwrap_or_default()
    }

    pub fn overlay(&self) -> Option<(&'static str, &'static str)> {
        self.stats.and_then(|stats| overlay_text(stats.phase))
    }
}

impl HudReporter for HudPanel {
    fn update(&mut self, hud: HudStats) {
        self.stats = Some(hud);
    }
}

pub fn hud_line(stats: HudStats) -> String {
    format!(
        "HP {}/{}  ATK {}  Potions {}  Killed {}/{}",
        stats.hp,
        stats.max_hp,
        stats.attack,
        stats.potions_carried,
        stats.killed,
        stats.total_enemies
    )
}

/// Headline and hint for the end-of-run overlay.
pub fn overlay_text(phase: Phase) -> Option<(&'static str, &'static str)> {
    match phase {
        Phase::Playing => None,
        Phase::Won => Some(("YOU WIN", "Press R or Enter to play again")),
        Phase::Lost => Some(("YOU DIED", "Press R or Enter to try again")),
    }
}
