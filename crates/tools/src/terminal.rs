//! Plain-text adapters: an ASCII board, a one-line HUD and line-based key input.

use std::collections::VecDeque;
use std::io::BufRead;

use game_core::{
    GameState, HudReporter, HudStats, InputEvent, InputSource, Phase, Pos, Renderer, TileKind,
};

pub fn tile_glyph(tile: TileKind) -> char {
    match tile {
        TileKind::Empty => '.',
        TileKind::Wall => '#',
        TileKind::Sword => '/',
        TileKind::Potion => '!',
    }
}

/// One text row per map row; actors are drawn over the tiles they stand on.
pub fn render_ascii(state: &GameState) -> String {
    let map = &state.map;
    let mut rows: Vec<Vec<char>> = (0..map.height)
        .map(|y| {
            (0..map.width)
                .map(|x| tile_glyph(map.tile_at(Pos { y: y as i32, x: x as i32 })))
                .collect()
        })
        .collect();
    for enemy in state.enemies.values() {
        rows[enemy.pos.y as usize][enemy.pos.x as usize] = 'E';
    }
    rows[state.hero.pos.y as usize][state.hero.pos.x as usize] = '@';

    let mut frame = String::with_capacity((map.width + 1) * map.height);
    for row in rows {
        frame.extend(row);
        frame.push('\n');
    }
    frame
}

pub fn hud_line(hud: &HudStats) -> String {
    let status = match hud.phase {
        Phase::Playing => "",
        Phase::Won => "  -- victory! r to restart, q to quit",
        Phase::Lost => "  -- you died. r to restart, q to quit",
    };
    format!(
        "hp {}/{} atk {} potions {} killed {}/{}{status}",
        hud.hp, hud.max_hp, hud.attack, hud.potions_carried, hud.killed, hud.total_enemies
    )
}

/// Keeps the latest frame so the caller decides when to print it.
#[derive(Default)]
pub struct AsciiBoard {
    pub frame: String,
}

impl Renderer for AsciiBoard {
    fn render(&mut self, state: &GameState) {
        self.frame = render_ascii(state);
    }
}

#[derive(Default)]
pub struct HudLine {
    pub line: String,
}

impl HudReporter for HudLine {
    fn update(&mut self, hud: HudStats) {
        self.line = hud_line(&hud);
    }
}

pub fn event_for_char(key: char) -> Option<InputEvent> {
    match key.to_ascii_lowercase() {
        'w' => Some(InputEvent::MoveUp),
        's' => Some(InputEvent::MoveDown),
        'a' => Some(InputEvent::MoveLeft),
        'd' => Some(InputEvent::MoveRight),
        'f' => Some(InputEvent::Attack),
        'r' => Some(InputEvent::Restart),
        _ => None,
    }
}

/// Reads commands a line at a time; `q` or end of input stops the source.
pub struct LineInput<R: BufRead> {
    reader: R,
    pending: VecDeque<InputEvent>,
    quit: bool,
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, pending: VecDeque::new(), quit: false }
    }

    fn refill(&mut self) {
        let mut line = String::new();
        while self.pending.is_empty() && !self.quit {
            line.clear();
            match self.reader.read_line(&mut line) {
                Ok(0) | Err(_) => self.quit = true,
                Ok(_) => {
                    for key in line.trim().chars() {
                        if key.eq_ignore_ascii_case(&'q') {
                            self.quit = true;
                            break;
                        }
                        self.pending.extend(event_for_char(key));
                    }
                }
            }
        }
    }
}

impl<R: BufRead> InputSource for LineInput<R> {
    fn next_input(&mut self) -> Option<InputEvent> {
        if self.pending.is_empty() {
            self.refill();
        }
        self.pending.pop_front()
    }
}
