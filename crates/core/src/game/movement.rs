//! Hero movement on the torus, item pickups, and contact damage at the landing tile.

use super::*;

impl Game {
    /// Returns `false` when the step hits a wall or an enemy; nothing changes then.
    pub(super) fn resolve_move(&mut self, direction: Direction) -> bool {
        let target = self.state.map.wrap(self.state.hero.pos.step(direction));
        if self.state.map.tile_at(target) == TileKind::Wall || self.state.enemy_at(target).is_some()
        {
            self.log.push(LogEvent::MoveBlocked { target });
            return false;
        }

        self.state.hero.pos = target;
        self.collect_pickup(target);
        self.take_contact_damage(target);

        if self.state.hero.is_dead() {
            self.finish(RunOutcome::Defeat);
        }
        true
    }

    fn collect_pickup(&mut self, pos: Pos) {
        let Some(item) = self.state.map.tile_at(pos).item() else {
            return;
        };
        match item {
            ItemKind::Potion => {
                self.state.counters.potions_carried += 1;
                self.state.hero.heal(self.config.potion_heal);
            }
            ItemKind::Sword => {
                self.state.hero.attack =
                    self.state.hero.attack.saturating_add(self.config.weapon_attack_bonus);
            }
        }
        self.state.map.set_tile(pos, TileKind::Empty);
        self.log.push(LogEvent::ItemPickedUp { item, pos });
    }

    /// Every enemy next to `pos` hits once, whichever way the hero came from.
    fn take_contact_damage(&mut self, pos: Pos) {
        for enemy_id in self.state.adjacent_enemies(pos) {
            let damage = self.state.enemies[enemy_id].attack;
            self.state.hero.take_damage(damage);
            self.log.push(LogEvent::HeroDamaged {
                enemy: enemy_id,
                damage,
                hp_left: self.state.hero.hp,
            });
        }
    }
}
