//! Enemy sweep run after each accepted hero action.

use super::*;

/// Index 0 means the enemy stays put this turn.
const WANDER_CHOICES: [Option<Direction>; 5] =
    [None, Some(Direction::Left), Some(Direction::Right), Some(Direction::Up), Some(Direction::Down)];

impl Game {
    pub(super) fn run_enemy_turn(&mut self) {
        let enemy_ids: Vec<EntityId> = self.state.enemies.keys().collect();

        for enemy_id in enemy_ids {
            let enemy = &mut self.state.enemies[enemy_id];
            if enemy.just_retaliated {
                enemy.just_retaliated = false;
                continue;
            }
            let (enemy_pos, attack) = (enemy.pos, enemy.attack);

            if self.state.map.is_adjacent(enemy_pos, self.state.hero.pos) {
                self.state.hero.take_damage(attack);
                self.log.push(LogEvent::HeroDamaged {
                    enemy: enemy_id,
                    damage: attack,
                    hp_left: self.state.hero.hp,
                });
                if self.state.hero.is_dead() {
                    self.clear_retaliation_flags();
                    self.finish(RunOutcome::Defeat);
                    return;
                }
                continue;
            }

            self.wander(enemy_id, enemy_pos);
        }
    }

    /// Random single step; occupancy is checked against positions already updated
    /// earlier in this sweep.
    fn wander(&mut self, enemy_id: EntityId, from: Pos) {
        let Some(direction) = WANDER_CHOICES[pick(&mut self.rng, WANDER_CHOICES.len())] else {
            return;
        };
        let target = self.state.map.wrap(from.step(direction));
        let occupied = self
            .state
            .enemies
            .iter()
            .any(|(other_id, other)| other_id != enemy_id && other.pos == target);
        if !self.state.map.is_empty(target) || target == self.state.hero.pos || occupied {
            return;
        }
        self.state.enemies[enemy_id].pos = target;
    }

    fn clear_retaliation_flags(&mut self) {
        for enemy in self.state.enemies.values_mut() {
            enemy.just_retaliated = false;
        }
    }
}
