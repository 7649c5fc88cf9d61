//! Hero melee against every adjacent enemy, with immediate retaliation from survivors.

use super::*;

impl Game {
    pub(super) fn resolve_attack(&mut self) {
        let hero_pos = self.state.hero.pos;
        let damage = self.state.hero.attack;

        // No early exit: every adjacent enemy is struck even if the hero drops mid-way.
        for enemy_id in self.state.adjacent_enemies(hero_pos) {
            let (hp_left, counter_attack) = {
                let enemy = &mut self.state.enemies[enemy_id];
                enemy.take_damage(damage);
                (enemy.hp, enemy.attack)
            };
            self.log.push(LogEvent::EnemyDamaged { enemy: enemy_id, damage, hp_left });

            if hp_left > 0 {
                self.state.enemies[enemy_id].just_retaliated = true;
                self.state.hero.take_damage(counter_attack);
                self.log.push(LogEvent::EnemyRetaliated { enemy: enemy_id, damage: counter_attack });
            } else {
                self.state.enemies.remove(enemy_id);
                self.state.counters.killed += 1;
                self.log.push(LogEvent::EnemySlain { enemy: enemy_id });
            }
        }

        if self.state.enemies.is_empty() || self.state.counters.killed >= self.total_enemies {
            self.finish(RunOutcome::Victory);
        } else if self.state.hero.is_dead() {
            self.finish(RunOutcome::Defeat);
        }
    }
}
