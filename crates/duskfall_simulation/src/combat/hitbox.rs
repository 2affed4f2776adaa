//! Swing hitbox: distance checks во время Active-фазы
//!
//! Движок делает настоящую hitbox collision (Area3D на оружии/лапе);
//! headless stand-in — sphere check от позиции атакующего. Дедуп через
//! AttackState.hit_entities: один замах — максимум один удар по цели.

use bevy::prelude::*;

use crate::combat::attack_state::AttackState;
use crate::combat::damage::HitLanded;
use crate::components::{Actor, Health};

/// Система: detect swing overlaps → HitLanded
///
/// Цели — живые акторы другой фракции в пределах spec.reach.
pub fn detect_swing_hits(
    mut attackers: Query<(Entity, &Transform, &Actor, &mut AttackState)>,
    targets: Query<(Entity, &Transform, &Actor, &Health)>,
    mut hits: EventWriter<HitLanded>,
) {
    for (attacker, attacker_transform, attacker_actor, mut attack) in attackers.iter_mut() {
        if !attack.is_hitbox_active() {
            continue;
        }

        let origin = attacker_transform.translation;

        for (target, target_transform, target_actor, target_health) in targets.iter() {
            // Не бьем самого себя
            if target == attacker {
                continue;
            }
            // Только враги (другая фракция)
            if target_actor.faction_id == attacker_actor.faction_id {
                continue;
            }
            // Только живые цели
            if !target_health.is_alive() {
                continue;
            }
            // Этим замахом уже задели
            if attack.hit_entities.contains(&target) {
                continue;
            }

            let distance = origin.distance(target_transform.translation);
            if distance < attack.spec.reach {
                attack.hit_entities.push(target);
                hits.write(HitLanded {
                    attacker,
                    target,
                    damage: attack.spec.damage,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swing_reach_check() {
        // Простой тест логики overlap
        let origin = Vec3::ZERO;
        let reach = 1.5;

        let target_near = Vec3::new(1.0, 0.0, 0.0); // distance = 1.0 < 1.5 ✓
        let target_far = Vec3::new(2.0, 0.0, 0.0); // distance = 2.0 > 1.5 ✗

        assert!(origin.distance(target_near) < reach);
        assert!(origin.distance(target_far) > reach);
    }
}
