//! Атака игрока: gating через AttackState, re-attack по зажатой кнопке
//!
//! Flow: attack key → атака, если есть оружие и не атакуем; в конце
//! Recovery компонент снимается, и если кнопка ещё зажата — следующий
//! тик бьёт снова. Между двумя атаками всегда есть attack-end: система
//! стартует атаку только при отсутствии AttackState.

use bevy::prelude::*;
use rand::Rng;

use crate::combat::{AttackState, Dead, EquippedWeapon, Weapon};
use crate::components::{Player, PlayerInput};
use crate::engine::{AnimId, AnimationCue};
use crate::DeterministicRng;

/// Система: начало атаки игрока
///
/// Гейты: жив, оружие экипировано, атака не идёт. Вариант анимации
/// (2 варианта замаха) выбирается seeded RNG.
pub fn player_attack(
    mut commands: Commands,
    mut rng: ResMut<DeterministicRng>,
    weapons: Query<&Weapon>,
    mut anims: EventWriter<AnimationCue>,
    players: Query<
        (Entity, &PlayerInput, &EquippedWeapon),
        (With<Player>, Without<AttackState>, Without<Dead>),
    >,
) {
    for (entity, input, equipped) in players.iter() {
        if !input.attack_held {
            continue;
        }

        let Ok(weapon) = weapons.get(equipped.0) else {
            crate::log_warning(&format!(
                "player {:?} equipped weapon {:?} is gone",
                entity, equipped.0
            ));
            continue;
        };

        let variant: u8 = rng.rng.gen_range(0..2);

        commands.entity(entity).insert(AttackState::new(weapon.swing_spec()));
        anims.write(AnimationCue {
            entity,
            anim: AnimId::PlayerAttack(variant),
        });

        crate::log(&format!(
            "player attack started (entity: {:?}, variant: {})",
            entity, variant
        ));
    }
}
