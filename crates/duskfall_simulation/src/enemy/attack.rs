//! Attack loop врага: старт, randomized re-attack, смерть
//!
//! Атака гейтится наличием AttackState (re-entry guard). После attack end
//! повторная атака НЕ мгновенная, как у игрока, а через случайную задержку
//! в [min_attack_delay, max_attack_delay] — seeded RNG, детерминизм в
//! тестах сохраняется.

use bevy::prelude::*;
use rand::Rng;

use super::{Enemy, EnemyMovementStatus};
use crate::combat::{AttackEnded, AttackState, DespawnAfter, EntityDied};
use crate::components::{CombatTarget, Health, MovementCommand};
use crate::engine::{AnimationCue, AnimId, TriggerVolume};
use crate::DeterministicRng;

/// Задержка перед следующей атакой (f32 countdown)
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct AttackDelay {
    /// Оставшееся время (секунды)
    pub timer: f32,
}

/// Система: обработка конца атаки врага
///
/// Если игрок всё ещё в combat sphere — планируем повторную атаку через
/// случайную задержку. Если вышел за время замаха — чистим mutual refs и
/// возвращаемся к преследованию (или Idle, если и aggro потерян).
pub fn enemy_attack_end(
    mut commands: Commands,
    mut ended: EventReader<AttackEnded>,
    mut enemies: Query<(&mut Enemy, &mut EnemyMovementStatus, &mut MovementCommand)>,
    mut players: Query<(&mut CombatTarget, &Health)>,
    mut rng: ResMut<DeterministicRng>,
) {
    for event in ended.read() {
        let Ok((mut enemy, mut status, mut command)) = enemies.get_mut(event.entity) else {
            continue; // AttackEnded игрока
        };
        if *status == EnemyMovementStatus::Dead {
            continue;
        }

        let target_alive = enemy
            .combat_target
            .and_then(|target| players.get(target).ok())
            .map(|(_, health)| health.is_alive())
            .unwrap_or(false);

        if enemy.overlapping_combat && target_alive {
            let delay = rng
                .rng
                .gen_range(enemy.min_attack_delay..enemy.max_attack_delay);
            commands.entity(event.entity).insert(AttackDelay { timer: delay });
            crate::log(&format!(
                "enemy {:?} re-attack in {:.2}s",
                event.entity, delay
            ));
            continue;
        }

        // Цель ушла из combat range (или умерла) — чистим ссылки с обеих сторон
        if let Some(target) = enemy.combat_target.take() {
            if let Ok((mut player_target, _)) = players.get_mut(target) {
                if player_target.0 == Some(event.entity) {
                    player_target.0 = None;
                }
            }
        }

        match enemy.aggro_target {
            Some(target) if target_still_valid(target, &players) => {
                *status = EnemyMovementStatus::MoveToTarget;
                *command = MovementCommand::FollowEntity { target };
            }
            _ => {
                *status = EnemyMovementStatus::Idle;
                *command = MovementCommand::Idle;
            }
        }
    }
}

/// Система: отсчёт задержки между атаками
pub fn tick_attack_delays(
    mut commands: Commands,
    time: Res<Time<Fixed>>,
    mut query: Query<(Entity, &mut AttackDelay)>,
) {
    let delta = time.delta_secs();

    for (entity, mut delay) in query.iter_mut() {
        delay.timer -= delta;
        if delay.timer <= 0.0 {
            commands.entity(entity).remove::<AttackDelay>();
        }
    }
}

/// Система: начало атаки врага
///
/// Гейты: жив, цель в combat sphere и жива, атака не идёт, задержка
/// не тикает. Первая атака после входа в combat range — немедленная.
pub fn enemy_begin_attacks(
    mut commands: Commands,
    mut enemies: Query<
        (Entity, &Enemy, &mut EnemyMovementStatus, &Health),
        (Without<AttackState>, Without<AttackDelay>),
    >,
    targets: Query<&Health, With<CombatTarget>>,
    mut anims: EventWriter<AnimationCue>,
) {
    for (entity, enemy, mut status, health) in enemies.iter_mut() {
        if *status == EnemyMovementStatus::Dead || !health.is_alive() {
            continue;
        }
        if !enemy.overlapping_combat {
            continue;
        }
        let Some(target) = enemy.combat_target else {
            continue;
        };
        let Ok(target_health) = targets.get(target) else {
            continue;
        };
        if !target_health.is_alive() {
            continue;
        }

        commands.entity(entity).insert(AttackState::new(enemy.claw_spec()));
        *status = EnemyMovementStatus::Attacking;
        anims.write(AnimationCue {
            entity,
            anim: AnimId::EnemyAttack,
        });

        crate::log(&format!("enemy {:?} attacks {:?}", entity, target));
    }
}

/// Система: смерть врага
///
/// Dead — absorbing: статус меняется один раз, volumes выключаются
/// (следующий тик раздаст синтетические exits), ссылки чистятся с обеих
/// сторон, труп лежит corpse_delay и удаляется.
pub fn enemy_death(
    mut commands: Commands,
    mut died: EventReader<EntityDied>,
    mut enemies: Query<(&mut Enemy, &mut EnemyMovementStatus, &mut MovementCommand)>,
    mut players: Query<&mut CombatTarget>,
    mut volumes: Query<&mut TriggerVolume>,
) {
    for event in died.read() {
        let Ok((mut enemy, mut status, mut command)) = enemies.get_mut(event.entity) else {
            continue;
        };
        if *status == EnemyMovementStatus::Dead {
            continue;
        }

        *status = EnemyMovementStatus::Dead;
        *command = MovementCommand::Stop;
        enemy.overlapping_combat = false;
        enemy.aggro_target = None;

        if let Some(target) = enemy.combat_target.take() {
            if let Ok(mut player_target) = players.get_mut(target) {
                if player_target.0 == Some(event.entity) {
                    player_target.0 = None;
                }
            }
        }

        // Все коллайдеры выключаются, труп не детектится и не бьётся
        for mut volume in volumes.iter_mut() {
            if volume.owner == event.entity {
                volume.enabled = false;
            }
        }

        commands
            .entity(event.entity)
            .remove::<AttackDelay>()
            .insert(DespawnAfter {
                timer: enemy.corpse_delay,
            });

        crate::log_info(&format!("enemy {:?} died", event.entity));
    }
}

fn target_still_valid(
    target: Entity,
    players: &Query<(&mut CombatTarget, &Health)>,
) -> bool {
    players
        .get(target)
        .map(|(_, health)| health.is_alive())
        .unwrap_or(false)
}
