//! Aggro/combat переходы по overlap-событиям + движение к цели

use bevy::prelude::*;

use super::{Enemy, EnemyMovementStatus};
use crate::combat::AttackState;
use crate::components::{CombatTarget, Health, MovementCommand, MovementSpeed};
use crate::engine::{VolumeEntered, VolumeExited, VolumeKind};

/// Ближе этой дистанции follow stand-in не прижимается к цели
const FOLLOW_STOP_DISTANCE: f32 = 1.0;

/// Система: overlap события сфер → переходы статуса
///
/// Aggro enter → MoveToTarget; combat enter → mutual refs + стоп (атаку
/// начнёт enemy_begin_attacks). Выходы чистят ссылки с обеих сторон —
/// кроме выхода из combat sphere посреди атаки: им займётся
/// enemy_attack_end, когда замах закончится.
pub fn enemy_volume_transitions(
    mut entered: EventReader<VolumeEntered>,
    mut exited: EventReader<VolumeExited>,
    mut enemies: Query<(
        &mut Enemy,
        &mut EnemyMovementStatus,
        &mut MovementCommand,
        Option<&AttackState>,
    )>,
    mut players: Query<(&mut CombatTarget, &Health)>,
) {
    for event in entered.read() {
        let Ok((mut enemy, mut status, mut command, _)) = enemies.get_mut(event.owner) else {
            continue;
        };
        if *status == EnemyMovementStatus::Dead {
            continue;
        }
        let Ok((mut player_target, player_health)) = players.get_mut(event.other) else {
            continue;
        };
        if !player_health.is_alive() {
            continue;
        }

        match event.kind {
            VolumeKind::AggroSphere => {
                enemy.aggro_target = Some(event.other);
                if *status == EnemyMovementStatus::Idle {
                    *status = EnemyMovementStatus::MoveToTarget;
                    *command = MovementCommand::FollowEntity {
                        target: event.other,
                    };
                    crate::log(&format!(
                        "enemy {:?} aggro: moving to target {:?}",
                        event.owner, event.other
                    ));
                }
            }
            VolumeKind::CombatSphere => {
                enemy.overlapping_combat = true;
                enemy.combat_target = Some(event.other);
                player_target.0 = Some(event.owner);
                *command = MovementCommand::Stop;
                crate::log(&format!(
                    "enemy {:?} in combat range of {:?}",
                    event.owner, event.other
                ));
            }
            _ => {}
        }
    }

    for event in exited.read() {
        let Ok((mut enemy, mut status, mut command, attack)) = enemies.get_mut(event.owner) else {
            continue;
        };
        if *status == EnemyMovementStatus::Dead {
            continue;
        }

        match event.kind {
            VolumeKind::AggroSphere => {
                // Реагируем только на выход преследуемой цели
                if enemy.aggro_target != Some(event.other) {
                    continue;
                }
                // Потеряли цель совсем: стоп + чистим ссылки с обеих сторон
                enemy.aggro_target = None;
                enemy.combat_target = None;
                enemy.overlapping_combat = false;
                *status = EnemyMovementStatus::Idle;
                *command = MovementCommand::Idle;
                if let Ok((mut player_target, _)) = players.get_mut(event.other) {
                    if player_target.0 == Some(event.owner) {
                        player_target.0 = None;
                    }
                }
                crate::log(&format!("enemy {:?} lost target {:?}", event.owner, event.other));
            }
            VolumeKind::CombatSphere => {
                if enemy.combat_target != Some(event.other) {
                    continue;
                }
                enemy.overlapping_combat = false;
                // Посреди замаха ссылки не трогаем — attack end разберётся
                if attack.is_some() {
                    continue;
                }
                enemy.combat_target = None;
                if let Ok((mut player_target, _)) = players.get_mut(event.other) {
                    if player_target.0 == Some(event.owner) {
                        player_target.0 = None;
                    }
                }
                if enemy.aggro_target.is_some() {
                    *status = EnemyMovementStatus::MoveToTarget;
                    *command = MovementCommand::FollowEntity {
                        target: event.other,
                    };
                } else {
                    *status = EnemyMovementStatus::Idle;
                    *command = MovementCommand::Idle;
                }
            }
            _ => {}
        }
    }
}

/// Система: nav-agent stand-in
///
/// MoveToTarget + FollowEntity → шаг к цели с walk-скоростью, разворот
/// лицом. В статусе Attacking стоим, но продолжаем смотреть на цель.
pub fn enemy_follow_target(
    time: Res<Time<Fixed>>,
    mut enemies: Query<(
        &Enemy,
        &EnemyMovementStatus,
        &MovementCommand,
        &MovementSpeed,
        &mut Transform,
    )>,
    targets: Query<&Transform, Without<Enemy>>,
) {
    let delta = time.delta_secs();

    for (enemy, status, command, speed, mut transform) in enemies.iter_mut() {
        match status {
            EnemyMovementStatus::MoveToTarget => {
                let MovementCommand::FollowEntity { target } = command else {
                    continue;
                };
                let Ok(target_transform) = targets.get(*target) else {
                    continue;
                };

                let to_target = target_transform.translation - transform.translation;
                let distance = to_target.length();
                if distance > FOLLOW_STOP_DISTANCE {
                    let step = to_target.normalize_or_zero() * speed.walk * delta;
                    transform.translation += step;
                }
                let look = target_transform.translation;
                let look_y = transform.translation.y;
                transform.look_at(Vec3::new(look.x, look_y, look.z), Vec3::Y);
            }
            EnemyMovementStatus::Attacking => {
                // Лицом к цели, без движения
                let Some(target) = enemy.combat_target else {
                    continue;
                };
                let Ok(target_transform) = targets.get(target) else {
                    continue;
                };
                let look = target_transform.translation;
                let look_y = transform.translation.y;
                transform.look_at(Vec3::new(look.x, look_y, look.z), Vec3::Y);
            }
            _ => {}
        }
    }
}
