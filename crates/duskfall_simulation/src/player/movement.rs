//! Player движение: headless stand-in для CharacterBody движка
//!
//! Оси input уже camera-relative (bridge поворачивает их yaw'ом камеры
//! до записи в PlayerInput). Здесь только интеграция: скорость по
//! MovementStatus, поворот к направлению, прыжок/гравитация с Grounded
//! флагом.

use bevy::prelude::*;

use crate::combat::Dead;
use crate::components::{
    Grounded, MovementSpeed, MovementStatus, Player, PlayerInput, VerticalVelocity,
};
use crate::engine::JumpIntent;

const GRAVITY: f32 = 9.8; // м/с²
const JUMP_SPEED: f32 = 4.5; // м/с

/// Система: PlayerInput.jump_pressed → JumpIntent
pub fn emit_jump_intents(
    query: Query<(Entity, &PlayerInput, &Grounded), (With<Player>, Without<Dead>)>,
    mut jumps: EventWriter<JumpIntent>,
) {
    for (entity, input, grounded) in query.iter() {
        if input.jump_pressed && grounded.0 {
            jumps.write(JumpIntent { entity });
        }
    }
}

/// Система: горизонтальное движение игрока
///
/// axis.y = forward → -Z (Bevy convention). Поворачиваем персонажа к
/// направлению движения (orient-to-movement).
pub fn apply_player_movement(
    time: Res<Time<Fixed>>,
    mut query: Query<
        (
            &mut Transform,
            &PlayerInput,
            &MovementStatus,
            &MovementSpeed,
        ),
        (With<Player>, Without<Dead>),
    >,
) {
    let delta = time.delta_secs();

    for (mut transform, input, status, speed) in query.iter_mut() {
        if !input.is_moving() {
            continue;
        }

        let direction = Vec3::new(input.move_axis.x, 0.0, -input.move_axis.y)
            .normalize_or_zero();
        transform.translation += direction * speed.current(*status) * delta;

        // Смотрим туда, куда идём
        let target = transform.translation + direction;
        transform.look_at(target, Vec3::Y);
    }
}

/// Система: вертикальный stand-in (прыжок + гравитация)
///
/// Земля — плоскость y = 0. Engine-bridge заменяет это настоящим
/// is_on_floor(); флаг Grounded читает stamina machine (airborne).
pub fn apply_gravity(
    time: Res<Time<Fixed>>,
    mut jumps: EventReader<JumpIntent>,
    mut query: Query<(Entity, &mut Transform, &mut VerticalVelocity, &mut Grounded)>,
) {
    let delta = time.delta_secs();

    for jump in jumps.read() {
        let Ok((_, _, mut velocity, mut grounded)) = query.get_mut(jump.entity) else {
            continue;
        };
        if grounded.0 {
            velocity.0 = JUMP_SPEED;
            grounded.0 = false;
        }
    }

    for (_, mut transform, mut velocity, mut grounded) in query.iter_mut() {
        if grounded.0 && velocity.0 == 0.0 {
            continue;
        }

        velocity.0 -= GRAVITY * delta;
        transform.translation.y += velocity.0 * delta;

        if transform.translation.y <= 0.0 {
            transform.translation.y = 0.0;
            velocity.0 = 0.0;
            grounded.0 = true;
        } else {
            grounded.0 = false;
        }
    }
}
