//! Stamina/sprint state machine игрока
//!
//! 4 состояния StaminaStatus, переход каждый тик от (status, sprint key,
//! движение, airborne). Ядро вынесено в чистую функцию `stamina_tick` —
//! (status, inputs, dt) → (new status, new stamina, movement status) —
//! система лишь применяет результат к компонентам.
//!
//! Правила:
//! - Спринт возможен только: key held ∧ движемся ∧ на земле
//! - Normal: спринт дренирует; ≤ min_sprint → BelowMinimum
//! - BelowMinimum: дренаж продолжается; ≤ 0 → Exhausted (спринт
//!   принудительно выключен, stamina прижата к 0)
//! - Exhausted: пока key held — стоим на нуле; отпустили →
//!   ExhaustedRecovering
//! - ExhaustedRecovering: реген; ≥ min_sprint → Normal
//! - Exhausted достижим ТОЛЬКО из BelowMinimum

use bevy::prelude::*;

use crate::combat::Dead;
use crate::components::{
    Grounded, MovementStatus, Player, PlayerInput, Stamina, StaminaStatus,
};

/// Входы stamina-машины за один тик
#[derive(Debug, Clone, Copy)]
pub struct SprintInput {
    /// Sprint key зажат
    pub held: bool,
    /// Есть горизонтальное движение
    pub moving: bool,
    /// В воздухе (спринт не стартует и не дренирует)
    pub airborne: bool,
}

impl SprintInput {
    fn sprinting_possible(&self) -> bool {
        self.held && self.moving && !self.airborne
    }
}

/// Чистая функция перехода stamina-машины
///
/// Возвращает (новый статус, новая stamina, movement status).
/// Инварианты: результат всегда в [0, max]; Exhausted появляется только
/// из BelowMinimum; Exhausted/ExhaustedRecovering → MovementStatus::Normal.
pub fn stamina_tick(
    status: StaminaStatus,
    stamina: &Stamina,
    input: SprintInput,
    delta: f32,
) -> (StaminaStatus, f32, MovementStatus) {
    let mut next = *stamina;

    match status {
        StaminaStatus::Normal => {
            if input.sprinting_possible() {
                next.drain(delta);
                let status = if next.below_minimum() {
                    StaminaStatus::BelowMinimum
                } else {
                    StaminaStatus::Normal
                };
                (status, next.current, MovementStatus::Sprinting)
            } else {
                next.regenerate(delta);
                (StaminaStatus::Normal, next.current, MovementStatus::Normal)
            }
        }

        StaminaStatus::BelowMinimum => {
            if input.sprinting_possible() {
                next.drain(delta);
                if next.is_empty() {
                    // Единственный вход в Exhausted
                    (StaminaStatus::Exhausted, 0.0, MovementStatus::Normal)
                } else {
                    (
                        StaminaStatus::BelowMinimum,
                        next.current,
                        MovementStatus::Sprinting,
                    )
                }
            } else {
                next.regenerate(delta);
                let status = if next.current >= next.min_sprint {
                    StaminaStatus::Normal
                } else {
                    StaminaStatus::BelowMinimum
                };
                (status, next.current, MovementStatus::Normal)
            }
        }

        StaminaStatus::Exhausted => {
            if input.held {
                // Зажатый sprint key держит на нуле
                (StaminaStatus::Exhausted, 0.0, MovementStatus::Normal)
            } else {
                (
                    StaminaStatus::ExhaustedRecovering,
                    next.current,
                    MovementStatus::Normal,
                )
            }
        }

        StaminaStatus::ExhaustedRecovering => {
            next.regenerate(delta);
            let status = if next.current >= next.min_sprint {
                StaminaStatus::Normal
            } else {
                StaminaStatus::ExhaustedRecovering
            };
            (status, next.current, MovementStatus::Normal)
        }
    }
}

/// Система: применение stamina-машины к игроку
pub fn update_stamina(
    time: Res<Time<Fixed>>,
    mut query: Query<
        (
            &PlayerInput,
            &Grounded,
            &mut Stamina,
            &mut StaminaStatus,
            &mut MovementStatus,
        ),
        (With<Player>, Without<Dead>),
    >,
) {
    let delta = time.delta_secs();

    for (input, grounded, mut stamina, mut status, mut movement) in query.iter_mut() {
        let sprint_input = SprintInput {
            held: input.sprint_held,
            moving: input.is_moving(),
            airborne: !grounded.0,
        };

        let (new_status, new_stamina, new_movement) =
            stamina_tick(*status, &stamina, sprint_input, delta);

        if *status != new_status {
            crate::log(&format!("stamina status {:?} -> {:?}", *status, new_status));
        }

        stamina.current = new_stamina;
        *status = new_status;
        *movement = new_movement;
    }
}
