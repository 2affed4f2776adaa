//! Movement компоненты: статусы движения, команды, headless-кинематика

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Статус движения персонажа (определяет текущую скорость)
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub enum MovementStatus {
    #[default]
    Normal,
    Sprinting,
}

/// Статус stamina-машины игрока (4 состояния, переход каждый тик)
///
/// Переходы:
/// - Normal → BelowMinimum (stamina ≤ min_sprint во время спринта)
/// - BelowMinimum → Exhausted (stamina ≤ 0, спринт принудительно выключен)
/// - BelowMinimum → Normal (отрегенерировали выше min_sprint)
/// - Exhausted → ExhaustedRecovering (sprint key отпущен)
/// - ExhaustedRecovering → Normal (stamina ≥ min_sprint)
///
/// Exhausted достижим ТОЛЬКО из BelowMinimum.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub enum StaminaStatus {
    #[default]
    Normal,
    BelowMinimum,
    Exhausted,
    ExhaustedRecovering,
}

/// Скорости движения актора (метры/сек)
#[derive(Component, Clone, Copy, Debug, Reflect)]
#[reflect(Component)]
pub struct MovementSpeed {
    pub walk: f32,
    pub sprint: f32,
}

impl Default for MovementSpeed {
    fn default() -> Self {
        Self {
            walk: 2.0,   // базовая скорость ходьбы
            sprint: 3.5, // скорость спринта
        }
    }
}

impl MovementSpeed {
    pub fn current(&self, status: MovementStatus) -> f32 {
        match status {
            MovementStatus::Normal => self.walk,
            MovementStatus::Sprinting => self.sprint,
        }
    }
}

/// Команда движения для актора (выполняется NavigationAgent движка)
///
/// Архитектура:
/// - ECS система пишет MovementCommand (high-level intent)
/// - Engine-bridge читает и конвертирует в NavigationAgent target
/// - В headless режиме `apply_movement_commands` двигает Transform напрямую
#[derive(Component, Debug, Clone, PartialEq, Default)]
pub enum MovementCommand {
    /// Стоять на месте
    #[default]
    Idle,
    /// Следовать за entity (обновлять target каждый тик)
    FollowEntity { target: Entity },
    /// Остановиться немедленно
    Stop,
}

/// Флаг "на земле" (airborne = !grounded)
///
/// В headless режиме поддерживается gravity stand-in'ом; engine-bridge
/// пишет сюда из CharacterBody.is_on_floor().
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Grounded(pub bool);

impl Default for Grounded {
    fn default() -> Self {
        Self(true)
    }
}

/// Вертикальная скорость (м/с) для прыжка/гравитации stand-in'а
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct VerticalVelocity(pub f32);
