//! Player компоненты: маркер, input snapshot, combat target

use bevy::prelude::*;

/// Маркер игрока
///
/// Автоматически добавляет стандартный набор через Required Components:
/// Health, Stamina, Coins, статусы движения и кинематику.
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
#[require(
    crate::components::Health,
    crate::components::Stamina,
    crate::components::Coins,
    crate::components::MovementStatus,
    crate::components::StaminaStatus,
    crate::components::MovementSpeed,
    crate::components::Grounded,
    crate::components::VerticalVelocity,
    PlayerInput,
    CombatTarget
)]
pub struct Player;

/// Снапшот input-состояния за тик
///
/// Пишется engine-bridge'ем из input actions движка (axes, sprint, attack,
/// jump); в headless тестах заполняется напрямую. Симуляция только читает.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct PlayerInput {
    /// Движение: X = right, Y = forward (уже camera-relative, -1..1)
    pub move_axis: Vec2,
    /// Sprint key зажат
    pub sprint_held: bool,
    /// Attack key (ЛКМ) зажат
    pub attack_held: bool,
    /// Jump нажат в этом тике (edge, не held)
    pub jump_pressed: bool,
}

impl PlayerInput {
    /// Есть ли горизонтальное движение в этом тике
    pub fn is_moving(&self) -> bool {
        self.move_axis.length_squared() > f32::EPSILON
    }
}

/// Ссылка на врага, держащего игрока в combat range
///
/// Взаимна с Enemy.combat_target: ставится и чистится парой, чтобы не
/// оставлять висячих ссылок. Наличие Some(...) управляет видимостью
/// enemy health bar в HUD.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct CombatTarget(pub Option<Entity>);
