//! HUD state: данные для UI-виджетов движка
//!
//! Симуляция не рисует UI — ресурс HudState обновляется в конце каждого
//! тика, engine-bridge читает его и двигает бары/счётчики. Видимость
//! enemy health bar — это Some/None у enemy_health: бар показывается
//! ровно пока какой-то враг держит игрока как combat target.

use bevy::prelude::*;
use serde::Serialize;

use crate::components::{Coins, CombatTarget, Health, Player, Stamina, StaminaStatus};
use crate::enemy::Enemy;
use crate::SimulationSet;

/// Снапшот HUD за тик
#[derive(Resource, Debug, Clone, Default, Serialize)]
pub struct HudState {
    pub health: u32,
    pub max_health: u32,
    pub stamina: f32,
    pub max_stamina: f32,
    /// Цветовая зона stamina-бара
    pub stamina_status: StaminaStatus,
    pub coins: u32,
    /// Some(current, max) пока враг держит игрока в combat range
    pub enemy_health: Option<(u32, u32)>,
}

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HudState>().add_systems(
            FixedUpdate,
            sync_hud.in_set(SimulationSet::Hud),
        );
    }
}

/// Система: сбор HUD-данных с игрока и его combat target
pub fn sync_hud(
    mut hud: ResMut<HudState>,
    players: Query<(&Health, &Stamina, &StaminaStatus, &Coins, &CombatTarget), With<Player>>,
    enemies: Query<&Health, With<Enemy>>,
) {
    let Ok((health, stamina, status, coins, combat_target)) = players.single() else {
        return;
    };

    hud.health = health.current;
    hud.max_health = health.max;
    hud.stamina = stamina.current;
    hud.max_stamina = stamina.max;
    hud.stamina_status = *status;
    hud.coins = coins.0;
    hud.enemy_health = combat_target
        .0
        .and_then(|enemy| enemies.get(enemy).ok())
        .map(|enemy_health| (enemy_health.current, enemy_health.max));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hud_state_default_hides_enemy_bar() {
        let hud = HudState::default();
        assert!(hud.enemy_health.is_none());
        assert_eq!(hud.coins, 0);
    }
}
