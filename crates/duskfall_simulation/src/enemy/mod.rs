//! Enemy AI: aggro/combat state machine
//!
//! Конечный автомат, управляемый overlap-событиями двух концентрических
//! сфер (aggro 6.0 m, combat 1.5 m):
//!
//! ```text
//! Idle ──aggro enter──▶ MoveToTarget ──combat enter──▶ Attacking
//!   ▲                        ▲                             │
//!   └──aggro exit────────────┴──combat exit (не атакуем)───┘
//!                        health 0 → Dead (absorbing)
//! ```
//!
//! Порядок выполнения (SimulationSet::Enemy):
//! 1. enemy_volume_transitions — overlap события → статусы + mutual refs
//! 2. enemy_attack_end — AttackEnded → randomized re-attack delay
//! 3. tick_attack_delays — отсчёт задержки между атаками
//! 4. enemy_begin_attacks — старт атаки (re-entry guard)
//! 5. enemy_follow_target — nav-agent stand-in (движение к цели)
//! 6. enemy_death — Dead переход, volumes off, труп на таймер

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

pub mod aggro;
pub mod attack;
mod fsm_tests;

pub use attack::AttackDelay;

use crate::combat::SwingSpec;
use crate::components::{Actor, Health, MovementCommand, MovementSpeed};
use crate::engine::{SoundId, TriggerVolume, VolumeKind};
use crate::SimulationSet;

/// Статус движения врага
///
/// Dead — absorbing: из него переходов нет.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub enum EnemyMovementStatus {
    #[default]
    Idle,
    MoveToTarget,
    Attacking,
    Dead,
}

/// Враг: конфиг + combat-ссылки
///
/// Поля-ссылки взаимны с CombatTarget игрока: ставятся и чистятся парой.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
#[require(Health, EnemyMovementStatus, MovementCommand, MovementSpeed)]
pub struct Enemy {
    /// Радиус внешней сферы преследования (метры)
    pub aggro_radius: f32,
    /// Радиус внутренней сферы атаки (метры)
    pub combat_radius: f32,

    /// Урон лапы
    pub damage: u32,
    /// Дальность удара лапы (метры)
    pub claw_reach: f32,
    pub attack_windup: f32,
    pub attack_active: f32,
    pub attack_recovery: f32,

    /// Границы randomized задержки между атаками (секунды)
    pub min_attack_delay: f32,
    pub max_attack_delay: f32,

    /// Сколько труп лежит до удаления (секунды)
    pub corpse_delay: f32,

    /// Игрок внутри combat sphere прямо сейчас
    pub overlapping_combat: bool,
    /// Кого преследуем (aggro sphere)
    pub aggro_target: Option<Entity>,
    /// Кого атакуем (combat sphere, взаимно с CombatTarget игрока)
    pub combat_target: Option<Entity>,
}

impl Default for Enemy {
    fn default() -> Self {
        Self {
            aggro_radius: 6.0,
            combat_radius: 1.5,
            damage: 10,
            claw_reach: 1.6,
            attack_windup: 0.4,
            attack_active: 0.3,
            attack_recovery: 0.4,
            min_attack_delay: 0.5,
            max_attack_delay: 3.5,
            corpse_delay: 3.0,
            overlapping_combat: false,
            aggro_target: None,
            combat_target: None,
        }
    }
}

impl Enemy {
    /// Параметры замаха лапы для AttackState
    pub fn claw_spec(&self) -> SwingSpec {
        SwingSpec {
            damage: self.damage,
            reach: self.claw_reach,
            windup: self.attack_windup,
            active: self.attack_active,
            recovery: self.attack_recovery,
            swing_sound: SoundId::EnemySwing,
        }
    }
}

pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            (
                aggro::enemy_volume_transitions,
                attack::enemy_attack_end,
                attack::tick_attack_delays,
                attack::enemy_begin_attacks,
                aggro::enemy_follow_target,
                attack::enemy_death,
            )
                .chain()
                .in_set(SimulationSet::Enemy),
        );
    }
}

/// Спавн врага вместе с его trigger volumes
///
/// Сферы — отдельные entities со ссылкой owner (как вложенные Area3D
/// ноды); позиция берётся от владельца.
pub fn spawn_enemy(commands: &mut Commands, position: Vec3, enemy: Enemy) -> Entity {
    let aggro_radius = enemy.aggro_radius;
    let combat_radius = enemy.combat_radius;

    let entity = commands
        .spawn((
            Transform::from_translation(position),
            Actor { faction_id: 1 },
            Health::new(75),
            enemy,
        ))
        .id();

    commands.spawn(TriggerVolume::new(
        VolumeKind::AggroSphere,
        aggro_radius,
        entity,
    ));
    commands.spawn(TriggerVolume::new(
        VolumeKind::CombatSphere,
        combat_radius,
        entity,
    ));

    entity
}
