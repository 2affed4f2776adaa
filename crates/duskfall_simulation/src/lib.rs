//! DUSKFALL Simulation Core
//!
//! ECS-симуляция на Bevy 0.16 (strategic layer) для third-person action
//! prototype: player character, enemy AI, weapons, pickups, platforms.
//!
//! HYBRID ARCHITECTURE:
//! - ECS = strategic layer (game state, combat rules, stamina, aggro AI)
//! - Host engine = tactical layer (physics, rendering, navigation, animation,
//!   UI widgets). Engine callbacks приходят как Bevy Events, обратно уходят
//!   cue-события (animation/sound/vfx) и Attachment компоненты.
//!
//! Headless режим полностью проигрывает все state machines: простые
//! distance-check системы заменяют collision/navigation движка в тестах.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod combat;
pub mod components;
pub mod enemy;
pub mod engine;
pub mod hud;
pub mod logger;
pub mod player;
pub mod world;

// Re-export базовых типов для удобства
pub use combat::{
    AttackEnded, AttackPhase, AttackState, Attachment, DamageDealt, Dead, DespawnAfter, EntityDied,
    EquippedWeapon, HitLanded, SwingSpec, Weapon, WeaponState,
};
pub use components::*;
pub use enemy::{Enemy, EnemyMovementStatus};
pub use engine::{AnimId, AnimationCue, JumpIntent, SoundCue, SoundId, TriggerVolume, VfxCue, VfxId,
    VolumeEntered, VolumeExited, VolumeKind};
pub use hud::HudState;
pub use logger::{
    init_logger, log, log_error, log_info, log_warning, set_log_level, set_logger,
    set_logger_if_needed, LogLevel, LogPrinter,
};
pub use player::{stamina_tick, SprintInput};

/// Порядок фаз внутри FixedUpdate (детерминизм между plugins)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// Overlap detection (engine stand-in) → VolumeEntered/VolumeExited
    Volumes,
    /// Player input, движение, stamina machine
    Player,
    /// Enemy FSM: aggro/combat transitions, attack scheduling
    Enemy,
    /// Attack phases, swing hitboxes, damage, death
    Combat,
    /// Items, platforms, floor switches
    World,
    /// HUD state sync (последним — читает итог тика)
    Hud,
}

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app
            // Fixed timestep 60Hz для simulation tick (легче считать интервалы)
            .insert_resource(Time::<Fixed>::from_hz(60.0))
            // Детерминистичный RNG; не перетираем seed, выданный headless app
            .init_resource::<DeterministicRng>()
            .configure_sets(
                FixedUpdate,
                (
                    SimulationSet::Volumes,
                    SimulationSet::Player,
                    SimulationSet::Enemy,
                    SimulationSet::Combat,
                    SimulationSet::World,
                    SimulationSet::Hud,
                )
                    .chain(),
            )
            // Подсистемы (ECS strategic layer)
            .add_plugins((
                engine::EngineBridgePlugin,
                player::PlayerPlugin,
                enemy::EnemyPlugin,
                combat::CombatPlugin,
                world::WorldPlugin,
                hud::HudPlugin,
            ));
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl Default for DeterministicRng {
    fn default() -> Self {
        Self::new(42)
    }
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Manual time strategy: каждый app.update() == ровно один 60Hz тик,
/// независимо от wall-clock (иначе тесты зависят от скорости машины).
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(60.0)) // 60Hz FixedUpdate
        .insert_resource(bevy::time::TimeUpdateStrategy::ManualDuration(
            std::time::Duration::from_secs_f64(1.0 / 60.0),
        ));

    app
}
