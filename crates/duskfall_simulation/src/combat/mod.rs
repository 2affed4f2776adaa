//! Combat system module
//!
//! ECS ответственность:
//! - Game state: Health, Weapon, фазы атаки (damage window)
//! - Combat rules: урон, смерть, despawn трупов
//! - Events: HitLanded, DamageDealt, EntityDied, AttackEnded
//!
//! Engine ответственность:
//! - AnimationTree: проигрывание swing/death анимаций (по AnimationCue)
//! - Area3D: настоящая collision detection (headless — distance checks)
//!
//! Порядок выполнения (SimulationSet::Combat):
//! 1. equip_weapon_on_pickup — auto-equip по pickup overlap
//! 2. advance_attack_phases — Windup → Active → Recovery → AttackEnded
//! 3. detect_swing_hits — Active-окно, swing hitbox → HitLanded
//! 4. apply_damage — HitLanded → Health, DamageDealt/EntityDied
//! 5. mark_dead — one-shot Dead переход + death анимация
//! 6. despawn_after_timeout — удаление трупов по таймеру

use bevy::prelude::*;

pub mod attack_state;
pub mod damage;
pub mod hitbox;
pub mod weapon;

// Re-export основных типов
pub use attack_state::{AttackEnded, AttackPhase, AttackState, SwingSpec};
pub use damage::{DamageDealt, Dead, DespawnAfter, EntityDied, HitLanded};
pub use weapon::{Attachment, EquippedWeapon, Weapon, WeaponState};

use crate::SimulationSet;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        // Регистрация событий
        app.add_event::<HitLanded>()
            .add_event::<DamageDealt>()
            .add_event::<EntityDied>()
            .add_event::<AttackEnded>();

        // Регистрация систем
        app.add_systems(
            FixedUpdate,
            (
                weapon::equip_weapon_on_pickup,
                attack_state::advance_attack_phases,
                hitbox::detect_swing_hits,
                damage::apply_damage,
                damage::mark_dead,
                damage::despawn_after_timeout,
            )
                .chain()
                .in_set(SimulationSet::Combat),
        );
    }
}
