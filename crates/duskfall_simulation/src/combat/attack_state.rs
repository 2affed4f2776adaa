//! Фазы атаки: windup → active → recovery
//!
//! # Architecture
//!
//! Наличие `AttackState` на entity == "is attacking" флаг: система начала
//! атаки никогда не вставляет второй (re-entry guard). Damage window — фаза
//! Active: окно ведут таймеры фаз в ECS, движок получает AnimationCue с
//! той же длительностью (notify-callbacks анимации обратно не нужны).
//!
//! # Attack Flow
//!
//! ```text
//! attack input / combat sphere overlap
//!   ↓
//! insert AttackState (phase = Windup) + AnimationCue
//!   ↓
//! Windup истёк → Active (swing sound cue, hitbox live)
//!   ↓
//! detect_swing_hits: overlap → HitLanded (dedup hit_entities)
//!   ↓
//! Active истёк → Recovery
//!   ↓
//! Recovery истёк → remove AttackState + AttackEnded event
//! ```

use bevy::prelude::*;

use crate::engine::{SoundCue, SoundId};

/// Параметры одного замаха (копируются в AttackState при старте)
///
/// Источник: Weapon для игрока, claw-статы Enemy для врага.
#[derive(Debug, Clone, Copy, Reflect)]
pub struct SwingSpec {
    /// Урон за удар (единственный скаляр, без модификаторов)
    pub damage: u32,
    /// Дальность swing hitbox (метры)
    pub reach: f32,
    /// Замах (секунды)
    pub windup: f32,
    /// Damage window (секунды)
    pub active: f32,
    /// Восстановление (секунды)
    pub recovery: f32,
    /// Звук замаха (проигрывается при входе в Active)
    pub swing_sound: SoundId,
}

/// Текущая фаза атаки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum AttackPhase {
    /// Замах (телеграф, hitbox выключен)
    Windup,
    /// Damage window (hitbox live)
    Active,
    /// Восстановление (уязвим, hitbox выключен)
    Recovery,
}

/// Состояние атаки (компонент присутствует == атакуем)
///
/// `hit_entities` — кого уже задели этим замахом (один замах бьёт цель
/// максимум один раз).
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct AttackState {
    pub phase: AttackPhase,
    /// Оставшееся время текущей фазы (секунды)
    pub phase_timer: f32,
    pub spec: SwingSpec,
    pub hit_entities: Vec<Entity>,
}

impl AttackState {
    /// Новая атака в фазе Windup
    pub fn new(spec: SwingSpec) -> Self {
        Self {
            phase: AttackPhase::Windup,
            phase_timer: spec.windup,
            spec,
            hit_entities: Vec::new(),
        }
    }

    /// Hitbox live? (фаза Active)
    pub fn is_hitbox_active(&self) -> bool {
        self.phase == AttackPhase::Active
    }
}

/// Event: атака завершена (Recovery истёк, компонент снят)
///
/// Игрок: re-attack если attack key ещё зажат.
/// Враг: планирование повторной атаки через randomized delay.
#[derive(Event, Debug, Clone)]
pub struct AttackEnded {
    pub entity: Entity,
}

/// Система: продвижение фаз атаки по таймерам
///
/// Recovery истёк → remove AttackState + AttackEnded событие.
pub fn advance_attack_phases(
    mut query: Query<(Entity, &Transform, &mut AttackState)>,
    time: Res<Time<Fixed>>,
    mut commands: Commands,
    mut ended: EventWriter<AttackEnded>,
    mut sounds: EventWriter<SoundCue>,
) {
    let delta = time.delta_secs();

    for (entity, transform, mut attack) in query.iter_mut() {
        attack.phase_timer -= delta;
        if attack.phase_timer > 0.0 {
            continue;
        }

        match attack.phase {
            AttackPhase::Windup => {
                attack.phase = AttackPhase::Active;
                attack.phase_timer = attack.spec.active;
                // Swing sound в момент открытия damage window
                sounds.write(SoundCue {
                    sound: attack.spec.swing_sound,
                    position: transform.translation,
                });
            }
            AttackPhase::Active => {
                attack.phase = AttackPhase::Recovery;
                attack.phase_timer = attack.spec.recovery;
            }
            AttackPhase::Recovery => {
                commands.entity(entity).remove::<AttackState>();
                ended.write(AttackEnded { entity });
                crate::log(&format!("attack completed (entity: {:?})", entity));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_spec() -> SwingSpec {
        SwingSpec {
            damage: 25,
            reach: 1.5,
            windup: 0.3,
            active: 0.3,
            recovery: 0.3,
            swing_sound: SoundId::WeaponSwing,
        }
    }

    #[test]
    fn test_attack_state_starts_in_windup() {
        let attack = AttackState::new(test_spec());
        assert_eq!(attack.phase, AttackPhase::Windup);
        assert_eq!(attack.phase_timer, 0.3);
        assert!(!attack.is_hitbox_active());
        assert!(attack.hit_entities.is_empty());
    }

    #[test]
    fn test_hitbox_active_only_in_active_phase() {
        let mut attack = AttackState::new(test_spec());
        assert!(!attack.is_hitbox_active());

        attack.phase = AttackPhase::Active;
        assert!(attack.is_hitbox_active());

        attack.phase = AttackPhase::Recovery;
        assert!(!attack.is_hitbox_active());
    }
}
