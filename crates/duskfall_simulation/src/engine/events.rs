//! Boundary events — overlap callbacks движка и cue-события симуляции
//!
//! Overlap события приходят парами enter/exit (actor pairs); cue-события
//! уходят в engine-bridge, который мапит их на AnimationTree, AudioStream
//! и particle сцены. Headless тесты читают их напрямую.

use bevy::prelude::*;

use super::volumes::VolumeKind;

/// Актор вошёл в trigger volume (overlap begin callback)
#[derive(Event, Debug, Clone)]
pub struct VolumeEntered {
    /// Владелец volume (enemy для aggro/combat sphere, item для pickup)
    pub owner: Entity,
    /// Тип volume
    pub kind: VolumeKind,
    /// Кто вошёл
    pub other: Entity,
}

/// Актор вышел из trigger volume (overlap end callback)
#[derive(Event, Debug, Clone)]
pub struct VolumeExited {
    pub owner: Entity,
    pub kind: VolumeKind,
    pub other: Entity,
}

/// Event: намерение прыгнуть (jump intent)
///
/// Генерируется:
/// - Player input system (Space key)
/// - В headless режиме: из PlayerInput.jump_pressed
///
/// Обрабатывается gravity stand-in'ом (headless) или CharacterBody
/// движка (bridge проверяет is_on_floor и применяет jump velocity).
#[derive(Event, Debug, Clone)]
pub struct JumpIntent {
    pub entity: Entity,
}

/// Анимации, которыми управляет симуляция
///
/// Симуляция не проигрывает анимации сама — только говорит движку ЧТО
/// играть. Тайминги damage window живут в ECS (SwingSpec), поэтому
/// notify-callbacks анимации обратно не нужны.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum AnimId {
    /// Атака игрока, вариант замаха (0 или 1)
    PlayerAttack(u8),
    PlayerDeath,
    EnemyAttack,
    EnemyDeath,
}

/// Cue: проиграть анимацию на entity
#[derive(Event, Debug, Clone)]
pub struct AnimationCue {
    pub entity: Entity,
    pub anim: AnimId,
}

/// Звуковые эффекты
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum SoundId {
    WeaponSwing,
    EnemySwing,
    Struck,
    WeaponEquip,
    CoinPickup,
    Explosion,
}

/// Cue: проиграть звук в точке
#[derive(Event, Debug, Clone)]
pub struct SoundCue {
    pub sound: SoundId,
    pub position: Vec3,
}

/// Particle эффекты
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum VfxId {
    HitSpark,
    PickupBurst,
    Explosion,
}

/// Cue: заспавнить particle эффект в точке
#[derive(Event, Debug, Clone)]
pub struct VfxCue {
    pub vfx: VfxId,
    pub position: Vec3,
}
