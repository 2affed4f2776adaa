//! Engine boundary: события движка и headless stand-in'ы
//!
//! Движок владеет collision detection, navigation, анимациями и звуком —
//! симуляция только конфигурирует volumes и реагирует на callbacks.
//!
//! Направления трафика:
//! - Engine → ECS: `VolumeEntered`/`VolumeExited` (overlap callbacks),
//!   `JumpIntent`, PlayerInput (пишется bridge'ем в компонент)
//! - ECS → Engine: `AnimationCue`, `SoundCue`, `VfxCue`, `Attachment`
//!
//! В headless режиме `detect_volume_overlaps` эмулирует overlap callbacks
//! простыми distance-проверками — state machines работают без движка.

use bevy::prelude::*;

pub mod events;
pub mod volumes;

pub use events::{
    AnimId, AnimationCue, JumpIntent, SoundCue, SoundId, VfxCue, VfxId, VolumeEntered, VolumeExited,
};
pub use volumes::{TriggerVolume, VolumeKind};

use crate::SimulationSet;

/// Engine bridge plugin: регистрация boundary-событий + headless overlap
pub struct EngineBridgePlugin;

impl Plugin for EngineBridgePlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<VolumeEntered>()
            .add_event::<VolumeExited>()
            .add_event::<JumpIntent>()
            .add_event::<AnimationCue>()
            .add_event::<SoundCue>()
            .add_event::<VfxCue>();

        app.add_systems(
            FixedUpdate,
            volumes::detect_volume_overlaps.in_set(SimulationSet::Volumes),
        );
    }
}
