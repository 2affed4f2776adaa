//! Trigger volumes + headless overlap detection
//!
//! Архитектура:
//! - `TriggerVolume` конфигурирует сферу на владельце (радиус, тип)
//! - Движок делает настоящую collision detection (Area3D); здесь —
//!   distance-check stand-in, чтобы state machines работали headless
//! - Retained set `inside` даёт корректные enter/exit ПЕРЕХОДЫ
//!   (events шлём один раз, не каждый тик overlap'а)

use bevy::prelude::*;

use super::events::{VolumeEntered, VolumeExited};
use crate::components::{Actor, Health};

/// Тип trigger volume (что он запускает)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum VolumeKind {
    /// Внешняя сфера врага: вход → преследование
    AggroSphere,
    /// Внутренняя сфера врага: вход → attack loop
    CombatSphere,
    /// Сфера предмета: вход → pickup/equip/взрыв
    PickupSphere,
    /// Плита floor switch: вход → дверь
    PressurePlate,
}

/// Сферический trigger volume
///
/// Один TriggerVolume на entity. Владельцу с несколькими volumes (враг:
/// aggro + combat sphere) спавнятся child-entities со ссылкой `owner` —
/// как вложенные Area3D ноды в сцене движка.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct TriggerVolume {
    pub kind: VolumeKind,
    pub radius: f32,
    /// Выключенный volume не детектит и синтетически "выталкивает" всех
    pub enabled: bool,
    /// Логический владелец (сам entity для предметов, enemy для сфер)
    pub owner: Entity,
    /// Retained set: кто сейчас внутри
    pub inside: Vec<Entity>,
}

impl TriggerVolume {
    pub fn new(kind: VolumeKind, radius: f32, owner: Entity) -> Self {
        Self {
            kind,
            radius,
            enabled: true,
            owner,
            inside: Vec::new(),
        }
    }
}

/// Система: headless overlap detection (engine stand-in)
///
/// Кандидаты — живые акторы (Actor + Health). Для каждого volume:
/// distance check против позиции владельца, diff с retained set →
/// VolumeEntered/VolumeExited. Выключенный volume опустошается с
/// синтетическими exit-событиями (как Area3D.set_monitoring(false)).
///
/// MinimalPlugins не содержит TransformPlugin, поэтому позиция volume —
/// это Transform владельца, без GlobalTransform-иерархии.
pub fn detect_volume_overlaps(
    mut volumes: Query<&mut TriggerVolume>,
    owners: Query<&Transform>,
    candidates: Query<(Entity, &Transform, &Health), With<Actor>>,
    mut entered: EventWriter<VolumeEntered>,
    mut exited: EventWriter<VolumeExited>,
) {
    for mut volume in volumes.iter_mut() {
        if !volume.enabled {
            // Синтетические exits для всех, кто был внутри
            let owner = volume.owner;
            let kind = volume.kind;
            for other in volume.inside.drain(..) {
                exited.write(VolumeExited { owner, kind, other });
            }
            continue;
        }

        let Ok(owner_transform) = owners.get(volume.owner) else {
            continue;
        };
        let center = owner_transform.translation;

        // Кто внутри в этом тике
        let mut now_inside: Vec<Entity> = Vec::new();
        for (candidate, candidate_transform, health) in candidates.iter() {
            if candidate == volume.owner {
                continue;
            }
            // Мёртвые не триггерят volumes
            if !health.is_alive() {
                continue;
            }
            if center.distance(candidate_transform.translation) < volume.radius {
                now_inside.push(candidate);
            }
        }

        // Diff: новые → Entered
        for candidate in &now_inside {
            if !volume.inside.contains(candidate) {
                entered.write(VolumeEntered {
                    owner: volume.owner,
                    kind: volume.kind,
                    other: *candidate,
                });
            }
        }

        // Diff: пропавшие → Exited
        for previous in &volume.inside {
            if !now_inside.contains(previous) {
                exited.write(VolumeExited {
                    owner: volume.owner,
                    kind: volume.kind,
                    other: *previous,
                });
            }
        }

        volume.inside = now_inside;
    }
}
