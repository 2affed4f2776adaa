//! Items: базовое idle-вращение + pickup эффекты
//!
//! Item — общая часть (вращение, overlap cues). Конкретный эффект — свой
//! компонент: Coin (счётчик монет), Explosive (скалярный урон). Оружие
//! тоже item, но его equip-flow живёт в combat::weapon.

use bevy::prelude::*;

use crate::combat::HitLanded;
use crate::components::{Actor, Coins, Player};
use crate::engine::{
    SoundCue, SoundId, TriggerVolume, VfxCue, VfxId, VolumeEntered, VolumeKind,
};

/// Базовый item в мире
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct Item {
    /// Крутится ли на месте (выключается при equip оружия)
    pub can_rotate: bool,
    /// Скорость вращения (градусы/сек)
    pub rotation_rate: f32,
}

impl Default for Item {
    fn default() -> Self {
        Self {
            can_rotate: true,
            rotation_rate: 45.0,
        }
    }
}

/// Монета: подбор игроком увеличивает счётчик
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Coin {
    pub amount: u32,
}

impl Default for Coin {
    fn default() -> Self {
        Self { amount: 1 }
    }
}

/// Взрывоопасный предмет: скалярный урон тому, кто наступил
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Explosive {
    pub damage: u32,
}

impl Default for Explosive {
    fn default() -> Self {
        Self { damage: 15 }
    }
}

/// Спавн монеты
pub fn spawn_coin(commands: &mut Commands, position: Vec3) -> Entity {
    let entity = commands
        .spawn((Transform::from_translation(position), Item::default(), Coin::default()))
        .id();
    commands
        .entity(entity)
        .insert(TriggerVolume::new(VolumeKind::PickupSphere, 0.8, entity));
    entity
}

/// Спавн взрывоопасного предмета
pub fn spawn_explosive(commands: &mut Commands, position: Vec3) -> Entity {
    let entity = commands
        .spawn((
            Transform::from_translation(position),
            Item::default(),
            Explosive::default(),
        ))
        .id();
    commands
        .entity(entity)
        .insert(TriggerVolume::new(VolumeKind::PickupSphere, 0.8, entity));
    entity
}

/// Система: idle-вращение предметов
pub fn rotate_items(time: Res<Time<Fixed>>, mut items: Query<(&Item, &mut Transform)>) {
    let delta = time.delta_secs();

    for (item, mut transform) in items.iter_mut() {
        if item.can_rotate {
            transform.rotate_y(item.rotation_rate.to_radians() * delta);
        }
    }
}

/// Система: эффекты подбора
///
/// Coin — только игрок; Explosive срабатывает на любом акторе (враг тоже
/// может наступить). Предмет исчезает сразу, cue-события уходят движку.
pub fn process_pickups(
    mut commands: Commands,
    mut entered: EventReader<VolumeEntered>,
    coins_query: Query<(&Coin, &Transform)>,
    explosives: Query<(&Explosive, &Transform)>,
    mut players: Query<&mut Coins, With<Player>>,
    actors: Query<(), With<Actor>>,
    mut hits: EventWriter<HitLanded>,
    mut sounds: EventWriter<SoundCue>,
    mut vfx: EventWriter<VfxCue>,
) {
    for event in entered.read() {
        if event.kind != VolumeKind::PickupSphere {
            continue;
        }

        if let Ok((coin, transform)) = coins_query.get(event.owner) {
            let Ok(mut coins) = players.get_mut(event.other) else {
                continue; // монеты подбирает только игрок
            };
            coins.increment(coin.amount);
            sounds.write(SoundCue {
                sound: SoundId::CoinPickup,
                position: transform.translation,
            });
            vfx.write(VfxCue {
                vfx: VfxId::PickupBurst,
                position: transform.translation,
            });
            despawn_item(&mut commands, event.owner);
            crate::log(&format!("coin picked up, +{}", coin.amount));
            continue;
        }

        if let Ok((explosive, transform)) = explosives.get(event.owner) {
            if actors.get(event.other).is_err() {
                continue;
            }
            hits.write(HitLanded {
                attacker: event.owner,
                target: event.other,
                damage: explosive.damage,
            });
            sounds.write(SoundCue {
                sound: SoundId::Explosion,
                position: transform.translation,
            });
            vfx.write(VfxCue {
                vfx: VfxId::Explosion,
                position: transform.translation,
            });
            despawn_item(&mut commands, event.owner);
            crate::log(&format!(
                "explosive {:?} detonated on {:?}",
                event.owner, event.other
            ));
        }
    }
}

fn despawn_item(commands: &mut Commands, entity: Entity) {
    if let Ok(mut entity_commands) = commands.get_entity(entity) {
        entity_commands.despawn();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_defaults() {
        let item = Item::default();
        assert!(item.can_rotate);
        assert_eq!(item.rotation_rate, 45.0);
    }

    #[test]
    fn test_rotation_step() {
        // 45°/sec при 60Hz → 0.75° за тик
        let step = 45.0_f32.to_radians() * (1.0 / 60.0);
        assert!((step.to_degrees() - 0.75).abs() < 1e-4);
    }
}
