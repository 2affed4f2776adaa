//! Weapon: pickup item → экипированное оружие
//!
//! `WeaponState` переключается один раз (Pickup → Equipped), обратного
//! пути нет. Equip: отключить collision responses, прицепить к сокету
//! правой руки, выключить idle-вращение, проиграть equip sound.

use bevy::prelude::*;

use crate::combat::attack_state::SwingSpec;
use crate::components::Player;
use crate::engine::{SoundCue, SoundId, TriggerVolume, VolumeKind};
use crate::world::Item;

/// Состояние оружия
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum WeaponState {
    /// Лежит в мире, ждёт подбора (вращается, pickup volume активен)
    Pickup,
    /// В руке персонажа (необратимо)
    Equipped,
}

/// Оружие (melee)
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct Weapon {
    pub state: WeaponState,
    /// Путь к prefab для socket attachment
    pub prefab_path: String,

    pub damage: u32,
    /// Дальность swing hitbox (метры)
    pub reach: f32,
    /// Замах (секунды)
    pub windup: f32,
    /// Damage window (секунды)
    pub active: f32,
    /// Восстановление (секунды)
    pub recovery: f32,
}

impl Default for Weapon {
    fn default() -> Self {
        Self::rusted_sword()
    }
}

impl Weapon {
    /// Стартовый меч
    pub fn rusted_sword() -> Self {
        Self {
            state: WeaponState::Pickup,
            prefab_path: "res://items/rusted_sword.tscn".into(),
            damage: 25,
            reach: 1.5,
            windup: 0.3,
            active: 0.3,
            recovery: 0.3,
        }
    }

    pub fn is_equipped(&self) -> bool {
        self.state == WeaponState::Equipped
    }

    /// Параметры замаха для AttackState
    pub fn swing_spec(&self) -> SwingSpec {
        SwingSpec {
            damage: self.damage,
            reach: self.reach,
            windup: self.windup,
            active: self.active,
            recovery: self.recovery,
            swing_sound: SoundId::WeaponSwing,
        }
    }
}

/// Ссылка wielder'а на entity экипированного оружия
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct EquippedWeapon(pub Entity);

/// Attachment — привязка prefab к сокету скелета
///
/// Вставляется на wielder'а при equip; engine-bridge читает и парентит
/// сцену оружия к сокету (владение визуалом уходит в scene graph движка).
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct Attachment {
    pub prefab_path: String,
    /// Attachment point на скелете персонажа
    pub attachment_point: String,
}

impl Attachment {
    /// Создать attachment для weapon (сокет правой руки)
    pub fn weapon(prefab_path: impl Into<String>) -> Self {
        Self {
            prefab_path: prefab_path.into(),
            attachment_point: "RightHandSocket".into(),
        }
    }
}

/// Спавн оружия-pickup в мире
pub fn spawn_weapon(commands: &mut Commands, position: Vec3, weapon: Weapon) -> Entity {
    let entity = commands
        .spawn((
            Transform::from_translation(position),
            weapon,
            Item {
                can_rotate: true,
                rotation_rate: 45.0,
            },
        ))
        .id();
    commands
        .entity(entity)
        .insert(TriggerVolume::new(VolumeKind::PickupSphere, 1.0, entity));

    entity
}

/// Система: auto-equip при входе игрока в pickup volume
///
/// Collision выключается (volume off), вращение останавливается, prefab
/// цепляется к сокету правой руки, equip sound. WeaponState → Equipped,
/// обратно не переключается.
pub fn equip_weapon_on_pickup(
    mut commands: Commands,
    mut entered: EventReader<crate::engine::VolumeEntered>,
    mut weapons: Query<(&mut Weapon, &mut Item, &mut TriggerVolume, &Transform)>,
    players: Query<Entity, With<Player>>,
    mut sounds: EventWriter<SoundCue>,
) {
    for event in entered.read() {
        if event.kind != VolumeKind::PickupSphere {
            continue;
        }
        // Только игрок подбирает оружие
        let Ok(player) = players.get(event.other) else {
            continue;
        };
        let Ok((mut weapon, mut item, mut volume, transform)) = weapons.get_mut(event.owner) else {
            continue;
        };
        if weapon.is_equipped() {
            continue;
        }

        weapon.state = WeaponState::Equipped;
        item.can_rotate = false;
        volume.enabled = false;

        commands.entity(player).insert((
            EquippedWeapon(event.owner),
            Attachment::weapon(weapon.prefab_path.clone()),
        ));

        sounds.write(SoundCue {
            sound: SoundId::WeaponEquip,
            position: transform.translation,
        });

        crate::log_info(&format!(
            "weapon {:?} equipped by player {:?}",
            event.owner, player
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weapon_starts_as_pickup() {
        let weapon = Weapon::rusted_sword();
        assert_eq!(weapon.state, WeaponState::Pickup);
        assert!(!weapon.is_equipped());
    }

    #[test]
    fn test_swing_spec_mirrors_weapon() {
        let weapon = Weapon::rusted_sword();
        let spec = weapon.swing_spec();
        assert_eq!(spec.damage, weapon.damage);
        assert_eq!(spec.reach, weapon.reach);
        assert_eq!(spec.swing_sound, SoundId::WeaponSwing);
    }

    #[test]
    fn test_attachment_targets_right_hand() {
        let attachment = Attachment::weapon("res://items/rusted_sword.tscn");
        assert_eq!(attachment.attachment_point, "RightHandSocket");
    }
}
