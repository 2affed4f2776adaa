//! Damage application и смерть
//!
//! Обрабатывает HitLanded события (swing hitbox, explosive) и применяет
//! скалярный урон к Health. Никаких damage types, брони, respawn'а.

use bevy::prelude::*;

use crate::components::{Health, Player};
use crate::engine::{AnimId, AnimationCue, SoundCue, SoundId, VfxCue, VfxId};

/// Событие: удар дошёл до цели (до применения к Health)
#[derive(Event, Debug, Clone)]
pub struct HitLanded {
    pub attacker: Entity,
    pub target: Entity,
    pub damage: u32,
}

/// Событие: урон нанесен
///
/// Генерируется после применения damage к Health.
/// Используется для UI, звуков, эффектов.
#[derive(Event, Debug, Clone)]
pub struct DamageDealt {
    pub attacker: Entity,
    pub target: Entity,
    pub damage: u32,
    pub target_died: bool,
}

/// Событие: entity умер (health <= 0)
#[derive(Event, Debug, Clone)]
pub struct EntityDied {
    pub entity: Entity,
    pub killer: Option<Entity>,
}

/// Компонент-маркер: entity мертв (Health <= 0)
///
/// One-shot: вставляется один раз, дальше только despawn таймер.
#[derive(Component, Debug)]
pub struct Dead;

/// Удаление entity через timeout (трупы врагов)
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct DespawnAfter {
    /// Оставшееся время (секунды)
    pub timer: f32,
}

/// Система: apply damage от HitLanded событий
///
/// 1. Читаем HitLanded события
/// 2. Применяем damage к Health (saturating)
/// 3. Генерируем DamageDealt и EntityDied события + hit VFX/sound cues
pub fn apply_damage(
    mut hit_events: EventReader<HitLanded>,
    mut damage_dealt_events: EventWriter<DamageDealt>,
    mut entity_died_events: EventWriter<EntityDied>,
    mut targets: Query<(&mut Health, &Transform)>,
    mut sounds: EventWriter<SoundCue>,
    mut vfx: EventWriter<VfxCue>,
) {
    for hit in hit_events.read() {
        let Ok((mut target_health, target_transform)) = targets.get_mut(hit.target) else {
            crate::log_warning(&format!(
                "HitLanded: target {:?} has no Health component",
                hit.target
            ));
            continue;
        };

        // Применяем damage
        let was_alive = target_health.is_alive();
        target_health.take_damage(hit.damage);
        let is_alive = target_health.is_alive();

        sounds.write(SoundCue {
            sound: SoundId::Struck,
            position: target_transform.translation,
        });
        vfx.write(VfxCue {
            vfx: VfxId::HitSpark,
            position: target_transform.translation,
        });

        // Событие: урон нанесен
        damage_dealt_events.write(DamageDealt {
            attacker: hit.attacker,
            target: hit.target,
            damage: hit.damage,
            target_died: was_alive && !is_alive,
        });

        // Событие: entity умер
        if was_alive && !is_alive {
            entity_died_events.write(EntityDied {
                entity: hit.target,
                killer: Some(hit.attacker),
            });

            crate::log_info(&format!(
                "entity {:?} killed by {:?}",
                hit.target, hit.attacker
            ));
        }
    }
}

/// Система: one-shot Dead переход
///
/// Вставляет маркер Dead, снимает активную атаку (труп не машет оружием)
/// и проигрывает death анимацию. Повторный EntityDied для того же entity
/// невозможен (health уже 0), но Without<Dead> страхует порядок.
pub fn mark_dead(
    mut commands: Commands,
    mut death_events: EventReader<EntityDied>,
    alive: Query<Entity, Without<Dead>>,
    players: Query<(), With<Player>>,
    mut anims: EventWriter<AnimationCue>,
) {
    for event in death_events.read() {
        let Ok(entity) = alive.get(event.entity) else {
            continue;
        };

        let Ok(mut entity_commands) = commands.get_entity(entity) else {
            continue;
        };
        entity_commands
            .insert(Dead)
            .remove::<crate::combat::AttackState>();

        let anim = if players.contains(entity) {
            AnimId::PlayerDeath
        } else {
            AnimId::EnemyDeath
        };
        anims.write(AnimationCue { entity, anim });
    }
}

/// Система: despawn по timeout
///
/// Тикает DespawnAfter; вместе с владельцем удаляются его trigger
/// volumes (стоят на отдельных entities со ссылкой owner).
pub fn despawn_after_timeout(
    mut commands: Commands,
    time: Res<Time<Fixed>>,
    mut query: Query<(Entity, &mut DespawnAfter)>,
    volumes: Query<(Entity, &crate::engine::TriggerVolume)>,
) {
    let delta = time.delta_secs();

    for (entity, mut despawn) in query.iter_mut() {
        despawn.timer -= delta;
        if despawn.timer > 0.0 {
            continue;
        }

        for (volume_entity, volume) in volumes.iter() {
            if volume.owner == entity && volume_entity != entity {
                commands.entity(volume_entity).despawn();
            }
        }
        commands.entity(entity).despawn();
        crate::log(&format!("corpse despawned (entity: {:?})", entity));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damage_dealt_event() {
        let event = DamageDealt {
            attacker: Entity::PLACEHOLDER,
            target: Entity::PLACEHOLDER,
            damage: 15,
            target_died: false,
        };

        assert_eq!(event.damage, 15);
        assert!(!event.target_died);
    }

    #[test]
    fn test_lethal_edge_detection() {
        let mut health = Health::new(25);

        let was_alive = health.is_alive();
        health.take_damage(25);
        let is_alive = health.is_alive();

        assert!(was_alive && !is_alive);

        // Повторный удар по трупу не даёт второго "died"
        let was_alive = health.is_alive();
        health.take_damage(25);
        assert!(!(was_alive && !health.is_alive()));
    }
}
