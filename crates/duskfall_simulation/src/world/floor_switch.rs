//! Floor switch: напольная плита, открывающая дверь
//!
//! Игрок наступает → плита утапливается, дверь поднимается. Сходит →
//! через close_delay дверь закрывается обратно; если вернулся раньше —
//! таймер отменяется. Геометрию двигает движок, читая progress (0..1).

use bevy::prelude::*;

use crate::components::Player;
use crate::engine::{TriggerVolume, VolumeEntered, VolumeExited, VolumeKind};

/// Напольный переключатель + дверь
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct FloorSwitch {
    /// Игрок стоит на плите
    pub pressed: bool,
    /// Задержка закрытия после схода (секунды)
    pub close_delay: f32,
    /// Отложенное закрытие; None = не запланировано
    pub close_timer: Option<f32>,
    /// Скорость движения двери (доля/сек)
    pub interp_speed: f32,
    /// 0.0 = дверь закрыта/плита поднята, 1.0 = дверь открыта/плита утоплена
    pub progress: f32,
}

impl Default for FloorSwitch {
    fn default() -> Self {
        Self {
            pressed: false,
            close_delay: 2.0,
            close_timer: None,
            interp_speed: 1.25,
            progress: 0.0,
        }
    }
}

impl FloorSwitch {
    pub fn is_door_open(&self) -> bool {
        self.progress >= 1.0
    }
}

/// Спавн переключателя (плита = trigger volume на самом entity)
pub fn spawn_floor_switch(commands: &mut Commands, position: Vec3) -> Entity {
    let entity = commands
        .spawn((Transform::from_translation(position), FloorSwitch::default()))
        .id();
    commands
        .entity(entity)
        .insert(TriggerVolume::new(VolumeKind::PressurePlate, 0.7, entity));
    entity
}

/// Система: overlap плиты
///
/// Наступил → pressed + отмена отложенного закрытия; сошёл → таймер.
pub fn floor_switch_triggers(
    mut entered: EventReader<VolumeEntered>,
    mut exited: EventReader<VolumeExited>,
    mut switches: Query<&mut FloorSwitch>,
    players: Query<(), With<Player>>,
) {
    for event in entered.read() {
        if event.kind != VolumeKind::PressurePlate || players.get(event.other).is_err() {
            continue;
        }
        let Ok(mut switch) = switches.get_mut(event.owner) else {
            continue;
        };
        switch.pressed = true;
        switch.close_timer = None;
        crate::log(&format!("floor switch {:?} pressed", event.owner));
    }

    for event in exited.read() {
        if event.kind != VolumeKind::PressurePlate || players.get(event.other).is_err() {
            continue;
        }
        let Ok(mut switch) = switches.get_mut(event.owner) else {
            continue;
        };
        switch.pressed = false;
        switch.close_timer = Some(switch.close_delay);
    }
}

/// Система: таймер закрытия + интерполяция двери
pub fn update_floor_switches(time: Res<Time<Fixed>>, mut switches: Query<&mut FloorSwitch>) {
    let delta = time.delta_secs();

    for mut switch in switches.iter_mut() {
        if let Some(timer) = switch.close_timer {
            let timer = timer - delta;
            if timer <= 0.0 {
                switch.close_timer = None;
            } else {
                switch.close_timer = Some(timer);
            }
        }

        // Дверь открыта пока плита нажата или закрытие ещё отложено
        let target = if switch.pressed || switch.close_timer.is_some() {
            1.0
        } else {
            0.0
        };

        let step = switch.interp_speed * delta;
        if switch.progress < target {
            switch.progress = (switch.progress + step).min(1.0);
        } else if switch.progress > target {
            switch.progress = (switch.progress - step).max(0.0);
        }
    }
}
