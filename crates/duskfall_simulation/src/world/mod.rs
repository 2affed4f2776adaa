//! World objects: pickups, floating platforms, floor switches
//!
//! Плоские скриптовые триггеры — overlap события + fire-once таймеры,
//! без собственных state machines.

use bevy::prelude::*;

pub mod floor_switch;
pub mod item;
pub mod platform;

pub use floor_switch::FloorSwitch;
pub use item::{Coin, Explosive, Item};
pub use platform::FloatingPlatform;

use crate::SimulationSet;

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            (
                item::rotate_items,
                item::process_pickups,
                platform::update_platforms,
                floor_switch::floor_switch_triggers,
                floor_switch::update_floor_switches,
            )
                .chain()
                .in_set(SimulationSet::World),
        );
    }
}
