//! Player systems: input, движение, stamina machine, атака
//!
//! Порядок выполнения (SimulationSet::Player):
//! 1. emit_jump_intents — PlayerInput.jump_pressed → JumpIntent
//! 2. apply_player_movement — horizontal движение + поворот к направлению
//! 3. apply_gravity — вертикальный stand-in (JumpIntent, Grounded)
//! 4. update_stamina — 4-статусная stamina/sprint машина
//! 5. player_attack — начало атаки (re-entry guard через AttackState)

use bevy::prelude::*;

pub mod attack;
pub mod movement;
pub mod stamina;
mod stamina_tests;

pub use stamina::{stamina_tick, SprintInput};

use crate::components::{Actor, Player};
use crate::SimulationSet;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            (
                movement::emit_jump_intents,
                movement::apply_player_movement,
                movement::apply_gravity,
                stamina::update_stamina,
                attack::player_attack,
            )
                .chain()
                .in_set(SimulationSet::Player),
        );
    }
}

/// Спавн игрока (Required Components добирают стандартный набор)
pub fn spawn_player(commands: &mut Commands, position: Vec3) -> Entity {
    commands
        .spawn((
            Transform::from_translation(position),
            Actor { faction_id: 0 },
            Player,
        ))
        .id()
}
