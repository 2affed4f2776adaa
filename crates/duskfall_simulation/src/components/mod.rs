//! ECS Components для игровых entity
//!
//! Организация по доменам:
//! - actor: базовые характеристики (Actor, Health, Stamina, Coins)
//! - movement: статусы движения и headless-перемещение (MovementStatus,
//!   StaminaStatus, MovementCommand, MovementSpeed, Grounded)
//! - player: player control (Player, PlayerInput, CombatTarget)

pub mod actor;
pub mod movement;
pub mod player;

// Re-exports для удобного импорта
pub use actor::*;
pub use movement::*;
pub use player::*;
