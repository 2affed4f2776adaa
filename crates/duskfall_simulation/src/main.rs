//! Headless симуляция DUSKFALL
//!
//! Запускает Bevy App без рендера: игрок с зажатой атакой, враг, меч,
//! монета. Смотрим прогон state machines в консоли.

use bevy::prelude::*;
use duskfall_simulation::{
    combat::weapon::spawn_weapon, create_headless_app, enemy::spawn_enemy,
    player::spawn_player, world::item::spawn_coin, Enemy, HudState, PlayerInput,
    SimulationPlugin, Weapon,
};

fn main() {
    let seed = 42;
    println!("Starting DUSKFALL headless simulation (seed: {})", seed);

    let mut app = create_headless_app(seed);
    app.add_plugins(SimulationPlugin);

    // Сцена: игрок, меч под ногами, монета рядом, враг в 4 метрах
    let player = {
        let mut commands = app.world_mut().commands();
        let player = spawn_player(&mut commands, Vec3::ZERO);
        spawn_weapon(&mut commands, Vec3::ZERO, Weapon::rusted_sword());
        spawn_coin(&mut commands, Vec3::new(0.5, 0.0, 0.0));
        spawn_enemy(&mut commands, Vec3::new(4.0, 0.0, 0.0), Enemy::default());
        player
    };
    app.world_mut().flush(); // применяем отложенные spawn-команды

    // Идём на врага с зажатой атакой
    if let Some(mut input) = app.world_mut().get_mut::<PlayerInput>(player) {
        input.move_axis = Vec2::new(1.0, 0.0);
        input.attack_held = true;
    }

    // Запускаем 1000 тиков симуляции
    for tick in 0..1000 {
        app.update();

        if tick % 100 == 0 {
            let hud = app.world().resource::<HudState>();
            println!(
                "Tick {}: hp {}/{}, stamina {:.0}, coins {}, enemy bar: {:?}",
                tick, hud.health, hud.max_health, hud.stamina, hud.coins, hud.enemy_health
            );
        }
    }

    println!("Simulation complete!");
}
