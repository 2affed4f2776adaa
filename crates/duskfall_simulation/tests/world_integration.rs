//! World objects integration test
//!
//! Проверяем скриптовые триггеры headless:
//! - Платформа: челнок start↔end с паузами
//! - Монета: подбор игроком, despawn
//! - Explosive: скалярный урон наступившему
//! - Floor switch: дверь с отложенным закрытием
//! - Stamina machine в полном App: sprint до Exhausted и обратно

use bevy::prelude::*;
use duskfall_simulation::player::spawn_player;
use duskfall_simulation::world::floor_switch::spawn_floor_switch;
use duskfall_simulation::world::item::{spawn_coin, spawn_explosive};
use duskfall_simulation::world::platform::spawn_platform;
use duskfall_simulation::world::FloorSwitch;
use duskfall_simulation::*;

fn create_world_app(seed: u64) -> App {
    let mut app = create_headless_app(seed);
    app.add_plugins(SimulationPlugin);
    app
}

#[test]
fn test_platform_shuttles_between_endpoints() {
    let mut app = create_world_app(42);
    let platform = {
        let mut commands = app.world_mut().commands();
        spawn_platform(&mut commands, Vec3::ZERO, Vec3::new(4.0, 0.0, 0.0))
    };
    app.world_mut().flush();

    // Стартовая пауза 1 sec: платформа стоит
    for _ in 0..30 {
        app.update();
    }
    let pos = app.world().get::<Transform>(platform).unwrap().translation;
    assert_eq!(pos, Vec3::ZERO);

    // Скорость 2 м/с, путь 4 м → в пути через ~1.5 sec после паузы
    for _ in 0..120 {
        app.update();
    }
    let pos = app.world().get::<Transform>(platform).unwrap().translation;
    assert!(pos.x > 0.5, "platform should be moving (x = {})", pos.x);

    // Доезжает до конца и после паузы едет обратно
    let mut reached_end = false;
    let mut returned = false;
    for _ in 0..600 {
        app.update();
        let pos = app.world().get::<Transform>(platform).unwrap().translation;
        if pos.x >= 3.99 {
            reached_end = true;
        }
        if reached_end && pos.x < 2.0 {
            returned = true;
            break;
        }
    }
    assert!(reached_end, "platform should reach end point");
    assert!(returned, "platform should swap endpoints and return");
}

#[test]
fn test_coin_pickup_increments_counter() {
    let mut app = create_world_app(42);
    let (player, coin) = {
        let mut commands = app.world_mut().commands();
        let player = spawn_player(&mut commands, Vec3::ZERO);
        let coin = spawn_coin(&mut commands, Vec3::new(0.3, 0.0, 0.0));
        (player, coin)
    };
    app.world_mut().flush();

    for _ in 0..5 {
        app.update();
    }

    let coins = app.world().get::<Coins>(player).unwrap();
    assert_eq!(coins.0, 1);
    assert!(app.world().get_entity(coin).is_err(), "coin despawns on pickup");
}

#[test]
fn test_explosive_damages_and_despawns() {
    let mut app = create_world_app(42);
    let (player, explosive) = {
        let mut commands = app.world_mut().commands();
        let player = spawn_player(&mut commands, Vec3::ZERO);
        let explosive = spawn_explosive(&mut commands, Vec3::new(0.3, 0.0, 0.0));
        (player, explosive)
    };
    app.world_mut().flush();

    for _ in 0..5 {
        app.update();
    }

    let health = app.world().get::<Health>(player).unwrap();
    assert_eq!(health.current, health.max - 15);
    assert!(app.world().get_entity(explosive).is_err());
}

#[test]
fn test_floor_switch_opens_and_delayed_close() {
    let mut app = create_world_app(42);
    let (player, switch) = {
        let mut commands = app.world_mut().commands();
        let player = spawn_player(&mut commands, Vec3::ZERO);
        let switch = spawn_floor_switch(&mut commands, Vec3::ZERO);
        (player, switch)
    };
    app.world_mut().flush();

    // Стоим на плите 1.5 sec → дверь полностью открыта
    for _ in 0..90 {
        app.update();
    }
    {
        let switch_state = app.world().get::<FloorSwitch>(switch).unwrap();
        assert!(switch_state.pressed);
        assert!(switch_state.is_door_open());
    }

    // Сходим с плиты
    app.world_mut()
        .get_mut::<Transform>(player)
        .unwrap()
        .translation = Vec3::new(10.0, 0.0, 0.0);

    // Полсекунды спустя дверь всё ещё открыта (close_delay = 2 sec)
    for _ in 0..30 {
        app.update();
    }
    {
        let switch_state = app.world().get::<FloorSwitch>(switch).unwrap();
        assert!(!switch_state.pressed);
        assert!(switch_state.is_door_open(), "door closes only after delay");
    }

    // Спустя delay + время хода двери — закрыта
    for _ in 0..240 {
        app.update();
    }
    {
        let switch_state = app.world().get::<FloorSwitch>(switch).unwrap();
        assert_eq!(switch_state.progress, 0.0, "door should be fully closed");
    }
}

#[test]
fn test_sprint_cycle_reaches_exhausted_and_recovers() {
    let mut app = create_world_app(42);
    let player = {
        let mut commands = app.world_mut().commands();
        spawn_player(&mut commands, Vec3::ZERO)
    };
    app.world_mut().flush();

    {
        let mut input = app.world_mut().get_mut::<PlayerInput>(player).unwrap();
        input.move_axis = Vec2::new(0.0, 1.0);
        input.sprint_held = true;
    }

    // Полный дренаж: 100 / 25 в сек = 4 sec = 240 тиков (+ запас)
    let mut saw_below_minimum = false;
    let mut saw_exhausted = false;
    let mut previous = StaminaStatus::Normal;

    for _ in 0..300 {
        app.update();
        let status = *app.world().get::<StaminaStatus>(player).unwrap();

        // Exhausted появляется только из BelowMinimum
        if status == StaminaStatus::Exhausted && previous != StaminaStatus::Exhausted {
            assert_eq!(previous, StaminaStatus::BelowMinimum);
            saw_exhausted = true;
        }
        if status == StaminaStatus::BelowMinimum {
            saw_below_minimum = true;
        }
        if status == StaminaStatus::Exhausted {
            // Спринт принудительно выключен
            assert_eq!(
                *app.world().get::<MovementStatus>(player).unwrap(),
                MovementStatus::Normal
            );
        }
        previous = status;
    }

    assert!(saw_below_minimum);
    assert!(saw_exhausted);

    // Отпускаем sprint key → recovery → Normal
    {
        let mut input = app.world_mut().get_mut::<PlayerInput>(player).unwrap();
        input.sprint_held = false;
    }

    let mut saw_recovering = false;
    for _ in 0..300 {
        app.update();
        let status = *app.world().get::<StaminaStatus>(player).unwrap();
        if status == StaminaStatus::ExhaustedRecovering {
            saw_recovering = true;
        }
    }

    assert!(saw_recovering);
    assert_eq!(
        *app.world().get::<StaminaStatus>(player).unwrap(),
        StaminaStatus::Normal
    );

    let stamina = app.world().get::<Stamina>(player).unwrap();
    assert!(stamina.current > stamina.min_sprint);
}
