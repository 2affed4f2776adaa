//! Базовые компоненты акторов: Actor, Health, Stamina, Coins

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Актор (игрок, враг) — базовый компонент для живых существ
///
/// Автоматически добавляет Health через Required Components.
/// `faction_id` разводит стороны конфликта: swing hitbox игнорирует
/// цели своей фракции.
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
#[require(Health)]
pub struct Actor {
    /// Stable ID фракции (player = 0, enemies = 1)
    pub faction_id: u64,
}

/// Здоровье актора
///
/// Инвариант: 0 ≤ current ≤ max
#[derive(Component, Debug, Clone, Copy, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct Health {
    pub current: u32,
    pub max: u32,
}

impl Default for Health {
    fn default() -> Self {
        Self::new(100) // Default 100 HP
    }
}

impl Health {
    pub fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.current = self.current.saturating_sub(amount);
    }

    pub fn heal(&mut self, amount: u32) {
        self.current = (self.current + amount).min(self.max);
    }
}

/// Выносливость (stamina) для sprint механики игрока
///
/// Инвариант: 0.0 ≤ current ≤ max
/// Drain: 25 units/sec пока спринтуем, regen: 15 units/sec
/// `min_sprint` — порог BelowMinimum и точка выхода из recovery
#[derive(Component, Debug, Clone, Copy, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct Stamina {
    pub current: f32,
    pub max: f32,
    pub drain_rate: f32, // units per second, пока Sprinting
    pub regen_rate: f32, // units per second
    pub min_sprint: f32, // порог статуса BelowMinimum
}

impl Default for Stamina {
    fn default() -> Self {
        Self::new(100.0)
    }
}

impl Stamina {
    pub fn new(max: f32) -> Self {
        Self {
            current: max,
            max,
            drain_rate: 25.0,
            regen_rate: 15.0,
            min_sprint: 30.0,
        }
    }

    pub fn drain(&mut self, delta_time: f32) {
        self.current = (self.current - self.drain_rate * delta_time).max(0.0);
    }

    pub fn regenerate(&mut self, delta_time: f32) {
        self.current = (self.current + self.regen_rate * delta_time).min(self.max);
    }

    pub fn is_empty(&self) -> bool {
        self.current <= 0.0
    }

    pub fn below_minimum(&self) -> bool {
        self.current <= self.min_sprint
    }
}

/// Счётчик монет игрока
#[derive(Component, Debug, Clone, Copy, Default, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct Coins(pub u32);

impl Coins {
    pub fn increment(&mut self, amount: u32) {
        self.0 += amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_damage() {
        let mut health = Health::new(100);
        assert_eq!(health.current, 100);

        health.take_damage(30);
        assert_eq!(health.current, 70);
        assert!(health.is_alive());

        health.take_damage(100); // Saturating sub
        assert_eq!(health.current, 0);
        assert!(!health.is_alive());
    }

    #[test]
    fn test_health_heal() {
        let mut health = Health::new(100);
        health.take_damage(50);
        assert_eq!(health.current, 50);

        health.heal(30);
        assert_eq!(health.current, 80);

        health.heal(100); // Clamped to max
        assert_eq!(health.current, 100);
    }

    #[test]
    fn test_stamina_drain_clamps_to_zero() {
        let mut stamina = Stamina::new(100.0);
        stamina.current = 10.0;

        stamina.drain(1.0); // 25 units > 10 оставшихся
        assert_eq!(stamina.current, 0.0);
        assert!(stamina.is_empty());
    }

    #[test]
    fn test_stamina_regenerate() {
        let mut stamina = Stamina::new(100.0);
        stamina.current = 50.0;

        stamina.regenerate(2.0); // 2 sec × 15 units/sec = +30
        assert_eq!(stamina.current, 80.0);

        stamina.regenerate(10.0); // Clamp to max
        assert_eq!(stamina.current, 100.0);
    }

    #[test]
    fn test_coins_increment() {
        let mut coins = Coins::default();
        coins.increment(1);
        coins.increment(5);
        assert_eq!(coins.0, 6);
    }
}
