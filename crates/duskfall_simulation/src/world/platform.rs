//! Floating platform: челнок между двумя точками с паузой на концах
//!
//! Constant-speed шаг к end; fire-once countdown переключает движение,
//! на прибытии start/end меняются местами.

use bevy::prelude::*;

/// Движущаяся платформа
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct FloatingPlatform {
    /// Откуда едем (world coords)
    pub start: Vec3,
    /// Куда едем (world coords)
    pub end: Vec3,
    /// Скорость (м/с)
    pub interp_speed: f32,
    /// Пауза на конечной точке (секунды)
    pub wait_time: f32,

    /// Едем прямо сейчас
    pub moving: bool,
    /// Оставшаяся пауза (секунды), активна пока !moving
    pub pause_timer: f32,
}

impl FloatingPlatform {
    /// Платформа от точки спавна до `start + end_offset`
    pub fn new(start: Vec3, end_offset: Vec3) -> Self {
        Self {
            start,
            end: start + end_offset,
            interp_speed: 2.0,
            wait_time: 1.0,
            moving: false,
            // Стартовая пауза перед первым рейсом
            pause_timer: 1.0,
        }
    }
}

/// Спавн платформы
pub fn spawn_platform(commands: &mut Commands, position: Vec3, end_offset: Vec3) -> Entity {
    commands
        .spawn((
            Transform::from_translation(position),
            FloatingPlatform::new(position, end_offset),
        ))
        .id()
}

/// Система: движение платформ
///
/// Пауза истекла → едем к end; приехали → swap точек + новая пауза.
pub fn update_platforms(
    time: Res<Time<Fixed>>,
    mut platforms: Query<(&mut FloatingPlatform, &mut Transform)>,
) {
    let delta = time.delta_secs();

    for (mut platform, mut transform) in platforms.iter_mut() {
        if !platform.moving {
            platform.pause_timer -= delta;
            if platform.pause_timer <= 0.0 {
                platform.moving = true;
            }
            continue;
        }

        let to_end = platform.end - transform.translation;
        let distance = to_end.length();
        let step = platform.interp_speed * delta;

        if distance <= step {
            // Приехали: swap направлений + пауза
            transform.translation = platform.end;
            let end = platform.end;
            platform.end = platform.start;
            platform.start = end;
            platform.moving = false;
            platform.pause_timer = platform.wait_time;
        } else {
            transform.translation += to_end.normalize_or_zero() * step;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_endpoints() {
        let platform = FloatingPlatform::new(Vec3::ZERO, Vec3::new(4.0, 0.0, 0.0));
        assert_eq!(platform.start, Vec3::ZERO);
        assert_eq!(platform.end, Vec3::new(4.0, 0.0, 0.0));
        assert!(!platform.moving);
    }

    #[test]
    fn test_arrival_step_check() {
        // Шаг перекрывает остаток пути → прибытие
        let remaining = 0.02_f32;
        let step = 2.0 * (1.0 / 60.0); // ~0.033
        assert!(remaining <= step);
    }
}
