//! Tests for enemy FSM components.

#[cfg(test)]
mod tests {
    use crate::enemy::{Enemy, EnemyMovementStatus};
    use crate::engine::SoundId;

    #[test]
    fn test_enemy_status_default() {
        let status = EnemyMovementStatus::default();
        assert_eq!(status, EnemyMovementStatus::Idle);
    }

    #[test]
    fn test_enemy_config_defaults() {
        let enemy = Enemy::default();

        // Combat sphere строго внутри aggro sphere
        assert!(enemy.combat_radius < enemy.aggro_radius);
        // Лапа достаёт чуть дальше combat sphere (цель на границе бьётся)
        assert!(enemy.claw_reach >= enemy.combat_radius);
        assert!(enemy.min_attack_delay < enemy.max_attack_delay);

        assert!(enemy.aggro_target.is_none());
        assert!(enemy.combat_target.is_none());
        assert!(!enemy.overlapping_combat);
    }

    #[test]
    fn test_claw_spec_mirrors_config() {
        let enemy = Enemy::default();
        let spec = enemy.claw_spec();

        assert_eq!(spec.damage, enemy.damage);
        assert_eq!(spec.reach, enemy.claw_reach);
        assert_eq!(spec.windup, enemy.attack_windup);
        assert_eq!(spec.swing_sound, SoundId::EnemySwing);
    }

    #[test]
    fn test_attack_delay_countdown() {
        let mut timer = 1.5_f32;
        let delta = 0.5;

        timer -= delta;
        assert_eq!(timer, 1.0);

        timer -= delta;
        timer -= delta;
        assert!(timer <= 0.0); // Задержка истекла
    }
}
