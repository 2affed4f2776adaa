//! Tests for the stamina/sprint state machine.

#[cfg(test)]
mod tests {
    use crate::components::{MovementStatus, Stamina, StaminaStatus};
    use crate::player::stamina::{stamina_tick, SprintInput};

    const DT: f32 = 1.0 / 60.0;

    fn sprinting() -> SprintInput {
        SprintInput {
            held: true,
            moving: true,
            airborne: false,
        }
    }

    fn idle() -> SprintInput {
        SprintInput {
            held: false,
            moving: false,
            airborne: false,
        }
    }

    fn stamina_at(current: f32) -> Stamina {
        let mut stamina = Stamina::new(100.0);
        stamina.current = current;
        stamina
    }

    #[test]
    fn test_normal_sprint_drains() {
        let stamina = stamina_at(100.0);
        let (status, value, movement) =
            stamina_tick(StaminaStatus::Normal, &stamina, sprinting(), 1.0);

        // 100 - 25/sec × 1 sec = 75
        assert_eq!(status, StaminaStatus::Normal);
        assert_eq!(value, 75.0);
        assert_eq!(movement, MovementStatus::Sprinting);
    }

    #[test]
    fn test_normal_regen_when_idle() {
        let stamina = stamina_at(50.0);
        let (status, value, movement) = stamina_tick(StaminaStatus::Normal, &stamina, idle(), 1.0);

        // 50 + 15/sec × 1 sec = 65
        assert_eq!(status, StaminaStatus::Normal);
        assert_eq!(value, 65.0);
        assert_eq!(movement, MovementStatus::Normal);
    }

    #[test]
    fn test_regen_clamps_to_max() {
        let stamina = stamina_at(95.0);
        let (_, value, _) = stamina_tick(StaminaStatus::Normal, &stamina, idle(), 1.0);

        assert_eq!(value, 100.0);
    }

    #[test]
    fn test_normal_to_below_minimum() {
        // min_sprint = 30; дренаж за тик перетягивает через порог
        let stamina = stamina_at(30.1);
        let (status, _, movement) = stamina_tick(StaminaStatus::Normal, &stamina, sprinting(), DT);

        assert_eq!(status, StaminaStatus::BelowMinimum);
        // Ниже порога всё ещё спринтуем
        assert_eq!(movement, MovementStatus::Sprinting);
    }

    #[test]
    fn test_below_minimum_to_exhausted_only_at_zero() {
        let stamina = stamina_at(10.0);
        let (status, _, movement) =
            stamina_tick(StaminaStatus::BelowMinimum, &stamina, sprinting(), DT);
        assert_eq!(status, StaminaStatus::BelowMinimum);
        assert_eq!(movement, MovementStatus::Sprinting);

        // Дренаж до нуля → Exhausted, спринт принудительно выключен
        let stamina = stamina_at(0.2);
        let (status, value, movement) =
            stamina_tick(StaminaStatus::BelowMinimum, &stamina, sprinting(), 1.0);
        assert_eq!(status, StaminaStatus::Exhausted);
        assert_eq!(value, 0.0);
        assert_eq!(movement, MovementStatus::Normal);
    }

    #[test]
    fn test_below_minimum_recovers_to_normal() {
        let stamina = stamina_at(29.0);
        let (status, value, _) = stamina_tick(StaminaStatus::BelowMinimum, &stamina, idle(), 1.0);

        // 29 + 15 = 44 ≥ min_sprint(30) → Normal
        assert_eq!(status, StaminaStatus::Normal);
        assert_eq!(value, 44.0);
    }

    #[test]
    fn test_exhausted_pinned_while_key_held() {
        let stamina = stamina_at(0.0);
        let input = SprintInput {
            held: true,
            moving: false,
            airborne: false,
        };
        let (status, value, movement) =
            stamina_tick(StaminaStatus::Exhausted, &stamina, input, 1.0);

        assert_eq!(status, StaminaStatus::Exhausted);
        assert_eq!(value, 0.0);
        assert_eq!(movement, MovementStatus::Normal);
    }

    #[test]
    fn test_exhausted_release_starts_recovery() {
        let stamina = stamina_at(0.0);
        let (status, _, _) = stamina_tick(StaminaStatus::Exhausted, &stamina, idle(), DT);

        assert_eq!(status, StaminaStatus::ExhaustedRecovering);
    }

    #[test]
    fn test_recovery_exits_at_min_sprint() {
        let stamina = stamina_at(20.0);
        let (status, _, movement) =
            stamina_tick(StaminaStatus::ExhaustedRecovering, &stamina, idle(), DT);
        assert_eq!(status, StaminaStatus::ExhaustedRecovering);
        assert_eq!(movement, MovementStatus::Normal);

        let stamina = stamina_at(29.9);
        let (status, _, _) = stamina_tick(StaminaStatus::ExhaustedRecovering, &stamina, idle(), 1.0);
        assert_eq!(status, StaminaStatus::Normal);
    }

    #[test]
    fn test_recovery_ignores_sprint_key() {
        // Зажатый sprint key не прерывает recovery
        let stamina = stamina_at(10.0);
        let (status, value, movement) =
            stamina_tick(StaminaStatus::ExhaustedRecovering, &stamina, sprinting(), 1.0);

        assert_eq!(status, StaminaStatus::ExhaustedRecovering);
        assert_eq!(value, 25.0);
        assert_eq!(movement, MovementStatus::Normal);
    }

    #[test]
    fn test_airborne_blocks_sprint() {
        let stamina = stamina_at(100.0);
        let input = SprintInput {
            held: true,
            moving: true,
            airborne: true,
        };
        let (status, value, movement) = stamina_tick(StaminaStatus::Normal, &stamina, input, 1.0);

        // В воздухе спринт не работает — идёт реген
        assert_eq!(status, StaminaStatus::Normal);
        assert_eq!(value, 100.0); // уже max
        assert_eq!(movement, MovementStatus::Normal);
    }

    #[test]
    fn test_standing_still_blocks_drain() {
        let stamina = stamina_at(50.0);
        let input = SprintInput {
            held: true,
            moving: false,
            airborne: false,
        };
        let (_, value, movement) = stamina_tick(StaminaStatus::Normal, &stamina, input, 1.0);

        assert_eq!(value, 65.0); // реген, не дренаж
        assert_eq!(movement, MovementStatus::Normal);
    }

    #[test]
    fn test_full_cycle_stays_in_bounds() {
        // Прогон полного цикла: sprint до нуля → recovery до Normal.
        // На каждом тике 0 ≤ stamina ≤ max.
        let mut stamina = Stamina::new(100.0);
        let mut status = StaminaStatus::Normal;
        let mut reached_exhausted = false;

        for tick in 0..2000 {
            // Первые 5 секунд спринтуем, дальше отпускаем
            let input = if tick < 300 { sprinting() } else { idle() };
            let (new_status, new_value, _) = stamina_tick(status, &stamina, input, DT);

            assert!(
                (0.0..=stamina.max).contains(&new_value),
                "tick {}: stamina {} out of [0, {}]",
                tick,
                new_value,
                stamina.max
            );

            // Exhausted появляется только из BelowMinimum
            if new_status == StaminaStatus::Exhausted && status != StaminaStatus::Exhausted {
                assert_eq!(status, StaminaStatus::BelowMinimum);
                reached_exhausted = true;
            }

            status = new_status;
            stamina.current = new_value;
        }

        assert!(reached_exhausted);
        assert_eq!(status, StaminaStatus::Normal);
        assert_eq!(stamina.current, stamina.max);
    }
}
