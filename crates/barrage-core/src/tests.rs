#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::constants::*;
    use crate::entities::{Missile, SmokeParticle, SparkParticle};
    use crate::events::AudioEvent;
    use crate::math::{angle_of, with_length, wrap_angle_deg};
    use crate::state::FrameSnapshot;
    use crate::types::{SimTime, Vec2};

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::SetTarget { x: 320.0, y: 240.0 },
            PlayerCommand::FireMissile,
            PlayerCommand::FireSalvo { count: 32 },
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            // Compare JSON representations since PlayerCommand doesn't derive PartialEq
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    /// Verify AudioEvent round-trips through serde.
    #[test]
    fn test_audio_event_serde() {
        let event = AudioEvent::Detonation {
            position: Vec2::new(400.0, 300.0),
        };
        let json = serde_json::to_string(&event).unwrap();
        let _back: AudioEvent = serde_json::from_str(&json).unwrap();
    }

    /// Verify FrameSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = FrameSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: FrameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert!(back.missiles.is_empty());
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    /// Verify angle helper against the cardinal directions.
    #[test]
    fn test_angle_of() {
        assert!((angle_of(Vec2::new(1.0, 0.0)) - 0.0).abs() < 1e-6);
        let up = angle_of(Vec2::new(0.0, 1.0));
        assert!((up - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        let left = angle_of(Vec2::new(-1.0, 0.0));
        assert!((left - std::f32::consts::PI).abs() < 1e-6);
    }

    #[test]
    fn test_with_length() {
        let v = with_length(Vec2::new(3.0, 4.0), 10.0);
        assert!((v.length() - 10.0).abs() < 1e-4);
        // Direction preserved
        assert!((v.x - 6.0).abs() < 1e-4);
        assert!((v.y - 8.0).abs() < 1e-4);
    }

    #[test]
    fn test_wrap_angle_deg() {
        assert_eq!(wrap_angle_deg(0.0), 0.0);
        assert_eq!(wrap_angle_deg(359.0), 359.0);
        assert_eq!(wrap_angle_deg(-1.0), 359.0);
        assert_eq!(wrap_angle_deg(-180.0), 180.0);
        assert_eq!(wrap_angle_deg(-359.5), 0.5);
    }

    /// `Vec2::from_angle` is the `{cos, sin}` constructor the steering
    /// and burst code relies on.
    #[test]
    fn test_from_angle_convention() {
        let v = Vec2::from_angle(std::f32::consts::FRAC_PI_2);
        assert!(v.x.abs() < 1e-6);
        assert!((v.y - 1.0).abs() < 1e-6);
    }

    /// Verify entity defaults match the documented lifetimes.
    #[test]
    fn test_particle_defaults() {
        let smoke = SmokeParticle::default();
        assert_eq!(smoke.life, 0.7);
        assert_eq!(smoke.time, 0.0);

        let spark = SparkParticle::default();
        assert_eq!(spark.life, 1.2);
        assert_eq!(spark.time, 0.0);
    }

    #[test]
    fn test_missile_default_stage_fields() {
        let m = Missile::default();
        assert_eq!(m.stage, 0.0);
        assert_eq!(m.stage_dir, -1.0);
        assert_eq!(m.stage_max, 0.5);
        assert_eq!(m.stage_min, -0.02);
    }

    /// Verify SimTime advancement at the fixed step rate.
    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        assert_eq!(time.tick, 0);
        assert_eq!(time.elapsed_secs, 0.0);

        for _ in 0..100 {
            time.advance();
        }
        assert_eq!(time.tick, 100);
        // 100 steps at 100Hz = 1 second
        assert!((time.elapsed_secs - 1.0).abs() < 1e-10);
    }

    /// The burst offset bound truncates like the source arithmetic: 360/16 = 22.
    #[test]
    fn test_spark_offset_bound() {
        assert_eq!(SPARK_OFFSET_MAX_DEG, 22);
    }

    #[test]
    fn test_dt_matches_tick_rate() {
        assert!((DT - 0.01).abs() < 1e-9);
    }
}
