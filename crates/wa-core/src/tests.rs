//! Unit tests for wa-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, NodeId, WaypointId};

    #[test]
    fn index_roundtrip() {
        let id = NodeId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(NodeId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(NodeId::INVALID.0, u32::MAX);
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(WaypointId::default(), WaypointId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(7).to_string(), "NodeId(7)");
        assert_eq!(WaypointId(3).to_string(), "WaypointId(3)");
    }
}

#[cfg(test)]
mod transform {
    use crate::{Transform, Vec3};

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn identity_is_noop() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(Transform::IDENTITY.transform_point(p), p);
    }

    #[test]
    fn yaw_rotates_x_onto_negative_z() {
        let t = Transform::from_translation(Vec3::new(10.0, 0.0, 0.0)).with_yaw_deg(90.0);
        let p = t.transform_point(Vec3::X);
        assert!(approx(p, Vec3::new(10.0, 0.0, -1.0)), "got {p}");
    }

    #[test]
    fn non_uniform_scale_applies_before_translation() {
        let t = Transform::from_translation(Vec3::new(0.0, 5.0, 0.0))
            .with_scale(Vec3::new(2.0, 1.0, 0.5));
        let p = t.transform_point(Vec3::new(1.0, 1.0, 1.0));
        assert!(approx(p, Vec3::new(2.0, 6.0, 0.5)), "got {p}");
    }

    #[test]
    fn inverse_undoes_forward() {
        let t = Transform::from_translation(Vec3::new(-3.0, 1.0, 4.0))
            .with_yaw_deg(37.0)
            .with_scale(Vec3::new(1.5, 2.0, 0.75));
        let local = Vec3::new(0.3, -0.2, 0.9);
        let back = t.inverse_transform_point(t.transform_point(local));
        assert!(approx(back, local), "got {back}");
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, WanderRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = WanderRng::new(12345);
        let mut r2 = WanderRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.unit(), r2.unit());
        }
    }

    #[test]
    fn clone_replays_stream() {
        let mut a = WanderRng::new(9);
        a.unit();
        let mut b = a.clone();
        assert_eq!(a.unit(), b.unit());
    }

    #[test]
    fn different_agents_differ() {
        let mut r0 = WanderRng::for_agent(1, AgentId(0));
        let mut r1 = WanderRng::for_agent(1, AgentId(1));
        let a: Vec<f32> = (0..4).map(|_| r0.unit()).collect();
        let b: Vec<f32> = (0..4).map(|_| r1.unit()).collect();
        assert_ne!(a, b, "seeds for adjacent agents should diverge");
    }

    #[test]
    fn unit_in_half_open_range() {
        let mut rng = WanderRng::new(0);
        for _ in 0..10_000 {
            let v = rng.unit();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn symmetric_bounds_and_zero_half() {
        let mut rng = WanderRng::new(3);
        for _ in 0..1000 {
            let v = rng.symmetric(2.5);
            assert!((-2.5..=2.5).contains(&v));
        }
        assert_eq!(rng.symmetric(0.0), 0.0);
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = WanderRng::new(0);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[5u8]), Some(&5));
    }
}

#[cfg(test)]
mod config {
    use crate::WanderConfig;

    #[test]
    fn default_validates() {
        assert!(WanderConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_tick_rejected() {
        let cfg = WanderConfig { tick_secs: 0.0, ..WanderConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn duration() {
        let cfg = WanderConfig { tick_secs: 0.5, total_ticks: 10, ..WanderConfig::default() };
        assert_eq!(cfg.duration_secs(), 5.0);
    }
}
