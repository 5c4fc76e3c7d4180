//! Unit tests for epi-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(AgentId::default(), AgentId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod vec2 {
    use crate::Vec2;

    #[test]
    fn zero_distance() {
        let p = Vec2::new(12.5, -3.0);
        assert_eq!(p.distance(p), 0.0);
    }

    #[test]
    fn pythagorean_distance() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
        assert!((b.distance(a) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn box_check() {
        let center = Vec2::new(100.0, 100.0);
        assert!(Vec2::new(110.0, 95.0).within_box(center, 20.0));
        assert!(!Vec2::new(130.1, 100.0).within_box(center, 30.0));
    }

    #[test]
    fn add_and_scale() {
        let mut p = Vec2::new(1.0, 2.0);
        p += Vec2::new(0.5, -1.0);
        assert_eq!(p, Vec2::new(1.5, 1.0));
        assert_eq!(Vec2::new(1.0, -2.0) * 3.0, Vec2::new(3.0, -6.0));
    }
}

#[cfg(test)]
mod time {
    use crate::SimTime;

    #[test]
    fn arithmetic() {
        let t = SimTime(10);
        assert_eq!(t + 5, SimTime(15));
        assert_eq!(t.offset(3), SimTime(13));
        assert_eq!(SimTime(15) - SimTime(10), 5u64);
        assert_eq!(SimTime(15).since(SimTime(10)), 5u64);
    }

    #[test]
    fn from_secs() {
        assert_eq!(SimTime::from_secs_f64(1.5), SimTime(1500));
        assert_eq!(SimTime::from_secs_f64(-2.0), SimTime::ZERO);
    }

    #[test]
    fn ordering() {
        assert!(SimTime(13_999) < SimTime(14_000));
    }

    #[test]
    fn display() {
        assert_eq!(SimTime(14_000).to_string(), "14000ms");
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: f32 = r1.random();
            let b: f32 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_seeds_differ() {
        let mut r0 = SimRng::new(1);
        let mut r1 = SimRng::new(2);
        let a: u64 = r0.random();
        let b: u64 = r1.random();
        assert_ne!(a, b);
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.gen_range(0.0f32..1.0);
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }
}

#[cfg(test)]
mod params {
    use crate::{Bounds, SimParams, Vec2};

    #[test]
    fn defaults_match_canonical_constants() {
        let p = SimParams::default();
        assert_eq!(p.population, 100);
        assert_eq!(p.agent_radius, 5.0);
        assert_eq!(p.safe_distance, 130.0);
        assert_eq!(p.infection_distance, 20.0);
        assert_eq!(p.seed_infection_rate, 0.25);
        assert_eq!(p.stay_home_rate, 0.1);
        assert_eq!(p.recovery_delay_ms, 14_000);
    }

    #[test]
    fn default_params_validate() {
        assert!(SimParams::default().validate().is_ok());
    }

    #[test]
    fn zero_population_rejected() {
        let p = SimParams { population: 0, ..Default::default() };
        assert!(p.validate().is_err());
    }

    #[test]
    fn degenerate_bounds_rejected() {
        let p = SimParams {
            bounds: Bounds::new(0.0, 600.0),
            ..Default::default()
        };
        assert!(p.validate().is_err());
    }

    #[test]
    fn bounds_contains() {
        let b = Bounds::new(800.0, 600.0);
        assert!(b.contains(Vec2::new(0.0, 0.0)));
        assert!(b.contains(Vec2::new(800.0, 600.0)));
        assert!(!b.contains(Vec2::new(800.1, 10.0)));
        assert!(!b.contains(Vec2::new(10.0, -0.1)));
    }
}

#[cfg(test)]
mod color {
    use crate::Rgb;

    #[test]
    fn status_palette() {
        assert_eq!(Rgb::WHITE, Rgb::new(255, 255, 255));
        assert_eq!(Rgb::GREEN, Rgb::new(0, 128, 0));
        assert_eq!(Rgb::HOT_PINK, Rgb::new(255, 105, 180));
    }

    #[test]
    fn display_hex() {
        assert_eq!(Rgb::HOT_PINK.to_string(), "#ff69b4");
    }
}
