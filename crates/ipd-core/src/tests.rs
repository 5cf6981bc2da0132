//! Unit tests for ipd-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, IdAllocator};

    #[test]
    fn allocator_is_monotonic() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.allocate(), AgentId(0));
        assert_eq!(ids.allocate(), AgentId(1));
        assert_eq!(ids.allocate(), AgentId(2));
        assert_eq!(ids.issued(), 3);
    }

    #[test]
    fn independent_allocators_do_not_share_state() {
        let mut a = IdAllocator::new();
        let mut b = IdAllocator::new();
        a.allocate();
        a.allocate();
        assert_eq!(b.allocate(), AgentId(0));
    }

    #[test]
    fn starting_at_offsets_first_id() {
        let mut ids = IdAllocator::starting_at(10);
        assert_eq!(ids.allocate(), AgentId(10));
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod moves {
    use crate::Move;

    #[test]
    fn values_for_tendency() {
        assert_eq!(Move::Cooperate.value(), 0.0);
        assert_eq!(Move::Defect.value(), 1.0);
    }

    #[test]
    fn display() {
        assert_eq!(Move::Cooperate.to_string(), "cooperate");
        assert_eq!(Move::Defect.to_string(), "defect");
    }
}

#[cfg(test)]
mod field {
    use crate::{Field, Position};

    const F: Field = Field { width: 0.57, height: 0.57 };

    #[test]
    fn inside_is_untouched() {
        let p = Position::new(0.3, 0.1);
        assert_eq!(F.wrap(p), p);
    }

    #[test]
    fn past_upper_edge_reenters_low() {
        let p = F.wrap(Position::new(0.58, 0.57));
        assert!((p.x - 0.01).abs() < 1e-12, "got {}", p.x);
        assert_eq!(p.y, 0.0);
        assert!(F.contains(p));
    }

    #[test]
    fn negative_reenters_high() {
        let p = F.wrap(Position::new(-0.02, 0.2));
        assert!((p.x - 0.55).abs() < 1e-12, "got {}", p.x);
        assert!(F.contains(p));
    }

    #[test]
    fn offsets_beyond_one_width_are_reduced() {
        let p = F.wrap(Position::new(0.57 * 3.0 + 0.1, -0.57 * 2.0 - 0.1));
        assert!(F.contains(p));
        assert!((p.x - 0.1).abs() < 1e-9, "got {}", p.x);
        assert!((p.y - 0.47).abs() < 1e-9, "got {}", p.y);
    }

    #[test]
    fn tiny_negative_never_lands_on_limit() {
        let p = F.wrap(Position::new(-1e-300, -f64::EPSILON * 1e-3));
        assert!(F.contains(p), "got {p}");
    }

    #[test]
    fn huge_offsets_still_land_in_range() {
        for v in [1e17, -1e17, 1e300, -1e300, f64::MAX] {
            let p = F.wrap(Position::new(v, 0.3 + v));
            assert!(F.contains(p), "{v} wrapped to {p}");
        }
    }

    #[test]
    fn range_is_strict_per_axis() {
        let a = Position::new(0.10, 0.10);
        assert!(a.within_range(Position::new(0.11, 0.11), 0.02));
        assert!(!a.within_range(Position::new(0.13, 0.10), 0.02));
        assert!(!a.within_range(Position::new(0.10, 0.13), 0.02));
    }
}

#[cfg(test)]
mod config {
    use crate::{IpdError, Pairing, SimConfig, Step};

    #[test]
    fn defaults_match_reference_model() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.field_width, 0.57);
        assert_eq!(cfg.field_height, 0.57);
        assert_eq!(cfg.interact_range, 0.02);
        assert_eq!(cfg.reproduce_score, 100.0);
        assert_eq!(cfg.max_agents, 600);
        assert_eq!(cfg.base_score, 50.0);
        assert_eq!(cfg.pairing, Pairing::Ordered);
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.end_step(), Step(100));
    }

    #[test]
    fn rejects_non_positive_field() {
        let cfg = SimConfig { field_width: 0.0, ..SimConfig::default() };
        assert!(matches!(
            cfg.validate(),
            Err(IpdError::OutOfRange { what: "field_width", .. })
        ));
        let cfg = SimConfig { field_height: f64::NAN, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_zero_capacity() {
        let cfg = SimConfig { max_agents: 0, ..SimConfig::default() };
        assert!(matches!(cfg.validate(), Err(IpdError::Config(_))));
    }

    #[test]
    fn rejects_negative_upkeep() {
        let cfg = SimConfig { upkeep: -1.0, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }
}

#[cfg(test)]
mod step {
    use crate::Step;

    #[test]
    fn snapshot_schedule() {
        assert!(Step(0).is_snapshot(5));
        assert!(!Step(3).is_snapshot(5));
        assert!(Step(10).is_snapshot(5));
        assert!(!Step(0).is_snapshot(0));
    }

    #[test]
    fn arithmetic() {
        assert_eq!(Step(4).next(), Step(5));
        assert_eq!(Step(4) + 3, Step(7));
        assert_eq!(Step(2).to_string(), "S2");
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
            assert_eq!(r1.unit(), r2.unit());
        }
    }

    #[test]
    fn unit_in_half_open_interval() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.unit();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn offset_in_bounds() {
        let mut rng = SimRng::new(7);
        for _ in 0..1000 {
            let v = rng.offset(0.02);
            assert!((-0.02..=0.02).contains(&v));
        }
        assert_eq!(rng.offset(0.0), 0.0);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = SimRng::new(3);
        let mut v: Vec<u32> = (0..50).collect();
        rng.shuffle(&mut v);
        v.sort_unstable();
        assert_eq!(v, (0..50).collect::<Vec<_>>());
    }
}
