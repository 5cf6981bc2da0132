//! Unit tests for ipd-agent.

use ipd_core::{AgentId, Field, IdAllocator, Move, Position, SimRng};
use ipd_strategy::{Strategy, StrategyKind};

use crate::{Agent, History, Leaning, Population, Tendency};

fn agent(id: u64, strategy: Strategy) -> Agent {
    Agent::new(AgentId(id), strategy, 0.01, Position::new(0.1, 0.1), 50.0)
}

#[cfg(test)]
mod history {
    use super::*;

    #[test]
    fn unknown_opponent_has_no_record() {
        let h = History::new();
        assert!(h.opponent_moves(AgentId(3)).is_none());
        assert!(h.own_moves(AgentId(3)).is_none());
        assert!(!h.has_met(AgentId(3)));
        assert!(h.is_empty());
    }

    #[test]
    fn records_are_ordered_and_paired() {
        let mut h = History::new();
        h.record(AgentId(1), Move::Cooperate, Move::Defect);
        h.record(AgentId(1), Move::Defect, Move::Cooperate);
        h.record(AgentId(2), Move::Defect, Move::Defect);

        assert_eq!(h.opponent_moves(AgentId(1)), Some(&[Move::Defect, Move::Cooperate][..]));
        assert_eq!(h.own_moves(AgentId(1)), Some(&[Move::Cooperate, Move::Defect][..]));
        assert_eq!(h.last_opponent_move(AgentId(1)), Some(Move::Cooperate));
        assert_eq!(h.encounters_with(AgentId(1)), 2);
        assert_eq!(h.opponent_count(), 2);
        assert_eq!(h.total_encounters(), 3);
    }

    #[test]
    fn mirror_sequences_have_equal_length() {
        let mut h = History::new();
        for i in 0..10u64 {
            h.record(AgentId(i % 3), Move::Cooperate, Move::Defect);
        }
        for id in 0..3 {
            let theirs = h.opponent_moves(AgentId(id)).unwrap();
            let mine = h.own_moves(AgentId(id)).unwrap();
            assert_eq!(theirs.len(), mine.len());
        }
    }
}

#[cfg(test)]
mod tendency {
    use super::*;

    #[test]
    fn starts_neutral_and_cooperative() {
        let t = Tendency::new();
        assert_eq!(t.estimate(), 0.5);
        assert_eq!(t.weight(), 1);
        assert_eq!(t.leaning(), Leaning::Cooperative);
    }

    #[test]
    fn running_mean_update() {
        let mut t = Tendency::new();
        assert!(t.observe(Move::Defect, Move::Cooperate));
        // (0.5 * 1 + 1) / 2
        assert_eq!(t.estimate(), 0.75);
        assert_eq!(t.weight(), 2);
        assert_eq!(t.leaning(), Leaning::Aggressive);

        assert!(t.observe(Move::Cooperate, Move::Defect));
        // (0.75 * 2 + 0) / 3
        assert!((t.estimate() - 0.5).abs() < 1e-12);
        assert_eq!(t.weight(), 3);
    }

    #[test]
    fn mutual_defection_is_ignored() {
        let mut t = Tendency::new();
        assert!(!t.observe(Move::Defect, Move::Defect));
        assert_eq!(t, Tendency::new());
    }

    #[test]
    fn mutual_cooperation_pulls_toward_zero() {
        let mut t = Tendency::new();
        for _ in 0..10 {
            t.observe(Move::Cooperate, Move::Cooperate);
        }
        assert!(t.estimate() < 0.1);
        assert_eq!(t.weight(), 11);
    }
}

#[cfg(test)]
mod agent {
    use super::*;

    #[test]
    fn new_agent_state() {
        let a = agent(4, Strategy::TitForTat);
        assert_eq!(a.id(), AgentId(4));
        assert_eq!(a.kind(), StrategyKind::TitForTat);
        assert_eq!(a.score, 50.0);
        assert!(a.history().is_empty());
        assert_eq!(a.leaning(), Leaning::Cooperative);
    }

    #[test]
    fn tit_for_tat_reacts_to_recorded_defection() {
        let mut rng = SimRng::new(0);
        let mut a = agent(0, Strategy::TitForTat);
        assert_eq!(a.decide_against(AgentId(9), &mut rng), Move::Cooperate);
        a.record(AgentId(9), Move::Cooperate, Move::Defect);
        assert_eq!(a.decide_against(AgentId(9), &mut rng), Move::Defect);
        // Other opponents are unaffected.
        assert_eq!(a.decide_against(AgentId(8), &mut rng), Move::Cooperate);
    }

    #[test]
    fn record_skips_tendency_on_mutual_defection() {
        let mut a = agent(0, Strategy::AlwaysDefect);
        a.record(AgentId(1), Move::Defect, Move::Defect);
        assert_eq!(a.tendency().estimate(), 0.5);
        assert_eq!(a.history().encounters_with(AgentId(1)), 1);
    }

    #[test]
    fn offspring_copies_strategy_and_position_only() {
        let mut parent = agent(0, Strategy::AlwaysCooperate);
        parent.score = 120.0;
        parent.position = Position::new(0.3, 0.4);
        parent.record(AgentId(5), Move::Cooperate, Move::Cooperate);

        let child = parent.offspring(AgentId(7), 50.0);
        assert_eq!(child.id(), AgentId(7));
        assert_eq!(child.strategy(), parent.strategy());
        assert_eq!(child.speed(), parent.speed());
        assert_eq!(child.position, parent.position);
        assert_eq!(child.score, 50.0);
        assert!(child.history().is_empty());
        assert_eq!(child.tendency().weight(), 1);
    }

    #[test]
    fn wander_stays_on_field() {
        let field = Field::new(0.57, 0.57);
        let mut rng = SimRng::new(11);
        let mut a = Agent::new(AgentId(0), Strategy::AlwaysDefect, 0.5, Position::new(0.0, 0.56), 50.0);
        for _ in 0..500 {
            a.wander(field, &mut rng);
            assert!(field.contains(a.position), "escaped to {}", a.position);
        }
    }

    #[test]
    fn zero_speed_does_not_move() {
        let field = Field::new(0.57, 0.57);
        let mut rng = SimRng::new(11);
        let mut a = Agent::new(AgentId(0), Strategy::AlwaysDefect, 0.0, Position::new(0.2, 0.3), 50.0);
        a.wander(field, &mut rng);
        assert_eq!(a.position, Position::new(0.2, 0.3));
    }
}

#[cfg(test)]
mod population {
    use super::*;

    fn populated() -> Population {
        let mut pop = Population::new();
        pop.spawn(Strategy::AlwaysDefect, 0.02, Position::new(0.1, 0.1), 50.0);
        pop.spawn(Strategy::AlwaysCooperate, 0.01, Position::new(0.2, 0.2), 50.0);
        pop.spawn(Strategy::AlwaysCooperate, 0.01, Position::new(0.3, 0.3), 50.0);
        pop
    }

    #[test]
    fn spawn_issues_sequential_ids() {
        let pop = populated();
        let ids: Vec<_> = pop.iter().map(Agent::id).collect();
        assert_eq!(ids, [AgentId(0), AgentId(1), AgentId(2)]);
        assert_eq!(pop.ids_issued(), 3);
    }

    #[test]
    fn custom_allocator_is_respected() {
        let mut pop = Population::with_allocator(IdAllocator::starting_at(100));
        let id = pop.spawn(Strategy::TitForTat, 0.01, Position::new(0.0, 0.0), 50.0);
        assert_eq!(id, AgentId(100));
    }

    #[test]
    fn counts_by_kind() {
        let pop = populated();
        let counts = pop.count_by_kind();
        assert_eq!(counts[StrategyKind::AlwaysDefect], 1);
        assert_eq!(counts[StrategyKind::AlwaysCooperate], 2);
        assert_eq!(counts[StrategyKind::TitForTat], 0);
        assert_eq!(pop.cooperative_count(), 3);
    }

    #[test]
    fn commit_removes_then_appends() {
        let mut pop = populated();
        let parent = pop.get(AgentId(2)).unwrap().clone();
        let child = {
            let (_, ids) = pop.split_mut();
            parent.offspring(ids.allocate(), 50.0)
        };
        pop.commit(&[AgentId(0)], vec![child]);

        let ids: Vec<_> = pop.iter().map(Agent::id).collect();
        assert_eq!(ids, [AgentId(1), AgentId(2), AgentId(3)]);
        assert!(pop.get(AgentId(0)).is_none());
    }

    #[test]
    fn ids_are_never_reused_after_death() {
        let mut pop = populated();
        pop.commit(&[AgentId(2)], vec![]);
        let id = pop.spawn(Strategy::AlwaysDefect, 0.02, Position::new(0.0, 0.0), 50.0);
        assert_eq!(id, AgentId(3));
    }

    #[test]
    fn pair_mut_returns_requested_order() {
        let mut pop = populated();
        let (a, b) = pop.pair_mut(2, 0);
        assert_eq!(a.id(), AgentId(2));
        assert_eq!(b.id(), AgentId(0));
        let (a, b) = pop.pair_mut(0, 1);
        assert_eq!(a.id(), AgentId(0));
        assert_eq!(b.id(), AgentId(1));
    }

    #[test]
    #[should_panic]
    fn pair_mut_rejects_same_index() {
        let mut pop = populated();
        let _ = pop.pair_mut(1, 1);
    }
}
