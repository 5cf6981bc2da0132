//! Unit tests for ipd-game.

use ipd_agent::Agent;
use ipd_core::{AgentId, Move, Position, SimRng};
use ipd_strategy::{KindTable, ReactiveParams, Strategy, StrategyKind};

use crate::{interact, PayoffMatrix};

fn agent(id: u64, strategy: Strategy) -> Agent {
    Agent::new(AgentId(id), strategy, 0.01, Position::new(0.1, 0.1), 50.0)
}

#[cfg(test)]
mod payoff {
    use super::*;

    #[test]
    fn standard_values() {
        let m = PayoffMatrix::STANDARD;
        assert_eq!(m.lookup(Move::Cooperate, Move::Cooperate), (3.0, 3.0));
        assert_eq!(m.lookup(Move::Cooperate, Move::Defect), (-5.0, 5.0));
        assert_eq!(m.lookup(Move::Defect, Move::Cooperate), (5.0, -5.0));
        assert_eq!(m.lookup(Move::Defect, Move::Defect), (0.0, 0.0));
    }

    #[test]
    fn asymmetric_table_is_detected() {
        let m = PayoffMatrix::new([
            [(3.0, 3.0), (-5.0, 5.0)],
            [(4.0, -5.0), (0.0, 0.0)],
        ]);
        assert!(!m.is_symmetric());
        assert_eq!(m.lookup(Move::Defect, Move::Cooperate), (4.0, -5.0));
    }

    #[test]
    fn swapping_roles_swaps_payoffs() {
        let m = PayoffMatrix::default();
        assert!(m.is_symmetric());
        for a in Move::ALL {
            for b in Move::ALL {
                let (x, y) = m.lookup(a, b);
                assert_eq!(m.lookup(b, a), (y, x));
            }
        }
    }
}

#[cfg(test)]
mod encounters {
    use super::*;

    #[test]
    fn mutual_cooperation_adds_three_each() {
        let mut rng = SimRng::new(0);
        let mut a = agent(0, Strategy::AlwaysCooperate);
        let mut b = agent(1, Strategy::TitForTat);
        let e = interact(&mut a, &mut b, &PayoffMatrix::STANDARD, &mut rng);
        assert_eq!((e.first_move, e.second_move), (Move::Cooperate, Move::Cooperate));
        assert_eq!(a.score, 53.0);
        assert_eq!(b.score, 53.0);
        // Both tendencies move toward cooperation.
        assert!(a.tendency().estimate() < 0.5);
        assert!(b.tendency().estimate() < 0.5);
    }

    #[test]
    fn custom_table_drives_scores() {
        let harsh = PayoffMatrix::new([
            [(1.0, 1.0), (-10.0, 8.0)],
            [(8.0, -10.0), (-1.0, -1.0)],
        ]);
        let mut rng = SimRng::new(0);
        let mut coop = agent(0, Strategy::AlwaysCooperate);
        let mut raider = agent(1, Strategy::AlwaysDefect);
        let e = interact(&mut coop, &mut raider, &harsh, &mut rng);
        assert_eq!((e.first_payoff, e.second_payoff), (-10.0, 8.0));
        assert_eq!(coop.score, 40.0);
        assert_eq!(raider.score, 58.0);
    }

    #[test]
    fn mutual_defection_changes_nothing_but_history() {
        let mut rng = SimRng::new(0);
        let mut a = agent(0, Strategy::AlwaysDefect);
        let mut b = agent(1, Strategy::AlwaysDefect);
        let e = interact(&mut a, &mut b, &PayoffMatrix::STANDARD, &mut rng);
        assert!(e.mutual_defection());
        assert_eq!(a.score, 50.0);
        assert_eq!(b.score, 50.0);
        assert_eq!(a.tendency().estimate(), 0.5);
        assert_eq!(a.tendency().weight(), 1);
        assert_eq!(b.tendency().weight(), 1);
        assert_eq!(a.history().encounters_with(AgentId(1)), 1);
        assert_eq!(b.history().encounters_with(AgentId(0)), 1);
    }

    #[test]
    fn exploitation_moves_five_points() {
        let mut rng = SimRng::new(0);
        let mut coop = agent(0, Strategy::AlwaysCooperate);
        let mut raider = agent(1, Strategy::AlwaysDefect);
        interact(&mut coop, &mut raider, &PayoffMatrix::STANDARD, &mut rng);
        assert_eq!(coop.score, 45.0);
        assert_eq!(raider.score, 55.0);
        assert_eq!(coop.tendency().estimate(), 0.25);
        assert_eq!(raider.tendency().estimate(), 0.75);
    }

    #[test]
    fn scoring_is_independent_of_call_order() {
        let mut rng = SimRng::new(0);
        let mut coop = agent(0, Strategy::AlwaysCooperate);
        let mut raider = agent(1, Strategy::AlwaysDefect);
        interact(&mut raider, &mut coop, &PayoffMatrix::STANDARD, &mut rng);
        assert_eq!(coop.score, 45.0);
        assert_eq!(raider.score, 55.0);
    }

    #[test]
    fn histories_are_recorded_from_each_side() {
        let mut rng = SimRng::new(0);
        let mut coop = agent(0, Strategy::AlwaysCooperate);
        let mut raider = agent(1, Strategy::AlwaysDefect);
        interact(&mut coop, &mut raider, &PayoffMatrix::STANDARD, &mut rng);

        let h = coop.history();
        assert_eq!(h.opponent_moves(AgentId(1)), Some(&[Move::Defect][..]));
        assert_eq!(h.own_moves(AgentId(1)), Some(&[Move::Cooperate][..]));
        let h = raider.history();
        assert_eq!(h.opponent_moves(AgentId(0)), Some(&[Move::Cooperate][..]));
        assert_eq!(h.own_moves(AgentId(0)), Some(&[Move::Defect][..]));
    }

    #[test]
    fn tit_for_tat_retaliates_on_second_meeting() {
        let mut rng = SimRng::new(0);
        let mut tft = agent(0, Strategy::TitForTat);
        let mut raider = agent(1, Strategy::AlwaysDefect);
        let first = interact(&mut tft, &mut raider, &PayoffMatrix::STANDARD, &mut rng);
        assert_eq!(first.first_move, Move::Cooperate);
        let second = interact(&mut tft, &mut raider, &PayoffMatrix::STANDARD, &mut rng);
        assert_eq!(second.first_move, Move::Defect);
        assert!(second.mutual_defection());
        // -5 then 0
        assert_eq!(tft.score, 45.0);
    }

    #[test]
    fn reactive_default_cooperates_first() {
        let mut rng = SimRng::new(0);
        let mut r = agent(0, Strategy::ProbabilisticReactive(ReactiveParams::default()));
        let mut c = agent(1, Strategy::AlwaysCooperate);
        let e = interact(&mut r, &mut c, &PayoffMatrix::STANDARD, &mut rng);
        assert_eq!(e.first_move, Move::Cooperate);
    }

    #[test]
    fn credit_accumulates_by_kind() {
        let mut rng = SimRng::new(0);
        let mut coop = agent(0, Strategy::AlwaysCooperate);
        let mut raider = agent(1, Strategy::AlwaysDefect);
        let mut totals = KindTable::default();
        interact(&mut coop, &mut raider, &PayoffMatrix::STANDARD, &mut rng).credit(&mut totals);
        interact(&mut raider, &mut coop, &PayoffMatrix::STANDARD, &mut rng).credit(&mut totals);
        assert_eq!(totals[StrategyKind::AlwaysCooperate], -10.0);
        assert_eq!(totals[StrategyKind::AlwaysDefect], 10.0);
        assert_eq!(totals[StrategyKind::TitForTat], 0.0);
    }
}
