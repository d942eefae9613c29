//! Tests for gs-sim.

use gs_core::{GossipParams, NodeId, SamplingPolicy, SimRng};

use crate::{simulate, NoopObserver, Population, RoundObserver, SimError, Simulator};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Records the infected count after every round.
#[derive(Default)]
struct CurveObserver {
    rounds:    Vec<u64>,
    infected:  Vec<usize>,
    converged: Option<u64>,
}

impl RoundObserver for CurveObserver {
    fn on_round_end(&mut self, round: u64, infected: usize) {
        self.rounds.push(round);
        self.infected.push(infected);
    }

    fn on_converged(&mut self, rounds: u64) {
        self.converged = Some(rounds);
    }
}

fn mean_rounds(params: &GossipParams, trials: usize, rng: &mut SimRng) -> f64 {
    let total: u64 = (0..trials).map(|_| simulate(params, rng).unwrap()).sum();
    total as f64 / trials as f64
}

// ── Population ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod population_tests {
    use super::*;

    #[test]
    fn only_origin_starts_infected() {
        let pop = Population::new(5);
        assert_eq!(pop.node_count(), 5);
        assert_eq!(pop.infected_count(), 1);
        assert!(pop.is_infected(NodeId(0)));
        assert!((1..5).all(|i| !pop.is_infected(NodeId(i))));
        assert!(!pop.all_infected());
    }

    #[test]
    fn single_node_starts_fully_infected() {
        assert!(Population::new(1).all_infected());
    }

    #[test]
    fn infect_is_idempotent() {
        let mut pop = Population::new(3);
        assert!(pop.infect(NodeId(2)));
        assert!(!pop.infect(NodeId(2)));
        assert_eq!(pop.infected_count(), 2);
    }

    #[test]
    fn infected_node_pushes_to_contacts() {
        let mut pop = Population::new(4);
        pop.exchange(NodeId(0), &[NodeId(2), NodeId(3)]);
        assert_eq!(pop.flags(), &[true, false, true, true]);
    }

    #[test]
    fn uninfected_node_pulls_from_infected_contact() {
        let mut pop = Population::new(4);
        pop.exchange(NodeId(1), &[NodeId(3), NodeId(0)]);
        assert!(pop.is_infected(NodeId(1)));
        // Pull does not spread to the other, uninfected contact.
        assert!(!pop.is_infected(NodeId(3)));
    }

    #[test]
    fn exchange_between_uninfected_is_noop() {
        let mut pop = Population::new(4);
        pop.exchange(NodeId(1), &[NodeId(2), NodeId(1)]);
        assert_eq!(pop.infected_count(), 1);
    }

    #[test]
    fn self_contact_is_noop() {
        let mut pop = Population::new(2);
        pop.exchange(NodeId(1), &[NodeId(1)]);
        assert!(!pop.is_infected(NodeId(1)));
        pop.exchange(NodeId(0), &[NodeId(0)]);
        assert_eq!(pop.infected_count(), 1);
    }

    #[test]
    fn in_place_updates_chain_within_a_scan() {
        // Node 1 pulls from 0, then node 2 pulls from the freshly infected 1.
        let mut pop = Population::new(3);
        pop.exchange(NodeId(1), &[NodeId(0)]);
        pop.exchange(NodeId(2), &[NodeId(1)]);
        assert!(pop.all_infected());
    }
}

// ── Simulator ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod simulator_tests {
    use super::*;

    #[test]
    fn single_node_returns_two() {
        let mut rng = SimRng::new(1);
        assert_eq!(simulate(&GossipParams::new(1, 1, 0), &mut rng).unwrap(), 2);
    }

    #[test]
    fn single_node_returns_two_for_any_fanout() {
        let mut rng = SimRng::new(2);
        for peers in 1..5 {
            assert_eq!(simulate(&GossipParams::new(1, peers, 0), &mut rng).unwrap(), 2);
            assert_eq!(simulate(&GossipParams::new(1, peers, 1), &mut rng).unwrap(), 2);
        }
    }

    #[test]
    fn single_node_with_larger_seed_set_returns_two() {
        let mut rng = SimRng::new(13);
        for peers in 1..4 {
            assert_eq!(simulate(&GossipParams::new(1, peers, 3), &mut rng).unwrap(), 2);
        }
    }

    #[test]
    fn seed_contact_stays_inside_small_population() {
        let mut rng = SimRng::new(14);
        let params = GossipParams::new(2, 1, 3)
            .with_policy(SamplingPolicy::SeedBiased { seeds: 3, bias: 1.0 });
        for _ in 0..200 {
            assert!(simulate(&params, &mut rng).unwrap() >= 2);
        }
    }

    #[test]
    fn two_nodes_converge_quickly() {
        let mut rng = SimRng::new(3);
        for _ in 0..200 {
            let rounds = simulate(&GossipParams::new(2, 1, 0), &mut rng).unwrap();
            assert!((2..=40).contains(&rounds), "got {rounds}");
        }
    }

    #[test]
    fn run_leaves_everyone_infected() {
        let mut rng = SimRng::new(4);
        for (n, peers, seeds) in [(2, 1, 0), (17, 1, 3), (250, 2, 0), (500, 1, 3)] {
            let mut sim = Simulator::new(GossipParams::new(n, peers, seeds)).unwrap();
            let rounds = sim.run(&mut rng, &mut NoopObserver).unwrap();
            assert!(rounds >= 2);
            assert!(sim.is_converged());
            assert!(sim.population.flags().iter().all(|&f| f));
            assert_eq!(sim.round, rounds);
        }
    }

    #[test]
    fn infected_count_is_monotone() {
        let mut rng = SimRng::new(5);
        let mut obs = CurveObserver::default();
        let mut sim = Simulator::new(GossipParams::new(1_000, 1, 3)).unwrap();
        let rounds = sim.run(&mut rng, &mut obs).unwrap();

        assert!(obs.infected.windows(2).all(|w| w[0] <= w[1]), "{:?}", obs.infected);
        assert_eq!(obs.infected.last(), Some(&1_000));
        assert_eq!(obs.converged, Some(rounds));
        // One callback per round; counter starts at 1 so the first report is 2.
        assert_eq!(obs.rounds.first(), Some(&2));
        assert_eq!(obs.rounds.len() as u64, rounds - 1);
    }

    #[test]
    fn rerun_after_convergence_is_stable() {
        let mut rng = SimRng::new(6);
        let mut sim = Simulator::new(GossipParams::new(50, 1, 0)).unwrap();
        let first = sim.run(&mut rng, &mut NoopObserver).unwrap();
        let second = sim.run(&mut rng, &mut NoopObserver).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn same_seed_same_rounds() {
        let params = GossipParams::new(300, 1, 3);
        let a: Vec<u64> = {
            let mut rng = SimRng::new(77);
            (0..10).map(|_| simulate(&params, &mut rng).unwrap()).collect()
        };
        let b: Vec<u64> = {
            let mut rng = SimRng::new(77);
            (0..10).map(|_| simulate(&params, &mut rng).unwrap()).collect()
        };
        assert_eq!(a, b);
    }

    #[test]
    fn round_cap_reports_non_convergence() {
        let mut rng = SimRng::new(8);
        // One pass cannot infect 10k nodes from a single origin with fan-out 1.
        let params = GossipParams::new(10_000, 1, 0).with_max_rounds(2);
        match simulate(&params, &mut rng) {
            Err(SimError::DidNotConverge { n, rounds, infected }) => {
                assert_eq!(n, 10_000);
                assert_eq!(rounds, 2);
                assert!(infected < 10_000);
            }
            other => panic!("expected DidNotConverge, got {other:?}"),
        }
    }

    #[test]
    fn generous_cap_does_not_interfere() {
        let mut rng = SimRng::new(9);
        let params = GossipParams::new(100, 1, 0).with_max_rounds(10_000);
        assert!(simulate(&params, &mut rng).is_ok());
    }

    #[test]
    fn invalid_params_rejected() {
        assert!(matches!(Simulator::new(GossipParams::new(0, 1, 0)), Err(SimError::Config(_))));
        assert!(matches!(Simulator::new(GossipParams::new(5, 0, 0)), Err(SimError::Config(_))));
        let empty_seeds = GossipParams::new(5, 1, 0)
            .with_policy(SamplingPolicy::SeedBiased { seeds: 0, bias: 0.3 });
        assert!(Simulator::new(empty_seeds).is_err());
    }

    #[test]
    fn step_round_scans_ascending_in_place() {
        for params in [
            GossipParams::new(200, 1, 0),
            GossipParams::new(200, 2, 3),
            GossipParams::new(2, 1, 3),
        ] {
            let mut sim = Simulator::new(params.clone()).unwrap();
            let mut rng = SimRng::new(15);
            let mut expected = Population::new(params.n);
            let mut replay = SimRng::new(15);
            let n = params.n as u32;

            for pass in 0..4 {
                sim.step_round(&mut rng);
                for i in 0..n {
                    let mut contacts: Vec<NodeId> =
                        (0..params.peers).map(|_| NodeId(replay.gen_range(0..n))).collect();
                    if let SamplingPolicy::SeedBiased { seeds, bias } = params.policy {
                        if replay.gen_bool(bias) {
                            contacts.push(NodeId(replay.gen_range(0..(seeds as u32).min(n))));
                        }
                    }
                    expected.exchange(NodeId(i), &contacts);
                }
                assert_eq!(sim.population.flags(), expected.flags(), "{params:?} pass {pass}");
                assert_eq!(sim.population.infected_count(), expected.infected_count());
                assert_eq!(sim.round, 2 + pass);
            }
        }
    }

    #[test]
    fn full_bias_seed_policy_converges() {
        let mut rng = SimRng::new(10);
        let params = GossipParams::new(200, 1, 0)
            .with_policy(SamplingPolicy::SeedBiased { seeds: 1, bias: 1.0 });
        assert!(simulate(&params, &mut rng).unwrap() >= 2);
    }
}

// ── Statistical behaviour ─────────────────────────────────────────────────────

#[cfg(test)]
mod statistics_tests {
    use super::*;

    #[test]
    fn seed_bias_holds_pace() {
        let mut rng = SimRng::new(2024);
        let plain = mean_rounds(&GossipParams::new(1_000, 1, 0), 60, &mut rng);
        let seeded = mean_rounds(&GossipParams::new(1_000, 1, 3), 60, &mut rng);
        // Seeded must not be meaningfully slower than plain sampling.
        assert!(seeded <= plain * 1.1, "seeded {seeded:.2} vs plain {plain:.2}");
    }

    #[test]
    fn larger_fanout_is_faster() {
        let mut rng = SimRng::new(11);
        let one = mean_rounds(&GossipParams::new(1_000, 1, 0), 40, &mut rng);
        let four = mean_rounds(&GossipParams::new(1_000, 4, 0), 40, &mut rng);
        assert!(four < one, "fan-out 4 {four:.2} vs fan-out 1 {one:.2}");
    }

    #[test]
    fn rounds_grow_with_population() {
        let mut rng = SimRng::new(12);
        let small = mean_rounds(&GossipParams::new(50, 1, 0), 60, &mut rng);
        let large = mean_rounds(&GossipParams::new(5_000, 1, 0), 20, &mut rng);
        assert!(large > small, "n=5000 {large:.2} vs n=50 {small:.2}");
    }
}
