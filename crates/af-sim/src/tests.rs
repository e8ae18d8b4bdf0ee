//! Unit tests for af-sim.

use std::collections::{HashMap, VecDeque};

use af_core::{AntId, NodeId, Step};
use af_graph::{Colony, ColonyGraph, Route};
use af_parse::parse_str;
use af_plan::RouteGroup;

use crate::{Ant, MoveObserver, Move, NoopObserver, SimBuilder, SimError, SimSummary, Simulator};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// `s` → `a` → `e`, four ants.
const CORRIDOR: &str = "4\n##start\ns 0 0\na 1 0\n##end\ne 2 0\ns-a\na-e\n";

/// Two routes `s-a-e` (3 nodes) and `s-b-c-e` (4 nodes), five ants.
const TWO_ROUTES: &str =
    "5\n##start\ns 0 0\na 1 0\nb 1 1\nc 2 1\n##end\ne 3 0\ns-a\na-e\ns-b\nb-c\nc-e\n";

fn colony(text: &str) -> Colony {
    parse_str(text).unwrap()
}

fn route(graph: &ColonyGraph, names: &[&str]) -> Route {
    Route::new(names.iter().map(|n| graph.node_id(n).unwrap()).collect())
}

fn group(graph: &ColonyGraph, routes: &[&[&str]]) -> RouteGroup {
    RouteGroup::new(routes.iter().map(|r| route(graph, r)).collect())
}

/// Every step rendered as `L<ant>-<node>` entries.
fn trace(sim: &mut Simulator<'_>) -> Vec<String> {
    let graph = sim.graph();
    let mut lines = Vec::new();
    while let Some(record) = sim.step().unwrap() {
        let line: Vec<String> = record
            .moves
            .iter()
            .map(|m| format!("{}-{}", m.ant, graph.name(m.to)))
            .collect();
        lines.push(line.join(" "));
    }
    lines
}

// ── Assignment ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod assign {
    use super::*;
    use crate::assign_ants;

    #[test]
    fn ids_grouped_by_route() {
        let c = colony(TWO_ROUTES);
        let g = group(&c.graph, &[&["s", "b", "c", "e"], &["s", "a", "e"]]);
        let ants = assign_ants(&g, 5);
        let routes: Vec<usize> = ants.iter().map(|a| a.route).collect();
        assert_eq!(routes, [0, 0, 0, 1, 1]);
        let ids: Vec<u32> = ants.iter().map(|a| a.id.0).collect();
        assert_eq!(ids, [1, 2, 3, 4, 5]);
        assert!(ants.iter().all(Ant::is_waiting));
    }

    #[test]
    fn fewer_ants_than_routes() {
        let c = colony(TWO_ROUTES);
        let g = group(&c.graph, &[&["s", "a", "e"], &["s", "b", "c", "e"]]);
        let ants = assign_ants(&g, 1);
        assert_eq!(ants, [Ant::new(AntId(1), 0)]);
    }
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn no_ants() {
        let c = colony(CORRIDOR);
        let g = group(&c.graph, &[&["s", "a", "e"]]);
        assert!(matches!(SimBuilder::new(&c.graph, &g, 0).build(), Err(SimError::NoAnts)));
    }

    #[test]
    fn empty_group() {
        let c = colony(CORRIDOR);
        let g = RouteGroup::new(vec![]);
        assert!(matches!(SimBuilder::new(&c.graph, &g, 4).build(), Err(SimError::EmptyGroup)));
    }

    #[test]
    fn route_must_span_start_to_end() {
        let c = colony(CORRIDOR);
        let g = group(&c.graph, &[&["a", "e"]]);
        assert!(matches!(
            SimBuilder::new(&c.graph, &g, 4).build(),
            Err(SimError::RouteEndpoints { route: 0 })
        ));
    }

    #[test]
    fn route_must_follow_links() {
        let c = colony(CORRIDOR);
        let g = group(&c.graph, &[&["s", "e"]]);
        let err = SimBuilder::new(&c.graph, &g, 4).build().err().unwrap();
        assert!(matches!(&err, SimError::BrokenRoute { route: 0, from, to } if from == "s" && to == "e"));
        assert_eq!(err.to_string(), "route 0 steps from s to e, which are not linked");
    }

    #[test]
    fn unknown_node_in_route_reported_by_index() {
        let c = colony(CORRIDOR);
        let (s, e) = (c.graph.start, c.graph.end);
        let g = RouteGroup::new(vec![Route::new(vec![s, NodeId(99), e])]);
        let err = SimBuilder::new(&c.graph, &g, 1).build().err().unwrap();
        assert_eq!(err.to_string(), "route 0 steps from s to #99, which are not linked");
    }

    #[test]
    fn overlapping_routes_rejected() {
        let c = colony("2\n##start\ns 0 0\na 1 0\nb 1 1\n##end\ne 2 0\ns-a\na-e\ns-b\nb-a\n");
        let g = group(&c.graph, &[&["s", "a", "e"], &["s", "b", "a", "e"]]);
        assert!(matches!(
            SimBuilder::new(&c.graph, &g, 2).build(),
            Err(SimError::OverlappingRoutes { a: 0, b: 1 })
        ));
    }

    #[test]
    fn everyone_starts_waiting() {
        let c = colony(CORRIDOR);
        let g = group(&c.graph, &[&["s", "a", "e"]]);
        let sim = SimBuilder::new(&c.graph, &g, 4).build().unwrap();
        assert_eq!(sim.current_step(), Step::ZERO);
        assert_eq!(sim.ants().len(), 4);
        assert!(!sim.is_done());
    }
}

// ── Step model ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod stepping {
    use super::*;

    #[test]
    fn corridor_moves_one_ant_at_a_time() {
        let c = colony(CORRIDOR);
        let g = group(&c.graph, &[&["s", "a", "e"]]);
        let mut sim = SimBuilder::new(&c.graph, &g, 4).build().unwrap();
        assert_eq!(
            trace(&mut sim),
            ["L1-a", "L1-e", "L2-a", "L2-e", "L3-a", "L3-e", "L4-a", "L4-e"]
        );
        assert!(sim.is_done());
        assert_eq!(sim.current_step(), Step(8));
    }

    #[test]
    fn vacated_node_held_until_step_ends() {
        // L2 cannot launch into `a` in the step L1 leaves it.
        let c = colony("2\n##start\ns 0 0\na 1 0\nb 2 0\n##end\ne 3 0\ns-a\na-b\nb-e\n");
        let g = group(&c.graph, &[&["s", "a", "b", "e"]]);
        let mut sim = SimBuilder::new(&c.graph, &g, 2).build().unwrap();
        assert_eq!(trace(&mut sim), ["L1-a", "L1-b", "L1-e L2-a", "L2-b", "L2-e"]);
    }

    #[test]
    fn follower_waits_for_leader_to_clear() {
        // Two moving ants one node apart: the follower cannot step into the
        // node its leader is leaving.
        let c = colony("2\n##start\ns 0 0\na 1 0\nb 2 0\nd 3 0\n##end\ne 4 0\ns-a\na-b\nb-d\nd-e\n");
        let g = group(&c.graph, &[&["s", "a", "b", "d", "e"]]);
        let (a, b) = (c.graph.node_id("a").unwrap(), c.graph.node_id("b").unwrap());
        let mut occupied = vec![false; c.graph.node_count()];
        occupied[a.index()] = true;
        occupied[b.index()] = true;
        let mut sim = Simulator {
            graph:    &c.graph,
            routes:   g.routes(),
            ants:     vec![
                Ant { id: AntId(1), route: 0, progress: 2, finished: false },
                Ant { id: AntId(2), route: 0, progress: 1, finished: false },
            ],
            waiting:  VecDeque::new(),
            moving:   vec![0, 1],
            occupied,
            step:     Step(2),
            finished: 0,
        };
        assert_eq!(trace(&mut sim), ["L1-d", "L1-e L2-b", "L2-d", "L2-e"]);
    }

    #[test]
    fn two_routes_share_the_load() {
        let c = colony(TWO_ROUTES);
        let g = group(&c.graph, &[&["s", "a", "e"], &["s", "b", "c", "e"]]);
        let mut sim = SimBuilder::new(&c.graph, &g, 5).build().unwrap();
        assert_eq!(
            trace(&mut sim),
            [
                "L1-a",
                "L1-e",
                "L2-a",
                "L2-e",
                "L3-a L4-b",
                "L3-e L4-c",
                "L4-e L5-b",
                "L5-c",
                "L5-e",
            ]
        );
    }

    #[test]
    fn direct_link_empties_start_in_one_step() {
        let c = colony("3\n##start\ns 0 0\n##end\ne 1 1\ns-e\n");
        let g = group(&c.graph, &[&["s", "e"]]);
        let mut sim = SimBuilder::new(&c.graph, &g, 3).build().unwrap();
        assert_eq!(trace(&mut sim), ["L1-e L2-e L3-e"]);
    }

    #[test]
    fn direct_link_next_to_longer_route() {
        let c = colony("4\n##start\ns 0 0\na 1 0\n##end\ne 2 0\ns-e\ns-a\na-e\n");
        let g = group(&c.graph, &[&["s", "a", "e"], &["s", "e"]]);
        let mut sim = SimBuilder::new(&c.graph, &g, 4).build().unwrap();
        assert_eq!(trace(&mut sim), ["L1-e L2-e L3-a", "L3-e", "L4-a", "L4-e"]);
    }

    #[test]
    fn step_after_done_is_none() {
        let c = colony("1\n##start\ns 0 0\n##end\ne 1 1\ns-e\n");
        let g = group(&c.graph, &[&["s", "e"]]);
        let mut sim = SimBuilder::new(&c.graph, &g, 1).build().unwrap();
        assert!(sim.step().unwrap().is_some());
        assert!(sim.step().unwrap().is_none());
        assert!(sim.step().unwrap().is_none());
        assert_eq!(sim.current_step(), Step(1));
    }

    #[test]
    fn deadlock_reported_as_stalled() {
        // Two ants facing each other on a shared edge; only reachable by
        // bypassing the builder's overlap check.
        let c = colony("2\n##start\ns 0 0\na 1 0\nb 1 1\n##end\ne 2 0\ns-a\ns-b\na-b\na-e\nb-e\n");
        let g = group(&c.graph, &[&["s", "a", "b", "e"], &["s", "b", "a", "e"]]);
        let (a, b) = (c.graph.node_id("a").unwrap(), c.graph.node_id("b").unwrap());

        let mut occupied = vec![false; c.graph.node_count()];
        occupied[a.index()] = true;
        occupied[b.index()] = true;
        let mut sim = Simulator {
            graph:    &c.graph,
            routes:   g.routes(),
            ants:     vec![
                Ant { id: AntId(1), route: 0, progress: 1, finished: false },
                Ant { id: AntId(2), route: 1, progress: 1, finished: false },
            ],
            waiting:  VecDeque::new(),
            moving:   vec![0, 1],
            occupied,
            step:     Step(3),
            finished: 0,
        };
        let err = sim.step().unwrap_err();
        assert!(matches!(err, SimError::Stalled { step: Step(4), remaining: 2 }));
        assert_eq!(sim.current_step(), Step(3));
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        steps:    Vec<(Step, usize)>,
        finished: Vec<(AntId, Step)>,
        summary:  Option<SimSummary>,
    }

    impl MoveObserver for Recorder {
        fn on_step(&mut self, step: Step, moves: &[Move]) {
            self.steps.push((step, moves.len()));
        }
        fn on_ant_finished(&mut self, ant: AntId, step: Step) {
            self.finished.push((ant, step));
        }
        fn on_sim_end(&mut self, summary: &SimSummary) {
            self.summary = Some(*summary);
        }
    }

    #[test]
    fn callbacks_follow_the_trace() {
        let c = colony(TWO_ROUTES);
        let g = group(&c.graph, &[&["s", "a", "e"], &["s", "b", "c", "e"]]);
        let mut rec = Recorder::default();
        let summary = SimBuilder::new(&c.graph, &g, 5).build().unwrap().run(&mut rec).unwrap();

        assert_eq!(summary, SimSummary { steps: Step(9), finished: 5 });
        assert_eq!(rec.summary, Some(summary));
        let counts: Vec<usize> = rec.steps.iter().map(|&(_, n)| n).collect();
        assert_eq!(counts, [1, 1, 1, 1, 2, 2, 2, 1, 1]);
        assert_eq!(
            rec.finished,
            [
                (AntId(1), Step(2)),
                (AntId(2), Step(4)),
                (AntId(3), Step(6)),
                (AntId(4), Step(7)),
                (AntId(5), Step(9)),
            ]
        );
    }

    #[test]
    fn noop_observer_runs_to_completion() {
        let c = colony(CORRIDOR);
        let g = group(&c.graph, &[&["s", "a", "e"]]);
        let summary = SimBuilder::new(&c.graph, &g, 4).build().unwrap().run(&mut NoopObserver).unwrap();
        assert_eq!(summary.finished, 4);
        assert_eq!(summary.steps, Step(8));
    }
}

// ── Invariants over random colonies ───────────────────────────────────────────

#[cfg(test)]
mod invariants {
    use af_core::{Coord, SolverConfig};
    use af_graph::{ColonyGraphBuilder, NodeRole};
    use af_plan::Planner;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn random_graph(rng: &mut SmallRng) -> ColonyGraph {
        let n: usize = rng.gen_range(3..10);
        let mut b = ColonyGraphBuilder::new();
        let ids: Vec<NodeId> = (0..n)
            .map(|i| {
                let role = match i {
                    0 => NodeRole::Start,
                    1 => NodeRole::End,
                    _ => NodeRole::Interior,
                };
                b.add_node(format!("r{i}"), Coord::new(i as i64, 0), role).unwrap()
            })
            .collect();
        for i in 0..n {
            for j in i + 1..n {
                if rng.gen_bool(0.35) {
                    b.add_link(ids[i], ids[j]);
                }
            }
        }
        b.build().unwrap()
    }

    #[test]
    fn occupancy_and_finish_rules_hold() {
        let mut rng = SmallRng::seed_from_u64(11);
        let mut simulated = 0;

        for _ in 0..300 {
            let graph = random_graph(&mut rng);
            let ants: usize = rng.gen_range(1..25);
            let Ok(plan) = Planner::new(SolverConfig::default()).unwrap().plan_graph(&graph, ants) else {
                continue;
            };
            assert!(plan.group.is_pairwise_disjoint());

            let mut sim = SimBuilder::new(&graph, &plan.group, ants).build().unwrap();
            let mut at: HashMap<AntId, NodeId> = HashMap::new();
            let mut done: HashMap<AntId, Step> = HashMap::new();

            while let Some(record) = sim.step().unwrap() {
                assert!(!record.moves.is_empty());
                for m in &record.moves {
                    assert!(!done.contains_key(&m.ant), "{} moved after finishing", m.ant);
                    let from = at.get(&m.ant).copied().unwrap_or(graph.start);
                    assert!(graph.are_linked(from, m.to), "{} jumped", m.ant);
                    at.insert(m.ant, m.to);
                    if m.to == graph.end {
                        done.insert(m.ant, record.step);
                    }
                }

                let mut held: Vec<NodeId> = at
                    .iter()
                    .filter(|(ant, _)| !done.contains_key(ant))
                    .map(|(_, &node)| node)
                    .collect();
                let before = held.len();
                held.sort();
                held.dedup();
                assert_eq!(held.len(), before, "two ants share a node at {}", record.step);
                assert!(!held.contains(&graph.end) && !held.contains(&graph.start));
            }

            assert_eq!(done.len(), ants);
            assert!(sim.ants().iter().all(|a| a.finished));
            simulated += 1;
        }
        assert!(simulated > 50, "too few colonies simulated: {simulated}");
    }
}
