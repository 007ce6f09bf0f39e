mod forces;

use std::collections::HashMap;

use eframe::egui::{Pos2, Vec2, pos2};

use crate::service::{GraphModel, GraphNode};
use crate::util::stable_pair;

const NODE_RADIUS: f32 = 8.0;

/// One laid-out node: the service record plus its kinematic state.
pub(in crate::app) struct SimNode {
    pub(in crate::app) node: GraphNode,
    pub(in crate::app) pos: Pos2,
    pub(in crate::app) vel: Vec2,
    pub(in crate::app) radius: f32,
}

/// An edge resolved against the current SimNode set by node name. Edges whose
/// endpoints did not resolve are dropped before this struct exists.
pub(in crate::app) struct SimEdge {
    pub(in crate::app) source: usize,
    pub(in crate::app) target: usize,
    pub(in crate::app) relation: String,
    pub(in crate::app) evidence: String,
}

/// Mutable layout state for one loaded graph. Built fresh whenever the room
/// or the viewport changes; never merged with a previous layout.
pub(in crate::app) struct Simulation {
    nodes: Vec<SimNode>,
    edges: Vec<SimEdge>,
    viewport: Vec2,
    ticks: u64,
    cancelled: bool,
}

impl Simulation {
    pub(in crate::app) fn new(model: &GraphModel, viewport: Vec2) -> Self {
        let span_x = (viewport.x - forces::BOUNDS_MARGIN * 2.0).max(0.0);
        let span_y = (viewport.y - forces::BOUNDS_MARGIN * 2.0).max(0.0);

        let nodes = model
            .nodes
            .iter()
            .map(|node| {
                let (sx, sy) = stable_pair(&node.name);
                SimNode {
                    node: node.clone(),
                    pos: pos2(
                        forces::BOUNDS_MARGIN + (sx * 0.5 + 0.5) * span_x,
                        forces::BOUNDS_MARGIN + (sy * 0.5 + 0.5) * span_y,
                    ),
                    vel: Vec2::ZERO,
                    radius: NODE_RADIUS,
                }
            })
            .collect::<Vec<_>>();

        let index_by_name = nodes
            .iter()
            .enumerate()
            .map(|(index, sim)| (sim.node.name.as_str(), index))
            .collect::<HashMap<_, _>>();

        let edges = model
            .edges
            .iter()
            .filter_map(|edge| {
                let (Some(&source), Some(&target)) = (
                    index_by_name.get(edge.source.as_str()),
                    index_by_name.get(edge.target.as_str()),
                ) else {
                    log::debug!(
                        "dropping dangling edge {} -> {}",
                        edge.source,
                        edge.target
                    );
                    return None;
                };

                Some(SimEdge {
                    source,
                    target,
                    relation: edge.relation.clone(),
                    evidence: edge.evidence.clone(),
                })
            })
            .collect();

        Self {
            nodes,
            edges,
            viewport,
            ticks: 0,
            cancelled: false,
        }
    }

    /// One synchronous physics step: gravity, pairwise repulsion, edge
    /// springs, then damped integration with bounds clamping.
    pub(in crate::app) fn tick(&mut self) {
        if self.cancelled {
            return;
        }

        forces::apply_center_gravity(&mut self.nodes, self.viewport);
        forces::apply_repulsion(&mut self.nodes);
        forces::apply_springs(&mut self.nodes, &self.edges);
        forces::integrate(&mut self.nodes, self.viewport);
        self.ticks += 1;
    }

    /// Stops the simulation for good; further `tick` calls are no-ops.
    pub(in crate::app) fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub(in crate::app) fn ticks(&self) -> u64 {
        self.ticks
    }

    pub(in crate::app) fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub(in crate::app) fn nodes(&self) -> &[SimNode] {
        &self.nodes
    }

    pub(in crate::app) fn edges(&self) -> &[SimEdge] {
        &self.edges
    }

    pub(in crate::app) fn node_index(&self, name: &str) -> Option<usize> {
        self.nodes.iter().position(|sim| sim.node.name == name)
    }

    #[cfg(test)]
    pub(in crate::app) fn place_for_test(&mut self, index: usize, pos: Pos2) {
        self.nodes[index].pos = pos;
        self.nodes[index].vel = Vec2::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::{Vec2, pos2};

    use super::{Simulation, forces};
    use crate::service::{GraphEdge, GraphModel, GraphNode, NodeKind};

    const VIEWPORT: Vec2 = Vec2 { x: 800.0, y: 600.0 };

    fn node(name: &str) -> GraphNode {
        GraphNode {
            id: format!("id-{name}"),
            name: name.to_owned(),
            kind: NodeKind::Concept,
            description: String::new(),
            community_id: None,
        }
    }

    fn edge(source: &str, target: &str) -> GraphEdge {
        GraphEdge {
            source: source.to_owned(),
            target: target.to_owned(),
            relation: "related to".to_owned(),
            evidence: String::new(),
        }
    }

    fn model(names: &[&str], edges: Vec<GraphEdge>) -> GraphModel {
        GraphModel {
            nodes: names.iter().map(|name| node(name)).collect(),
            node_count: names.len(),
            edge_count: edges.len(),
            edges,
        }
    }

    #[test]
    fn initial_positions_are_inside_bounds() {
        let sim = Simulation::new(&model(&["a", "b", "c", "d", "e"], Vec::new()), VIEWPORT);
        for sim_node in sim.nodes() {
            assert!((20.0..=VIEWPORT.x - 20.0).contains(&sim_node.pos.x));
            assert!((20.0..=VIEWPORT.y - 20.0).contains(&sim_node.pos.y));
        }
    }

    #[test]
    fn positions_stay_inside_bounds_for_all_ticks() {
        let edges = vec![edge("a", "b"), edge("b", "c"), edge("c", "d"), edge("d", "a")];
        let mut sim = Simulation::new(&model(&["a", "b", "c", "d", "e", "f"], edges), VIEWPORT);

        for _ in 0..500 {
            sim.tick();
            for sim_node in sim.nodes() {
                assert!(
                    (20.0..=VIEWPORT.x - 20.0).contains(&sim_node.pos.x),
                    "x escaped bounds: {}",
                    sim_node.pos.x
                );
                assert!(
                    (20.0..=VIEWPORT.y - 20.0).contains(&sim_node.pos.y),
                    "y escaped bounds: {}",
                    sim_node.pos.y
                );
            }
        }
    }

    #[test]
    fn repulsion_impulses_are_exact_negations() {
        let mut sim = Simulation::new(&model(&["a", "b"], Vec::new()), VIEWPORT);
        sim.nodes[0].pos = pos2(100.0, 100.0);
        sim.nodes[1].pos = pos2(170.0, 140.0);

        forces::apply_repulsion(&mut sim.nodes);

        assert_eq!(sim.nodes[0].vel.x, -sim.nodes[1].vel.x);
        assert_eq!(sim.nodes[0].vel.y, -sim.nodes[1].vel.y);
        assert!(sim.nodes[0].vel.length() > 0.0);
    }

    #[test]
    fn repulsion_separates_coincident_nodes() {
        let mut sim = Simulation::new(&model(&["a", "b"], Vec::new()), VIEWPORT);
        sim.nodes[1].pos = sim.nodes[0].pos;

        forces::apply_repulsion(&mut sim.nodes);

        assert!(sim.nodes[0].vel.x < 0.0);
        assert!(sim.nodes[1].vel.x > 0.0);
    }

    #[test]
    fn single_node_converges_to_center() {
        let mut sim = Simulation::new(&model(&["lonely"], Vec::new()), VIEWPORT);
        for _ in 0..5000 {
            sim.tick();
        }

        let center = pos2(VIEWPORT.x / 2.0, VIEWPORT.y / 2.0);
        assert!(
            sim.nodes()[0].pos.distance(center) < 1.0,
            "node settled at {:?}, expected near {:?}",
            sim.nodes()[0].pos,
            center
        );
    }

    #[test]
    fn spring_pulls_stretched_edge_together() {
        let mut sim = Simulation::new(&model(&["a", "b"], vec![edge("a", "b")]), VIEWPORT);
        sim.nodes[0].pos = pos2(100.0, 300.0);
        sim.nodes[1].pos = pos2(500.0, 300.0);

        forces::apply_springs(&mut sim.nodes, &sim.edges);

        // 400 apart, rest length 120: endpoints attract along the edge axis.
        assert!(sim.nodes[0].vel.x > 0.0);
        assert!(sim.nodes[1].vel.x < 0.0);
        assert_eq!(sim.nodes[0].vel.x, -sim.nodes[1].vel.x);
    }

    #[test]
    fn spring_pushes_compressed_edge_apart() {
        let mut sim = Simulation::new(&model(&["a", "b"], vec![edge("a", "b")]), VIEWPORT);
        sim.nodes[0].pos = pos2(300.0, 300.0);
        sim.nodes[1].pos = pos2(330.0, 300.0);

        forces::apply_springs(&mut sim.nodes, &sim.edges);

        assert!(sim.nodes[0].vel.x < 0.0);
        assert!(sim.nodes[1].vel.x > 0.0);
    }

    #[test]
    fn dangling_edges_are_dropped_silently() {
        let edges = vec![edge("a", "b"), edge("a", "ghost"), edge("phantom", "b")];
        let sim = Simulation::new(&model(&["a", "b"], edges), VIEWPORT);

        assert_eq!(sim.edges().len(), 1);
        assert_eq!(sim.edges()[0].source, 0);
        assert_eq!(sim.edges()[0].target, 1);
    }

    #[test]
    fn cancel_freezes_the_tick_counter() {
        let mut sim = Simulation::new(&model(&["a", "b"], Vec::new()), VIEWPORT);
        sim.tick();
        sim.tick();
        assert_eq!(sim.ticks(), 2);

        sim.cancel();
        let frozen = sim.nodes()[0].pos;
        sim.tick();
        sim.tick();

        assert_eq!(sim.ticks(), 2);
        assert_eq!(sim.nodes()[0].pos, frozen);
    }

    #[test]
    fn rebuild_replaces_kinematics_wholesale() {
        let graph = model(&["a", "b"], vec![edge("a", "b")]);
        let mut sim = Simulation::new(&graph, VIEWPORT);
        for _ in 0..100 {
            sim.tick();
        }

        let rebuilt = Simulation::new(&graph, VIEWPORT);
        assert_eq!(rebuilt.ticks(), 0);
        // Fresh builds restart from the deterministic scatter, not the
        // settled positions.
        let fresh = Simulation::new(&graph, VIEWPORT);
        assert_eq!(rebuilt.nodes()[0].pos, fresh.nodes()[0].pos);
    }
}
