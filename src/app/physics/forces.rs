use eframe::egui::{Vec2, vec2};

use super::{SimEdge, SimNode};

pub(super) const CENTER_GRAVITY: f32 = 0.0005;
pub(super) const REPULSION_STRENGTH: f32 = 800.0;
pub(super) const SPRING_STRENGTH: f32 = 0.005;
pub(super) const SPRING_REST_LENGTH: f32 = 120.0;
pub(super) const VELOCITY_DAMPING: f32 = 0.9;
pub(super) const BOUNDS_MARGIN: f32 = 20.0;

// Distance floor for the inverse-square pass; keeps overlapping nodes from
// producing a singular force.
const MIN_DISTANCE: f32 = 1.0;

fn direction_between(delta: Vec2, distance: f32) -> Vec2 {
    if distance > 0.0001 {
        delta / distance
    } else {
        vec2(1.0, 0.0)
    }
}

/// Gentle pull of every node toward the viewport center, so disconnected
/// components cannot drift off the surface.
pub(super) fn apply_center_gravity(nodes: &mut [SimNode], viewport: Vec2) {
    let center = viewport * 0.5;
    for node in nodes {
        node.vel += (center - node.pos.to_vec2()) * CENTER_GRAVITY;
    }
}

/// Inverse-square repulsion over every unordered node pair. The two impulses
/// are exact negations of each other, so the pass conserves momentum.
pub(super) fn apply_repulsion(nodes: &mut [SimNode]) {
    for a in 0..nodes.len() {
        for b in (a + 1)..nodes.len() {
            let delta = nodes[b].pos - nodes[a].pos;
            let raw_distance = delta.length();
            let distance = raw_distance.max(MIN_DISTANCE);
            let direction = direction_between(delta, raw_distance);

            let impulse = direction * (REPULSION_STRENGTH / (distance * distance));
            nodes[a].vel -= impulse;
            nodes[b].vel += impulse;
        }
    }
}

/// Hooke springs along every resolved edge: attract past the rest length,
/// repel inside it.
pub(super) fn apply_springs(nodes: &mut [SimNode], edges: &[SimEdge]) {
    for edge in edges {
        let (source, target) = (edge.source, edge.target);
        let delta = nodes[target].pos - nodes[source].pos;
        let distance = delta.length();
        let direction = direction_between(delta, distance);

        let impulse = direction * ((distance - SPRING_REST_LENGTH) * SPRING_STRENGTH);
        nodes[source].vel += impulse;
        nodes[target].vel -= impulse;
    }
}

/// Damped Euler step, then clamp into the visible surface. Damping is what
/// makes the layout settle instead of oscillating forever.
pub(super) fn integrate(nodes: &mut [SimNode], viewport: Vec2) {
    let max_x = (viewport.x - BOUNDS_MARGIN).max(BOUNDS_MARGIN);
    let max_y = (viewport.y - BOUNDS_MARGIN).max(BOUNDS_MARGIN);

    for node in nodes {
        node.vel *= VELOCITY_DAMPING;
        node.pos += node.vel;
        node.pos.x = node.pos.x.clamp(BOUNDS_MARGIN, max_x);
        node.pos.y = node.pos.y.clamp(BOUNDS_MARGIN, max_y);
    }
}
