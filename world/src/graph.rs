//! Static waypoint graph of the monument.
//!
//! The monument's walkable surface is a fixed set of waypoints: the terrace
//! cluster around the character's home, two upper stair runs descending to
//! the ring bridge landings, two lower stair runs descending from the ring to
//! the portal doors, and the tower stairs climbing to the about platform.
//! Exactly two edges cross the rotatable ring; they are tagged with the
//! bridge orientation that must be connected for the edge to be traversable.

use glam::Vec3;
use monument_core::{BridgeDir, NodeId, RingAngle, Section, SectionGroup};

/// Waypoint the character can stand on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Node {
    id: NodeId,
    position: Vec3,
}

impl Node {
    const fn new(name: &'static str, x: f32, y: f32, z: f32) -> Self {
        Self {
            id: NodeId::new(name),
            position: Vec3::new(x, y, z),
        }
    }

    /// Identifier of the waypoint.
    #[must_use]
    pub const fn id(&self) -> NodeId {
        self.id
    }

    /// World-space position of the waypoint.
    #[must_use]
    pub const fn position(&self) -> Vec3 {
        self.position
    }
}

/// Undirected connection between two waypoints.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Edge {
    a: NodeId,
    b: NodeId,
    bridge: Option<BridgeDir>,
}

impl Edge {
    const fn walkway(a: &'static str, b: &'static str) -> Self {
        Self {
            a: NodeId::new(a),
            b: NodeId::new(b),
            bridge: None,
        }
    }

    const fn bridge(a: &'static str, b: &'static str, dir: BridgeDir) -> Self {
        Self {
            a: NodeId::new(a),
            b: NodeId::new(b),
            bridge: Some(dir),
        }
    }
}

/// Node the character rests at when the experience is idle.
pub const HOME: NodeId = NodeId::new("home");

const ARTS_DOOR: NodeId = NodeId::new("arts-door");
const PROJECTS_DOOR: NodeId = NodeId::new("projects-door");
const ABOUT_DEST: NodeId = NodeId::new("about-dest");

const NODES: [Node; 25] = [
    Node::new("home", 0.0, 7.05, 0.0),
    // Terrace platform
    Node::new("terrace-c", 0.0, 7.05, 0.0),
    Node::new("terrace-pz", 0.0, 7.05, 2.0),
    Node::new("terrace-px", 2.0, 7.05, 0.0),
    Node::new("terrace-nz", 0.0, 7.05, -1.2),
    // Upper stairs, +Z face (terrace down to the ring bridge level)
    Node::new("ustair-z1", 0.2, 6.5, 2.5),
    Node::new("ustair-z2", 0.1, 5.95, 2.75),
    Node::new("uz-landing", 0.0, 5.4, 3.05),
    // Upper stairs, +X face
    Node::new("ustair-x1", 2.5, 6.5, 0.2),
    Node::new("ustair-x2", 2.75, 5.95, 0.1),
    Node::new("ux-landing", 3.05, 5.85, 0.0),
    // Lower stairs, +Z (ring down to the arts door)
    Node::new("lstair-z1", 0.0, 4.2, 3.05),
    Node::new("lstair-z2", -0.3, 3.3, 3.15),
    Node::new("lstair-z3", -0.6, 2.3, 3.25),
    Node::new("lstair-z4", -0.85, 1.3, 3.35),
    Node::new("arts-door", -1.0, 0.5, 3.3),
    // Lower stairs, +X (ring down to the projects door)
    Node::new("lstair-x1", 3.05, 4.2, 0.0),
    Node::new("lstair-x2", 3.15, 3.3, -0.3),
    Node::new("lstair-x3", 3.25, 2.3, -0.6),
    Node::new("lstair-x4", 3.35, 1.3, -0.85),
    Node::new("projects-door", 3.3, 0.5, -1.0),
    // Tower stairs, terrace up to the about platform
    Node::new("tower-s1", 0.0, 7.7, -1.25),
    Node::new("tower-s2", 0.0, 8.4, -0.9),
    Node::new("tower-s3", 0.0, 9.1, -0.4),
    Node::new("about-dest", 0.0, 9.5, 0.0),
];

const EDGES: [Edge; 24] = [
    Edge::walkway("home", "terrace-c"),
    // Terrace internal
    Edge::walkway("terrace-c", "terrace-pz"),
    Edge::walkway("terrace-c", "terrace-px"),
    Edge::walkway("terrace-c", "terrace-nz"),
    // Upper stairs +Z
    Edge::walkway("terrace-pz", "ustair-z1"),
    Edge::walkway("ustair-z1", "ustair-z2"),
    Edge::walkway("ustair-z2", "uz-landing"),
    // Upper stairs +X
    Edge::walkway("terrace-px", "ustair-x1"),
    Edge::walkway("ustair-x1", "ustair-x2"),
    Edge::walkway("ustair-x2", "ux-landing"),
    // Ring bridges, only traversable at connecting orientations
    Edge::bridge("uz-landing", "lstair-z1", BridgeDir::Z),
    Edge::bridge("ux-landing", "lstair-x1", BridgeDir::X),
    // Lower stairs +Z down to the arts door
    Edge::walkway("lstair-z1", "lstair-z2"),
    Edge::walkway("lstair-z2", "lstair-z3"),
    Edge::walkway("lstair-z3", "lstair-z4"),
    Edge::walkway("lstair-z4", "arts-door"),
    // Lower stairs +X down to the projects door
    Edge::walkway("lstair-x1", "lstair-x2"),
    Edge::walkway("lstair-x2", "lstair-x3"),
    Edge::walkway("lstair-x3", "lstair-x4"),
    Edge::walkway("lstair-x4", "projects-door"),
    // Tower stairs up to the about platform
    Edge::walkway("terrace-nz", "tower-s1"),
    Edge::walkway("tower-s1", "tower-s2"),
    Edge::walkway("tower-s2", "tower-s3"),
    Edge::walkway("tower-s3", "about-dest"),
];

/// All waypoints of the monument in deterministic table order.
#[must_use]
pub fn nodes() -> &'static [Node] {
    &NODES
}

/// Looks up a waypoint by identifier.
#[must_use]
pub fn node(id: NodeId) -> Option<&'static Node> {
    NODES.iter().find(|node| node.id == id)
}

/// Dense table index of the provided waypoint, if it exists.
#[must_use]
pub(crate) fn index_of(id: NodeId) -> Option<usize> {
    NODES.iter().position(|node| node.id == id)
}

/// Waypoints reachable from `id` in a single step at the provided ring
/// orientation. Bridge edges are excluded while their bridge is disconnected.
#[must_use]
pub fn neighbors(id: NodeId, angle: RingAngle) -> Vec<NodeId> {
    let mut result = Vec::new();
    for edge in &EDGES {
        let other = if edge.a == id {
            edge.b
        } else if edge.b == id {
            edge.a
        } else {
            continue;
        };
        if let Some(dir) = edge.bridge {
            if !dir.is_open(angle) {
                continue;
            }
        }
        result.push(other);
    }
    result
}

/// Destination waypoint the character must reach for the provided section.
///
/// Sub-sections resolve to their parent portal's door; the overview resolves
/// to the character's home.
#[must_use]
pub const fn destination_for(section: Section) -> NodeId {
    match section.group() {
        SectionGroup::Main => HOME,
        SectionGroup::Arts => ARTS_DOOR,
        SectionGroup::Projects => PROJECTS_DOOR,
        SectionGroup::About => ABOUT_DEST,
    }
}

/// Straight-line length of the edge between two waypoints, if both resolve.
#[must_use]
pub(crate) fn segment_length(a: NodeId, b: NodeId) -> Option<f32> {
    Some(node(a)?.position.distance(node(b)?.position))
}
