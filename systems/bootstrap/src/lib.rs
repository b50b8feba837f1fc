#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure bootstrap system that prepares the monument experience.

use monument_core::{NodeId, Section};
use monument_world::{graph, query, World};

/// Produces data required to greet the visitor and seed presentation layers.
#[derive(Debug, Default)]
pub struct Bootstrap;

impl Bootstrap {
    /// Derives the banner that should be shown when the experience starts.
    #[must_use]
    pub fn welcome_banner(&self, world: &World) -> &'static str {
        query::welcome_banner(world)
    }

    /// Section the experience presents on boot.
    #[must_use]
    pub fn active_section(&self, world: &World) -> Section {
        query::active_section(world)
    }

    /// Waypoint the character occupies on boot.
    #[must_use]
    pub fn character_node(&self, world: &World) -> NodeId {
        query::character_node(world)
    }

    /// Exposes the monument's waypoint layout for rendering.
    #[must_use]
    pub fn layout(&self) -> &'static [graph::Node] {
        graph::nodes()
    }
}
