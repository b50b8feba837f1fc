#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the monument navigation engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters submit [`Command`] values
//! describing desired mutations, the world executes those commands via its
//! `apply` entry point, and then broadcasts [`Event`] values for systems to
//! react to deterministically. Systems consume event streams, query immutable
//! snapshots, and respond exclusively with new command batches.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Canonical banner emitted when the experience boots.
pub const WELCOME_BANNER: &str = "Welcome to the monument.";

/// Named content panel the experience can be navigating to or from.
///
/// `Main` is the default isometric overview. `Arts` and `Projects` are portal
/// sections that gate three sub-sections each, and `About` is the standalone
/// elevated destination. Navigation treats all variants as a flat history
/// stack regardless of the hierarchy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Default overview of the full monument.
    Main,
    /// Arts portal at the foot of the +Z staircase.
    Arts,
    /// Projects portal at the foot of the +X staircase.
    Projects,
    /// Elevated destination above the terrace tower.
    About,
    /// Arts sub-section.
    Dance,
    /// Arts sub-section.
    Gymnastics,
    /// Arts sub-section.
    Music,
    /// Projects sub-section.
    Articles,
    /// Projects sub-section.
    Posts,
    /// Projects sub-section.
    Archive,
}

impl Section {
    /// Resolves the portal group that owns this section.
    ///
    /// Sub-sections collapse onto their parent portal so presentation layers
    /// can derive camera framing and look direction from a single key.
    #[must_use]
    pub const fn group(self) -> SectionGroup {
        match self {
            Self::Main => SectionGroup::Main,
            Self::Arts | Self::Dance | Self::Gymnastics | Self::Music => SectionGroup::Arts,
            Self::Projects | Self::Articles | Self::Posts | Self::Archive => SectionGroup::Projects,
            Self::About => SectionGroup::About,
        }
    }
}

/// Portal grouping used by presentation layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionGroup {
    /// Overview framing; also the fallback for anything unmapped.
    Main,
    /// The arts door on the +Z face.
    Arts,
    /// The projects door on the +X face.
    Projects,
    /// The elevated about platform.
    About,
}

/// Identifier of a waypoint in the compiled-in navigation graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(&'static str);

impl NodeId {
    /// Creates a node identifier from its static name.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Retrieves the textual representation of the identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

/// Orientation a bridge edge is anchored to on the rotatable ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BridgeDir {
    /// Bridge spanning toward the +Z face (arts side).
    Z,
    /// Bridge spanning toward the +X face (projects side).
    X,
}

impl BridgeDir {
    /// Reports whether this bridge is passable at the provided ring angle.
    ///
    /// The Z bridge connects at 0 and 270 degrees, the X bridge at 0 and 90.
    /// At 180 degrees both bridges are disconnected.
    #[must_use]
    pub const fn is_open(self, angle: RingAngle) -> bool {
        let degrees = angle.degrees();
        match self {
            Self::Z => degrees == 0 || degrees == 270,
            Self::X => degrees == 0 || degrees == 90,
        }
    }
}

/// Ring orientation stored as whole degrees normalized to `[0, 360)`.
///
/// Settled values are always multiples of 90; intermediate values exist only
/// while a drag session is in progress and are never used for routing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RingAngle(u16);

impl RingAngle {
    /// Ring orientation with both bridges connected.
    pub const ZERO: Self = Self(0);

    /// Creates an angle from raw degrees, wrapping into `[0, 360)`.
    #[must_use]
    pub const fn from_degrees(degrees: i32) -> Self {
        Self(((degrees % 360 + 360) % 360) as u16)
    }

    /// Normalized degrees in `[0, 360)`.
    #[must_use]
    pub const fn degrees(self) -> u16 {
        self.0
    }

    /// Rounds to the nearest right-angle orientation.
    #[must_use]
    pub const fn snapped(self) -> Self {
        Self((self.0 + 45) / 90 * 90 % 360)
    }

    /// Reports whether the angle rests on a right-angle orientation.
    #[must_use]
    pub const fn is_settled(self) -> bool {
        self.0 % 90 == 0
    }
}

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Requests that the active section change to the provided value,
    /// walking the character to the section's destination first if needed.
    NavigateTo {
        /// Section the experience should activate.
        section: Section,
    },
    /// Requests a return to the most recent entry on the history stack.
    GoBack,
    /// Updates the section currently hovered by the pointer, if any.
    HoverSection {
        /// Hovered section, or `None` when the pointer left all portals.
        section: Option<Section>,
    },
    /// Opens a ring drag session anchored at the settled orientation.
    BeginRingDrag,
    /// Moves the ring to a transient orientation during an active drag.
    DragRing {
        /// Raw drag angle in degrees; wrapped into `[0, 360)` by the world.
        degrees: i32,
    },
    /// Ends the drag session, snapping the ring to the nearest right angle.
    /// Pointer loss mid-drag ends the session through this same command.
    EndRingDrag,
    /// Advances the simulation clock by the provided delta time.
    Tick {
        /// Duration of simulated time that elapsed since the previous tick.
        dt: Duration,
    },
    /// Requests that the walking character travel the provided distance
    /// along its active path.
    AdvanceWalk {
        /// Distance to travel expressed in world units.
        travel: f32,
    },
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Indicates that the simulation clock advanced.
    TimeAdvanced {
        /// Duration of simulated time that elapsed in the tick.
        dt: Duration,
    },
    /// Announces that the active section changed.
    SectionChanged {
        /// Section that was active before the change.
        from: Section,
        /// Section that became active.
        to: Section,
    },
    /// Announces a change of the hovered section.
    HoverChanged {
        /// Newly hovered section, or `None` when the hover cleared.
        section: Option<Section>,
    },
    /// Confirms that a walk path was installed for the character.
    WalkStarted {
        /// Node the walk departs from.
        from: NodeId,
        /// Node the walk will arrive at.
        to: NodeId,
    },
    /// Confirms that the character crossed into a new graph node.
    CharacterAdvanced {
        /// Node the character occupied before the crossing.
        from: NodeId,
        /// Node the character occupies after the crossing.
        to: NodeId,
    },
    /// Confirms that the character reached the end of its walk path.
    WalkCompleted {
        /// Final node of the completed path.
        node: NodeId,
    },
    /// Reports that a walk ended before reaching its destination.
    WalkAborted {
        /// Node the character rests at after the abort.
        node: NodeId,
    },
    /// Confirms that the character was placed directly at a node without
    /// walking, the fallback when no route exists.
    CharacterTeleported {
        /// Node the character was placed at.
        node: NodeId,
    },
    /// Announces that a drag session ended and the ring settled.
    RingSettled {
        /// Right-angle orientation the ring snapped to.
        angle: RingAngle,
    },
}
