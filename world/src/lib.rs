#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative navigation state for the monument experience.
//!
//! The world owns the active section, the flat navigation history, the
//! hovered section, the ring orientation, and the character's walk state.
//! Adapters and systems mutate it exclusively through [`apply`], which
//! executes commands in call order and broadcasts the resulting events.
//! Time-based behavior (the settling delay before the automatic walk home
//! and the delay before a deferred section switch) is modeled as deadlines
//! against a simulated clock advanced by `Command::Tick`, so every run of the
//! same command sequence produces the same event stream.

use std::time::Duration;

use glam::Vec3;
use monument_core::{Command, Event, NodeId, RingAngle, Section, WELCOME_BANNER};

pub mod graph;
mod routing;

pub use routing::find_path;

/// Pause between the overview becoming active away from home and the
/// automatic walk back.
const RETURN_SETTLE_DELAY: Duration = Duration::from_millis(800);

/// Pause between a walk arriving at a portal and the deferred section switch.
const DEFERRED_SWITCH_DELAY: Duration = Duration::from_millis(350);

/// Represents the authoritative navigation state of the monument.
#[derive(Debug)]
pub struct World {
    banner: &'static str,
    section: Section,
    history: Vec<Section>,
    hovered: Option<Section>,
    ring: RingState,
    character: NodeId,
    walk: Option<Walk>,
    clock: Duration,
    pending_switch: Option<PendingSwitch>,
    return_deadline: Option<Duration>,
}

impl World {
    /// Creates a new world with the character resting at home on the
    /// overview section.
    #[must_use]
    pub fn new() -> Self {
        Self {
            banner: WELCOME_BANNER,
            section: Section::Main,
            history: Vec::new(),
            hovered: None,
            ring: RingState {
                settled: RingAngle::ZERO,
                drag: None,
            },
            character: graph::HOME,
            walk: None,
            clock: Duration::ZERO,
            pending_switch: None,
            return_deadline: None,
        }
    }

    fn navigate_to(&mut self, section: Section, out_events: &mut Vec<Event>) {
        // A fresh request always supersedes a switch still waiting out its
        // post-arrival delay.
        self.pending_switch = None;

        if section == Section::Main {
            self.cancel_walk(out_events);
            self.enter_section(section, out_events);
            return;
        }

        self.return_deadline = None;
        let destination = graph::destination_for(section);
        if self.character == destination {
            self.enter_section(section, out_events);
            return;
        }

        match routing::find_path(self.character, destination, self.ring.settled) {
            Some(path) if path.len() >= 2 => {
                let from = path[0];
                let to = path[path.len() - 1];
                self.walk = Some(Walk {
                    path,
                    segment: 0,
                    traveled: 0.0,
                    deferred: Some(section),
                });
                out_events.push(Event::WalkStarted { from, to });
            }
            _ => {
                // Bridges closed: degrade to a direct placement.
                self.cancel_walk(out_events);
                self.teleport(destination, out_events);
                self.enter_section(section, out_events);
            }
        }
    }

    fn go_back(&mut self, out_events: &mut Vec<Event>) {
        let Some(previous) = self.history.pop() else {
            return;
        };
        if previous == Section::Main {
            self.cancel_walk(out_events);
            self.pending_switch = None;
        }
        let from = self.section;
        self.section = previous;
        out_events.push(Event::SectionChanged { from, to: previous });
        self.after_section_change();
    }

    /// Pushes the current section onto the history stack and activates the
    /// provided one.
    fn enter_section(&mut self, section: Section, out_events: &mut Vec<Event>) {
        let from = self.section;
        self.history.push(from);
        self.section = section;
        out_events.push(Event::SectionChanged { from, to: section });
        self.after_section_change();
    }

    fn after_section_change(&mut self) {
        if self.section == Section::Main {
            if self.character != graph::HOME && self.walk.is_none() {
                self.return_deadline = Some(self.clock.saturating_add(RETURN_SETTLE_DELAY));
            }
        } else {
            self.return_deadline = None;
        }
    }

    fn set_hover(&mut self, section: Option<Section>, out_events: &mut Vec<Event>) {
        if self.hovered == section {
            return;
        }
        self.hovered = section;
        out_events.push(Event::HoverChanged { section });
    }

    fn begin_ring_drag(&mut self) {
        if self.ring.drag.is_none() {
            self.ring.drag = Some(self.ring.settled);
        }
    }

    fn drag_ring(&mut self, degrees: i32) {
        if let Some(transient) = self.ring.drag.as_mut() {
            *transient = RingAngle::from_degrees(degrees);
        }
    }

    fn end_ring_drag(&mut self, out_events: &mut Vec<Event>) {
        let Some(transient) = self.ring.drag.take() else {
            return;
        };
        let settled = transient.snapped();
        self.ring.settled = settled;
        out_events.push(Event::RingSettled { angle: settled });
    }

    fn tick(&mut self, dt: Duration, out_events: &mut Vec<Event>) {
        self.clock = self.clock.saturating_add(dt);
        out_events.push(Event::TimeAdvanced { dt });
        self.resolve_deadlines(out_events);
    }

    fn resolve_deadlines(&mut self, out_events: &mut Vec<Event>) {
        if let Some(pending) = self.pending_switch.take() {
            if self.clock >= pending.at {
                self.enter_section(pending.section, out_events);
            } else {
                self.pending_switch = Some(pending);
            }
        }

        if let Some(deadline) = self.return_deadline.take() {
            if self.clock >= deadline {
                self.begin_return_home(out_events);
            } else {
                self.return_deadline = Some(deadline);
            }
        }
    }

    fn begin_return_home(&mut self, out_events: &mut Vec<Event>) {
        if self.section != Section::Main || self.character == graph::HOME || self.walk.is_some() {
            return;
        }
        match routing::find_path(self.character, graph::HOME, self.ring.settled) {
            Some(path) if path.len() >= 2 => {
                let from = path[0];
                let to = path[path.len() - 1];
                self.walk = Some(Walk {
                    path,
                    segment: 0,
                    traveled: 0.0,
                    deferred: None,
                });
                out_events.push(Event::WalkStarted { from, to });
            }
            _ => self.teleport(graph::HOME, out_events),
        }
    }

    fn advance_walk(&mut self, travel: f32, out_events: &mut Vec<Event>) {
        if !travel.is_finite() || travel <= 0.0 {
            return;
        }
        let Some(mut walk) = self.walk.take() else {
            return;
        };

        walk.traveled += travel;
        loop {
            let start = walk.path[walk.segment];
            let end = walk.path[walk.segment + 1];
            let Some(length) = graph::segment_length(start, end) else {
                // A waypoint vanished mid-walk; rest at the last node that
                // still resolves instead of failing the whole frame.
                out_events.push(Event::WalkAborted {
                    node: self.character,
                });
                return;
            };

            if walk.traveled < length {
                self.walk = Some(walk);
                return;
            }

            walk.traveled -= length;
            walk.segment += 1;
            self.character = end;
            out_events.push(Event::CharacterAdvanced { from: start, to: end });

            if walk.segment + 1 >= walk.path.len() {
                out_events.push(Event::WalkCompleted { node: end });
                if let Some(section) = walk.deferred {
                    self.pending_switch = Some(PendingSwitch {
                        section,
                        at: self.clock.saturating_add(DEFERRED_SWITCH_DELAY),
                    });
                }
                return;
            }
        }
    }

    fn cancel_walk(&mut self, out_events: &mut Vec<Event>) {
        if self.walk.take().is_some() {
            out_events.push(Event::WalkAborted {
                node: self.character,
            });
        }
    }

    fn teleport(&mut self, node: NodeId, out_events: &mut Vec<Event>) {
        self.character = node;
        out_events.push(Event::CharacterTeleported { node });
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::NavigateTo { section } => world.navigate_to(section, out_events),
        Command::GoBack => world.go_back(out_events),
        Command::HoverSection { section } => world.set_hover(section, out_events),
        Command::BeginRingDrag => world.begin_ring_drag(),
        Command::DragRing { degrees } => world.drag_ring(degrees),
        Command::EndRingDrag => world.end_ring_drag(out_events),
        Command::Tick { dt } => world.tick(dt, out_events),
        Command::AdvanceWalk { travel } => world.advance_walk(travel, out_events),
    }
}

#[derive(Debug)]
struct RingState {
    settled: RingAngle,
    drag: Option<RingAngle>,
}

#[derive(Debug)]
struct Walk {
    /// Inclusive node sequence; the first entry equals the character's node
    /// at the moment the path was installed.
    path: Vec<NodeId>,
    /// Index of the segment currently being traversed.
    segment: usize,
    /// Distance already covered within the current segment.
    traveled: f32,
    /// Section to activate once the walk arrives.
    deferred: Option<Section>,
}

#[derive(Debug)]
struct PendingSwitch {
    section: Section,
    at: Duration,
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use super::{graph, Duration, NodeId, RingAngle, Section, Vec3, World};

    /// Retrieves the welcome banner that adapters may display to visitors.
    #[must_use]
    pub fn welcome_banner(world: &World) -> &'static str {
        world.banner
    }

    /// Section currently presented by the experience.
    #[must_use]
    pub fn active_section(world: &World) -> Section {
        world.section
    }

    /// Number of sections recorded on the history stack.
    #[must_use]
    pub fn history_depth(world: &World) -> usize {
        world.history.len()
    }

    /// Section currently hovered by the pointer, if any.
    #[must_use]
    pub fn hovered_section(world: &World) -> Option<Section> {
        world.hovered
    }

    /// Settled ring orientation used for routing decisions.
    #[must_use]
    pub fn ring_angle(world: &World) -> RingAngle {
        world.ring.settled
    }

    /// Orientation to present for the ring: the transient drag angle while a
    /// drag session is active, the settled angle otherwise.
    #[must_use]
    pub fn ring_display_angle(world: &World) -> RingAngle {
        world.ring.drag.unwrap_or(world.ring.settled)
    }

    /// Reports whether a ring drag session is in progress.
    #[must_use]
    pub fn ring_drag_active(world: &World) -> bool {
        world.ring.drag.is_some()
    }

    /// Waypoint the character currently occupies.
    #[must_use]
    pub fn character_node(world: &World) -> NodeId {
        world.character
    }

    /// Reports whether the character is walking along an installed path.
    #[must_use]
    pub fn is_walking(world: &World) -> bool {
        world.walk.is_some()
    }

    /// Simulated time accumulated from tick commands.
    #[must_use]
    pub fn clock(world: &World) -> Duration {
        world.clock
    }

    /// Captures a read-only view of the active walk, if one is in progress.
    #[must_use]
    pub fn walk_view(world: &World) -> Option<WalkView<'_>> {
        world.walk.as_ref().map(|walk| WalkView {
            path: &walk.path,
            segment: walk.segment,
            traveled: walk.traveled,
            deferred: walk.deferred,
        })
    }

    /// World-space position of the character, interpolated along the current
    /// walk segment while walking.
    #[must_use]
    pub fn character_position(world: &World) -> Vec3 {
        let resting = graph::node(world.character)
            .map(|node| node.position())
            .unwrap_or(Vec3::ZERO);

        let Some(walk) = world.walk.as_ref() else {
            return resting;
        };
        let (Some(start), Some(end)) = (
            graph::node(walk.path[walk.segment]),
            graph::node(walk.path[walk.segment + 1]),
        ) else {
            return resting;
        };

        let length = start.position().distance(end.position());
        if length <= f32::EPSILON {
            return end.position();
        }
        let fraction = (walk.traveled / length).clamp(0.0, 1.0);
        start.position().lerp(end.position(), fraction)
    }

    /// Direction of travel along the current walk segment, or `None` while
    /// the character is idle or the segment has no horizontal extent.
    #[must_use]
    pub fn walk_heading(world: &World) -> Option<Vec3> {
        let walk = world.walk.as_ref()?;
        let start = graph::node(walk.path[walk.segment])?;
        let end = graph::node(walk.path[walk.segment + 1])?;
        (end.position() - start.position()).try_normalize()
    }

    /// Read-only view into the active walk.
    #[derive(Clone, Copy, Debug)]
    pub struct WalkView<'a> {
        path: &'a [NodeId],
        segment: usize,
        traveled: f32,
        deferred: Option<Section>,
    }

    impl<'a> WalkView<'a> {
        /// Inclusive node sequence being traversed.
        #[must_use]
        pub fn path(&self) -> &'a [NodeId] {
            self.path
        }

        /// Index of the segment currently being traversed.
        #[must_use]
        pub fn segment(&self) -> usize {
            self.segment
        }

        /// Distance already covered within the current segment.
        #[must_use]
        pub fn traveled(&self) -> f32 {
            self.traveled
        }

        /// Section that will activate once the walk arrives, if any.
        #[must_use]
        pub fn deferred_section(&self) -> Option<Section> {
            self.deferred
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn navigate(world: &mut World, section: Section) -> Vec<Event> {
        let mut events = Vec::new();
        apply(world, Command::NavigateTo { section }, &mut events);
        events
    }

    fn tick(world: &mut World, dt: Duration) -> Vec<Event> {
        let mut events = Vec::new();
        apply(world, Command::Tick { dt }, &mut events);
        events
    }

    #[test]
    fn new_world_rests_at_home_on_the_overview() {
        let world = World::new();
        assert_eq!(query::active_section(&world), Section::Main);
        assert_eq!(query::history_depth(&world), 0);
        assert_eq!(query::character_node(&world), graph::HOME);
        assert!(!query::is_walking(&world));
        assert_eq!(query::ring_angle(&world), RingAngle::ZERO);
    }

    #[test]
    fn navigation_to_a_portal_installs_a_deferred_walk() {
        let mut world = World::new();
        let events = navigate(&mut world, Section::Arts);

        assert!(matches!(events.as_slice(), [Event::WalkStarted { .. }]));
        assert_eq!(query::active_section(&world), Section::Main);
        let walk = query::walk_view(&world).expect("walk installed");
        assert_eq!(walk.path().first().copied(), Some(graph::HOME));
        assert_eq!(
            walk.path().last().copied(),
            Some(graph::destination_for(Section::Arts))
        );
        assert_eq!(walk.deferred_section(), Some(Section::Arts));
    }

    #[test]
    fn navigation_with_closed_bridges_teleports_and_switches_immediately() {
        let mut world = World::new();
        let mut events = Vec::new();
        apply(&mut world, Command::BeginRingDrag, &mut events);
        apply(&mut world, Command::DragRing { degrees: 180 }, &mut events);
        apply(&mut world, Command::EndRingDrag, &mut events);
        assert!(events.contains(&Event::RingSettled {
            angle: RingAngle::from_degrees(180)
        }));

        let events = navigate(&mut world, Section::Arts);
        assert!(events.contains(&Event::CharacterTeleported {
            node: graph::destination_for(Section::Arts)
        }));
        assert!(events.contains(&Event::SectionChanged {
            from: Section::Main,
            to: Section::Arts
        }));
        assert_eq!(query::active_section(&world), Section::Arts);
        assert!(!query::is_walking(&world));
    }

    #[test]
    fn go_back_restores_the_previous_section() {
        let mut world = World::new();
        let mut events = Vec::new();
        apply(&mut world, Command::BeginRingDrag, &mut events);
        apply(&mut world, Command::DragRing { degrees: 180 }, &mut events);
        apply(&mut world, Command::EndRingDrag, &mut events);

        // Closed bridges make both switches land immediately.
        let _ = navigate(&mut world, Section::Arts);
        let _ = navigate(&mut world, Section::Dance);
        assert_eq!(query::active_section(&world), Section::Dance);
        assert_eq!(query::history_depth(&world), 2);

        let mut events = Vec::new();
        apply(&mut world, Command::GoBack, &mut events);
        assert_eq!(query::active_section(&world), Section::Arts);
        apply(&mut world, Command::GoBack, &mut events);
        assert_eq!(query::active_section(&world), Section::Main);
        assert_eq!(query::history_depth(&world), 0);
    }

    #[test]
    fn go_back_on_empty_history_is_a_silent_no_op() {
        let mut world = World::new();
        let mut events = Vec::new();
        apply(&mut world, Command::GoBack, &mut events);
        assert!(events.is_empty());
        assert_eq!(query::active_section(&world), Section::Main);
    }

    #[test]
    fn hover_changes_are_deduplicated() {
        let mut world = World::new();
        let mut events = Vec::new();
        apply(
            &mut world,
            Command::HoverSection {
                section: Some(Section::Arts),
            },
            &mut events,
        );
        apply(
            &mut world,
            Command::HoverSection {
                section: Some(Section::Arts),
            },
            &mut events,
        );
        apply(&mut world, Command::HoverSection { section: None }, &mut events);
        assert_eq!(
            events,
            vec![
                Event::HoverChanged {
                    section: Some(Section::Arts)
                },
                Event::HoverChanged { section: None },
            ]
        );
    }

    #[test]
    fn drag_without_a_session_is_ignored() {
        let mut world = World::new();
        let mut events = Vec::new();
        apply(&mut world, Command::DragRing { degrees: 135 }, &mut events);
        apply(&mut world, Command::EndRingDrag, &mut events);
        assert!(events.is_empty());
        assert_eq!(query::ring_angle(&world), RingAngle::ZERO);
    }

    #[test]
    fn ring_drag_exposes_transient_angles_and_snaps_on_release() {
        let mut world = World::new();
        let mut events = Vec::new();
        apply(&mut world, Command::BeginRingDrag, &mut events);
        apply(&mut world, Command::DragRing { degrees: 247 }, &mut events);

        assert!(query::ring_drag_active(&world));
        assert_eq!(
            query::ring_display_angle(&world),
            RingAngle::from_degrees(247)
        );
        assert_eq!(query::ring_angle(&world), RingAngle::ZERO);

        apply(&mut world, Command::EndRingDrag, &mut events);
        assert_eq!(query::ring_angle(&world), RingAngle::from_degrees(270));
        assert!(!query::ring_drag_active(&world));
    }

    #[test]
    fn walk_advances_across_segments_and_completes() {
        let mut world = World::new();
        let _ = navigate(&mut world, Section::About);
        let total: f32 = query::walk_view(&world)
            .expect("walk installed")
            .path()
            .windows(2)
            .map(|pair| graph::segment_length(pair[0], pair[1]).expect("segment resolves"))
            .sum();

        let mut events = Vec::new();
        apply(
            &mut world,
            Command::AdvanceWalk {
                travel: total + 0.01,
            },
            &mut events,
        );

        assert!(events.contains(&Event::WalkCompleted {
            node: graph::destination_for(Section::About)
        }));
        assert_eq!(
            query::character_node(&world),
            graph::destination_for(Section::About)
        );
        assert!(!query::is_walking(&world));
    }

    #[test]
    fn deferred_switch_applies_after_the_delay() {
        let mut world = World::new();
        let _ = navigate(&mut world, Section::About);
        let total: f32 = query::walk_view(&world)
            .expect("walk installed")
            .path()
            .windows(2)
            .map(|pair| graph::segment_length(pair[0], pair[1]).expect("segment resolves"))
            .sum();
        let mut events = Vec::new();
        apply(
            &mut world,
            Command::AdvanceWalk {
                travel: total + 0.01,
            },
            &mut events,
        );
        assert_eq!(query::active_section(&world), Section::Main);

        let events = tick(&mut world, DEFERRED_SWITCH_DELAY);
        assert!(events.contains(&Event::SectionChanged {
            from: Section::Main,
            to: Section::About
        }));
        assert_eq!(query::active_section(&world), Section::About);
        assert_eq!(query::history_depth(&world), 1);
    }

    #[test]
    fn returning_to_main_supersedes_the_walk_and_deferred_target() {
        let mut world = World::new();
        let _ = navigate(&mut world, Section::Arts);
        assert!(query::is_walking(&world));

        let events = navigate(&mut world, Section::Main);
        assert!(events.contains(&Event::WalkAborted { node: graph::HOME }));
        assert!(!query::is_walking(&world));

        // The deferred switch must never land.
        let events = tick(&mut world, Duration::from_secs(5));
        assert!(!events
            .iter()
            .any(|event| matches!(event, Event::SectionChanged { to: Section::Arts, .. })));
    }

    #[test]
    fn newer_navigation_request_replaces_the_deferred_target() {
        let mut world = World::new();
        let _ = navigate(&mut world, Section::Arts);
        let _ = navigate(&mut world, Section::About);

        let walk = query::walk_view(&world).expect("walk installed");
        assert_eq!(walk.deferred_section(), Some(Section::About));
        assert_eq!(
            walk.path().last().copied(),
            Some(graph::destination_for(Section::About))
        );
    }

    #[test]
    fn teleport_navigation_supersedes_a_pending_deferred_switch() {
        let mut world = World::new();
        let _ = navigate(&mut world, Section::Arts);
        let total: f32 = query::walk_view(&world)
            .expect("walk installed")
            .path()
            .windows(2)
            .map(|pair| graph::segment_length(pair[0], pair[1]).expect("segment resolves"))
            .sum();
        let mut events = Vec::new();
        apply(
            &mut world,
            Command::AdvanceWalk {
                travel: total + 0.01,
            },
            &mut events,
        );

        // Before the deferred switch lands, close the bridges and ask for
        // the other portal; the stale switch must never apply.
        apply(&mut world, Command::BeginRingDrag, &mut events);
        apply(&mut world, Command::DragRing { degrees: 180 }, &mut events);
        apply(&mut world, Command::EndRingDrag, &mut events);
        let _ = navigate(&mut world, Section::Projects);
        assert_eq!(query::active_section(&world), Section::Projects);

        let events = tick(&mut world, Duration::from_secs(5));
        assert!(!events
            .iter()
            .any(|event| matches!(event, Event::SectionChanged { to: Section::Arts, .. })));
        assert_eq!(query::active_section(&world), Section::Projects);
    }

    #[test]
    fn walk_aborts_at_the_last_resolved_node_when_a_waypoint_vanishes() {
        let mut world = World::new();
        let terrace = NodeId::new("terrace-c");
        world.walk = Some(Walk {
            path: vec![graph::HOME, terrace, NodeId::new("vanished")],
            segment: 0,
            traveled: 0.0,
            deferred: Some(Section::Arts),
        });

        let mut events = Vec::new();
        apply(&mut world, Command::AdvanceWalk { travel: 0.5 }, &mut events);

        assert!(events.contains(&Event::CharacterAdvanced {
            from: graph::HOME,
            to: terrace
        }));
        assert!(events.contains(&Event::WalkAborted { node: terrace }));
        assert!(!query::is_walking(&world));
        assert_eq!(query::character_node(&world), terrace);
    }

    #[test]
    fn overview_away_from_home_walks_back_after_the_settling_delay() {
        let mut world = World::new();
        // Jump straight to the arts door with bridges closed.
        let mut events = Vec::new();
        apply(&mut world, Command::BeginRingDrag, &mut events);
        apply(&mut world, Command::DragRing { degrees: 180 }, &mut events);
        apply(&mut world, Command::EndRingDrag, &mut events);
        let _ = navigate(&mut world, Section::Arts);
        assert_eq!(
            query::character_node(&world),
            graph::destination_for(Section::Arts)
        );

        // Reconnect the Z bridge, then come home.
        apply(&mut world, Command::BeginRingDrag, &mut events);
        apply(&mut world, Command::DragRing { degrees: 0 }, &mut events);
        apply(&mut world, Command::EndRingDrag, &mut events);
        let _ = navigate(&mut world, Section::Main);

        let events = tick(&mut world, RETURN_SETTLE_DELAY - Duration::from_millis(1));
        assert!(!events
            .iter()
            .any(|event| matches!(event, Event::WalkStarted { .. })));

        let events = tick(&mut world, Duration::from_millis(1));
        assert!(events.contains(&Event::WalkStarted {
            from: graph::destination_for(Section::Arts),
            to: graph::HOME
        }));
        let walk = query::walk_view(&world).expect("return walk installed");
        assert_eq!(walk.deferred_section(), None);
    }

    #[test]
    fn overview_away_from_home_snaps_back_when_no_route_exists() {
        let mut world = World::new();
        let mut events = Vec::new();
        apply(&mut world, Command::BeginRingDrag, &mut events);
        apply(&mut world, Command::DragRing { degrees: 180 }, &mut events);
        apply(&mut world, Command::EndRingDrag, &mut events);
        let _ = navigate(&mut world, Section::Arts);
        let _ = navigate(&mut world, Section::Main);

        let events = tick(&mut world, RETURN_SETTLE_DELAY);
        assert!(events.contains(&Event::CharacterTeleported { node: graph::HOME }));
        assert_eq!(query::character_node(&world), graph::HOME);
    }

    #[test]
    fn interpolated_position_tracks_segment_progress() {
        let mut world = World::new();
        let _ = navigate(&mut world, Section::About);

        // Cross the zero-length home segment plus half of the terrace span.
        let mut events = Vec::new();
        apply(&mut world, Command::AdvanceWalk { travel: 0.6 }, &mut events);

        let position = query::character_position(&world);
        assert!((position.z - -0.6).abs() < 1e-4, "z was {}", position.z);
        assert!((position.y - 7.05).abs() < 1e-4);
        assert!(query::walk_heading(&world).is_some());
    }

    #[test]
    fn zero_or_invalid_travel_is_ignored() {
        let mut world = World::new();
        let _ = navigate(&mut world, Section::About);
        let before = query::walk_view(&world).expect("walk installed").segment();

        let mut events = Vec::new();
        apply(&mut world, Command::AdvanceWalk { travel: 0.0 }, &mut events);
        apply(&mut world, Command::AdvanceWalk { travel: -1.0 }, &mut events);
        apply(
            &mut world,
            Command::AdvanceWalk {
                travel: f32::NAN,
            },
            &mut events,
        );
        assert!(events.is_empty());
        assert_eq!(
            query::walk_view(&world).expect("walk still active").segment(),
            before
        );
    }
}
