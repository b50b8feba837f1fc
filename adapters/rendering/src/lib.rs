#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared presentation contracts for monument renderers.
//!
//! Renderers never touch the world directly; they read the camera framing
//! for the active section and a character pose derived from the navigation
//! state. Both are plain data so any backend (native, terminal, web) can
//! consume them.

use std::f32::consts::PI;

use glam::Vec3;
use monument_core::{Section, SectionGroup};
use monument_world::{query, World};

/// Zoom baseline the per-section zoom values are calibrated against.
pub const BASE_ZOOM: f32 = 45.0;

/// Camera framing for a section: a scene-group pan offset plus a zoom level.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraTarget {
    /// Offset applied to the scene group so the section is centered.
    pub pan: Vec3,
    /// Orthographic zoom relative to [`BASE_ZOOM`].
    pub zoom: f32,
}

impl CameraTarget {
    const fn new(x: f32, y: f32, z: f32, zoom: f32) -> Self {
        Self {
            pan: Vec3::new(x, y, z),
            zoom,
        }
    }

    /// Scales the zoom for a viewport whose baseline differs from desktop.
    #[must_use]
    pub fn scaled_zoom(&self, base_zoom: f32) -> f32 {
        self.zoom * base_zoom / BASE_ZOOM
    }
}

const MAIN_TARGET: CameraTarget = CameraTarget::new(0.0, -5.5, 0.0, 45.0);
const ARTS_TARGET: CameraTarget = CameraTarget::new(0.0, -1.5, -2.1, 80.0);
const PROJECTS_TARGET: CameraTarget = CameraTarget::new(-2.1, -1.5, 0.0, 80.0);
const ABOUT_TARGET: CameraTarget = CameraTarget::new(0.0, -9.0, 0.0, 70.0);

/// Camera framing for the provided section.
///
/// Sub-sections share their parent portal's framing; anything that collapses
/// onto the overview group uses the overview target.
#[must_use]
pub const fn camera_target_for(section: Section) -> CameraTarget {
    match section.group() {
        SectionGroup::Main => MAIN_TARGET,
        SectionGroup::Arts => ARTS_TARGET,
        SectionGroup::Projects => PROJECTS_TARGET,
        SectionGroup::About => ABOUT_TARGET,
    }
}

/// Fixed look direction used while a portal is hovered or active.
#[derive(Clone, Copy, Debug, PartialEq)]
struct LookDir {
    body_yaw: f32,
    head_pitch: f32,
}

// The isometric camera sits along [1, 1, 1]; yaw follows the atan2
// convention with +Z at zero. Negative pitch looks up.
const LOOK_ABOUT: LookDir = LookDir {
    body_yaw: PI / 4.0,
    head_pitch: -0.35,
};
const LOOK_ARTS: LookDir = LookDir {
    body_yaw: -PI / 4.0,
    head_pitch: 0.5,
};
const LOOK_PROJECTS: LookDir = LookDir {
    body_yaw: 3.0 * PI / 4.0,
    head_pitch: 0.5,
};

/// Character pose a renderer needs for a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CharacterPose {
    /// World-space position, interpolated along the walk while moving.
    pub position: Vec3,
    /// Horizontal body rotation, atan2 convention with +Z at zero.
    pub body_yaw: f32,
    /// Vertical head tilt; negative looks up.
    pub head_pitch: f32,
    /// Whether the walking animation should play.
    pub walking: bool,
}

/// Derives the character pose from the current navigation state.
///
/// While walking, the body faces along the active path segment. While idle,
/// a hovered portal wins over the active section's portal; on the bare
/// overview the character faces the camera.
#[must_use]
pub fn character_pose(world: &World) -> CharacterPose {
    let position = query::character_position(world);
    let walking = query::is_walking(world);

    if walking {
        let (body_yaw, head_pitch) = match query::walk_heading(world) {
            Some(heading) => (heading.x.atan2(heading.z), pitch_along(heading)),
            None => (PI / 4.0, 0.0),
        };
        return CharacterPose {
            position,
            body_yaw,
            head_pitch,
            walking,
        };
    }

    let focus = query::hovered_section(world)
        .map(Section::group)
        .filter(|group| *group != SectionGroup::Main)
        .or_else(|| {
            let group = query::active_section(world).group();
            (group != SectionGroup::Main).then_some(group)
        });

    let look = match focus {
        Some(SectionGroup::Arts) => LOOK_ARTS,
        Some(SectionGroup::Projects) => LOOK_PROJECTS,
        Some(SectionGroup::About) => LOOK_ABOUT,
        Some(SectionGroup::Main) | None => LookDir {
            body_yaw: PI / 4.0,
            head_pitch: 0.0,
        },
    };

    CharacterPose {
        position,
        body_yaw: look.body_yaw,
        head_pitch: look.head_pitch,
        walking,
    }
}

/// Head tilt that follows the slope of the walk direction.
fn pitch_along(heading: Vec3) -> f32 {
    let horizontal = (heading.x * heading.x + heading.z * heading.z).sqrt();
    (-heading.y).atan2(horizontal).clamp(-0.5, 0.5)
}
