//! Tour scripts: timed command schedules decoded from TOML.
//!
//! A script is a version header plus a list of steps ordered by simulated
//! time. Each step expands to the commands an interactive visitor would have
//! produced at that moment, so replaying a script drives the world through
//! the exact state sequence of a live session.

use std::time::Duration;

use monument_core::{Command, Section};
use serde::Deserialize;
use thiserror::Error;

const SUPPORTED_SCRIPT_VERSION: u32 = 1;

/// Built-in tour replayed when no script file is provided: visit the arts
/// door, browse a sub-section, come home, strand the ring at 180, and finish
/// on the about platform.
const BUILTIN_TOUR: &str = r#"
version = 1

[[steps]]
at_ms = 0
action = "hover"
section = "arts"

[[steps]]
at_ms = 400
action = "navigate"
section = "arts"

[[steps]]
at_ms = 7500
action = "navigate"
section = "dance"

[[steps]]
at_ms = 9000
action = "back"

[[steps]]
at_ms = 10000
action = "back"

[[steps]]
at_ms = 18000
action = "rotate"
degrees = 180

[[steps]]
at_ms = 18500
action = "navigate"
section = "projects"

[[steps]]
at_ms = 20000
action = "back"

[[steps]]
at_ms = 22000
action = "rotate"
degrees = 0

[[steps]]
at_ms = 23000
action = "navigate"
section = "about"
"#;

/// Decoded tour: steps sorted by their scheduled time.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TourScript {
    steps: Vec<TourStep>,
}

impl TourScript {
    /// Decodes a script from its TOML representation.
    pub(crate) fn decode(contents: &str) -> Result<Self, TourScriptError> {
        let manifest: Manifest = toml::from_str(contents)?;
        if manifest.version != SUPPORTED_SCRIPT_VERSION {
            return Err(TourScriptError::UnsupportedVersion(manifest.version));
        }
        if manifest.steps.is_empty() {
            return Err(TourScriptError::Empty);
        }

        let mut previous = 0;
        for (index, step) in manifest.steps.iter().enumerate() {
            if step.at_ms < previous {
                return Err(TourScriptError::OutOfOrder {
                    index,
                    at_ms: step.at_ms,
                });
            }
            previous = step.at_ms;
        }

        Ok(Self {
            steps: manifest
                .steps
                .into_iter()
                .map(|step| TourStep {
                    at: Duration::from_millis(step.at_ms),
                    action: step.action,
                })
                .collect(),
        })
    }

    /// The tour replayed when no script file is provided.
    pub(crate) fn builtin() -> Self {
        Self::decode(BUILTIN_TOUR).expect("built-in tour always decodes")
    }

    /// Steps in schedule order.
    pub(crate) fn steps(&self) -> &[TourStep] {
        &self.steps
    }

    /// Scheduled time of the final step.
    pub(crate) fn end(&self) -> Duration {
        self.steps.last().map_or(Duration::ZERO, |step| step.at)
    }
}

/// Single scheduled visitor interaction.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TourStep {
    at: Duration,
    action: Action,
}

impl TourStep {
    /// Simulated time the step fires at.
    pub(crate) fn at(&self) -> Duration {
        self.at
    }

    /// Commands the interaction expands to, in submission order.
    pub(crate) fn commands(&self) -> Vec<Command> {
        match self.action {
            Action::Navigate { section } => vec![Command::NavigateTo { section }],
            Action::Back => vec![Command::GoBack],
            Action::Hover { section } => vec![Command::HoverSection { section }],
            // A scripted rotation is a whole drag session: grab, turn, release.
            Action::Rotate { degrees } => vec![
                Command::BeginRingDrag,
                Command::DragRing { degrees },
                Command::EndRingDrag,
            ],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
enum Action {
    Navigate {
        section: Section,
    },
    Back,
    Hover {
        #[serde(default)]
        section: Option<Section>,
    },
    Rotate {
        degrees: i32,
    },
}

#[derive(Debug, Deserialize)]
struct Manifest {
    version: u32,
    #[serde(default)]
    steps: Vec<ManifestStep>,
}

#[derive(Debug, Deserialize)]
struct ManifestStep {
    at_ms: u64,
    #[serde(flatten)]
    action: Action,
}

/// Errors that can occur while decoding tour scripts.
#[derive(Debug, Error)]
pub(crate) enum TourScriptError {
    /// The script contained no steps.
    #[error("tour script contains no steps")]
    Empty,
    /// The TOML payload could not be parsed.
    #[error("could not parse tour script: {0}")]
    Invalid(#[from] toml::de::Error),
    /// The version header named an unsupported revision.
    #[error("tour script version {0} is not supported")]
    UnsupportedVersion(u32),
    /// A step was scheduled earlier than its predecessor.
    #[error("tour step {index} at {at_ms} ms is out of order")]
    OutOfOrder {
        /// Zero-based index of the offending step.
        index: usize,
        /// Scheduled time of the offending step.
        at_ms: u64,
    },
}
