#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that boots the monument experience and replays a
//! tour script against the headless navigation core.

mod tour;

use std::{fs, path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use monument_core::{Command, Event};
use monument_rendering::{camera_target_for, character_pose};
use monument_system_bootstrap::Bootstrap;
use monument_system_locomotion::{Config as LocomotionConfig, Locomotion, DEFAULT_WALK_SPEED};
use monument_world::{self as world, query, World};

use crate::tour::TourScript;

/// Duration of a single simulated frame.
const FRAME: Duration = Duration::from_millis(50);

#[derive(Debug, Parser)]
#[command(name = "monument", about = "Replays a scripted tour of the monument")]
struct Cli {
    /// Path to a TOML tour script; the built-in tour runs when omitted.
    #[arg(long)]
    script: Option<PathBuf>,

    /// Walking pace in world units per simulated second.
    #[arg(long, default_value_t = DEFAULT_WALK_SPEED)]
    walk_speed: f32,

    /// Simulated seconds to keep running after the last scripted step, so
    /// walks and deferred switches can land.
    #[arg(long, default_value_t = 10)]
    linger_secs: u64,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let script = match &cli.script {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("failed to read tour script at {}", path.display()))?;
            TourScript::decode(&contents)
                .with_context(|| format!("failed to decode tour script at {}", path.display()))?
        }
        None => TourScript::builtin(),
    };

    run(&script, cli.walk_speed, Duration::from_secs(cli.linger_secs));
    Ok(())
}

fn run(script: &TourScript, walk_speed: f32, linger: Duration) {
    let mut world = World::new();
    let bootstrap = Bootstrap::default();
    let locomotion = Locomotion::new(LocomotionConfig::new(walk_speed));

    println!("{}", bootstrap.welcome_banner(&world));
    info!(
        "tour starts at {:?} with {} waypoints",
        bootstrap.character_node(&world),
        bootstrap.layout().len()
    );

    let end = script.end().saturating_add(linger);
    let mut clock = Duration::ZERO;
    let mut next_step = 0;
    let steps = script.steps();

    while clock < end {
        let mut events = Vec::new();

        while next_step < steps.len() && steps[next_step].at() <= clock {
            for command in steps[next_step].commands() {
                world::apply(&mut world, command, &mut events);
            }
            next_step += 1;
        }

        world::apply(&mut world, Command::Tick { dt: FRAME }, &mut events);

        let mut follow_ups = Vec::new();
        locomotion.handle(&events, query::is_walking(&world), &mut follow_ups);
        for follow_up in follow_ups {
            world::apply(&mut world, follow_up, &mut events);
        }

        for event in &events {
            report(event, clock);
        }
        clock = clock.saturating_add(FRAME);
    }

    let pose = character_pose(&world);
    let camera = camera_target_for(query::active_section(&world));
    println!(
        "tour finished on {:?} at {:?} ({:.2}, {:.2}, {:.2})",
        query::active_section(&world),
        query::character_node(&world),
        pose.position.x,
        pose.position.y,
        pose.position.z,
    );
    println!(
        "camera pan ({:.1}, {:.1}, {:.1}) zoom {:.0}, history depth {}",
        camera.pan.x,
        camera.pan.y,
        camera.pan.z,
        camera.zoom,
        query::history_depth(&world),
    );
}

fn report(event: &Event, clock: Duration) {
    let at = clock.as_millis();
    match event {
        Event::SectionChanged { from, to } => info!("[{at} ms] section {from:?} -> {to:?}"),
        Event::WalkStarted { from, to } => info!("[{at} ms] walk {from:?} -> {to:?}"),
        Event::WalkCompleted { node } => info!("[{at} ms] arrived at {node:?}"),
        Event::CharacterTeleported { node } => info!("[{at} ms] placed at {node:?}"),
        Event::RingSettled { angle } => info!("[{at} ms] ring settled at {}", angle.degrees()),
        Event::WalkAborted { node } => debug!("[{at} ms] walk ended early at {node:?}"),
        Event::CharacterAdvanced { from, to } => debug!("[{at} ms] step {from:?} -> {to:?}"),
        Event::HoverChanged { section } => debug!("[{at} ms] hover {section:?}"),
        Event::TimeAdvanced { .. } => {}
    }
}
