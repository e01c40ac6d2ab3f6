//! Command-line runner: plays a scenario file headlessly and prints a JSON
//! report of where every guard ended up and when it first saw the target.
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use glam::Vec2;
use log::info;
use lookout::{
    init_logging, DebugOverlay, GuardId, PatrolCursor, Pose, Scenario, VisibilityPolygon,
};
use serde::Serialize;

/// Simulate guard patrols and report who spots the target
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Scenario file to run
    #[arg(short, long)]
    scenario: PathBuf,
    /// Number of ticks to simulate
    #[arg(short, long, default_value_t = 600)]
    ticks: u32,
    /// Seconds per tick
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,
    /// Include each guard's final visibility mesh in the report
    #[arg(long)]
    mesh: bool,
    /// Include each guard's debug overlay in the report
    #[arg(long)]
    overlay: bool,
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct GuardReport {
    id: GuardId,
    name: String,
    pose: Pose,
    patrol: PatrolCursor,
    sightings: u32,
    first_sighting_tick: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mesh: Option<VisibilityPolygon>,
    #[serde(skip_serializing_if = "Option::is_none")]
    overlay: Option<DebugOverlay>,
}

#[derive(Serialize)]
struct Report {
    ticks: u32,
    dt: f32,
    target: Option<Vec2>,
    guards: Vec<GuardReport>,
}

fn run(args: &Args) -> Result<Report> {
    let scenario = Scenario::from_path(&args.scenario)
        .with_context(|| format!("loading {}", args.scenario.display()))?;
    let world = scenario.build_world();
    let (mut roster, names) = scenario
        .build_roster()
        .context("building guards from scenario")?;
    info!(
        "running {} guards against {} obstacles for {} ticks",
        roster.len(),
        world.obstacles().len(),
        args.ticks
    );

    let mut reports: Vec<GuardReport> = names
        .into_iter()
        .map(|(id, name)| GuardReport {
            id,
            name,
            pose: Pose::default(),
            patrol: PatrolCursor::default(),
            sightings: 0,
            first_sighting_tick: None,
            mesh: None,
            overlay: None,
        })
        .collect();

    for tick in 0..args.ticks {
        for event in roster.tick_all(args.dt, &world, scenario.target) {
            let Some(report) = reports.iter_mut().find(|report| report.id == event.guard) else {
                continue;
            };
            if report.first_sighting_tick.is_none() {
                info!(
                    "tick {tick}: {} spotted the target at {:?} from {:?}",
                    report.name, event.target, event.guard_pose.position
                );
                report.first_sighting_tick = Some(tick);
            }
            report.sightings += 1;
        }
    }

    for (id, guard) in roster.iter() {
        let Some(report) = reports.iter_mut().find(|report| report.id == id) else {
            continue;
        };
        report.pose = guard.pose();
        report.patrol = guard.patrol().cursor();
        if args.mesh {
            report.mesh = Some(guard.polygon().clone());
        }
        if args.overlay {
            report.overlay = Some(DebugOverlay::for_guard(guard));
        }
    }

    Ok(Report {
        ticks: args.ticks,
        dt: args.dt,
        target: scenario.target,
        guards: reports,
    })
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let report = run(&args)?;
    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &report).context("writing report")?;
    writeln!(out).context("writing report")?;
    Ok(())
}
