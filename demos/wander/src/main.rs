//! wander — drives a few agents through a small meadow of wander areas.
//!
//! Usage: `wander [areas.csv]`.  Without an argument the built-in layout
//! below is used.  Set `RUST_LOG=debug` to see every destination choice.

use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use wa_agent::{WanderObserver, WanderSimBuilder};
use wa_area::{
    ArrivalEvent, ArrivalObserver, ArrivalOutcome, ArrivalState, Target, WanderWorld,
    WaypointSet, load_areas_csv, load_areas_reader,
};
use wa_core::{AgentId, NodeId, Vec3, WanderConfig};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:        u64 = 42;
const TICK_SECS:   f32 = 0.1;
const TOTAL_TICKS: u64 = 6_000; // 10 simulated minutes
const AGENT_SPEED: f32 = 2.5;

// ── Area layout ───────────────────────────────────────────────────────────────

// Three independent circuits, one agent each: a group never has two
// controllers.  Meadow (0) groups a pond and a barn yard and sends 30% of
// arrivals to the gate; the orchard (3) and the ridge (4) each have their own
// waypoint.  Every waypoint leads straight back to its group.
const AREAS_CSV: &str = "\
id,name,parent,shape,radius,size_x,size_y,size_z,pos_x,pos_y,pos_z,yaw_deg,scale_x,scale_y,scale_z,stop_distance,slow_distance,wander_weight,next\n\
0,meadow,,point,,,,,0,0,0,,,,,0.75,3,0.7,waypoint:0\n\
1,pond,0,circle,6,,,,12,0,0,,,,,,,,\n\
2,barn,0,box,,8,0,5,-10,0,4,30,,,,,,,\n\
3,orchard,,box,,20,0,12,0,0,-40,15,,,,1,3,0.8,waypoint:1\n\
4,ridge,,circle,4,,,,0,0,45,,2,1,1,1,4,0.5,waypoint:2\n\
";

// ── Observer ──────────────────────────────────────────────────────────────────

#[derive(Default)]
struct ArrivalLog {
    arrivals:   usize,
    rerolls:    usize,
    departures: usize,
}

impl ArrivalObserver for ArrivalLog {
    fn on_target_arrived(&mut self, event: &ArrivalEvent) {
        info!(
            agent = %event.agent,
            at = %event.reported_by,
            group = %event.group,
            destination = ?event.destination,
            "arrived"
        );
    }
}

impl WanderObserver for ArrivalLog {
    fn on_agent_arrived(&mut self, tick: u64, agent: AgentId, outcome: &ArrivalOutcome) {
        self.arrivals += 1;
        match outcome.state {
            ArrivalState::SeekingWithinArea => self.rerolls += 1,
            ArrivalState::AdvancingToNextWaypoint => {
                self.departures += 1;
                info!(tick, agent = %agent, next = %outcome.next_target, "leaving group");
            }
        }
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let areas = match std::env::args().nth(1) {
        Some(path) => load_areas_csv(Path::new(&path))
            .with_context(|| format!("loading areas from {path}"))?,
        None => load_areas_reader(Cursor::new(AREAS_CSV)).context("loading built-in areas")?,
    };

    let mut waypoints = WaypointSet::new();
    waypoints.add(Vec3::new(-30.0, 0.0, 0.0), 0.5, 2.0, vec![Target::Area(NodeId(0))]);
    waypoints.add(Vec3::new(25.0, 0.0, -40.0), 0.5, 2.0, vec![Target::Area(NodeId(3))]);
    waypoints.add(Vec3::new(0.0, 0.0, 70.0), 0.5, 2.0, vec![Target::Area(NodeId(4))]);

    let config = WanderConfig {
        seed:        SEED,
        tick_secs:   TICK_SECS,
        total_ticks: TOTAL_TICKS,
        agent_speed: AGENT_SPEED,
    };

    let mut sim = WanderSimBuilder::new(config, WanderWorld::new(areas, waypoints))
        .agent(Vec3::ZERO, Target::Area(NodeId(0)))
        .agent(Vec3::new(0.0, 0.0, -35.0), Target::Area(NodeId(3)))
        .agent_with_speed(Vec3::new(0.0, 0.0, 40.0), Target::Area(NodeId(4)), 4.0)
        .build()
        .context("building wander sim")?;

    let mut log = ArrivalLog::default();
    sim.run(&mut log)?;

    for agent in sim.agents() {
        info!(
            agent = %agent.id,
            position = ?agent.position,
            target = %agent.target(),
            arrivals = agent.arrivals(),
            "final state"
        );
    }
    info!(
        simulated_secs = sim.config().duration_secs(),
        arrivals = log.arrivals,
        rerolls = log.rerolls,
        departures = log.departures,
        "run summary"
    );
    Ok(())
}
