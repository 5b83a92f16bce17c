//! CSV area loader.
//!
//! # CSV format
//!
//! One row per area.  `id` must be dense and in file order (`0, 1, 2, …`);
//! `parent` may reference any row, earlier or later.
//!
//! ```csv
//! id,name,parent,shape,radius,size_x,size_y,size_z,pos_x,pos_y,pos_z,yaw_deg,scale_x,scale_y,scale_z,stop_distance,slow_distance,wander_weight,next
//! 0,meadow,,point,,,,,0,0,0,,,,,1.5,4,0.7,area:3;waypoint:0
//! 1,pond,0,circle,5,,,,10,0,0,,,,,,,,
//! 2,barn,0,box,,6,0,4,-10,0,2,45,,,,,,,
//! 3,ridge,,circle,8,,,,60,0,0,,,,,,,,
//! ```
//!
//! Empty optional columns take their defaults: zero extents and yaw, unit
//! scale, `stop_distance = 1`, `slow_distance = 2`, `wander_weight = 1`.
//!
//! **`shape`**: `circle` | `box` | `point`.
//!
//! **`next`**: `;`-separated `area:<id>` / `waypoint:<id>` chained targets.
//! Area ids must exist in the file; waypoint ids are external and checked
//! by [`WanderWorld::check_chains`](crate::WanderWorld::check_chains).
//!
//! A non-finite `wander_weight` (`NaN`, `inf`) is replaced by the default.

use std::io::Read;
use std::path::Path;

use glam::Vec3;
use serde::Deserialize;
use tracing::debug;
use wa_core::{NodeId, Transform, WaypointId};

use crate::{AreaError, AreaRegistry, AreaShape, AreaSpec, DebugColor, Target};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct AreaRecord {
    id:            u32,
    #[serde(default)]
    name:          String,
    parent:        Option<u32>,
    shape:         String,
    radius:        Option<f32>,
    size_x:        Option<f32>,
    size_y:        Option<f32>,
    size_z:        Option<f32>,
    pos_x:         Option<f32>,
    pos_y:         Option<f32>,
    pos_z:         Option<f32>,
    yaw_deg:       Option<f32>,
    scale_x:       Option<f32>,
    scale_y:       Option<f32>,
    scale_z:       Option<f32>,
    stop_distance: Option<f32>,
    slow_distance: Option<f32>,
    wander_weight: Option<f32>,
    next:          Option<String>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load an [`AreaRegistry`] from a CSV file.
pub fn load_areas_csv(path: &Path) -> Result<AreaRegistry, AreaError> {
    let file = std::fs::File::open(path).map_err(AreaError::Io)?;
    load_areas_reader(file)
}

/// Like [`load_areas_csv`] but accepts any `Read` source.
///
/// Membership is rebuilt once after every row is placed; destinations are
/// not rolled (call [`AreaRegistry::initialize`]).
pub fn load_areas_reader<R: Read>(reader: R) -> Result<AreaRegistry, AreaError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut rows: Vec<AreaRecord> = Vec::new();

    for result in csv_reader.deserialize::<AreaRecord>() {
        let row = result.map_err(|e| AreaError::Parse(e.to_string()))?;
        if row.id as usize != rows.len() {
            return Err(AreaError::Parse(format!(
                "area ids must be dense and in order: expected {}, got {}",
                rows.len(),
                row.id
            )));
        }
        rows.push(row);
    }

    let count = rows.len() as u32;
    let mut registry = AreaRegistry::new();
    let mut parents: Vec<Option<NodeId>> = Vec::with_capacity(rows.len());

    // ── Insert unparented, then link (parents may come later in the file) ─
    for row in rows {
        let parent = row.parent.map(NodeId);
        if let Some(p) = parent {
            if p.0 >= count {
                return Err(AreaError::UnknownNode(p));
            }
        }
        parents.push(parent);

        let next = match row.next.as_deref() {
            Some(s) => parse_targets(s, count)?,
            None => Vec::new(),
        };

        let local = Transform {
            translation: Vec3::new(
                row.pos_x.unwrap_or(0.0),
                row.pos_y.unwrap_or(0.0),
                row.pos_z.unwrap_or(0.0),
            ),
            ..Transform::IDENTITY
        }
        .with_yaw_deg(row.yaw_deg.unwrap_or(0.0))
        .with_scale(Vec3::new(
            row.scale_x.unwrap_or(1.0),
            row.scale_y.unwrap_or(1.0),
            row.scale_z.unwrap_or(1.0),
        ));

        let spec = AreaSpec {
            name:           row.name,
            shape:          parse_shape(&row.shape, row.radius, [row.size_x, row.size_y, row.size_z])?,
            local,
            parent:         None,
            stop_distance:  row.stop_distance.unwrap_or(1.0),
            slow_distance:  row.slow_distance.unwrap_or(2.0),
            wander_weight:  row.wander_weight.unwrap_or(1.0),
            debug_color:    DebugColor::default(),
            next_waypoints: next,
        };
        registry.insert(spec)?;
    }

    for (i, parent) in parents.into_iter().enumerate() {
        if parent.is_some() {
            registry.link_parent(NodeId(i as u32), parent)?;
        }
    }
    registry.rebuild();

    debug!(areas = registry.len(), groups = registry.roots().len(), "loaded areas");
    Ok(registry)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_shape(s: &str, radius: Option<f32>, size: [Option<f32>; 3]) -> Result<AreaShape, AreaError> {
    match s.trim() {
        "circle" => Ok(AreaShape::Circle { radius: radius.unwrap_or(0.0) }),
        "box" => Ok(AreaShape::Box {
            size: Vec3::new(
                size[0].unwrap_or(0.0),
                size[1].unwrap_or(0.0),
                size[2].unwrap_or(0.0),
            ),
        }),
        "point" => Ok(AreaShape::Point),
        other => Err(AreaError::Parse(format!(
            "invalid shape {other:?}: expected \"circle\", \"box\", or \"point\""
        ))),
    }
}

fn parse_targets(s: &str, area_count: u32) -> Result<Vec<Target>, AreaError> {
    s.split(';')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| parse_target(t, area_count))
        .collect()
}

fn parse_target(s: &str, area_count: u32) -> Result<Target, AreaError> {
    let bad = || AreaError::Parse(format!(
        "invalid target {s:?}: expected \"area:<id>\" or \"waypoint:<id>\""
    ));
    let (kind, id) = s.split_once(':').ok_or_else(bad)?;
    let id: u32 = id.trim().parse().map_err(|_| bad())?;
    match kind.trim() {
        "area" if id < area_count => Ok(Target::Area(NodeId(id))),
        "area" => Err(AreaError::UnknownNode(NodeId(id))),
        "waypoint" => Ok(Target::Waypoint(WaypointId(id))),
        _ => Err(bad()),
    }
}
