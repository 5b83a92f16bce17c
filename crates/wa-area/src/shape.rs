//! Area geometry and local-space sampling.

use glam::Vec3;
use wa_core::WanderRng;

/// The geometric kind of a wander area.
///
/// `Point` is the degenerate "unknown / default" kind: it has no extent and
/// always samples the node's own origin.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AreaShape {
    #[default]
    Point,
    /// Disk in the local XZ plane.
    Circle { radius: f32 },
    /// Axis-aligned box in local space; `size` is the full edge length.
    Box { size: Vec3 },
}

impl AreaShape {
    /// Copy with negative (or NaN) extents clamped to zero.
    pub fn validated(self) -> Self {
        match self {
            AreaShape::Point => AreaShape::Point,
            AreaShape::Circle { radius } => AreaShape::Circle { radius: non_negative(radius) },
            AreaShape::Box { size } => AreaShape::Box {
                size: Vec3::new(non_negative(size.x), non_negative(size.y), non_negative(size.z)),
            },
        }
    }

    /// `true` if [`validated`](Self::validated) would change anything.
    pub fn needs_clamp(&self) -> bool {
        self.validated() != *self
    }

    /// Draw a point in local space.
    ///
    /// Assumes extents were already validated.
    pub fn sample_local(&self, rng: &mut WanderRng) -> Vec3 {
        match *self {
            AreaShape::Point => Vec3::ZERO,
            AreaShape::Circle { radius } => {
                // sqrt keeps the density uniform over the disk area
                let r = radius * rng.unit().sqrt();
                let theta = rng.unit() * std::f32::consts::TAU;
                Vec3::new(r * theta.cos(), 0.0, r * theta.sin())
            }
            AreaShape::Box { size } => {
                let half = size * 0.5;
                Vec3::new(
                    rng.symmetric(half.x),
                    rng.symmetric(half.y),
                    rng.symmetric(half.z),
                )
            }
        }
    }
}

#[inline]
fn non_negative(v: f32) -> f32 {
    if v > 0.0 { v } else { 0.0 }
}
