//! A single wander area and its configuration.

use glam::Vec3;
use wa_core::{NodeId, Transform};

use crate::arrival::clamp_weight;
use crate::{AreaShape, Target};

/// RGBA gizmo color.  The core never draws; it only carries the value so a
/// host can paint every child in its root's color.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DebugColor(pub [f32; 4]);

impl Default for DebugColor {
    fn default() -> Self {
        DebugColor([1.0, 0.92, 0.016, 1.0])
    }
}

/// Configuration used to insert an area into an [`AreaRegistry`][crate::AreaRegistry].
#[derive(Clone, Debug, PartialEq)]
pub struct AreaSpec {
    pub name:           String,
    pub shape:          AreaShape,
    /// Local transform relative to `parent` (or the world, for scene roots).
    pub local:          Transform,
    /// Scene parent.  The group root is resolved from this chain.
    pub parent:         Option<NodeId>,
    pub stop_distance:  f32,
    pub slow_distance:  f32,
    /// Probability in `[0, 1]` of re-rolling inside the group on arrival when
    /// chained waypoints exist.
    pub wander_weight:  f32,
    pub debug_color:    DebugColor,
    /// Externally chained targets the group may leave toward.
    pub next_waypoints: Vec<Target>,
}

impl Default for AreaSpec {
    fn default() -> Self {
        Self {
            name:           String::new(),
            shape:          AreaShape::Point,
            local:          Transform::IDENTITY,
            parent:         None,
            stop_distance:  1.0,
            slow_distance:  2.0,
            wander_weight:  1.0,
            debug_color:    DebugColor::default(),
            next_waypoints: Vec::new(),
        }
    }
}

impl AreaSpec {
    pub fn circle(radius: f32) -> Self {
        Self { shape: AreaShape::Circle { radius }, ..Self::default() }
    }

    pub fn boxed(size: Vec3) -> Self {
        Self { shape: AreaShape::Box { size }, ..Self::default() }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn at(mut self, translation: Vec3) -> Self {
        self.local.translation = translation;
        self
    }

    pub fn with_local(mut self, local: Transform) -> Self {
        self.local = local;
        self
    }

    pub fn child_of(mut self, parent: NodeId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn distances(mut self, stop: f32, slow: f32) -> Self {
        self.stop_distance = stop;
        self.slow_distance = slow;
        self
    }

    pub fn wander_weight(mut self, weight: f32) -> Self {
        self.wander_weight = weight;
        self
    }

    pub fn chained(mut self, targets: impl IntoIterator<Item = Target>) -> Self {
        self.next_waypoints = targets.into_iter().collect();
        self
    }
}

/// Where an arriving agent goes next.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ArrivalState {
    /// Re-rolling destinations inside the current group.
    SeekingWithinArea,
    /// Leaving the group for a chained waypoint.
    AdvancingToNextWaypoint,
}

/// Stop/slow distances and color as resolved through the group root.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Resolved {
    pub stop_distance: f32,
    pub slow_distance: f32,
    pub debug_color:   DebugColor,
}

/// A wander area as stored in the registry.
///
/// Group state (`destination`, `next_target`, `state`) is meaningful on the
/// root only; children never hold their own copy.
#[derive(Clone, Debug)]
pub struct AreaNode {
    pub(crate) spec:     AreaSpec,
    pub(crate) active:   bool,

    // ── Resolved by `AreaRegistry::rebuild` ──────────────────────────────
    pub(crate) root:     NodeId,
    pub(crate) children: Vec<NodeId>,
    pub(crate) resolved: Resolved,

    // ── Root-owned group state ───────────────────────────────────────────
    pub(crate) destination:      Vec3,
    pub(crate) destination_area: Option<NodeId>,
    pub(crate) next_target:      Target,
    pub(crate) state:            ArrivalState,
}

impl AreaNode {
    pub(crate) fn new(id: NodeId, mut spec: AreaSpec) -> Self {
        spec.shape = spec.shape.validated();
        spec.wander_weight = clamp_weight(spec.wander_weight);
        let resolved = Resolved {
            stop_distance: spec.stop_distance,
            slow_distance: spec.slow_distance,
            debug_color:   spec.debug_color,
        };
        Self {
            spec,
            active: true,
            root: id,
            children: Vec::new(),
            resolved,
            destination: Vec3::ZERO,
            destination_area: None,
            next_target: Target::Area(id),
            state: ArrivalState::SeekingWithinArea,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.spec.name
    }

    #[inline]
    pub fn shape(&self) -> AreaShape {
        self.spec.shape
    }

    #[inline]
    pub fn local(&self) -> &Transform {
        &self.spec.local
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.spec.parent
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// This node's own configured weight (the group uses its root's).
    #[inline]
    pub fn wander_weight(&self) -> f32 {
        self.spec.wander_weight
    }

    #[inline]
    pub fn next_waypoints(&self) -> &[Target] {
        &self.spec.next_waypoints
    }

    /// Values inherited from the root at the last rebuild.
    #[inline]
    pub fn resolved(&self) -> &Resolved {
        &self.resolved
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Group members; empty unless this node is a root.
    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}
