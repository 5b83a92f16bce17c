//! The `AreaRegistry` — explicit owner of every wander area and of group
//! membership.
//!
//! Areas are stored densely and addressed by [`NodeId`].  Nodes are never
//! physically removed; [`deactivate`](AreaRegistry::deactivate) takes a node
//! (and its scene subtree) out of every group, and
//! [`activate`](AreaRegistry::activate) puts it back.
//!
//! # Membership
//!
//! Each node's scene `parent` chain decides its group.  The top-most live
//! ancestor is the group root; the root lists every live node below it as a
//! child.  Membership is recomputed by [`rebuild`](AreaRegistry::rebuild),
//! which every mutating operation calls, so it is never stale after a
//! reparent or an activation change.

use glam::{Affine3A, Vec3};
use tracing::{debug, trace, warn};
use wa_core::{NodeId, Transform, WaError, WanderRng};

use crate::arrival::clamp_weight;
use crate::{AreaError, AreaHandle, AreaNode, AreaResult, AreaShape, AreaSpec, ArrivalState, Resolved, Target};

#[derive(Clone, Debug, Default)]
pub struct AreaRegistry {
    nodes: Vec<AreaNode>,
}

impl AreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    pub fn get(&self, id: NodeId) -> AreaResult<&AreaNode> {
        self.nodes.get(id.index()).ok_or(AreaError::UnknownNode(id))
    }

    /// All nodes in id order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &AreaNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i as u32), n))
    }

    /// Ids of every live group root.
    pub fn roots(&self) -> Vec<NodeId> {
        self.iter()
            .filter(|&(id, n)| n.root == id && self.is_live(id))
            .map(|(id, _)| id)
            .collect()
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Add an area.  Extents are clamped, the node starts active, and
    /// membership is rebuilt.
    ///
    /// The group's destination starts at the root's world position until the
    /// first [`next_destination`](Self::next_destination).
    pub fn insert(&mut self, spec: AreaSpec) -> AreaResult<NodeId> {
        if let Some(parent) = spec.parent {
            self.check(parent)?;
        }
        if spec.shape.needs_clamp() {
            warn!(name = %spec.name, shape = ?spec.shape, "negative area extents clamped to zero");
        }
        if !spec.wander_weight.is_finite() {
            warn!(name = %spec.name, weight = spec.wander_weight, "non-finite wander weight replaced by 1");
        }

        let id = NodeId::try_from(self.nodes.len())
            .map_err(|_| WaError::Config("area registry is full".into()))?;
        self.nodes.push(AreaNode::new(id, spec));
        let origin = self.world_affine(id).transform_point3(Vec3::ZERO);
        self.nodes[id.index()].destination = origin;
        self.rebuild();
        Ok(id)
    }

    /// Change a node's shape; extents are clamped here, never at sample time.
    pub fn set_shape(&mut self, id: NodeId, shape: AreaShape) -> AreaResult<()> {
        self.check(id)?;
        if shape.needs_clamp() {
            warn!(area = %id, ?shape, "negative area extents clamped to zero");
        }
        self.nodes[id.index()].spec.shape = shape.validated();
        Ok(())
    }

    pub fn set_local(&mut self, id: NodeId, local: Transform) -> AreaResult<()> {
        self.check(id)?;
        self.nodes[id.index()].spec.local = local;
        Ok(())
    }

    pub fn set_wander_weight(&mut self, id: NodeId, weight: f32) -> AreaResult<()> {
        self.check(id)?;
        if !weight.is_finite() {
            warn!(area = %id, weight, "non-finite wander weight replaced by 1");
        }
        self.nodes[id.index()].spec.wander_weight = clamp_weight(weight);
        Ok(())
    }

    pub fn set_next_waypoints(&mut self, id: NodeId, next: Vec<Target>) -> AreaResult<()> {
        self.check(id)?;
        self.nodes[id.index()].spec.next_waypoints = next;
        Ok(())
    }

    /// Set stop/slow distances.  Only a root's values are observable through
    /// the group; a child's take effect if it becomes a root.
    pub fn set_distances(&mut self, id: NodeId, stop: f32, slow: f32) -> AreaResult<()> {
        self.check(id)?;
        let spec = &mut self.nodes[id.index()].spec;
        spec.stop_distance = stop;
        spec.slow_distance = slow;
        self.rebuild();
        Ok(())
    }

    /// Move `id` under `parent` (or to the scene root) and rebuild.
    pub fn reparent(&mut self, id: NodeId, parent: Option<NodeId>) -> AreaResult<()> {
        self.link_parent(id, parent)?;
        self.rebuild();
        Ok(())
    }

    /// Re-enable a node, rebuild, and roll a fresh destination for the group
    /// it joins.  Returns that destination.
    pub fn activate(&mut self, id: NodeId, rng: &mut WanderRng) -> AreaResult<Vec3> {
        self.check(id)?;
        self.nodes[id.index()].active = true;
        self.rebuild();
        let root = self.nodes[id.index()].root;
        Ok(self.roll_destination(root, rng))
    }

    /// Take a node and its scene subtree out of every group.
    pub fn deactivate(&mut self, id: NodeId) -> AreaResult<()> {
        self.check(id)?;
        self.nodes[id.index()].active = false;
        self.rebuild();
        Ok(())
    }

    /// Rebuild membership and roll an initial destination for every group.
    pub fn initialize(&mut self, rng: &mut WanderRng) {
        self.rebuild();
        for root in self.roots() {
            self.roll_destination(root, rng);
        }
    }

    /// Recompute every node's root, the roots' child lists, and the values
    /// children inherit from their root.
    pub fn rebuild(&mut self) {
        let n = self.nodes.len();
        let live: Vec<bool> = (0..n).map(|i| self.is_live(NodeId(i as u32))).collect();

        for i in 0..n {
            let id = NodeId(i as u32);
            let root = if live[i] { self.top_ancestor(id) } else { id };
            let was_root = self.nodes[i].root == id;
            if root == id && !was_root {
                // Promoted to root: start its group state from scratch.
                let origin = self.world_affine(id).transform_point3(Vec3::ZERO);
                let node = &mut self.nodes[i];
                node.destination = origin;
                node.destination_area = None;
                node.next_target = Target::Area(id);
                node.state = ArrivalState::SeekingWithinArea;
            }
            let node = &mut self.nodes[i];
            node.root = root;
            node.children.clear();
        }

        for i in 0..n {
            let root = self.nodes[i].root;
            if root.index() != i {
                self.nodes[root.index()].children.push(NodeId(i as u32));
            }
        }

        for i in 0..n {
            let root = &self.nodes[self.nodes[i].root.index()].spec;
            let resolved = Resolved {
                stop_distance: root.stop_distance,
                slow_distance: root.slow_distance,
                debug_color:   root.debug_color,
            };
            self.nodes[i].resolved = resolved;
        }

        debug!(areas = n, groups = self.roots().len(), "rebuilt area membership");
    }

    /// Borrow one live node as a [`Waypoint`][crate::Waypoint].
    pub fn handle(&mut self, id: NodeId) -> AreaResult<AreaHandle<'_>> {
        self.check(id)?;
        if !self.is_live(id) {
            return Err(AreaError::Inactive(id));
        }
        Ok(AreaHandle::new(self, id))
    }

    // ── Group queries ─────────────────────────────────────────────────────

    pub fn root_of(&self, id: NodeId) -> AreaResult<NodeId> {
        Ok(self.get(id)?.root)
    }

    pub fn is_root(&self, id: NodeId) -> AreaResult<bool> {
        Ok(self.get(id)?.root == id)
    }

    /// `true` if the node and every scene ancestor is active.
    pub fn is_live(&self, id: NodeId) -> bool {
        let mut cur = Some(id);
        while let Some(c) = cur {
            match self.nodes.get(c.index()) {
                Some(node) if node.active => cur = node.spec.parent,
                _ => return false,
            }
        }
        true
    }

    /// The group's current destination, read through the root.
    pub fn destination(&self, id: NodeId) -> AreaResult<Vec3> {
        Ok(self.group(id)?.destination)
    }

    /// The node whose sample produced the current destination, if any yet.
    pub fn destination_area(&self, id: NodeId) -> AreaResult<Option<NodeId>> {
        Ok(self.group(id)?.destination_area)
    }

    pub fn stop_distance(&self, id: NodeId) -> AreaResult<f32> {
        Ok(self.group(id)?.spec.stop_distance)
    }

    pub fn slow_distance(&self, id: NodeId) -> AreaResult<f32> {
        Ok(self.group(id)?.spec.slow_distance)
    }

    pub fn next_target(&self, id: NodeId) -> AreaResult<Target> {
        Ok(self.group(id)?.next_target)
    }

    pub fn arrival_state(&self, id: NodeId) -> AreaResult<ArrivalState> {
        Ok(self.group(id)?.state)
    }

    // ── Geometry ──────────────────────────────────────────────────────────

    /// Local-to-world matrix of `id`, composed through its scene parents.
    pub fn world_transform(&self, id: NodeId) -> AreaResult<Affine3A> {
        self.check(id)?;
        Ok(self.world_affine(id))
    }

    pub fn world_position(&self, id: NodeId) -> AreaResult<Vec3> {
        Ok(self.world_transform(id)?.transform_point3(Vec3::ZERO))
    }

    /// Draw a world-space point inside `id` itself.  No group state changes.
    pub fn sample_point(&self, id: NodeId, rng: &mut WanderRng) -> AreaResult<Vec3> {
        self.check(id)?;
        Ok(self.sample_at(id, rng))
    }

    /// Pick the group's next destination and store it on the root.
    ///
    /// On a root with more than one child a child is chosen uniformly and
    /// sampled; otherwise `id` samples itself.
    pub fn next_destination(&mut self, id: NodeId, rng: &mut WanderRng) -> AreaResult<Vec3> {
        self.check(id)?;
        Ok(self.roll_destination(id, rng))
    }

    // ── Crate-internal (ids already validated) ────────────────────────────

    #[inline]
    pub(crate) fn check(&self, id: NodeId) -> AreaResult<()> {
        if self.contains(id) { Ok(()) } else { Err(AreaError::UnknownNode(id)) }
    }

    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> &AreaNode {
        &self.nodes[id.index()]
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut AreaNode {
        &mut self.nodes[id.index()]
    }

    fn group(&self, id: NodeId) -> AreaResult<&AreaNode> {
        let root = self.get(id)?.root;
        Ok(self.node(root))
    }

    pub(crate) fn roll_destination(&mut self, id: NodeId, rng: &mut WanderRng) -> Vec3 {
        let root = self.node(id).root;
        let children = &self.node(root).children;
        let sampler = if id == root && children.len() > 1 {
            rng.choose(children).copied().unwrap_or(id)
        } else {
            if id == root && children.is_empty() {
                trace!(area = %id, "singleton group samples itself");
            }
            id
        };

        let point = self.sample_at(sampler, rng);
        let group = self.node_mut(root);
        group.destination = point;
        group.destination_area = Some(sampler);
        debug!(area = %id, group = %root, sampler = %sampler, ?point, "next destination");
        point
    }

    fn sample_at(&self, id: NodeId, rng: &mut WanderRng) -> Vec3 {
        let local = self.node(id).spec.shape.sample_local(rng);
        let point = self.world_affine(id).transform_point3(local);
        trace!(area = %id, ?local, ?point, "sampled point");
        point
    }

    fn world_affine(&self, id: NodeId) -> Affine3A {
        let mut m = self.node(id).spec.local.to_affine();
        let mut cur = self.node(id).spec.parent;
        while let Some(p) = cur {
            let parent = self.node(p);
            m = parent.spec.local.to_affine() * m;
            cur = parent.spec.parent;
        }
        m
    }

    fn top_ancestor(&self, id: NodeId) -> NodeId {
        let mut top = id;
        while let Some(p) = self.node(top).spec.parent {
            top = p;
        }
        top
    }

    /// Set a scene parent without rebuilding.  Rejects cycles.
    pub(crate) fn link_parent(&mut self, id: NodeId, parent: Option<NodeId>) -> AreaResult<()> {
        self.check(id)?;
        if let Some(p) = parent {
            self.check(p)?;
            let mut cur = Some(p);
            while let Some(c) = cur {
                if c == id {
                    return Err(AreaError::Cycle { child: id, parent: p });
                }
                cur = self.node(c).spec.parent;
            }
        }
        self.nodes[id.index()].spec.parent = parent;
        Ok(())
    }
}
