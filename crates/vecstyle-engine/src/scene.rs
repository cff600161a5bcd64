//! Document objects with the attributes they inherit from their ancestors.
//!
//! Text frames can't report their own effective opacity or blend mode; both
//! depend on the layers and groups around them. [`SceneTree`] stores the
//! hierarchy as an arena and memoises the computed values per node.

use std::cell::OnceCell;

use crate::convert::{BlendMode, FrameKind, TextFrameAttributes};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug)]
struct SceneNode {
    name: String,
    /// 0–100.
    opacity: f64,
    blend_mode: BlendMode,
    parent: Option<NodeId>,
    computed_opacity: OnceCell<f64>,
    computed_blend_mode: OnceCell<BlendMode>,
}

#[derive(Debug, Default)]
pub struct SceneTree {
    nodes: Vec<SceneNode>,
}

impl SceneTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_root(
        &mut self,
        name: impl Into<String>,
        opacity: f64,
        blend_mode: BlendMode,
    ) -> NodeId {
        self.push(name.into(), opacity, blend_mode, None)
    }

    /// # Panics
    ///
    /// If `parent` does not belong to this tree.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        name: impl Into<String>,
        opacity: f64,
        blend_mode: BlendMode,
    ) -> NodeId {
        assert!(parent.0 < self.nodes.len(), "unknown parent node {parent:?}");
        self.push(name.into(), opacity, blend_mode, Some(parent))
    }

    fn push(
        &mut self,
        name: String,
        opacity: f64,
        blend_mode: BlendMode,
        parent: Option<NodeId>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(SceneNode {
            name,
            opacity,
            blend_mode,
            parent,
            computed_opacity: OnceCell::new(),
            computed_blend_mode: OnceCell::new(),
        });
        id
    }

    fn node(&self, id: NodeId) -> &SceneNode {
        &self.nodes[id.0]
    }

    pub fn name(&self, id: NodeId) -> &str {
        &self.node(id).name
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Opacity after multiplying in every ancestor's, on a 0–100 scale.
    pub fn computed_opacity(&self, id: NodeId) -> f64 {
        let node = self.node(id);
        *node.computed_opacity.get_or_init(|| {
            let inherited = node
                .parent
                .map_or(100.0, |parent| self.computed_opacity(parent));
            node.opacity / 100.0 * inherited
        })
    }

    /// The first non-normal blend mode found walking up from `id`.
    ///
    /// Modes set further up the chain are ignored once one is found.
    pub fn computed_blend_mode(&self, id: NodeId) -> &BlendMode {
        let node = self.node(id);
        node.computed_blend_mode.get_or_init(|| {
            if !node.blend_mode.is_normal() {
                return node.blend_mode.clone();
            }
            match node.parent {
                Some(parent) => self.computed_blend_mode(parent).clone(),
                None => BlendMode::Normal,
            }
        })
    }

    /// Frame attributes for a text frame stored at `id`.
    pub fn frame_attributes(
        &self,
        id: NodeId,
        kind: FrameKind,
        rotated: bool,
    ) -> TextFrameAttributes {
        TextFrameAttributes {
            kind,
            opacity: self.computed_opacity(id),
            blend_mode: self.computed_blend_mode(id).clone(),
            rotated,
        }
    }
}
