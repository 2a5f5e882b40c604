// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! In-memory retained scene graph.
//!
//! The scene is the single shared mutable resource: the host owns it (and the
//! selection), and the reconciler is its only writer for annotation-related
//! sub-nodes. Lookups return `Option`; structural operations on absent nodes
//! are no-ops that report `false` instead of raising.

use std::collections::BTreeMap;

use serde_json::Value;
use smol_str::SmolStr;

use crate::model::NodeId;

pub mod collide;

pub use collide::{find_collisions, Rect};

/// The visual flavor of a node. `Text` nodes carry `characters`; `Frame`
/// nodes carry ordered children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Frame,
    Text,
}

/// An opaque RGB fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// One node of the retained scene.
#[derive(Debug, Clone)]
pub struct Node {
    name: SmolStr,
    kind: NodeKind,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    visible: bool,
    characters: String,
    fill: Option<Rgb>,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
    plugin_data: BTreeMap<SmolStr, Value>,
}

impl Node {
    fn new(kind: NodeKind, name: &str) -> Self {
        Self {
            name: SmolStr::new(name),
            kind,
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            visible: true,
            characters: String::new(),
            fill: None,
            children: Vec::new(),
            parent: None,
            plugin_data: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = SmolStr::new(name);
    }

    /// Substring test against the node name, used to match nodes whose names
    /// embed an annotation id.
    pub fn name_contains(&self, needle: &str) -> bool {
        memchr::memmem::find(self.name.as_bytes(), needle.as_bytes()).is_some()
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn set_width(&mut self, width: f64) {
        self.width = width;
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn set_height(&mut self, height: f64) {
        self.height = height;
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn characters(&self) -> &str {
        &self.characters
    }

    pub fn set_characters(&mut self, characters: &str) {
        self.characters.clear();
        self.characters.push_str(characters);
    }

    pub fn fill(&self) -> Option<Rgb> {
        self.fill
    }

    pub fn set_fill(&mut self, fill: Option<Rgb>) {
        self.fill = fill;
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn parent(&self) -> Option<&NodeId> {
        self.parent.as_ref()
    }
}

/// The retained page: an id-keyed node arena plus the page-level child order
/// and the host-owned selection.
#[derive(Debug, Default)]
pub struct SceneGraph {
    nodes: BTreeMap<NodeId, Node>,
    page_children: Vec<NodeId>,
    selection: Option<NodeId>,
    next_id: u64,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    fn alloc(&mut self, kind: NodeKind, name: &str) -> NodeId {
        self.next_id += 1;
        let id = NodeId::new(format!("n:{}", self.next_id)).expect("generated node id");
        self.nodes.insert(id.clone(), Node::new(kind, name));
        id
    }

    /// Creates a detached frame node. Attach it with `append_child`,
    /// `insert_child`, or `append_page_child`.
    pub fn create_frame(&mut self, name: &str) -> NodeId {
        self.alloc(NodeKind::Frame, name)
    }

    /// Creates a detached text node with the given characters.
    pub fn create_text(&mut self, name: &str, characters: &str) -> NodeId {
        let id = self.alloc(NodeKind::Text, name);
        if let Some(node) = self.nodes.get_mut(&id) {
            node.set_characters(characters);
        }
        id
    }

    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn node_mut(&mut self, id: &NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn page_children(&self) -> &[NodeId] {
        &self.page_children
    }

    /// Children of `id`, or an empty slice when the node is absent.
    pub fn children(&self, id: &NodeId) -> &[NodeId] {
        self.nodes.get(id).map(|node| node.children()).unwrap_or(&[])
    }

    fn detach(&mut self, id: &NodeId) {
        let parent = self.nodes.get(id).and_then(|node| node.parent.clone());
        match parent {
            Some(parent_id) => {
                if let Some(parent) = self.nodes.get_mut(&parent_id) {
                    parent.children.retain(|child| child != id);
                }
            }
            None => self.page_children.retain(|child| child != id),
        }
        if let Some(node) = self.nodes.get_mut(id) {
            node.parent = None;
        }
    }

    /// Appends `child` as the last child of `parent`, detaching it from its
    /// previous parent first. Appending an already-attached node therefore
    /// moves it to the end, which is what reorder mode relies on.
    pub fn append_child(&mut self, parent: &NodeId, child: &NodeId) -> bool {
        if !self.nodes.contains_key(parent) || !self.nodes.contains_key(child) || parent == child {
            return false;
        }
        self.detach(child);
        if let Some(node) = self.nodes.get_mut(parent) {
            node.children.push(child.clone());
        }
        if let Some(node) = self.nodes.get_mut(child) {
            node.parent = Some(parent.clone());
        }
        true
    }

    /// Inserts `child` at `index` among `parent`'s children (clamped to the
    /// current child count).
    pub fn insert_child(&mut self, parent: &NodeId, index: usize, child: &NodeId) -> bool {
        if !self.nodes.contains_key(parent) || !self.nodes.contains_key(child) || parent == child {
            return false;
        }
        self.detach(child);
        if let Some(node) = self.nodes.get_mut(parent) {
            let index = index.min(node.children.len());
            node.children.insert(index, child.clone());
        }
        if let Some(node) = self.nodes.get_mut(child) {
            node.parent = Some(parent.clone());
        }
        true
    }

    /// Appends `child` at page level (top-level ordering).
    pub fn append_page_child(&mut self, child: &NodeId) -> bool {
        if !self.nodes.contains_key(child) {
            return false;
        }
        self.detach(child);
        self.page_children.push(child.clone());
        true
    }

    /// Removes the node and its whole subtree. Clears the selection when it
    /// pointed inside the removed subtree.
    pub fn remove(&mut self, id: &NodeId) -> bool {
        if !self.nodes.contains_key(id) {
            return false;
        }
        self.detach(id);
        let mut stack = vec![id.clone()];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.remove(&current) {
                stack.extend(node.children);
            }
            if self.selection.as_ref() == Some(&current) {
                self.selection = None;
            }
        }
        true
    }

    pub fn find_child(
        &self,
        parent: &NodeId,
        predicate: impl Fn(&Node) -> bool,
    ) -> Option<NodeId> {
        self.children(parent)
            .iter()
            .find(|id| self.nodes.get(*id).is_some_and(&predicate))
            .cloned()
    }

    /// Depth-first search below `parent`, in document order.
    pub fn find_descendant(
        &self,
        parent: &NodeId,
        predicate: impl Fn(&Node) -> bool,
    ) -> Option<NodeId> {
        let mut stack: Vec<NodeId> = self.children(parent).iter().rev().cloned().collect();
        while let Some(current) = stack.pop() {
            let Some(node) = self.nodes.get(&current) else {
                continue;
            };
            if predicate(node) {
                return Some(current);
            }
            stack.extend(node.children().iter().rev().cloned());
        }
        None
    }

    pub fn find_page_child(&self, predicate: impl Fn(&Node) -> bool) -> Option<NodeId> {
        self.page_children
            .iter()
            .find(|id| self.nodes.get(*id).is_some_and(&predicate))
            .cloned()
    }

    /// The host's current selection, if it still points at a live node.
    pub fn selection(&self) -> Option<&NodeId> {
        self.selection
            .as_ref()
            .filter(|id| self.nodes.contains_key(*id))
    }

    pub fn set_selection(&mut self, selection: Option<NodeId>) {
        self.selection = selection;
    }

    pub fn set_plugin_data(&mut self, id: &NodeId, key: &str, value: Value) -> bool {
        let Some(node) = self.nodes.get_mut(id) else {
            return false;
        };
        node.plugin_data.insert(SmolStr::new(key), value);
        true
    }

    pub fn plugin_data(&self, id: &NodeId, key: &str) -> Option<&Value> {
        self.nodes.get(id)?.plugin_data.get(key)
    }
}
