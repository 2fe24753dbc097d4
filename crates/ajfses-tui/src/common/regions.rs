//! Region tree for pointer routing.
//!
//! Regions form a parent/child tree that mirrors what the renderer draws.
//! The renderer records each region's last laid-out area; pointer events are
//! resolved to the deepest region under the cursor, and containment is an
//! ancestry test on the tree (a region contains itself).

use std::cell::Cell;

use ratatui::layout::{Position, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionId(usize);

#[derive(Debug)]
struct RegionNode {
    name: &'static str,
    parent: Option<RegionId>,
    depth: usize,
    area: Cell<Rect>,
}

#[derive(Debug, Default)]
pub struct RegionTree {
    nodes: Vec<RegionNode>,
}

impl RegionTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a top-level region.
    pub fn add_root(&mut self, name: &'static str) -> RegionId {
        self.push(name, None, 0)
    }

    /// Adds a region under `parent`. Later siblings stack above earlier ones.
    ///
    /// # Panics
    /// Panics if `parent` is not part of this tree.
    pub fn add_child(&mut self, parent: RegionId, name: &'static str) -> RegionId {
        let depth = self.node(parent).depth + 1;
        self.push(name, Some(parent), depth)
    }

    fn push(&mut self, name: &'static str, parent: Option<RegionId>, depth: usize) -> RegionId {
        let id = RegionId(self.nodes.len());
        self.nodes.push(RegionNode {
            name,
            parent,
            depth,
            area: Cell::new(Rect::default()),
        });
        id
    }

    fn node(&self, id: RegionId) -> &RegionNode {
        match self.nodes.get(id.0) {
            Some(node) => node,
            None => panic!("region {id:?} is not part of this region tree"),
        }
    }

    pub fn exists(&self, id: RegionId) -> bool {
        id.0 < self.nodes.len()
    }

    pub fn name(&self, id: RegionId) -> &'static str {
        self.node(id).name
    }

    /// Returns true if `target` is `ancestor` or one of its descendants.
    ///
    /// # Panics
    /// Panics if either id is not part of this tree.
    pub fn contains(&self, ancestor: RegionId, target: RegionId) -> bool {
        let _ = self.node(ancestor);
        let mut cursor = Some(target);
        while let Some(id) = cursor {
            if id == ancestor {
                return true;
            }
            cursor = self.node(id).parent;
        }
        false
    }

    pub fn area(&self, id: RegionId) -> Rect {
        self.node(id).area.get()
    }

    /// Records where `id` was drawn this frame.
    pub fn set_area(&self, id: RegionId, area: Rect) {
        self.node(id).area.set(area);
    }

    /// Marks `root` and all of its descendants as not drawn.
    pub fn clear_subtree(&self, root: RegionId) {
        for (index, node) in self.nodes.iter().enumerate() {
            if self.contains(root, RegionId(index)) {
                node.area.set(Rect::default());
            }
        }
    }

    /// Returns the deepest drawn region under the given cell.
    ///
    /// Among regions of equal depth the one added last wins.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<RegionId> {
        let position = Position::new(column, row);
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.area.get().contains(position))
            .max_by_key(|(index, node)| (node.depth, *index))
            .map(|(index, _)| RegionId(index))
    }
}
