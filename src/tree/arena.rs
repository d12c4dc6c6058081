//! Tree operations: insert, attach, detach, remove, walk.

use std::collections::VecDeque;

use slotmap::{SecondaryMap, SlotMap};

use super::element::{ElementData, ElementId};

/// Empty slice constant for returning when an element has no children.
const EMPTY_CHILDREN: &[ElementId] = &[];

/// The element tree, backed by a slotmap arena.
///
/// All elements live in a single `SlotMap`; the arena owns their data.
/// Parent/child edges are stored in secondary maps so removal is O(subtree
/// size) and lookup is O(1). Children lists are append-only during
/// composition — detaching or destroying a child is always an explicit,
/// separate operation, and no implicit reordering ever occurs.
pub struct Tree {
    nodes: SlotMap<ElementId, ElementData>,
    children: SecondaryMap<ElementId, Vec<ElementId>>,
    parent: SecondaryMap<ElementId, ElementId>,
    root: Option<ElementId>,
}

impl Tree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            children: SecondaryMap::new(),
            parent: SecondaryMap::new(),
            root: None,
        }
    }

    /// Insert a detached element (no parent, not the root).
    ///
    /// The root is only ever set explicitly via [`set_root`](Self::set_root),
    /// so elements can be created in any order before composition.
    pub fn insert(&mut self, data: ElementData) -> ElementId {
        let id = self.nodes.insert(data);
        self.children.insert(id, Vec::new());
        id
    }

    /// Insert an element as the last child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics (debug) if `parent` does not exist in the tree.
    pub fn insert_child(&mut self, parent: ElementId, data: ElementData) -> ElementId {
        debug_assert!(self.nodes.contains_key(parent), "parent element does not exist");
        let id = self.nodes.insert(data);
        self.children.insert(id, Vec::new());
        self.parent.insert(id, parent);
        self.children
            .get_mut(parent)
            .expect("parent must have children vec")
            .push(id);
        id
    }

    /// Attach an existing element as the last child of `parent`.
    ///
    /// Ownership transfers: if the element was previously a child of another
    /// parent it is detached first, subtree intact.
    ///
    /// # Panics
    ///
    /// Panics (debug) if either element does not exist.
    pub fn attach(&mut self, parent: ElementId, child: ElementId) {
        debug_assert!(self.nodes.contains_key(child), "child does not exist");
        debug_assert!(self.nodes.contains_key(parent), "parent does not exist");

        self.detach(child);
        self.parent.insert(child, parent);
        self.children
            .get_mut(parent)
            .expect("parent must have children vec")
            .push(child);
    }

    /// Detach an element from its parent, keeping it (and its subtree) alive.
    ///
    /// This is the containers' `remove(child)` operation: the child stays in
    /// the arena and can be attached elsewhere. A no-op for elements that
    /// have no parent.
    pub fn detach(&mut self, id: ElementId) {
        if let Some(parent_id) = self.parent.remove(id) {
            if let Some(siblings) = self.children.get_mut(parent_id) {
                siblings.retain(|&child| child != id);
            }
        }
    }

    /// Destroy an element and all its descendants.
    ///
    /// Returns the `ElementData` for the destroyed element, or `None` if it
    /// didn't exist. Registry entries pointing at destroyed elements are NOT
    /// cleaned up here — that is the caller's obligation.
    pub fn remove(&mut self, id: ElementId) -> Option<ElementData> {
        if !self.nodes.contains_key(id) {
            return None;
        }

        self.detach(id);

        if self.root == Some(id) {
            self.root = None;
        }

        // Collect the whole subtree (BFS) and drop it.
        let mut to_remove = VecDeque::new();
        to_remove.push_back(id);
        let mut removed_root_data = None;

        while let Some(current) = to_remove.pop_front() {
            if let Some(kids) = self.children.remove(current) {
                for &child in &kids {
                    to_remove.push_back(child);
                }
            }
            self.parent.remove(current);
            let data = self.nodes.remove(current);
            if current == id {
                removed_root_data = data;
            }
        }

        removed_root_data
    }

    /// Get the parent of an element, if it has one.
    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.parent.get(id).copied()
    }

    /// Get the children of an element, in insertion order. Returns an empty
    /// slice if the element has no children or does not exist.
    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.children
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(EMPTY_CHILDREN)
    }

    /// Walk from `id` up to the root, collecting ancestor ids.
    ///
    /// The returned vec does **not** include `id` itself; it starts with the
    /// immediate parent and ends at the root.
    pub fn ancestors(&self, id: ElementId) -> Vec<ElementId> {
        let mut result = Vec::new();
        let mut current = id;
        while let Some(p) = self.parent.get(current).copied() {
            result.push(p);
            current = p;
        }
        result
    }

    /// Immutable access to an element's data.
    pub fn get(&self, id: ElementId) -> Option<&ElementData> {
        self.nodes.get(id)
    }

    /// Mutable access to an element's data.
    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut ElementData> {
        self.nodes.get_mut(id)
    }

    /// The current root element, if set.
    pub fn root(&self) -> Option<ElementId> {
        self.root
    }

    /// Set the root element.
    pub fn set_root(&mut self, id: ElementId) {
        self.root = Some(id);
    }

    /// Number of elements in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether the tree contains the element.
    pub fn contains(&self, id: ElementId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Pre-order depth-first traversal starting from `start`.
    pub fn walk_depth_first(&self, start: ElementId) -> Vec<ElementId> {
        let mut result = Vec::new();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            if !self.nodes.contains_key(current) {
                continue;
            }
            result.push(current);
            // Push children in reverse so the first child is visited first.
            let kids = self.children(current);
            for &child in kids.iter().rev() {
                stack.push(child);
            }
        }
        result
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::element::Caps;

    fn group(tag: &str) -> ElementData {
        ElementData::new(tag, Caps::CONTAINING | Caps::STYLEABLE)
    }

    fn leaf(tag: &str) -> ElementData {
        ElementData::new(tag, Caps::STYLEABLE)
    }

    /// Build a small test tree:
    /// ```text
    ///       root
    ///      /    \
    ///    a        b
    ///   / \
    ///  c   d
    /// ```
    fn build_tree() -> (Tree, ElementId, ElementId, ElementId, ElementId, ElementId) {
        let mut tree = Tree::new();
        let root = tree.insert(group("Column"));
        tree.set_root(root);
        let a = tree.insert_child(root, group("Row"));
        let b = tree.insert_child(root, group("Row"));
        let c = tree.insert_child(a, leaf("Button"));
        let d = tree.insert_child(a, leaf("Label"));
        (tree, root, a, b, c, d)
    }

    #[test]
    fn insert_does_not_set_root() {
        let mut tree = Tree::new();
        let _ = tree.insert(leaf("Label"));
        assert_eq!(tree.root(), None);
    }

    #[test]
    fn set_root_explicit() {
        let mut tree = Tree::new();
        let first = tree.insert(leaf("Label"));
        let second = tree.insert(group("Column"));
        tree.set_root(second);
        assert_eq!(tree.root(), Some(second));
        assert!(tree.contains(first));
    }

    #[test]
    fn insert_child_parent_relationship() {
        let (tree, root, a, _b, c, _d) = build_tree();
        assert_eq!(tree.parent(a), Some(root));
        assert_eq!(tree.parent(c), Some(a));
        assert_eq!(tree.parent(root), None);
    }

    #[test]
    fn children_in_insertion_order() {
        let (tree, root, a, b, c, d) = build_tree();
        assert_eq!(tree.children(root), &[a, b]);
        assert_eq!(tree.children(a), &[c, d]);
        assert!(tree.children(c).is_empty());
    }

    #[test]
    fn ancestors() {
        let (tree, root, a, _b, c, _d) = build_tree();
        assert_eq!(tree.ancestors(c), vec![a, root]);
        assert_eq!(tree.ancestors(a), vec![root]);
        assert!(tree.ancestors(root).is_empty());
    }

    #[test]
    fn get_and_get_mut() {
        let (mut tree, _root, a, ..) = build_tree();
        assert_eq!(tree.get(a).unwrap().class_tag, "Row");
        tree.get_mut(a).unwrap().class_tag = "Section".to_owned();
        assert_eq!(tree.get(a).unwrap().class_tag, "Section");
    }

    #[test]
    fn detach_keeps_subtree_alive() {
        let (mut tree, root, a, b, c, d) = build_tree();
        tree.detach(a);
        assert_eq!(tree.parent(a), None);
        assert_eq!(tree.children(root), &[b]);
        // Subtree is intact and re-attachable.
        assert!(tree.contains(a));
        assert!(tree.contains(c));
        assert_eq!(tree.children(a), &[c, d]);
        tree.attach(b, a);
        assert_eq!(tree.parent(a), Some(b));
        assert_eq!(tree.children(b), &[a]);
    }

    #[test]
    fn detach_without_parent_is_noop() {
        let (mut tree, root, ..) = build_tree();
        tree.detach(root);
        assert!(tree.contains(root));
        assert_eq!(tree.root(), Some(root));
    }

    #[test]
    fn attach_moves_between_parents() {
        let (mut tree, _root, a, b, c, _d) = build_tree();
        tree.attach(b, c);
        assert_eq!(tree.parent(c), Some(b));
        assert!(!tree.children(a).contains(&c));
        assert!(tree.children(b).contains(&c));
    }

    #[test]
    fn remove_leaf() {
        let (mut tree, _root, a, _b, c, d) = build_tree();
        let removed = tree.remove(c);
        assert_eq!(removed.unwrap().class_tag, "Button");
        assert!(!tree.contains(c));
        assert_eq!(tree.children(a), &[d]);
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn remove_subtree() {
        let (mut tree, root, a, b, c, d) = build_tree();
        tree.remove(a);
        assert!(!tree.contains(a));
        assert!(!tree.contains(c));
        assert!(!tree.contains(d));
        assert!(tree.contains(root));
        assert!(tree.contains(b));
        assert_eq!(tree.children(root), &[b]);
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn remove_root_clears_root() {
        let (mut tree, root, ..) = build_tree();
        tree.remove(root);
        assert!(tree.is_empty());
        assert_eq!(tree.root(), None);
    }

    #[test]
    fn remove_nonexistent() {
        let mut tree = Tree::new();
        let id = tree.insert(leaf("Label"));
        tree.remove(id);
        assert!(tree.remove(id).is_none());
    }

    #[test]
    fn walk_depth_first() {
        let (tree, root, a, b, c, d) = build_tree();
        assert_eq!(tree.walk_depth_first(root), vec![root, a, c, d, b]);
    }

    #[test]
    fn walk_depth_first_subtree() {
        let (tree, _root, a, _b, c, d) = build_tree();
        assert_eq!(tree.walk_depth_first(a), vec![a, c, d]);
    }

    #[test]
    fn len_and_is_empty() {
        let (tree, ..) = build_tree();
        assert_eq!(tree.len(), 5);
        assert!(!tree.is_empty());
        assert!(Tree::default().is_empty());
    }
}
