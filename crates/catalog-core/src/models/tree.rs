//! Arena-backed media tree.
//!
//! Nodes live in a single `Vec` owned by `MediaTree`; parent links are
//! indices into it, so the tree owns its nodes top-down and back-references
//! never hold ownership. Index 0 is always the root.

use serde::Serialize;

use super::media::{ImageRef, MediaDescriptor};

/// Index of a node inside its `MediaTree`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A category or a playable leaf.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeNode {
    title: Option<String>,
    image: Option<ImageRef>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    media: Option<MediaDescriptor>,
}

impl TreeNode {
    /// Leaf node wrapping a playable descriptor.
    pub fn leaf(title: Option<String>, image: Option<ImageRef>, media: MediaDescriptor) -> Self {
        Self {
            title,
            image,
            parent: None,
            children: Vec::new(),
            media: Some(media),
        }
    }

    /// Grouping node without media.
    pub fn group(title: Option<String>, image: Option<ImageRef>) -> Self {
        Self {
            title,
            image,
            parent: None,
            children: Vec::new(),
            media: None,
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn image(&self) -> Option<&ImageRef> {
        self.image.as_ref()
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn child_ids(&self) -> &[NodeId] {
        &self.children
    }

    pub fn media(&self) -> Option<&MediaDescriptor> {
        self.media.as_ref()
    }

    pub fn is_leaf(&self) -> bool {
        self.media.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaTree {
    title: Option<String>,
    nodes: Vec<TreeNode>,
}

impl Default for MediaTree {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaTree {
    /// Tree holding only an empty root.
    pub fn new() -> Self {
        Self {
            title: None,
            nodes: vec![TreeNode::group(None, None)],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Display title of the whole list (the selected category's name).
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: Option<String>) {
        self.title = title;
    }

    pub fn get(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id.0)
    }

    /// Append `node` as the last child of `parent`. Returns `None` if `parent`
    /// is not part of this tree.
    pub fn push_child(&mut self, parent: NodeId, node: TreeNode) -> Option<NodeId> {
        if parent.0 >= self.nodes.len() {
            return None;
        }
        Some(self.attach(parent, node))
    }

    /// Append `node` as the last child of the root. The root always exists,
    /// so this cannot fail.
    pub fn push_to_root(&mut self, node: TreeNode) -> NodeId {
        self.attach(self.root(), node)
    }

    // `parent` must already be in the arena.
    fn attach(&mut self, parent: NodeId, mut node: TreeNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        node.parent = Some(parent);
        node.children.clear();
        self.nodes.push(node);
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn parent(&self, id: NodeId) -> Option<&TreeNode> {
        self.get(id)?.parent.and_then(|p| self.get(p))
    }

    /// Children of `id` in insertion order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &TreeNode> + '_ {
        self.get(id)
            .map(|node| node.children.as_slice())
            .unwrap_or_default()
            .iter()
            .filter_map(move |child| self.get(*child))
    }

    /// Every node carrying media, in depth-first order.
    pub fn leaves(&self) -> Vec<&TreeNode> {
        let mut out = Vec::new();
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            let Some(node) = self.get(id) else { continue };
            if node.media.is_some() {
                out.push(node);
            }
            stack.extend(node.children.iter().rev().copied());
        }
        out
    }

    /// Number of nodes including the root, so never zero.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// True when the root has no children.
    pub fn is_empty(&self) -> bool {
        self.nodes[0].children.is_empty()
    }
}
