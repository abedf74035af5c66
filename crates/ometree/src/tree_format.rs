// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Box-drawing rendering of metadata trees, for debugging and test output.
//!
//! ```
//! use ometree::MetadataStore;
//!
//! let mut store = MetadataStore::default();
//! store.set_image_name("cells".to_string(), 0);
//! store.set_pixels_size_x(512, 0, 0);
//!
//! let output = ometree::render_tree(store.root());
//! // OME
//! // └─┬ Image[0] Name="cells"
//! //   └── Pixels[0] SizeX=512
//! assert!(output.contains("Pixels[0] SizeX=512"));
//! ```

use crate::node::NodeRef;
use std::fmt;

/// A labelled node ready for formatting
#[derive(Debug, Clone)]
pub struct TreeNode {
    /// May span several lines
    pub label: String,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: TreeNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn add_child(&mut self, child: TreeNode) {
        self.children.push(child);
    }
}

impl From<&NodeRef> for TreeNode {
    fn from(node: &NodeRef) -> Self {
        build(node, None)
    }
}

fn build(node: &NodeRef, index: Option<usize>) -> TreeNode {
    let kind = node.kind();
    let mut label = match index {
        Some(i) => format!("{}[{i}]", kind.name()),
        None => kind.name().to_string(),
    };
    for (name, value) in node.attributes().iter() {
        label.push_str(&format!(" {name}={value}"));
    }

    let mut tree = TreeNode::new(label);
    for child_kind in node.child_kinds() {
        let repeated = child_kind.is_repeated();
        for (i, child) in node.children(child_kind).iter().enumerate() {
            tree.add_child(build(child, repeated.then_some(i)));
        }
    }
    tree
}

/// Renders the subtree under `node`.
///
/// Repeated entities carry their list index; attributes follow in name order.
/// Node identities are left out so the output is stable across runs.
#[must_use]
pub fn render_tree(node: &NodeRef) -> String {
    format_tree(&TreeNode::from(node))
}

pub fn format_tree(root: &TreeNode) -> String {
    let mut output = String::new();
    output.push_str(&root.label);
    output.push('\n');
    format_children(&mut output, &root.children, "");
    output
}

fn format_children(output: &mut String, children: &[TreeNode], prefix: &str) {
    let last = children.len().saturating_sub(1);

    for (index, child) in children.iter().enumerate() {
        let is_last = index == last;

        // Tee connectors for nodes that have children of their own
        let (connector, continuation) = match (child.children.is_empty(), is_last) {
            (true, true) => ("└──", ' '),
            (true, false) => ("├──", '│'),
            (false, true) => ("└─┬", ' '),
            (false, false) => ("├─┬", '│'),
        };

        for (line_idx, line) in child.label.lines().enumerate() {
            output.push_str(prefix);
            if line_idx == 0 {
                output.push_str(connector);
                output.push(' ');
            } else {
                output.push(continuation);
                output.push_str(&" ".repeat(connector.chars().count()));
            }
            output.push_str(line);
            output.push('\n');
        }

        if !child.children.is_empty() {
            let prefix = format!("{prefix}{continuation} ");
            format_children(output, &child.children, &prefix);
        }
    }
}

impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_tree(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::EntityKind;
    use crate::value::Value;

    #[test]
    fn test_nested_tree() {
        let root = TreeNode::new("root")
            .with_child(TreeNode::new("child1").with_child(TreeNode::new("grandchild1")))
            .with_child(TreeNode::new("child2"));

        let output = format_tree(&root);
        assert!(output.contains("├─┬ child1"));
        assert!(output.contains("│ └── grandchild1"));
        assert!(output.contains("└── child2"));
    }

    #[test]
    fn test_multi_line_label() {
        let root = TreeNode::new("root")
            .with_child(TreeNode::new("first\nsecond"))
            .with_child(TreeNode::new("last"));
        let output = format_tree(&root);
        assert_eq!(output, "root\n├── first\n│   second\n└── last\n");
    }

    #[test]
    fn test_render_metadata_tree() {
        let root = NodeRef::new(EntityKind::Ome);
        let image = root.append_child(EntityKind::Image);
        image.set_attribute("ID", Value::Text("Image:0".into()));
        let pixels = image.append_child(EntityKind::Pixels);
        pixels.set_attribute("SizeX", Value::Int(512));
        pixels.set_attribute("BigEndian", Value::Bool(false));
        _ = image.append_child(EntityKind::StageLabel);
        _ = root.append_child(EntityKind::Image);

        let output = render_tree(&root);
        assert_eq!(
            output,
            "OME\n\
             ├─┬ Image[0] ID=\"Image:0\"\n\
             │ ├── Pixels[0] BigEndian=false SizeX=512\n\
             │ └── StageLabel\n\
             └── Image[1]\n"
        );
    }
}
