//! Nested part lists.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::Part;

/// A list of part nodes, as returned by a product.
pub type Parts = Vec<PartNode>;

/// Either a single part or a group of nodes.
///
/// Groups carry no meaning of their own beyond ordering; they exist so that
/// sub-assemblies can be composed and conditionally included.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum PartNode {
    /// A single part.
    Part(Part),
    /// A nested list of nodes.
    Group(Vec<PartNode>),
}

impl PartNode {
    /// An empty group.
    pub fn empty() -> Self {
        PartNode::Group(Vec::new())
    }

    /// The number of parts below this node.
    pub fn count(&self) -> usize {
        match self {
            PartNode::Part(_) => 1,
            PartNode::Group(nodes) => nodes.iter().map(PartNode::count).sum(),
        }
    }

    /// Visit every part depth first.
    pub fn visit<'a>(&'a self, f: &mut impl FnMut(&'a Part)) {
        match self {
            PartNode::Part(part) => f(part),
            PartNode::Group(nodes) => nodes.iter().for_each(|node| node.visit(f)),
        }
    }

    /// Shift every part below this node.
    pub fn translate(self, dx: f64, dy: f64, dz: f64) -> Self {
        match self {
            PartNode::Part(part) => PartNode::Part(part.translate(dx, dy, dz)),
            PartNode::Group(nodes) => {
                PartNode::Group(nodes.into_iter().map(|node| node.translate(dx, dy, dz)).collect())
            }
        }
    }

    fn drain_into(self, out: &mut Vec<Part>) {
        match self {
            PartNode::Part(part) => out.push(part),
            PartNode::Group(nodes) => nodes.into_iter().for_each(|node| node.drain_into(out)),
        }
    }
}

impl From<Part> for PartNode {
    fn from(part: Part) -> Self {
        PartNode::Part(part)
    }
}

impl<T: Into<PartNode>> From<Vec<T>> for PartNode {
    fn from(nodes: Vec<T>) -> Self {
        PartNode::Group(nodes.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<PartNode>> From<Option<T>> for PartNode {
    fn from(node: Option<T>) -> Self {
        node.map(Into::into).unwrap_or_else(PartNode::empty)
    }
}

/// Collect every part of a tree, depth first and in order.
pub fn flatten(nodes: &[PartNode]) -> Vec<Part> {
    let mut out = Vec::new();
    for node in nodes {
        node.visit(&mut |part| out.push(part.clone()));
    }
    out
}

/// Like [`flatten`], consuming the tree.
pub fn into_flat(nodes: Parts) -> Vec<Part> {
    let mut out = Vec::new();
    for node in nodes {
        node.drain_into(&mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::parts;

    #[test]
    fn test_flatten_is_depth_first() {
        let nodes = parts![
            Part::beam_x((0, 10), 0, 0),
            parts![Part::beam_y(0, (0, 10), 1), parts![Part::beam_z(0, 0, (2, 12))]],
            None::<Part>,
            Some(Part::panel_xy((0, 10), (0, 10), 3)),
            false.then(|| Part::beam_x((0, 5), 9, 9)),
        ];

        assert_eq!(
            flatten(&nodes),
            vec![
                Part::beam_x((0, 10), 0, 0),
                Part::beam_y(0, (0, 10), 1),
                Part::beam_z(0, 0, (2, 12)),
                Part::panel_xy((0, 10), (0, 10), 3),
            ]
        );
        assert_eq!(into_flat(nodes.clone()), flatten(&nodes));
        assert_eq!(nodes.iter().map(PartNode::count).sum::<usize>(), 4);
    }

    #[test]
    fn test_groups_serialize_as_arrays() {
        let nodes = parts![parts![Part::beam_z(0, 0, (0, 5))], parts![]];
        let json = serde_json::to_value(&nodes).unwrap();
        assert_eq!(
            json,
            serde_json::json!([[{"type": "gridbeam:z", "x": 0.0, "y": 0.0, "z": [0.0, 5.0]}], []])
        );

        let parsed: Parts = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, nodes);
    }

    #[test]
    fn test_translate_group() {
        let node = PartNode::from(parts![Part::beam_x((0, 30), 1, 4), Part::panel_xy((0, 30), (0, 20), 5)]);
        assert_eq!(
            flatten(&[node.translate(30.0, 20.0, 0.0)]),
            vec![Part::beam_x((30, 60), 21, 4), Part::panel_xy((30, 60), (20, 40), 5)]
        );
    }
}
