// ArgMark - core/structure.rs
//
// Support-edge resolution for argument-structure diagrams. Pure
// functions over `StructureNode` slices; rendering lives in the UI
// layer.

use crate::core::model::{NodeKind, StructureNode};

/// A directed support edge, drawn from supporting node to supported
/// node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// ID of the supporting (parent) node.
    pub from: u32,

    /// ID of the supported (child) node.
    pub to: u32,
}

/// Resolves the declared parent links of a diagram into drawable edges.
///
/// Each entry in a node's `parents` list yields one edge from that
/// parent to the node, in declaration order, so the result is
/// deterministic for a given diagram. A parent ID that names no node in
/// the slice is skipped without error: diagrams are hand-authored and a
/// half-edited file should still render its valid remainder. Dangling
/// references are reported once at load time, not here.
pub fn resolved_edges(nodes: &[StructureNode]) -> Vec<Edge> {
    let mut edges = Vec::new();
    for node in nodes {
        for &parent_id in &node.parents {
            if nodes.iter().any(|n| n.id == parent_id) {
                edges.push(Edge {
                    from: parent_id,
                    to: node.id,
                });
            }
        }
    }
    edges
}

/// Finds a node by ID. Linear scan; diagrams are bounded by
/// `MAX_STRUCTURE_NODES`.
pub fn find_node(nodes: &[StructureNode], id: u32) -> Option<&StructureNode> {
    nodes.iter().find(|n| n.id == id)
}

/// Counts the nodes of one kind, for the diagram summary cards.
pub fn kind_count(nodes: &[StructureNode], kind: NodeKind) -> usize {
    nodes.iter().filter(|n| n.kind == kind).count()
}
