use super::VisitorKind;
use crate::Location;
use serde_json::Value;
use std::collections::HashMap;

/// A node together with where it was found
#[derive(Debug, Clone, PartialEq)]
pub struct VisitedNode<'a> {
    pub node: &'a Value,
    pub location: Location,
}

/// Every visited node of one walk, grouped by visitor kind.
///
/// Within a kind, nodes keep the order they were visited in.
#[derive(Debug, Clone)]
pub struct VisitorBucket<'a, K: VisitorKind> {
    nodes: HashMap<K, Vec<VisitedNode<'a>>>,
}

impl<'a, K: VisitorKind> VisitorBucket<'a, K> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
        }
    }

    pub(crate) fn push(&mut self, kind: K, node: &'a Value, location: Location) {
        self.nodes
            .entry(kind)
            .or_default()
            .push(VisitedNode { node, location });
    }

    /// Nodes of one kind; empty when none were visited
    #[must_use]
    pub fn get(&self, kind: K) -> &[VisitedNode<'a>] {
        self.nodes.get(&kind).map(Vec::as_slice).unwrap_or_default()
    }

    /// Nodes by visitor-type name. Unknown names yield nothing.
    #[must_use]
    pub fn named(&self, name: &str) -> &[VisitedNode<'a>] {
        K::ALL
            .iter()
            .find(|kind| kind.as_str() == name)
            .map(|kind| self.get(*kind))
            .unwrap_or_default()
    }

    /// Locations of one kind, in visit order
    #[must_use]
    pub fn locations(&self, kind: K) -> Vec<&Location> {
        self.get(kind).iter().map(|visited| &visited.location).collect()
    }

    /// Total number of visited nodes
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K: VisitorKind> Default for VisitorBucket<'_, K> {
    fn default() -> Self {
        Self::new()
    }
}
