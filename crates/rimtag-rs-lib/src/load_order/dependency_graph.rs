//! Turns the ordering hints of a working set into a single "loads before" relation.

use petgraph::prelude::*;

use crate::host::BaseContent;
use crate::package::PackageId;
use crate::working_set::WorkingSet;

/// Directed graph over a [`WorkingSet`].
///
/// Node `i` is the package at index `i` of the working set and an edge `a -> b` means `a` must load before `b`.
/// Edges are a set, linking the same pair twice has no effect.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
	graph: DiGraph<PackageId, ()>,
}

impl DependencyGraph {
	/// Creates a node for every package without any edges.
	pub fn new(working_set: &WorkingSet) -> Self {
		let mut graph = DiGraph::with_capacity(working_set.len(), 0);
		for (_, package) in working_set.iter() {
			graph.add_node(package.identifier.clone());
		}
		Self { graph }
	}

	/// Creates the graph and links every package.
	pub fn build(working_set: &WorkingSet, base: &BaseContent) -> Self {
		let mut graph = Self::new(working_set);
		graph.link_packages(working_set, base);
		graph
	}

	/// Adds the edges described by each package's ordering hints.
	///
	/// Identifiers not in `working_set` are skipped. Running this again on the same set adds nothing.
	pub fn link_packages(&mut self, working_set: &WorkingSet, base: &BaseContent) {
		debug_assert_eq!(self.graph.node_count(), working_set.len(), "graph was built for a different working set");

		for (i, package) in working_set.iter() {
			for id in package.load_after_full(base) {
				if let Some(target) = working_set.index_of(&id) {
					self.add_ordering(target, i);
				}
			}
			/* "load before X" is the same as X loading after us */
			for id in package.load_before_full() {
				if let Some(target) = working_set.index_of(&id) {
					self.add_ordering(i, target);
				}
			}
		}

		log::debug!("Linked {} packages with {} orderings", self.graph.node_count(), self.graph.edge_count());
	}

	fn add_ordering(&mut self, before: usize, after: usize) {
		log::trace!("{} loads before {}", self.graph[NodeIndex::new(before)], self.graph[NodeIndex::new(after)]);
		self.graph.update_edge(NodeIndex::new(before), NodeIndex::new(after), ());
	}

	/// Packages which must load before `index`.
	pub fn predecessors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
		self.graph.neighbors_directed(NodeIndex::new(index), Incoming).map(|n| n.index())
	}

	/// Packages which must load after `index`.
	pub fn dependents(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
		self.graph.neighbors_directed(NodeIndex::new(index), Outgoing).map(|n| n.index())
	}

	pub fn has_edge(&self, before: usize, after: usize) -> bool {
		self.graph.contains_edge(NodeIndex::new(before), NodeIndex::new(after))
	}

	/// Every `(before, after)` pair.
	pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
		self.graph.edge_references().map(|e| (e.source().index(), e.target().index()))
	}

	pub fn node_count(&self) -> usize {
		self.graph.node_count()
	}

	pub fn edge_count(&self) -> usize {
		self.graph.edge_count()
	}

	pub fn graph(&self) -> &DiGraph<PackageId, ()> {
		&self.graph
	}
}
