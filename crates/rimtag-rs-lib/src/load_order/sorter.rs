use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::package::PackageId;
use crate::working_set::WorkingSet;

use super::{DependencyGraph, ResolveError};

/// Orders `working_set` so every package comes after all of its predecessors in `graph`.
///
/// Uses Kahn's algorithm, always taking the lowest identifier from the packages ready to load,
/// so the result only depends on the packages and their edges.
///
/// # Errors
/// - [`ResolveError::Cycle`] when the graph is not acyclic, no partial order is returned.
pub fn sort_packages(working_set: &WorkingSet, graph: &DependencyGraph) -> Result<Vec<usize>, ResolveError> {
	let mut in_degree: Vec<usize> = (0..working_set.len()).map(|i| graph.predecessors(i).count()).collect();

	let mut ready: BinaryHeap<Reverse<(&PackageId, usize)>> = in_degree.iter()
		.enumerate()
		.filter(|(_, degree)| **degree == 0)
		.map(|(i, _)| Reverse((&working_set[i].identifier, i)))
		.collect();

	let mut result = Vec::<usize>::with_capacity(working_set.len());

	while let Some(Reverse((_, i))) = ready.pop() {
		result.push(i);
		for next in graph.dependents(i) {
			in_degree[next] -= 1;
			if in_degree[next] == 0 {
				ready.push(Reverse((&working_set[next].identifier, next)));
			}
		}
	}

	if result.len() == working_set.len() {
		log::debug!("Sorted {} packages", result.len());
		return Ok(result);
	}

	log::debug!("Sort stalled after {} of {} packages, searching for a cycle", result.len(), working_set.len());
	match super::find_cycle(working_set, graph) {
		Some(cycle) => Err(ResolveError::Cycle(cycle)),
		None => {
			let unordered = in_degree.iter()
				.enumerate()
				.filter(|(_, degree)| **degree > 0)
				.map(|(i, _)| working_set[i].identifier.clone())
				.collect();
			Err(ResolveError::Unordered(unordered))
		},
	}
}
