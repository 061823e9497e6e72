//! Locating a witness when the load order can't be sorted.

use crate::package::PackageId;
use crate::working_set::WorkingSet;

use super::DependencyGraph;

/// A chain of packages in load order where each must load before the next, the first and last entries are the same package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycle(Vec<PackageId>);

impl Cycle {
	pub fn identifiers(&self) -> &[PackageId] {
		&self.0
	}

	/// Number of distinct packages in the cycle.
	pub fn len(&self) -> usize {
		self.0.len().saturating_sub(1)
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl std::fmt::Display for Cycle {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let names: Vec<&str> = self.0.iter().map(PackageId::as_str).collect();
		write!(f, "{}", names.join(" -> "))
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
	Unvisited,
	InProgress,
	Done,
}

/// Finds one cycle in `graph`, not necessarily the shortest.
///
/// Roots and successors are visited in identifier order so the same graph always gives the same cycle.
/// Returns `None` when the graph is acyclic.
pub fn find_cycle(working_set: &WorkingSet, graph: &DependencyGraph) -> Option<Cycle> {
	let by_identifier = |a: &usize, b: &usize| working_set[*a].identifier.cmp(&working_set[*b].identifier);

	let mut roots: Vec<usize> = (0..working_set.len()).collect();
	roots.sort_by(by_identifier);

	let successors: Vec<Vec<usize>> = (0..working_set.len())
		.map(|i| {
			let mut s: Vec<usize> = graph.dependents(i).collect();
			s.sort_by(by_identifier);
			s
		})
		.collect();

	let mut marks = vec![Mark::Unvisited; working_set.len()];
	let mut parent: Vec<Option<usize>> = vec![None; working_set.len()];

	for root in roots {
		if marks[root] != Mark::Unvisited { continue; }

		/* Explicit stack of (node, next successor to visit) so long chains can't overflow */
		let mut stack = vec![(root, 0usize)];
		marks[root] = Mark::InProgress;

		while let Some((u, next)) = stack.last_mut() {
			let u = *u;
			if let Some(&v) = successors[u].get(*next) {
				*next += 1;
				match marks[v] {
					Mark::Unvisited => {
						parent[v] = Some(u);
						marks[v] = Mark::InProgress;
						stack.push((v, 0));
					},
					Mark::InProgress => return Some(reconstruct(working_set, &parent, u, v)),
					Mark::Done => {},
				}
			} else {
				marks[u] = Mark::Done;
				stack.pop();
			}
		}
	}

	None
}

/// Walks parents from `u` back to `v` where `u -> v` closed the loop.
fn reconstruct(working_set: &WorkingSet, parent: &[Option<usize>], u: usize, v: usize) -> Cycle {
	let mut chain = vec![v];
	let mut x = u;
	while x != v {
		chain.push(x);
		match parent[x] {
			Some(p) => x = p,
			None => break,
		}
	}
	chain.push(v);
	chain.reverse();

	Cycle(chain.into_iter().map(|i| working_set[i].identifier.clone()).collect())
}
