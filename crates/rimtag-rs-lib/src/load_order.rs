//! Utilities for getting a valid load order for a set of packages.
//!
//! # Usage
//! 1. Create a [`WorkingSet`](crate::WorkingSet) from every package to be activated.
//! 1. Create a [`ResolverBuilder`] and set the game version and base content if the defaults don't fit.
//! 1. [`ResolverBuilder::build()`] to get a [`LoadOrderResolver`], this links every package into a [`DependencyGraph`].
//! 1. [`LoadOrderResolver::resolve()`] to check dependencies and sort, giving a [`LoadOrder`].
//!
//! Each stage is also available on its own, see [`DependencyGraph::build()`], [`check_dependencies()`],
//! [`sort_packages()`] and [`find_cycle()`].

use crate::package::PackageId;

mod dependency_graph;
pub use dependency_graph::DependencyGraph;

mod validator;
pub use validator::validate;
pub use validator::check_dependencies;
pub use validator::ValidationReport;
pub use validator::MissingDependency;

mod sorter;
pub use sorter::sort_packages;

mod cycle;
pub use cycle::find_cycle;
pub use cycle::Cycle;

mod dependents;
pub use dependents::find_dependents;
pub use dependents::Dependent;
pub use dependents::DependentKind;

mod resolver_builder;
pub use resolver_builder::ResolverBuilder;
mod resolver;
pub use resolver::LoadOrderResolver;
pub use resolver::LoadOrder;

fn join_identifiers(identifiers: &[PackageId]) -> String {
	identifiers.iter().map(PackageId::as_str).collect::<Vec<_>>().join(", ")
}

/// These errors prevent a load order from being produced.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResolveError {
	/// At least one dependency group had none of its members in the working set.
	#[error("missing required dependencies: {}", join_identifiers(.0))]
	MissingDependencies(Vec<PackageId>),
	/// Packages order each other in a loop.
	#[error("cycle detected in dependency graph: {0}")]
	Cycle(Cycle),
	/// Sorting stalled but no cycle could be located.
	#[error("packages could not be ordered: {}", join_identifiers(.0))]
	Unordered(Vec<PackageId>),
}
