use crate::host::{BaseContent, HostVersion};
use crate::package::{Package, PackageId};
use crate::working_set::WorkingSet;

use super::{DependencyGraph, ResolveError, ValidationReport};

/// Holds a linked [`DependencyGraph`] ready to be validated and sorted.
///
/// Created with [`ResolverBuilder`](super::ResolverBuilder).
#[derive(Debug)]
pub struct LoadOrderResolver<'ws> {
	working_set: &'ws WorkingSet,
	graph: DependencyGraph,
	base_content: BaseContent,
	host_version: HostVersion,
	check_dependencies: bool,
}

impl<'ws> LoadOrderResolver<'ws> {
	pub(super) fn new(working_set: &'ws WorkingSet, graph: DependencyGraph, base_content: BaseContent, host_version: HostVersion, check_dependencies: bool) -> Self {
		Self {
			working_set,
			graph,
			base_content,
			host_version,
			check_dependencies,
		}
	}

	pub fn graph(&self) -> &DependencyGraph {
		&self.graph
	}

	pub fn working_set(&self) -> &'ws WorkingSet {
		self.working_set
	}

	/// Checks dependencies without sorting, see [`check_dependencies()`](super::check_dependencies()).
	pub fn validate(&self) -> Result<ValidationReport, ResolveError> {
		super::check_dependencies(self.working_set, self.host_version.major(), &self.base_content)
	}

	/// Validates dependencies, unless disabled on the builder, then sorts the packages.
	///
	/// # Errors
	/// - [`ResolveError::MissingDependencies`] when a dependency group can't be satisfied.
	/// - [`ResolveError::Cycle`] when the packages can't be ordered.
	pub fn resolve(&self) -> Result<LoadOrder<'ws>, ResolveError> {
		if self.check_dependencies {
			log::debug!("Checking dependencies against game version {}", self.host_version);
			self.validate()?;
		}

		let order = super::sort_packages(self.working_set, &self.graph)?;
		log::info!("Resolved load order of {} packages", order.len());
		Ok(LoadOrder { working_set: self.working_set, order })
	}
}

/// A complete load order, first entry loads first.
#[derive(Debug, Clone)]
pub struct LoadOrder<'ws> {
	working_set: &'ws WorkingSet,
	order: Vec<usize>,
}

impl<'ws> LoadOrder<'ws> {
	/// Indices into the working set in load order.
	pub fn indices(&self) -> &[usize] {
		&self.order
	}

	pub fn packages(&self) -> impl Iterator<Item = &'ws Package> + '_ {
		let working_set = self.working_set;
		self.order.iter().map(move |i| &working_set[*i])
	}

	pub fn identifiers(&self) -> Vec<PackageId> {
		self.packages().map(|p| p.identifier.clone()).collect()
	}

	/// Position of `identifier` in the load order.
	pub fn position(&self, identifier: &PackageId) -> Option<usize> {
		let index = self.working_set.index_of(identifier)?;
		self.order.iter().position(|i| *i == index)
	}

	pub fn len(&self) -> usize {
		self.order.len()
	}

	pub fn is_empty(&self) -> bool {
		self.order.is_empty()
	}
}
