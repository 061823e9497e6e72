use crate::host::{BaseContent, HostVersion};
use crate::working_set::WorkingSet;

use super::{DependencyGraph, LoadOrderResolver};

pub struct ResolverBuilder<'ws> {
	working_set: &'ws WorkingSet,
	base_content: BaseContent,
	host_version: HostVersion,
	check_dependencies: bool,
}

impl<'ws> ResolverBuilder<'ws> {
	pub fn new(working_set: &'ws WorkingSet) -> Self {
		Self {
			working_set,
			base_content: Default::default(),
			host_version: Default::default(),
			check_dependencies: true,
		}
	}

	/// Content all other packages are placed after, defaults to the base game and its expansions.
	pub fn base_content(mut self, base_content: BaseContent) -> Self {
		self.base_content = base_content;
		self
	}

	/// Version packages are checked against.
	pub fn host_version(mut self, host_version: HostVersion) -> Self {
		self.host_version = host_version;
		self
	}

	/// Sort even when dependencies are missing.
	pub fn skip_dependency_check(mut self) -> Self {
		self.check_dependencies = false;
		self
	}

	pub fn build(self) -> LoadOrderResolver<'ws> {
		let graph = DependencyGraph::build(self.working_set, &self.base_content);
		LoadOrderResolver::new(self.working_set, graph, self.base_content, self.host_version, self.check_dependencies)
	}
}
