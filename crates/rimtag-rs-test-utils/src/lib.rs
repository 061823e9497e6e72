//! Various helper functions for testing
//!
//! functions in this module should use results and not use any panics to avoid confusion in callers

use rimtag_rs::package::{DependencyGroup, SourceKind};
use rimtag_rs::{Package, PackageId, WorkingSet};

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("IO error: {0}")]
	IO(#[from] std::io::Error),
	#[error("JSON error: {0}")]
	SerdeJSON(#[from] serde_json::Error),
	#[error("rimtag-rs error: {0}")]
	Rimtag(#[from] rimtag_rs::Error),
}

/// Builds a [`Package`] with a more compact syntax than filling the struct by hand.
///
/// Packages default to [`SourceKind::Official`] so the base content isn't added to every test graph,
/// use [`third_party()`](PackageBuilder::third_party()) to get the implicit ordering.
#[derive(Debug, Clone)]
pub struct PackageBuilder {
	package: Package,
}

impl PackageBuilder {
	pub fn new(identifier: &str) -> Self {
		let mut package = Package::new(identifier, SourceKind::Official);
		package.name = identifier.to_string();
		package.supported_versions = vec!["1.6".to_string()];
		Self { package }
	}

	pub fn third_party(mut self) -> Self {
		self.package.source = SourceKind::Steam;
		self
	}

	pub fn source(mut self, source: SourceKind) -> Self {
		self.package.source = source;
		self
	}

	pub fn load_after(mut self, identifier: &str) -> Self {
		self.package.hints.load_after.push(PackageId::new(identifier));
		self
	}

	pub fn load_before(mut self, identifier: &str) -> Self {
		self.package.hints.load_before.push(PackageId::new(identifier));
		self
	}

	pub fn force_load_after(mut self, identifier: &str) -> Self {
		self.package.hints.force_load_after.push(PackageId::new(identifier));
		self
	}

	pub fn force_load_before(mut self, identifier: &str) -> Self {
		self.package.hints.force_load_before.push(PackageId::new(identifier));
		self
	}

	/// Adds a dependency group, a single identifier makes a strict dependency.
	pub fn depends(mut self, alternatives: &[&str]) -> Result<Self, Error> {
		self.package.dependencies.push(DependencyGroup::new(alternatives.iter().copied())?);
		Ok(self)
	}

	pub fn supported_versions(mut self, versions: &[&str]) -> Self {
		self.package.supported_versions = versions.iter().map(|v| v.to_string()).collect();
		self
	}

	pub fn build(self) -> Package {
		self.package
	}
}

/// Creates a working set from the given builders.
pub fn working_set(packages: impl IntoIterator<Item = PackageBuilder>) -> Result<WorkingSet, Error> {
	Ok(WorkingSet::new(packages.into_iter().map(PackageBuilder::build))?)
}

/// Identifiers as plain strings, handy for comparing against literals.
pub fn names(identifiers: impl IntoIterator<Item = impl AsRef<PackageId>>) -> Vec<String> {
	identifiers.into_iter().map(|id| id.as_ref().to_string()).collect()
}

/// Writes `packages` as a JSON working set into a new temporary directory.
///
/// The returned directory must be kept alive for as long as the file is needed.
pub fn write_temp_json(packages: &[Package]) -> Result<(tempfile::TempDir, std::path::PathBuf), Error> {
	let dir = tempfile::tempdir()?;
	let path = dir.path().join("working-set.json");
	std::fs::write(&path, serde_json::to_string_pretty(packages)?)?;
	Ok((dir, path))
}

/// Creates an empty temporary directory.
pub fn temp_dir() -> Result<tempfile::TempDir, Error> {
	Ok(tempfile::tempdir()?)
}
