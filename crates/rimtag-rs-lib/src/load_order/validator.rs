//! Checks that every package's dependencies are present and that packages support the game version.

use crate::host::BaseContent;
use crate::package::PackageId;
use crate::working_set::WorkingSet;

use super::ResolveError;

/// A dependency group member that isn't in the working set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingDependency {
	/// Package declaring the dependency.
	pub required_by: PackageId,
	pub identifier: PackageId,
}

/// Everything found wrong with a working set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
	/// Packages not declaring support for the game version, these can still be loaded.
	pub incompatible: Vec<PackageId>,
	/// One entry per member of each unsatisfied dependency group.
	pub missing: Vec<MissingDependency>,
}

impl ValidationReport {
	/// `false` when any dependency is missing, incompatibilities don't count.
	pub fn is_ok(&self) -> bool {
		self.missing.is_empty()
	}

	/// Every missing identifier once, in the order first found.
	pub fn missing_identifiers(&self) -> Vec<PackageId> {
		let mut out = Vec::<PackageId>::new();
		for m in &self.missing {
			if !out.contains(&m.identifier) {
				out.push(m.identifier.clone());
			}
		}
		out
	}
}

/// Inspects every package in `working_set` without stopping at the first problem.
///
/// # Arguments
/// - `host_major`: The major version token of the game, see [`HostVersion::major()`](crate::HostVersion::major()).
/// - `base`: The base game is exempt from the version check.
pub fn validate(working_set: &WorkingSet, host_major: &str, base: &BaseContent) -> ValidationReport {
	let mut report = ValidationReport::default();

	for (_, package) in working_set.iter() {
		if !package.supports_version(host_major) && package.identifier != base.base {
			report.incompatible.push(package.identifier.clone());
		}

		for group in &package.dependencies {
			if group.is_satisfied_by(|id| working_set.contains(id)) {
				continue;
			}
			for id in group.alternatives() {
				report.missing.push(MissingDependency { required_by: package.identifier.clone(), identifier: id.clone() });
			}
		}
	}

	report
}

/// Runs [`validate()`] and logs every problem found.
///
/// # Errors
/// - [`ResolveError::MissingDependencies`] listing every missing identifier when any group is unsatisfied.
pub fn check_dependencies(working_set: &WorkingSet, host_major: &str, base: &BaseContent) -> Result<ValidationReport, ResolveError> {
	let report = validate(working_set, host_major, base);

	for id in &report.incompatible {
		if let Some(package) = working_set.get_by_id(id) {
			log::warn!("Package {} does not support game version {}", package, host_major);
		}
	}
	for m in &report.missing {
		log::error!("Missing required dependency {} of {}", m.identifier, m.required_by);
	}

	if report.is_ok() {
		Ok(report)
	} else {
		Err(ResolveError::MissingDependencies(report.missing_identifiers()))
	}
}
