use crate::package::{Package, PackageId, DependencyGroup};
use crate::working_set::WorkingSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DependentKind {
	/// The dependency has no alternatives.
	Strict,
	/// Any member of the group would also do.
	Alternative(DependencyGroup),
}

/// A package with a dependency group naming some identifier.
#[derive(Debug, Clone)]
pub struct Dependent<'ws> {
	pub package: &'ws Package,
	pub kind: DependentKind,
}

/// Lists every package depending on `identifier`, one entry per dependency group that names it.
pub fn find_dependents<'ws>(working_set: &'ws WorkingSet, identifier: &PackageId) -> Vec<Dependent<'ws>> {
	let mut out = Vec::new();
	for (_, package) in working_set.iter() {
		for group in package.dependencies.iter().filter(|g| g.contains(identifier)) {
			let kind = if group.is_strict() {
				DependentKind::Strict
			} else {
				DependentKind::Alternative(group.clone())
			};
			out.push(Dependent { package, kind });
		}
	}
	out
}
