//! Various types associated with packages.

use std::path::PathBuf;

use serde::{Serialize, Deserialize};

use crate::host::BaseContent;

/// Version assumed when a package declares no supported versions.
pub const DEFAULT_SUPPORTED_VERSION: f64 = 1.6;

/// A single mod as described by its `About/About.xml`.
///
/// We use the term "Package" instead of "Mod" due to the overlap with rust's keywords.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Package {
	pub identifier: PackageId,
	#[serde(default)]
	pub name: String,
	#[serde(default)]
	pub path: PathBuf,
	#[serde(default)]
	pub source: SourceKind,
	#[serde(flatten)]
	pub hints: OrderHints,
	/// Each group is satisfied by any one of its members.
	#[serde(default)]
	pub dependencies: Vec<DependencyGroup>,
	#[serde(default)]
	pub supported_versions: Vec<String>,
}

impl Package {
	pub fn new(identifier: impl AsRef<str>, source: SourceKind) -> Self {
		Self {
			identifier: PackageId::new(identifier),
			source,
			..Default::default()
		}
	}

	pub fn is_official(&self) -> bool {
		self.source == SourceKind::Official
	}

	/// Every identifier this package must load after.
	///
	/// Non-official packages are also placed after all of `base` unless they explicitly ask to load before the base game.
	/// A package is never implicitly ordered after itself.
	pub fn load_after_full(&self, base: &BaseContent) -> Vec<PackageId> {
		let mut out: Vec<PackageId> = self.hints.load_after.iter()
			.chain(self.hints.force_load_after.iter())
			.cloned()
			.collect();

		if !self.is_official() && !self.load_before_full().contains(&base.base) {
			out.extend(base.identifiers().filter(|id| **id != self.identifier).cloned());
		}
		out
	}

	/// Every identifier this package must load before.
	pub fn load_before_full(&self) -> Vec<PackageId> {
		self.hints.load_before.iter()
			.chain(self.hints.force_load_before.iter())
			.cloned()
			.collect()
	}

	/// Highest game version the package claims to support.
	pub fn best_supported_version(&self) -> f64 {
		self.supported_versions.iter()
			.filter_map(|v| match v.trim().parse::<f64>() {
				Ok(v) => Some(v),
				Err(_) => {
					log::warn!("Package {} has unparsable supported version \"{}\"", self.identifier, v);
					None
				},
			})
			.reduce(f64::max)
			.unwrap_or(DEFAULT_SUPPORTED_VERSION)
	}

	/// Checks if any of the supported versions is exactly `major`.
	pub fn supports_version(&self, major: &str) -> bool {
		self.supported_versions.iter().any(|v| v == major)
	}
}

impl std::fmt::Display for Package {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{} @ {}", self.identifier, self.path.display())
	}
}

impl AsRef<PackageId> for Package {
	fn as_ref(&self) -> &PackageId {
		&self.identifier
	}
}

mod identifier;
pub use identifier::PackageId;

mod source_kind;
pub use source_kind::SourceKind;

mod relationship;
pub use relationship::OrderHints;
pub use relationship::DependencyGroup;

#[cfg(test)]
mod test {
	use super::*;

	fn with_versions(versions: &[&str]) -> Package {
		Package { supported_versions: versions.iter().map(|v| v.to_string()).collect(), ..Package::new("a", SourceKind::Local) }
	}

	#[test] fn best_supported_version_picks_highest() { assert_eq!(with_versions(&["1.4", "1.5", "1.3"]).best_supported_version(), 1.5) }
	#[test] fn best_supported_version_defaults() { assert_eq!(with_versions(&[]).best_supported_version(), DEFAULT_SUPPORTED_VERSION) }
	#[test] fn best_supported_version_skips_garbage() { assert_eq!(with_versions(&["abc", "1.4"]).best_supported_version(), 1.4) }
	#[test] fn supports_version_is_exact() { assert!(!with_versions(&["1.50"]).supports_version("1.5")) }

	#[test]
	fn load_after_full_injects_base_content() {
		let p = Package::new("a", SourceKind::Steam);
		assert_eq!(p.load_after_full(&BaseContent::default()), BaseContent::default().identifiers().cloned().collect::<Vec<_>>());
	}

	#[test]
	fn load_after_full_skips_base_for_official() {
		let p = Package::new("ludeon.rimworld.royalty", SourceKind::Official);
		assert!(p.load_after_full(&BaseContent::default()).is_empty());
	}

	#[test]
	fn load_after_full_skips_base_when_loading_before_it() {
		let mut p = Package::new("early.loader", SourceKind::Local);
		p.hints.force_load_before.push(PackageId::new("Ludeon.RimWorld"));
		p.hints.load_after.push(PackageId::new("some.lib"));
		assert_eq!(p.load_after_full(&BaseContent::default()), vec![PackageId::new("some.lib")]);
	}
}
