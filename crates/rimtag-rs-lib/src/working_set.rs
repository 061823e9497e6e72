//! The set of packages taking part in a single resolve.

use std::collections::HashMap;
use std::path::Path;

use crate::package::{Package, PackageId};

/// Packages stored in an arena and indexed by identifier.
///
/// Packages are referred to by their index into [`packages()`](WorkingSet::packages()) everywhere
/// in [`load_order`](crate::load_order), the index stays valid for the lifetime of the set.
#[derive(Debug, Clone, Default)]
pub struct WorkingSet {
	packages: Vec<Package>,
	index: HashMap<PackageId, usize>,
}

impl WorkingSet {
	/// # Errors
	/// - [`DuplicateIdentifier`](crate::error::Error::DuplicateIdentifier) when two packages share an identifier.
	pub fn new(packages: impl IntoIterator<Item = Package>) -> crate::Result<Self> {
		let packages: Vec<Package> = packages.into_iter().collect();
		let mut index = HashMap::with_capacity(packages.len());

		for (i, package) in packages.iter().enumerate() {
			if let Some(existing) = index.insert(package.identifier.clone(), i) {
				log::error!("Package {} collides with {}", package, packages[existing]);
				return Err(crate::Error::DuplicateIdentifier(package.identifier.clone()));
			}
		}

		log::debug!("Created working set of {} packages", packages.len());
		Ok(Self { packages, index })
	}

	/// Reads a JSON array of [`Package`] records.
	///
	/// # Errors
	/// - [`IO`](crate::error::Error::IO) when reading the file.
	/// - [`SerdeJSON`](crate::error::Error::SerdeJSON) when deserializing.
	/// - [`DuplicateIdentifier`](crate::error::Error::DuplicateIdentifier) as in [`new()`](WorkingSet::new()).
	pub fn load_from_json(path: impl AsRef<Path>) -> crate::Result<Self> {
		log::debug!("Loading working set from {}", path.as_ref().display());
		let s = std::fs::read_to_string(path)?;
		Self::from_json_str(&s)
	}

	pub fn from_json_str(s: &str) -> crate::Result<Self> {
		let packages: Vec<Package> = serde_json::from_str(s)?;
		Self::new(packages)
	}

	pub fn len(&self) -> usize {
		self.packages.len()
	}

	pub fn is_empty(&self) -> bool {
		self.packages.is_empty()
	}

	pub fn packages(&self) -> &[Package] {
		&self.packages
	}

	pub fn get(&self, index: usize) -> Option<&Package> {
		self.packages.get(index)
	}

	pub fn index_of(&self, identifier: &PackageId) -> Option<usize> {
		self.index.get(identifier).copied()
	}

	pub fn get_by_id(&self, identifier: &PackageId) -> Option<&Package> {
		self.index_of(identifier).map(|i| &self.packages[i])
	}

	pub fn contains(&self, identifier: &PackageId) -> bool {
		self.index.contains_key(identifier)
	}

	/// Iterates `(index, package)` pairs in arena order.
	pub fn iter(&self) -> impl Iterator<Item = (usize, &Package)> {
		self.packages.iter().enumerate()
	}

	pub fn into_packages(self) -> Vec<Package> {
		self.packages
	}
}

impl std::ops::Index<usize> for WorkingSet {
	type Output = Package;

	fn index(&self, index: usize) -> &Self::Output {
		&self.packages[index]
	}
}
