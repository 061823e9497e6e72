use serde::{Serialize, Deserialize};

/// A case-normalised package identifier such as `ludeon.rimworld`.
///
/// Descriptors are inconsistent with casing so the identifier is lower-cased on construction,
/// comparisons, hashing and ordering are therefore all case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct PackageId(String);

impl PackageId {
	pub fn new(identifier: impl AsRef<str>) -> Self {
		Self(identifier.as_ref().trim().to_lowercase())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl From<String> for PackageId {
	fn from(value: String) -> Self {
		Self::new(value)
	}
}

impl From<&str> for PackageId {
	fn from(value: &str) -> Self {
		Self::new(value)
	}
}

impl From<PackageId> for String {
	fn from(value: PackageId) -> Self {
		value.0
	}
}

impl AsRef<str> for PackageId {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl AsRef<PackageId> for PackageId {
	fn as_ref(&self) -> &PackageId {
		self
	}
}

impl std::borrow::Borrow<str> for PackageId {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl std::fmt::Display for PackageId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}
