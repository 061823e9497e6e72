use serde::{Serialize, Deserialize};

use super::PackageId;

/// Ordering hints declared by a package.
///
/// These may name packages which aren't installed, such references are ignored when ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderHints {
	#[serde(default)]
	pub load_after: Vec<PackageId>,
	#[serde(default)]
	pub load_before: Vec<PackageId>,
	#[serde(default)]
	pub force_load_after: Vec<PackageId>,
	#[serde(default)]
	pub force_load_before: Vec<PackageId>,
}

/// A requirement fulfilled by any one of its alternatives.
///
/// A group with a single member is a strict dependency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PackageId>", into = "Vec<PackageId>")]
pub struct DependencyGroup(Vec<PackageId>);

impl DependencyGroup {
	/// # Errors
	/// - [`Parse`](crate::error::Error::Parse) when `alternatives` is empty.
	pub fn new(alternatives: impl IntoIterator<Item = impl Into<PackageId>>) -> crate::Result<Self> {
		let v: Vec<PackageId> = alternatives.into_iter().map(Into::into).collect();
		if v.is_empty() {
			return Err(crate::Error::Parse("dependency group must have at least one member".to_string()));
		}
		Ok(Self(v))
	}

	/// A group containing only `identifier`.
	pub fn strict(identifier: impl Into<PackageId>) -> Self {
		Self(vec![identifier.into()])
	}

	pub fn is_strict(&self) -> bool {
		self.0.len() == 1
	}

	/// The primary identifier followed by any alternatives.
	pub fn alternatives(&self) -> &[PackageId] {
		&self.0
	}

	pub fn contains(&self, identifier: &PackageId) -> bool {
		self.0.contains(identifier)
	}

	/// Checks if any alternative passes `is_present`.
	pub fn is_satisfied_by(&self, mut is_present: impl FnMut(&PackageId) -> bool) -> bool {
		self.0.iter().any(|id| is_present(id))
	}
}

impl TryFrom<Vec<PackageId>> for DependencyGroup {
	type Error = crate::Error;

	fn try_from(value: Vec<PackageId>) -> Result<Self, Self::Error> {
		DependencyGroup::new(value)
	}
}

impl From<DependencyGroup> for Vec<PackageId> {
	fn from(value: DependencyGroup) -> Self {
		value.0
	}
}

impl std::fmt::Display for DependencyGroup {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let names: Vec<&str> = self.0.iter().map(PackageId::as_str).collect();
		write!(f, "[{}]", names.join(", "))
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test] fn dependency_group_empty_is_rejected() { assert!(DependencyGroup::new(Vec::<PackageId>::new()).is_err()) }
	#[test] fn dependency_group_single_is_strict() { assert!(DependencyGroup::strict("a").is_strict()) }
	#[test] fn dependency_group_multiple_not_strict() { assert!(!DependencyGroup::new(["a", "b"]).unwrap().is_strict()) }
	#[test] fn dependency_group_deserialize_empty_fails() { assert!(serde_json::from_str::<DependencyGroup>("[]").is_err()) }
	#[test] fn dependency_group_display() { assert_eq!(DependencyGroup::new(["Foo", "bar"]).unwrap().to_string(), "[foo, bar]") }
}
