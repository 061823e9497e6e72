//! Information about the host application the packages are loaded into.

use std::path::Path;

use serde::{Serialize, Deserialize};

use crate::package::PackageId;

/// Identifier of the base game.
pub const BASE_GAME_ID: &str = "ludeon.rimworld";

/// First party expansions, these are always loaded after the base game.
pub const EXPANSION_IDS: [&str; 5] = [
	"ludeon.rimworld.anomaly",
	"ludeon.rimworld.odyssey",
	"ludeon.rimworld.royalty",
	"ludeon.rimworld.ideology",
	"ludeon.rimworld.biotech",
];

/// Used when `Version.txt` can't be read.
pub const FALLBACK_VERSION: &str = "1.6.4633 rev1273";

/// Content every non-official package is implicitly ordered after.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseContent {
	pub base: PackageId,
	pub expansions: Vec<PackageId>,
}

impl Default for BaseContent {
	fn default() -> Self {
		Self {
			base: PackageId::new(BASE_GAME_ID),
			expansions: EXPANSION_IDS.iter().map(PackageId::new).collect(),
		}
	}
}

impl BaseContent {
	/// The base identifier followed by every expansion.
	pub fn identifiers(&self) -> impl Iterator<Item = &PackageId> {
		std::iter::once(&self.base).chain(self.expansions.iter())
	}
}

/// Version of the installed game, e.g. `1.5.4104 rev435`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostVersion {
	full: String,
}

impl HostVersion {
	pub fn new(full: impl Into<String>) -> Self {
		Self { full: full.into() }
	}

	/// Reads `Version.txt` in the game root, falling back to [`FALLBACK_VERSION`] when missing.
	pub fn read_from_game_dir(game_dir: impl AsRef<Path>) -> Self {
		let path = game_dir.as_ref().join("Version.txt");
		match std::fs::read_to_string(&path) {
			Ok(s) => Self::new(s.trim_end_matches(&['\r', '\n'][..])),
			Err(e) => {
				log::warn!("Failed to read game version from {}: {}. Assuming {}", path.display(), e, FALLBACK_VERSION);
				Self::new(FALLBACK_VERSION)
			},
		}
	}

	pub fn full(&self) -> &str {
		&self.full
	}

	/// The major version token packages declare support for, the first three characters (`1.5`).
	pub fn major(&self) -> &str {
		match self.full.char_indices().nth(3) {
			Some((i, _)) => &self.full[..i],
			None => &self.full,
		}
	}
}

impl Default for HostVersion {
	fn default() -> Self {
		Self::new(FALLBACK_VERSION)
	}
}

impl std::fmt::Display for HostVersion {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.full)
	}
}
