use std::path::Path;

use serde::{Serialize, Deserialize};

/// Where a package was found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceKind {
	/// A plain directory in the local mod source.
	#[default] Local,
	/// A directory in the local mod source under version control.
	Git,
	/// Subscribed through the Steam workshop.
	Steam,
	/// Core content or an expansion shipped with the game.
	Official,
}

impl SourceKind {
	/// Classifies a package directory by which configured source directory it lives in.
	///
	/// Local packages count as [`Git`](SourceKind::Git) when either the package or the whole local source is a repository.
	pub fn classify(path: impl AsRef<Path>, config: &crate::Config) -> Self {
		let path = path.as_ref();
		let dir = match path.parent() {
			Some(dir) => dir,
			None => return SourceKind::Local,
		};

		if dir == config.steam_src() {
			SourceKind::Steam
		} else if dir == config.official_src() {
			SourceKind::Official
		} else if dir == config.local_src() && (path.join(".git").exists() || dir.join(".git").exists()) {
			SourceKind::Git
		} else {
			SourceKind::Local
		}
	}
}
