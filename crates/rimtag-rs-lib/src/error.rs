//! Library error type.

pub type Result<T> = std::result::Result<T, Error>;

use thiserror::Error;

use crate::package::PackageId;
use crate::load_order::ResolveError;

#[derive(Debug, Error)]
pub enum Error {
	#[error("IO error: {0}")]
	IO(#[from] std::io::Error),
	#[error("JSON error: {0}")]
	SerdeJSON(#[from] serde_json::Error),
	#[error("TOML parsing error: {0}")]
	TomlDe(#[from] toml::de::Error),
	#[error("TOML serialization error: {0}")]
	TomlSer(#[from] toml::ser::Error),
	#[error("parsing error: {0}")]
	Parse(String),
	#[error("duplicate package identifier `{0}` in working set")]
	DuplicateIdentifier(PackageId),
	#[error("resolve failed: {0}")]
	Resolve(#[from] ResolveError),
}
