//! User configuration, stored as TOML in the XDG config directory.

use std::path::{Path, PathBuf};

use serde::{Serialize, Deserialize};

use crate::host::HostVersion;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
	/// Where Steam workshop content is downloaded to, often `Steam/steamapps/workshop/content/294100`.
	steam_src: PathBuf,
	/// Where local and git managed mods are kept.
	local_src: PathBuf,
	/// The game's user data directory, this is where `Config/ModsConfig.xml` lives.
	game_data: PathBuf,
	/// Root of the game install.
	game_dir: PathBuf,
}

fn home_dir() -> PathBuf {
	#[cfg(target_os = "windows")]
	let home = std::env::var("USERPROFILE");
	#[cfg(not(target_os = "windows"))]
	let home = std::env::var("HOME");

	home.map(PathBuf::from).unwrap_or_else(|_| PathBuf::from("."))
}

impl Default for Config {
	fn default() -> Self {
		let home = home_dir();
		Self {
			steam_src: home.join(".local/share/Steam/steamapps/workshop/content/294100"),
			local_src: Self::config_dir().join("mods"),
			game_data: home.join(".config/unity3d/Ludeon Studios/RimWorld by Ludeon Studios"),
			game_dir: home.join("Games/rimworld"),
		}
	}
}

impl Config {
	/// Directory holding `config.toml`.
	///
	/// Uses `XDG_CONFIG_HOME` when set and falls back to `~/.config`.
	pub fn config_dir() -> PathBuf {
		let base = if let Ok(e) = std::env::var("XDG_CONFIG_HOME") {
			PathBuf::from(e)
		} else {
			home_dir().join(".config")
		};
		base.join("rimtag-rs")
	}

	pub fn config_path() -> PathBuf {
		Self::config_dir().join("config.toml")
	}

	/// Loads the config from [`config_path()`](Config::config_path()).
	///
	/// # Errors
	/// - [`IO`](crate::error::Error::IO) when reading the file.
	/// - [`TomlDe`](crate::error::Error::TomlDe) when the file is not a valid config.
	pub fn load_from_disk() -> crate::Result<Self> {
		Self::load_from_file(Self::config_path())
	}

	pub fn load_from_file(path: impl AsRef<Path>) -> crate::Result<Self> {
		log::debug!("Reading config from {}", path.as_ref().display());
		let s = std::fs::read_to_string(path)?;
		Ok(toml::from_str(&s)?)
	}

	/// Writes the config to `path` creating any parent directories.
	pub fn save_to_file(&self, path: impl AsRef<Path>) -> crate::Result<()> {
		let path = path.as_ref();
		if let Some(parent) = path.parent() {
			std::fs::create_dir_all(parent)?;
		}
		std::fs::write(path, toml::to_string_pretty(self)?)?;
		Ok(())
	}

	pub fn save_to_disk(&self) -> crate::Result<()> {
		self.save_to_file(Self::config_path())
	}

	/// Reads the installed game's version from [`game_dir()`](Config::game_dir()).
	pub fn host_version(&self) -> HostVersion {
		HostVersion::read_from_game_dir(&self.game_dir)
	}

	/* Fields */

	pub fn steam_src(&self) -> &Path {
		&self.steam_src
	}
	pub fn set_steam_src(&mut self, steam_src: PathBuf) {
		self.steam_src = steam_src;
	}

	pub fn local_src(&self) -> &Path {
		&self.local_src
	}
	pub fn set_local_src(&mut self, local_src: PathBuf) {
		self.local_src = local_src;
	}

	pub fn game_data(&self) -> &Path {
		&self.game_data
	}
	pub fn set_game_data(&mut self, game_data: PathBuf) {
		self.game_data = game_data;
	}

	pub fn game_dir(&self) -> &Path {
		&self.game_dir
	}
	pub fn set_game_dir(&mut self, game_dir: PathBuf) {
		self.game_dir = game_dir;
	}

	/// Directory the official content (core and expansions) is installed to.
	pub fn official_src(&self) -> PathBuf {
		self.game_dir.join("Data")
	}
}
