use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::GraftError;
use crate::GraftResult;
use crate::rewrite::RewriteOptions;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] = ["graft.toml", ".graft.toml", ".config/graft.toml"];

/// Configuration loaded from a `graft.toml` file.
///
/// ```toml
/// [rewrite]
/// max_replacements = 10000
/// ```
///
/// The rewriter itself never reads files. Hosts load this once and hand the
/// options to [`Components::with_options`](crate::Components::with_options)
/// or [`rewrite_with_options`](crate::rewrite_with_options).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GraftConfig {
	/// Options applied to every rewrite.
	#[serde(default)]
	pub rewrite: RewriteOptions,
}

impl GraftConfig {
	/// Return the first config file found under `root`, if any.
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if the file does not exist.
	pub fn load(root: &Path) -> GraftResult<Option<GraftConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		let content = std::fs::read_to_string(&config_path)?;
		let config = Self::from_toml(&content)?;
		tracing::debug!(path = %config_path.display(), "loaded config");

		Ok(Some(config))
	}

	pub fn from_toml(content: &str) -> GraftResult<GraftConfig> {
		toml::from_str(content).map_err(|e| GraftError::ConfigParse(e.to_string()))
	}
}
