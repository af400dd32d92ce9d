use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum GraftError {
	#[error(transparent)]
	#[diagnostic(code(graft::io_error))]
	Io(#[from] std::io::Error),

	#[error(
		"component `{tag}` is expected to return element content or a list of element content, \
		 but got {content}"
	)]
	#[diagnostic(
		code(graft::content_shape),
		help("return an element, text or comment node (or a list of them) from the component")
	)]
	ContentShape {
		tag: String,
		content: serde_json::Value,
	},

	#[error("component `{tag}` failed: {message}")]
	#[diagnostic(code(graft::component))]
	Component { tag: String, message: String },

	#[error("{0}")]
	#[diagnostic(code(graft::custom))]
	Custom(Box<dyn std::error::Error + Send + Sync>),

	#[error("component `{tag}` would exceed the limit of {limit} replacement(s)")]
	#[diagnostic(
		code(graft::replacement_limit),
		help(
			"check whether `{tag}` renders its own tag again, or raise `max_replacements` in \
			 graft.toml"
		)
	)]
	ReplacementLimit { tag: String, limit: usize },

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(graft::config_parse),
		help("check that graft.toml is valid TOML with an optional [rewrite] section")
	)]
	ConfigParse(String),
}

impl GraftError {
	/// Create a [`GraftError::Component`] for a component that wants to fail
	/// with a plain message.
	pub fn component(tag: impl Into<String>, message: impl Into<String>) -> Self {
		Self::Component {
			tag: tag.into(),
			message: message.into(),
		}
	}

	/// Wrap any error raised inside a component.
	pub fn custom(error: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
		Self::Custom(error.into())
	}
}

pub type GraftResult<T> = Result<T, GraftError>;
