use thiserror::Error;

/// Construction-time failures.
///
/// All of these are fatal to widget construction. No partial widget is ever
/// returned; callers fix their configuration or don't get a widget.
#[derive(Debug, Error)]
pub enum Error {
	/// A required option is missing or invalid, or a deeper construction
	/// layer rejected its parameters. The rendered message always carries
	/// the widget's usage synopsis.
	#[error("{message}\n\n{usage}")]
	Configuration { message: String, usage: &'static str },

	/// A selector-style container lookup matched nothing.
	#[error("container not found for selector {selector:?}")]
	ContainerNotFound { selector: String },

	/// The resolved container's element kind cannot host this widget's markup.
	#[error("unsupported container element: {guidance}")]
	UnsupportedContainer { guidance: &'static str },
}
