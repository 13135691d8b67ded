//! The contract consumed from the external connector framework.
//!
//! A connector subscribes a widget's renderer to the live search-state
//! stream. It must invoke the renderer with `is_first_rendering = true` once,
//! before any real update, and `false` on every subsequent state change,
//! sequentially, for the lifetime of the widget.

use crate::template::TemplatesConfig;
use thiserror::Error;

/// Invoked by the connector on every state delivery. The flag marks the one
/// first rendering that precedes all real updates.
pub type RenderFn<S> = Box<dyn FnMut(&S, bool)>;

/// Zero-argument teardown invoked when the widget is removed from the search
/// orchestration.
pub type DisposeFn = Box<dyn FnMut()>;

/// Construction-time rejection raised by a connector implementation, for
/// example over malformed widget parameters.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ConnectError {
	pub message: String,
}
impl ConnectError {
	#[must_use]
	pub fn new(message: impl Into<String>) -> Self {
		Self { message: message.into() }
	}
}

/// Connector capability: wires a renderer (and optionally a disposer) into
/// the search-state stream and yields the live widget instance.
pub trait Connect<S> {
	/// Widget parameters forwarded to the search layer.
	type Params;
	type Widget;

	fn connect(&self, render: RenderFn<S>, dispose: Option<DisposeFn>, params: Self::Params) -> Result<Self::Widget, ConnectError>;
}

/// Handle onto the search orchestration, carried in every state delivery.
#[derive(Clone, Debug, Default)]
pub struct SearchInstance {
	pub templates_config: TemplatesConfig,
}
