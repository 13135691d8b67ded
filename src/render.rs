//! The render lifecycle shared by all widgets.
//!
//! A widget's renderer closure is driven by its connector. The first
//! invocation only prepares template props (the orchestrator's template
//! configuration is not available any earlier); every later invocation
//! combines the stored props with the delivered state and calls into the
//! [`DomRenderer`] exactly once.

use crate::{
	node::VNode,
	template::{TemplateProps, TemplateSet},
};
use tracing::error;

/// External DOM rendering capability.
///
/// `render` synchronously patches `target`'s subtree to match `node` and is
/// idempotent given the same node description. Failures are the
/// implementation's own to surface; this crate neither wraps nor recovers
/// them.
pub trait DomRenderer {
	type Target;

	fn render(&mut self, node: &VNode, target: &Self::Target);
}

/// Per-widget render lifecycle state.
///
/// Owned by exactly one renderer closure. The transition to `Ready` happens
/// once, on the connector's first invocation, before any DOM output.
pub(crate) enum RenderState<T: TemplateSet> {
	Uninitialized,
	Ready(TemplateProps<T>),
}
impl<T: TemplateSet> RenderState<T> {
	pub(crate) fn ready(&mut self, props: TemplateProps<T>) {
		*self = RenderState::Ready(props);
	}

	/// The prepared props.
	///
	/// The connector contract guarantees the first rendering precedes all
	/// others, so this is not re-validated. A connector that breaks the
	/// contract gets an error log and a skipped render rather than a panic.
	pub(crate) fn props(&self) -> Option<&TemplateProps<T>> {
		match self {
			RenderState::Ready(props) => Some(props),
			RenderState::Uninitialized => {
				error!("Renderer invoked before its first-render template preparation. Skipping.");
				None
			}
		}
	}
}
