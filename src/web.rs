//! Browser implementations of the container capabilities, on top of
//! [`web-sys`](https://docs.rs/web-sys).

use crate::container::{Container, ContainerKind, ContainerScope};
use wasm_bindgen::{JsCast, UnwrapThrowExt};
use web_sys::{Document, Element, HtmlInputElement};

/// Resolves selectors against a [`web_sys::Document`].
#[derive(Clone, Debug)]
pub struct WebScope {
	document: Document,
}
impl WebScope {
	#[must_use]
	pub fn new(document: Document) -> Self {
		Self { document }
	}

	/// The scope over the global window's document, when running in a
	/// browsing context.
	#[must_use]
	pub fn from_window() -> Option<Self> {
		web_sys::window().and_then(|window| window.document()).map(Self::new)
	}
}
impl ContainerScope for WebScope {
	type Container = Element;

	fn find(&self, selector: &str) -> Option<Element> {
		// An invalid selector is indistinguishable from an unmatched one here;
		// both surface as a failed lookup.
		self.document.query_selector(selector).ok().flatten()
	}
}

impl Container for Element {
	fn kind(&self) -> ContainerKind {
		if self.dyn_ref::<HtmlInputElement>().is_some() {
			ContainerKind::Input
		} else {
			ContainerKind::Other
		}
	}

	fn clear(&mut self) {
		let document = self.owner_document().expect_throw("instant-widgets: No owner document found for container element.");
		let range = document.create_range().expect_throw("instant-widgets: Could not create a clearing range.");
		range.select_node_contents(self.as_ref()).expect_throw("instant-widgets: Could not select the container contents.");
		range.delete_contents().expect_throw("instant-widgets: Could not delete the container contents.");
	}
}
