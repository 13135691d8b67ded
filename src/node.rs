//! Renderer-facing output descriptions.
//!
//! Widgets describe their markup as a [`VNode`] tree and hand it to a
//! [`DomRenderer`](`crate::render::DomRenderer`) implementation. An external
//! differ (such as [`lignin-dom`](https://docs.rs/lignin-dom)) owns the actual
//! [***Node***](https://developer.mozilla.org/en-US/docs/Web/API/Node) patching;
//! nothing in this crate touches live DOM structure directly.

use core::fmt;
use std::rc::Rc;

#[derive(Clone, Debug)]
pub enum VNode {
	Element(VElement),
	Text(String),
	/// Opaque markup produced by a template slot. Parsing it is the renderer's concern.
	Html(String),
}

#[derive(Clone, Debug)]
pub struct VElement {
	pub tag: &'static str,
	pub attributes: Vec<(&'static str, String)>,
	pub listeners: Vec<Listener>,
	pub children: Vec<VNode>,
}
impl VElement {
	#[must_use]
	pub fn new(tag: &'static str) -> Self {
		Self {
			tag,
			attributes: Vec::new(),
			listeners: Vec::new(),
			children: Vec::new(),
		}
	}

	#[must_use]
	pub fn attribute(mut self, name: &'static str, value: impl Into<String>) -> Self {
		self.attributes.push((name, value.into()));
		self
	}

	#[must_use]
	pub fn listener(mut self, event: &'static str, handler: EventHandler) -> Self {
		self.listeners.push(Listener { event, handler });
		self
	}

	#[must_use]
	pub fn child(mut self, child: impl Into<VNode>) -> Self {
		self.children.push(child.into());
		self
	}

	/// The value of the attribute called `name`, if set.
	#[must_use]
	pub fn attribute_value(&self, name: &str) -> Option<&str> {
		self.attributes.iter().find(|(attribute, _)| *attribute == name).map(|(_, value)| value.as_str())
	}
}
impl From<VElement> for VNode {
	fn from(element: VElement) -> Self {
		VNode::Element(element)
	}
}

/// An event subscription on a [`VElement`].
#[derive(Clone)]
pub struct Listener {
	pub event: &'static str,
	pub handler: EventHandler,
}
impl fmt::Debug for Listener {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Listener").field("event", &self.event).field("handler", &"..").finish()
	}
}

pub type EventHandler = Rc<dyn Fn(&DomEvent)>;

/// Event payloads delivered by the renderer back-end.
///
/// `Submit` carries the query the form held at submission time, so widgets
/// never have to read input state out of the live document themselves.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DomEvent {
	Input { value: String },
	Change { value: String },
	Submit { query: String },
	Reset,
}
