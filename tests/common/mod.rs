//! Mock environment for driving widgets without a browser.
#![allow(dead_code)]

use instant_widgets::{
	connector::{Connect, ConnectError, DisposeFn, RenderFn},
	container::{Container, ContainerKind, ContainerScope},
	menu_select::{MenuSelectParams, MenuSelectUpdate},
	node::{DomEvent, VElement, VNode},
	render::DomRenderer,
	search_box::{SearchBoxParams, SearchBoxUpdate},
};
use std::{
	cell::{Cell, RefCell},
	rc::Rc,
};

pub struct MockContainer {
	pub kind: ContainerKind,
	pub cleared: Rc<Cell<bool>>,
}
impl MockContainer {
	pub fn new(kind: ContainerKind) -> (Self, Rc<Cell<bool>>) {
		let cleared = Rc::new(Cell::new(false));
		(
			Self {
				kind,
				cleared: Rc::clone(&cleared),
			},
			cleared,
		)
	}
}
impl Container for MockContainer {
	fn kind(&self) -> ContainerKind {
		self.kind
	}

	fn clear(&mut self) {
		self.cleared.set(true);
	}
}

pub struct MockScope {
	known: Vec<String>,
}
impl MockScope {
	pub fn with(selectors: &[&str]) -> Self {
		Self {
			known: selectors.iter().map(|selector| (*selector).to_owned()).collect(),
		}
	}

	pub fn empty() -> Self {
		Self { known: Vec::new() }
	}
}
impl ContainerScope for MockScope {
	type Container = MockContainer;

	fn find(&self, selector: &str) -> Option<MockContainer> {
		if self.known.iter().any(|known| known == selector) {
			Some(MockContainer::new(ContainerKind::Other).0)
		} else {
			None
		}
	}
}

/// Records every tree it is asked to render.
#[derive(Clone)]
pub struct RecordingRenderer {
	pub rendered: Rc<RefCell<Vec<VNode>>>,
}
impl RecordingRenderer {
	pub fn new() -> Self {
		Self {
			rendered: Rc::new(RefCell::new(Vec::new())),
		}
	}

	pub fn render_count(&self) -> usize {
		self.rendered.borrow().len()
	}

	pub fn last(&self) -> VNode {
		self.rendered.borrow().last().expect("nothing was rendered").clone()
	}
}
impl DomRenderer for RecordingRenderer {
	type Target = MockContainer;

	fn render(&mut self, node: &VNode, _target: &MockContainer) {
		self.rendered.borrow_mut().push(node.clone());
	}
}

/// A connected widget the test drives by hand.
pub struct Driven<S, P> {
	pub render: RenderFn<S>,
	pub dispose: Option<DisposeFn>,
	pub params: P,
}
impl<S, P> std::fmt::Debug for Driven<S, P>
where
	P: std::fmt::Debug,
{
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Driven")
			.field("render", &"<fn>")
			.field("dispose", &self.dispose.as_ref().map(|_| "<fn>"))
			.field("params", &self.params)
			.finish()
	}
}
impl<S, P> Driven<S, P> {
	pub fn deliver(&mut self, update: &S, is_first_rendering: bool) {
		(self.render)(update, is_first_rendering);
	}

	pub fn dispose(&mut self) {
		if let Some(dispose) = self.dispose.as_mut() {
			dispose();
		}
	}
}

/// Hand-driven stand-in for the external connector framework.
pub struct MockConnector;
impl Connect<MenuSelectUpdate> for MockConnector {
	type Params = MenuSelectParams;
	type Widget = Driven<MenuSelectUpdate, MenuSelectParams>;

	fn connect(&self, render: RenderFn<MenuSelectUpdate>, dispose: Option<DisposeFn>, params: MenuSelectParams) -> Result<Self::Widget, ConnectError> {
		Ok(Driven { render, dispose, params })
	}
}
impl Connect<SearchBoxUpdate> for MockConnector {
	type Params = SearchBoxParams;
	type Widget = Driven<SearchBoxUpdate, SearchBoxParams>;

	fn connect(&self, render: RenderFn<SearchBoxUpdate>, dispose: Option<DisposeFn>, params: SearchBoxParams) -> Result<Self::Widget, ConnectError> {
		Ok(Driven { render, dispose, params })
	}
}

/// Rejects every connection, like a deeper layer refusing malformed parameters.
pub struct RejectingConnector;
impl Connect<MenuSelectUpdate> for RejectingConnector {
	type Params = MenuSelectParams;
	type Widget = Driven<MenuSelectUpdate, MenuSelectParams>;

	fn connect(&self, _render: RenderFn<MenuSelectUpdate>, _dispose: Option<DisposeFn>, _params: MenuSelectParams) -> Result<Self::Widget, ConnectError> {
		Err(ConnectError::new("limit must be at least 1"))
	}
}

pub fn as_element(node: &VNode) -> &VElement {
	match node {
		VNode::Element(element) => element,
		other => panic!("expected an element, got {:?}", other),
	}
}

/// The first direct child element with the given tag.
pub fn child_by_tag<'a>(element: &'a VElement, tag: &str) -> &'a VElement {
	element
		.children
		.iter()
		.find_map(|child| match child {
			VNode::Element(child) if child.tag == tag => Some(child),
			_ => None,
		})
		.unwrap_or_else(|| panic!("no <{}> child in <{}>", tag, element.tag))
}

/// All direct child elements with the given tag.
pub fn children_by_tag<'a>(element: &'a VElement, tag: &str) -> Vec<&'a VElement> {
	element
		.children
		.iter()
		.filter_map(|child| match child {
			VNode::Element(child) if child.tag == tag => Some(child),
			_ => None,
		})
		.collect()
}

/// Fires the element's listener for `event`, if any, and reports whether one ran.
pub fn fire(element: &VElement, event: &str, payload: &DomEvent) -> bool {
	match element.listeners.iter().find(|listener| listener.event == event) {
		Some(listener) => {
			(listener.handler)(payload);
			true
		}
		None => false,
	}
}

/// A refine callback that records every value it is called with.
pub fn recording_refine() -> (Rc<dyn Fn(&str)>, Rc<RefCell<Vec<String>>>) {
	let refined = Rc::new(RefCell::new(Vec::new()));
	let log = Rc::clone(&refined);
	let refine: Rc<dyn Fn(&str)> = Rc::new(move |value: &str| log.borrow_mut().push(value.to_owned()));
	(refine, refined)
}
