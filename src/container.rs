//! Mount-point capability and resolution.
//!
//! Widgets accept either a direct container handle or a lookup selector that
//! is resolved through a [`ContainerScope`]. The [`web`](`crate::web`) module
//! provides the browser implementations of both traits.

use crate::error::Error;
use core::fmt;

/// What a widget mounts into.
pub trait Container {
	fn kind(&self) -> ContainerKind;

	/// Removes every child the container currently holds, leaving the
	/// container itself in place.
	fn clear(&mut self);
}

/// The coarse element classification construction cares about.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ContainerKind {
	/// A text-entry element. Widgets that render their own input markup
	/// cannot mount inside one of these.
	Input,
	Other,
}

/// A configured mount point.
pub enum ContainerSource<C> {
	Node(C),
	Selector(String),
}
impl<C> ContainerSource<C> {
	#[must_use]
	pub fn node(container: C) -> Self {
		ContainerSource::Node(container)
	}

	#[must_use]
	pub fn selector(selector: impl Into<String>) -> Self {
		ContainerSource::Selector(selector.into())
	}
}
impl<C> From<&str> for ContainerSource<C> {
	fn from(selector: &str) -> Self {
		ContainerSource::Selector(selector.to_owned())
	}
}
impl<C> From<String> for ContainerSource<C> {
	fn from(selector: String) -> Self {
		ContainerSource::Selector(selector)
	}
}
impl<C> fmt::Debug for ContainerSource<C> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ContainerSource::Node(_) => f.write_str("ContainerSource::Node(..)"),
			ContainerSource::Selector(selector) => f.debug_tuple("ContainerSource::Selector").field(selector).finish(),
		}
	}
}

/// Selector lookup capability.
pub trait ContainerScope {
	type Container: Container;

	fn find(&self, selector: &str) -> Option<Self::Container>;
}

pub(crate) fn resolve<S: ContainerScope>(scope: &S, source: ContainerSource<S::Container>) -> Result<S::Container, Error> {
	match source {
		ContainerSource::Node(container) => Ok(container),
		ContainerSource::Selector(selector) => match scope.find(&selector) {
			Some(container) => Ok(container),
			None => Err(Error::ContainerNotFound { selector }),
		},
	}
}
