//! Template preparation: merges consumer-supplied templates over a widget's
//! defaults and bundles them with the data transform and the orchestrator's
//! template configuration into reusable props.
//!
//! Template content is opaque at this layer. Whether a slot holds static
//! markup or a render function, nothing here validates or compiles it.

use core::fmt;
use hashbrown::HashMap;
use std::{borrow::Cow, rc::Rc};

/// One template slot: static markup or a render function over the slot's data.
pub enum Template<D> {
	Text(Cow<'static, str>),
	Render(Rc<dyn Fn(&D) -> String>),
}
impl<D> Template<D> {
	#[must_use]
	pub fn text(text: impl Into<Cow<'static, str>>) -> Self {
		Template::Text(text.into())
	}

	#[must_use]
	pub fn render_with(render: impl Fn(&D) -> String + 'static) -> Self {
		Template::Render(Rc::new(render))
	}

	/// Applies the template to `data`. Static text ignores the data entirely.
	#[must_use]
	pub fn apply(&self, data: &D) -> String {
		match self {
			Template::Text(text) => text.clone().into_owned(),
			Template::Render(render) => render(data),
		}
	}
}
impl<D> Clone for Template<D> {
	fn clone(&self) -> Self {
		match self {
			Template::Text(text) => Template::Text(text.clone()),
			Template::Render(render) => Template::Render(Rc::clone(render)),
		}
	}
}
impl<D> fmt::Debug for Template<D> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Template::Text(text) => f.debug_tuple("Template::Text").field(text).finish(),
			Template::Render(_) => f.write_str("Template::Render(..)"),
		}
	}
}

/// Per-item data transform applied before template application.
pub type TransformData<D> = Rc<dyn Fn(D) -> D>;

/// Opaque template-engine configuration supplied by the search orchestration
/// at attach time.
///
/// Widgets never interpret it; it only becomes available once the connector
/// delivers the first rendering, which is why template props are prepared
/// there rather than at construction.
#[derive(Clone, Debug, Default)]
pub struct TemplatesConfig {
	pub options: HashMap<String, String>,
}

/// A widget's resolved template bundle.
pub trait TemplateSet: Clone {
	/// Consumer-supplied partial bundle. Unspecified slots fall back to the defaults.
	type Overrides;
	/// The data the per-item slot renders from.
	type Data;

	/// Merges `overrides` over `defaults`, slot by slot.
	fn resolve(defaults: &Self, overrides: Self::Overrides) -> Self;
}

/// Everything the view needs to apply templates, bundled once per widget instance.
pub struct TemplateProps<T: TemplateSet> {
	pub templates: T,
	pub defaults: T,
	pub transform_data: Option<TransformData<T::Data>>,
	pub templates_config: TemplatesConfig,
}
impl<T: TemplateSet> TemplateProps<T> {
	/// Runs the bound data transform over `data`, if one was configured.
	#[must_use]
	pub fn transform(&self, data: T::Data) -> T::Data {
		match &self.transform_data {
			Some(transform) => transform(data),
			None => data,
		}
	}
}
impl<T: TemplateSet + fmt::Debug> fmt::Debug for TemplateProps<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TemplateProps")
			.field("templates", &self.templates)
			.field("defaults", &self.defaults)
			.field("transform_data", &self.transform_data.as_ref().map(|_| ".."))
			.field("templates_config", &self.templates_config)
			.finish()
	}
}

/// Resolves the template bundle and captures the pieces the view reads on
/// every subsequent render.
///
/// Pure aside from the allocation of the returned props.
#[must_use]
pub fn prepare_template_props<T: TemplateSet>(
	transform_data: Option<TransformData<T::Data>>,
	defaults: T,
	overrides: T::Overrides,
	templates_config: TemplatesConfig,
) -> TemplateProps<T> {
	let templates = T::resolve(&defaults, overrides);
	TemplateProps {
		templates,
		defaults,
		transform_data,
		templates_config,
	}
}
