//! Menu-select facet filter: a single `<select>` over one attribute's values,
//! refining the search on change.

use crate::{
	component::{class_name, merge_class_names, with_override},
	connector::{Connect, RenderFn, SearchInstance},
	container::{self, ContainerScope, ContainerSource},
	error::Error,
	node::{DomEvent, VElement, VNode},
	render::{DomRenderer, RenderState},
	template::{prepare_template_props, Template, TemplateProps, TemplateSet, TransformData},
};
use core::fmt;
use std::rc::Rc;
use tracing::{instrument, trace};

const COMPONENT: &str = "MenuSelect";

const USAGE: &str = "Usage: menu_select(MenuSelectOptions {
	container,            // required: ContainerSource
	attribute,            // required: attribute to filter on
	limit: 10,
	sort_by: [\"name:asc\"],
	css_classes: { root, select, option },
	templates: { item, see_all_options },
	transform_data,
	transform_items,
}, scope, renderer, connector)";

/// One value of the configured attribute, with its result count.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MenuItem {
	pub label: String,
	pub value: String,
	pub count: u64,
	pub is_refined: bool,
}

/// Collection-level reshaping, applied by the search layer before delivery.
pub type TransformItems = Rc<dyn Fn(Vec<MenuItem>) -> Vec<MenuItem>>;

/// One search-state delivery from the connector.
///
/// Borrowed by the renderer for the duration of one invocation and not
/// retained; the widget owns no part of the search state.
#[derive(Clone)]
pub struct MenuSelectUpdate {
	pub items: Vec<MenuItem>,
	pub can_refine: bool,
	pub refine: Rc<dyn Fn(&str)>,
	pub instance: SearchInstance,
}
impl fmt::Debug for MenuSelectUpdate {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("MenuSelectUpdate")
			.field("items", &self.items)
			.field("can_refine", &self.can_refine)
			.field("refine", &"..")
			.field("instance", &self.instance)
			.finish()
	}
}

#[derive(Clone)]
pub struct MenuSelectTemplates {
	pub item: Template<MenuItem>,
	pub see_all_options: Template<()>,
}

/// Consumer template overrides. Unspecified slots keep the defaults.
#[derive(Clone, Default)]
pub struct MenuSelectTemplateOverrides {
	pub item: Option<Template<MenuItem>>,
	pub see_all_options: Option<Template<()>>,
}

impl TemplateSet for MenuSelectTemplates {
	type Overrides = MenuSelectTemplateOverrides;
	type Data = MenuItem;

	fn resolve(defaults: &Self, overrides: Self::Overrides) -> Self {
		Self {
			item: overrides.item.unwrap_or_else(|| defaults.item.clone()),
			see_all_options: overrides.see_all_options.unwrap_or_else(|| defaults.see_all_options.clone()),
		}
	}
}

#[must_use]
pub fn default_templates() -> MenuSelectTemplates {
	MenuSelectTemplates {
		item: Template::render_with(|item: &MenuItem| format!("{} ({})", item.label, item.count)),
		see_all_options: Template::text("See all"),
	}
}

/// Class-name overrides, per slot.
#[derive(Clone, Debug, Default)]
pub struct MenuSelectClassOverrides {
	pub root: Option<String>,
	pub select: Option<String>,
	pub option: Option<String>,
}

/// Class names computed once at construction and never recomputed.
///
/// Both root variants are precomputed so the per-update render only picks one.
#[derive(Clone, Debug)]
pub struct MenuSelectClasses {
	pub root: String,
	pub root_no_refinement: String,
	pub select: String,
	pub option: String,
}

fn build_classes(overrides: &MenuSelectClassOverrides) -> MenuSelectClasses {
	let root = class_name(COMPONENT, None, None);
	let no_refinement = class_name(COMPONENT, None, Some("noRefinement"));
	MenuSelectClasses {
		root_no_refinement: merge_class_names(vec![root.as_str(), no_refinement.as_str(), overrides.root.as_deref().unwrap_or("")]),
		root: with_override(&root, overrides.root.as_deref()),
		select: with_override(&class_name(COMPONENT, Some("select"), None), overrides.select.as_deref()),
		option: with_override(&class_name(COMPONENT, Some("option"), None), overrides.option.as_deref()),
	}
}

/// Declarative construction options.
pub struct MenuSelectOptions<C> {
	pub container: Option<ContainerSource<C>>,
	pub attribute: Option<String>,
	pub limit: usize,
	pub sort_by: Vec<String>,
	pub css_classes: MenuSelectClassOverrides,
	pub templates: MenuSelectTemplateOverrides,
	pub transform_data: Option<TransformData<MenuItem>>,
	pub transform_items: Option<TransformItems>,
}
impl<C> Default for MenuSelectOptions<C> {
	fn default() -> Self {
		Self {
			container: None,
			attribute: None,
			limit: 10,
			sort_by: vec!["name:asc".to_owned()],
			css_classes: MenuSelectClassOverrides::default(),
			templates: MenuSelectTemplateOverrides::default(),
			transform_data: None,
			transform_items: None,
		}
	}
}

/// Parameters the connector forwards to the search layer, which applies
/// sorting, the limit and the collection transform before each delivery.
pub struct MenuSelectParams {
	pub attribute: String,
	pub limit: usize,
	pub sort_by: Vec<String>,
	pub transform_items: Option<TransformItems>,
}
impl fmt::Debug for MenuSelectParams {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("MenuSelectParams")
			.field("attribute", &self.attribute)
			.field("limit", &self.limit)
			.field("sort_by", &self.sort_by)
			.field("transform_items", &self.transform_items.as_ref().map(|_| ".."))
			.finish()
	}
}

fn usage_error(message: &str) -> Error {
	Error::Configuration {
		message: message.to_owned(),
		usage: USAGE,
	}
}

/// Builds a live menu-select widget.
///
/// Validates the options, resolves the container, computes class names once,
/// prepares the renderer closure and delegates to `connector`. No DOM output
/// happens before the connector's first real state delivery.
///
/// # Errors
///
/// [`Error::Configuration`] for a missing `container` or a missing or empty
/// `attribute`, and for anything the connector itself rejects;
/// [`Error::ContainerNotFound`] when a selector matches nothing.
#[instrument(skip(options, scope, renderer, connector))]
pub fn menu_select<S, R, X>(options: MenuSelectOptions<S::Container>, scope: &S, renderer: R, connector: &X) -> Result<X::Widget, Error>
where
	S: ContainerScope,
	S::Container: 'static,
	R: DomRenderer<Target = S::Container> + 'static,
	X: Connect<MenuSelectUpdate, Params = MenuSelectParams>,
{
	let MenuSelectOptions {
		container,
		attribute,
		limit,
		sort_by,
		css_classes,
		templates,
		transform_data,
		transform_items,
	} = options;

	let container = match container {
		Some(container) => container,
		None => return Err(usage_error("The `container` option is required.")),
	};
	let attribute = match attribute {
		Some(attribute) if !attribute.is_empty() => attribute,
		_ => return Err(usage_error("The `attribute` option is required.")),
	};

	let container = container::resolve(scope, container)?;
	let classes = build_classes(&css_classes);
	let defaults = default_templates();

	let mut renderer = renderer;
	let mut state = RenderState::Uninitialized;
	let render: RenderFn<MenuSelectUpdate> = Box::new(move |update, is_first_rendering| {
		if is_first_rendering {
			state.ready(prepare_template_props(
				transform_data.clone(),
				defaults.clone(),
				templates.clone(),
				update.instance.templates_config.clone(),
			));
			return;
		}
		let props = match state.props() {
			Some(props) => props,
			None => return,
		};
		let tree = view(update, props, &classes);
		if cfg!(feature = "dangerous-logging") {
			trace!("Rendering menu-select: {:?}", tree);
		} else {
			trace!("Rendering menu-select over {} item(s).", update.items.len());
		}
		renderer.render(&tree, &container);
	});

	connector
		.connect(
			render,
			None,
			MenuSelectParams {
				attribute,
				limit,
				sort_by,
				transform_items,
			},
		)
		.map_err(|error| usage_error(&error.message))
}

fn view(update: &MenuSelectUpdate, props: &TemplateProps<MenuSelectTemplates>, classes: &MenuSelectClasses) -> VNode {
	let root_class = if update.can_refine { classes.root.clone() } else { classes.root_no_refinement.clone() };

	let refine = Rc::clone(&update.refine);
	let mut select = VElement::new("select")
		.attribute("class", classes.select.clone())
		.listener(
			"change",
			Rc::new(move |event: &DomEvent| {
				if let DomEvent::Change { value } = event {
					refine(value);
				}
			}),
		)
		.child(
			VElement::new("option")
				.attribute("class", classes.option.clone())
				.attribute("value", "")
				.child(VNode::Html(props.templates.see_all_options.apply(&()))),
		);
	if !update.can_refine {
		select = select.attribute("disabled", "disabled");
	}

	for item in &update.items {
		let item = props.transform(item.clone());
		let mut option = VElement::new("option").attribute("class", classes.option.clone()).attribute("value", item.value.clone());
		if item.is_refined {
			option = option.attribute("selected", "selected");
		}
		select = select.child(option.child(VNode::Html(props.templates.item.apply(&item))));
	}

	VElement::new("div").attribute("class", root_class).child(select).into()
}
