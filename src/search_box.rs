//! Search box: the query input, with optional submit/reset controls and a
//! stalled-search indicator.

use crate::{
	component::{class_name, with_override},
	connector::{Connect, DisposeFn, RenderFn, SearchInstance},
	container::{self, Container, ContainerKind, ContainerScope, ContainerSource},
	error::Error,
	node::{DomEvent, VElement, VNode},
	render::{DomRenderer, RenderState},
	template::{prepare_template_props, Template, TemplateProps, TemplateSet},
};
use core::fmt;
use std::{cell::RefCell, rc::Rc};
use tracing::{instrument, trace, warn};

const COMPONENT: &str = "SearchBox";

const USAGE: &str = "Usage: search_box(SearchBoxOptions {
	container,            // required: ContainerSource (must not be an <input>)
	placeholder: \"\",
	autofocus: Autofocus::Disabled,
	search_as_you_type: true,
	show_submit: true,
	show_reset: true,
	show_loading_indicator: false,
	query_hook,
	css_classes: { root, form, input, submit, reset, loading_indicator },
	templates: { submit, reset, loading_indicator },
}, scope, renderer, connector)";

const INPUT_CONTAINER_GUIDANCE: &str = "the search box renders its own <input>; mount it on a block-level element, or wire an existing input through the connector layer instead";

/// Focus behavior for the rendered input.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Autofocus {
	/// Deprecated. Focuses only while the query is empty; prefer `Enabled`
	/// or `Disabled`.
	Auto,
	Enabled,
	Disabled,
}
impl Default for Autofocus {
	fn default() -> Self {
		Autofocus::Disabled
	}
}

/// Intercepts refinement: receives the typed query and the `search`
/// continuation, and decides if, when and with what to call it.
pub type QueryHook = Rc<dyn Fn(&str, &dyn Fn(&str))>;

/// One search-state delivery from the connector.
#[derive(Clone)]
pub struct SearchBoxUpdate {
	pub query: String,
	pub is_search_stalled: bool,
	pub refine: Rc<dyn Fn(&str)>,
	pub instance: SearchInstance,
}
impl fmt::Debug for SearchBoxUpdate {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SearchBoxUpdate")
			.field("query", &self.query)
			.field("is_search_stalled", &self.is_search_stalled)
			.field("refine", &"..")
			.field("instance", &self.instance)
			.finish()
	}
}

#[derive(Clone)]
pub struct SearchBoxTemplates {
	pub submit: Template<()>,
	pub reset: Template<()>,
	pub loading_indicator: Template<()>,
}

/// Consumer template overrides. Unspecified slots keep the defaults.
#[derive(Clone, Default)]
pub struct SearchBoxTemplateOverrides {
	pub submit: Option<Template<()>>,
	pub reset: Option<Template<()>>,
	pub loading_indicator: Option<Template<()>>,
}

impl TemplateSet for SearchBoxTemplates {
	type Overrides = SearchBoxTemplateOverrides;
	type Data = ();

	fn resolve(defaults: &Self, overrides: Self::Overrides) -> Self {
		Self {
			submit: overrides.submit.unwrap_or_else(|| defaults.submit.clone()),
			reset: overrides.reset.unwrap_or_else(|| defaults.reset.clone()),
			loading_indicator: overrides.loading_indicator.unwrap_or_else(|| defaults.loading_indicator.clone()),
		}
	}
}

#[must_use]
pub fn default_templates() -> SearchBoxTemplates {
	SearchBoxTemplates {
		submit: Template::text(
			r#"<svg viewBox="0 0 24 24" width="12" height="12"><path d="M16.5 15h-.8l-.3-.3a6.5 6.5 0 1 0-.7.7l.3.3v.8l5 5 1.5-1.5-5-5zm-6 0a4.5 4.5 0 1 1 0-9 4.5 4.5 0 0 1 0 9z"/></svg>"#,
		),
		reset: Template::text(
			r#"<svg viewBox="0 0 20 20" width="10" height="10"><path d="M10 8.6 16.6 2 18 3.4 11.4 10l6.6 6.6-1.4 1.4-6.6-6.6L3.4 18 2 16.6 8.6 10 2 3.4 3.4 2z"/></svg>"#,
		),
		loading_indicator: Template::text(
			r#"<svg viewBox="0 0 38 38" width="16" height="16" stroke="currentColor"><g fill="none"><circle cx="19" cy="19" r="18" stroke-opacity=".5"/><path d="M37 19c0-9.94-8.06-18-18-18"/></g></svg>"#,
		),
	}
}

/// Class-name overrides, per slot.
#[derive(Clone, Debug, Default)]
pub struct SearchBoxClassOverrides {
	pub root: Option<String>,
	pub form: Option<String>,
	pub input: Option<String>,
	pub submit: Option<String>,
	pub reset: Option<String>,
	pub loading_indicator: Option<String>,
}

/// Class names computed once at construction and never recomputed.
#[derive(Clone, Debug)]
pub struct SearchBoxClasses {
	pub root: String,
	pub form: String,
	pub input: String,
	pub submit: String,
	pub reset: String,
	pub loading_indicator: String,
}

fn build_classes(overrides: &SearchBoxClassOverrides) -> SearchBoxClasses {
	SearchBoxClasses {
		root: with_override(&class_name(COMPONENT, None, None), overrides.root.as_deref()),
		form: with_override(&class_name(COMPONENT, Some("form"), None), overrides.form.as_deref()),
		input: with_override(&class_name(COMPONENT, Some("input"), None), overrides.input.as_deref()),
		submit: with_override(&class_name(COMPONENT, Some("submit"), None), overrides.submit.as_deref()),
		reset: with_override(&class_name(COMPONENT, Some("reset"), None), overrides.reset.as_deref()),
		loading_indicator: with_override(&class_name(COMPONENT, Some("loadingIndicator"), None), overrides.loading_indicator.as_deref()),
	}
}

/// Declarative construction options.
pub struct SearchBoxOptions<C> {
	pub container: Option<ContainerSource<C>>,
	pub placeholder: String,
	pub autofocus: Autofocus,
	pub search_as_you_type: bool,
	pub show_submit: bool,
	pub show_reset: bool,
	pub show_loading_indicator: bool,
	pub query_hook: Option<QueryHook>,
	pub css_classes: SearchBoxClassOverrides,
	pub templates: SearchBoxTemplateOverrides,
}
impl<C> Default for SearchBoxOptions<C> {
	fn default() -> Self {
		Self {
			container: None,
			placeholder: String::new(),
			autofocus: Autofocus::default(),
			search_as_you_type: true,
			show_submit: true,
			show_reset: true,
			show_loading_indicator: false,
			query_hook: None,
			css_classes: SearchBoxClassOverrides::default(),
			templates: SearchBoxTemplateOverrides::default(),
		}
	}
}

/// Parameters the connector forwards to the search layer. The query hook is
/// applied there, around the connector's own refine implementation.
pub struct SearchBoxParams {
	pub query_hook: Option<QueryHook>,
}
impl fmt::Debug for SearchBoxParams {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SearchBoxParams").field("query_hook", &self.query_hook.as_ref().map(|_| "..")).finish()
	}
}

struct ViewFlags {
	placeholder: String,
	autofocus: Autofocus,
	search_as_you_type: bool,
	show_submit: bool,
	show_reset: bool,
	show_loading_indicator: bool,
}

fn usage_error(message: &str) -> Error {
	Error::Configuration {
		message: message.to_owned(),
		usage: USAGE,
	}
}

/// Builds a live search-box widget.
///
/// Validates the options, resolves the container and rejects text-entry
/// containers, computes class names once, prepares the renderer closure and
/// delegates to `connector` together with a disposer that clears the
/// container on teardown. No DOM output happens before the connector's first
/// real state delivery.
///
/// # Errors
///
/// [`Error::Configuration`] for a missing `container` and for anything the
/// connector itself rejects; [`Error::ContainerNotFound`] when a selector
/// matches nothing; [`Error::UnsupportedContainer`] when the container is
/// itself an input element.
#[instrument(skip(options, scope, renderer, connector))]
pub fn search_box<S, R, X>(options: SearchBoxOptions<S::Container>, scope: &S, renderer: R, connector: &X) -> Result<X::Widget, Error>
where
	S: ContainerScope,
	S::Container: 'static,
	R: DomRenderer<Target = S::Container> + 'static,
	X: Connect<SearchBoxUpdate, Params = SearchBoxParams>,
{
	let SearchBoxOptions {
		container,
		placeholder,
		autofocus,
		search_as_you_type,
		show_submit,
		show_reset,
		show_loading_indicator,
		query_hook,
		css_classes,
		templates,
	} = options;

	let container = match container {
		Some(container) => container,
		None => return Err(usage_error("The `container` option is required.")),
	};
	let container = container::resolve(scope, container)?;
	if container.kind() == ContainerKind::Input {
		return Err(Error::UnsupportedContainer {
			guidance: INPUT_CONTAINER_GUIDANCE,
		});
	}

	if autofocus == Autofocus::Auto {
		warn!("`autofocus: Autofocus::Auto` is deprecated. The input only takes focus while the query is empty; use `Enabled` or `Disabled` instead.");
	}

	let classes = build_classes(&css_classes);
	let defaults = default_templates();
	let flags = ViewFlags {
		placeholder,
		autofocus,
		search_as_you_type,
		show_submit,
		show_reset,
		show_loading_indicator,
	};

	let container = Rc::new(RefCell::new(container));
	let dispose = dispose_container(&container);

	let mut renderer = renderer;
	let mut state = RenderState::Uninitialized;
	let render: RenderFn<SearchBoxUpdate> = Box::new(move |update, is_first_rendering| {
		if is_first_rendering {
			state.ready(prepare_template_props(None, defaults.clone(), templates.clone(), update.instance.templates_config.clone()));
			return;
		}
		let props = match state.props() {
			Some(props) => props,
			None => return,
		};
		let tree = view(update, props, &classes, &flags);
		if cfg!(feature = "dangerous-logging") {
			trace!("Rendering search box: {:?}", tree);
		} else {
			trace!("Rendering search box (stalled: {}).", update.is_search_stalled);
		}
		renderer.render(&tree, &container.borrow());
	});

	connector.connect(render, Some(dispose), SearchBoxParams { query_hook }).map_err(|error| usage_error(&error.message))
}

/// The teardown handed to the connector: clears all rendered content from the
/// container, which stays attached to its parent.
fn dispose_container<C: Container + 'static>(container: &Rc<RefCell<C>>) -> DisposeFn {
	let container = Rc::clone(container);
	Box::new(move || container.borrow_mut().clear())
}

fn view(update: &SearchBoxUpdate, props: &TemplateProps<SearchBoxTemplates>, classes: &SearchBoxClasses, flags: &ViewFlags) -> VNode {
	let focus = match flags.autofocus {
		Autofocus::Enabled => true,
		Autofocus::Disabled => false,
		Autofocus::Auto => update.query.is_empty(),
	};

	let mut input = VElement::new("input")
		.attribute("class", classes.input.clone())
		.attribute("type", "search")
		.attribute("placeholder", flags.placeholder.clone())
		.attribute("value", update.query.clone());
	if focus {
		input = input.attribute("autofocus", "autofocus");
	}
	if flags.search_as_you_type {
		let refine = Rc::clone(&update.refine);
		input = input.listener(
			"input",
			Rc::new(move |event: &DomEvent| {
				if let DomEvent::Input { value } = event {
					refine(value);
				}
			}),
		);
	}

	let submit_refine = Rc::clone(&update.refine);
	let search_as_you_type = flags.search_as_you_type;
	let reset_refine = Rc::clone(&update.refine);
	let mut form = VElement::new("form")
		.attribute("class", classes.form.clone())
		.attribute("novalidate", "novalidate")
		.attribute("role", "search")
		.listener(
			"submit",
			Rc::new(move |event: &DomEvent| {
				if let DomEvent::Submit { query } = event {
					// With search-as-you-type the query was already refined keystroke by keystroke.
					if !search_as_you_type {
						submit_refine(query);
					}
				}
			}),
		)
		.listener(
			"reset",
			Rc::new(move |event: &DomEvent| {
				if let DomEvent::Reset = event {
					reset_refine("");
				}
			}),
		)
		.child(input);

	if flags.show_submit {
		form = form.child(
			VElement::new("button")
				.attribute("class", classes.submit.clone())
				.attribute("type", "submit")
				.attribute("title", "Submit the search query")
				.child(VNode::Html(props.templates.submit.apply(&()))),
		);
	}
	if flags.show_reset {
		let mut reset = VElement::new("button")
			.attribute("class", classes.reset.clone())
			.attribute("type", "reset")
			.attribute("title", "Clear the search query");
		if update.query.is_empty() {
			reset = reset.attribute("hidden", "hidden");
		}
		form = form.child(reset.child(VNode::Html(props.templates.reset.apply(&()))));
	}
	if flags.show_loading_indicator {
		let mut indicator = VElement::new("span").attribute("class", classes.loading_indicator.clone());
		if !update.is_search_stalled {
			indicator = indicator.attribute("hidden", "hidden");
		}
		form = form.child(indicator.child(VNode::Html(props.templates.loading_indicator.apply(&()))));
	}

	VElement::new("div").attribute("class", classes.root.clone()).child(form).into()
}
