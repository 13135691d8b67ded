use instant_widgets::{
	menu_select::{MenuItem, MenuSelectTemplateOverrides, MenuSelectTemplates},
	template::{prepare_template_props, Template, TemplateSet, TemplatesConfig, TransformData},
};
use std::rc::Rc;

fn item(label: &str, count: u64) -> MenuItem {
	MenuItem {
		label: label.to_owned(),
		value: label.to_lowercase(),
		count,
		is_refined: false,
	}
}

fn text_defaults() -> MenuSelectTemplates {
	MenuSelectTemplates {
		item: Template::text("DEFAULT_ITEM"),
		see_all_options: Template::text("DEFAULT_ALL"),
	}
}

#[test]
fn user_slots_override_defaults_and_absent_slots_fall_back() {
	let resolved = MenuSelectTemplates::resolve(
		&text_defaults(),
		MenuSelectTemplateOverrides {
			item: None,
			see_all_options: Some(Template::text("All")),
		},
	);

	assert_eq!(resolved.item.apply(&item("Shoes", 7)), "DEFAULT_ITEM");
	assert_eq!(resolved.see_all_options.apply(&()), "All");
}

#[test]
fn prepared_props_keep_the_defaults_alongside_the_resolved_set() {
	let props = prepare_template_props(
		None,
		text_defaults(),
		MenuSelectTemplateOverrides {
			item: Some(Template::text("custom")),
			see_all_options: None,
		},
		TemplatesConfig::default(),
	);

	assert_eq!(props.templates.item.apply(&item("Shoes", 7)), "custom");
	assert_eq!(props.defaults.item.apply(&item("Shoes", 7)), "DEFAULT_ITEM");
	assert_eq!(props.templates.see_all_options.apply(&()), "DEFAULT_ALL");
}

#[test]
fn the_bound_transform_runs_before_template_application() {
	let transform: TransformData<MenuItem> = Rc::new(|mut item: MenuItem| {
		item.label = item.label.to_uppercase();
		item
	});
	let props = prepare_template_props(Some(transform), text_defaults(), MenuSelectTemplateOverrides::default(), TemplatesConfig::default());

	assert_eq!(props.transform(item("Shoes", 7)).label, "SHOES");
}

#[test]
fn props_without_a_transform_pass_data_through() {
	let props = prepare_template_props(None, text_defaults(), MenuSelectTemplateOverrides::default(), TemplatesConfig::default());

	assert_eq!(props.transform(item("Shoes", 7)), item("Shoes", 7));
}

#[test]
fn the_orchestrator_configuration_is_carried_into_the_props() {
	let mut config = TemplatesConfig::default();
	config.options.insert("delimiters".to_owned(), "[[ ]]".to_owned());

	let props = prepare_template_props(None, text_defaults(), MenuSelectTemplateOverrides::default(), config);

	assert_eq!(props.templates_config.options.get("delimiters").map(String::as_str), Some("[[ ]]"));
}

#[test]
fn render_templates_receive_the_slot_data() {
	let template: Template<MenuItem> = Template::render_with(|item: &MenuItem| format!("{} ({})", item.label, item.count));

	assert_eq!(template.apply(&item("Shoes", 7)), "Shoes (7)");
}
