use instant_widgets::component::{class_name, merge_class_names, with_override};

#[test]
fn root_descendant_and_modifier_forms() {
	assert_eq!(class_name("SearchBox", None, None), "iw-SearchBox");
	assert_eq!(class_name("SearchBox", Some("input"), None), "iw-SearchBox-input");
	assert_eq!(class_name("MenuSelect", None, Some("noRefinement")), "iw-MenuSelect--noRefinement");
	assert_eq!(class_name("MenuSelect", Some("option"), Some("selected")), "iw-MenuSelect-option--selected");
}

#[test]
fn identical_arguments_yield_identical_tokens() {
	let first = class_name("MenuSelect", Some("select"), None);
	let second = class_name("MenuSelect", Some("select"), None);
	assert_eq!(first, second);
}

#[test]
fn merging_joins_with_whitespace_and_keeps_duplicates() {
	assert_eq!(merge_class_names(vec!["iw-SearchBox", "custom", "iw-SearchBox"]), "iw-SearchBox custom iw-SearchBox");
}

#[test]
fn merging_skips_empty_tokens() {
	assert_eq!(merge_class_names(vec!["", "iw-SearchBox", ""]), "iw-SearchBox");
	assert_eq!(merge_class_names(Vec::<&str>::new()), "");
}

#[test]
fn overrides_append_to_the_computed_token() {
	assert_eq!(with_override("iw-SearchBox-input", Some("my-input")), "iw-SearchBox-input my-input");
	assert_eq!(with_override("iw-SearchBox-input", None), "iw-SearchBox-input");
}
