//! Shared component naming: each widget derives its CSS class tokens from one
//! deterministic convention, then appends consumer-supplied overrides.

const NAMESPACE: &str = "iw";

/// Builds the class token for `component`, optionally scoped to a `descendant`
/// part and/or marked with a `modifier` state.
///
/// Pure and deterministic: identical inputs always yield the identical token.
/// Absent options yield the plain root form.
///
/// ```
/// use instant_widgets::component::class_name;
///
/// assert_eq!(class_name("MenuSelect", None, None), "iw-MenuSelect");
/// assert_eq!(class_name("MenuSelect", Some("option"), None), "iw-MenuSelect-option");
/// assert_eq!(class_name("MenuSelect", None, Some("noRefinement")), "iw-MenuSelect--noRefinement");
/// ```
#[must_use]
pub fn class_name(component: &str, descendant: Option<&str>, modifier: Option<&str>) -> String {
	let mut token = String::with_capacity(
		NAMESPACE.len() + 1 + component.len() + descendant.map_or(0, |descendant| 1 + descendant.len()) + modifier.map_or(0, |modifier| 2 + modifier.len()),
	);
	token.push_str(NAMESPACE);
	token.push('-');
	token.push_str(component);
	if let Some(descendant) = descendant {
		token.push('-');
		token.push_str(descendant);
	}
	if let Some(modifier) = modifier {
		token.push_str("--");
		token.push_str(modifier);
	}
	token
}

/// Joins `tokens` with single spaces, skipping empty entries.
///
/// Duplicates are preserved. This is plain whitespace joining, not a set merge.
#[must_use]
pub fn merge_class_names<'a>(tokens: impl IntoIterator<Item = &'a str>) -> String {
	let mut merged = String::new();
	for token in tokens {
		if token.is_empty() {
			continue;
		}
		if !merged.is_empty() {
			merged.push(' ');
		}
		merged.push_str(token);
	}
	merged
}

/// Appends the consumer-supplied override (if any) to a computed token.
#[must_use]
pub fn with_override(computed: &str, overridden: Option<&str>) -> String {
	merge_class_names(core::iter::once(computed).chain(overridden))
}
