#![doc(html_root_url = "https://docs.rs/instant-widgets/0.0.1")]
#![warn(clippy::pedantic)]

#[cfg(doctest)]
pub mod readme {
	doc_comment::doctest!("../README.md");
}

pub mod component;
pub mod connector;
pub mod container;
pub mod error;
pub mod menu_select;
pub mod node;
pub mod render;
pub mod search_box;
pub mod template;
pub mod web;

pub use error::Error;
