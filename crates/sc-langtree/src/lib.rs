//! Hierarchical language family tree.
//!
//! A static table of language families is laid out as a turtle-style
//! fractal tree ([`layout`]) and drawn in a scrollable macroquad window
//! ([`render`]).

pub mod layout;
pub mod render;
pub mod summary;
pub mod table;
pub mod viewport;

pub use layout::{Element, Item, NodeKind, Point, Scene, build_scene, layout_tree};
pub use table::{Family, LANGUAGES, Language, Rgb, Subfamily, count_languages, count_words};
pub use viewport::Viewport;
