//! # Postboard Shared
//!
//! Presentation types between the controller and any front end: the board
//! view model and renderers for terminal text and HTML.

pub mod render;
pub mod view;

pub use render::{render_html, render_text};
pub use view::{BoardView, DeletePrompt, FormView, PostCard};
