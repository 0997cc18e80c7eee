//! Renderers for [`BoardView`](crate::view::BoardView).

mod html;
mod text;

pub use html::{escape_html, render_cards_html, render_html};
pub use text::render_text;
