//! HTML rendering using the post card markup of the browser board.

use std::fmt::Write;

use crate::view::{BoardView, EMPTY_MESSAGE, PostCard};

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render only the posts container (cards or the empty state).
pub fn render_cards_html(view: &BoardView) -> String {
    let mut out = String::from("<div id=\"posts-container\">\n");

    if view.is_empty {
        let _ = writeln!(out, "  <p id=\"no-posts-message\">{EMPTY_MESSAGE}</p>");
    }
    for card in &view.cards {
        write_card(&mut out, card);
    }

    out.push_str("</div>\n");
    out
}

/// Render a standalone HTML page of the board.
pub fn render_html(view: &BoardView) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Posts</title>\n</head>\n<body>\n{}</body>\n</html>\n",
        render_cards_html(view)
    )
}

fn write_card(out: &mut String, card: &PostCard) {
    let id = escape_html(&card.id);
    let _ = write!(
        out,
        concat!(
            "  <div class=\"post-card{edited}\" data-id=\"{id}\">\n",
            "    <div class=\"post-header\">\n",
            "      <h3 class=\"post-title\">{title}</h3>\n",
            "      <span class=\"post-timestamp\">{timestamp}</span>\n",
            "    </div>\n",
            "    <p class=\"post-content\">{content}</p>\n",
            "    <div class=\"post-actions\">\n",
            "      <button class=\"edit-btn\" data-id=\"{id}\">Edit</button>\n",
            "      <button class=\"delete-btn\" data-id=\"{id}\">Delete</button>\n",
            "    </div>\n",
            "  </div>\n",
        ),
        id = id,
        edited = if card.edited { " edited" } else { "" },
        title = escape_html(&card.title),
        timestamp = escape_html(&card.timestamp),
        content = escape_html(&card.content),
    );
}
