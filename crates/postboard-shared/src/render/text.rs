//! Plain-text board for terminals.

use std::fmt::Write;

use crate::view::{BoardView, EMPTY_MESSAGE, FormView, PostCard};

/// Render the board as plain text. Cards are numbered from 1 in display order.
pub fn render_text(view: &BoardView) -> String {
    let mut out = String::new();

    write_form(&mut out, &view.form);
    out.push('\n');

    if view.is_empty {
        out.push_str(EMPTY_MESSAGE);
        out.push('\n');
    } else {
        let _ = writeln!(out, "Posts ({})", view.cards.len());
        for (index, card) in view.cards.iter().enumerate() {
            write_card(&mut out, index + 1, card);
        }
    }

    if let Some(prompt) = &view.delete_prompt {
        let _ = writeln!(out, "\n{} [yes/no]  id={}", prompt.message(), prompt.id);
    }
    if let Some(notice) = &view.notice {
        let _ = writeln!(out, "\n! {notice}");
    }

    out
}

fn write_form(out: &mut String, form: &FormView) {
    let _ = writeln!(out, "== {} ==", form.heading);
    if form.show_cancel {
        let _ = writeln!(out, "  title:   {}", form.title);
        let _ = writeln!(out, "  content: {}", form.content);
    }
    if let Some(error) = &form.title_error {
        let _ = writeln!(out, "  ! {error}");
    }
    if let Some(error) = &form.content_error {
        let _ = writeln!(out, "  ! {error}");
    }
    if form.show_cancel {
        let _ = writeln!(out, "  [{}] / cancel", form.submit_label);
    } else {
        let _ = writeln!(out, "  [{}]", form.submit_label);
    }
}

fn write_card(out: &mut String, position: usize, card: &PostCard) {
    let _ = writeln!(out, "\n{position}. {}  ({})", card.title, card.timestamp);
    for line in card.content.lines() {
        let _ = writeln!(out, "   {line}");
    }
    let _ = writeln!(out, "   [edit {position}] [delete {position}]  id={}", card.id);
}
