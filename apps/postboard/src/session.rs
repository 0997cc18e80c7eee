//! Interactive session: reads intents line by line, drives the controller
//! and re-renders the board after every intent.

use std::fs;
use std::io::{BufRead, Write};

use postboard_core::{PostController, PostId, SubmitOutcome};
use postboard_shared::{BoardView, render_html, render_text};

use crate::commands::{Command, HELP, PostRef};
use crate::error::{AppError, AppResult};

const CANCEL_INPUT: &str = ":cancel";

enum Flow {
    Continue,
    Stop,
}

enum FieldInput {
    Value(String),
    Cancel,
    Closed,
}

pub struct Session<R, W> {
    controller: PostController,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(controller: PostController, input: R, output: W) -> Self {
        Self {
            controller,
            input,
            output,
        }
    }

    /// Run until `quit` or end of input.
    pub fn run(&mut self) -> AppResult<()> {
        self.render()?;

        while let Some(line) = self.read_line("> ")? {
            let flow = match Command::parse(&line) {
                Ok(Some(command)) => self.dispatch(command),
                Ok(None) => Ok(Flow::Continue),
                Err(e) => Err(e),
            };

            match flow {
                Ok(Flow::Continue) => {}
                Ok(Flow::Stop) => break,
                Err(e) if e.is_recoverable() => writeln!(self.output, "{e}")?,
                Err(e) => return Err(e),
            }
        }

        tracing::debug!("Session ended");
        Ok(())
    }

    fn dispatch(&mut self, command: Command) -> AppResult<Flow> {
        tracing::debug!(?command, "Dispatching command");

        match command {
            Command::New => {
                self.controller.cancel_edit();
                return self.fill_form();
            }
            Command::Edit(post_ref) => {
                let found = self
                    .resolve(&post_ref)
                    .is_some_and(|id| self.controller.begin_edit(&id));
                if !found {
                    writeln!(self.output, "No post matches {}.", describe(&post_ref))?;
                    return Ok(Flow::Continue);
                }
                return self.fill_form();
            }
            Command::Form => return self.fill_form(),
            Command::CancelEdit => self.controller.cancel_edit(),
            Command::Delete(post_ref) => match self.resolve(&post_ref) {
                Some(id) => self.controller.request_delete(&id),
                None => {
                    writeln!(self.output, "No post matches {}.", describe(&post_ref))?;
                    return Ok(Flow::Continue);
                }
            },
            Command::ConfirmDelete => {
                if self.controller.pending_delete().is_none() {
                    writeln!(self.output, "Nothing to delete.")?;
                    return Ok(Flow::Continue);
                }
                if self.controller.confirm_delete().is_some() {
                    writeln!(self.output, "Post deleted.")?;
                }
            }
            Command::CancelDelete => self.controller.cancel_delete(),
            Command::List => {}
            Command::Export(path) => {
                let view = BoardView::from_controller(&self.controller);
                fs::write(&path, render_html(&view))
                    .map_err(|e| AppError::Export(format!("{}: {e}", path.display())))?;
                tracing::info!(path = %path.display(), posts = view.cards.len(), "Exported board");
                writeln!(
                    self.output,
                    "Exported {} post(s) to {}.",
                    view.cards.len(),
                    path.display()
                )?;
                return Ok(Flow::Continue);
            }
            Command::Help => {
                write!(self.output, "{HELP}")?;
                return Ok(Flow::Continue);
            }
            Command::Quit => return Ok(Flow::Stop),
        }

        self.render()?;
        Ok(Flow::Continue)
    }

    /// Prompt for both fields and submit them in the form's current mode.
    fn fill_form(&mut self) -> AppResult<Flow> {
        let current = self.controller.form().clone();

        let title = match self.read_field("Title", &current.title)? {
            FieldInput::Value(title) => title,
            FieldInput::Cancel => return self.cancel_form(),
            FieldInput::Closed => return Ok(Flow::Stop),
        };
        let content = match self.read_field("Content", &current.content)? {
            FieldInput::Value(content) => content,
            FieldInput::Cancel => return self.cancel_form(),
            FieldInput::Closed => return Ok(Flow::Stop),
        };

        match self.controller.submit(&title, &content) {
            Ok(SubmitOutcome::Created(_)) => writeln!(self.output, "Post added.")?,
            Ok(SubmitOutcome::Updated(_)) => writeln!(self.output, "Post updated.")?,
            Ok(SubmitOutcome::TargetMissing(_)) => {
                writeln!(self.output, "That post no longer exists.")?
            }
            Err(_) => {}
        }

        self.render()?;
        Ok(Flow::Continue)
    }

    fn cancel_form(&mut self) -> AppResult<Flow> {
        self.controller.cancel_edit();
        writeln!(self.output, "Cancelled.")?;
        self.render()?;
        Ok(Flow::Continue)
    }

    /// Read one form field. An empty answer keeps a non-empty current value.
    fn read_field(&mut self, label: &str, current: &str) -> AppResult<FieldInput> {
        let prompt = if current.is_empty() {
            format!("{label}: ")
        } else {
            format!("{label} [{current}]: ")
        };

        let Some(line) = self.read_line(&prompt)? else {
            return Ok(FieldInput::Closed);
        };

        if line.trim() == CANCEL_INPUT {
            return Ok(FieldInput::Cancel);
        }
        if line.is_empty() && !current.is_empty() {
            return Ok(FieldInput::Value(current.to_string()));
        }
        Ok(FieldInput::Value(line))
    }

    fn read_line(&mut self, prompt: &str) -> AppResult<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn resolve(&self, post_ref: &PostRef) -> Option<PostId> {
        match post_ref {
            PostRef::Position(n) => self
                .controller
                .posts()
                .get(n - 1)
                .map(|post| post.id.clone()),
            PostRef::Id(id) => self
                .controller
                .find(&PostId::from(id.as_str()))
                .map(|post| post.id.clone()),
        }
    }

    fn render(&mut self) -> AppResult<()> {
        let view = BoardView::from_controller(&self.controller);
        write!(self.output, "\n{}", render_text(&view))?;
        self.output.flush()?;
        Ok(())
    }
}

fn describe(post_ref: &PostRef) -> String {
    match post_ref {
        PostRef::Position(n) => format!("#{n}"),
        PostRef::Id(id) => format!("id {id}"),
    }
}
