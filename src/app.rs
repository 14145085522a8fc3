// SPDX-License-Identifier: MIT
//
// The App — glue between the terminal event loop and the editor core.
//
// Each key flows through:
//
//   stdin → parser → on_event → prompt or keymap → EditorState::apply
//   paint → RenderModel → View → frame → row diff → terminal
//
// Results come back as messages: an `Outcome::Message` or an error's
// Display text lands in the bottom row and stays until the next key.

use std::path::PathBuf;

use scrawl_core::{Command, EditorState, Outcome};
use scrawl_term::event_loop::{Action, App};
use scrawl_term::frame::Frame;
use scrawl_term::input::{Event, KeyEvent};
use scrawl_term::terminal::Size;

use crate::keymap::{self, Binding};
use crate::prompt::{Prompt, PromptKind, PromptResult};
use crate::view::{self, Bottom, View};

#[derive(Debug)]
pub struct Scrawl {
    editor: EditorState,
    view: View,
    prompt: Option<Prompt>,
    message: Option<String>,
    cursor_screen: Option<(u16, u16)>,
}

impl Scrawl {
    #[must_use]
    pub const fn new(editor: EditorState) -> Self {
        Self {
            editor,
            view: View::new(),
            prompt: None,
            message: None,
            cursor_screen: None,
        }
    }

    /// Apply `command` and turn the result into a message.
    fn run(&mut self, command: Command) -> Action {
        match self.editor.apply(command) {
            Ok(Outcome::Quit) => return Action::Quit,
            Ok(Outcome::Message(msg)) => self.message = Some(msg),
            Ok(Outcome::Done) => {}
            Err(err) => self.message = Some(err.to_string()),
        }
        Action::Continue
    }

    fn handle_key(&mut self, key: &KeyEvent) -> Action {
        self.message = None;
        if self.prompt.is_some() {
            self.handle_prompt(key);
            return Action::Continue;
        }
        match keymap::lookup(key) {
            Binding::Run(command) => self.run(command),
            Binding::Prompt(kind) => {
                self.open_prompt(kind);
                Action::Continue
            }
            Binding::Unbound => Action::Continue,
        }
    }

    fn open_prompt(&mut self, kind: PromptKind) {
        let prompt = match (&kind, self.editor.path()) {
            (PromptKind::Save | PromptKind::Load, Some(path)) => {
                Prompt::with_text(kind, &path.display().to_string())
            }
            _ => Prompt::new(kind),
        };
        self.prompt = Some(prompt);
    }

    fn handle_prompt(&mut self, key: &KeyEvent) {
        let Some(prompt) = self.prompt.as_mut() else {
            return;
        };
        match prompt.handle(key) {
            PromptResult::Pending => {}
            PromptResult::Cancelled => self.prompt = None,
            PromptResult::Submitted(text) => {
                let kind = prompt.kind().clone();
                self.prompt = None;
                self.submit(kind, text);
            }
        }
    }

    fn submit(&mut self, kind: PromptKind, text: String) {
        let command = match kind {
            PromptKind::Save => Command::Save(PathBuf::from(text)),
            PromptKind::Load => Command::Load(PathBuf::from(text)),
            PromptKind::Find => Command::Find(text),
            PromptKind::ReplaceTarget => {
                self.prompt = Some(Prompt::new(PromptKind::ReplaceWith(text)));
                return;
            }
            PromptKind::ReplaceWith(target) => Command::Replace {
                target,
                replacement: text,
            },
        };
        self.run(command);
    }

    fn paste(&mut self, text: &str) {
        self.message = None;
        if let Some(prompt) = self.prompt.as_mut() {
            prompt.insert_str(text);
            return;
        }
        self.run(Command::InsertText(text.to_string()));
    }
}

impl App for Scrawl {
    fn on_event(&mut self, event: &Event) -> Action {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Paste(text) => {
                self.paste(text);
                Action::Continue
            }
        }
    }

    fn on_resize(&mut self, size: Size) {
        self.editor.resize(view::text_rows(size.rows));
    }

    fn paint(&mut self, frame: &mut Frame) {
        let bottom = match (&self.prompt, &self.message) {
            (Some(prompt), _) => Bottom::Prompt(prompt),
            (None, Some(msg)) => Bottom::Message(msg),
            (None, None) => Bottom::Empty,
        };
        let options = self.editor.options();
        self.cursor_screen = self.view.paint(
            &self.editor.render(),
            options.tab_stop(),
            options.show_help,
            bottom,
            frame,
        );
    }

    fn cursor(&self) -> Option<(u16, u16)> {
        self.cursor_screen
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
