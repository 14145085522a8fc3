// SPDX-License-Identifier: MIT
//
// Keymap — keys to editor commands.
//
//   Arrows              move
//   Insert, Ctrl-T      toggle insert/overwrite
//   Backspace           delete the char before the cursor
//   printable, Tab      insert / overwrite
//   Ctrl-S / Ctrl-O     save / load (prompt for a path)
//   Ctrl-F              find (prompt)
//   Ctrl-R              replace all (two prompts)
//   Ctrl-Z / Ctrl-Y     undo / redo
//   Ctrl-Q              quit
//
// Enter is unbound: the editor never adds or removes lines.

use scrawl_core::Command;
use scrawl_term::input::{KeyCode, KeyEvent, Modifiers};

use crate::prompt::PromptKind;

/// What a key means outside a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binding {
    Run(Command),
    Prompt(PromptKind),
    Unbound,
}

/// Look up `key`.
#[must_use]
pub fn lookup(key: &KeyEvent) -> Binding {
    if key.modifiers.contains(Modifiers::CTRL) {
        return ctrl(key.code);
    }
    match key.code {
        KeyCode::Up => Binding::Run(Command::MoveUp),
        KeyCode::Down => Binding::Run(Command::MoveDown),
        KeyCode::Left => Binding::Run(Command::MoveLeft),
        KeyCode::Right => Binding::Run(Command::MoveRight),
        KeyCode::Insert => Binding::Run(Command::ToggleInsertMode),
        KeyCode::Backspace => Binding::Run(Command::DeleteCharacter),
        KeyCode::Tab => Binding::Run(Command::InsertCharacter('\t')),
        KeyCode::Char(ch) if !key.modifiers.contains(Modifiers::ALT) && !ch.is_control() => {
            Binding::Run(Command::InsertCharacter(ch))
        }
        _ => Binding::Unbound,
    }
}

fn ctrl(code: KeyCode) -> Binding {
    let KeyCode::Char(ch) = code else {
        return Binding::Unbound;
    };
    match ch.to_ascii_lowercase() {
        't' => Binding::Run(Command::ToggleInsertMode),
        's' => Binding::Prompt(PromptKind::Save),
        'o' => Binding::Prompt(PromptKind::Load),
        'f' => Binding::Prompt(PromptKind::Find),
        'r' => Binding::Prompt(PromptKind::ReplaceTarget),
        'z' => Binding::Run(Command::Undo),
        'y' => Binding::Run(Command::Redo),
        'q' => Binding::Run(Command::Quit),
        _ => Binding::Unbound,
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
