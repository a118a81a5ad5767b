//! Main menu choices and the name prompt's line editor.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use tui_bomber::input::should_quit;
use tui_bomber::types::MAX_NAME_LEN;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Play,
    Info,
    Help,
    Scores,
    Quit,
}

impl MenuChoice {
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        match key.code {
            KeyCode::Char('1') => Some(MenuChoice::Play),
            KeyCode::Char('2') => Some(MenuChoice::Info),
            KeyCode::Char('3') => Some(MenuChoice::Help),
            KeyCode::Char('4') => Some(MenuChoice::Scores),
            KeyCode::Char('5') => Some(MenuChoice::Quit),
            _ if should_quit(key) => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameStep {
    Editing,
    Done(String),
    /// Esc: keep whatever name was used before.
    Cancelled,
}

/// Single-line editor for the player name.
#[derive(Debug, Default)]
pub struct NameEntry {
    text: String,
}

impl NameEntry {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn apply(&mut self, key: KeyEvent) -> NameStep {
        match key.code {
            KeyCode::Enter if !self.text.trim().is_empty() => {
                NameStep::Done(self.text.trim().to_string())
            }
            KeyCode::Esc => NameStep::Cancelled,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                NameStep::Cancelled
            }
            KeyCode::Backspace => {
                self.text.pop();
                NameStep::Editing
            }
            KeyCode::Char(c) if !c.is_control() && self.text.chars().count() < MAX_NAME_LEN => {
                self.text.push(c);
                NameStep::Editing
            }
            _ => NameStep::Editing,
        }
    }
}
