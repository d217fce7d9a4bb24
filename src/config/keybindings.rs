//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crate::model::SortField;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings alongside arrow keys.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }

    fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings.insert(KeyEvent::new(code, modifiers), action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut keys = Self {
            bindings: HashMap::new(),
        };

        // Search
        keys.bind(KeyCode::Char('/'), KeyModifiers::NONE, KeyAction::StartSearch);
        keys.bind(KeyCode::Char('f'), KeyModifiers::CONTROL, KeyAction::StartSearch);

        // Sorting
        keys.bind(
            KeyCode::Char('1'),
            KeyModifiers::NONE,
            KeyAction::SortBy(SortField::PostId),
        );
        keys.bind(
            KeyCode::Char('2'),
            KeyModifiers::NONE,
            KeyAction::SortBy(SortField::Name),
        );
        keys.bind(
            KeyCode::Char('3'),
            KeyModifiers::NONE,
            KeyAction::SortBy(SortField::Email),
        );

        // Pagination
        for code in [KeyCode::Right, KeyCode::Char('l'), KeyCode::Char('n')] {
            keys.bind(code, KeyModifiers::NONE, KeyAction::NextPage);
        }
        for code in [KeyCode::Left, KeyCode::Char('h'), KeyCode::Char('p')] {
            keys.bind(code, KeyModifiers::NONE, KeyAction::PrevPage);
        }
        keys.bind(KeyCode::Char('g'), KeyModifiers::NONE, KeyAction::FirstPage);
        keys.bind(KeyCode::Home, KeyModifiers::NONE, KeyAction::FirstPage);
        keys.bind(KeyCode::Char('G'), KeyModifiers::SHIFT, KeyAction::LastPage);
        keys.bind(KeyCode::End, KeyModifiers::NONE, KeyAction::LastPage);
        keys.bind(KeyCode::Char('s'), KeyModifiers::NONE, KeyAction::CyclePageSize);

        // Row cursor
        keys.bind(KeyCode::Char('j'), KeyModifiers::NONE, KeyAction::RowDown);
        keys.bind(KeyCode::Down, KeyModifiers::NONE, KeyAction::RowDown);
        keys.bind(KeyCode::Char('k'), KeyModifiers::NONE, KeyAction::RowUp);
        keys.bind(KeyCode::Up, KeyModifiers::NONE, KeyAction::RowUp);
        keys.bind(KeyCode::Enter, KeyModifiers::NONE, KeyAction::ToggleExpand);
        keys.bind(KeyCode::Char(' '), KeyModifiers::NONE, KeyAction::ToggleExpand);

        // Screens
        keys.bind(KeyCode::Char('u'), KeyModifiers::NONE, KeyAction::OpenProfile);
        keys.bind(KeyCode::Esc, KeyModifiers::NONE, KeyAction::Back);

        // Application controls
        keys.bind(KeyCode::Char('?'), KeyModifiers::NONE, KeyAction::Help);
        keys.bind(KeyCode::Char('q'), KeyModifiers::NONE, KeyAction::Quit);
        keys.bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        keys
    }
}
