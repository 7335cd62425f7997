//! Two-field form for entering player names.

use crossterm::event::KeyCode;

/// Longest name the form accepts.
pub const MAX_NAME_LEN: usize = 20;

/// Which field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Name for the player holding X.
    PlayerX,
    /// Name for the player holding O.
    PlayerO,
}

/// What a key press did to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// Still editing.
    Editing,
    /// Enter pressed.
    Submitted,
    /// Esc pressed.
    Cancelled,
}

/// Editable pair of names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameForm {
    player_x: String,
    player_o: String,
    focus: Field,
}

impl NameForm {
    /// Creates a form prefilled with the given names.
    pub fn new(player_x: impl Into<String>, player_o: impl Into<String>) -> Self {
        Self {
            player_x: player_x.into(),
            player_o: player_o.into(),
            focus: Field::PlayerX,
        }
    }

    /// Text entered for X.
    pub fn player_x(&self) -> &str {
        &self.player_x
    }

    /// Text entered for O.
    pub fn player_o(&self) -> &str {
        &self.player_o
    }

    /// Field that receives typed characters.
    pub fn focus(&self) -> Field {
        self.focus
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            Field::PlayerX => &mut self.player_x,
            Field::PlayerO => &mut self.player_o,
        }
    }

    /// Applies a key press.
    pub fn handle_key(&mut self, key: KeyCode) -> FormEvent {
        match key {
            KeyCode::Enter => return FormEvent::Submitted,
            KeyCode::Esc => return FormEvent::Cancelled,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focus = match self.focus {
                    Field::PlayerX => Field::PlayerO,
                    Field::PlayerO => Field::PlayerX,
                };
            }
            KeyCode::Backspace => {
                self.focused_mut().pop();
            }
            KeyCode::Char(c) if !c.is_control() => {
                let field = self.focused_mut();
                if field.chars().count() < MAX_NAME_LEN {
                    field.push(c);
                }
            }
            _ => {}
        }
        FormEvent::Editing
    }
}
