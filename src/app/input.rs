use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{App, Message, Model};

impl App {
    pub(super) fn handle_event(event: &Event, model: &Model) -> Option<Message> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => Self::handle_key(*key, model),
            Event::Resize(w, h) => Some(Message::Resize(*w, *h)),
            _ => None,
        }
    }

    pub(super) fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Message::Quit);
        }

        // Overlays swallow everything except their own close keys
        if model.help_visible {
            return match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?' | 'q') => {
                    Some(Message::DismissOverlay)
                }
                _ => None,
            };
        }
        if model.diagnostics_visible {
            return match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') => {
                    Some(Message::DismissOverlay)
                }
                KeyCode::Char('f') => Some(Message::FitGrid),
                KeyCode::Char('q') => Some(Message::Quit),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char('q') => Some(Message::Quit),
            KeyCode::Enter | KeyCode::Char('d') => Some(Message::Draw),
            KeyCode::Char('c') => Some(Message::Clear),
            KeyCode::Char('+' | '=') | KeyCode::Up => Some(Message::GrowGrid),
            KeyCode::Char('-' | '_') | KeyCode::Down => Some(Message::ShrinkGrid),
            KeyCode::Char('f') => Some(Message::FitGrid),
            KeyCode::Char('o') => Some(Message::CycleDotColor),
            KeyCode::Char('s') => Some(Message::Export),
            KeyCode::Char('w') => Some(Message::ToggleWatch),
            KeyCode::Char('r') => Some(Message::ForceReload),
            KeyCode::Char('?' | 'h') => Some(Message::ToggleHelp),
            KeyCode::Esc => Some(Message::DismissOverlay),
            _ => None,
        }
    }
}
