use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    DismissError,
    MoveUp,
    MoveDown,
    QuickSelect(usize),
    RequestAdd,
    RequestRemove,
    ConfirmRemove,
    CancelRemove,
    FormInput(char),
    FormBackspace,
    FormNextField,
    SubmitAdd,
    CancelAdd,
    None,
}

/// Which dialog (if any) currently receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalMode {
    #[default]
    None,
    Add,
    ConfirmDelete,
}

/// Captures the UI state needed to interpret a key press.
#[derive(Debug, Clone, Default)]
pub struct InputContext {
    pub has_error: bool,
    pub modal: ModalMode,
}

pub fn map_key(key: KeyEvent, ctx: &InputContext) -> Action {
    if key.kind != KeyEventKind::Press {
        return Action::None;
    }

    // Ctrl+C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    match ctx.modal {
        ModalMode::ConfirmDelete => {
            return match key.code {
                KeyCode::Char('y' | 'Y') | KeyCode::Enter => Action::ConfirmRemove,
                KeyCode::Char('n' | 'N' | 'q') | KeyCode::Esc => Action::CancelRemove,
                _ => Action::None,
            };
        }
        // Every printable key is text while the form is open.
        ModalMode::Add => {
            return match key.code {
                KeyCode::Esc => Action::CancelAdd,
                KeyCode::Enter => Action::SubmitAdd,
                KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                    Action::FormNextField
                }
                KeyCode::Backspace => Action::FormBackspace,
                KeyCode::Char(c) => Action::FormInput(c),
                _ => Action::None,
            };
        }
        ModalMode::None => {}
    }

    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Esc => {
            if ctx.has_error {
                Action::DismissError
            } else {
                Action::Quit
            }
        }
        KeyCode::Up | KeyCode::Char('k') => Action::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => Action::MoveDown,
        KeyCode::Char('a' | '+') | KeyCode::Insert => Action::RequestAdd,
        KeyCode::Char('d' | 'x') | KeyCode::Delete => Action::RequestRemove,
        KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => {
            Action::QuickSelect((c as u8 - b'0') as usize)
        }
        _ => Action::None,
    }
}
