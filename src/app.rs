use crate::form::AddForm;
use crate::input::{Action, InputContext, ModalMode};
use crate::store::InvestmentStore;
use std::time::Instant;

// UI constants
pub const NOTIFICATION_TTL_SECS: u64 = 4;
pub const ERROR_TTL_SECS: u64 = 10;
pub const QUICK_SELECT_MAX: usize = 9;
pub const NARROW_WIDTH_THRESHOLD: u16 = 60;
pub const DEFAULT_CURRENCY: &str = "R$";

pub type InvestmentKey = u64;

/// One tracked investment. Two records with the same `key` are the same entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Investment {
    pub key: InvestmentKey,
    pub name: String,
    pub value: i64,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub timestamp: Instant,
}

/// Immutable configuration set at startup.
pub struct AppConfig {
    pub currency: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

/// Screen controller state.
///
/// `investments` is the last snapshot received from the store and is only ever
/// replaced wholesale. `add_dialog` and `pending_delete` are the two transient
/// modal states; they are independent of each other and never persisted.
pub struct AppState {
    pub config: AppConfig,

    pub investments: Vec<Investment>,
    pub cursor: usize,

    // Modal state
    pub add_dialog: Option<AddForm>,
    pub pending_delete: Option<Investment>,

    // Transient UI
    pub notifications: Vec<Notification>,
    pub error: Option<(String, Instant)>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            investments: Vec::new(),
            cursor: 0,
            add_dialog: None,
            pending_delete: None,
            notifications: Vec::new(),
            error: None,
            should_quit: false,
        }
    }

    /// Replaces the rendered collection with a fresh store snapshot.
    pub fn apply_snapshot(&mut self, items: Vec<Investment>) {
        self.investments = items;
        if self.cursor >= self.investments.len() {
            self.cursor = self.investments.len().saturating_sub(1);
        }
    }

    pub fn selected(&self) -> Option<&Investment> {
        self.investments.get(self.cursor)
    }

    pub fn move_cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_cursor_down(&mut self) {
        if !self.investments.is_empty() && self.cursor < self.investments.len() - 1 {
            self.cursor += 1;
        }
    }

    /// Selects the nth row (1-indexed). Out-of-range is ignored.
    pub fn quick_select(&mut self, n: usize) {
        if n >= 1 && n <= self.investments.len() {
            self.cursor = n - 1;
        }
    }

    pub fn total_value(&self) -> i64 {
        self.investments
            .iter()
            .fold(0i64, |acc, i| acc.saturating_add(i.value))
    }

    pub fn format_value(&self, value: i64) -> String {
        format!("{}{}", self.config.currency, value)
    }

    // --- Add dialog ---

    pub fn has_add_dialog(&self) -> bool {
        self.add_dialog.is_some()
    }

    pub fn request_add(&mut self) {
        self.add_dialog = Some(AddForm::new());
    }

    /// Forwards an already-validated entry to the store and closes the dialog.
    pub fn confirm_add(&mut self, store: &dyn InvestmentStore, name: &str, value: i64) {
        let item = store.add(name, value);
        self.add_dialog = None;
        self.add_notification(format!("Added {}", item.name));
    }

    pub fn cancel_add(&mut self) {
        self.add_dialog = None;
    }

    /// Validates the open form. On success the entry goes to the store; on
    /// failure the error is kept on the form and the dialog stays open.
    pub fn submit_add_form(&mut self, store: &dyn InvestmentStore) {
        let Some(form) = self.add_dialog.as_mut() else {
            return;
        };
        match form.validate() {
            Ok((name, value)) => self.confirm_add(store, &name, value),
            Err(e) => form.error = Some(e),
        }
    }

    // --- Delete confirmation ---

    pub fn has_confirm_dialog(&self) -> bool {
        self.pending_delete.is_some()
    }

    /// First step of removal: remember the target, touch nothing else.
    pub fn request_remove(&mut self, item: Investment) {
        self.pending_delete = Some(item);
    }

    pub fn request_remove_selected(&mut self) {
        if let Some(item) = self.selected().cloned() {
            self.request_remove(item);
        }
    }

    pub fn confirm_remove(&mut self, store: &dyn InvestmentStore) {
        let Some(target) = self.pending_delete.take() else {
            return;
        };
        if store.remove(&target) {
            self.add_notification(format!("Removed {}", target.name));
        }
    }

    pub fn cancel_remove(&mut self) {
        self.pending_delete = None;
    }

    // --- Input routing ---

    /// The confirmation dialog is drawn on top, so it owns the keyboard when
    /// both dialogs are open.
    pub fn modal(&self) -> ModalMode {
        if self.pending_delete.is_some() {
            ModalMode::ConfirmDelete
        } else if self.add_dialog.is_some() {
            ModalMode::Add
        } else {
            ModalMode::None
        }
    }

    pub fn input_context(&self) -> InputContext {
        InputContext {
            has_error: self.error.is_some(),
            modal: self.modal(),
        }
    }

    pub fn handle_action(&mut self, action: Action, store: &dyn InvestmentStore) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::DismissError => self.clear_error(),
            Action::MoveUp => self.move_cursor_up(),
            Action::MoveDown => self.move_cursor_down(),
            Action::QuickSelect(n) => self.quick_select(n),
            Action::RequestAdd => self.request_add(),
            Action::RequestRemove => self.request_remove_selected(),
            Action::ConfirmRemove => self.confirm_remove(store),
            Action::CancelRemove => self.cancel_remove(),
            Action::FormInput(c) => {
                if let Some(form) = self.add_dialog.as_mut() {
                    form.push_char(c);
                }
            }
            Action::FormBackspace => {
                if let Some(form) = self.add_dialog.as_mut() {
                    form.backspace();
                }
            }
            Action::FormNextField => {
                if let Some(form) = self.add_dialog.as_mut() {
                    form.next_field();
                }
            }
            Action::SubmitAdd => self.submit_add_form(store),
            Action::CancelAdd => self.cancel_add(),
            Action::None => {}
        }
    }

    // --- Toasts ---

    pub fn add_notification(&mut self, message: String) {
        self.notifications.push(Notification {
            message,
            timestamp: Instant::now(),
        });
    }

    pub fn prune_notifications(&mut self) {
        let now = Instant::now();
        self.notifications
            .retain(|n| now.duration_since(n.timestamp).as_secs() < NOTIFICATION_TTL_SECS);
    }

    pub fn set_error(&mut self, msg: String) {
        self.error = Some((msg, Instant::now()));
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn prune_error(&mut self) {
        if let Some((_, ts)) = &self.error {
            if ts.elapsed().as_secs() >= ERROR_TTL_SECS {
                self.error = None;
            }
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().map(|(msg, _)| msg.as_str())
    }
}
