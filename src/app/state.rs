//! App state - pure data structure with no I/O logic

use crate::messages::RenderState;
use crate::models::{Customer, CustomerDraft, DraftField, FieldErrors};

/// Add-customer dialog state
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DialogState {
    pub open: bool,
    pub draft: CustomerDraft,
    pub errors: FieldErrors,
    pub active_field: DraftField,
    pub cursor_position: usize,
}

impl DialogState {
    /// Close the dialog and discard draft and errors
    pub fn reset(&mut self) {
        *self = DialogState::default();
    }

    pub fn current_input(&self) -> &str {
        self.draft.field(self.active_field)
    }
}

/// A create request awaiting its response, with the draft it carried
#[derive(Clone, Debug)]
pub struct PendingCreate {
    pub id: u64,
    pub draft: CustomerDraft,
}

/// Main application state - pure data, no I/O
pub struct AppState {
    // Customer table (append-only for the session)
    pub customers: Vec<Customer>,
    pub is_loading: bool,
    pub selected_row: usize,

    // Add-customer dialog
    pub dialog: DialogState,

    // In-flight requests
    pub next_request_id: u64,
    pub pending_load: Option<u64>,
    pub pending_create: Option<PendingCreate>,

    // Popups
    pub show_help: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            customers: Vec::new(),
            is_loading: false,
            selected_row: 0,
            dialog: DialogState::default(),
            next_request_id: 1,
            pending_load: None,
            pending_create: None,
            show_help: false,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Get mutable reference to the focused dialog field
    pub fn current_input_mut(&mut self) -> &mut String {
        self.dialog.draft.field_mut(self.dialog.active_field)
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            customers: self.customers.clone(),
            is_loading: self.is_loading,
            selected_row: self.selected_row,
            dialog: self.dialog.clone(),
            is_submitting: self.pending_create.is_some(),
            show_help: self.show_help,
        }
    }
}
