//! Command handlers - business logic for processing UI events

use std::collections::HashSet;

use crate::app::state::PendingCreate;
use crate::app::AppState;
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::models::Customer;
use crate::validation;

impl AppState {
    // ========================
    // List loading
    // ========================

    /// Mark the table as loading and build the one-shot fetch command
    pub fn start_loading(&mut self) -> NetworkCommand {
        let id = self.next_id();
        self.pending_load = Some(id);
        self.is_loading = true;
        NetworkCommand::FetchCustomers { id }
    }

    // ========================
    // Table navigation
    // ========================

    pub fn select_prev(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected_row + 1 < self.customers.len() {
            self.selected_row += 1;
        }
    }

    // ========================
    // Dialog lifecycle
    // ========================

    pub fn open_dialog(&mut self) {
        self.dialog.reset();
        self.dialog.open = true;
    }

    /// Cancel, backdrop dismiss and successful add all land here
    pub fn close_dialog(&mut self) {
        self.dialog.reset();
    }

    pub fn next_field(&mut self) {
        self.dialog.active_field = self.dialog.active_field.next();
        self.dialog.cursor_position = self.dialog.current_input().len();
    }

    pub fn prev_field(&mut self) {
        self.dialog.active_field = self.dialog.active_field.prev();
        self.dialog.cursor_position = self.dialog.current_input().len();
    }

    // ========================
    // Input editing
    // ========================

    pub fn move_cursor_left(&mut self) {
        let input = self.dialog.current_input();
        let cursor = self.dialog.cursor_position;
        if cursor > 0 {
            self.dialog.cursor_position = input[..cursor]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_cursor_right(&mut self) {
        let input = self.dialog.current_input();
        let cursor = self.dialog.cursor_position;
        if cursor < input.len() {
            self.dialog.cursor_position = input[cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| cursor + i)
                .unwrap_or(input.len());
        }
    }

    pub fn enter_char(&mut self, c: char) {
        let cursor_pos = self.dialog.cursor_position;
        let input = self.current_input_mut();
        if cursor_pos <= input.len() {
            input.insert(cursor_pos, c);
            self.dialog.cursor_position = cursor_pos + c.len_utf8();
        }
        self.dialog.errors.clear(self.dialog.active_field);
    }

    pub fn delete_char(&mut self) {
        if self.dialog.cursor_position > 0 {
            let cursor_pos = self.dialog.cursor_position;
            let input = self.current_input_mut();
            let prev_pos = input[..cursor_pos]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            input.remove(prev_pos);
            self.dialog.cursor_position = prev_pos;
            self.dialog.errors.clear(self.dialog.active_field);
        }
    }

    // ========================
    // Validation & submission
    // ========================

    /// Recompute error flags for the current draft; true when submittable
    pub fn validate_form(&mut self) -> bool {
        self.dialog.errors = validation::validate(&self.dialog.draft);
        !self.dialog.errors.any()
    }

    /// Validate and, if the draft passes, build the create command
    pub fn submit(&mut self) -> Option<NetworkCommand> {
        if !self.dialog.open {
            return None;
        }
        if self.pending_create.is_some() {
            tracing::debug!("Create already in flight, ignoring submit");
            return None;
        }
        if !self.validate_form() {
            return None;
        }

        let id = self.next_id();
        let draft = self.dialog.draft.clone();
        self.pending_create = Some(PendingCreate { id, draft: draft.clone() });
        Some(NetworkCommand::CreateCustomer { id, draft })
    }

    /// Timestamp-based placeholder id, suffixed if it is already taken locally
    pub fn synthesize_id(&self) -> String {
        let base = chrono::Utc::now().timestamp_millis().to_string();
        let taken: HashSet<&str> = self
            .customers
            .iter()
            .filter_map(|c| c.id.as_deref())
            .collect();

        let mut candidate = base.clone();
        let mut suffix = 1;
        while taken.contains(candidate.as_str()) {
            candidate = format!("{}-{}", base, suffix);
            suffix += 1;
        }
        candidate
    }

    // ========================
    // Network responses
    // ========================

    pub fn handle_response(&mut self, response: NetworkResponse) {
        match response {
            NetworkResponse::CustomersLoaded { id, customers } => {
                if self.pending_load != Some(id) {
                    tracing::debug!(id, "Ignoring stale customer list");
                    return;
                }
                tracing::info!(id, count = customers.len(), "Customers loaded");
                self.pending_load = None;
                self.is_loading = false;
                self.customers = customers;
                self.selected_row = self
                    .selected_row
                    .min(self.customers.len().saturating_sub(1));
            }
            NetworkResponse::LoadFailed { id, message } => {
                if self.pending_load != Some(id) {
                    return;
                }
                tracing::warn!(id, error = %message, "Failed to load customers");
                self.pending_load = None;
                self.is_loading = false;
            }
            NetworkResponse::CustomerCreated { id, status } => {
                let Some(pending) = self.pending_create.take_if(|p| p.id == id) else {
                    tracing::debug!(id, "Ignoring stale create response");
                    return;
                };
                let local_id = self.synthesize_id();
                tracing::info!(id, status, local_id = %local_id, "Customer created");
                self.customers.push(Customer::from_draft(&pending.draft, local_id));
                self.close_dialog();
            }
            NetworkResponse::CreateFailed { id, message } => {
                if self.pending_create.take_if(|p| p.id == id).is_none() {
                    return;
                }
                tracing::warn!(id, error = %message, "Failed to create customer");
            }
        }
    }

    // ========================
    // Help popup
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }
}
