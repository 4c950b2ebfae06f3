//! Render state - data structure sent from App layer to UI for rendering

use crate::app::state::DialogState;
use crate::models::Customer;

/// Complete state needed by the UI to render
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    // Customer table
    pub customers: Vec<Customer>,
    pub is_loading: bool,
    pub selected_row: usize,

    // Add-customer dialog
    pub dialog: DialogState,
    pub is_submitting: bool,

    // Popups
    pub show_help: bool,
}
