//! Network messages - communication between App and Network layers

use crate::models::{Customer, CustomerDraft};

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Fetch the full customer collection
    FetchCustomers { id: u64 },
    /// Create a customer from a submitted draft
    CreateCustomer { id: u64, draft: CustomerDraft },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    /// Customer list decoded from the backend
    CustomersLoaded {
        id: u64,
        customers: Vec<Customer>,
    },
    /// Listing failed (transport, status or decoding)
    LoadFailed {
        id: u64,
        message: String,
    },
    /// Backend accepted the new customer
    CustomerCreated {
        id: u64,
        status: u16,
    },
    /// Creation failed (transport or non-success status)
    CreateFailed {
        id: u64,
        message: String,
    },
}

impl NetworkResponse {
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            NetworkResponse::LoadFailed { .. } | NetworkResponse::CreateFailed { .. }
        )
    }
}
