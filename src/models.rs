use serde::{Deserialize, Serialize};

/// A customer record as served by `GET /api/customers`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Customer {
    /// Synthesize a display record from a submitted draft
    pub fn from_draft(draft: &CustomerDraft, id: impl Into<String>) -> Self {
        Customer {
            id: Some(id.into()),
            first_name: draft.first_name.clone(),
            last_name: draft.last_name.clone(),
            email: draft.email.clone(),
            phone_number: non_empty(&draft.phone_number),
            address: non_empty(&draft.address),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Unsaved form values; also the `POST /api/customers` body
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub phone_number: String,
}

impl CustomerDraft {
    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::FirstName => &self.first_name,
            DraftField::LastName => &self.last_name,
            DraftField::Email => &self.email,
            DraftField::PhoneNumber => &self.phone_number,
            DraftField::Address => &self.address,
        }
    }

    pub fn field_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::FirstName => &mut self.first_name,
            DraftField::LastName => &mut self.last_name,
            DraftField::Email => &mut self.email,
            DraftField::PhoneNumber => &mut self.phone_number,
            DraftField::Address => &mut self.address,
        }
    }

    pub fn is_empty(&self) -> bool {
        DraftField::ALL.iter().all(|f| self.field(*f).is_empty())
    }
}

/// Form fields in display order
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DraftField {
    #[default]
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    Address,
}

impl DraftField {
    pub const ALL: [DraftField; 5] = [
        DraftField::FirstName,
        DraftField::LastName,
        DraftField::Email,
        DraftField::PhoneNumber,
        DraftField::Address,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DraftField::FirstName => "First Name",
            DraftField::LastName => "Last Name",
            DraftField::Email => "Email",
            DraftField::PhoneNumber => "Phone Number",
            DraftField::Address => "Address",
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, DraftField::FirstName | DraftField::LastName | DraftField::Email)
    }

    pub fn next(&self) -> DraftField {
        match self {
            DraftField::FirstName => DraftField::LastName,
            DraftField::LastName => DraftField::Email,
            DraftField::Email => DraftField::PhoneNumber,
            DraftField::PhoneNumber => DraftField::Address,
            DraftField::Address => DraftField::FirstName,
        }
    }

    pub fn prev(&self) -> DraftField {
        match self {
            DraftField::FirstName => DraftField::Address,
            DraftField::LastName => DraftField::FirstName,
            DraftField::Email => DraftField::LastName,
            DraftField::PhoneNumber => DraftField::Email,
            DraftField::Address => DraftField::PhoneNumber,
        }
    }
}

/// Per-field validation flags; `true` means invalid
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub first_name: bool,
    pub last_name: bool,
    pub email: bool,
}

impl FieldErrors {
    pub fn any(&self) -> bool {
        self.first_name || self.last_name || self.email
    }

    pub fn get(&self, field: DraftField) -> bool {
        match field {
            DraftField::FirstName => self.first_name,
            DraftField::LastName => self.last_name,
            DraftField::Email => self.email,
            DraftField::PhoneNumber | DraftField::Address => false,
        }
    }

    /// Clear a single field's flag
    pub fn clear(&mut self, field: DraftField) {
        match field {
            DraftField::FirstName => self.first_name = false,
            DraftField::LastName => self.last_name = false,
            DraftField::Email => self.email = false,
            DraftField::PhoneNumber | DraftField::Address => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_missing_optional_fields() {
        let json = r#"[{"id":"1","firstName":"A","lastName":"B","email":"a@b.com"}]"#;
        let customers: Vec<Customer> = serde_json::from_str(json).unwrap();
        assert_eq!(customers.len(), 1);
        assert_eq!(customers[0].id.as_deref(), Some("1"));
        assert_eq!(customers[0].phone_number, None);
        assert_eq!(customers[0].address, None);
    }

    #[test]
    fn test_draft_body_has_all_keys() {
        let draft = CustomerDraft {
            first_name: "X".into(),
            last_name: "Y".into(),
            email: "x@y.com".into(),
            ..Default::default()
        };
        let value = serde_json::to_value(&draft).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 5);
        assert_eq!(object["firstName"], "X");
        assert_eq!(object["lastName"], "Y");
        assert_eq!(object["email"], "x@y.com");
        assert_eq!(object["address"], "");
        assert_eq!(object["phoneNumber"], "");
    }

    #[test]
    fn test_from_draft_drops_empty_optionals() {
        let draft = CustomerDraft {
            first_name: "X".into(),
            last_name: "Y".into(),
            email: "x@y.com".into(),
            phone_number: "555-0100".into(),
            ..Default::default()
        };
        let customer = Customer::from_draft(&draft, "1700000000000");
        assert_eq!(customer.id.as_deref(), Some("1700000000000"));
        assert_eq!(customer.phone_number.as_deref(), Some("555-0100"));
        assert_eq!(customer.address, None);
    }

    #[test]
    fn test_field_cycle_wraps() {
        let mut field = DraftField::FirstName;
        for _ in 0..DraftField::ALL.len() {
            field = field.next();
        }
        assert_eq!(field, DraftField::FirstName);
        assert_eq!(DraftField::FirstName.prev(), DraftField::Address);
    }

    #[test]
    fn test_clear_optional_field_error_is_noop() {
        let mut errors = FieldErrors { first_name: true, last_name: true, email: true };
        errors.clear(DraftField::Address);
        assert!(errors.first_name && errors.last_name && errors.email);
        errors.clear(DraftField::LastName);
        assert!(errors.first_name && !errors.last_name && errors.email);
    }
}
