use crate::{optional, required};
use app_error::AppError;
use app_schema::customer::Customer;
use serde::{Deserialize, Serialize};

/// Body of `POST /add/` and `POST /{id}/edit/`.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerForm {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerInput {
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub notes: Option<String>,
}

impl CustomerForm {
    pub fn validate(self) -> Result<CustomerInput, AppError> {
        Ok(CustomerInput {
            first_name: required("firstName", self.first_name)?,
            last_name: required("lastName", self.last_name)?,
            phone: optional(self.phone),
            notes: optional(self.notes),
        })
    }
}

impl CustomerInput {
    pub fn into_customer(self) -> Customer {
        Customer::new(self.first_name, self.last_name, self.phone, self.notes)
    }

    /// Overwrites every editable field; the id is left alone.
    pub fn apply_to(self, customer: &mut Customer) {
        customer.first_name = self.first_name;
        customer.last_name = self.last_name;
        customer.phone = self.phone;
        customer.notes = self.notes;
    }
}

/// Body of `POST /customers`.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct CustomerSearchForm {
    pub customer: Option<String>,
}

impl CustomerSearchForm {
    /// The submitted name with each space-separated word capitalized.
    pub fn search_name(self) -> Result<String, AppError> {
        let name = required("customer", self.customer)?;
        Ok(capitalize_words(&name))
    }
}

/// Upper-cases the first character of every word split on `' '`; the rest of each word is kept.
pub fn capitalize_words(name: &str) -> String {
    name.split(' ')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// A customer row on the list page together with its display name.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerListEntry {
    pub customer: Customer,
    pub name: String,
}

impl From<Customer> for CustomerListEntry {
    fn from(customer: Customer) -> Self {
        let name = customer.full_name();
        Self { customer, name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_error::ErrorKind;

    fn form(first: Option<&str>, last: Option<&str>) -> CustomerForm {
        CustomerForm {
            first_name: first.map(String::from),
            last_name: last.map(String::from),
            phone: Some("555-1234".into()),
            notes: Some("   ".into()),
        }
    }

    #[test]
    fn valid_form_keeps_names_and_drops_blank_notes() {
        let input = form(Some("Jane"), Some("Doe")).validate().unwrap();
        assert_eq!(input.first_name, "Jane");
        assert_eq!(input.last_name, "Doe");
        assert_eq!(input.phone.as_deref(), Some("555-1234"));
        assert_eq!(input.notes, None);
    }

    #[test]
    fn missing_or_blank_names_are_input_shape_errors() {
        let err = form(None, Some("Doe")).validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InputShape);
        assert!(err.message.contains("firstName"));

        let err = form(Some("Jane"), Some(" ")).validate().unwrap_err();
        assert!(err.message.contains("lastName"));
    }

    #[test]
    fn apply_to_overwrites_fields_but_not_id() {
        let mut customer = Customer::new("Old", "Name", Some("1".into()), Some("x".into()));
        customer.id = Some(3);
        form(Some("New"), Some("Person")).validate().unwrap().apply_to(&mut customer);
        assert_eq!(customer.id, Some(3));
        assert_eq!(customer.full_name(), "New Person");
        assert_eq!(customer.notes, None);
    }

    #[test]
    fn capitalizes_each_word() {
        assert_eq!(capitalize_words("jane doe"), "Jane Doe");
        assert_eq!(capitalize_words("mary-ann mcDonald"), "Mary-ann McDonald");
        assert_eq!(capitalize_words("émile  zola"), "Émile  Zola");
    }

    #[test]
    fn blank_search_is_rejected() {
        let err = CustomerSearchForm { customer: None }.search_name().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InputShape);
        let name = CustomerSearchForm {
            customer: Some("jane doe".into()),
        }
        .search_name()
        .unwrap();
        assert_eq!(name, "Jane Doe");
    }

    #[test]
    fn list_entry_carries_full_name() {
        let entry = CustomerListEntry::from(Customer::new("Jane", "Doe", None, None));
        assert_eq!(entry.name, "Jane Doe");
    }
}
