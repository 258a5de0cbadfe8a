//! Validation for the contact form
//!
//! Every rule is checked on every submit so the visitor sees all problems at
//! once. Messages are the Polish strings shown next to the fields.

use serde::Serialize;
use thiserror::Error;

use crate::core::content::ProductKind;

/// Minimum length of the name field, in characters, after trimming
pub const MIN_NAME_LENGTH: usize = 3;

/// Minimum length of the phone field, in characters
pub const MIN_PHONE_LENGTH: usize = 9;

/// Form fields that carry validation rules
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Consent,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Consent,
    ];

    /// `id` of the input element
    pub fn input_id(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Consent => "consent",
        }
    }
}

/// Validation error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Imię i nazwisko musi mieć co najmniej 3 znaki")]
    NameTooShort,
    #[error("Podaj poprawny adres email")]
    InvalidEmail,
    #[error("Podaj poprawny numer telefonu")]
    InvalidPhone,
    #[error("Musisz wyrazić zgodę na przetwarzanie danych")]
    ConsentMissing,
}

impl ContactError {
    pub fn field(&self) -> ContactField {
        match self {
            ContactError::NameTooShort => ContactField::Name,
            ContactError::InvalidEmail => ContactField::Email,
            ContactError::InvalidPhone => ContactField::Phone,
            ContactError::ConsentMissing => ContactField::Consent,
        }
    }
}

/// Per-field errors from the last validation run, in field order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: Vec<ContactError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn add(&mut self, error: ContactError) {
        if self.get(error.field()).is_none() {
            self.errors.push(error);
        }
    }

    pub fn get(&self, field: ContactField) -> Option<&ContactError> {
        self.errors.iter().find(|e| e.field() == field)
    }

    /// Message to render next to `field`, if it failed
    pub fn message(&self, field: ContactField) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    /// Forget the error of one field, e.g. once the visitor edits it
    pub fn clear(&mut self, field: ContactField) {
        self.errors.retain(|e| e.field() != field);
    }

    pub fn clear_all(&mut self) {
        self.errors.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &ContactError> {
        self.errors.iter()
    }
}

/// Raw values of the contact form as typed by the visitor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub product: ProductKind,
    pub message: String,
    pub consent: bool,
}

/// Validated payload handed to the contact gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<ProductKind>,
    pub message: String,
    pub consent: bool,
}

impl ContactForm {
    /// Run every rule; on success build the request to send
    pub fn validate(&self) -> Result<ContactRequest, FieldErrors> {
        let mut errors = FieldErrors::new();

        if let Err(e) = validate_name(&self.name) {
            errors.add(e);
        }
        if let Err(e) = validate_email(&self.email) {
            errors.add(e);
        }
        if let Err(e) = validate_phone(&self.phone) {
            errors.add(e);
        }
        if !self.consent {
            errors.add(ContactError::ConsentMissing);
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ContactRequest {
            name: self.name.trim().to_string(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            product: (self.product != ProductKind::Unspecified).then_some(self.product),
            message: self.message.clone(),
            consent: self.consent,
        })
    }
}

/// Name must have at least [`MIN_NAME_LENGTH`] characters once trimmed
pub fn validate_name(name: &str) -> Result<(), ContactError> {
    if name.trim().chars().count() < MIN_NAME_LENGTH {
        Err(ContactError::NameTooShort)
    } else {
        Ok(())
    }
}

/// Whitespace as browsers match it in form patterns: Unicode white space
/// without NEL, plus the byte order mark
fn is_blank(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// `local@domain.tld`: no whitespace anywhere, a single `@` with something
/// before it, and a domain containing a dot with text on both sides
pub fn validate_email(email: &str) -> Result<(), ContactError> {
    if email.chars().any(is_blank) {
        return Err(ContactError::InvalidEmail);
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err(ContactError::InvalidEmail);
    };
    if local.is_empty() || domain.contains('@') {
        return Err(ContactError::InvalidEmail);
    }

    let has_dotted_domain = domain
        .char_indices()
        .filter(|&(_, c)| c == '.')
        .any(|(i, _)| i > 0 && i + 1 < domain.len());
    if has_dotted_domain {
        Ok(())
    } else {
        Err(ContactError::InvalidEmail)
    }
}

/// Phone numbers are digits, whitespace and `-+()`, at least [`MIN_PHONE_LENGTH`] long
pub fn validate_phone(phone: &str) -> Result<(), ContactError> {
    let allowed =
        |c: char| c.is_ascii_digit() || is_blank(c) || matches!(c, '-' | '+' | '(' | ')');

    if phone.chars().count() >= MIN_PHONE_LENGTH && phone.chars().all(allowed) {
        Ok(())
    } else {
        Err(ContactError::InvalidPhone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Jan Kowalski".to_string(),
            email: "jan@email.pl".to_string(),
            phone: "123 456 789".to_string(),
            product: ProductKind::Klasyczna,
            message: "Taras 4x3m".to_string(),
            consent: true,
        }
    }

    #[test]
    fn test_valid_names() {
        assert!(validate_name("Jan").is_ok());
        assert!(validate_name("  Ewa  ").is_ok());
        assert!(validate_name("Łoś").is_ok());
    }

    #[test]
    fn test_short_names() {
        assert_eq!(validate_name("Jo"), Err(ContactError::NameTooShort));
        assert_eq!(validate_name("   Jo   "), Err(ContactError::NameTooShort));
        assert_eq!(validate_name(""), Err(ContactError::NameTooShort));
    }

    #[test]
    fn test_name_length_counts_characters_not_bytes() {
        // two characters, four bytes
        assert!(validate_name("Łś").is_err());
    }

    #[test]
    fn test_valid_emails() {
        assert!(validate_email("jan@email.pl").is_ok());
        assert!(validate_email("a.b+c@sub.domain.com").is_ok());
        assert!(validate_email("x@y.z").is_ok());
    }

    #[test]
    fn test_invalid_emails() {
        assert!(validate_email("bad-email").is_err());
        assert!(validate_email("").is_err());
        assert!(validate_email("@email.pl").is_err());
        assert!(validate_email("jan@").is_err());
        assert!(validate_email("jan@email").is_err());
        assert!(validate_email("jan@.pl").is_err());
        assert!(validate_email("jan@email.").is_err());
        assert!(validate_email("jan@@email.pl").is_err());
        assert!(validate_email("jan@em@ail.pl").is_err());
        assert!(validate_email("jan kowalski@email.pl").is_err());
        assert!(validate_email("jan\u{feff}@email.pl").is_err());
        assert!(validate_email("jan\u{a0}@email.pl").is_err());
    }

    #[test]
    fn test_email_allows_next_line_character() {
        assert!(validate_email("jan\u{85}@email.pl").is_ok());
    }

    #[test]
    fn test_valid_phones() {
        assert!(validate_phone("123456789").is_ok());
        assert!(validate_phone("+48 123 456 789").is_ok());
        assert!(validate_phone("(22) 123-45-67").is_ok());
    }

    #[test]
    fn test_phones_with_pasted_separators() {
        assert!(validate_phone("+48\u{a0}123\u{a0}456\u{a0}789").is_ok());
        assert!(validate_phone("123\t456\t789").is_ok());
        assert!(validate_phone("123\u{202f}456\u{202f}789").is_ok());
        assert!(validate_phone("123\u{85}456789").is_err());
    }

    #[test]
    fn test_invalid_phones() {
        assert!(validate_phone("12345678").is_err());
        assert!(validate_phone("").is_err());
        assert!(validate_phone("123-abc-789").is_err());
        assert!(validate_phone("123.456.789").is_err());
    }

    #[test]
    fn test_valid_form_builds_request() {
        let request = valid_form().validate().unwrap();
        assert_eq!(request.name, "Jan Kowalski");
        assert_eq!(request.product, Some(ProductKind::Klasyczna));
        assert!(request.consent);
    }

    #[test]
    fn test_request_trims_name_and_drops_unspecified_product() {
        let form = ContactForm {
            name: "  Jan Kowalski ".to_string(),
            product: ProductKind::Unspecified,
            ..valid_form()
        };
        let request = form.validate().unwrap();
        assert_eq!(request.name, "Jan Kowalski");
        assert_eq!(request.product, None);

        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("product").is_none());
        assert_eq!(json["consent"], serde_json::Value::Bool(true));
    }

    #[test]
    fn test_all_failures_reported_together() {
        let errors = ContactForm::default().validate().unwrap_err();
        assert_eq!(errors.len(), 4);
        for field in ContactField::ALL {
            assert!(errors.get(field).is_some(), "{:?}", field);
        }
    }

    #[test]
    fn test_field_errors_clear_single_field() {
        let mut errors = ContactForm::default().validate().unwrap_err();
        errors.clear(ContactField::Email);
        assert!(errors.get(ContactField::Email).is_none());
        assert_eq!(errors.len(), 3);
        errors.clear_all();
        assert!(errors.is_empty());
    }

    #[test]
    fn test_field_errors_keep_one_error_per_field() {
        let mut errors = FieldErrors::new();
        errors.add(ContactError::InvalidPhone);
        errors.add(ContactError::InvalidPhone);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ContactError::NameTooShort.to_string(),
            "Imię i nazwisko musi mieć co najmniej 3 znaki"
        );
        assert_eq!(
            ContactError::ConsentMissing.to_string(),
            "Musisz wyrazić zgodę na przetwarzanie danych"
        );
        assert_eq!(ContactError::InvalidEmail.field().input_id(), "email");
    }
}
