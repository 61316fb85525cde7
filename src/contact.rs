use std::fmt;

use thiserror::Error;

pub const ACKNOWLEDGEMENT: &str = "Thanks for reaching out! I'll get back to you soon.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        };
        write!(f, "{s}")
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please enter your {0}")]
    MissingField(Field),
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// Contents of the contact form. Nothing is sent anywhere; a valid form only
/// earns the local acknowledgement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        for (field, value) in [
            (Field::Name, &self.name),
            (Field::Email, &self.email),
            (Field::Message, &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }
        if !is_plausible_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }

    /// Validates and returns the text to show the visitor.
    pub fn submit(&self) -> Result<&'static str, ContactError> {
        self.validate()?;
        log::debug!("contact form acknowledged for {}", self.email.trim());
        Ok(ACKNOWLEDGEMENT)
    }
}

fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    // exactly one '@', and a dotted domain with no empty labels
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.split('.').any(str::is_empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_form_is_acknowledged() {
        let form = ContactForm::new("Ada", "ada@example.com", "Hello!");
        assert_eq!(form.validate(), Ok(()));
        assert_eq!(form.submit(), Ok(ACKNOWLEDGEMENT));
    }

    #[test]
    fn test_blank_fields_are_rejected_in_order() {
        let form = ContactForm::default();
        assert_eq!(
            form.validate(),
            Err(ContactError::MissingField(Field::Name))
        );

        let form = ContactForm::new("Ada", "   ", "hi");
        assert_eq!(
            form.validate(),
            Err(ContactError::MissingField(Field::Email))
        );

        let form = ContactForm::new("Ada", "ada@example.com", "\n\t");
        assert_eq!(
            form.submit(),
            Err(ContactError::MissingField(Field::Message))
        );
    }

    #[test]
    fn test_email_shape() {
        let bad = [
            "ada",
            "@example.com",
            "ada@",
            "ada@example",
            "ada@.com",
            "ada@example.",
            "a da@example.com",
            "a@b@c.com",
            "a@b..com",
        ];
        for email in bad {
            let form = ContactForm::new("Ada", email, "hi");
            assert_eq!(form.validate(), Err(ContactError::InvalidEmail), "{email}");
        }
        let good = ["ada@example.com", " ada@mail.example.org ", "a+b@x.io"];
        for email in good {
            let form = ContactForm::new("Ada", email, "hi");
            assert_eq!(form.validate(), Ok(()), "{email}");
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ContactError::MissingField(Field::Email).to_string(),
            "Please enter your email"
        );
        assert_eq!(
            ContactError::InvalidEmail.to_string(),
            "Please enter a valid email address"
        );
    }
}
