//! Text-entry state for the "new investment" dialog.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Name must not be empty")]
    EmptyName,

    #[error("Value must be a whole number, got {0:?}")]
    InvalidValue(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Value,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddForm {
    pub name: String,
    pub value: String,
    pub focus: FormField,
    /// Last validation failure, cleared on the next edit.
    pub error: Option<FormError>,
}

impl AddForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_char(&mut self, c: char) {
        match self.focus {
            FormField::Name => {
                if !c.is_control() {
                    self.name.push(c);
                }
            }
            // Numeric keypad semantics: anything else is dropped.
            FormField::Value => {
                if c.is_ascii_digit() || (c == '-' && self.value.is_empty()) {
                    self.value.push(c);
                }
            }
        }
        self.error = None;
    }

    pub fn backspace(&mut self) {
        match self.focus {
            FormField::Name => self.name.pop(),
            FormField::Value => self.value.pop(),
        };
        self.error = None;
    }

    pub fn next_field(&mut self) {
        self.focus = match self.focus {
            FormField::Name => FormField::Value,
            FormField::Value => FormField::Name,
        };
    }

    /// Returns the trimmed name and the parsed value.
    pub fn validate(&self) -> Result<(String, i64), FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::EmptyName);
        }
        let raw = self.value.trim();
        let value = raw
            .parse::<i64>()
            .map_err(|_| FormError::InvalidValue(raw.to_string()))?;
        Ok((name.to_string(), value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, value: &str) -> AddForm {
        AddForm {
            name: name.to_string(),
            value: value.to_string(),
            ..AddForm::default()
        }
    }

    #[test]
    fn starts_on_name_field() {
        let f = AddForm::new();
        assert_eq!(f.focus, FormField::Name);
        assert!(f.name.is_empty());
        assert!(f.value.is_empty());
    }

    #[test]
    fn typing_goes_to_focused_field() {
        let mut f = AddForm::new();
        for c in "CDB".chars() {
            f.push_char(c);
        }
        f.next_field();
        for c in "100".chars() {
            f.push_char(c);
        }
        assert_eq!(f.name, "CDB");
        assert_eq!(f.value, "100");
    }

    #[test]
    fn value_field_rejects_non_digits() {
        let mut f = AddForm::new();
        f.next_field();
        for c in "1a2.3".chars() {
            f.push_char(c);
        }
        assert_eq!(f.value, "123");
    }

    #[test]
    fn minus_only_allowed_as_first_value_char() {
        let mut f = AddForm::new();
        f.next_field();
        for c in "-5-".chars() {
            f.push_char(c);
        }
        assert_eq!(f.value, "-5");
    }

    #[test]
    fn backspace_edits_focused_field() {
        let mut f = form("CDBx", "100");
        f.backspace();
        assert_eq!(f.name, "CDB");
        f.next_field();
        f.backspace();
        assert_eq!(f.value, "10");
    }

    #[test]
    fn backspace_on_empty_is_harmless() {
        let mut f = AddForm::new();
        f.backspace();
        assert!(f.name.is_empty());
    }

    #[test]
    fn next_field_wraps() {
        let mut f = AddForm::new();
        f.next_field();
        f.next_field();
        assert_eq!(f.focus, FormField::Name);
    }

    #[test]
    fn validate_ok() {
        assert_eq!(form("Tesouro", "500").validate(), Ok(("Tesouro".to_string(), 500)));
    }

    #[test]
    fn validate_trims_name() {
        assert_eq!(form("  CDB ", "100").validate(), Ok(("CDB".to_string(), 100)));
    }

    #[test]
    fn validate_empty_name() {
        assert_eq!(form("   ", "100").validate(), Err(FormError::EmptyName));
    }

    #[test]
    fn validate_empty_value() {
        assert_eq!(
            form("CDB", "").validate(),
            Err(FormError::InvalidValue(String::new()))
        );
    }

    #[test]
    fn validate_lone_minus() {
        assert_eq!(
            form("CDB", "-").validate(),
            Err(FormError::InvalidValue("-".to_string()))
        );
    }

    #[test]
    fn validate_overflow() {
        let f = form("CDB", "99999999999999999999");
        assert!(matches!(f.validate(), Err(FormError::InvalidValue(_))));
    }

    #[test]
    fn validate_negative_value() {
        assert_eq!(form("Loss", "-40").validate(), Ok(("Loss".to_string(), -40)));
    }

    #[test]
    fn edit_clears_error() {
        let mut f = form("", "1");
        f.error = Some(FormError::EmptyName);
        f.push_char('A');
        assert_eq!(f.error, None);
    }
}
