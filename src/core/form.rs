use crate::domain::model::NewEntry;
use serde::Deserialize;

pub const DEFAULT_QUANTITY: f64 = 1.0;

/// Raw add-form fields as typed by the user.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub quantity: String,
}

impl FormInput {
    pub fn new(name: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
        }
    }

    /// `None` when the name is blank: the submission is silently dropped.
    pub fn into_new_entry(self, default_quantity: f64) -> Option<NewEntry> {
        let name = self.name.trim();
        if name.is_empty() {
            return None;
        }

        Some(NewEntry {
            name: name.to_string(),
            quantity: parse_quantity(&self.quantity, default_quantity),
        })
    }
}

/// Parses the quantity field. Anything that is not a finite, positive
/// number falls back to `default_quantity`.
pub fn parse_quantity(raw: &str, default_quantity: f64) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => value,
        _ => default_quantity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_trimmed() {
        let entry = FormInput::new("  Milk ", "2")
            .into_new_entry(DEFAULT_QUANTITY)
            .unwrap();

        assert_eq!(entry.name, "Milk");
        assert_eq!(entry.quantity, 2.0);
    }

    #[test]
    fn test_blank_name_is_ignored() {
        assert!(FormInput::new("", "2").into_new_entry(DEFAULT_QUANTITY).is_none());
        assert!(FormInput::new(" \t\n ", "2").into_new_entry(DEFAULT_QUANTITY).is_none());
    }

    #[test]
    fn test_quantity_fallbacks() {
        assert_eq!(parse_quantity("", DEFAULT_QUANTITY), 1.0);
        assert_eq!(parse_quantity("abc", DEFAULT_QUANTITY), 1.0);
        assert_eq!(parse_quantity("0", DEFAULT_QUANTITY), 1.0);
        assert_eq!(parse_quantity("-3", DEFAULT_QUANTITY), 1.0);
        assert_eq!(parse_quantity("NaN", DEFAULT_QUANTITY), 1.0);
        assert_eq!(parse_quantity("inf", DEFAULT_QUANTITY), 1.0);
        assert_eq!(parse_quantity("abc", 4.0), 4.0);
    }

    #[test]
    fn test_quantity_parses_decimals() {
        assert_eq!(parse_quantity(" 0.5 ", DEFAULT_QUANTITY), 0.5);
        assert_eq!(parse_quantity("12", DEFAULT_QUANTITY), 12.0);
    }
}
