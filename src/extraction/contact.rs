//! Email and phone extraction

use crate::extraction::patterns::{EMAIL, PHONE_PATTERNS};

/// First email address in document order.
pub fn extract_email(text: &str) -> Option<String> {
    EMAIL.find(text).map(|m| m.as_str().to_string())
}

/// First phone number, trying each layout in turn.
///
/// A plain 3-3-4 number anywhere in the text beats an international or
/// parenthesized one that appears earlier.
pub fn extract_phone(text: &str) -> Option<String> {
    PHONE_PATTERNS
        .iter()
        .find_map(|pattern| pattern.find(text))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email() {
        let text = "Contact: jane.doe@example.com | backup: jd@mail.org";
        assert_eq!(extract_email(text), Some("jane.doe@example.com".to_string()));
    }

    #[test]
    fn test_email_needs_tld() {
        assert_eq!(extract_email("reach me at jane@localhost"), None);
        assert_eq!(
            extract_email("JANE_D+cv@Sub.Example.CO.UK."),
            Some("JANE_D+cv@Sub.Example.CO.UK".to_string())
        );
    }

    #[test]
    fn test_plain_phone() {
        assert_eq!(extract_phone("Phone: 555.123.4567"), Some("555.123.4567".to_string()));
        assert_eq!(extract_phone("Phone: 5551234567"), Some("5551234567".to_string()));
    }

    #[test]
    fn test_international_phone() {
        assert_eq!(
            extract_phone("Tel +44 20 7946 0958"),
            Some("+44 20 7946 0958".to_string())
        );
    }

    #[test]
    fn test_parenthesized_phone() {
        assert_eq!(
            extract_phone("Call (555) 123-4567 after 5pm"),
            Some("(555) 123-4567".to_string())
        );
    }

    #[test]
    fn test_plain_layout_wins_over_earlier_parenthesized() {
        let text = "Office (555) 123-4567, mobile 555-987-6543";
        assert_eq!(extract_phone(text), Some("555-987-6543".to_string()));
    }

    #[test]
    fn test_no_contact() {
        assert_eq!(extract_email(""), None);
        assert_eq!(extract_phone("Call me maybe, 12-34"), None);
    }
}
