use std::{fmt, ops::Deref, str::FromStr};

/// Number of digits a guest contact number must contain.
pub const CONTACT_DIGITS: usize = 10;

/// A validated contact number consisting of exactly ten ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactInfo(String);

impl ContactInfo {
    /// Creates a new `ContactInfo` from a string.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidContactError`] unless the string is exactly
    /// [`CONTACT_DIGITS`] ASCII digits long. Surrounding whitespace is not
    /// trimmed.
    pub fn new(s: String) -> Result<Self, InvalidContactError> {
        if s.len() != CONTACT_DIGITS || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidContactError(s));
        }

        Ok(Self(s))
    }

    /// Returns the string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ContactInfo {
    type Error = InvalidContactError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ContactInfo {
    type Error = InvalidContactError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value.to_string())
    }
}

impl FromStr for ContactInfo {
    type Err = InvalidContactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_string())
    }
}

impl Deref for ContactInfo {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for ContactInfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Error returned when a contact number is not exactly ten digits.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Invalid contact number '{0}': must be exactly 10 digits")]
pub struct InvalidContactError(String);

/// A hotel guest.
///
/// Guests have no identity beyond their value; a reservation owns its guest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guest {
    name: String,
    contact: ContactInfo,
}

impl Guest {
    /// Create a guest from a name and an already-validated contact number.
    ///
    /// The name is accepted verbatim, including an empty name.
    #[must_use]
    pub const fn new(name: String, contact: ContactInfo) -> Self {
        Self { name, contact }
    }

    /// The guest's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The guest's contact number.
    #[must_use]
    pub const fn contact(&self) -> &ContactInfo {
        &self.contact
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("1234567890"; "ten digits")]
    #[test_case("0000000000"; "leading zeros")]
    fn accepts_ten_digits(input: &str) {
        let contact = ContactInfo::try_from(input).unwrap();
        assert_eq!(contact.as_str(), input);
    }

    #[test_case(""; "empty")]
    #[test_case("12345"; "too short")]
    #[test_case("12345678901"; "too long")]
    #[test_case("12345abcde"; "letters")]
    #[test_case("123-456-78"; "punctuation")]
    #[test_case(" 1234567890"; "leading whitespace")]
    #[test_case("١٢٣٤٥٦٧٨٩٠"; "non ascii digits")]
    fn rejects_everything_else(input: &str) {
        let err = ContactInfo::try_from(input).unwrap_err();
        assert_eq!(err, InvalidContactError(input.to_string()));
    }

    #[test]
    fn guests_compare_by_value() {
        let contact: ContactInfo = "1234567890".parse().unwrap();
        let alice = Guest::new("Alice".to_string(), contact.clone());
        assert_eq!(alice, Guest::new("Alice".to_string(), contact));
        assert_eq!(alice.name(), "Alice");
        assert_eq!(alice.contact().as_str(), "1234567890");
    }
}
