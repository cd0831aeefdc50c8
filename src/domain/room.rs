use std::{fmt, ops::Deref, str::FromStr};

use non_empty_string::NonEmptyString;

/// A room number, unique within a [`Registry`](crate::Registry).
///
/// Room numbers are free text ("101", "2B", "Penthouse") but never empty.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct RoomNumber(NonEmptyString);

impl RoomNumber {
    /// Creates a new `RoomNumber` from a string.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRoomNumberError`] if the string is empty.
    pub fn new(s: String) -> Result<Self, InvalidRoomNumberError> {
        NonEmptyString::new(s)
            .map(Self)
            .map_err(|_| InvalidRoomNumberError)
    }

    /// Returns the string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl TryFrom<String> for RoomNumber {
    type Error = InvalidRoomNumberError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for RoomNumber {
    type Error = InvalidRoomNumberError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value.to_string())
    }
}

impl FromStr for RoomNumber {
    type Err = InvalidRoomNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_string())
    }
}

impl AsRef<str> for RoomNumber {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl Deref for RoomNumber {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.0.as_str()
    }
}

impl fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a room number is empty.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Invalid room number: must not be empty")]
pub struct InvalidRoomNumberError;

/// A bookable room.
///
/// A room is either available or booked. New rooms start out available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    number: RoomNumber,
    kind: String,
    available: bool,
}

impl Room {
    /// Create an available room.
    #[must_use]
    pub const fn new(number: RoomNumber, kind: String) -> Self {
        Self {
            number,
            kind,
            available: true,
        }
    }

    /// The room's number.
    #[must_use]
    pub const fn number(&self) -> &RoomNumber {
        &self.number
    }

    /// The room's type, e.g. "Single" or "Double".
    #[must_use]
    pub fn room_type(&self) -> &str {
        &self.kind
    }

    /// Whether the room can currently be booked.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.available
    }

    /// Mark the room as booked.
    ///
    /// Booking an already booked room leaves it booked.
    pub const fn book(&mut self) {
        self.available = false;
    }

    /// Mark the room as available again.
    pub const fn vacate(&mut self) {
        self.available = true;
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Room Number: {} - Type: {}", self.number, self.kind)
    }
}
