use std::{fmt, num::NonZeroUsize, str::FromStr};

use chrono::{DateTime, Utc};

use crate::domain::{Guest, RoomNumber};

/// A reservation identifier.
///
/// Format: `R{N}` where `N` is a positive non-zero integer (e.g. `R1`,
/// `R42`). Identifiers are issued in increasing order, so they sort in
/// booking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReservationId(NonZeroUsize);

impl ReservationId {
    /// The prefix that precedes the number.
    pub const PREFIX: char = 'R';

    /// The first identifier issued by a fresh registry.
    pub const FIRST: Self = Self(NonZeroUsize::MIN);

    /// Create an identifier from its numeric part.
    #[must_use]
    pub const fn new(number: NonZeroUsize) -> Self {
        Self(number)
    }

    /// Returns the numeric part of the identifier.
    #[must_use]
    pub const fn number(self) -> NonZeroUsize {
        self.0
    }

    /// The identifier that follows this one, or `None` if the numeric part
    /// would overflow.
    #[must_use]
    pub const fn checked_next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(number) => Some(Self(number)),
            None => None,
        }
    }
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", Self::PREFIX, self.0)
    }
}

/// Errors that can occur when parsing a reservation identifier.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InvalidReservationIdError {
    /// The identifier does not start with the `R` prefix.
    #[error("Invalid reservation ID '{0}': expected the form R<number>")]
    Syntax(String),

    /// The numeric part is missing, not a number, zero, or zero-padded.
    #[error("Invalid reservation ID '{0}': expected a non-zero integer without leading zeros, got '{1}'")]
    Number(String, String),
}

impl FromStr for ReservationId {
    type Err = InvalidReservationIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix(Self::PREFIX)
            .ok_or_else(|| InvalidReservationIdError::Syntax(s.to_string()))?;

        // `usize::from_str` tolerates a leading '+', which is not part of the format.
        // Leading zeros are refused so that each ID has exactly one spelling.
        if !digits.bytes().all(|b| b.is_ascii_digit()) || digits.starts_with('0') {
            return Err(InvalidReservationIdError::Number(
                s.to_string(),
                digits.to_string(),
            ));
        }

        digits
            .parse::<NonZeroUsize>()
            .map(Self)
            .map_err(|_| InvalidReservationIdError::Number(s.to_string(), digits.to_string()))
    }
}

impl TryFrom<&str> for ReservationId {
    type Error = InvalidReservationIdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_str(value)
    }
}

/// The dates of a stay.
///
/// Dates are opaque strings. They are recorded exactly as entered and are not
/// checked against a calendar or against each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stay {
    /// Check-in date, conventionally `YYYY-MM-DD`.
    pub check_in: String,
    /// Check-out date, conventionally `YYYY-MM-DD`.
    pub check_out: String,
}

impl Stay {
    /// Create a stay from check-in and check-out dates.
    #[must_use]
    pub fn new(check_in: impl Into<String>, check_out: impl Into<String>) -> Self {
        Self {
            check_in: check_in.into(),
            check_out: check_out.into(),
        }
    }
}

/// A booking of one room for one guest.
///
/// The reservation refers to its room by number. The room's availability and
/// type live in the [`Registry`](crate::Registry); use
/// [`Registry::reservation`](crate::Registry::reservation) to get a
/// [`ReservationView`](crate::ReservationView) that resolves them.
#[derive(Debug, Clone)]
pub struct Reservation {
    id: ReservationId,
    guest: Guest,
    room: RoomNumber,
    stay: Stay,
    booked_at: DateTime<Utc>,
}

impl Reservation {
    /// Construct a new [`Reservation`], stamped with the current time.
    #[must_use]
    pub fn new(id: ReservationId, guest: Guest, room: RoomNumber, stay: Stay) -> Self {
        Self {
            id,
            guest,
            room,
            stay,
            booked_at: Utc::now(),
        }
    }

    /// The reservation's identifier.
    #[must_use]
    pub const fn id(&self) -> ReservationId {
        self.id
    }

    /// The guest the room is booked for.
    #[must_use]
    pub const fn guest(&self) -> &Guest {
        &self.guest
    }

    /// The number of the booked room.
    #[must_use]
    pub const fn room_number(&self) -> &RoomNumber {
        &self.room
    }

    /// The dates of the stay.
    #[must_use]
    pub const fn stay(&self) -> &Stay {
        &self.stay
    }

    /// When the reservation was made.
    #[must_use]
    pub const fn booked_at(&self) -> DateTime<Utc> {
        self.booked_at
    }

    /// A printable notice that this reservation has been cancelled.
    ///
    /// This has no effect on state; vacating the room is the registry's job.
    #[must_use]
    pub const fn cancellation(&self) -> Cancellation<'_> {
        Cancellation { reservation: self }
    }
}

impl PartialEq for Reservation {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Reservation {}

/// Cancellation notice returned by [`Reservation::cancellation`].
#[derive(Debug, Clone, Copy)]
pub struct Cancellation<'a> {
    reservation: &'a Reservation,
}

impl fmt::Display for Cancellation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Reservation cancelled for {}",
            self.reservation.guest.name()
        )
    }
}
