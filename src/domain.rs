//! Domain models for the front desk.
//!
//! This module contains the guests, rooms and reservations, and the
//! [`Registry`] that ties them together.

mod config;
pub use config::{Config, RoomConfig};

/// Guests and their contact details.
pub mod guest;
pub use guest::{ContactInfo, Guest, InvalidContactError};

/// Rooms and room numbers.
pub mod room;
pub use room::{InvalidRoomNumberError, Room, RoomNumber};

/// Reservations and reservation identifiers.
pub mod reservation;
pub use reservation::{InvalidReservationIdError, Reservation, ReservationId, Stay};

mod reservation_view;
pub use reservation_view::ReservationView;

mod registry;
pub use registry::{BookingError, CancelError, Registry, RegistryError};
