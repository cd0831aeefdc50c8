//! Hotel Front Desk
//!
//! Rooms and reservations held in memory and driven from an operator menu.

pub mod domain;
pub use domain::{
    BookingError, CancelError, Config, Guest, Registry, RegistryError, Reservation,
    ReservationId, ReservationView, Room, RoomNumber, Stay,
};
