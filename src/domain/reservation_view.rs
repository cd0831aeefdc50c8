// ReservationView - a reservation together with the live room it refers to.

use std::fmt;

use crate::domain::{Reservation, Room};

/// A borrowed view of a reservation and its room.
///
/// The room is the one held by the [`Registry`](crate::Registry), so its type
/// and availability are always current. Displaying the view produces the
/// confirmation line.
#[derive(Debug, Clone, Copy)]
pub struct ReservationView<'a> {
    /// The reservation.
    pub reservation: &'a Reservation,
    /// The reserved room.
    pub room: &'a Room,
}

impl fmt::Display for ReservationView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let stay = self.reservation.stay();
        write!(
            f,
            "Reservation confirmed for {} in room {} ({}) from {} to {}",
            self.reservation.guest().name(),
            self.room.number(),
            self.room.room_type(),
            stay.check_in,
            stay.check_out,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Guest, ReservationId, Stay};

    #[test]
    fn displays_confirmation_line() {
        let room = Room::new("101".parse().unwrap(), "Single".to_string());
        let reservation = Reservation::new(
            ReservationId::FIRST,
            Guest::new("Alice".to_string(), "1234567890".parse().unwrap()),
            room.number().clone(),
            Stay::new("2024-01-01", "2024-01-05"),
        );

        let view = ReservationView {
            reservation: &reservation,
            room: &room,
        };

        assert_eq!(
            view.to_string(),
            "Reservation confirmed for Alice in room 101 (Single) from 2024-01-01 to 2024-01-05"
        );
    }
}
