//! The interactive front-desk session.
//!
//! Reads operator input line by line and turns it into calls on a
//! [`Registry`]. All console wording lives here; the registry never prints.

use std::{
    io::{self, BufRead, Write},
    str::FromStr,
};

use hotel::{
    BookingError, Guest, Registry, ReservationId, Stay,
    domain::{ContactInfo, guest::CONTACT_DIGITS},
};
use tracing::{info, instrument};

use crate::cli::terminal::Palette;

/// An entry in the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Book,
    Cancel,
    ListReservations,
    ListAvailableRooms,
    Exit,
}

impl FromStr for Choice {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<u8>().map_err(|_| ())? {
            1 => Ok(Self::Book),
            2 => Ok(Self::Cancel),
            3 => Ok(Self::ListReservations),
            4 => Ok(Self::ListAvailableRooms),
            5 => Ok(Self::Exit),
            _ => Err(()),
        }
    }
}

/// An operator session over some input and output.
pub struct Menu<R, W> {
    registry: Registry,
    input: R,
    output: W,
    palette: Palette,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    /// Create an uncoloured session.
    #[must_use]
    pub const fn new(registry: Registry, input: R, output: W) -> Self {
        Self {
            registry,
            input,
            output,
            palette: Palette::new(false),
        }
    }

    /// Set the palette used for messages.
    #[must_use]
    pub const fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Consume the session, returning the registry and the output sink.
    #[must_use]
    pub fn into_parts(self) -> (Registry, W) {
        (self.registry, self.output)
    }

    /// Run the menu loop until the operator exits or input runs out.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading from or writing to the console fails.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;

            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                info!("input closed, leaving menu");
                return Ok(());
            };

            match line.parse::<Choice>() {
                Ok(Choice::Book) => self.book_room()?,
                Ok(Choice::Cancel) => self.cancel_reservation()?,
                Ok(Choice::ListReservations) => self.list_reservations()?,
                Ok(Choice::ListAvailableRooms) => self.list_available_rooms()?,
                Ok(Choice::Exit) => {
                    writeln!(self.output, "Exiting the system. Goodbye!")?;
                    return Ok(());
                }
                Err(()) => {
                    let message = self.palette.warning("Invalid choice. Please try again.");
                    writeln!(self.output, "{message}")?;
                }
            }
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        let title = self.palette.info("Hotel Management System Menu:");
        writeln!(self.output, "\n{title}")?;
        writeln!(self.output, "1. Book a Room")?;
        writeln!(self.output, "2. Cancel a Reservation")?;
        writeln!(self.output, "3. Display All Reservations")?;
        writeln!(self.output, "4. Display Available Rooms")?;
        writeln!(self.output, "5. Exit")?;
        write!(self.output, "Enter your choice: ")?;
        self.output.flush()
    }

    /// Collects a booking from the operator.
    ///
    /// Any rejection leaves the registry untouched and returns to the menu.
    /// The room is checked before the dates are asked for.
    #[instrument(skip(self))]
    fn book_room(&mut self) -> io::Result<()> {
        let Some(name) = self.prompt("Enter guest name: ")? else {
            return Ok(());
        };
        let Some(contact) =
            self.prompt(&format!("Enter guest contact info ({CONTACT_DIGITS} digits only): "))?
        else {
            return Ok(());
        };

        let contact = match ContactInfo::new(contact) {
            Ok(contact) => contact,
            Err(e) => {
                info!("booking rejected: {e}");
                let message = self
                    .palette
                    .warning("Invalid phone number. It should be exactly 10 digits.");
                return writeln!(self.output, "{message}");
            }
        };
        let guest = Guest::new(name, contact);

        let Some(room_number) = self.prompt("Enter room number: ")? else {
            return Ok(());
        };
        if let Err(e) = self.registry.find_available_room(&room_number) {
            return self.room_unavailable(&e);
        }

        let Some(check_in) = self.prompt("Enter check-in date (YYYY-MM-DD): ")? else {
            return Ok(());
        };
        let Some(check_out) = self.prompt("Enter check-out date (YYYY-MM-DD): ")? else {
            return Ok(());
        };

        let (confirmation, id) =
            match self
                .registry
                .book(guest, &room_number, Stay::new(check_in, check_out))
            {
                Ok(view) => (view.to_string(), view.reservation.id()),
                Err(e) => return self.room_unavailable(&e),
            };

        let confirmation = self.palette.success(&confirmation);
        let id = self.palette.dim(&format!("Reservation ID: {id}"));
        writeln!(self.output, "{confirmation}")?;
        writeln!(self.output, "{id}")
    }

    fn room_unavailable(&mut self, error: &BookingError) -> io::Result<()> {
        info!("booking rejected: {error}");
        let message = self
            .palette
            .warning("Room is not available or does not exist.");
        writeln!(self.output, "{message}")
    }

    #[instrument(skip(self))]
    fn cancel_reservation(&mut self) -> io::Result<()> {
        let Some(input) = self.prompt("Enter reservation ID to cancel: ")? else {
            return Ok(());
        };

        // accept 'r1' as well as 'R1'
        let cancelled = input
            .trim()
            .to_uppercase()
            .parse::<ReservationId>()
            .ok()
            .and_then(|id| self.registry.cancel_reservation(id).ok());

        let Some(reservation) = cancelled else {
            info!(%input, "no such reservation");
            let message = self.palette.warning("Reservation ID not found.");
            return writeln!(self.output, "{message}");
        };

        let message = self
            .palette
            .success(&reservation.cancellation().to_string());
        writeln!(self.output, "{message}")
    }

    fn list_reservations(&mut self) -> io::Result<()> {
        writeln!(self.output, "All Reservations:")?;
        for view in self.registry.reservations() {
            writeln!(self.output, "{view}")?;
        }
        Ok(())
    }

    fn list_available_rooms(&mut self) -> io::Result<()> {
        writeln!(self.output, "Available Rooms:")?;
        for room in self.registry.available_rooms() {
            writeln!(self.output, "{room}")?;
        }
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Reads one line without its line ending, or `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed = line.strip_suffix('\n').unwrap_or(&line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(Some(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use hotel::{Config, Room};

    use super::*;

    /// Runs a session over the default rooms, feeding it `input` line by line.
    fn session(input: &[&str]) -> (Registry, String) {
        let registry = Registry::from_config(&Config::default()).unwrap();
        let mut input = input.join("\n");
        input.push('\n');

        let mut menu = Menu::new(registry, Cursor::new(input), Vec::new());
        menu.run().unwrap();

        let (registry, output) = menu.into_parts();
        (registry, String::from_utf8(output).unwrap())
    }

    const ALICE_R101: [&str; 6] = [
        "1",
        "Alice",
        "1234567890",
        "101",
        "2024-01-01",
        "2024-01-05",
    ];

    #[test]
    fn choices_parse_from_menu_numbers() {
        assert_eq!("1".parse(), Ok(Choice::Book));
        assert_eq!(" 5 ".parse(), Ok(Choice::Exit));
        assert_eq!("0".parse::<Choice>(), Err(()));
        assert_eq!("6".parse::<Choice>(), Err(()));
        assert_eq!("book".parse::<Choice>(), Err(()));
    }

    #[test]
    fn exit_says_goodbye() {
        let (_, output) = session(&["5"]);
        assert!(output.contains("Hotel Management System Menu:"));
        assert!(output.ends_with("Exiting the system. Goodbye!\n"));
    }

    #[test]
    fn end_of_input_leaves_the_loop() {
        let (registry, output) = session(&[]);
        assert!(output.contains("Enter your choice: "));
        assert_eq!(registry.reservation_count(), 0);
    }

    #[test]
    fn invalid_choice_loops() {
        let (_, output) = session(&["9", "abc", "5"]);
        assert_eq!(output.matches("Invalid choice. Please try again.").count(), 2);
        assert_eq!(output.matches("Enter your choice: ").count(), 3);
    }

    #[test]
    fn booking_confirms_and_reports_the_id() {
        let mut input = ALICE_R101.to_vec();
        input.extend(["4", "5"]);

        let (registry, output) = session(&input);

        assert!(output.contains(
            "Reservation confirmed for Alice in room 101 (Single) from 2024-01-01 to 2024-01-05\n"
        ));
        assert!(output.contains("Reservation ID: R1\n"));
        assert!(output.contains("Available Rooms:\nRoom Number: 102 - Type: Double\n"));
        assert!(!output.contains("Room Number: 101"));
        assert!(!registry.room("101").unwrap().is_available());
    }

    #[test]
    fn short_contact_aborts_before_asking_for_a_room() {
        let (registry, output) = session(&["1", "Alice", "12345", "5"]);

        assert!(output.contains("Invalid phone number. It should be exactly 10 digits."));
        assert!(!output.contains("Enter room number: "));
        assert_eq!(registry.reservation_count(), 0);
        assert!(registry.rooms().all(Room::is_available));
    }

    #[test]
    fn unknown_room_aborts_before_asking_for_dates() {
        let (registry, output) = session(&["1", "Alice", "1234567890", "999", "5"]);

        assert!(output.contains("Room is not available or does not exist."));
        assert!(!output.contains("Enter check-in date"));
        assert_eq!(registry.reservation_count(), 0);
    }

    #[test]
    fn booked_room_cannot_be_booked_again() {
        let mut input = ALICE_R101.to_vec();
        input.extend(["1", "Bob", "0987654321", "101", "5"]);

        let (registry, output) = session(&input);

        assert!(output.contains("Room is not available or does not exist."));
        assert_eq!(registry.reservation_count(), 1);
    }

    #[test]
    fn cancel_round_trip() {
        let mut input = ALICE_R101.to_vec();
        input.extend(["2", "r1", "3", "4", "5"]);

        let (registry, output) = session(&input);

        assert!(output.contains("Reservation cancelled for Alice\n"));
        assert!(output.contains("All Reservations:\n\nHotel Management System Menu:"));
        assert!(output.contains(
            "Available Rooms:\nRoom Number: 101 - Type: Single\nRoom Number: 102 - Type: Double\n"
        ));
        assert_eq!(registry.reservation_count(), 0);
        assert!(registry.room("101").unwrap().is_available());
    }

    #[test]
    fn zero_padded_id_does_not_cancel() {
        let mut input = ALICE_R101.to_vec();
        input.extend(["2", "R01", "5"]);

        let (registry, output) = session(&input);

        assert!(output.contains("Reservation ID not found."));
        assert_eq!(registry.reservation_count(), 1);
        assert!(!registry.room("101").unwrap().is_available());
    }

    #[test]
    fn cancelling_unknown_id_reports_not_found() {
        let (registry, output) = session(&["2", "R9", "2", "nonsense", "5"]);

        assert_eq!(output.matches("Reservation ID not found.").count(), 2);
        assert_eq!(registry.reservation_count(), 0);
    }

    /// A log sink that can be inspected after the subscriber is gone.
    #[derive(Clone, Default)]
    struct Logs(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl Write for Logs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn rejections_are_not_logged_at_the_default_level() {
        let logs = Logs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            session(&[
                "1", "Alice", "12345", // bad contact
                "1", "Bob", "1234567890", "999", // unknown room
                "2", "R9", // unknown reservation
                "5",
            ]);
        });

        assert!(logs.0.lock().unwrap().is_empty());
    }

    #[test]
    fn windows_line_endings_are_stripped() {
        let registry = Registry::from_config(&Config::default()).unwrap();
        let input = "1\r\nAlice\r\n1234567890\r\n102\r\nin\r\nout\r\n5\r\n";

        let mut menu = Menu::new(registry, Cursor::new(input), Vec::new());
        menu.run().unwrap();

        let (registry, _) = menu.into_parts();
        assert!(!registry.room("102").unwrap().is_available());
    }
}
