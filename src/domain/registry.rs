//! In-memory store of rooms and reservations.
//!
//! The [`Registry`] knows nothing about the console. It owns every [`Room`]
//! and every live [`Reservation`], and it is the only place where a room's
//! availability changes.

use std::collections::{BTreeMap, HashMap};

use thiserror::Error;
use tracing::{debug, info, instrument};

use crate::domain::{
    Config, Guest, InvalidRoomNumberError, Reservation, ReservationId, ReservationView, Room,
    RoomNumber, Stay,
};

/// The rooms of a hotel and the reservations made against them.
///
/// Storage:
/// - Rooms: `Vec<Room>` in the order they were added. Rooms are never removed,
///   so positions are stable.
/// - Room lookup: `HashMap<String, usize>` from room number to position.
/// - Reservations: `BTreeMap<ReservationId, Reservation>`. Identifiers are
///   issued in increasing order, so iteration follows booking order.
#[derive(Debug)]
pub struct Registry {
    rooms: Vec<Room>,

    room_index: HashMap<String, usize>,

    reservations: BTreeMap<ReservationId, Reservation>,

    /// The identifier handed out by the next call to [`Registry::book`].
    ///
    /// Never decremented, so cancelled identifiers are not reused.
    next_id: ReservationId,
}

impl Default for Registry {
    fn default() -> Self {
        Self {
            rooms: Vec::new(),
            room_index: HashMap::new(),
            reservations: BTreeMap::new(),
            next_id: ReservationId::FIRST,
        }
    }
}

/// Errors that can occur when setting up rooms.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A room with this number has already been added.
    #[error("room {0} already exists")]
    DuplicateRoom(RoomNumber),

    /// A configured room has an invalid number.
    #[error(transparent)]
    InvalidRoomNumber(#[from] InvalidRoomNumberError),
}

/// Errors that can occur when making a reservation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookingError {
    /// No room has this number.
    #[error("room {0} does not exist")]
    RoomNotFound(String),

    /// The room exists but is already booked.
    #[error("room {0} is not available")]
    RoomUnavailable(RoomNumber),

    /// A live reservation already has this identifier.
    #[error("reservation {0} already exists")]
    DuplicateId(ReservationId),

    /// The identifier is the last one that can be issued, so no further
    /// bookings could follow it.
    #[error("reservation {0} exhausts the identifier range")]
    IdsExhausted(ReservationId),
}

/// Errors that can occur when cancelling a reservation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CancelError {
    /// No live reservation has this identifier.
    #[error("reservation {0} not found")]
    NotFound(ReservationId),
}

impl Registry {
    /// Creates an empty registry with room for the given number of rooms.
    #[must_use]
    pub fn with_capacity(rooms: usize) -> Self {
        Self {
            rooms: Vec::with_capacity(rooms),
            room_index: HashMap::with_capacity(rooms),
            ..Self::default()
        }
    }

    /// Creates a registry containing the rooms listed in the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if a configured room number is empty or
    /// appears more than once.
    #[instrument(skip(config))]
    pub fn from_config(config: &Config) -> Result<Self, RegistryError> {
        let mut registry = Self::with_capacity(config.rooms().len());

        for room in config.rooms() {
            let number = RoomNumber::new(room.number.clone())?;
            registry.add_room(Room::new(number, room.room_type.clone()))?;
        }

        info!(rooms = registry.rooms.len(), "registry seeded");
        Ok(registry)
    }

    /// Adds a room.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateRoom`] if a room with the same number
    /// already exists. The registry is unchanged in that case.
    #[instrument(skip(self), fields(number = %room.number()))]
    pub fn add_room(&mut self, room: Room) -> Result<(), RegistryError> {
        if self.room_index.contains_key(room.number().as_str()) {
            return Err(RegistryError::DuplicateRoom(room.number().clone()));
        }

        self.room_index
            .insert(room.number().to_string(), self.rooms.len());
        self.rooms.push(room);
        debug!("room added");
        Ok(())
    }

    /// Retrieves a room by number.
    #[must_use]
    pub fn room(&self, number: &str) -> Option<&Room> {
        self.room_index.get(number).map(|&index| &self.rooms[index])
    }

    /// Returns an iterator over all rooms, in the order they were added.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }

    /// Returns an iterator over the rooms that can currently be booked, in the
    /// order they were added.
    pub fn available_rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter().filter(|room| room.is_available())
    }

    /// Finds the room with exactly this number, provided it is available.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::RoomNotFound`] or
    /// [`BookingError::RoomUnavailable`].
    pub fn find_available_room(&self, number: &str) -> Result<&Room, BookingError> {
        let index = self.position(number)?;
        let room = &self.rooms[index];
        if room.is_available() {
            Ok(room)
        } else {
            Err(BookingError::RoomUnavailable(room.number().clone()))
        }
    }

    /// The identifier the next booking will receive.
    #[must_use]
    pub const fn next_reservation_id(&self) -> ReservationId {
        self.next_id
    }

    /// Books an available room for a guest.
    ///
    /// The reservation receives [`Registry::next_reservation_id`].
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::RoomNotFound`] if no room has this number,
    /// [`BookingError::RoomUnavailable`] if it is already booked, or
    /// [`BookingError::IdsExhausted`] if no identifiers remain. Nothing changes
    /// on error.
    #[instrument(skip(self, guest, stay))]
    pub fn book(
        &mut self,
        guest: Guest,
        room_number: &str,
        stay: Stay,
    ) -> Result<ReservationView<'_>, BookingError> {
        let number = self.find_available_room(room_number)?.number().clone();
        let reservation = Reservation::new(self.next_id, guest, number, stay);
        self.make_reservation(reservation)
    }

    /// Records a reservation and marks its room as booked.
    ///
    /// If the reservation's identifier is at or beyond
    /// [`Registry::next_reservation_id`], the counter moves past it.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError`] if the room does not exist or is already
    /// booked, if a live reservation has the same identifier, or if the
    /// identifier has no successor. Nothing changes on error.
    #[instrument(skip(self, reservation), fields(id = %reservation.id(), room = %reservation.room_number()))]
    pub fn make_reservation(
        &mut self,
        reservation: Reservation,
    ) -> Result<ReservationView<'_>, BookingError> {
        let index = self.position(reservation.room_number())?;
        if !self.rooms[index].is_available() {
            return Err(BookingError::RoomUnavailable(
                reservation.room_number().clone(),
            ));
        }

        let id = reservation.id();
        if self.reservations.contains_key(&id) {
            return Err(BookingError::DuplicateId(id));
        }
        let following = id
            .checked_next()
            .ok_or(BookingError::IdsExhausted(id))?;

        self.next_id = self.next_id.max(following);
        self.rooms[index].book();
        let reservation = self.reservations.entry(id).or_insert(reservation);
        info!("reservation made");

        Ok(ReservationView {
            reservation,
            room: &self.rooms[index],
        })
    }

    /// Cancels a reservation and makes its room available again.
    ///
    /// Returns the removed reservation.
    ///
    /// # Errors
    ///
    /// Returns [`CancelError::NotFound`] if no live reservation has this
    /// identifier. Nothing changes on error.
    #[instrument(skip(self))]
    pub fn cancel_reservation(&mut self, id: ReservationId) -> Result<Reservation, CancelError> {
        let reservation = self
            .reservations
            .remove(&id)
            .ok_or(CancelError::NotFound(id))?;

        if let Some(&index) = self.room_index.get(reservation.room_number().as_str()) {
            self.rooms[index].vacate();
        }
        info!(room = %reservation.room_number(), "reservation cancelled");

        Ok(reservation)
    }

    /// Retrieves a live reservation by identifier.
    #[must_use]
    pub fn reservation(&self, id: ReservationId) -> Option<ReservationView<'_>> {
        let reservation = self.reservations.get(&id)?;
        self.view(reservation)
    }

    /// Returns an iterator over all live reservations, in booking order.
    pub fn reservations(&self) -> impl Iterator<Item = ReservationView<'_>> {
        self.reservations
            .values()
            .filter_map(|reservation| self.view(reservation))
    }

    /// The number of live reservations.
    #[must_use]
    pub fn reservation_count(&self) -> usize {
        self.reservations.len()
    }

    fn position(&self, number: &str) -> Result<usize, BookingError> {
        self.room_index
            .get(number)
            .copied()
            .ok_or_else(|| BookingError::RoomNotFound(number.to_string()))
    }

    fn view<'a>(&'a self, reservation: &'a Reservation) -> Option<ReservationView<'a>> {
        let room = self.room(reservation.room_number())?;
        Some(ReservationView { reservation, room })
    }
}
