use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::BookingError;

/// The cabin class a seat belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SeatClass {
    Business,
    Economic,
}

impl SeatClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Business => "business",
            Self::Economic => "economic",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "business" => Some(Self::Business),
            "economic" => Some(Self::Economic),
            _ => None,
        }
    }
}

impl fmt::Display for SeatClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Occupancy of a single seat.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeatState {
    Free,
    Occupied,
}

/// Per-class seat map, seats numbered `1..=capacity`.
///
/// Every seat starts out [`SeatState::Free`]. Occupying flips a free seat to
/// occupied; releasing always leaves the seat free regardless of its prior
/// state. Only occupied seats are stored, so memory follows bookings rather
/// than capacity.
#[derive(Debug, Clone, Serialize)]
pub struct SeatMap {
    class: SeatClass,
    capacity: u32,
    occupied: BTreeSet<u32>,
}

impl SeatMap {
    pub fn new(class: SeatClass, capacity: u32) -> Self {
        Self {
            class,
            capacity,
            occupied: BTreeSet::new(),
        }
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// State of `seat`, or `None` when the seat is out of range.
    pub fn state(&self, seat: u32) -> Option<SeatState> {
        self.in_range(seat).then(|| self.state_of(seat))
    }

    pub fn occupy(&mut self, seat: u32) -> Result<(), BookingError> {
        self.check_range(seat)?;
        if !self.occupied.insert(seat) {
            return Err(BookingError::SeatOccupied {
                class: self.class,
                seat,
            });
        }
        Ok(())
    }

    pub fn release(&mut self, seat: u32) -> Result<(), BookingError> {
        self.check_range(seat)?;
        self.occupied.remove(&seat);
        Ok(())
    }

    pub fn free_count(&self) -> usize {
        self.capacity as usize - self.occupied.len()
    }

    /// Iterates `(seat number, state)` pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, SeatState)> + '_ {
        (1..=self.capacity).map(move |seat| (seat, self.state_of(seat)))
    }

    fn state_of(&self, seat: u32) -> SeatState {
        if self.occupied.contains(&seat) {
            SeatState::Occupied
        } else {
            SeatState::Free
        }
    }

    fn in_range(&self, seat: u32) -> bool {
        (1..=self.capacity).contains(&seat)
    }

    fn check_range(&self, seat: u32) -> Result<(), BookingError> {
        if self.in_range(seat) {
            Ok(())
        } else {
            Err(BookingError::InvalidSeatNumber {
                class: self.class,
                seat,
                capacity: self.capacity,
            })
        }
    }
}
