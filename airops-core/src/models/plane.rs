use std::fmt;

use serde::Serialize;

use super::assistance::AssistanceSet;
use super::flight::plane_number_of;
use super::occupancy::{SeatClass, SeatMap, SeatState};
use super::validate::{non_empty, positive_integer, WholeNumber};
use crate::error::{AssistanceError, BookingError, ValidationError};

/// Seating configuration and live cabin state for a flight.
///
/// A plane shares its key with the [`Flight`](super::Flight) it flies and can
/// only be added to the store once that flight exists. Seat maps and the
/// assistance set are owned here and mutated only through the store.
#[derive(Debug, Clone, Serialize)]
pub struct Plane {
    plane_number: u32,
    economic_seats_number: u32,
    business_seats_number: u32,
    carrier: String,
    #[serde(skip)]
    economic_seats: SeatMap,
    #[serde(skip)]
    business_seats: SeatMap,
    #[serde(skip)]
    assistance: AssistanceSet,
}

/// Size classification derived from the total seat count.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PlaneKind {
    /// Up to 100 seats.
    Continental,
    /// 101 to 200 seats.
    NarrowBody,
    /// More than 200 seats.
    WideBody,
}

impl PlaneKind {
    pub fn for_seats(total: u64) -> Self {
        match total {
            0..=100 => Self::Continental,
            101..=200 => Self::NarrowBody,
            _ => Self::WideBody,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Continental => "continental",
            Self::NarrowBody => "narrow-body",
            Self::WideBody => "wide-body",
        }
    }
}

impl fmt::Display for PlaneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Plane {
    /// Builds a plane with every seat free. The carrier is stored uppercased.
    pub fn new(
        plane_number: impl WholeNumber,
        economic_seats_number: impl WholeNumber,
        business_seats_number: impl WholeNumber,
        carrier: &str,
    ) -> Result<Self, ValidationError> {
        let plane_number = plane_number_of(plane_number)?;
        let economic_seats_number = positive_integer(economic_seats_number)
            .ok_or(ValidationError::InvalidNumberOfSeats)?;
        let business_seats_number = positive_integer(business_seats_number)
            .ok_or(ValidationError::InvalidNumberOfSeats)?;
        let carrier = non_empty(carrier)
            .and_then(|c| non_empty(&c.to_uppercase()))
            .ok_or(ValidationError::InvalidCarrierName)?;

        Ok(Self {
            plane_number,
            economic_seats_number,
            business_seats_number,
            carrier,
            economic_seats: SeatMap::new(SeatClass::Economic, economic_seats_number),
            business_seats: SeatMap::new(SeatClass::Business, business_seats_number),
            assistance: AssistanceSet::new(),
        })
    }

    pub fn plane_number(&self) -> u32 {
        self.plane_number
    }

    pub fn economic_seats_number(&self) -> u32 {
        self.economic_seats_number
    }

    pub fn business_seats_number(&self) -> u32 {
        self.business_seats_number
    }

    pub fn carrier(&self) -> &str {
        &self.carrier
    }

    pub fn total_seats(&self) -> u64 {
        u64::from(self.economic_seats_number) + u64::from(self.business_seats_number)
    }

    pub fn kind(&self) -> PlaneKind {
        PlaneKind::for_seats(self.total_seats())
    }

    pub fn seats(&self, class: SeatClass) -> &SeatMap {
        match class {
            SeatClass::Business => &self.business_seats,
            SeatClass::Economic => &self.economic_seats,
        }
    }

    pub fn seat_state(&self, class: SeatClass, seat: u32) -> Option<SeatState> {
        self.seats(class).state(seat)
    }

    pub fn free_seats(&self, class: SeatClass) -> usize {
        self.seats(class).free_count()
    }

    pub fn assistance(&self) -> &AssistanceSet {
        &self.assistance
    }

    pub(crate) fn occupy_seat(&mut self, class: SeatClass, seat: u32) -> Result<(), BookingError> {
        self.seats_mut(class).occupy(seat)
    }

    pub(crate) fn release_seat(&mut self, class: SeatClass, seat: u32) -> Result<(), BookingError> {
        self.seats_mut(class).release(seat)
    }

    pub(crate) fn request_assistance(&mut self, ticket_id: &str) -> Result<(), AssistanceError> {
        self.assistance.request(ticket_id)
    }

    pub(crate) fn dismiss_assistance(&mut self, ticket_id: &str) -> Result<(), AssistanceError> {
        self.assistance.dismiss(ticket_id)
    }

    fn seats_mut(&mut self, class: SeatClass) -> &mut SeatMap {
        match class {
            SeatClass::Business => &mut self.business_seats,
            SeatClass::Economic => &mut self.economic_seats,
        }
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Plane: plane number: {}, economic seats number: {}, business seats number: {}, carrier: {}",
            self.plane_number, self.economic_seats_number, self.business_seats_number, self.carrier
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercases_carrier_and_frees_every_seat() {
        let plane = Plane::new(1, 200, 50, "lot").unwrap();
        assert_eq!(plane.carrier(), "LOT");
        assert_eq!(plane.free_seats(SeatClass::Economic), 200);
        assert_eq!(plane.free_seats(SeatClass::Business), 50);
        assert_eq!(plane.seat_state(SeatClass::Business, 50), Some(SeatState::Free));
        assert_eq!(plane.seat_state(SeatClass::Business, 51), None);
        assert!(plane.assistance().is_empty());
    }

    #[test]
    fn rejects_invalid_fields() {
        assert_eq!(
            Plane::new(0, 10, 10, "LOT").unwrap_err(),
            ValidationError::InvalidPlaneNumber
        );
        assert_eq!(
            Plane::new(1.5, 10, 10, "LOT").unwrap_err(),
            ValidationError::InvalidPlaneNumber
        );
        assert_eq!(
            Plane::new(1, 0, 10, "LOT").unwrap_err(),
            ValidationError::InvalidNumberOfSeats
        );
        assert_eq!(
            Plane::new(1, 10, 2.5, "LOT").unwrap_err(),
            ValidationError::InvalidNumberOfSeats
        );
        assert_eq!(
            Plane::new(1, 10, 10, "").unwrap_err(),
            ValidationError::InvalidCarrierName
        );
    }

    #[test]
    fn huge_seat_counts_are_accepted() {
        let mut plane = Plane::new(1, 3_000_000_000u64, 1, "lot").unwrap();
        assert_eq!(plane.economic_seats_number(), 3_000_000_000);
        assert_eq!(plane.kind(), PlaneKind::WideBody);
        plane.occupy_seat(SeatClass::Economic, 3_000_000_000).unwrap();
        assert_eq!(plane.free_seats(SeatClass::Economic), 2_999_999_999);
    }

    #[test]
    fn classifies_by_total_seats() {
        assert_eq!(Plane::new(1, 60, 40, "A").unwrap().kind(), PlaneKind::Continental);
        assert_eq!(Plane::new(1, 100, 1, "A").unwrap().kind(), PlaneKind::NarrowBody);
        assert_eq!(Plane::new(1, 150, 50, "A").unwrap().kind(), PlaneKind::NarrowBody);
        assert_eq!(Plane::new(1, 200, 50, "A").unwrap().kind(), PlaneKind::WideBody);
    }

    #[test]
    fn describes_itself() {
        let plane = Plane::new(3, 20, 5, "wizz").unwrap();
        assert_eq!(
            plane.to_string(),
            "Plane: plane number: 3, economic seats number: 20, business seats number: 5, carrier: WIZZ"
        );
    }
}
