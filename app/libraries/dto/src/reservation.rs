use crate::{optional, required};
use app_error::AppError;
use app_schema::reservation::Reservation;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

const START_AT_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// Body of `POST /{id}/add-reservation/` and `POST /{id}/edit-reservation/{res_id}`.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationForm {
    pub start_at: Option<String>,
    pub num_guests: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationInput {
    pub start_at: NaiveDateTime,
    pub num_guests: i64,
    pub notes: Option<String>,
}

impl ReservationForm {
    pub fn validate(self) -> Result<ReservationInput, AppError> {
        let start_at = parse_start_at(&required("startAt", self.start_at)?)?;
        let num_guests = parse_num_guests(&required("numGuests", self.num_guests)?)?;
        Ok(ReservationInput {
            start_at,
            num_guests,
            notes: optional(self.notes),
        })
    }
}

impl ReservationInput {
    pub fn into_reservation(self, customer_id: i64) -> Reservation {
        Reservation::new(customer_id, self.start_at, self.num_guests, self.notes)
    }

    /// Overwrites every field including the owner.
    pub fn apply_to(self, customer_id: i64, reservation: &mut Reservation) {
        reservation.customer_id = customer_id;
        reservation.start_at = self.start_at;
        reservation.num_guests = self.num_guests;
        reservation.notes = self.notes;
    }
}

pub fn parse_start_at(value: &str) -> Result<NaiveDateTime, AppError> {
    let value = value.trim();
    START_AT_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .ok_or_else(|| AppError::input_shape(format!("startAt is not a valid date-time: {value}")))
}

pub fn parse_num_guests(value: &str) -> Result<i64, AppError> {
    let num_guests: i64 = value
        .trim()
        .parse()
        .map_err(|_| AppError::input_shape(format!("numGuests must be a whole number: {value}")))?;
    if num_guests < 1 {
        return Err(AppError::input_shape("Cannot have fewer than 1 guest"));
    }
    Ok(num_guests)
}
