use app_error::AppError;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use tracing::*;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Reservation {
    pub id: Option<i64>,
    pub customer_id: i64,
    pub start_at: NaiveDateTime,
    pub num_guests: i64,
    pub notes: Option<String>,
}

impl Reservation {
    #[inline]
    pub fn select_base() -> &'static str {
        include_str!("../../../SQL/reservations/select_base.sql")
    }

    #[inline]
    pub fn insert_query() -> &'static str {
        include_str!("../../../SQL/reservations/insert.sql")
    }

    #[inline]
    pub fn update_query() -> &'static str {
        include_str!("../../../SQL/reservations/update.sql")
    }

    pub fn new(
        customer_id: i64,
        start_at: NaiveDateTime,
        num_guests: i64,
        notes: Option<String>,
    ) -> Self {
        Self {
            id: None,
            customer_id,
            start_at,
            num_guests,
            notes,
        }
    }

    pub async fn get(pool: &SqlitePool, id: i64) -> Result<Self, AppError> {
        sqlx::query_as::<_, Self>(&format!("{} WHERE id = ?", Self::select_base()))
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| AppError::not_found(format!("No such reservation: {id}")))
    }

    pub async fn for_customer(pool: &SqlitePool, customer_id: i64) -> Result<Vec<Self>, AppError> {
        let reservations = sqlx::query_as::<_, Self>(&format!(
            "{} WHERE customer_id = ? ORDER BY start_at, id",
            Self::select_base()
        ))
        .bind(customer_id)
        .fetch_all(pool)
        .await?;
        Ok(reservations)
    }

    /// Same insert-or-update contract as `Customer::save`.
    pub async fn save(&mut self, pool: &SqlitePool) -> Result<i64, AppError> {
        match self.id {
            None => {
                let id: i64 = sqlx::query_scalar(Self::insert_query())
                    .bind(self.customer_id)
                    .bind(self.start_at)
                    .bind(self.num_guests)
                    .bind(&self.notes)
                    .fetch_one(pool)
                    .await?;
                debug!("INSERT reservation {}: {:?}", id, self);
                self.id = Some(id);
                Ok(id)
            }
            Some(id) => {
                let res = sqlx::query(Self::update_query())
                    .bind(self.customer_id)
                    .bind(self.start_at)
                    .bind(self.num_guests)
                    .bind(&self.notes)
                    .bind(id)
                    .execute(pool)
                    .await?;
                if res.rows_affected() == 0 {
                    return Err(AppError::not_found(format!("No such reservation: {id}")));
                }
                debug!("UPDATE reservation {}: {:?}", id, self);
                Ok(id)
            }
        }
    }

    /// e.g. `May 1 2024, 7:00 PM`
    pub fn formatted_start_at(&self) -> String {
        self.start_at.format("%B %-d %Y, %-I:%M %p").to_string()
    }

    /// Value for a `datetime-local` input.
    pub fn start_at_input(&self) -> String {
        self.start_at.format("%Y-%m-%dT%H:%M").to_string()
    }

    pub fn notes_text(&self) -> &str {
        self.notes.as_deref().unwrap_or_default()
    }
}
