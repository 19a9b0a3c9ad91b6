use crate::reservation::Reservation;
use app_error::AppError;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use tracing::*;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Customer {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub notes: Option<String>,
}

impl Customer {
    #[inline]
    pub fn select_base() -> &'static str {
        include_str!("../../../SQL/customers/select_base.sql")
    }

    #[inline]
    pub fn insert_query() -> &'static str {
        include_str!("../../../SQL/customers/insert.sql")
    }

    #[inline]
    pub fn update_query() -> &'static str {
        include_str!("../../../SQL/customers/update.sql")
    }

    /// An unsaved customer; `save` assigns the id.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: Option<String>,
        notes: Option<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone,
            notes,
        }
    }

    pub async fn all(pool: &SqlitePool) -> Result<Vec<Self>, AppError> {
        let customers = sqlx::query_as::<_, Self>(&format!(
            "{} ORDER BY last_name, first_name, id",
            Self::select_base()
        ))
        .fetch_all(pool)
        .await?;
        Ok(customers)
    }

    pub async fn get(pool: &SqlitePool, id: i64) -> Result<Self, AppError> {
        sqlx::query_as::<_, Self>(&format!("{} WHERE id = ?", Self::select_base()))
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| AppError::not_found(format!("No such customer: {id}")))
    }

    /// Looks a customer up by `"{first_name} {last_name}"`. The lowest id wins on duplicates.
    pub async fn get_by_name(pool: &SqlitePool, full_name: &str) -> Result<Self, AppError> {
        sqlx::query_as::<_, Self>(&format!(
            "{} WHERE first_name || ' ' || last_name = ? ORDER BY id LIMIT 1",
            Self::select_base()
        ))
        .bind(full_name)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::not_found(format!("No such customer: {full_name}")))
    }

    /// Inserts when unsaved, otherwise overwrites the row with this id. Returns the id.
    pub async fn save(&mut self, pool: &SqlitePool) -> Result<i64, AppError> {
        match self.id {
            None => {
                let id: i64 = sqlx::query_scalar(Self::insert_query())
                    .bind(&self.first_name)
                    .bind(&self.last_name)
                    .bind(&self.phone)
                    .bind(&self.notes)
                    .fetch_one(pool)
                    .await?;
                debug!("INSERT customer {}: {:?}", id, self);
                self.id = Some(id);
                Ok(id)
            }
            Some(id) => {
                let res = sqlx::query(Self::update_query())
                    .bind(&self.first_name)
                    .bind(&self.last_name)
                    .bind(&self.phone)
                    .bind(&self.notes)
                    .bind(id)
                    .execute(pool)
                    .await?;
                if res.rows_affected() == 0 {
                    return Err(AppError::not_found(format!("No such customer: {id}")));
                }
                debug!("UPDATE customer {}: {:?}", id, self);
                Ok(id)
            }
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub async fn get_reservations(&self, pool: &SqlitePool) -> Result<Vec<Reservation>, AppError> {
        match self.id {
            Some(id) => Reservation::for_customer(pool, id).await,
            None => Ok(Vec::new()),
        }
    }

    pub fn phone_text(&self) -> &str {
        self.phone.as_deref().unwrap_or_default()
    }

    pub fn notes_text(&self) -> &str {
        self.notes.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_pool;
    use app_error::ErrorKind;
    use chrono::NaiveDate;

    fn jane() -> Customer {
        Customer::new("Jane", "Doe", Some("555-1234".into()), Some(String::new()))
    }

    #[test]
    fn full_name_joins_with_single_space() {
        assert_eq!(jane().full_name(), "Jane Doe");
        let spaced = Customer::new("Mary  Ann", "van der Berg", None, None);
        assert_eq!(spaced.full_name(), "Mary  Ann van der Berg");
    }

    #[tokio::test]
    async fn save_assigns_id_and_get_returns_same_fields() {
        let pool = test_pool().await;
        let mut customer = jane();
        let id = customer.save(&pool).await.unwrap();
        assert_eq!(customer.id, Some(id));

        let loaded = Customer::get(&pool, id).await.unwrap();
        assert_eq!(loaded.first_name, "Jane");
        assert_eq!(loaded.last_name, "Doe");
        assert_eq!(loaded.phone.as_deref(), Some("555-1234"));
        assert_eq!(loaded.notes.as_deref(), Some(""));
    }

    #[tokio::test]
    async fn saving_unchanged_customer_is_idempotent() {
        let pool = test_pool().await;
        let id = jane().save(&pool).await.unwrap();
        let mut loaded = Customer::get(&pool, id).await.unwrap();
        assert_eq!(loaded.save(&pool).await.unwrap(), id);
        assert_eq!(Customer::get(&pool, id).await.unwrap(), loaded);
        assert_eq!(Customer::all(&pool).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn save_updates_existing_row() {
        let pool = test_pool().await;
        let mut customer = jane();
        let id = customer.save(&pool).await.unwrap();
        customer.phone = None;
        customer.notes = Some("prefers booths".into());
        customer.save(&pool).await.unwrap();

        let loaded = Customer::get(&pool, id).await.unwrap();
        assert_eq!(loaded.phone, None);
        assert_eq!(loaded.notes_text(), "prefers booths");
    }

    #[tokio::test]
    async fn get_missing_customer_is_not_found() {
        let pool = test_pool().await;
        let err = Customer::get(&pool, 42).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn updating_vanished_customer_is_not_found() {
        let pool = test_pool().await;
        let mut ghost = jane();
        ghost.id = Some(99);
        let err = ghost.save(&pool).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn all_orders_by_last_then_first_name() {
        let pool = test_pool().await;
        for (first, last) in [("Zed", "Adams"), ("Amy", "Young"), ("Bob", "Adams")] {
            Customer::new(first, last, None, None).save(&pool).await.unwrap();
        }
        let names: Vec<String> = Customer::all(&pool)
            .await
            .unwrap()
            .iter()
            .map(Customer::full_name)
            .collect();
        assert_eq!(names, ["Bob Adams", "Zed Adams", "Amy Young"]);
    }

    #[tokio::test]
    async fn get_by_name_matches_full_name_and_prefers_lowest_id() {
        let pool = test_pool().await;
        let first = jane().save(&pool).await.unwrap();
        jane().save(&pool).await.unwrap();
        Customer::new("John", "Doe", None, None).save(&pool).await.unwrap();

        let found = Customer::get_by_name(&pool, "Jane Doe").await.unwrap();
        assert_eq!(found.id, Some(first));

        let err = Customer::get_by_name(&pool, "jane doe").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn get_reservations_returns_only_own_reservations() {
        let pool = test_pool().await;
        let mut alice = Customer::new("Alice", "Wong", None, None);
        let alice_id = alice.save(&pool).await.unwrap();
        let bob_id = Customer::new("Bob", "Ross", None, None)
            .save(&pool)
            .await
            .unwrap();

        let at = |h| {
            NaiveDate::from_ymd_opt(2024, 5, 1)
                .unwrap()
                .and_hms_opt(h, 0, 0)
                .unwrap()
        };
        let mut own = Vec::new();
        for hour in [20, 18] {
            let mut r = Reservation::new(alice_id, at(hour), 2, None);
            own.push(r.save(&pool).await.unwrap());
        }
        Reservation::new(bob_id, at(19), 4, None)
            .save(&pool)
            .await
            .unwrap();

        let reservations = alice.get_reservations(&pool).await.unwrap();
        assert_eq!(reservations.len(), 2);
        assert!(reservations.iter().all(|r| r.customer_id == alice_id));
        // ordered by start time
        assert_eq!(reservations[0].id, Some(own[1]));

        let unsaved = Customer::new("New", "Person", None, None);
        assert!(unsaved.get_reservations(&pool).await.unwrap().is_empty());
    }
}
