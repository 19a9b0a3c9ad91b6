pub mod customer;
pub mod reservation;

use app_error::AppError;
use sqlx::SqlitePool;

/// Applies the embedded migrations from `app/SQL/migrations`.
pub async fn migrate(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::migrate!("../../SQL/migrations").run(pool).await?;
    Ok(())
}
