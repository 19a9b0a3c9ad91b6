use app_error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    app_web::web_service().await
}
