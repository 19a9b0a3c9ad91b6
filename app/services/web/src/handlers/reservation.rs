use app_dto::reservation::ReservationForm;
use app_error::AppError;
use app_schema::{customer::Customer, reservation::Reservation};
use app_state::AppState;
use askama::Template;
use axum::extract::rejection::{FormRejection, PathRejection};
use axum::extract::{Form, Path, State};
use axum::response::{Html, Redirect};
use std::sync::Arc;
use tracing::*;

#[derive(Template)]
#[template(path = "reservation_edit_form.html")]
struct ReservationEditFormPage {
    customer: Customer,
    customer_name: String,
    reservation: Reservation,
}

pub async fn post_new_reservation(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
    form: Result<Form<ReservationForm>, FormRejection>,
) -> Result<Redirect, AppError> {
    let Path(customer_id) = path?;
    let Form(args) = form?;
    let input = args.validate()?;
    Customer::get(&state.db, customer_id).await?;
    let mut reservation = input.into_reservation(customer_id);
    let id = reservation.save(&state.db).await?;
    info!("Created reservation {} for customer {}", id, customer_id);
    Ok(Redirect::to(&format!("/{customer_id}/")))
}

pub async fn get_edit_reservation(
    State(state): State<Arc<AppState>>,
    path: Result<Path<(i64, i64)>, PathRejection>,
) -> Result<Html<String>, AppError> {
    let Path((customer_id, reservation_id)) = path?;
    let customer = Customer::get(&state.db, customer_id).await?;
    let reservation = Reservation::get(&state.db, reservation_id).await?;
    debug!("{:?}", &reservation);
    let customer_name = customer.full_name();
    let page = ReservationEditFormPage {
        customer,
        customer_name,
        reservation,
    };
    Ok(Html(page.render()?))
}

/// Saves the edit and assigns the reservation to the customer named in the URL.
pub async fn post_edit_reservation(
    State(state): State<Arc<AppState>>,
    path: Result<Path<(i64, i64)>, PathRejection>,
    form: Result<Form<ReservationForm>, FormRejection>,
) -> Result<Redirect, AppError> {
    let Path((customer_id, reservation_id)) = path?;
    let Form(args) = form?;
    let input = args.validate()?;
    Customer::get(&state.db, customer_id).await?;
    let mut reservation = Reservation::get(&state.db, reservation_id).await?;
    if reservation.customer_id != customer_id {
        warn!(
            "Reservation {} moves from customer {} to customer {}",
            reservation_id, reservation.customer_id, customer_id
        );
    }
    input.apply_to(customer_id, &mut reservation);
    debug!("{:?}", &reservation);
    reservation.save(&state.db).await?;
    Ok(Redirect::to(&format!("/{}", reservation.customer_id)))
}
