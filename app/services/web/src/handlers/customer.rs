use app_dto::customer::{CustomerForm, CustomerListEntry, CustomerSearchForm};
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
#[template(path = "customer_list.html")]
struct CustomerListPage {
    customers: Vec<CustomerListEntry>,
}

#[derive(Template)]
#[template(path = "customer_new_form.html")]
struct CustomerNewFormPage;

#[derive(Template)]
#[template(path = "customer_detail.html")]
struct CustomerDetailPage {
    customer: Customer,
    customer_name: String,
    reservations: Vec<Reservation>,
}

#[derive(Template)]
#[template(path = "customer_edit_form.html")]
struct CustomerEditFormPage {
    customer: Customer,
    customer_name: String,
}

/// Homepage: every customer with its full name.
pub async fn get_customers(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let customers = Customer::all(&state.db)
        .await?
        .into_iter()
        .map(CustomerListEntry::from)
        .collect();
    let page = CustomerListPage { customers };
    Ok(Html(page.render()?))
}

pub async fn get_new_customer() -> Result<Html<String>, AppError> {
    let page = CustomerNewFormPage;
    Ok(Html(page.render()?))
}

pub async fn post_new_customer(
    State(state): State<Arc<AppState>>,
    form: Result<Form<CustomerForm>, FormRejection>,
) -> Result<Redirect, AppError> {
    let Form(args) = form?;
    let mut customer = args.validate()?.into_customer();
    let id = customer.save(&state.db).await?;
    info!("Created customer {}", id);
    Ok(Redirect::to(&format!("/{id}/")))
}

/// Name search; renders the list page with the single match.
pub async fn post_search_customer(
    State(state): State<Arc<AppState>>,
    form: Result<Form<CustomerSearchForm>, FormRejection>,
) -> Result<Html<String>, AppError> {
    let Form(args) = form?;
    let customer_name = args.search_name()?;
    debug!("Searching customer {:?}", &customer_name);
    let customer = Customer::get_by_name(&state.db, &customer_name).await?;
    let page = CustomerListPage {
        customers: vec![CustomerListEntry::from(customer)],
    };
    Ok(Html(page.render()?))
}

pub async fn get_customer(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Html<String>, AppError> {
    let Path(id) = path?;
    let customer = Customer::get(&state.db, id).await?;
    let customer_name = customer.full_name();
    let reservations = customer.get_reservations(&state.db).await?;
    let page = CustomerDetailPage {
        customer,
        customer_name,
        reservations,
    };
    Ok(Html(page.render()?))
}

pub async fn get_edit_customer(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Html<String>, AppError> {
    let Path(id) = path?;
    let customer = Customer::get(&state.db, id).await?;
    let customer_name = customer.full_name();
    let page = CustomerEditFormPage {
        customer,
        customer_name,
    };
    Ok(Html(page.render()?))
}

pub async fn post_edit_customer(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
    form: Result<Form<CustomerForm>, FormRejection>,
) -> Result<Redirect, AppError> {
    let Path(id) = path?;
    let Form(args) = form?;
    let input = args.validate()?;
    let mut customer = Customer::get(&state.db, id).await?;
    input.apply_to(&mut customer);
    customer.save(&state.db).await?;
    Ok(Redirect::to(&format!("/{id}/")))
}
