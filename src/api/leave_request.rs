use actix_web::{HttpResponse, Responder, web};
use tracing::{info, warn};

use crate::error::{StoreError, ValidationError};
use crate::model::leave_request::{Decision, LeaveRequest};
use crate::models::{LeaveForm, LeaveListResponse};
use crate::store::LeaveStore;
use crate::utils::flash::{IncomingFlash, Notice, page, redirect};
use crate::views;

impl From<ValidationError> for Notice {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::MissingField => Notice::MissingFields,
            ValidationError::BadDateFormat => Notice::BadDateFormat,
            ValidationError::BadDateRange => Notice::BadDateRange,
        }
    }
}

impl From<StoreError> for Notice {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => Notice::NotFound,
            StoreError::AlreadyDecided { .. } => Notice::AlreadyDecided,
        }
    }
}

fn log_validation_failure(err: ValidationError) {
    match err {
        ValidationError::MissingField => {
            warn!("Form submission failed: Missing required fields.")
        }
        ValidationError::BadDateFormat => warn!("Form submission failed: Invalid date format."),
        ValidationError::BadDateRange => warn!("Invalid date range entered."),
    }
}

/* =========================
List leave requests
========================= */
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "All leave requests in submission order", content_type = "text/html", body = String)
    ),
    tag = "Leave"
)]
pub async fn leave_list(store: web::Data<LeaveStore>, flash: IncomingFlash) -> impl Responder {
    let html = views::index_page(&store.list(), flash.flash());
    page(html, &flash)
}

/* =========================
Create leave request
========================= */
#[utoipa::path(
    get,
    path = "/add",
    responses(
        (status = 200, description = "Empty creation form", content_type = "text/html", body = String)
    ),
    tag = "Leave"
)]
pub async fn add_form(flash: IncomingFlash) -> impl Responder {
    page(views::add_page(flash.flash()), &flash)
}

#[utoipa::path(
    post,
    path = "/add",
    request_body(
        content = LeaveForm,
        description = "Leave request form",
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (status = 302, description = "Redirect to `/` when saved, back to `/add` when the form is invalid")
    ),
    tag = "Leave"
)]
pub async fn create_leave(
    store: web::Data<LeaveStore>,
    form: web::Form<LeaveForm>,
) -> impl Responder {
    let details = match form.validate() {
        Ok(details) => details,
        Err(err) => {
            log_validation_failure(err);
            return redirect("/add", Some(err.into()));
        }
    };

    let name = details.name.clone();
    store.append(details);
    info!("New leave request added for {}.", name);
    redirect("/", Some(Notice::Submitted))
}

/* =========================
Edit leave request
========================= */
#[utoipa::path(
    get,
    path = "/edit/{position}",
    params(
        ("position" = usize, Path, description = "Zero-based position of the request in the list")
    ),
    responses(
        (status = 200, description = "Form pre-filled with the request", content_type = "text/html", body = String),
        (status = 302, description = "Redirect to `/` when no request is at that position")
    ),
    tag = "Leave"
)]
pub async fn edit_form(
    store: web::Data<LeaveStore>,
    path: web::Path<usize>,
    flash: IncomingFlash,
) -> HttpResponse {
    let position = path.into_inner();
    match store.get(position) {
        Ok(req) => page(views::edit_page(position, &req, flash.flash()), &flash),
        Err(err) => {
            warn!(position, "Edit requested for a missing leave request.");
            redirect("/", Some(err.into()))
        }
    }
}

#[utoipa::path(
    post,
    path = "/edit/{position}",
    params(
        ("position" = usize, Path, description = "Zero-based position of the request in the list")
    ),
    request_body(
        content = LeaveForm,
        description = "Leave request form",
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (status = 302, description = "Redirect to `/` when saved or missing, back to the form when invalid")
    ),
    tag = "Leave"
)]
pub async fn update_leave(
    store: web::Data<LeaveStore>,
    path: web::Path<usize>,
    form: web::Form<LeaveForm>,
) -> impl Responder {
    let position = path.into_inner();
    if position >= store.len() {
        warn!(position, "Update requested for a missing leave request.");
        return redirect("/", Some(Notice::NotFound));
    }

    let details = match form.validate() {
        Ok(details) => details,
        Err(err) => {
            log_validation_failure(err);
            return redirect(&format!("/edit/{position}"), Some(err.into()));
        }
    };

    match store.update(position, details) {
        Ok(updated) => {
            info!("Leave request for {} updated.", updated.name);
            redirect("/", Some(Notice::Updated))
        }
        Err(err) => {
            warn!(position, "Leave request disappeared before update.");
            redirect("/", Some(err.into()))
        }
    }
}

/* =========================
Delete leave request
========================= */
#[utoipa::path(
    get,
    path = "/delete/{position}",
    params(
        ("position" = usize, Path, description = "Zero-based position of the request in the list")
    ),
    responses(
        (status = 302, description = "Redirect to `/` with a confirmation or not-found message")
    ),
    tag = "Leave"
)]
pub async fn delete_leave(store: web::Data<LeaveStore>, path: web::Path<usize>) -> impl Responder {
    let position = path.into_inner();
    match store.remove_at(position) {
        Ok(deleted) => {
            info!("Leave request deleted: {}", deleted.name);
            redirect("/", Some(Notice::Deleted))
        }
        Err(err) => {
            warn!(position, "Delete requested for a missing leave request.");
            redirect("/", Some(err.into()))
        }
    }
}

/* =========================
Approve / reject leave
========================= */
fn decide(store: &LeaveStore, position: usize, decision: Decision) -> HttpResponse {
    match store.set_status(position, decision) {
        Ok(req) => {
            let notice = match decision {
                Decision::Approve => {
                    info!("Leave approved for {}.", req.name);
                    Notice::Approved
                }
                Decision::Reject => {
                    info!("Leave rejected for {}.", req.name);
                    Notice::Rejected
                }
            };
            redirect("/", Some(notice))
        }
        Err(err) => {
            warn!(position, %decision, error = %err, "Leave decision refused.");
            redirect("/", Some(err.into()))
        }
    }
}

#[utoipa::path(
    get,
    path = "/approve/{position}",
    params(
        ("position" = usize, Path, description = "Zero-based position of the request in the list")
    ),
    responses(
        (status = 302, description = "Redirect to `/`; the message tells whether the request was approved, missing or already processed")
    ),
    tag = "Leave"
)]
pub async fn approve_leave(store: web::Data<LeaveStore>, path: web::Path<usize>) -> impl Responder {
    decide(&store, path.into_inner(), Decision::Approve)
}

#[utoipa::path(
    get,
    path = "/reject/{position}",
    params(
        ("position" = usize, Path, description = "Zero-based position of the request in the list")
    ),
    responses(
        (status = 302, description = "Redirect to `/`; the message tells whether the request was rejected, missing or already processed")
    ),
    tag = "Leave"
)]
pub async fn reject_leave(store: web::Data<LeaveStore>, path: web::Path<usize>) -> impl Responder {
    decide(&store, path.into_inner(), Decision::Reject)
}

/* =========================
JSON read view
========================= */
/// for getting all leave requests as JSON
#[utoipa::path(
    get,
    path = "/api/leave",
    responses(
        (status = 200, description = "All leave requests in submission order", body = LeaveListResponse)
    ),
    tag = "Leave"
)]
pub async fn leave_list_json(store: web::Data<LeaveStore>) -> impl Responder {
    let data = store.list();
    HttpResponse::Ok().json(LeaveListResponse {
        total: data.len(),
        data,
    })
}

/// for getting a single leave request as JSON
#[utoipa::path(
    get,
    path = "/api/leave/{position}",
    params(
        ("position" = usize, Path, description = "Zero-based position of the request in the list")
    ),
    responses(
        (status = 200, description = "Leave request found", body = LeaveRequest),
        (status = 404, description = "Leave request not found", body = Object, example = json!({
            "message": "Leave request not found"
        }))
    ),
    tag = "Leave"
)]
pub async fn get_leave_json(store: web::Data<LeaveStore>, path: web::Path<usize>) -> impl Responder {
    match store.get(path.into_inner()) {
        Ok(req) => HttpResponse::Ok().json(req),
        Err(_) => HttpResponse::NotFound().json(serde_json::json!({
            "message": "Leave request not found"
        })),
    }
}
