use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};

use crate::domain::types::ResourceId;
use crate::forms::resources::{CreateResourceForm, CreateResourceFormPayload};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::ServiceError;
use crate::services::resources::{
    create_resource as create_resource_service, get_resource as get_resource_service,
    list_resources as list_resources_service,
};

/// Fixed message for responses that must not leak internal detail.
const INTERNAL_ERROR_MESSAGE: &str = "Unexpected internal error";

#[post("/api/resources")]
pub async fn create_resource(
    request: HttpRequest,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CreateResourceForm>,
) -> impl Responder {
    let payload: CreateResourceFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => {
            return error_response(StatusCode::BAD_REQUEST, e.to_string(), request.path());
        }
    };

    match create_resource_service(payload, repo.get_ref()) {
        Ok(created) => HttpResponse::Created().json(created),
        Err(e) => {
            log::error!("Failed to create resource: {e}");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_ERROR_MESSAGE,
                request.path(),
            )
        }
    }
}

#[get("/api/resources")]
pub async fn list_resources(
    request: HttpRequest,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match list_resources_service(repo.get_ref()) {
        Ok(resources) => HttpResponse::Ok().json(resources),
        Err(e) => {
            log::error!("Failed to list resources: {e}");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_ERROR_MESSAGE,
                request.path(),
            )
        }
    }
}

#[get("/api/resources/{resource_id}")]
pub async fn get_resource(
    request: HttpRequest,
    resource_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let raw_id = resource_id.into_inner();

    // Non-positive ids cannot exist in the store; classify them as absent.
    let resource_id = match ResourceId::new(raw_id) {
        Ok(id) => id,
        Err(_) => {
            return error_response(
                StatusCode::NOT_FOUND,
                format!("Resource not found with id: {raw_id}"),
                request.path(),
            );
        }
    };

    match get_resource_service(resource_id, repo.get_ref()) {
        Ok(resource) => HttpResponse::Ok().json(resource),
        Err(ServiceError::NotFound) => error_response(
            StatusCode::NOT_FOUND,
            format!("Resource not found with id: {raw_id}"),
            request.path(),
        ),
        Err(e) => {
            log::error!("Failed to get resource: {e}");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_ERROR_MESSAGE,
                request.path(),
            )
        }
    }
}
