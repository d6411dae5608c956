//! Recados REST API — CRUD over the file-backed collection.
//!
//! Listing is public; the admin frontend drives the mutating routes.

use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;

use crate::recados::StoreError;
use crate::AppState;

/// Map a store error onto the HTTP taxonomy:
/// InvalidInput → 400, NotFound → 404, Storage → 500.
fn error_response(err: &StoreError) -> HttpResponse {
    let body = serde_json::json!({ "error": err.to_string() });
    match err {
        StoreError::InvalidInput(_) => HttpResponse::BadRequest().json(body),
        StoreError::NotFound(_) => HttpResponse::NotFound().json(body),
        StoreError::Storage(_) => {
            log::error!("Storage failure: {}", err);
            HttpResponse::InternalServerError().json(body)
        }
    }
}

#[derive(Debug, Deserialize)]
struct RecadoTextRequest {
    text: String,
}

/// List all recados
async fn list_recados(data: web::Data<AppState>) -> impl Responder {
    match data.store.list() {
        Ok(recados) => HttpResponse::Ok().json(recados),
        Err(e) => error_response(&e),
    }
}

/// Create a recado
async fn create_recado(
    data: web::Data<AppState>,
    body: web::Json<RecadoTextRequest>,
) -> impl Responder {
    match data.store.create(&body.text) {
        Ok(recado) => HttpResponse::Created().json(recado),
        Err(e) => error_response(&e),
    }
}

/// Update a recado's text
async fn update_recado(
    data: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<RecadoTextRequest>,
) -> impl Responder {
    let id = path.into_inner();
    match data.store.update(id, &body.text) {
        Ok(recado) => HttpResponse::Ok().json(recado),
        Err(e) => error_response(&e),
    }
}

/// Delete a recado
async fn delete_recado(data: web::Data<AppState>, path: web::Path<i64>) -> impl Responder {
    let id = path.into_inner();
    match data.store.delete(id) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => error_response(&e),
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/recados")
            // A non-integer id is invalid input, not a missing route
            .app_data(web::PathConfig::default().error_handler(|err, _req| {
                actix_web::error::InternalError::from_response(
                    err,
                    HttpResponse::BadRequest().json(serde_json::json!({ "error": "Invalid id." })),
                )
                .into()
            }))
            // Malformed or incomplete JSON bodies get the same error shape
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                let message = err.to_string();
                actix_web::error::InternalError::from_response(
                    err,
                    HttpResponse::BadRequest().json(serde_json::json!({ "error": message })),
                )
                .into()
            }))
            .route("", web::get().to(list_recados))
            .route("", web::post().to(create_recado))
            .route("/{id}", web::put().to(update_recado))
            .route("/{id}", web::delete().to(delete_recado)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, RecoveryMode};
    use crate::recados::{Recado, RecadoStore};
    use actix_web::{test, App};
    use std::sync::Arc;
    use tempfile::TempDir;

    fn test_state(dir: &TempDir) -> web::Data<AppState> {
        let data_file = dir.path().join("data.json");
        web::Data::new(AppState {
            store: Arc::new(RecadoStore::new(data_file.clone(), RecoveryMode::Lenient)),
            config: Config {
                port: 0,
                data_file,
                recovery_mode: RecoveryMode::Lenient,
                admin_username: "user".to_string(),
                admin_password: "123456789".to_string(),
                public_dir: dir.path().join("public"),
            },
        })
    }

    #[actix_web::test]
    async fn test_crud_over_http() {
        let dir = TempDir::new().unwrap();
        let app = test::init_service(
            App::new().app_data(test_state(&dir)).configure(config),
        )
        .await;

        // Create
        let req = test::TestRequest::post()
            .uri("/api/recados")
            .set_json(serde_json::json!({ "text": "Buy milk" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);
        let created: Recado = test::read_body_json(resp).await;
        assert_eq!(created.id, 1);
        assert_eq!(created.text, "Buy milk");

        // Update
        let req = test::TestRequest::put()
            .uri("/api/recados/1")
            .set_json(serde_json::json!({ "text": "Buy oat milk" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        let updated: Recado = test::read_body_json(resp).await;
        assert_eq!(updated.text, "Buy oat milk");

        // List
        let req = test::TestRequest::get().uri("/api/recados").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        let all: Vec<Recado> = test::read_body_json(resp).await;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].text, "Buy oat milk");

        // Delete
        let req = test::TestRequest::delete().uri("/api/recados/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 204);

        let req = test::TestRequest::get().uri("/api/recados").to_request();
        let resp = test::call_service(&app, req).await;
        let all: Vec<Recado> = test::read_body_json(resp).await;
        assert!(all.is_empty());
    }

    #[actix_web::test]
    async fn test_create_empty_text_is_bad_request() {
        let dir = TempDir::new().unwrap();
        let app = test::init_service(
            App::new().app_data(test_state(&dir)).configure(config),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/recados")
            .set_json(serde_json::json!({ "text": "   " }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn test_unknown_id_is_not_found() {
        let dir = TempDir::new().unwrap();
        let app = test::init_service(
            App::new().app_data(test_state(&dir)).configure(config),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/recados/9999")
            .set_json(serde_json::json!({ "text": "x" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);

        let req = test::TestRequest::delete().uri("/api/recados/9999").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }

    #[actix_web::test]
    async fn test_malformed_body_is_bad_request_with_error_shape() {
        let dir = TempDir::new().unwrap();
        let app = test::init_service(
            App::new().app_data(test_state(&dir)).configure(config),
        )
        .await;

        // Missing text field
        let req = test::TestRequest::post()
            .uri("/api/recados")
            .set_json(serde_json::json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());

        // Body that is not JSON at all
        let req = test::TestRequest::put()
            .uri("/api/recados/1")
            .insert_header(("content-type", "application/json"))
            .set_payload("not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());
    }

    #[actix_web::test]
    async fn test_malformed_id_is_bad_request() {
        let dir = TempDir::new().unwrap();
        let app = test::init_service(
            App::new().app_data(test_state(&dir)).configure(config),
        )
        .await;

        let req = test::TestRequest::delete().uri("/api/recados/abc").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }
}
