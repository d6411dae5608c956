//! Login check — literal equality against two configured constants.
//!
//! Returns a bare success flag; there is no session or token issuance
//! and nothing downstream trusts this check.

use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;

use crate::AppState;

#[derive(Debug, Deserialize)]
struct LoginRequest {
    username: String,
    password: String,
}

async fn login(data: web::Data<AppState>, body: web::Json<LoginRequest>) -> impl Responder {
    let ok = body.username == data.config.admin_username
        && body.password == data.config.admin_password;

    if ok {
        HttpResponse::Ok().json(serde_json::json!({ "success": true }))
    } else {
        HttpResponse::Unauthorized().json(serde_json::json!({
            "success": false,
            "message": "Invalid credentials."
        }))
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/login").route(web::post().to(login)));
}
