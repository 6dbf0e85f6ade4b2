use crate::routes::{lookup_customer, register_customer, register_form};
use actix_web::web;

pub fn customer_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(register_form))
        .route("/register", web::post().to(register_customer))
        .route("/lookup", web::get().to(lookup_customer));
}
