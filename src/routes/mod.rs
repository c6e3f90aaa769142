use actix_web::web;

pub mod default_route;
pub mod extract_route;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(extract_route::json_config())
        .service(default_route::default)
        .service(extract_route::extract);
}
