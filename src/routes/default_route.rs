use actix_web::{get, HttpResponse, Responder};

#[get("/")]
pub async fn default() -> impl Responder {
    HttpResponse::Ok().body("Course extractor is up. POST /extract with {\"url\": \"...\"}")
}
