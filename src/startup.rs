use std::net::TcpListener;

use actix_cors::Cors;
use actix_web::{dev::Server, middleware::Logger, web, App, HttpServer};

use crate::{domain::site_profile::SiteProfile, routes, services::PageFetcher};

// Any front-end may call us directly
pub fn cors() -> Cors {
    Cors::permissive()
}

pub fn run(
    listener: TcpListener,
    page_fetcher: PageFetcher,
    site_profile: SiteProfile,
) -> Result<Server, std::io::Error> {
    let page_fetcher = web::Data::new(page_fetcher);
    let site_profile = web::Data::new(site_profile);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(cors())
            .wrap(Logger::default())
            .configure(routes::configure)
            .app_data(page_fetcher.clone())
            .app_data(site_profile.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
