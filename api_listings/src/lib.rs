use actix_web::web;

pub mod routes {
    pub mod listing;
    pub mod offer;
}

mod services {
    pub(crate) mod listing;
    pub(crate) mod offer;
}

mod dtos {
    pub(crate) mod listing;
    pub(crate) mod offer;
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(routes::listing::post_listing)
        .service(routes::listing::get_listings)
        .service(routes::listing::get_my_listings)
        .service(routes::listing::get_listing)
        .service(routes::listing::put_listing)
        .service(routes::listing::delete_listing)
        .service(routes::offer::post_offer);
}
