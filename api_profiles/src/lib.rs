use actix_web::web;

pub mod routes {
    pub mod profile;
}

mod services {
    pub(crate) mod profile;
}

mod dtos {
    pub(crate) mod profile;
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(routes::profile::get_profile)
        .service(routes::profile::put_profile)
        .service(routes::profile::post_convert_to_company)
        .service(routes::profile::get_companies);
}
