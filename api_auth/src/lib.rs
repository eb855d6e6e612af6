use actix_web::web;

pub mod routes {
    pub mod auth;
}

mod services {
    pub(crate) mod auth;
    pub(crate) mod user;
}

mod dtos {
    pub(crate) mod auth;
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(routes::auth::post_signup)
        .service(routes::auth::post_login);
}
