use actix_web::web;

pub mod auth;
pub mod backend_health;
pub mod matches;
pub mod pages;
pub mod registration;
pub mod stats;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(backend_health::backend_health);

    // Session
    cfg.service(auth::login_form)
        .service(auth::login)
        .service(auth::logout)
        .service(registration::signup_form)
        .service(registration::signup);

    // Pages (protected through the `SignedInUser` extractor)
    cfg.service(pages::home)
        .service(pages::playtime)
        .service(pages::stats)
        .service(pages::match_history)
        .service(pages::profile)
        .service(stats::win_rate);

    // Matches
    cfg.service(matches::add_match_form)
        .service(matches::add_match)
        .service(matches::get_matches)
        .service(matches::save_stats);

    // JSON reports
    cfg.service(stats::get_stats)
        .service(stats::get_years)
        .service(stats::get_play_time_data)
        .service(registration::get_users);
}
