use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::auth::session::{redirect_to, session_removal_cookie, SignedInUser};
use crate::db::helpers::database_failure;
use crate::db::users::get_user_by_id;
use crate::models::profile::ProfileImages;
use crate::views::{layout::html, pages};

pub async fn home(_user: SignedInUser) -> HttpResponse {
    html(HttpResponse::Ok(), pages::home())
}

pub async fn playtime(_user: SignedInUser) -> HttpResponse {
    html(HttpResponse::Ok(), pages::playtime())
}

pub async fn stats(_user: SignedInUser) -> HttpResponse {
    html(HttpResponse::Ok(), pages::stats())
}

pub async fn match_history(_user: SignedInUser) -> HttpResponse {
    html(HttpResponse::Ok(), pages::match_history())
}

#[tracing::instrument(name = "Get user profile", skip(pool, user), fields(user_id = user.user_id))]
pub async fn profile(pool: web::Data<PgPool>, user: SignedInUser) -> HttpResponse {
    match get_user_by_id(&pool, user.user_id).await {
        Ok(Some(found)) => {
            let images = ProfileImages::for_number(found.number);
            html(HttpResponse::Ok(), pages::profile(&found, images))
        }
        Ok(None) => {
            // Valid cookie for a user that no longer exists
            tracing::warn!("Session refers to an unknown user");
            let mut response = redirect_to("/login");
            if let Err(e) = response.add_removal_cookie(&session_removal_cookie()) {
                tracing::error!("Failed to clear session cookie: {:?}", e);
            }
            response
        }
        Err(e) => database_failure(e),
    }
}
