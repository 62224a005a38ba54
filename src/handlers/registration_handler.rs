use actix_web::{web, HttpRequest, HttpResponse};
use secrecy::ExposeSecret;
use sqlx::PgPool;

use crate::auth::flash::{clear_flash, redirect_with_flash, take_flash, Flash};
use crate::auth::session::redirect_to;
use crate::db::users::{get_user_by_email, get_user_by_number, insert_user};
use crate::models::user::{NewUser, SignupForm};
use crate::utils::password::hash_password;
use crate::validation::signup::{SignupError, SignupValidator};
use crate::views::{layout::html, pages};

pub async fn signup_page(req: HttpRequest) -> HttpResponse {
    let flash = take_flash(&req).map(|flash| flash.message());
    let mut builder = HttpResponse::Ok();
    clear_flash(&mut builder);
    html(builder, pages::signup(flash.as_deref()))
}

#[tracing::instrument(
    name = "Adding a new user",
    // Don't show arguments
    skip(user_form, pool),
    fields(
        user = %user_form
    )
)]
pub async fn register_user(
    user_form: web::Form<SignupForm>,
    pool: web::Data<PgPool>
) -> HttpResponse {
    let number = match SignupValidator::new().validate(&user_form) {
        Ok(number) => number,
        Err(e) => return reject(e),
    };

    match get_user_by_email(&pool, &user_form.email).await {
        Ok(Some(_)) => return reject(SignupError::EmailTaken),
        Ok(None) => {}
        Err(e) => {
            tracing::error!("Failed to look up email: {:?}", e);
            return HttpResponse::InternalServerError().finish();
        }
    }

    match get_user_by_number(&pool, number).await {
        Ok(Some(_)) => return reject(SignupError::NumberTaken),
        Ok(None) => {}
        Err(e) => {
            tracing::error!("Failed to look up jersey number: {:?}", e);
            return HttpResponse::InternalServerError().finish();
        }
    }

    let password_hash = match hash_password(user_form.password.expose_secret()) {
        Ok(hash) => hash,
        Err(e) => {
            tracing::error!("Failed to hash password: {:?}", e);
            return HttpResponse::InternalServerError().finish();
        }
    };

    let new_user = NewUser {
        first_name: user_form.first_name.clone(),
        last_name: user_form.last_name.clone(),
        email: user_form.email.clone(),
        number,
        password_hash,
    };

    match insert_user(&pool, &new_user).await {
        Ok(user_id) => {
            tracing::info!(user_id, "User registered");
            redirect_to("/login")
        }
        Err(_) => HttpResponse::InternalServerError().finish(),
    }
}

fn reject(error: SignupError) -> HttpResponse {
    tracing::info!("Signup rejected: {}", error);
    redirect_with_flash("/signup", Flash::Signup(error))
}
