use actix_web::{get, post, web, HttpRequest, HttpResponse};
use sqlx::PgPool;

use crate::db::helpers::database_failure;
use crate::db::users::get_user_summaries;
use crate::handlers::registration_handler::{register_user, signup_page};
use crate::models::user::SignupForm;

#[get("/signup")]
async fn signup_form(req: HttpRequest) -> HttpResponse {
    signup_page(req).await
}

#[post("/signup")]
async fn signup(
    user_form: web::Form<SignupForm>,
    pool: web::Data<PgPool>,
) -> HttpResponse {
    register_user(user_form, pool).await
}

#[get("/getUsers")]
async fn get_users(pool: web::Data<PgPool>) -> HttpResponse {
    match get_user_summaries(&pool).await {
        Ok(users) => HttpResponse::Ok().json(users),
        Err(e) => database_failure(e),
    }
}
