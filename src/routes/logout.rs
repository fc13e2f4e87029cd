use axum::Json;
use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::middleware::ACCESS_TOKEN_COOKIE;
use crate::types::auth::AuthUser;
use crate::types::ApiResponse;

pub async fn logout(
    user: AuthUser,
    jar: CookieJar,
) -> (CookieJar, Json<ApiResponse<&'static str>>) {
    tracing::info!(user_id = %user.id, "user logged out");

    let removal = Cookie::build((ACCESS_TOKEN_COOKIE, "")).path("/").build();
    (jar.remove(removal), Json(ApiResponse::ok("logout successful")))
}
