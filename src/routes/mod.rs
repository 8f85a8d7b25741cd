pub mod avatar;
pub mod history;
pub mod session;
pub mod signup;

pub use avatar::{get_avatar, update_avatar};
pub use history::{get_history, update_history};
pub use session::{getinfo, login, signout};
pub use signup::signup;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::constants::ALLOWED_METHODS;
use crate::error::AppError;
use crate::AppState;

/// Build the application router
///
/// Exact-path dispatch to the six endpoints. A method mismatch on a known
/// path answers 405 and any other path answers 404, both in the JSON
/// response envelope. The CORS layer intercepts OPTIONS preflights before
/// they reach the routes.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/signup", post(signup).fallback(method_not_allowed))
        .route("/login", get(login).fallback(method_not_allowed))
        .route("/signout", delete(signout).fallback(method_not_allowed))
        .route("/getinfo", get(getinfo).fallback(method_not_allowed))
        .route(
            "/avatar",
            get(get_avatar).post(update_avatar).fallback(method_not_allowed),
        )
        .route(
            "/history",
            get(get_history).post(update_history).fallback(method_not_allowed),
        )
        .fallback(not_found)
        .layer(cors_layer())
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        ))
        .with_state(state)
}

/// Cross-origin policy applied to every response
///
/// The allow-origin header reflects the requester's origin, and the
/// Authorization response header (which carries the session token on login)
/// is exposed to browser clients. Headers are built fresh per response;
/// nothing here is shared mutable state.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .expose_headers([header::AUTHORIZATION])
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

async fn not_found() -> AppError {
    AppError::RouteNotFound
}
