use axum::body::Body;
use axum::extract::State;
use axum::http::{header, HeaderValue, Method, Request};
use axum::middleware::Next;
use axum::response::{IntoResponse, Json, Response};

#[derive(Clone, Debug)]
pub struct CorsState {
    origin: HeaderValue,
}

pub fn new_cors_state(origin: &str) -> CorsState {
    CorsState {
        origin: HeaderValue::from_str(origin)
            .unwrap_or_else(|_| HeaderValue::from_static("http://localhost:3000")),
    }
}

/// Stamps the fixed CORS headers on every response. Preflight OPTIONS
/// requests are answered directly with a 200 `"ok"` body.
pub async fn cors_middleware(
    State(state): State<CorsState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let mut response = if req.method() == Method::OPTIONS {
        Json("ok").into_response()
    } else {
        next.run(req).await
    };

    let headers = response.headers_mut();
    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, state.origin.clone());
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET,POST,OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    response
}
