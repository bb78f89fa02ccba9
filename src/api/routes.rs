use axum::{
    extract::Request,
    http::{uri::PathAndQuery, Uri},
    routing::get,
    Router,
};
use tower::{
    util::{MapRequest, MapRequestLayer},
    Layer,
};

use crate::api::handlers::{self, AppState};
use crate::store::traits::Store;

/// Every method/path pair without a handler answers "Invalid route." with 400.
pub fn create_router<S: Store + 'static>() -> Router<AppState<S>> {
    Router::new()
        // Health check
        .route(
            "/health",
            get(handlers::health_check).fallback(handlers::invalid_route),
        )
        // Departments
        .route(
            "/departments",
            get(handlers::list_departments::<S>)
                .post(handlers::create_department::<S>)
                .fallback(handlers::invalid_route),
        )
        .route(
            "/departments/:id",
            get(handlers::get_department::<S>)
                .post(handlers::update_department::<S>)
                .delete(handlers::delete_department::<S>)
                .fallback(handlers::invalid_route),
        )
        .route(
            "/departments/:id/employees",
            get(handlers::list_department_employees::<S>).fallback(handlers::invalid_route),
        )
        // Employees
        .route(
            "/employees",
            get(handlers::list_employees::<S>)
                .post(handlers::create_employee::<S>)
                .fallback(handlers::invalid_route),
        )
        .route(
            "/employees/:id",
            get(handlers::get_employee::<S>)
                .post(handlers::update_employee::<S>)
                .delete(handlers::delete_employee::<S>)
                .fallback(handlers::invalid_route),
        )
        .fallback(handlers::invalid_route)
}

pub type NormalizedRouter = MapRequest<Router, fn(Request) -> Request>;

/// Wrap a finished router so paths are matched case-insensitively.
///
/// The rewrite has to happen before routing, so it wraps the router rather than being
/// added with `Router::layer`.
pub fn with_normalized_paths(router: Router) -> NormalizedRouter {
    MapRequestLayer::new(lowercase_path as fn(Request) -> Request).layer(router)
}

/// Lower-case the request path, leaving the query string untouched.
pub fn lowercase_path(mut request: Request) -> Request {
    let uri = request.uri();
    if !uri.path().bytes().any(|b| b.is_ascii_uppercase()) {
        return request;
    }

    let path = uri.path().to_lowercase();
    let path_and_query = match uri.query() {
        Some(query) => format!("{}?{}", path, query),
        None => path,
    };

    let mut parts = uri.clone().into_parts();
    parts.path_and_query = path_and_query.parse::<PathAndQuery>().ok();
    if let Ok(normalized) = Uri::from_parts(parts) {
        *request.uri_mut() = normalized;
    }
    request
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn rewrite(uri: &str) -> String {
        let request = axum::http::Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        lowercase_path(request).uri().to_string()
    }

    #[test]
    fn test_lowercase_path_keeps_query() {
        assert_eq!(
            rewrite("/Employees/3?includeDepartment=TRUE"),
            "/employees/3?includeDepartment=TRUE"
        );
        assert_eq!(rewrite("/departments"), "/departments");
        assert_eq!(
            rewrite("http://localhost:38088/DEPARTMENTS/1/Employees"),
            "http://localhost:38088/departments/1/employees"
        );
    }
}
