use axum::{
    middleware::from_fn_with_state,
    routing::{get, patch},
    Router,
};
use std::sync::Arc;

use crate::{handlers, middleware::auth, ApiState};

/// Admin reconciliation routes. The whole router sits behind the
/// bearer-token gate; handlers never re-check privilege themselves.
pub fn routes(state: Arc<ApiState>) -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/admin/bookings",
            get(handlers::admin::list_bookings).post(handlers::admin::create_booking),
        )
        .route(
            "/api/admin/bookings/:slot_id",
            patch(handlers::admin::update_booking).delete(handlers::admin::delete_booking),
        )
        .route_layer(from_fn_with_state(state, auth::require_admin))
}
