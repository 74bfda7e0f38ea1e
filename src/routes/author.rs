//! Author CRUD routes. Each path is also served with a trailing slash.

use crate::handlers::author::{create, delete as delete_handler, list, read, update};
use crate::routes::no_route;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn author_routes(state: AppState) -> Router {
    let collection = get(list).post(create).fallback(no_route);
    let member = get(read)
        .patch(update)
        .delete(delete_handler)
        .fallback(no_route);
    Router::new()
        .route("/author", collection.clone())
        .route("/author/", collection)
        .route("/author/:id", member.clone())
        .route("/author/:id/", member)
        .with_state(state)
}
