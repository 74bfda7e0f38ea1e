//! Shared application state for all routes.

use crate::service::AuthorService;

#[derive(Clone)]
pub struct AppState {
    pub authors: AuthorService,
}

impl AppState {
    pub fn new(authors: AuthorService) -> Self {
        AppState { authors }
    }
}
