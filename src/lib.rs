//! Author service: CRUD REST resource for authors over a pluggable persistence gateway.

pub mod config;
pub mod entity;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod repository;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{AppConfig, DatabaseConfig, ServerConfig, StoreKind};
pub use entity::{Author, AuthorDraft, AuthorPatch, CreateAuthor};
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use repository::{AuthorRepository, InMemoryAuthorRepository, PgAuthorRepository};
pub use routes::{app, author_routes, common_routes};
pub use service::{AuthorService, RequestValidator};
pub use state::AppState;
pub use store::{connect, ensure_database_exists};
