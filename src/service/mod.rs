//! AuthorService: business rules over the persistence gateway.

mod author;
mod validation;
pub use author::AuthorService;
pub use validation::RequestValidator;
