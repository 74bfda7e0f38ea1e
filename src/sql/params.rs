//! Typed query parameters and their conversion into sqlx arguments.

use crate::error::AppError;
use sqlx::postgres::PgArguments;
use sqlx::Arguments;

/// A value bound to a `$n` placeholder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SqlParam {
    Int(i32),
    Text(String),
}

/// Bind params in placeholder order.
pub fn to_arguments(params: &[SqlParam]) -> Result<PgArguments, AppError> {
    let mut args = PgArguments::default();
    for p in params {
        let added = match p {
            SqlParam::Int(n) => args.add(*n),
            SqlParam::Text(s) => args.add(s.clone()),
        };
        added.map_err(sqlx::Error::Encode)?;
    }
    Ok(args)
}
