//! Data access layer repositories.
//!
//! One repository per entity, each borrowing any [`ConnectionTrait`](sea_orm::ConnectionTrait)
//! so the same code runs against the connection pool or inside a transaction.
//! Repositories never check existence before mutating, callers do that when needed.

pub mod account;
pub mod athlete;
pub mod club;
pub mod coach;
pub mod organizer;
pub mod token;
pub mod verification_code;

use sea_orm::{ColumnTrait, QueryFilter};

/// Restricts `query` to rows whose `column` is one of `ids`.
///
/// An empty `ids` leaves the query untouched so every row is returned. Otherwise a
/// single `IN (...)` clause is added with one bind parameter per identifier.
pub fn filter_by_ids<Q, C>(query: Q, column: C, ids: &[String]) -> Q
where
    Q: QueryFilter,
    C: ColumnTrait,
{
    if ids.is_empty() {
        return query;
    }

    query.filter(column.is_in(ids.iter().cloned()))
}
