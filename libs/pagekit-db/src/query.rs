//! Query-rewriting primitives for auxiliary probe/count queries.
//!
//! Probes must not inherit the caller's projection or ordering: a probe
//! only needs to know whether a row exists, and a count is unordered by
//! definition. Both helpers produce a modified copy and touch nothing else
//! on the select.

use sea_orm::{EntityTrait, QuerySelect, QueryTrait, Select};

/// Strip the caller's column projection. The probe re-selects only what it
/// needs afterwards.
pub fn reset_selection<E: EntityTrait>(select: Select<E>) -> Select<E> {
    select.select_only()
}

/// Strip the caller's `ORDER BY` clauses.
pub fn reset_ordering<E: EntityTrait>(mut select: Select<E>) -> Select<E> {
    QueryTrait::query(&mut select).clear_order_by();
    select
}
