use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::sea_query::Order;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, FromQueryResult, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Select, TryGetable, Value,
};

use pagekit_core::{Paginatable, Take, Window};

use crate::query::{reset_ordering, reset_selection};

/// [`Paginatable`] over a caller-built `Select<E>`, anchored on one unique,
/// strictly ordered key column.
///
/// The select keeps whatever filters the caller attached; this source owns
/// the ordering (by the key column, in the configured direction) and merges
/// in the anchor predicate and the offset/limit window. Backward windows
/// scan in reversed key order and the rows are re-reversed afterwards, so a
/// slice always comes back in presentation order.
///
/// Composite sort keys are out of this adapter's scope; sources that need
/// them implement [`Paginatable`] directly.
pub struct KeySource<'c, C, E: EntityTrait, K> {
    conn: &'c C,
    select: Select<E>,
    key: E::Column,
    order: Order,
    _key: PhantomData<fn() -> K>,
}

impl<'c, C, E, K> KeySource<'c, C, E, K>
where
    C: ConnectionTrait,
    E: EntityTrait,
    E::Column: Copy,
    K: Clone + Into<Value>,
{
    /// Paginate `select` by `key` ascending.
    pub fn new(conn: &'c C, select: Select<E>, key: E::Column) -> Self {
        Self {
            conn,
            select,
            key,
            order: Order::Asc,
            _key: PhantomData,
        }
    }

    /// Paginate `select` by `key` descending (newest-first feeds).
    pub fn desc(conn: &'c C, select: Select<E>, key: E::Column) -> Self {
        Self {
            conn,
            select,
            key,
            order: Order::Desc,
            _key: PhantomData,
        }
    }

    fn scan_order(&self, backward: bool) -> Order {
        match (backward, &self.order) {
            (false, order) => order.clone(),
            (true, Order::Asc) => Order::Desc,
            (true, _) => Order::Asc,
        }
    }

    /// Merge the window into the select: inclusive anchor predicate, key
    /// ordering in scan direction, offset. The row budget is applied by the
    /// caller since probes cap it differently.
    fn windowed(&self, select: Select<E>, window: &Window<K>, backward: bool) -> Select<E> {
        let mut query = reset_ordering(select);
        if let Some(anchor) = window.anchor.clone() {
            let ahead = match (backward, &self.order) {
                (false, Order::Asc) => true,
                (false, _) => false,
                (true, Order::Asc) => false,
                (true, _) => true,
            };
            query = if ahead {
                query.filter(self.key.gte(anchor))
            } else {
                query.filter(self.key.lte(anchor))
            };
        }
        query = query.order_by(self.key, self.scan_order(backward));
        if window.skip > 0 {
            query = query.offset(window.skip);
        }
        query
    }
}

#[async_trait]
impl<C, E, K> Paginatable for KeySource<'_, C, E, K>
where
    C: ConnectionTrait,
    E: EntityTrait,
    E::Column: Copy,
    E::Model: FromQueryResult + Send + Sync,
    K: Clone + Send + Sync + Into<Value> + TryGetable,
{
    type Row = E::Model;
    type Key = K;
    type Error = DbErr;

    async fn fetch(&self, window: Window<K>) -> Result<Vec<E::Model>, DbErr> {
        let (take, backward) = match window.take {
            Take::Forward(n) => (n, false),
            Take::Backward(n) => (n, true),
        };
        if take == 0 {
            return Ok(Vec::new());
        }

        tracing::debug!(
            take,
            skip = window.skip,
            backward,
            anchored = window.anchor.is_some(),
            "fetching pagination window"
        );

        let query = self.windowed(self.select.clone(), &window, backward);
        let mut rows = query.limit(take).all(self.conn).await?;
        if backward {
            rows.reverse();
        }
        Ok(rows)
    }

    async fn exists(&self, window: Window<K>) -> Result<bool, DbErr> {
        let backward = matches!(window.take, Take::Backward(_));
        let probe = reset_selection(self.windowed(self.select.clone(), &window, backward));
        let hit: Option<K> = probe
            .column(self.key)
            .limit(1)
            .into_tuple()
            .one(self.conn)
            .await?;
        Ok(hit.is_some())
    }

    async fn count(&self) -> Result<u64, DbErr> {
        // Selection is narrowed to the key so the wrapping COUNT subquery
        // stays valid; ordering is stripped entirely.
        let query = reset_selection(self.select.clone()).column(self.key);
        reset_ordering(query).count(self.conn).await
    }
}
