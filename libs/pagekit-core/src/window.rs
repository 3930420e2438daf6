use async_trait::async_trait;

/// Fetch direction and row budget for a [`Window`].
///
/// `Backward(n)` selects the last `n` rows of the window ending at the
/// anchor; the rows still come back in query order, not reversed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Take {
    Forward(u64),
    Backward(u64),
}

/// Slice directives merged into the caller's query by a store adapter.
///
/// `anchor` locates the row a cursor points at. Anchored windows are
/// inclusive of that row, so paginators pass `skip = 1` whenever the anchor
/// itself must not reappear in the slice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Window<K> {
    pub anchor: Option<K>,
    pub skip: u64,
    pub take: Take,
}

impl<K> Window<K> {
    pub fn forward(take: u64) -> Self {
        Self {
            anchor: None,
            skip: 0,
            take: Take::Forward(take),
        }
    }

    pub fn backward(take: u64) -> Self {
        Self {
            anchor: None,
            skip: 0,
            take: Take::Backward(take),
        }
    }

    #[must_use]
    pub fn anchored(mut self, key: K) -> Self {
        self.anchor = Some(key);
        self
    }

    #[must_use]
    pub fn skip(mut self, n: u64) -> Self {
        self.skip = n;
        self
    }
}

/// A store model capable of serving paginated reads.
///
/// `fetch` runs the caller's full query (filter, ordering, selection) with
/// the window merged in. `exists` is the auxiliary probe: the same window,
/// but with the caller's selection and ordering reset, since a probe only
/// answers "does a row exist here". `count` totals the rows matching the
/// query, also on the reset form.
///
/// Implementations must order rows by a stable, strictly ordered key so
/// that anchored windows are unambiguous.
#[async_trait]
pub trait Paginatable {
    type Row: Send;
    type Key: Clone + Send + Sync;
    type Error: Send;

    async fn fetch(&self, window: Window<Self::Key>) -> Result<Vec<Self::Row>, Self::Error>;

    async fn exists(&self, window: Window<Self::Key>) -> Result<bool, Self::Error>;

    async fn count(&self) -> Result<u64, Self::Error>;
}
