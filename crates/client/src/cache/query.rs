use std::collections::HashMap;
use std::future::Future;
use std::num::NonZeroUsize;
use std::sync::Arc;

use futures_util::future::{BoxFuture, FutureExt, Shared};
use lru::LruCache;
use tokio::sync::{watch, Mutex};

use gamehaven_core::cache::{Operation, QueryKey};
use gamehaven_core::catalog::{Game, GameFilter, NewGame};

use super::state::QueryState;
use crate::client::GameApi;
use crate::error::FetchError;

/// Entries kept per operation before the least recently used one is evicted.
pub const DEFAULT_CAPACITY: usize = 256;

type SharedFetch<T> = Shared<BoxFuture<'static, Result<T, FetchError>>>;

/// Picks the store of one operation out of the cache state.
type Selector<T> = fn(&mut CacheState) -> &mut Store<T>;

struct InFlight<T> {
    fetch_id: u64,
    fetch: SharedFetch<T>,
}

/// Resolved results and pending fetches of one operation.
struct Store<T> {
    entries: LruCache<QueryKey, T>,
    in_flight: HashMap<QueryKey, InFlight<T>>,
}

impl<T> Store<T> {
    fn new(capacity: NonZeroUsize) -> Self {
        Self {
            entries: LruCache::new(capacity),
            in_flight: HashMap::new(),
        }
    }

    /// Unregisters fetches that only the registry still holds. Dropping the
    /// last handle cancels the request. Returns the number removed.
    fn prune_abandoned(&mut self) -> usize {
        let before = self.in_flight.len();
        self.in_flight
            .retain(|_, pending| pending.fetch.strong_count().is_none_or(|n| n > 1));
        before - self.in_flight.len()
    }

    /// Drops every entry and forgets pending fetches. Returns the number of
    /// entries removed.
    fn clear(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        self.in_flight.clear();
        removed
    }
}

struct CacheState {
    lists: Store<Arc<Vec<Game>>>,
    games: Store<Option<Arc<Game>>>,
    next_fetch_id: u64,
}

struct Inner<A> {
    api: A,
    state: Mutex<CacheState>,
}

/// Keyed, deduplicating cache over a [`GameApi`].
///
/// Cloning is cheap and shares the cache.
pub struct GameQueryCache<A> {
    inner: Arc<Inner<A>>,
}

impl<A> Clone for GameQueryCache<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A: GameApi> GameQueryCache<A> {
    /// Creates a cache holding up to [`DEFAULT_CAPACITY`] entries per operation.
    pub fn new(api: A) -> Self {
        Self::with_capacity(api, DEFAULT_CAPACITY)
    }

    /// Creates a cache with LRU eviction after `max_entries` per operation.
    /// A capacity of 0 is treated as 1.
    pub fn with_capacity(api: A, max_entries: usize) -> Self {
        let capacity = NonZeroUsize::new(max_entries).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner: Arc::new(Inner {
                api,
                state: Mutex::new(CacheState {
                    lists: Store::new(capacity),
                    games: Store::new(capacity),
                    next_fetch_id: 0,
                }),
            }),
        }
    }

    #[cfg(test)]
    async fn in_flight_len(&self) -> usize {
        let state = self.inner.state.lock().await;
        state.lists.in_flight.len() + state.games.in_flight.len()
    }

    /// The wrapped API.
    pub fn api(&self) -> &A {
        &self.inner.api
    }

    /// Lists games, served from the cache when possible.
    pub async fn list_games(&self, filter: &GameFilter) -> Result<Arc<Vec<Game>>, FetchError> {
        let filter = filter.clone();
        self.fetch(QueryKey::list(&filter), |state| &mut state.lists, move |inner| {
            async move { inner.api.list_games(&filter).await.map(Arc::new) }.boxed()
        })
        .await
    }

    /// Gets a game, served from the cache when possible.
    ///
    /// A missing game is cached as `None`. Ids below 1 are never assigned, so
    /// they resolve to `None` without a request.
    pub async fn get_game(&self, id: i64) -> Result<Option<Arc<Game>>, FetchError> {
        if id <= 0 {
            return Ok(None);
        }

        self.fetch(QueryKey::game(id), |state| &mut state.games, move |inner| {
            async move { inner.api.get_game(id).await.map(|game| game.map(Arc::new)) }.boxed()
        })
        .await
    }

    /// Creates a game, then invalidates every cached list.
    pub async fn create_game(&self, game: &NewGame) -> Result<Game, FetchError> {
        let created = self.inner.api.create_game(game).await?;

        tracing::debug!(game_id = created.id, title = %created.title, "Created game");
        self.invalidate(Operation::ListGames).await;

        Ok(created)
    }

    /// Removes every entry of an operation, whatever its arguments.
    ///
    /// Fetches of that operation already in flight still resolve for their
    /// callers but are not written back.
    pub async fn invalidate(&self, operation: Operation) {
        let mut state = self.inner.state.lock().await;
        let removed = match operation {
            Operation::ListGames => state.lists.clear(),
            Operation::GetGame => state.games.clear(),
        };
        tracing::debug!(%operation, removed, "Invalidated queries");
    }

    /// Empties the cache and forgets every in-flight fetch.
    pub async fn clear(&self) {
        let mut state = self.inner.state.lock().await;
        state.lists.clear();
        state.games.clear();
        tracing::debug!("Cleared query cache");
    }

    /// Returns true if a resolved result is cached for the key.
    pub async fn contains(&self, key: &QueryKey) -> bool {
        let state = self.inner.state.lock().await;
        match key.operation() {
            Operation::ListGames => state.lists.entries.contains(key),
            Operation::GetGame => state.games.entries.contains(key),
        }
    }

    /// Cancels fetches whose every caller has gone away.
    async fn prune_abandoned(&self) {
        let mut state = self.inner.state.lock().await;
        let removed = state.lists.prune_abandoned() + state.games.prune_abandoned();
        if removed > 0 {
            tracing::trace!(removed, "Cancelled abandoned fetches");
        }
    }

    /// Loads a list in the background and publishes its state.
    ///
    /// The task stops as soon as every receiver is dropped and never
    /// publishes afterwards. If no other caller waits on the same request,
    /// the request is cancelled. Must be called within a tokio runtime.
    pub fn watch_games(&self, filter: GameFilter) -> watch::Receiver<QueryState<Arc<Vec<Game>>>> {
        let cache = self.clone();
        spawn_watch(self.clone(), async move { cache.list_games(&filter).await })
    }

    /// Loads a game in the background and publishes its state.
    ///
    /// Same lifecycle as [`watch_games`](Self::watch_games).
    pub fn watch_game(&self, id: i64) -> watch::Receiver<QueryState<Option<Arc<Game>>>> {
        let cache = self.clone();
        spawn_watch(self.clone(), async move { cache.get_game(id).await })
    }

    async fn fetch<T, L>(
        &self,
        key: QueryKey,
        select: Selector<T>,
        load: L,
    ) -> Result<T, FetchError>
    where
        T: Clone + Send + Sync + 'static,
        L: FnOnce(Arc<Inner<A>>) -> BoxFuture<'static, crate::Result<T>>,
    {
        let fetch = {
            let mut state = self.inner.state.lock().await;
            state.next_fetch_id += 1;
            let fetch_id = state.next_fetch_id;
            let store = select(&mut state);

            if let Some(value) = store.entries.get(&key) {
                tracing::trace!(%key, "Cache hit");
                return Ok(value.clone());
            }

            store.prune_abandoned();

            match store.in_flight.get(&key) {
                Some(pending) => {
                    tracing::trace!(%key, "Joining in-flight request");
                    pending.fetch.clone()
                }
                None => {
                    tracing::trace!(%key, "Cache miss");
                    let request = load(Arc::clone(&self.inner));
                    let inner = Arc::clone(&self.inner);
                    let fetch = write_back(inner, key.clone(), fetch_id, select, request)
                        .boxed()
                        .shared();
                    store.in_flight.insert(
                        key,
                        InFlight {
                            fetch_id,
                            fetch: fetch.clone(),
                        },
                    );
                    fetch
                }
            }
        };

        fetch.await
    }
}

/// Awaits the request, then caches its result if the fetch is still the one
/// registered for the key. A `clear` or `invalidate` in between unregisters it.
async fn write_back<A, T>(
    inner: Arc<Inner<A>>,
    key: QueryKey,
    fetch_id: u64,
    select: Selector<T>,
    request: BoxFuture<'static, crate::Result<T>>,
) -> Result<T, FetchError>
where
    T: Clone,
{
    let result = request.await.map_err(FetchError::from);

    let mut state = inner.state.lock().await;
    let store = select(&mut state);
    if store
        .in_flight
        .get(&key)
        .is_some_and(|pending| pending.fetch_id == fetch_id)
    {
        store.in_flight.remove(&key);
        match &result {
            Ok(value) => {
                store.entries.put(key, value.clone());
            }
            Err(err) => tracing::debug!(%key, error = %err, "Fetch failed"),
        }
    } else {
        tracing::trace!(%key, "Discarding result of a cleared fetch");
    }

    result
}

fn spawn_watch<A, T, F>(cache: GameQueryCache<A>, load: F) -> watch::Receiver<QueryState<T>>
where
    A: GameApi,
    T: Send + Sync + 'static,
    F: Future<Output = Result<T, FetchError>> + Send + 'static,
{
    let (tx, rx) = watch::channel(QueryState::Loading);

    tokio::spawn(async move {
        let abandoned = tokio::select! {
            _ = tx.closed() => true,
            result = load => {
                let _ = tx.send(QueryState::from(result));
                false
            }
        };

        // `load` is dropped by now, releasing its handle on the shared fetch.
        if abandoned {
            tracing::trace!("Watcher dropped before the fetch resolved");
            cache.prune_abandoned().await;
        }
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex as StdMutex;

    use async_trait::async_trait;
    use chrono::{Duration, TimeZone, Utc};
    use gamehaven_core::catalog::{filter_games, seed_games, sort_games};
    use tokio::sync::Notify;

    use crate::error::{ClientError, Result};

    /// Serves the seed catalog and counts requests.
    struct FakeApi {
        games: StdMutex<Vec<Game>>,
        list_calls: AtomicUsize,
        get_calls: AtomicUsize,
        failing: bool,
        gate: Option<Arc<Notify>>,
    }

    impl FakeApi {
        fn seeded() -> Self {
            let base = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
            let games = seed_games()
                .into_iter()
                .enumerate()
                .map(|(i, game)| game.into_game(i as i64 + 1, base + Duration::minutes(i as i64)))
                .collect();

            Self {
                games: StdMutex::new(games),
                list_calls: AtomicUsize::new(0),
                get_calls: AtomicUsize::new(0),
                failing: false,
                gate: None,
            }
        }

        fn failing() -> Self {
            Self {
                failing: true,
                ..Self::seeded()
            }
        }

        fn gated(gate: Arc<Notify>) -> Self {
            Self {
                gate: Some(gate),
                ..Self::seeded()
            }
        }

        fn list_calls(&self) -> usize {
            self.list_calls.load(Ordering::SeqCst)
        }

        fn get_calls(&self) -> usize {
            self.get_calls.load(Ordering::SeqCst)
        }

        async fn respond(&self) -> Result<()> {
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            tokio::task::yield_now().await;

            if self.failing {
                return Err(ClientError::ServerError {
                    status: 500,
                    message: r#"{"message":"Internal Server Error"}"#.to_string(),
                });
            }
            Ok(())
        }
    }

    #[async_trait]
    impl GameApi for FakeApi {
        async fn list_games(&self, filter: &GameFilter) -> Result<Vec<Game>> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            self.respond().await?;

            let games = self.games.lock().unwrap();
            let mut matched: Vec<Game> =
                filter_games(&games, filter).into_iter().cloned().collect();
            sort_games(&mut matched);
            Ok(matched)
        }

        async fn get_game(&self, id: i64) -> Result<Option<Game>> {
            self.get_calls.fetch_add(1, Ordering::SeqCst);
            self.respond().await?;

            let games = self.games.lock().unwrap();
            Ok(games.iter().find(|g| g.id == id).cloned())
        }

        async fn create_game(&self, game: &NewGame) -> Result<Game> {
            self.respond().await?;

            let mut games = self.games.lock().unwrap();
            let created = game.clone().into_game(games.len() as i64 + 1, Utc::now());
            games.push(created.clone());
            Ok(created)
        }
    }

    fn snake() -> NewGame {
        NewGame::new("Snake", "Grow longer", "https://example.com/snake", "", "html5", "Arcade")
    }

    async fn wait_for_calls(api: &FakeApi, calls: usize) {
        while api.list_calls() < calls {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn test_concurrent_lists_share_one_request() {
        let cache = GameQueryCache::new(FakeApi::seeded());
        let filter = GameFilter::new();

        let (a, b) = tokio::join!(cache.list_games(&filter), cache.list_games(&filter));

        let (a, b) = (a.unwrap(), b.unwrap());
        assert_eq!(cache.api().list_calls(), 1);
        assert_eq!(a.len(), 7);
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a[0].title, "Minecraft Classic");
    }

    #[tokio::test]
    async fn test_concurrent_failures_share_one_error() {
        let cache = GameQueryCache::new(FakeApi::failing());
        let filter = GameFilter::new().with_category("Puzzle");

        let (a, b) = tokio::join!(cache.list_games(&filter), cache.list_games(&filter));

        assert_eq!(a.unwrap_err().inner().status(), Some(500));
        assert_eq!(b.unwrap_err().inner().status(), Some(500));
        assert_eq!(cache.api().list_calls(), 1);
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let cache = GameQueryCache::new(FakeApi::failing());
        let filter = GameFilter::new();

        assert!(cache.list_games(&filter).await.is_err());
        assert!(cache.list_games(&filter).await.is_err());

        assert_eq!(cache.api().list_calls(), 2);
        assert!(!cache.contains(&QueryKey::list(&filter)).await);
    }

    #[tokio::test]
    async fn test_results_are_cached_per_filter() {
        let cache = GameQueryCache::new(FakeApi::seeded());
        let puzzles = GameFilter::new().with_category("Puzzle");
        let search = GameFilter::new().with_search("tris");

        let first = cache.list_games(&puzzles).await.unwrap();
        cache.list_games(&puzzles).await.unwrap();
        cache.list_games(&search).await.unwrap();

        assert_eq!(first.len(), 3);
        assert_eq!(cache.api().list_calls(), 2);
        assert!(cache.contains(&QueryKey::list(&puzzles)).await);
        assert!(cache.contains(&QueryKey::list(&search)).await);
    }

    #[tokio::test]
    async fn test_missing_game_is_cached_as_none() {
        let cache = GameQueryCache::new(FakeApi::seeded());

        assert!(cache.get_game(99).await.unwrap().is_none());
        assert!(cache.get_game(99).await.unwrap().is_none());

        assert_eq!(cache.api().get_calls(), 1);
        assert!(cache.contains(&QueryKey::game(99)).await);
    }

    #[tokio::test]
    async fn test_non_positive_ids_skip_the_request() {
        let cache = GameQueryCache::new(FakeApi::seeded());

        assert!(cache.get_game(0).await.unwrap().is_none());
        assert!(cache.get_game(-4).await.unwrap().is_none());

        assert_eq!(cache.api().get_calls(), 0);
    }

    #[tokio::test]
    async fn test_create_invalidates_lists_only() {
        let cache = GameQueryCache::new(FakeApi::seeded());
        let all = GameFilter::new();
        let arcade = GameFilter::new().with_category("Arcade");

        cache.list_games(&all).await.unwrap();
        cache.list_games(&arcade).await.unwrap();
        cache.get_game(1).await.unwrap();

        let created = cache.create_game(&snake()).await.unwrap();

        assert!(!cache.contains(&QueryKey::list(&all)).await);
        assert!(!cache.contains(&QueryKey::list(&arcade)).await);
        assert!(cache.contains(&QueryKey::game(1)).await);

        let refreshed = cache.list_games(&arcade).await.unwrap();
        assert!(refreshed.iter().any(|g| g.id == created.id));
        assert_eq!(cache.api().list_calls(), 3);

        cache.get_game(1).await.unwrap();
        assert_eq!(cache.api().get_calls(), 1);
    }

    #[tokio::test]
    async fn test_invalidate_by_operation() {
        let cache = GameQueryCache::new(FakeApi::seeded());
        cache.list_games(&GameFilter::new()).await.unwrap();
        cache.get_game(2).await.unwrap();

        cache.invalidate(Operation::GetGame).await;

        assert!(!cache.contains(&QueryKey::game(2)).await);
        assert!(cache.contains(&QueryKey::list(&GameFilter::new())).await);
    }

    #[tokio::test]
    async fn test_clear_discards_in_flight_result() {
        let gate = Arc::new(Notify::new());
        let cache = GameQueryCache::new(FakeApi::gated(gate.clone()));
        let filter = GameFilter::new();

        let pending = tokio::spawn({
            let cache = cache.clone();
            let filter = filter.clone();
            async move { cache.list_games(&filter).await }
        });
        wait_for_calls(cache.api(), 1).await;

        cache.clear().await;
        gate.notify_one();

        let games = pending.await.unwrap().unwrap();
        assert_eq!(games.len(), 7);
        assert!(!cache.contains(&QueryKey::list(&filter)).await);
    }

    #[tokio::test]
    async fn test_lru_eviction() {
        let cache = GameQueryCache::with_capacity(FakeApi::seeded(), 2);
        let a = GameFilter::new().with_category("Puzzle");
        let b = GameFilter::new().with_category("Arcade");
        let c = GameFilter::new().with_category("Action");

        cache.list_games(&a).await.unwrap();
        cache.list_games(&b).await.unwrap();
        cache.list_games(&c).await.unwrap();

        assert!(!cache.contains(&QueryKey::list(&a)).await);
        assert!(cache.contains(&QueryKey::list(&c)).await);
    }

    #[tokio::test]
    async fn test_watch_publishes_ready() {
        let cache = GameQueryCache::new(FakeApi::seeded());

        let mut rx = cache.watch_games(GameFilter::new().with_search("cookie"));
        assert!(rx.borrow().is_loading());

        rx.changed().await.unwrap();
        let state = rx.borrow().clone();
        let games = state.data().unwrap();
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].title, "Cookie Clicker");
    }

    #[tokio::test]
    async fn test_watch_publishes_failure() {
        let cache = GameQueryCache::new(FakeApi::failing());

        let mut rx = cache.watch_game(3);
        rx.changed().await.unwrap();

        assert!(rx.borrow().error().is_some());
    }

    #[tokio::test]
    async fn test_dropped_watcher_keeps_fetch_shared_with_other_caller() {
        let gate = Arc::new(Notify::new());
        let cache = GameQueryCache::new(FakeApi::gated(gate.clone()));
        let filter = GameFilter::new();

        let rx = cache.watch_games(filter.clone());
        wait_for_calls(cache.api(), 1).await;
        let pending = tokio::spawn({
            let cache = cache.clone();
            let filter = filter.clone();
            async move { cache.list_games(&filter).await }
        });
        for _ in 0..5 {
            tokio::task::yield_now().await;
        }
        drop(rx);
        for _ in 0..5 {
            tokio::task::yield_now().await;
        }

        gate.notify_one();
        let games = pending.await.unwrap().unwrap();

        assert_eq!(games.len(), 7);
        assert_eq!(cache.api().list_calls(), 1);
        assert!(cache.contains(&QueryKey::list(&filter)).await);
    }

    #[tokio::test]
    async fn test_dropped_watchers_cancel_their_fetches() {
        let gate = Arc::new(Notify::new());
        let cache = GameQueryCache::with_capacity(FakeApi::gated(gate), 2);

        for id in 1..=200 {
            let rx = cache.watch_game(id);
            while cache.api().get_calls() < id as usize {
                tokio::task::yield_now().await;
            }
            drop(rx);
        }

        let drained = tokio::time::timeout(std::time::Duration::from_secs(5), async {
            while cache.in_flight_len().await > 0 {
                tokio::task::yield_now().await;
            }
        })
        .await;

        assert!(drained.is_ok());
        assert_eq!(cache.api().get_calls(), 200);
    }

    #[tokio::test]
    async fn test_abandoned_fetch_is_retried_by_next_caller() {
        let gate = Arc::new(Notify::new());
        let cache = GameQueryCache::new(FakeApi::gated(gate.clone()));

        let rx = cache.watch_game(4);
        while cache.api().get_calls() < 1 {
            tokio::task::yield_now().await;
        }
        drop(rx);
        while cache.in_flight_len().await > 0 {
            tokio::task::yield_now().await;
        }

        gate.notify_one();
        let game = cache.get_game(4).await.unwrap();

        assert_eq!(game.unwrap().title, "Retro Space Shooter");
        assert_eq!(cache.api().get_calls(), 2);
    }
}
