//! Engine actor: aggregates field edits into committed query snapshots
//!
//! All mutable state lives on one task. Field edits arrive as raw strings
//! (the engine is the sole interpreter); debounced fields settle through
//! their [`Debouncer`]s, immediate fields commit right away. Every commit
//! publishes one snapshot, schedules one deferred persist and dispatches
//! one fetch. Responses from superseded fetches are dropped by generation.

use sift_core::{DEFAULT_PAGE_SIZE, FilterQuery, Paginator, Product, SortKey, execute};
use sift_sources::ProductProvider;
use sift_storage::FilterStore;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::debounce::{DEFAULT_DEBOUNCE, Debouncer};
use crate::persist::{PersistMode, PersistScheduler};
use crate::snapshot::{EngineSnapshot, PageView};

/// The five editable filter fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Brand,
    Category,
    MaxPrice,
    MaxRating,
    Sort,
}

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub debounce: Duration,
    pub page_size: usize,
    pub persist: PersistMode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            page_size: DEFAULT_PAGE_SIZE,
            persist: PersistMode::default(),
        }
    }
}

enum Command {
    SetField(FilterField, String),
    NextPage,
    PreviousPage,
    Shutdown,
}

struct FetchOutcome {
    generation: u64,
    result: anyhow::Result<Vec<Product>>,
}

/// Handle to a running engine. Dropping it stops the actor; pending
/// debounce timers and deferred writes die with it.
pub struct EngineHandle {
    cmd_tx: mpsc::UnboundedSender<Command>,
    snapshot_rx: watch::Receiver<EngineSnapshot>,
    task: JoinHandle<()>,
}

impl EngineHandle {
    /// Report a raw field edit, as a UI control would.
    pub fn set_field(&self, field: FilterField, value: impl Into<String>) {
        let _ = self.cmd_tx.send(Command::SetField(field, value.into()));
    }

    pub fn next_page(&self) {
        let _ = self.cmd_tx.send(Command::NextPage);
    }

    pub fn previous_page(&self) {
        let _ = self.cmd_tx.send(Command::PreviousPage);
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> EngineSnapshot {
        self.snapshot_rx.borrow().clone()
    }

    /// Watch stream of snapshots; intermediate values may be skipped.
    pub fn subscribe(&self) -> watch::Receiver<EngineSnapshot> {
        self.snapshot_rx.clone()
    }

    /// Stop the actor and wait for it to wind down.
    pub async fn shutdown(self) {
        let _ = self.cmd_tx.send(Command::Shutdown);
        let _ = self.task.await;
    }
}

pub struct FilterEngine;

impl FilterEngine {
    /// Spawn the engine actor. Seeds the fields from the persisted query
    /// when one loads cleanly, then dispatches the initial fetch.
    ///
    /// Must be called within a tokio runtime.
    pub fn spawn(
        provider: Arc<dyn ProductProvider>,
        store: Arc<FilterStore>,
        config: EngineConfig,
    ) -> EngineHandle {
        let seeded = store.load().unwrap_or_default();
        let paginator = Paginator::new(config.page_size);

        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (fetch_tx, fetch_rx) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshot_rx) = watch::channel(EngineSnapshot {
            query: seeded.clone(),
            loading: true,
            error: None,
            page: PageView::of(&paginator),
        });

        let actor = EngineTask {
            provider,
            persist: PersistScheduler::new(store, config.persist),
            fields: Fields::from_query(&seeded),
            query: seeded,
            paginator,
            brand_debounce: Debouncer::new(config.debounce),
            price_debounce: Debouncer::new(config.debounce),
            loading: true,
            error: None,
            generation: 0,
            dirty: false,
            fetch_tx,
            snapshot_tx,
        };
        let task = tokio::spawn(actor.run(cmd_rx, fetch_rx));

        EngineHandle {
            cmd_tx,
            snapshot_rx,
            task,
        }
    }
}

/// Working values for the five fields. For debounced fields this holds
/// the last settled value, not the one still in flight.
struct Fields {
    brand: String,
    category: String,
    max_price: String,
    max_rating: String,
    sort: SortKey,
}

impl Fields {
    fn from_query(query: &FilterQuery) -> Self {
        Self {
            brand: query.brand.clone(),
            category: query.category.clone(),
            max_price: query.max_price.clone(),
            max_rating: query.max_rating.clone(),
            sort: query.sort,
        }
    }

    fn compose(&self) -> FilterQuery {
        FilterQuery {
            brand: self.brand.clone(),
            category: self.category.clone(),
            max_price: self.max_price.clone(),
            max_rating: self.max_rating.clone(),
            sort: self.sort,
        }
    }
}

struct EngineTask {
    provider: Arc<dyn ProductProvider>,
    persist: PersistScheduler,
    fields: Fields,
    /// Last committed snapshot's query.
    query: FilterQuery,
    paginator: Paginator<Product>,
    brand_debounce: Debouncer<String>,
    price_debounce: Debouncer<String>,
    loading: bool,
    error: Option<String>,
    generation: u64,
    dirty: bool,
    fetch_tx: mpsc::UnboundedSender<FetchOutcome>,
    snapshot_tx: watch::Sender<EngineSnapshot>,
}

impl EngineTask {
    async fn run(
        mut self,
        mut cmd_rx: mpsc::UnboundedReceiver<Command>,
        mut fetch_rx: mpsc::UnboundedReceiver<FetchOutcome>,
    ) {
        // Initial cycle for the seeded query.
        self.persist.schedule(self.query.clone());
        self.dispatch_fetch();
        self.publish();

        loop {
            tokio::select! {
                cmd = cmd_rx.recv() => {
                    let Some(cmd) = cmd else { break };
                    if self.handle_command(cmd) {
                        break;
                    }
                    if self.drain_ready(&mut cmd_rx) {
                        break;
                    }
                    self.maybe_commit();
                }
                value = self.brand_debounce.settled() => {
                    self.fields.brand = value;
                    self.dirty = true;
                    if self.drain_ready(&mut cmd_rx) {
                        break;
                    }
                    self.maybe_commit();
                }
                value = self.price_debounce.settled() => {
                    self.fields.max_price = value;
                    self.dirty = true;
                    if self.drain_ready(&mut cmd_rx) {
                        break;
                    }
                    self.maybe_commit();
                }
                outcome = fetch_rx.recv() => {
                    if let Some(outcome) = outcome {
                        self.handle_fetch(outcome);
                    }
                }
            }
        }
    }

    /// Returns true on shutdown.
    fn handle_command(&mut self, cmd: Command) -> bool {
        match cmd {
            Command::SetField(field, value) => {
                self.apply_edit(field, value);
                false
            }
            Command::NextPage => {
                if self.paginator.next() {
                    self.publish();
                }
                false
            }
            Command::PreviousPage => {
                if self.paginator.previous() {
                    self.publish();
                }
                false
            }
            Command::Shutdown => true,
        }
    }

    fn apply_edit(&mut self, field: FilterField, value: String) {
        match field {
            FilterField::Brand => self.brand_debounce.push(value),
            FilterField::MaxPrice => self.price_debounce.push(value),
            FilterField::Category => {
                self.fields.category = value;
                self.dirty = true;
            }
            FilterField::MaxRating => {
                self.fields.max_rating = value;
                self.dirty = true;
            }
            FilterField::Sort => {
                // Raw strings from controls; anything unknown means "no sort".
                self.fields.sort = value.parse().unwrap_or_default();
                self.dirty = true;
            }
        }
    }

    /// Absorb everything that is already ready (queued commands, expired
    /// debouncers) so edits landing in the same tick produce one commit.
    /// Returns true on shutdown.
    fn drain_ready(&mut self, cmd_rx: &mut mpsc::UnboundedReceiver<Command>) -> bool {
        while let Ok(cmd) = cmd_rx.try_recv() {
            if self.handle_command(cmd) {
                return true;
            }
        }
        let now = Instant::now();
        if let Some(value) = self.brand_debounce.try_settle(now) {
            self.fields.brand = value;
            self.dirty = true;
        }
        if let Some(value) = self.price_debounce.try_settle(now) {
            self.fields.max_price = value;
            self.dirty = true;
        }
        false
    }

    fn maybe_commit(&mut self) {
        if !self.dirty {
            return;
        }
        self.dirty = false;
        let query = self.fields.compose();
        if query == self.query {
            return;
        }
        tracing::debug!(?query, "committing filter snapshot");
        self.query = query;
        self.persist.schedule(self.query.clone());
        self.dispatch_fetch();
        self.publish();
    }

    fn dispatch_fetch(&mut self) {
        self.generation += 1;
        let generation = self.generation;
        self.loading = true;
        let provider = self.provider.clone();
        let query = self.query.clone();
        let tx = self.fetch_tx.clone();
        tokio::spawn(async move {
            let result = provider.fetch(&query).await;
            // Post-disposal the receiver is gone and the result is dropped.
            let _ = tx.send(FetchOutcome { generation, result });
        });
    }

    fn handle_fetch(&mut self, outcome: FetchOutcome) {
        if outcome.generation != self.generation {
            tracing::debug!(
                generation = outcome.generation,
                latest = self.generation,
                "dropping stale fetch response"
            );
            return;
        }
        self.loading = false;
        match outcome.result {
            Ok(products) => {
                self.error = None;
                let results = execute(&products, &self.query);
                self.paginator.set_items(results);
            }
            Err(err) => {
                // Prior result set stays on display.
                self.error = Some(format!("Error fetching products: {err}"));
            }
        }
        self.publish();
    }

    fn publish(&self) {
        self.snapshot_tx.send_replace(EngineSnapshot {
            query: self.query.clone(),
            loading: self.loading,
            error: self.error.clone(),
            page: PageView::of(&self.paginator),
        });
    }
}
