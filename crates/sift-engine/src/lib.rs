//! Filter-query engine for sift
//!
//! One actor task owns all mutable state: the five filter fields, the
//! per-field debouncers, the deferred persistence scheduler, the fetch
//! dispatcher and the paginator. Consumers talk to it through an
//! [`EngineHandle`] and observe it through a `watch` stream of immutable
//! [`EngineSnapshot`] values.

pub mod debounce;
pub mod engine;
pub mod persist;
pub mod snapshot;

pub use debounce::{DEFAULT_DEBOUNCE, Debouncer};
pub use engine::{EngineConfig, EngineHandle, FilterEngine, FilterField};
pub use persist::{PersistMode, PersistScheduler};
pub use snapshot::{EngineSnapshot, PageView};
