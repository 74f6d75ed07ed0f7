//! The shared, reloadable zone collection.
//!
//! Loads may overlap: each one takes a ticket from a generation counter when it starts,
//! and its result is committed only if no newer load has started in the meantime. Stale
//! results, successful or not, are dropped.

use crate::{LoadError, LoadOptions, ZoneCollection, load_zones};
use parking_lot::RwLock;
use std::sync::{
	Arc,
	atomic::{AtomicU64, Ordering},
};
use zonemap_core::DataLocation;

/// Identifies one load. Only the newest ticket may commit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

#[derive(Debug)]
pub enum LoadOutcome {
	/// The load was the newest one. On error an empty collection has been committed.
	Committed(Result<Arc<ZoneCollection>, LoadError>),
	/// A newer load started before this one finished; nothing was changed.
	Stale,
}

impl LoadOutcome {
	pub fn is_stale(&self) -> bool {
		matches!(self, LoadOutcome::Stale)
	}
}

/// The committed collection and how many commits produced it.
struct Committed {
	revision: u64,
	zones: Arc<ZoneCollection>,
}

struct LayerState {
	committed: RwLock<Committed>,
	generation: AtomicU64,
	options: LoadOptions,
}

/// Cloneable handle to the committed zone collection.
#[derive(Clone)]
pub struct ZoneLayer {
	state: Arc<LayerState>,
}

impl Default for ZoneLayer {
	fn default() -> Self {
		Self::new(LoadOptions::default())
	}
}

impl ZoneLayer {
	pub fn new(options: LoadOptions) -> Self {
		Self {
			state: Arc::new(LayerState {
				committed: RwLock::new(Committed {
					revision: 0,
					zones: Arc::new(ZoneCollection::default()),
				}),
				generation: AtomicU64::new(0),
				options,
			}),
		}
	}

	pub fn options(&self) -> &LoadOptions {
		&self.state.options
	}

	/// A snapshot of the committed collection. Empty until a load has committed.
	pub fn zones(&self) -> Arc<ZoneCollection> {
		self.state.committed.read().zones.clone()
	}

	/// The committed collection together with its revision, read under one lock. The
	/// revision counts commits, failed loads included.
	pub fn snapshot(&self) -> (u64, Arc<ZoneCollection>) {
		let committed = self.state.committed.read();
		(committed.revision, committed.zones.clone())
	}

	/// Loads `location` and commits the result if no newer load has started.
	pub async fn load(&self, location: &DataLocation) -> LoadOutcome {
		let ticket = self.begin_load();
		let result = load_zones(location, &self.state.options).await;
		self.commit(ticket, result)
	}

	/// Starts a load. Every ticket issued earlier becomes stale.
	pub fn begin_load(&self) -> LoadTicket {
		LoadTicket(self.state.generation.fetch_add(1, Ordering::SeqCst) + 1)
	}

	/// Commits the result of the load identified by `ticket`, unless it is stale.
	pub fn commit(&self, ticket: LoadTicket, result: Result<ZoneCollection, LoadError>) -> LoadOutcome {
		let mut committed = self.state.committed.write();
		if self.state.generation.load(Ordering::SeqCst) != ticket.0 {
			log::debug!("discarding result of stale load {}", ticket.0);
			return LoadOutcome::Stale;
		}

		committed.revision += 1;
		LoadOutcome::Committed(match result {
			Ok(collection) => {
				let collection = Arc::new(collection);
				committed.zones = collection.clone();
				Ok(collection)
			}
			Err(error) => {
				log::warn!("{error}");
				committed.zones = Arc::new(ZoneCollection::default());
				Err(error)
			}
		})
	}
}
