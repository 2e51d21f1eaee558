//! Recording doubles for the mapping-library seam.
//!
//! [`RecordingLibrary`] and [`RecordingMap`] implement the traits in
//! [`layer`](crate::layer) and append every call to a shared event log, so
//! tests can assert both what the page wiring passed and the order it made
//! its calls in.

use crate::clustering::Bunch;
use crate::layer::{ClusterLayer, ContentFetcher, MapHandle, MapLibrary};
use crate::newsitem::ItemId;
use anyhow::{Result, bail};
use std::cell::RefCell;
use std::rc::Rc;

/// One observed call on the seam.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// `MapLibrary::content_fetcher` ran
    FetcherConstructed {
        /// Ids the fetcher was bound to
        ids: Vec<ItemId>,
    },
    /// `MapLibrary::cluster_layer` ran
    LayerConstructed {
        /// Name given to the layer
        name: String,
        /// Options passed through, if any
        options: Option<serde_json::Value>,
    },
    /// `ClusterLayer::add_bunches` ran
    BunchesAdded {
        /// How many bunches were seeded
        count: usize,
    },
    /// `MapHandle::add_layer` ran
    LayerRegistered {
        /// Name of the registered layer
        name: String,
    },
}

/// Shared, append-only call log.
pub type EventLog = Rc<RefCell<Vec<Event>>>;

struct RecordingFetcher {
    ids: Vec<ItemId>,
}

impl ContentFetcher for RecordingFetcher {
    fn ids(&self) -> &[ItemId] {
        &self.ids
    }
}

struct RecordingLayer {
    name: String,
    log: EventLog,
    seeded: Rc<RefCell<Vec<Bunch>>>,
    fail_on_add_bunches: bool,
    // A real layer keeps its fetcher alive for later content retrieval.
    #[allow(dead_code)]
    fetcher: Box<dyn ContentFetcher>,
}

impl ClusterLayer for RecordingLayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn add_bunches(&mut self, bunches: &[Bunch]) -> Result<()> {
        if self.fail_on_add_bunches {
            bail!("add_bunches failed (test double)");
        }
        self.log.borrow_mut().push(Event::BunchesAdded {
            count: bunches.len(),
        });
        self.seeded.borrow_mut().extend_from_slice(bunches);
        Ok(())
    }
}

/// Recording [`MapLibrary`] double.
pub struct RecordingLibrary {
    log: EventLog,
    seeded: Rc<RefCell<Vec<Bunch>>>,
    fail_on_add_bunches: bool,
}

impl RecordingLibrary {
    /// A library whose constructed collaborators all succeed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            log: Rc::new(RefCell::new(Vec::new())),
            seeded: Rc::new(RefCell::new(Vec::new())),
            fail_on_add_bunches: false,
        }
    }

    /// A library whose layers fail on `add_bunches`.
    #[must_use]
    pub fn failing_on_add_bunches() -> Self {
        Self {
            fail_on_add_bunches: true,
            ..Self::new()
        }
    }

    /// The shared event log, for constructing a [`RecordingMap`] that
    /// records into the same sequence.
    #[must_use]
    pub fn log(&self) -> EventLog {
        Rc::clone(&self.log)
    }

    /// Snapshot of the recorded events, in call order.
    #[must_use]
    pub fn events(&self) -> Vec<Event> {
        self.log.borrow().clone()
    }

    /// Every bunch any constructed layer was seeded with.
    #[must_use]
    pub fn seeded_bunches(&self) -> Vec<Bunch> {
        self.seeded.borrow().clone()
    }
}

impl Default for RecordingLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl MapLibrary for RecordingLibrary {
    fn content_fetcher(
        &self,
        ids: Vec<ItemId>,
        _map: &dyn MapHandle,
    ) -> Result<Box<dyn ContentFetcher>> {
        self.log
            .borrow_mut()
            .push(Event::FetcherConstructed { ids: ids.clone() });
        Ok(Box::new(RecordingFetcher { ids }))
    }

    fn cluster_layer(
        &self,
        name: &str,
        options: Option<serde_json::Value>,
        fetcher: Box<dyn ContentFetcher>,
    ) -> Result<Box<dyn ClusterLayer>> {
        self.log.borrow_mut().push(Event::LayerConstructed {
            name: name.to_string(),
            options: options.clone(),
        });
        Ok(Box::new(RecordingLayer {
            name: name.to_string(),
            log: Rc::clone(&self.log),
            seeded: Rc::clone(&self.seeded),
            fail_on_add_bunches: self.fail_on_add_bunches,
            fetcher,
        }))
    }
}

/// Recording [`MapHandle`] double.
///
/// Owns the layers registered on it, like a real map would.
pub struct RecordingMap {
    log: EventLog,
    layers: Vec<Box<dyn ClusterLayer>>,
}

impl RecordingMap {
    /// A map that records into `log`.
    #[must_use]
    pub fn new(log: EventLog) -> Self {
        Self {
            log,
            layers: Vec::new(),
        }
    }

    /// Names of the registered layers, in registration order.
    #[must_use]
    pub fn layer_names(&self) -> Vec<String> {
        self.layers.iter().map(|l| l.name().to_string()).collect()
    }
}

impl MapHandle for RecordingMap {
    fn add_layer(&mut self, layer: Box<dyn ClusterLayer>) -> Result<()> {
        self.log.borrow_mut().push(Event::LayerRegistered {
            name: layer.name().to_string(),
        });
        self.layers.push(layer);
        Ok(())
    }
}
