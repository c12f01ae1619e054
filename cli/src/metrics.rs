use std::{
    collections::HashMap,
    hash::BuildHasherDefault,
    sync::{atomic::Ordering, Arc, PoisonError, RwLock},
};

use log::warn;
use metrics::{
    atomics::AtomicU64, Counter, Gauge, Histogram, Key, KeyHasher, KeyName, Metadata,
    SharedString, Unit,
};

/// The store for recorded counters and their descriptions. The write lock is only taken when a
/// counter is first registered.
#[derive(Default)]
pub(super) struct Registry {
    counters: RwLock<HashMap<Key, Arc<AtomicU64>, BuildHasherDefault<KeyHasher>>>,
    descriptions: RwLock<HashMap<KeyName, SharedString>>,
}

/// A metrics recorder storing counters in a [`Registry`]. Only counters are emitted by immupath:
/// gauges and histograms are ignored.
pub(super) struct Recorder {
    inner: Arc<Registry>,
}

impl Recorder {
    /// Register a recorder as the global metrics recorder, and return its registry, or `None` if
    /// another recorder is already installed.
    pub(super) fn install() -> Option<Arc<Registry>> {
        let registry = Arc::<Registry>::default();
        let recorder = Recorder {
            inner: registry.clone(),
        };

        match metrics::set_global_recorder(recorder) {
            Ok(()) => Some(registry),
            Err(_) => {
                warn!("a metrics recorder is already installed, metrics won't be reported");
                None
            }
        }
    }
}

impl metrics::Recorder for Recorder {
    fn describe_counter(&self, key: KeyName, _unit: Option<Unit>, description: SharedString) {
        self.inner
            .descriptions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(key)
            .or_insert(description);
    }

    fn describe_gauge(&self, _key: KeyName, _unit: Option<Unit>, _description: SharedString) {}

    fn describe_histogram(&self, _key: KeyName, _unit: Option<Unit>, _description: SharedString) {}

    fn register_counter(&self, key: &Key, _metadata: &Metadata<'_>) -> Counter {
        if let Some(counter) = self
            .inner
            .counters
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
        {
            return Counter::from_arc(counter.clone());
        }

        let counter = self
            .inner
            .counters
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(key.clone())
            .or_insert_with(|| Arc::new(AtomicU64::new(0)))
            .clone();
        Counter::from_arc(counter)
    }

    fn register_gauge(&self, _key: &Key, _metadata: &Metadata<'_>) -> Gauge {
        Gauge::noop()
    }

    fn register_histogram(&self, _key: &Key, _metadata: &Metadata<'_>) -> Histogram {
        Histogram::noop()
    }
}

impl Registry {
    /// Print all the counters collected so far, with their description if available.
    pub(super) fn report(&self) {
        let descriptions = self
            .descriptions
            .read()
            .unwrap_or_else(PoisonError::into_inner);

        for (key, counter) in self
            .counters
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
        {
            let count = counter.load(Ordering::Relaxed);
            match descriptions.get(key.name()) {
                Some(description) => eprintln!("{}: {description}\n  {count}", key.name()),
                None => eprintln!("{}: {count}", key.name()),
            }
        }
    }
}
