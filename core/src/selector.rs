//! Memoized selectors.
//!
//! A selector derives a [`Value`] from some state. [`Selector`] combines the results of several
//! input selectors, and only calls its combiner again when one of the inputs returned something
//! which isn't the [same](Value::same) as last time. Together with the structural sharing of the
//! update functions, this means derived values are only recomputed when the part of the state they
//! depend on has actually changed.
//!
//! The cache holds a single entry: the last inputs and the last result.
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex, MutexGuard, PoisonError,
};

use log::debug;

use crate::{metrics::increment, value::Value};

/// Something deriving a value from a state of type `S`.
pub trait Select<S: ?Sized>: Send + Sync {
    fn select(&self, state: &S) -> Value;
}

impl<S: ?Sized, F> Select<S> for F
where
    F: Fn(&S) -> Value + Send + Sync,
{
    fn select(&self, state: &S) -> Value {
        self(state)
    }
}

pub type BoxedSelect<S> = Box<dyn Select<S>>;

type Combiner = Box<dyn Fn(&[Value]) -> Value + Send + Sync>;

struct Memo {
    inputs: Vec<Value>,
    result: Value,
}

/// A memoized selector. See the module documentation.
pub struct Selector<S: ?Sized> {
    inputs: Vec<BoxedSelect<S>>,
    combiner: Combiner,
    memo: Mutex<Option<Memo>>,
    recomputations: AtomicUsize,
}

fn shallow_equal(inputs: &[Value], others: &[Value]) -> bool {
    inputs.len() == others.len() && inputs.iter().zip(others).all(|(i, o)| i.same(o))
}

impl<S: ?Sized> Selector<S> {
    pub fn new(
        inputs: Vec<BoxedSelect<S>>,
        combiner: impl Fn(&[Value]) -> Value + Send + Sync + 'static,
    ) -> Self {
        Selector {
            inputs,
            combiner: Box::new(combiner),
            memo: Mutex::new(None),
            recomputations: AtomicUsize::new(0),
        }
    }

    /// How many times the combiner has been called.
    pub fn recomputations(&self) -> usize {
        self.recomputations.load(Ordering::Relaxed)
    }

    pub fn reset_recomputations(&self) {
        self.recomputations.store(0, Ordering::Relaxed);
    }

    /// Drops the cached result, forcing the next selection to call the combiner.
    pub fn clear(&self) {
        *self.lock_memo() = None;
    }

    // The memo is always left in a consistent state, so a panic in another thread doesn't make it
    // unusable.
    fn lock_memo(&self) -> MutexGuard<'_, Option<Memo>> {
        self.memo.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<S: ?Sized> Select<S> for Selector<S> {
    fn select(&self, state: &S) -> Value {
        let inputs: Vec<Value> = self.inputs.iter().map(|input| input.select(state)).collect();

        if let Some(memo) = self.lock_memo().as_ref() {
            if shallow_equal(&memo.inputs, &inputs) {
                return memo.result.clone();
            }
        }

        // The lock isn't held while the combiner runs.
        let result = (self.combiner)(&inputs);
        let count = self.recomputations.fetch_add(1, Ordering::Relaxed) + 1;
        debug!("selector recomputed ({count} time(s) so far)");
        increment!("immupath::selector::recomputed");

        *self.lock_memo() = Some(Memo {
            inputs,
            result: result.clone(),
        });

        result
    }
}

/// Creates a selector calling `combiner` on the results of `inputs`.
///
/// ```
/// # use immupath_core::{path, read::get_at, selector::{create_selector, BoxedSelect, Select}, value::Value};
/// let inputs: Vec<BoxedSelect<Value>> = vec![
///     Box::new(|state: &Value| get_at(state, path!["price"])),
///     Box::new(|state: &Value| get_at(state, path!["quantity"])),
/// ];
/// let total = create_selector(inputs, |args| {
///     Value::from(args[0].as_f64().unwrap_or(0.0) * args[1].as_f64().unwrap_or(0.0))
/// });
///
/// let state = Value::object([("price", Value::from(2)), ("quantity", Value::from(3))]);
/// assert_eq!(total.select(&state), Value::from(6));
/// assert_eq!(total.select(&state), Value::from(6));
/// assert_eq!(total.recomputations(), 1);
/// ```
pub fn create_selector<S: ?Sized>(
    inputs: Vec<BoxedSelect<S>>,
    combiner: impl Fn(&[Value]) -> Value + Send + Sync + 'static,
) -> Selector<S> {
    Selector::new(inputs, combiner)
}

/// A selector building an object whose fields are computed by other selectors.
///
/// The resulting object is memoized as a whole: as long as every field selector returns the same
/// value as before, the very same object is returned.
pub struct StructuredSelector<S: ?Sized> {
    keys: Arc<[String]>,
    inner: Selector<S>,
}

impl<S: ?Sized> StructuredSelector<S> {
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn recomputations(&self) -> usize {
        self.inner.recomputations()
    }

    pub fn reset_recomputations(&self) {
        self.inner.reset_recomputations()
    }

    pub fn clear(&self) {
        self.inner.clear()
    }
}

impl<S: ?Sized> Select<S> for StructuredSelector<S> {
    fn select(&self, state: &S) -> Value {
        self.inner.select(state)
    }
}

/// Creates a [`StructuredSelector`] from `(field, selector)` pairs. Fields keep the given order.
pub fn create_structured_selector<S, K, I>(selectors: I) -> StructuredSelector<S>
where
    S: ?Sized,
    K: Into<String>,
    I: IntoIterator<Item = (K, BoxedSelect<S>)>,
{
    let (keys, inputs): (Vec<String>, Vec<BoxedSelect<S>>) = selectors
        .into_iter()
        .map(|(key, selector)| (key.into(), selector))
        .unzip();
    let keys: Arc<[String]> = keys.into();

    let combiner_keys = Arc::clone(&keys);
    let inner = Selector::new(inputs, move |values| {
        Value::object(combiner_keys.iter().cloned().zip(values.iter().cloned()))
    });

    StructuredSelector { keys, inner }
}
