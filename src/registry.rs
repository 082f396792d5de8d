//! Live recomputation bound to text sources.
//!
//! A [`SubscriptionRegistry`] is owned by the embedding application. Binding a
//! source runs the requested computation once straight away and again after
//! every change the source reports, handing each fresh result to the caller's
//! callback. The counters themselves know nothing about the registry.
//!
//! # Lifecycle
//!
//! ```text
//! new -> live / live_freq (bind) -> unbind -> dispose (or drop)
//! ```
//!
//! Sources are identified by `Rc` pointer identity. A source may carry one
//! metrics binding and one frequency binding at the same time.

use crate::errors::{Result, TextStatsError};
use crate::frequency::analyzer::FrequencyAnalyzer;
use crate::metrics::MetricsCalculator;
use crate::source::{ChangeHandler, SubscriptionHandle, TextSource};
use crate::types::{resolve_configuration, ConfigOverrides, FrequencyResult, MetricsResult};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// What a binding recomputes on change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingKind {
    /// Paragraph / sentence / word / character counts
    Metrics,
    /// Top-K word frequencies
    Frequencies,
}

struct Binding {
    source: Rc<dyn TextSource>,
    handle: SubscriptionHandle,
    kind: BindingKind,
}

/// Address of the source behind an `Rc`, used as its identity.
fn source_id<S: ?Sized>(source: &Rc<S>) -> usize {
    Rc::as_ptr(source) as *const () as usize
}

/// Tracks which sources have live counting bound to them.
#[derive(Default)]
pub struct SubscriptionRegistry {
    bindings: Vec<Binding>,
}

impl SubscriptionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Recount `source` now and after every change.
    ///
    /// If the callback edits `source` itself, it is called again with the
    /// edited text once it returns, so the last result always matches the
    /// current text. Such a callback has to stop editing at some point.
    ///
    /// Fails with [`TextStatsError::AlreadyBound`] if `source` already has a
    /// metrics binding in this registry.
    pub fn live<S, F>(
        &mut self,
        source: &Rc<S>,
        mut callback: F,
        overrides: Option<&ConfigOverrides>,
    ) -> Result<()>
    where
        S: TextSource + 'static,
        F: FnMut(MetricsResult) + 'static,
    {
        let calculator = MetricsCalculator::with_config(resolve_configuration(overrides));
        self.bind(source, BindingKind::Metrics, move |src: &S| {
            callback(calculator.count(src))
        })
    }

    /// Re-rank word frequencies of `source` now and after every change.
    ///
    /// The callback receives `None` whenever the source holds no words.
    pub fn live_freq<S, F>(
        &mut self,
        source: &Rc<S>,
        mut callback: F,
        overrides: Option<&ConfigOverrides>,
    ) -> Result<()>
    where
        S: TextSource + 'static,
        F: FnMut(Option<FrequencyResult>) + 'static,
    {
        let analyzer = FrequencyAnalyzer::with_config(resolve_configuration(overrides));
        self.bind(source, BindingKind::Frequencies, move |src: &S| {
            callback(analyzer.freq(src))
        })
    }

    /// Count `source` once without binding anything
    pub fn once<S, F>(&self, source: &S, callback: F, overrides: Option<&ConfigOverrides>)
    where
        S: TextSource + ?Sized,
        F: FnOnce(MetricsResult),
    {
        callback(MetricsCalculator::with_config(resolve_configuration(overrides)).count(source));
    }

    /// Rank word frequencies of `source` once without binding anything
    pub fn once_freq<S, F>(&self, source: &S, callback: F, overrides: Option<&ConfigOverrides>)
    where
        S: TextSource + ?Sized,
        F: FnOnce(Option<FrequencyResult>),
    {
        callback(FrequencyAnalyzer::with_config(resolve_configuration(overrides)).freq(source));
    }

    fn bind<S, F>(&mut self, source: &Rc<S>, kind: BindingKind, run: F) -> Result<()>
    where
        S: TextSource + 'static,
        F: FnMut(&S) + 'static,
    {
        let id = source_id(source);
        if self
            .bindings
            .iter()
            .any(|b| b.kind == kind && source_id(&b.source) == id)
        {
            return Err(TextStatsError::already_bound(id));
        }

        let run = Rc::new(RefCell::new(run));
        let pending = Rc::new(Cell::new(false));
        let weak = Rc::downgrade(source);
        let handler: ChangeHandler = Rc::new(move || {
            let Some(source) = weak.upgrade() else {
                return;
            };
            // A change raised from inside the callback is replayed once it returns.
            let Ok(mut guard) = run.try_borrow_mut() else {
                pending.set(true);
                return;
            };
            loop {
                pending.set(false);
                (*guard)(&*source);
                if !pending.get() {
                    break;
                }
            }
        });

        let handle = source.subscribe(Rc::clone(&handler));
        handler();
        let source: Rc<dyn TextSource> = Rc::clone(source) as Rc<dyn TextSource>;
        self.bindings.push(Binding {
            source,
            handle,
            kind,
        });

        trace_event!(source = id, kind = ?kind, "bound source");
        Ok(())
    }

    /// Detach every binding of `source`.
    ///
    /// Fails with [`TextStatsError::NotBound`] if `source` has none.
    pub fn unbind<S: ?Sized>(&mut self, source: &Rc<S>) -> Result<()> {
        let id = source_id(source);
        let before = self.bindings.len();
        self.bindings.retain(|b| {
            if source_id(&b.source) != id {
                return true;
            }
            b.source.unsubscribe(b.handle);
            false
        });

        if self.bindings.len() == before {
            return Err(TextStatsError::not_bound(id));
        }
        trace_event!(source = id, removed = before - self.bindings.len(), "unbound source");
        Ok(())
    }

    /// Whether `source` has any binding in this registry
    pub fn is_bound<S: ?Sized>(&self, source: &Rc<S>) -> bool {
        let id = source_id(source);
        self.bindings.iter().any(|b| source_id(&b.source) == id)
    }

    /// Binding kinds currently attached to `source`
    pub fn kinds<S: ?Sized>(&self, source: &Rc<S>) -> Vec<BindingKind> {
        let id = source_id(source);
        self.bindings
            .iter()
            .filter(|b| source_id(&b.source) == id)
            .map(|b| b.kind)
            .collect()
    }

    /// Number of live bindings
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Detach every binding
    pub fn unbind_all(&mut self) {
        for binding in self.bindings.drain(..) {
            binding.source.unsubscribe(binding.handle);
        }
    }

    /// Detach every binding and drop the registry
    pub fn dispose(mut self) {
        self.unbind_all();
    }
}

impl Drop for SubscriptionRegistry {
    fn drop(&mut self) {
        self.unbind_all();
    }
}

impl fmt::Debug for SubscriptionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscriptionRegistry")
            .field(
                "bindings",
                &self
                    .bindings
                    .iter()
                    .map(|b| (source_id(&b.source), b.kind))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
