//! Invariant checking for the application state machine.
//!
//! Invariants are properties that must hold in every reachable state, not
//! just in hand-picked scenarios. Property tests and fuzz targets run the
//! registry after every transition; a violation names the broken property
//! and what the model actually looked like.
//!
//! # Usage
//!
//! ```
//! use turnclock_app::{Model, update, Event};
//! use turnclock_core::Options;
//! use turnclock_harness::InvariantRegistry;
//!
//! let registry = InvariantRegistry::standard();
//! let model = update(&Model::new(Options::default()), Event::StartOrToggle).model;
//! registry.assert_all(&model, "after start");
//! ```

mod checks;

pub use checks::{OptionsShape, PhaseInBounds, SingleTurnHolder, StatusCoherence, TotalIsSum};
use turnclock_app::Model;

/// Invariant check result.
pub type InvariantResult = Result<(), Violation>;

/// Invariant violation with context.
#[derive(Debug, Clone)]
pub struct Violation {
    /// Name of the violated invariant.
    pub invariant: &'static str,
    /// Description of what went wrong.
    pub message: String,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.invariant, self.message)
    }
}

impl std::error::Error for Violation {}

/// A property that must hold for every reachable model.
pub trait Invariant: Send + Sync {
    /// Invariant name for error reporting.
    fn name(&self) -> &'static str;

    /// Check the invariant against one model.
    ///
    /// Returns `Ok(())` if the invariant holds, or a [`Violation`]
    /// describing what went wrong.
    fn check(&self, model: &Model) -> InvariantResult;
}

/// Registry of invariants to check.
///
/// Collects multiple invariants and runs them all against a model. Use
/// [`InvariantRegistry::standard()`] for the full set.
pub struct InvariantRegistry {
    invariants: Vec<Box<dyn Invariant>>,
}

impl Default for InvariantRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl InvariantRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { invariants: Vec::new() }
    }

    /// Create a registry with the standard model invariants.
    ///
    /// Includes:
    /// - [`SingleTurnHolder`]: exactly one turn holder while started
    /// - [`StatusCoherence`]: `started` agrees with `status`
    /// - [`PhaseInBounds`]: phase cursors stay inside the phase list
    /// - [`TotalIsSum`]: total time equals the sum of player clocks
    /// - [`OptionsShape`]: the options record keeps its structural promises
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.add(SingleTurnHolder);
        registry.add(StatusCoherence);
        registry.add(PhaseInBounds);
        registry.add(TotalIsSum);
        registry.add(OptionsShape);
        registry
    }

    /// Add an invariant to the registry.
    pub fn add<I: Invariant + 'static>(&mut self, invariant: I) {
        self.invariants.push(Box::new(invariant));
    }

    /// Check all invariants against the given model.
    ///
    /// Returns `Ok(())` if all invariants hold, or all violations found.
    pub fn check_all(&self, model: &Model) -> Result<(), Vec<Violation>> {
        let violations: Vec<_> =
            self.invariants.iter().filter_map(|inv| inv.check(model).err()).collect();

        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }

    /// Check all invariants, panicking on violation.
    ///
    /// Use this in tests where you want immediate failure with context.
    #[allow(clippy::panic, reason = "test harness reports violations by panicking")]
    pub fn assert_all(&self, model: &Model, context: &str) {
        if let Err(violations) = self.check_all(model) {
            let messages: Vec<_> = violations.iter().map(ToString::to_string).collect();
            panic!("invariant violation {context}:\n  {}", messages.join("\n  "));
        }
    }

    /// Number of registered invariants.
    pub fn len(&self) -> usize {
        self.invariants.len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.invariants.is_empty()
    }
}
