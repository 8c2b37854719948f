//! Navigation policies
//!
//! A [`Policy`] decides, at compile time, what a wrapper does when
//! navigation fails and whether it accepts writes:
//!
//! | Policy | Navigation error | Writes |
//! |--------|------------------|--------|
//! | [`Strict`] | first fault recorded, later ones discarded | rejected |
//! | [`Permissive`] | swallowed | accepted |
//!
//! Either way navigation yields a null-wrapping child instead of failing.

use std::cell::OnceCell;
use std::fmt;
use tracing::{debug, trace};
use trunk_core::Fault;

/// Storage for the faults a wrapper keeps
pub trait FaultStore: Default {
    /// Offer a fault; returns `true` if it was kept
    fn offer(&self, fault: Fault) -> bool;

    /// The kept fault, if any
    fn first(&self) -> Option<&Fault>;
}

impl FaultStore for OnceCell<Fault> {
    fn offer(&self, fault: Fault) -> bool {
        self.set(fault).is_ok()
    }

    fn first(&self) -> Option<&Fault> {
        self.get()
    }
}

/// Permissive wrappers keep nothing
impl FaultStore for () {
    fn offer(&self, _fault: Fault) -> bool {
        false
    }

    fn first(&self) -> Option<&Fault> {
        None
    }
}

/// Behavior of a wrapper on navigation errors and writes
pub trait Policy: fmt::Debug + Copy + Default + 'static {
    /// Human-readable policy name, used in logs
    const NAME: &'static str;

    /// Whether `set` and `unset` are accepted
    const ALLOW_WRITE: bool;

    /// Where faults are kept
    type Faults: FaultStore;

    /// Handle a failed navigation step
    fn on_navigation_error(faults: &Self::Faults, fault: Fault);
}

/// Read-only policy that records the first navigation fault
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Strict;

impl Policy for Strict {
    const NAME: &'static str = "strict";
    const ALLOW_WRITE: bool = false;
    type Faults = OnceCell<Fault>;

    fn on_navigation_error(faults: &Self::Faults, fault: Fault) {
        match faults.first() {
            None => {
                debug!(target: "trunk::nav", fault = %fault, "Navigation fault recorded");
                faults.offer(fault);
            }
            Some(first) => {
                trace!(
                    target: "trunk::nav",
                    fault = %fault,
                    first = %first,
                    "Navigation fault discarded, first fault kept"
                );
            }
        }
    }
}

/// Writable policy that ignores navigation errors
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Permissive;

impl Policy for Permissive {
    const NAME: &'static str = "permissive";
    const ALLOW_WRITE: bool = true;
    type Faults = ();

    fn on_navigation_error(_faults: &Self::Faults, fault: Fault) {
        trace!(target: "trunk::nav", fault = %fault, "Navigation error ignored");
    }
}
