//! Readiness chain: linked pre-condition checks with short-circuit veto.
//!
//! Each [`ReadinessLink`] owns its successor, so a chain is finite and acyclic
//! by construction. Evaluation walks the links in order and stops at the first
//! failing check; later links are never evaluated.
//!
//! A veto is ordinary control flow. It is logged and reported as a value,
//! never raised as a panic.
//!
//! # Example
//!
//! ```rust
//! use percolator::config::ReadinessThresholds;
//! use percolator::device::Supplies;
//! use percolator::readiness::{CheckKind, ReadinessChain};
//!
//! let thresholds = ReadinessThresholds::default();
//!
//! let ready = ReadinessChain::standard(&Supplies::new(600, 400, true), &thresholds);
//! assert!(ready.handle());
//!
//! let dry = ReadinessChain::standard(&Supplies::new(300, 400, true), &thresholds);
//! let report = dry.inspect();
//! assert!(!report.is_ready());
//! assert_eq!(report.evaluated, vec![CheckKind::Water]);
//! ```

mod check;

pub use check::{Check, CheckKind, Veto};

use crate::config::ReadinessThresholds;
use crate::device::Supplies;
use std::fmt;
use tracing::{debug, warn};

/// One node of the chain: a check and an optional successor.
///
/// Walking, cloning, comparing and dropping all iterate over the successors,
/// so chain length is bounded by memory rather than by the stack.
pub struct ReadinessLink {
    check: Check,
    next: Option<Box<ReadinessLink>>,
}

impl ReadinessLink {
    pub fn new(check: Check) -> Self {
        Self { check, next: None }
    }

    /// Attach the link evaluated after this one passes.
    pub fn with_next(mut self, next: ReadinessLink) -> Self {
        self.next = Some(Box::new(next));
        self
    }

    pub fn check(&self) -> &Check {
        &self.check
    }

    pub fn successor(&self) -> Option<&ReadinessLink> {
        self.next.as_deref()
    }

    /// This link followed by every successor, in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = &ReadinessLink> {
        std::iter::successors(Some(self), |link| link.successor())
    }

    /// Evaluate this link and, if it passes, everything after it.
    pub fn handle(&self) -> bool {
        self.walk(&mut Vec::new()).is_ok()
    }

    fn walk(&self, evaluated: &mut Vec<CheckKind>) -> Result<(), Veto> {
        for link in self.iter() {
            evaluated.push(link.check.kind());

            if let Err(veto) = link.check.evaluate() {
                warn!(check = %veto.check, reason = %veto.reason, "readiness check vetoed");
                return Err(veto);
            }
        }
        Ok(())
    }
}

fn link_checks<I>(checks: I) -> Option<ReadinessLink>
where
    I: DoubleEndedIterator<Item = Check>,
{
    checks.rev().fold(None, |next: Option<ReadinessLink>, check| {
        let link = ReadinessLink::new(check);
        Some(match next {
            Some(next) => link.with_next(next),
            None => link,
        })
    })
}

impl Clone for ReadinessLink {
    fn clone(&self) -> Self {
        let checks: Vec<Check> = self.iter().map(|link| link.check).collect();
        link_checks(checks.into_iter()).unwrap_or_else(|| ReadinessLink::new(self.check))
    }
}

impl PartialEq for ReadinessLink {
    fn eq(&self, other: &Self) -> bool {
        let mut left = self.iter();
        let mut right = other.iter();
        loop {
            match (left.next(), right.next()) {
                (Some(a), Some(b)) if a.check == b.check => continue,
                (None, None) => return true,
                _ => return false,
            }
        }
    }
}

impl fmt::Debug for ReadinessLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter().map(|link| &link.check))
            .finish()
    }
}

impl Drop for ReadinessLink {
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut link) = next {
            next = link.next.take();
        }
    }
}

/// Outcome of walking a chain.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReadinessReport {
    /// Checks that ran, in order.
    pub evaluated: Vec<CheckKind>,
    /// The failing check, if any.
    pub veto: Option<Veto>,
}

impl ReadinessReport {
    pub fn is_ready(&self) -> bool {
        self.veto.is_none()
    }

    pub fn into_result(self) -> Result<(), Veto> {
        match self.veto {
            Some(veto) => Err(veto),
            None => Ok(()),
        }
    }
}

/// An ordered, possibly empty, sequence of readiness links.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReadinessChain {
    head: Option<ReadinessLink>,
}

impl ReadinessChain {
    /// An empty chain. It always approves.
    pub fn new() -> Self {
        Self { head: None }
    }

    /// Link the checks together in the order given.
    pub fn from_checks<I>(checks: I) -> Self
    where
        I: IntoIterator<Item = Check>,
        I::IntoIter: DoubleEndedIterator,
    {
        Self {
            head: link_checks(checks.into_iter()),
        }
    }

    /// Water, then beans, then cup.
    pub fn standard(supplies: &Supplies, thresholds: &ReadinessThresholds) -> Self {
        Self::from_checks([
            Check::Water {
                level: supplies.water,
                minimum: thresholds.water_min,
            },
            Check::Beans {
                level: supplies.beans,
                minimum: thresholds.beans_min,
            },
            Check::Cup {
                present: supplies.cup_present,
            },
        ])
    }

    pub fn head(&self) -> Option<&ReadinessLink> {
        self.head.as_ref()
    }

    pub fn len(&self) -> usize {
        self.head.as_ref().map_or(0, |head| head.iter().count())
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// `true` when every link passes (or there are none).
    pub fn handle(&self) -> bool {
        self.inspect().is_ready()
    }

    /// Walk the chain and report which checks ran and which one vetoed.
    pub fn inspect(&self) -> ReadinessReport {
        let mut report = ReadinessReport::default();
        if let Some(head) = &self.head {
            report.veto = head.walk(&mut report.evaluated).err();
        }
        debug!(
            evaluated = report.evaluated.len(),
            ready = report.is_ready(),
            "readiness chain evaluated"
        );
        report
    }
}
