//! Tick broadcast owned by presentation roots.
//!
//! The hub is bookkeeping only: it records which component host listens on which root, in
//! registration order. The [`Scene`](crate::Scene) walks the listeners when a tick is
//! dispatched and runs each component's motion step.

use crate::foundation::core::NodeId;
use serde_json::Value;

/// One timeline sample, decoded from a tick event's detail payload.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimelineTick {
    /// Elapsed presentation time in seconds.
    pub time: f64,
}

impl TimelineTick {
    /// Tick at `time` seconds.
    pub fn at(time: f64) -> Self {
        Self { time }
    }

    /// Decode an event detail. Anything without a finite numeric `time` is not a tick.
    pub fn from_detail(detail: &Value) -> Option<Self> {
        let tick: Self = serde_json::from_value(detail.clone()).ok()?;
        tick.time.is_finite().then_some(tick)
    }

    /// Event detail for this tick.
    pub fn to_detail(self) -> Value {
        serde_json::json!({ "time": self.time })
    }
}

/// Handle identifying one subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// A live listener registration: `host` listens on `root`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription {
    /// Handle to pass to [`TimelineHub::unsubscribe`].
    pub id: SubscriptionId,
    /// Presentation root broadcasting the ticks.
    pub root: NodeId,
    /// Component host receiving them.
    pub host: NodeId,
}

/// Listener table for every presentation root in a document.
#[derive(Debug, Default)]
pub struct TimelineHub {
    next: u64,
    subs: Vec<Subscription>,
}

impl TimelineHub {
    /// Empty hub.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `host` as a listener on `root`.
    pub fn subscribe(&mut self, root: NodeId, host: NodeId) -> Subscription {
        let sub = Subscription {
            id: SubscriptionId(self.next),
            root,
            host,
        };
        self.next += 1;
        self.subs.push(sub);
        tracing::trace!(%root, %host, "subscribe");
        sub
    }

    /// Remove a subscription. Returns `false` when it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let Some(pos) = self.subs.iter().position(|s| s.id == id) else {
            return false;
        };
        let sub = self.subs.remove(pos);
        tracing::trace!(root = %sub.root, host = %sub.host, "unsubscribe");
        true
    }

    /// Listeners on `root`, in registration order.
    pub fn listeners(&self, root: NodeId) -> Vec<Subscription> {
        self.subs.iter().filter(|s| s.root == root).copied().collect()
    }

    /// Return `true` while `id` is registered.
    pub fn is_active(&self, id: SubscriptionId) -> bool {
        self.subs.iter().any(|s| s.id == id)
    }

    /// Number of live subscriptions across all roots.
    pub fn active_count(&self) -> usize {
        self.subs.len()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/hub.rs"]
mod tests;
