//! Push-based level source: recompute-on-configure with subscriber callbacks.
//!
//! The deployed rig exposed the level builder as a reactive node whose
//! property setters broadcast a recomputed array through a runtime-wide
//! event. Here that becomes an explicit, instance-scoped interface: a
//! [`LevelSource`] holds the current [`LevelSpec`] and array, and
//! [`configure`](LevelSource::configure) validates, recomputes and emits to
//! every subscriber before returning. There is no asynchronous gap and no
//! back-pressure; a subscriber attaching later sees the current snapshot
//! plus future updates, never a replay.

use crate::lateralize::build_level_array;
use crate::types::{LevelSpec, ParamError};

/// Handle returned by [`LevelSource::subscribe`], used to detach.
pub type SubscriberId = u64;

type Callback = Box<dyn FnMut(&[f64])>;

pub struct LevelSource {
    spec: LevelSpec,
    current: Vec<f64>,
    next_id: SubscriberId,
    subscribers: Vec<(SubscriberId, Callback)>,
}

impl LevelSource {
    /// Build a source with its initial array computed from `spec`.
    pub fn new(spec: LevelSpec) -> Result<Self, ParamError> {
        let current = build_level_array(&spec)?;
        Ok(Self {
            spec,
            current,
            next_id: 0,
            subscribers: Vec::new(),
        })
    }

    /// The most recently computed level array.
    pub fn current(&self) -> &[f64] {
        &self.current
    }

    pub fn spec(&self) -> &LevelSpec {
        &self.spec
    }

    /// Attach a consumer. The callback is invoked with the current array
    /// before this returns, then once per subsequent successful
    /// [`configure`](Self::configure).
    pub fn subscribe<F>(&mut self, mut callback: F) -> SubscriberId
    where
        F: FnMut(&[f64]) + 'static,
    {
        callback(&self.current);
        let id = self.next_id;
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Detach a consumer; emissions stop for that consumer only. Returns
    /// whether the id was attached.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Replace the parameters, recompute, and emit the new array to every
    /// subscriber before returning. On error the previous spec and array
    /// are kept and nothing is emitted.
    pub fn configure(&mut self, spec: LevelSpec) -> Result<(), ParamError> {
        let levels = build_level_array(&spec)?;
        self.spec = spec;
        self.current = levels;
        for (_, callback) in &mut self.subscribers {
            callback(&self.current);
        }
        Ok(())
    }
}
