//! Owns every guard in a level and ticks them together.

use glam::Vec2;
use hashbrown::HashMap;
use log::{debug, warn};
use serde::Serialize;
use thiserror::Error;

use crate::guard::Guard;
use crate::pose::Pose;
use crate::raycast::Raycaster;

/// Guard identifier with type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct GuardId(pub u32);

/// Errors raised by [`GuardRoster`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RosterError {
    /// Every identifier has been handed out once already.
    #[error("guard identifiers exhausted")]
    IdsExhausted,
}

/// A guard saw the target during a tick.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SightingEvent {
    /// The guard that saw the target.
    pub guard: GuardId,
    /// Where the target was.
    pub target: Vec2,
    /// Guard pose at the moment of detection.
    pub guard_pose: Pose,
}

/// Collection of guards keyed by [`GuardId`].
#[derive(Clone, Debug, Default)]
pub struct GuardRoster {
    guards: HashMap<GuardId, Guard>,
    last_issued: Option<u32>,
}

impl GuardRoster {
    /// Creates an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `guard` and returns its new identifier.
    ///
    /// Identifiers are never reused, not even after a despawn.
    ///
    /// # Errors
    /// Returns [`RosterError::IdsExhausted`] once all `u32` identifiers
    /// have been issued; the guard is dropped.
    pub fn spawn(&mut self, guard: Guard) -> Result<GuardId, RosterError> {
        let raw = match self.last_issued {
            None => 0,
            Some(u32::MAX) => {
                warn!("refusing to spawn guard: identifiers exhausted");
                return Err(RosterError::IdsExhausted);
            }
            Some(last) => last + 1,
        };
        self.last_issued = Some(raw);
        let id = GuardId(raw);
        self.guards.insert(id, guard);
        debug!("spawned guard {raw}");
        Ok(id)
    }

    /// Removes and returns the guard with `id`.
    pub fn despawn(&mut self, id: GuardId) -> Option<Guard> {
        self.guards.remove(&id)
    }

    /// Guard with `id`, if present.
    #[must_use]
    pub fn get(&self, id: GuardId) -> Option<&Guard> {
        self.guards.get(&id)
    }

    /// Mutable access to the guard with `id`.
    pub fn get_mut(&mut self, id: GuardId) -> Option<&mut Guard> {
        self.guards.get_mut(&id)
    }

    /// Number of guards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.guards.len()
    }

    /// Returns `true` when no guards are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guards.is_empty()
    }

    /// Identifiers in ascending order.
    #[must_use]
    pub fn ids(&self) -> Vec<GuardId> {
        let mut ids: Vec<GuardId> = self.guards.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Guards in ascending identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (GuardId, &Guard)> {
        self.ids()
            .into_iter()
            .filter_map(move |id| self.guards.get(&id).map(|guard| (id, guard)))
    }

    /// Ticks every guard and reports who saw `target`.
    ///
    /// Events come out in ascending [`GuardId`] order, one per guard that
    /// saw the target this tick. Each carries the pose the guard held when
    /// it looked.
    pub fn tick_all(
        &mut self,
        dt: f32,
        raycaster: &dyn Raycaster,
        target: Option<Vec2>,
    ) -> Vec<SightingEvent> {
        let mut events = Vec::new();
        for id in self.ids() {
            let Some(guard) = self.guards.get_mut(&id) else {
                continue;
            };
            let guard_pose = guard.pose();
            let outcome = guard.tick(dt, raycaster, target);
            if let (true, Some(seen)) = (outcome.spotted, target) {
                events.push(SightingEvent {
                    guard: id,
                    target: seen,
                    guard_pose,
                });
            }
        }
        events
    }
}
