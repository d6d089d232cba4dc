//! Lane arena - the shared pool of lanes that gates game sessions
//!
//! An arena is an ordinary owned value, shared between sessions as
//! `Arc<LaneArena>`. The free-lane counter sits behind a single mutex, which
//! is the only place it is ever changed.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, warn};

use crate::config::BowlingConfig;
use crate::error::{BowlingError, Result};
use crate::types::DEFAULT_LANES;

/// Fixed-capacity pool of bowling lanes
#[derive(Debug)]
pub struct LaneArena {
    capacity: usize,
    available: Mutex<usize>,
}

impl LaneArena {
    /// Create an arena with every lane free
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            available: Mutex::new(capacity),
        }
    }

    pub fn from_config(config: &BowlingConfig) -> Self {
        Self::new(config.lanes)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Lanes currently free
    pub fn available(&self) -> usize {
        *self.lock()
    }

    /// Take one lane.
    ///
    /// Fails with [`BowlingError::CapacityExhausted`] when none is free, leaving
    /// the counter untouched.
    pub fn acquire(&self) -> Result<()> {
        let mut available = self.lock();
        if *available == 0 {
            warn!("lane refused: all {} lanes in use", self.capacity);
            return Err(BowlingError::CapacityExhausted {
                capacity: self.capacity,
            });
        }
        *available -= 1;
        debug!("lane acquired ({}/{} free)", *available, self.capacity);
        Ok(())
    }

    /// Hand one lane back.
    ///
    /// Fails with [`BowlingError::ReleaseWithoutAcquire`] when every lane is
    /// already free, leaving the counter untouched.
    pub fn release(&self) -> Result<()> {
        let mut available = self.lock();
        if *available >= self.capacity {
            warn!("lane released with all {} lanes already free", self.capacity);
            return Err(BowlingError::ReleaseWithoutAcquire {
                capacity: self.capacity,
            });
        }
        *available += 1;
        debug!("lane released ({}/{} free)", *available, self.capacity);
        Ok(())
    }

    /// Take one lane and wrap it in a [`LaneLease`] that gives it back exactly once.
    pub fn lease(self: &Arc<Self>) -> Result<LaneLease> {
        self.acquire()?;
        Ok(LaneLease {
            arena: Arc::clone(self),
            released: false,
        })
    }

    fn lock(&self) -> MutexGuard<'_, usize> {
        // The counter is a plain integer that is always left consistent, so a
        // panic in another holder does not invalidate it.
        self.available
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for LaneArena {
    fn default() -> Self {
        Self::new(DEFAULT_LANES)
    }
}

/// A held lane.
///
/// Released by [`LaneLease::release`], or when dropped if never released.
#[derive(Debug)]
pub struct LaneLease {
    arena: Arc<LaneArena>,
    released: bool,
}

impl LaneLease {
    pub fn arena(&self) -> &Arc<LaneArena> {
        &self.arena
    }

    /// Give the lane back to the arena.
    pub fn release(mut self) -> Result<()> {
        self.released = true;
        self.arena.release()
    }
}

impl Drop for LaneLease {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        if let Err(err) = self.arena.release() {
            warn!("dropping lane lease: {}", err);
        }
    }
}
