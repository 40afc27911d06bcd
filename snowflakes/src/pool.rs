use std::collections::VecDeque;

use crate::Particle;

/// Arena of recycled [`Particle`]s.
///
/// Every slot of the backing store is in exactly one of three lists: `live` (simulated and
/// drawn), `free` (waiting to be respawned, at most [`ParticlePool::FREE_CAPACITY`]) or
/// `retired` (returned while the free pool was full). Retired slots are only handed out again
/// when the free pool is empty, and the store only grows when both lists are empty, so it never
/// holds more than `LIVE_CAPACITY` slots.
#[derive(Debug, Clone)]
pub struct ParticlePool {
    slots: Vec<Particle>,
    free: VecDeque<usize>,
    live: Vec<usize>,
    retired: Vec<usize>,
    discarded: usize,
}

impl ParticlePool {
    pub const PREWARM: usize = 20;
    pub const FREE_CAPACITY: usize = 40;
    pub const LIVE_CAPACITY: usize = 100;

    /// Pool with `prewarm` inert particles already in the free list.
    pub fn new(prewarm: usize) -> ParticlePool {
        let prewarm = prewarm.min(Self::FREE_CAPACITY);

        log::debug!("prewarming snow pool with {prewarm} particles");

        ParticlePool {
            slots: vec![Particle::default(); prewarm],
            free: (0..prewarm).collect(),
            live: Vec::with_capacity(Self::LIVE_CAPACITY),
            retired: Vec::new(),
            discarded: 0,
        }
    }

    pub fn live_len(&self) -> usize {
        self.live.len()
    }

    pub fn free_len(&self) -> usize {
        self.free.len()
    }

    /// Slots ever allocated in the backing store.
    pub fn allocated(&self) -> usize {
        self.slots.len()
    }

    /// Returns that found the free pool full.
    pub fn discarded(&self) -> usize {
        self.discarded
    }

    pub fn is_full(&self) -> bool {
        self.live.len() >= Self::LIVE_CAPACITY
    }

    /// Live particles in set order.
    pub fn iter_live(&self) -> impl Iterator<Item = &Particle> + '_ {
        self.live.iter().map(move |&index| &self.slots[index])
    }

    /// Promotes a recycled record (or a new one) to the live set, overwriting it with `particle`.
    /// Returns `None` without touching the pool once the live set is at capacity.
    pub fn spawn(&mut self, particle: Particle) -> Option<usize> {
        if self.is_full() {
            return None;
        }

        let index = match self.free.pop_front().or_else(|| self.retired.pop()) {
            Some(index) => {
                self.slots[index] = particle;
                index
            }
            None => {
                self.slots.push(particle);
                log::trace!("snow pool grew to {} slots", self.slots.len());
                self.slots.len() - 1
            }
        };

        self.live.push(index);

        Some(index)
    }

    /// Recycles expired particles and hands the rest to `tick`, in set order.
    pub fn update<F>(&mut self, mut tick: F)
    where
        F: FnMut(&mut Particle),
    {
        let mut i = 0;

        while i < self.live.len() {
            let index = self.live[i];

            if self.slots[index].is_alive() {
                tick(&mut self.slots[index]);
                i += 1;
            } else {
                self.live.remove(i);
                self.release(index);
            }
        }
    }

    fn release(&mut self, index: usize) {
        if self.free.len() < Self::FREE_CAPACITY {
            self.free.push_back(index);
        } else {
            self.discarded += 1;
            self.retired.push(index);
            log::trace!("snow pool full, retired slot {index}");
        }
    }
}

impl Default for ParticlePool {
    fn default() -> Self {
        ParticlePool::new(Self::PREWARM)
    }
}
