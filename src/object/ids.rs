use std::fmt;

/// identity of a game object
///
/// the index is recycled through a free list to keep the key space dense, the
/// generation tells a recycled identity apart from the stale one it replaced.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct ObjectId {
    index: u32,
    generation: u32,
}

impl ObjectId {
    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

#[derive(Default, Debug)]
pub struct IdAllocator {
    generations: Vec<u32>,
    live: Vec<bool>,
    free: Vec<u32>,
}

impl IdAllocator {
    pub fn new() -> IdAllocator {
        IdAllocator::default()
    }

    /// reuses the most recently freed index, otherwise grows the key space
    pub fn allocate(&mut self) -> ObjectId {
        match self.free.pop() {
            Some(index) => {
                self.live[index as usize] = true;
                ObjectId {
                    index,
                    generation: self.generations[index as usize],
                }
            }
            None => {
                let index = self.generations.len() as u32;
                self.generations.push(0);
                self.live.push(true);
                ObjectId {
                    index,
                    generation: 0,
                }
            }
        }
    }

    /// returns the index to the free list, false if `id` was not live
    pub fn release(&mut self, id: ObjectId) -> bool {
        if !self.is_live(id) {
            return false;
        }
        let ix = id.index as usize;
        self.live[ix] = false;
        self.generations[ix] = self.generations[ix].wrapping_add(1);
        self.free.push(id.index);
        true
    }

    pub fn is_live(&self, id: ObjectId) -> bool {
        let ix = id.index as usize;
        self.live.get(ix).copied().unwrap_or(false) && self.generations[ix] == id.generation
    }

    /// number of indices ever handed out
    pub fn capacity(&self) -> usize {
        self.generations.len()
    }

    pub fn live_count(&self) -> usize {
        self.generations.len() - self.free.len()
    }
}
