//! Sleep/wake scheduling for update modules.
//!
//! The wake table is the authority: one entry per scheduled module, keyed
//! deterministically so transfer and CRC see a stable order. The heap is a
//! lazy index over the table — entries are pushed and never updated in
//! place, so a popped entry may be stale (the wake moved, or the module is
//! gone) and is skipped by comparing it against the table.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};

use rampart_core::xfer::{Snapshot, Xfer, XferError, XferMode, XferResult, xfer_count};
use rampart_core::{FOREVER, Frame, ObjectId};

/// Identifies one update module: the owning object and the module's slot
/// index within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ModuleKey {
    /// The owning object.
    pub object: ObjectId,
    /// Index into the object's update-module list.
    pub slot: u32,
}

/// The module wake scheduler.
#[derive(Debug, Default)]
pub struct Scheduler {
    wake: BTreeMap<ModuleKey, Frame>,
    heap: BinaryHeap<Reverse<(Frame, ModuleKey)>>,
}

impl Scheduler {
    /// Create an empty scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of scheduled modules, sleeping-forever entries included.
    pub fn len(&self) -> usize {
        self.wake.len()
    }

    /// True if no modules are scheduled.
    pub fn is_empty(&self) -> bool {
        self.wake.is_empty()
    }

    /// The wake frame currently stored for a module.
    pub fn wake_frame(&self, key: ModuleKey) -> Option<Frame> {
        self.wake.get(&key).copied()
    }

    /// Set a module's wake frame unconditionally. This is how a module's
    /// own `update` return re-arms it — the only path that may *raise* a
    /// wake frame.
    pub fn set_wake(&mut self, key: ModuleKey, frame: Frame) {
        self.wake.insert(key, frame);
        if frame != FOREVER {
            self.heap.push(Reverse((frame, key)));
        }
    }

    /// Request an earlier wake. A request later than the stored wake is
    /// ignored; external callers may only pull a wake forward.
    pub fn wake_no_later_than(&mut self, key: ModuleKey, frame: Frame) {
        match self.wake.get(&key) {
            Some(&stored) if stored <= frame => {}
            Some(_) => self.set_wake(key, frame),
            None => {}
        }
    }

    /// Drop a module from the schedule. Its heap entries go stale and are
    /// skipped on pop.
    pub fn remove(&mut self, key: ModuleKey) {
        self.wake.remove(&key);
    }

    /// Pop one module due at or before `frame`, removing it from the wake
    /// table; the caller re-arms it after running it. Returns `None` once
    /// nothing else is due.
    pub fn pop_due(&mut self, frame: Frame) -> Option<ModuleKey> {
        while let Some(&Reverse((when, key))) = self.heap.peek() {
            if when > frame {
                return None;
            }
            self.heap.pop();
            match self.wake.get(&key) {
                Some(&stored) if stored == when => {
                    self.wake.remove(&key);
                    return Some(key);
                }
                // Stale: the wake moved or the module was removed.
                _ => {}
            }
        }
        None
    }
}

impl Snapshot for Scheduler {
    fn xfer(&mut self, xfer: &mut dyn Xfer) -> XferResult<()> {
        let count = xfer_count(xfer, self.wake.len())?;
        if xfer.mode() == XferMode::Load {
            if !self.wake.is_empty() {
                return Err(XferError::NonEmptyCollection);
            }
            for _ in 0..count {
                let mut object = 0u32;
                let mut slot = 0u32;
                let mut frame: Frame = 0;
                xfer.xfer_u32(&mut object)?;
                xfer.xfer_u32(&mut slot)?;
                xfer.xfer_frame(&mut frame)?;
                self.set_wake(
                    ModuleKey {
                        object: ObjectId(object),
                        slot,
                    },
                    frame,
                );
            }
        } else {
            for (&key, &frame) in &self.wake {
                let mut object = key.object.0;
                let mut slot = key.slot;
                let mut when = frame;
                xfer.xfer_u32(&mut object)?;
                xfer.xfer_u32(&mut slot)?;
                xfer.xfer_frame(&mut when)?;
            }
        }
        Ok(())
    }
}
