use std::collections::BTreeMap;

use folio::{Scheduler, Task};

/// A single-threaded timer queue.
///
/// Tasks run in due-time order; tasks due at the same time run in the order they were deferred.
/// Time only moves forward, through [`TimerQueue::advance_to`].
#[derive(Clone, Debug, Default)]
pub struct TimerQueue {
    now_ms: u64,
    seq: u64,
    queue: BTreeMap<(u64, u64), Task>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Due time of the earliest pending task.
    pub fn next_due(&self) -> Option<u64> {
        self.queue.keys().next().map(|&(due, _)| due)
    }

    pub fn advance_to(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }

    /// Removes and returns the earliest task that is due at the current time.
    pub fn pop_due(&mut self) -> Option<Task> {
        let (&(due, _), _) = self.queue.first_key_value()?;
        if due > self.now_ms {
            return None;
        }
        self.queue.pop_first().map(|(_, task)| task)
    }

    /// Pending tasks in run order.
    pub fn pending(&self) -> impl Iterator<Item = (u64, Task)> + '_ {
        self.queue.iter().map(|(&(due, _), &task)| (due, task))
    }
}

impl Scheduler for TimerQueue {
    fn defer(&mut self, delay_ms: u64, task: Task) {
        let due = self.now_ms.saturating_add(delay_ms);
        self.queue.insert((due, self.seq), task);
        self.seq = self.seq.wrapping_add(1);
        atrace!(due, ?task, "TimerQueue::defer");
    }
}
