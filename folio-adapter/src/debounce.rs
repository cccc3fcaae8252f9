/// A trailing-edge debounce driven by caller-supplied timestamps.
///
/// Every `trigger` re-arms the timer; `poll` fires once the quiet period has elapsed since the
/// last trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Debounce {
    wait_ms: u64,
    deadline: Option<u64>,
}

impl Debounce {
    pub fn new(wait_ms: u64) -> Self {
        Self {
            wait_ms,
            deadline: None,
        }
    }

    pub fn trigger(&mut self, now_ms: u64) {
        self.deadline = Some(now_ms.saturating_add(self.wait_ms));
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns `true` exactly once per quiet period.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}
