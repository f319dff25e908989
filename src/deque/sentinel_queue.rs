use crate::deque::LinkedQueue;
use crate::error::Result;

pub const SENTINEL: i32 = -1;

#[derive(Debug, Default)]
pub struct SentinelQueue(LinkedQueue);

impl SentinelQueue {
    pub fn new() -> Self {
        Self(LinkedQueue::new())
    }

    pub fn push(&mut self, value: i32) {
        self.0.push(value)
    }

    pub fn front_node(&self) -> i32 {
        or_sentinel(self.0.try_front())
    }

    pub fn rear_node(&self) -> i32 {
        or_sentinel(self.0.try_rear())
    }

    pub fn size(&self) -> usize {
        self.0.len()
    }

    pub fn empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn pop(&mut self) -> i32 {
        or_sentinel(self.0.try_pop())
    }

    pub fn show(&self) -> String {
        self.0.to_string()
    }

    pub fn into_linked_queue(self) -> LinkedQueue {
        self.0
    }
}

impl From<LinkedQueue> for SentinelQueue {
    fn from(queue: LinkedQueue) -> Self {
        Self(queue)
    }
}

fn or_sentinel(res: Result<i32>) -> i32 {
    res.unwrap_or_else(|err| {
        tracing::debug!(op = %err.op(), "{}, returning sentinel", err);
        SENTINEL
    })
}
