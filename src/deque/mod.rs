mod linked_queue;
mod sentinel_queue;

pub use self::linked_queue::LinkedQueue;
pub use self::sentinel_queue::{SentinelQueue, SENTINEL};
