//! Linked-list-backed FIFO queue of integers.

pub mod deque;
pub mod error;
pub mod linear_list;

pub use deque::{LinkedQueue, SentinelQueue, SENTINEL};
pub use error::{Error, Result};
