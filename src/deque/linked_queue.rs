use crate::error::{Access, Error, Result};
use crate::linear_list::forward_list::{Iter, IterOwned};
use crate::linear_list::ForwardList;

use std::fmt;
use std::iter::FromIterator;

#[derive(Default)]
pub struct LinkedQueue(ForwardList);

impl LinkedQueue {
    pub fn new() -> Self {
        Self(ForwardList::new())
    }

    pub fn clear(&mut self) {
        tracing::trace!("clearing queue");
        self.0.clear()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn front(&self) -> Option<i32> {
        self.0.front().copied()
    }

    pub fn rear(&self) -> Option<i32> {
        self.0.back().copied()
    }

    pub fn push(&mut self, elem: i32) {
        self.0.push_back(elem)
    }

    pub fn pop(&mut self) -> Option<i32> {
        self.0.pop_front()
    }

    pub fn try_front(&self) -> Result<i32> {
        self.front()
            .ok_or(Error::EmptyQueueAccess { op: Access::Front })
    }

    pub fn try_rear(&self) -> Result<i32> {
        self.rear().ok_or(Error::EmptyQueueAccess { op: Access::Rear })
    }

    pub fn try_pop(&mut self) -> Result<i32> {
        self.pop().ok_or(Error::EmptyQueueAccess { op: Access::Pop })
    }

    pub fn iter(&self) -> Iter<'_> {
        self.0.iter()
    }

    pub fn into_forward_list(self) -> ForwardList {
        self.0
    }
}

impl From<ForwardList> for LinkedQueue {
    fn from(list: ForwardList) -> Self {
        Self(list)
    }
}

impl fmt::Debug for LinkedQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for LinkedQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("[ ]");
        }
        for (i, elem) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "[ {} ]", elem)?;
        }
        Ok(())
    }
}

impl FromIterator<i32> for LinkedQueue {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        Self(ForwardList::from_iter(iter))
    }
}

impl Extend<i32> for LinkedQueue {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        self.0.extend(iter)
    }
}

impl IntoIterator for LinkedQueue {
    type Item = i32;
    type IntoIter = IterOwned;
    fn into_iter(self) -> IterOwned {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a LinkedQueue {
    type Item = &'a i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
