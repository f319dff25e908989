use std::fmt;
use std::iter::FromIterator;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

struct Node {
    elem: i32,
    next: Option<NonNull<Node>>,
}

impl Node {
    fn alloc(elem: i32) -> NonNull<Self> {
        let ptr = Box::into_raw(Box::new(Self { elem, next: None }));
        unsafe { NonNull::new_unchecked(ptr) }
    }

    // cond: ptr came from Node::alloc and is no longer linked
    unsafe fn consume(ptr: NonNull<Self>) -> (i32, Option<NonNull<Self>>) {
        let node = Box::from_raw(ptr.as_ptr());
        (node.elem, node.next)
    }
}

// Singly-linked list
pub struct ForwardList {
    head: Option<NonNull<Node>>,
    tail: Option<NonNull<Node>>,
    _marker: PhantomData<Box<Node>>,
}

unsafe impl Send for ForwardList {}
unsafe impl Sync for ForwardList {}

impl ForwardList {
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            _marker: PhantomData,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none() && self.tail.is_none()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn front(&self) -> Option<&i32> {
        self.head.map(|ptr| unsafe { &(*ptr.as_ptr()).elem })
    }

    pub fn back(&self) -> Option<&i32> {
        self.tail.map(|ptr| unsafe { &(*ptr.as_ptr()).elem })
    }

    pub fn push_back(&mut self, elem: i32) {
        let node_ptr = Node::alloc(elem);
        match self.tail {
            None => self.head = Some(node_ptr),
            Some(tail_ptr) => unsafe { (*tail_ptr.as_ptr()).next = Some(node_ptr) },
        }
        self.tail = Some(node_ptr);
    }

    pub fn pop_front(&mut self) -> Option<i32> {
        let head_ptr = self.head?;
        let (elem, next) = unsafe { Node::consume(head_ptr) };
        self.head = next;
        if next.is_none() {
            self.tail = None;
        }
        Some(elem)
    }

    pub fn clear(&mut self) {
        let mut cur = self.head.take();
        self.tail = None;
        while let Some(ptr) = cur {
            cur = unsafe { Node::consume(ptr) }.1;
        }
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head,
            _marker: PhantomData,
        }
    }
}

impl Default for ForwardList {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ForwardList {
    fn drop(&mut self) {
        self.clear()
    }
}

impl fmt::Debug for ForwardList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl FromIterator<i32> for ForwardList {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl Extend<i32> for ForwardList {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for elem in iter {
            self.push_back(elem);
        }
    }
}

// --------------------------------
// begin: IterOwned

pub struct IterOwned(ForwardList);

impl Iterator for IterOwned {
    type Item = i32;
    fn next(&mut self) -> Option<i32> {
        self.0.pop_front()
    }
}

impl IntoIterator for ForwardList {
    type Item = i32;
    type IntoIter = IterOwned;
    fn into_iter(self) -> IterOwned {
        IterOwned(self)
    }
}

impl FusedIterator for IterOwned {}

// end: IterOwned
// ------------------------------------------

// ------------------------------------------
// begin: Iter

pub struct Iter<'a> {
    next: Option<NonNull<Node>>,
    _marker: PhantomData<&'a ForwardList>,
}

unsafe impl Send for Iter<'_> {}
unsafe impl Sync for Iter<'_> {}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a i32;
    fn next(&mut self) -> Option<&'a i32> {
        self.next.map(|ptr| unsafe {
            let node = &*ptr.as_ptr();
            self.next = node.next;
            &node.elem
        })
    }
}

impl<'a> IntoIterator for &'a ForwardList {
    type Item = &'a i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> FusedIterator for Iter<'a> {}

// end: Iter
// ------------------------------------------

#[cfg(test)]
mod test {
    use super::ForwardList;

    #[test]
    fn test_forward_list() {
        let mut list = ForwardList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);

        list.push_back(1);
        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.back(), Some(&1));

        list.push_back(2);
        list.push_back(3);
        assert_eq!(list.len(), 3);
        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.back(), Some(&3));

        list.iter().for_each(|e| {
            dbg!(e);
        });

        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop_front(), Some(3));
        assert_eq!(list.pop_front(), None);
        assert!(list.is_empty());
        assert_eq!(list.back(), None);

        // tail was reset, so the next push starts a fresh chain
        list.push_back(4);
        assert_eq!(list.front(), Some(&4));
        assert_eq!(list.back(), Some(&4));
        assert_eq!(list.len(), 1);

        list.clear();
        assert!(list.is_empty());

        for i in 5..=9 {
            list.push_back(i);
        }
        assert_eq!(list.into_iter().collect::<Vec<_>>(), vec![5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_back_after_pop() {
        let mut list = ForwardList::new();
        list.push_back(1);
        list.push_back(2);
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.back(), Some(&2));
        list.push_back(3);
        assert_eq!(list.back(), Some(&3));
        assert_eq!(list.front(), Some(&2));
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop_front(), Some(3));
        assert_eq!(list.back(), None);
    }

    #[test]
    fn test_from_iter_and_debug() {
        let list: ForwardList = vec![1, 2, 4, 8].into_iter().collect();
        assert_eq!(format!("{:?}", list), "[1, 2, 4, 8]");
        assert_eq!(list.iter().copied().sum::<i32>(), 15);

        let mut sum = 0;
        for e in &list {
            sum += e;
        }
        assert_eq!(sum, 15);
    }

    #[test]
    fn test_drop_long_chain() {
        let list: ForwardList = (0..10_000).collect();
        assert_eq!(list.back(), Some(&9_999));
        drop(list);
    }
}
