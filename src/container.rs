//! Fixed-capacity stack and queue.
//!
//! Both containers allocate their storage once, at creation, and refuse new
//! items instead of growing when they are full.

use crate::error::Error;

/// A LIFO container holding at most `capacity` items
#[derive(Debug, Clone, PartialEq)]
pub struct BoundedStack<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> BoundedStack<T> {
    /// Create an empty stack able to hold `capacity` items
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Push `item` on top of the stack.
    ///
    /// # Errors
    ///
    /// `Error::CapacityExceeded` if the stack is already full.
    pub fn push(&mut self, item: T) -> Result<(), Error> {
        if self.items.len() >= self.capacity {
            return Err(Error::CapacityExceeded(self.capacity));
        }
        self.items.push(item);
        Ok(())
    }

    /// Remove and return the top item
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Read the top item without removing it
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Number of items held
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if no item is held
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Most items that can be held at once
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// A FIFO container holding at most `capacity` items, stored in a ring.
///
/// `first` is the slot of the front item, `last` the slot of the most recently
/// enqueued one, and `count` the number of live items.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundedQueue<T> {
    items: Box<[Option<T>]>,
    first: usize,
    last: usize,
    count: usize,
}

impl<T> BoundedQueue<T> {
    /// Create an empty queue able to hold `capacity` items
    pub fn new(capacity: usize) -> Self {
        let mut items = Vec::with_capacity(capacity);
        items.resize_with(capacity, || None);
        Self {
            items: items.into_boxed_slice(),
            first: 0,
            last: capacity.saturating_sub(1),
            count: 0,
        }
    }

    /// Append `item` at the back of the queue.
    ///
    /// # Errors
    ///
    /// `Error::CapacityExceeded` if the queue is already full.
    pub fn enqueue(&mut self, item: T) -> Result<(), Error> {
        let capacity = self.capacity();
        if self.count >= capacity {
            return Err(Error::CapacityExceeded(capacity));
        }
        self.last = (self.last + 1) % capacity;
        self.items[self.last] = Some(item);
        self.count += 1;
        Ok(())
    }

    /// Remove and return the front item
    pub fn dequeue(&mut self) -> Option<T> {
        if self.count == 0 {
            return None;
        }
        let item = self.items[self.first].take();
        self.first = (self.first + 1) % self.capacity();
        self.count -= 1;
        item
    }

    /// Read the front item without removing it
    pub fn peek(&self) -> Option<&T> {
        if self.count == 0 {
            return None;
        }
        self.items[self.first].as_ref()
    }

    /// Iterate from front to back without consuming the queue
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let capacity = self.capacity();
        (0..self.count).filter_map(move |offset| self.items[(self.first + offset) % capacity].as_ref())
    }

    /// Number of items held
    pub fn len(&self) -> usize {
        self.count
    }

    /// Check if no item is held
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Most items that can be held at once
    pub fn capacity(&self) -> usize {
        self.items.len()
    }
}

impl<T: Clone> BoundedQueue<T> {
    /// Build an independent queue with the same capacity and the same items
    /// in the same order. `self` is left as it was.
    pub fn copy(&self) -> Self {
        let mut copy = Self::new(self.capacity());
        for item in self.iter() {
            // same capacity, same count: cannot overflow
            copy.items[(copy.last + 1) % copy.capacity()] = Some(item.clone());
            copy.last = (copy.last + 1) % copy.capacity();
            copy.count += 1;
        }
        copy
    }
}
