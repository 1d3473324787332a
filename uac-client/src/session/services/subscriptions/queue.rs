use std::{collections::VecDeque, sync::Arc};

use uac_core::sync::Mutex;

/// Describes how an [`ObservableQueue`] changed on a single write.
///
/// `Add`/`Remove` carry the index the element landed at or was evicted from, matching
/// the indices a caller would see by reading the queue immediately before/after the
/// write; `Reset` carries nothing because `clear()` discards every index at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueChange {
    /// An element was appended at `index` (the new length minus one).
    Add {
        /// Index the new element was appended at.
        index: usize,
    },
    /// The oldest element, always at index 0, was evicted to make room for an `Add`.
    Remove {
        /// Always 0: queues only ever evict from the front.
        index: usize,
    },
    /// `clear()` was called on a non-empty queue.
    Reset,
}

type QueueListener = Box<dyn Fn(QueueChange) + Send + Sync>;

/// A fixed-capacity FIFO that raises a notification on every write, the observable-queue
/// sink a monitored item's target binding can write into instead of a callback.
///
/// On overflow the oldest element is dequeued first (`Remove`, index 0), then the new
/// element is enqueued (`Add`, index = new length - 1) — so one `push` on a full queue
/// raises both notifications, `Remove` then `Add`, matching the spec's write order.
/// `clear()` raises a single `Reset` only if the queue was non-empty beforehand.
pub struct ObservableQueue<T> {
    capacity: usize,
    items: Mutex<VecDeque<T>>,
    listeners: Mutex<Vec<QueueListener>>,
}

impl<T> ObservableQueue<T> {
    /// Creates an empty queue holding at most `capacity` elements. A `capacity` of 0
    /// accepts no elements; every `push` is a no-op and raises no notification.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            items: Mutex::new(VecDeque::with_capacity(capacity)),
            listeners: Mutex::new(Vec::new()),
        }
    }

    /// Registers a callback invoked with every [`QueueChange`] raised by this queue.
    pub fn on_change(&self, listener: impl Fn(QueueChange) + Send + Sync + 'static) {
        self.listeners.lock().push(Box::new(listener));
    }

    fn notify(&self, change: QueueChange) {
        for listener in self.listeners.lock().iter() {
            listener(change);
        }
    }

    /// Appends `value`, evicting the oldest element first if the queue is at capacity.
    pub fn push(&self, value: T) {
        if self.capacity == 0 {
            return;
        }
        let overflowed = {
            let mut items = self.items.lock();
            let overflowed = items.len() == self.capacity;
            if overflowed {
                items.pop_front();
            }
            overflowed
        };
        if overflowed {
            self.notify(QueueChange::Remove { index: 0 });
        }
        let index = {
            let mut items = self.items.lock();
            items.push_back(value);
            items.len() - 1
        };
        self.notify(QueueChange::Add { index });
    }

    /// Removes every element. Raises a single `Reset` notification, and only if the
    /// queue held at least one element.
    pub fn clear(&self) {
        let was_nonempty = {
            let mut items = self.items.lock();
            let was_nonempty = !items.is_empty();
            items.clear();
            was_nonempty
        };
        if was_nonempty {
            self.notify(QueueChange::Reset);
        }
    }

    /// Current number of elements held.
    pub fn len(&self) -> usize {
        self.items.lock().len()
    }

    /// `true` if the queue currently holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.lock().is_empty()
    }

    /// The configured maximum number of elements.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<T: Clone> ObservableQueue<T> {
    /// A snapshot of the current contents, oldest first.
    pub fn snapshot(&self) -> Vec<T> {
        self.items.lock().iter().cloned().collect()
    }
}

impl<T> std::fmt::Debug for ObservableQueue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObservableQueue")
            .field("capacity", &self.capacity)
            .field("len", &self.items.lock().len())
            .finish()
    }
}

/// An [`ObservableQueue`] shared between the subscription delivery task and user code
/// reading it, the shape a monitored item's declarative sink binding actually holds.
pub type SharedObservableQueue<T> = Arc<ObservableQueue<T>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overflow_evicts_oldest_first() {
        let queue: ObservableQueue<i32> = ObservableQueue::new(3);
        for v in 0..5 {
            queue.push(v);
        }
        assert_eq!(queue.snapshot(), vec![2, 3, 4]);
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn notification_counts_match_the_quantified_invariant() {
        let capacity = 3usize;
        let n = 7usize;
        let queue: ObservableQueue<i32> = ObservableQueue::new(capacity);
        let adds = Arc::new(Mutex::new(0usize));
        let removes = Arc::new(Mutex::new(0usize));
        let resets = Arc::new(Mutex::new(0usize));
        let (a, r, rs) = (adds.clone(), removes.clone(), resets.clone());
        queue.on_change(move |change| match change {
            QueueChange::Add { .. } => *a.lock() += 1,
            QueueChange::Remove { .. } => *r.lock() += 1,
            QueueChange::Reset => *rs.lock() += 1,
        });

        for v in 0..n as i32 {
            queue.push(v);
        }

        assert_eq!(queue.len(), capacity);
        assert_eq!(*adds.lock(), n);
        assert_eq!(*removes.lock(), n - capacity);

        queue.clear();
        assert_eq!(*resets.lock(), 1);

        queue.clear();
        assert_eq!(*resets.lock(), 1, "clearing an already-empty queue raises nothing");
    }

    #[test]
    fn add_and_remove_indices_follow_the_spec() {
        let queue: ObservableQueue<i32> = ObservableQueue::new(2);
        let events = Arc::new(Mutex::new(Vec::new()));
        let events_clone = events.clone();
        queue.on_change(move |change| events_clone.lock().push(change));

        queue.push(1);
        queue.push(2);
        queue.push(3);

        assert_eq!(
            *events.lock(),
            vec![
                QueueChange::Add { index: 0 },
                QueueChange::Add { index: 1 },
                QueueChange::Remove { index: 0 },
                QueueChange::Add { index: 1 },
            ]
        );
    }
}
