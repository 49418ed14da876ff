#![forbid(unsafe_code)]

//! The observable cart.
//!
//! # Invariants
//!
//! 1. `items()` is always the items in add order; duplicates are kept and
//!    nothing is ever removed, deduplicated, or sorted.
//! 2. Each `add` appends exactly one item, bumps the version exactly once,
//!    and delivers exactly one notification to every current subscriber.
//! 3. Subscribers are notified in subscription order, after the mutation
//!    is visible to reads: the updated sequence can be observed through
//!    any cart handle from inside a callback.
//! 4. Dropping a [`CartSubscription`] removes the callback before the
//!    next notification cycle.
//!
//! All operations are total: `add` accepts any item (no validation, a
//! negative price included) and cannot fail.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::item::Item;

/// Delivered to each subscriber once per [`Cart::add`].
#[derive(Debug, Clone, PartialEq)]
pub struct CartChange {
    /// The item that was appended.
    pub item: Item,
    /// Cart length after the append.
    pub len: usize,
    /// Cart version after the append.
    pub version: u64,
}

type Callback = Rc<dyn Fn(&CartChange)>;

struct CartInner {
    items: Vec<Item>,
    /// Bumped exactly once per append.
    version: u64,
    next_subscriber: u64,
    /// Subscription order is notification order.
    subscribers: Vec<(u64, Callback)>,
}

/// A shared handle to one cart.
///
/// Cloning a `Cart` clones the handle, not the contents: the app creates
/// one cart per session and hands clones to every view that reads or
/// mutates it. Single-threaded by construction (`Rc<RefCell<..>>`).
pub struct Cart {
    inner: Rc<RefCell<CartInner>>,
}

impl Clone for Cart {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for Cart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Cart")
            .field("items", &inner.items)
            .field("version", &inner.version)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}

impl Cart {
    /// Create a cart holding `items` already, in the given order.
    #[must_use]
    pub fn new(items: impl Into<Vec<Item>>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(CartInner {
                items: items.into(),
                version: 0,
                next_subscriber: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// The canonical empty starting state.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Snapshot of the current contents, in add order.
    #[must_use]
    pub fn items(&self) -> Vec<Item> {
        self.inner.borrow().items.clone()
    }

    /// Borrow the current contents without cloning.
    pub fn with_items<R>(&self, f: impl FnOnce(&[Item]) -> R) -> R {
        f(&self.inner.borrow().items)
    }

    /// Number of entries (duplicates counted).
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.borrow().items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().items.is_empty()
    }

    /// Sum of all entry prices, recomputed from scratch on every call.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.inner.borrow().items.iter().map(Item::price).sum()
    }

    /// Number of entries sharing an identity key.
    #[must_use]
    pub fn count_of(&self, id: &str) -> usize {
        self.inner
            .borrow()
            .items
            .iter()
            .filter(|item| item.id() == id)
            .count()
    }

    /// Monotone change counter; bumped exactly once per [`add`](Self::add).
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Current subscriber count.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    /// Append `item` and notify every current subscriber, synchronously,
    /// in subscription order.
    ///
    /// The interior borrow is released before callbacks run, so a
    /// callback may read the cart (and will see the updated sequence) or
    /// even subscribe; a subscriber added from inside a callback is first
    /// notified on the next append.
    pub fn add(&self, item: Item) {
        let change;
        let callbacks: Vec<Callback>;
        {
            let mut inner = self.inner.borrow_mut();
            inner.items.push(item.clone());
            inner.version += 1;
            change = CartChange {
                item,
                len: inner.items.len(),
                version: inner.version,
            };
            callbacks = inner
                .subscribers
                .iter()
                .map(|(_, callback)| Rc::clone(callback))
                .collect();
        }
        tracing::debug!(
            message = "cart.add",
            item = %change.item.name(),
            len = change.len,
            version = change.version,
        );
        for callback in callbacks {
            callback(&change);
        }
    }

    /// Register a change callback. The returned guard keeps the
    /// subscription alive; dropping it unsubscribes.
    #[must_use]
    pub fn subscribe(&self, callback: impl Fn(&CartChange) + 'static) -> CartSubscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_subscriber;
        inner.next_subscriber += 1;
        inner.subscribers.push((id, Rc::new(callback)));
        CartSubscription {
            id,
            cart: Rc::downgrade(&self.inner),
        }
    }
}

/// RAII subscription guard returned by [`Cart::subscribe`].
///
/// Unsubscribes on drop. If the cart itself is gone first, dropping the
/// guard is a no-op.
pub struct CartSubscription {
    id: u64,
    cart: Weak<RefCell<CartInner>>,
}

impl fmt::Debug for CartSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartSubscription")
            .field("id", &self.id)
            .field("live", &(self.cart.strong_count() > 0))
            .finish()
    }
}

impl Drop for CartSubscription {
    fn drop(&mut self) {
        if let Some(inner) = self.cart.upgrade() {
            inner
                .borrow_mut()
                .subscribers
                .retain(|(id, _)| *id != self.id);
        }
    }
}
