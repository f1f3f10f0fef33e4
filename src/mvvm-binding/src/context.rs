use std::rc::Rc;

use mvvm_union::Union;

use crate::PropertyName;

/// A callback receiving the new value of a changed property.
pub type Listener = Rc<dyn Fn(&Union)>;

/// Identifies one subscription on an [`ObservableContext`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Creates an identifier from its raw value.
    #[inline]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Gets the raw value of the identifier.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// A source of named properties which raises change notifications.
///
/// All methods take `&self` so that a context can be shared between
/// the model mutating it and the binders listening to it. Property
/// names are matched by exact value.
pub trait ObservableContext {
    /// Gets the current value of a property.
    fn get(&self, property: &PropertyName) -> Option<Union>;

    /// Subscribes `listener` to changes of `property`.
    ///
    /// Listeners of the same property are notified synchronously in the
    /// order they subscribed.
    fn subscribe(&self, property: PropertyName, listener: Listener) -> SubscriptionId;

    /// Removes a subscription.
    ///
    /// Returns `false` if no such subscription exists. Once removed, the
    /// listener is never invoked again.
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}
