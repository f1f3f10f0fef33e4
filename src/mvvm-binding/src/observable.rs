use std::cell::{Cell, RefCell};

use indexmap::IndexMap;
use mvvm_union::Union;

use crate::{Listener, ObservableContext, PropertyName, SubscriptionId};

struct Subscription {
    property: PropertyName,
    listener: Listener,
}

/// An in-memory [`ObservableContext`].
///
/// Properties are kept in definition order. Notifications are raised
/// synchronously from [`ObservableObject::set`] and may re-enter the
/// object, e.g. to mutate other properties or to unsubscribe.
#[derive(Default)]
pub struct ObservableObject {
    properties: RefCell<IndexMap<PropertyName, Union>>,
    subscriptions: RefCell<IndexMap<SubscriptionId, Subscription>>,
    next_id: Cell<u64>,
}

impl ObservableObject {
    /// Creates an object without properties.
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines a property with an initial value, without notifying.
    pub fn with_property(self, name: impl Into<PropertyName>, value: impl Into<Union>) -> Self {
        self.properties.borrow_mut().insert(name.into(), value.into());
        self
    }

    /// Stores a new value for a property.
    ///
    /// Listeners are only notified when the value differs from the one
    /// stored before. Returns whether it did.
    pub fn set(&self, name: impl Into<PropertyName>, value: impl Into<Union>) -> bool {
        let (name, value) = (name.into(), value.into());

        let changed = {
            let mut properties = self.properties.borrow_mut();
            match properties.get_mut(&name) {
                Some(old) if *old == value => false,
                Some(old) => {
                    *old = value.clone();
                    true
                }
                None => {
                    properties.insert(name.clone(), value.clone());
                    true
                }
            }
        };

        if changed {
            self.raise(&name, &value);
        }

        changed
    }

    /// Notifies listeners of a property with its current value, even if
    /// it did not change.
    pub fn notify(&self, name: &PropertyName) {
        let value = self.get(name).unwrap_or_default();
        self.raise(name, &value);
    }

    /// Gets a snapshot of all properties in definition order.
    pub fn properties(&self) -> Vec<(PropertyName, Union)> {
        self.properties
            .borrow()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Gets the number of listeners subscribed to a property.
    pub fn listener_count(&self, name: &PropertyName) -> usize {
        self.subscriptions
            .borrow()
            .values()
            .filter(|s| s.property == *name)
            .count()
    }

    fn is_subscribed(&self, id: SubscriptionId) -> bool {
        self.subscriptions.borrow().contains_key(&id)
    }

    fn raise(&self, name: &PropertyName, value: &Union) {
        // Snapshot, so listeners may freely re-enter the object.
        let listeners: Vec<_> = self
            .subscriptions
            .borrow()
            .iter()
            .filter(|(_, s)| s.property == *name)
            .map(|(id, s)| (*id, s.listener.clone()))
            .collect();

        log::trace!(
            "Property '{name}' changed to '{value}', notifying {} listener(s)",
            listeners.len()
        );

        for (id, listener) in listeners {
            if self.is_subscribed(id) {
                listener(value);
            }
        }
    }
}

impl ObservableContext for ObservableObject {
    fn get(&self, property: &PropertyName) -> Option<Union> {
        self.properties.borrow().get(property).cloned()
    }

    fn subscribe(&self, property: PropertyName, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId::new(self.next_id.get());
        self.next_id.set(id.get() + 1);

        log::debug!("Subscribing {id:?} to property '{property}'");
        self.subscriptions
            .borrow_mut()
            .insert(id, Subscription { property, listener });

        id
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        // Shifting keeps the remaining listeners in subscription order.
        let removed = self.subscriptions.borrow_mut().shift_remove(&id);
        match removed {
            Some(subscription) => {
                log::debug!("Unsubscribing {id:?} from '{}'", subscription.property);
                true
            }
            None => false,
        }
    }
}
