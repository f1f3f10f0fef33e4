use std::{
    any,
    cell::{Cell, Ref, RefCell, RefMut},
    fmt,
    rc::Rc,
};

use mvvm_union::{Kind, Union, UnionValue};
use smartstring::alias::String;

use crate::{Converter, Error, ObservableContext, PropertyName, SubscriptionId};

type Invoke = Box<dyn Fn(&Union) -> bool>;

/// A named operation that bound values are dispatched to.
pub struct BindingField {
    name: String,
    parameter: Option<(Kind, &'static str)>,
    invoke: Invoke,
}

impl BindingField {
    /// Creates a binding field taking a single `T` parameter.
    ///
    /// Values that do not extract as `T` are dropped.
    pub fn new<T, F>(name: &str, f: F) -> Self
    where
        T: UnionValue,
        F: Fn(T) + 'static,
    {
        Self {
            name: name.into(),
            parameter: Some((T::KIND, any::type_name::<T>())),
            invoke: Box::new(move |value| match value.try_get::<T>() {
                Some(v) => {
                    f(v);
                    true
                }
                None => false,
            }),
        }
    }

    /// Creates a binding field accepting every [`Union`] as is.
    pub fn raw<F>(name: &str, f: F) -> Self
    where
        F: Fn(&Union) + 'static,
    {
        Self {
            name: name.into(),
            parameter: None,
            invoke: Box::new(move |value| {
                f(value);
                true
            }),
        }
    }

    /// Gets the name of the binding field.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the kind of the parameter, or [`None`] for raw fields.
    #[inline]
    pub fn parameter_kind(&self) -> Option<Kind> {
        self.parameter.map(|(kind, _)| kind)
    }

    /// Invokes the operation with `value`.
    ///
    /// Returns `false` when the value did not match the parameter type
    /// and the operation was not called.
    #[inline]
    pub fn invoke(&self, value: &Union) -> bool {
        (self.invoke)(value)
    }
}

impl fmt::Debug for BindingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parameter = self.parameter.map_or("Union", |(_, name)| name);
        write!(f, "BindingField({}: {parameter})", self.name)
    }
}

/// The listening state of a [`Binder`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinderState {
    /// No subscription exists.
    Unbound,
    /// Subscribed to the configured property of the context.
    Listening,
}

struct Shared {
    field: BindingField,
    converter: RefCell<Converter>,
    // Generation of the active subscription, bumped on every start.
    generation: Cell<u64>,
    listening: Cell<bool>,
}

impl Shared {
    // A converter borrowed mutably by the host drops the value.
    fn convert(&self, value: &Union) -> Option<Union> {
        match self.converter.try_borrow() {
            Ok(converter) => Some(converter.convert(value)),
            Err(_) => {
                log::trace!(
                    "Dropped value for binding field '{}' while its converter is borrowed",
                    self.field.name()
                );
                None
            }
        }
    }

    fn dispatch(&self, generation: u64, value: &Union) {
        if !self.listening.get() || self.generation.get() != generation {
            return;
        }

        let Some(converted) = self.convert(value) else {
            return;
        };
        log::trace!(
            "Dispatching '{converted}' to binding field '{}'",
            self.field.name()
        );

        if !self.field.invoke(&converted) {
            log::trace!(
                "Dropped {} value for binding field {:?}",
                converted.kind(),
                self.field
            );
        }
    }
}

/// Routes one property of an [`ObservableContext`] into one
/// [`BindingField`].
///
/// The binder borrows its context and only holds a subscription while
/// listening. Every delivered value goes through the binder's
/// [`Converter`] before it reaches the field. Dropping a listening
/// binder unsubscribes it.
pub struct Binder<'c> {
    context: Option<&'c dyn ObservableContext>,
    property: Option<PropertyName>,
    subscription: Option<(&'c dyn ObservableContext, SubscriptionId)>,
    shared: Rc<Shared>,
}

impl<'c> Binder<'c> {
    /// Creates an unbound binder dispatching to `field`.
    pub fn new(field: BindingField) -> Self {
        Self {
            context: None,
            property: None,
            subscription: None,
            shared: Rc::new(Shared {
                field,
                converter: RefCell::new(Converter::new()),
                generation: Cell::new(0),
                listening: Cell::new(false),
            }),
        }
    }

    /// Replaces the converter values are routed through.
    pub fn with_converter(self, converter: Converter) -> Self {
        *self.shared.converter.borrow_mut() = converter;
        self
    }

    /// Gets the binding field of this binder.
    #[inline]
    pub fn field(&self) -> &BindingField {
        &self.shared.field
    }

    /// Gets the configured context.
    #[inline]
    pub fn context(&self) -> Option<&'c dyn ObservableContext> {
        self.context
    }

    /// Sets the context to listen to.
    ///
    /// A listening binder moves its subscription to the new context.
    pub fn set_context(&mut self, context: &'c dyn ObservableContext) -> Result<(), Error> {
        let listening = self.is_listening();
        self.stop_listening();

        self.context = Some(context);
        if listening {
            self.start_listening()?;
        }

        Ok(())
    }

    /// Gets the property the binding field is mapped to.
    #[inline]
    pub fn property_name(&self) -> Option<&PropertyName> {
        self.property.as_ref()
    }

    /// Maps the binding field named `field` to `property`.
    ///
    /// A listening binder re-subscribes under the new name before this
    /// returns.
    pub fn set_property_name(
        &mut self,
        field: &str,
        property: impl Into<PropertyName>,
    ) -> Result<(), Error> {
        if field != self.shared.field.name() {
            return Err(Error::UnknownBindingField(field.to_owned()));
        }

        let property = property.into();
        if self.property.as_ref() == Some(&property) {
            return Ok(());
        }

        let listening = self.is_listening();
        self.stop_listening();

        log::debug!("Mapping binding field '{field}' to property '{property}'");
        self.property = Some(property);

        if listening {
            self.start_listening()?;
        }

        Ok(())
    }

    /// Gets the current [`BinderState`].
    #[inline]
    pub fn state(&self) -> BinderState {
        match self.subscription {
            Some(..) => BinderState::Listening,
            None => BinderState::Unbound,
        }
    }

    /// Whether the binder is currently listening.
    #[inline]
    pub fn is_listening(&self) -> bool {
        self.subscription.is_some()
    }

    /// Subscribes to the configured property of the context.
    ///
    /// Does nothing if already listening.
    pub fn start_listening(&mut self) -> Result<(), Error> {
        if self.is_listening() {
            return Ok(());
        }

        let context = self.context.ok_or(Error::MissingContext)?;
        let property = self
            .property
            .clone()
            .ok_or_else(|| Error::MissingPropertyName(self.shared.field.name().to_owned()))?;

        let generation = self.shared.generation.get().wrapping_add(1);
        self.shared.generation.set(generation);
        self.shared.listening.set(true);

        let shared = Rc::downgrade(&self.shared);
        let id = context.subscribe(
            property,
            Rc::new(move |value: &Union| {
                if let Some(shared) = shared.upgrade() {
                    shared.dispatch(generation, value);
                }
            }),
        );

        log::debug!(
            "Binding field '{}' is listening as {id:?}",
            self.shared.field.name()
        );
        self.subscription = Some((context, id));

        Ok(())
    }

    /// Removes the subscription, if any.
    ///
    /// No notification reaches the binding field after this returns,
    /// including ones already in flight for the current mutation.
    pub fn stop_listening(&mut self) {
        if let Some((context, id)) = self.subscription.take() {
            self.shared.listening.set(false);
            context.unsubscribe(id);

            log::debug!(
                "Binding field '{}' stopped listening",
                self.shared.field.name()
            );
        }
    }

    /// Dispatches the current value of the property once.
    ///
    /// This works regardless of the listening state. Returns whether the
    /// binding field was invoked, which it is not while the converter is
    /// mutably borrowed.
    pub fn refresh(&self) -> Result<bool, Error> {
        let context = self.context.ok_or(Error::MissingContext)?;
        let property = self
            .property
            .as_ref()
            .ok_or_else(|| Error::MissingPropertyName(self.shared.field.name().to_owned()))?;

        let Some(value) = context.get(property) else {
            return Ok(false);
        };

        Ok(self
            .shared
            .convert(&value)
            .is_some_and(|converted| self.shared.field.invoke(&converted)))
    }

    /// Borrows the converter.
    #[inline]
    pub fn converter(&self) -> Ref<'_, Converter> {
        self.shared.converter.borrow()
    }

    /// Mutably borrows the converter.
    ///
    /// Notifications arriving while the borrow is alive are dropped.
    ///
    /// # Panics
    ///
    /// Panics while a borrow from [`Binder::converter`] is alive.
    #[inline]
    pub fn converter_mut(&self) -> RefMut<'_, Converter> {
        self.shared.converter.borrow_mut()
    }
}

impl Drop for Binder<'_> {
    fn drop(&mut self) {
        self.stop_listening();
    }
}

impl fmt::Debug for Binder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binder")
            .field("field", &self.shared.field)
            .field("property", &self.property)
            .field("state", &self.state())
            .finish()
    }
}
