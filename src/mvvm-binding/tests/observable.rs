use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use mvvm_binding::{ObservableContext, ObservableObject, PropertyName, SubscriptionId, Union};

fn counter() -> (Rc<Cell<usize>>, Rc<dyn Fn(&Union)>) {
    let count = Rc::new(Cell::new(0));
    let c = count.clone();
    (count, Rc::new(move |_: &Union| c.set(c.get() + 1)))
}

#[test]
fn set_only_notifies_on_change() {
    let model = ObservableObject::new().with_property("Value", 1i32);
    let (count, listener) = counter();
    model.subscribe("Value".into(), listener);

    assert!(!model.set("Value", 1i32));
    assert_eq!(count.get(), 0);

    assert!(model.set("Value", 2i32));
    assert_eq!(count.get(), 1);

    // A different kind with equal bits is still a change.
    assert!(model.set("Value", 2u32));
    assert_eq!(count.get(), 2);
}

#[test]
fn notify_forces_a_notification() {
    let model = ObservableObject::new().with_property("Value", 1i32);
    let seen = Rc::new(RefCell::new(Vec::new()));

    let sink = seen.clone();
    model.subscribe(
        "Value".into(),
        Rc::new(move |v: &Union| sink.borrow_mut().push(v.clone())),
    );

    model.notify(&"Value".into());
    model.notify(&"Unknown".into());
    assert_eq!(*seen.borrow(), [Union::from(1i32)]);
}

#[test]
fn listeners_are_filtered_by_property() {
    let model = ObservableObject::new();
    let (a, listener_a) = counter();
    let (b, listener_b) = counter();

    model.subscribe("A".into(), listener_a);
    model.subscribe("B".into(), listener_b);

    model.set("A", true);
    model.set("A", false);
    model.set("B", true);

    assert_eq!((a.get(), b.get()), (2, 1));
}

#[test]
fn names_match_exactly() {
    let model = ObservableObject::new();
    let (count, listener) = counter();
    model.subscribe("Value".into(), listener);

    model.set("value", 1i32);
    model.set("Value ", 1i32);
    assert_eq!(count.get(), 0);
}

#[test]
fn unsubscribe() {
    let model = ObservableObject::new();
    let (count, listener) = counter();

    let id = model.subscribe("Value".into(), listener);
    assert!(model.unsubscribe(id));
    assert!(!model.unsubscribe(id));
    assert!(!model.unsubscribe(SubscriptionId::new(999)));

    model.set("Value", 1i32);
    assert_eq!(count.get(), 0);
}

#[test]
fn unsubscribe_during_dispatch_suppresses_later_listeners() {
    let model = Rc::new(ObservableObject::new());
    let (count, second) = counter();

    let victim = Rc::new(Cell::new(None));
    let (m, v) = (Rc::downgrade(&model), victim.clone());
    model.subscribe(
        "Value".into(),
        Rc::new(move |_: &Union| {
            if let (Some(model), Some(id)) = (m.upgrade(), v.get()) {
                model.unsubscribe(id);
            }
        }),
    );
    victim.set(Some(model.subscribe("Value".into(), second)));

    model.set("Value", 1i32);
    assert_eq!(count.get(), 0);
    assert_eq!(model.listener_count(&"Value".into()), 1);
}

#[test]
fn properties_keep_definition_order() {
    let model = ObservableObject::new()
        .with_property("Z", 1i32)
        .with_property("A", 2i32);
    model.set("M", 3i32);
    model.set("Z", 4i32);

    let names: Vec<_> = model
        .properties()
        .into_iter()
        .map(|(name, _)| name.to_string())
        .collect();
    assert_eq!(names, ["Z", "A", "M"]);
    assert_eq!(model.get(&PropertyName::new("Z")), Some(Union::from(4i32)));
}

#[test]
fn property_names() {
    let a = PropertyName::new("IntField");
    let b = PropertyName::from(String::from("IntField"));

    assert_eq!(a, b);
    assert_eq!(a.hash_value(), b.hash_value());
    assert_ne!(a, PropertyName::new("intField"));
    assert_eq!(a.as_str(), "IntField");
    assert_eq!(format!("{a:?}"), "\"IntField\"");
}

#[test]
fn unsubscribing_keeps_remaining_order() {
    let model = ObservableObject::new();
    let order = Rc::new(RefCell::new(Vec::new()));

    let ids: Vec<_> = (0..3)
        .map(|n| {
            let order = order.clone();
            model.subscribe(
                "Value".into(),
                Rc::new(move |_: &Union| order.borrow_mut().push(n)),
            )
        })
        .collect();

    assert!(model.unsubscribe(ids[1]));
    model.set("Value", 1i32);

    assert_eq!(*order.borrow(), [0, 2]);
    assert_eq!(model.listener_count(&"Value".into()), 2);
}
