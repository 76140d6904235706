use flight_core::{Button, CvarLin, CvarLinWrap, IncDecWidget, Listeners, ValueChanged};
use std::cell::RefCell;
use std::rc::Rc;

fn recorder(widget: &mut IncDecWidget) -> Rc<RefCell<Vec<f64>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    widget.on_change(move |ev: &ValueChanged| sink.borrow_mut().push(ev.value));
    seen
}

#[test]
fn press_steps_cvar_and_notifies_new_value() {
    let mut w = IncDecWidget::new(CvarLinWrap::new(0.0, 360.0, 0.0, 5.0, "Heading").unwrap());
    let seen = recorder(&mut w);
    assert_eq!(w.press(Button::Decrement), 355.0);
    assert_eq!(w.press(Button::Increment), 0.0);
    assert_eq!(*seen.borrow(), vec![355.0, 0.0]);
}

#[test]
fn press_at_bound_still_notifies_unchanged_value() {
    let mut w = IncDecWidget::new(CvarLin::new(-90.0, 90.0, 90.0, 5.0, "Pitch").unwrap());
    let seen = recorder(&mut w);
    w.press(Button::Increment);
    assert_eq!(w.value(), 90.0);
    assert_eq!(*seen.borrow(), vec![90.0]);
}

#[test]
fn sync_sets_without_notifying() {
    let mut w = IncDecWidget::new(CvarLin::new(-90.0, 90.0, 0.0, 5.0, "Pitch").unwrap());
    let seen = recorder(&mut w);
    w.sync(-45.0).unwrap();
    assert_eq!(w.value(), -45.0);
    assert!(w.sync(100.0).is_err());
    assert_eq!(w.value(), -45.0);
    assert!(seen.borrow().is_empty());
}

#[test]
fn label_and_display_derive_from_cvar() {
    let w = IncDecWidget::new(CvarLin::new(-90.0, 90.0, 46.20555556, 0.1, "Latitude").unwrap());
    assert_eq!(w.label(), "Latitude");
    assert_eq!(w.display().trim(), "46.2056");
}

#[test]
fn removed_listener_is_not_called() {
    let mut w = IncDecWidget::new(CvarLin::new(0.0, 10.0, 0.0, 1.0, "Count").unwrap());
    let calls = Rc::new(RefCell::new(0));
    let c = calls.clone();
    let id = w.on_change(move |_| *c.borrow_mut() += 1);
    w.press(Button::Increment);
    assert!(w.remove_listener(id));
    assert!(!w.remove_listener(id));
    w.press(Button::Increment);
    assert_eq!(*calls.borrow(), 1);
}

#[test]
fn listeners_fire_in_subscription_order() {
    let order = Rc::new(RefCell::new(Vec::new()));
    let mut listeners: Listeners<u8> = Listeners::new();
    for tag in ["first", "second"] {
        let o = order.clone();
        listeners.subscribe(move |v: &u8| o.borrow_mut().push(format!("{tag}:{v}")));
    }
    assert_eq!(listeners.len(), 2);
    listeners.emit(&7);
    assert_eq!(*order.borrow(), vec!["first:7", "second:7"]);
}
