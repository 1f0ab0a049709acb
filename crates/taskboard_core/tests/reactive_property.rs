use std::cell::RefCell;
use std::rc::Rc;
use taskboard_core::{ChangeListener, ReactiveProperty};

type Calls = Rc<RefCell<Vec<(Option<String>, Option<String>)>>>;

fn recorder(calls: &Calls) -> ChangeListener<String> {
    let calls = Rc::clone(calls);
    Rc::new(move |new: Option<&String>, old: Option<&String>| {
        calls.borrow_mut().push((new.cloned(), old.cloned()));
    })
}

#[test]
fn same_value_triggers_no_listener() {
    let first: Calls = Rc::default();
    let second: Calls = Rc::default();
    let property = ReactiveProperty::new().with_listeners([recorder(&first), recorder(&second)]);
    assert_eq!(property.listener_count(), 2);

    property.set(Some("a".to_string()));
    property.set(Some("a".to_string()));
    property.delete();
    property.delete();

    assert_eq!(first.borrow().len(), 2);
    assert_eq!(second.borrow().len(), 2);
}

#[test]
fn each_change_notifies_every_listener_once_with_new_and_old() {
    let first: Calls = Rc::default();
    let second: Calls = Rc::default();
    let property = ReactiveProperty::new().with_listeners([recorder(&first), recorder(&second)]);

    assert!(property.set(Some("draft".to_string())));
    assert!(property.set(Some("final".to_string())));

    let expected = vec![
        (Some("draft".to_string()), None),
        (Some("final".to_string()), Some("draft".to_string())),
    ];
    assert_eq!(*first.borrow(), expected);
    assert_eq!(*second.borrow(), expected);
    assert_eq!(property.get(), Some("final".to_string()));
}

#[test]
fn delete_is_equivalent_to_setting_absent() {
    let via_delete: Calls = Rc::default();
    let via_set: Calls = Rc::default();
    let deleted = ReactiveProperty::with_value("x".to_string()).with_listeners([recorder(&via_delete)]);
    let cleared = ReactiveProperty::with_value("x".to_string()).with_listeners([recorder(&via_set)]);

    assert!(deleted.delete());
    assert!(cleared.set(None));

    assert_eq!(*via_delete.borrow(), *via_set.borrow());
    assert_eq!(*via_delete.borrow(), vec![(None, Some("x".to_string()))]);
    assert!(!deleted.is_set());
}

#[test]
fn listener_can_write_back_without_deadlocking() {
    let property = Rc::new(ReactiveProperty::<u32>::new());
    let weak = Rc::downgrade(&property);
    property.add_listener(move |new, _| {
        if let (Some(property), Some(value)) = (weak.upgrade(), new.copied()) {
            if value > 10 {
                property.set(Some(10));
            }
        }
    });

    property.set(Some(42));
    assert_eq!(property.get(), Some(10));
}
