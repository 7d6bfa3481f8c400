use guise_core::events::{Event, EventKind, Propagation, ShellEvents};
use guise_filters::ScrollThrottle;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

fn throttle() -> Rc<RefCell<ScrollThrottle>> {
    Rc::new(RefCell::new(
        ScrollThrottle::new(3, Duration::from_millis(18)).unwrap(),
    ))
}

#[test]
fn attached_filter_suppresses_scrolls_for_later_listeners() {
    let mut events = ShellEvents::new();
    let filter = throttle();
    ScrollThrottle::attach(&filter, &mut events);

    let seen = Rc::new(RefCell::new(Vec::new()));
    {
        let seen = seen.clone();
        events.add_listener(move |event| {
            seen.borrow_mut().push(event.timestamp_ms);
            Propagation::Propagate
        });
    }

    for ts in (0..=60).step_by(5) {
        events.dispatch(&Event::scroll(ts, 0.0, -1.0));
    }

    // Downstream sees only the kept events.
    assert_eq!(*seen.borrow(), vec![10, 40]);
}

#[test]
fn non_scroll_events_reach_later_listeners_untouched() {
    let mut events = ShellEvents::new();
    let filter = throttle();
    ScrollThrottle::attach(&filter, &mut events);

    let seen = Rc::new(RefCell::new(0u32));
    {
        let seen = seen.clone();
        events.add_listener(move |_| {
            *seen.borrow_mut() += 1;
            Propagation::Propagate
        });
    }

    for ts in 0..5 {
        let verdict = events.dispatch(&Event::new(EventKind::PointerMove { x: 1.0, y: 2.0 }, ts));
        assert_eq!(verdict, Propagation::Propagate);
    }
    assert_eq!(*seen.borrow(), 5);
}

#[test]
fn detach_resets_state_for_the_next_activation() {
    let mut events = ShellEvents::new();
    let filter = throttle();
    let id = ScrollThrottle::attach(&filter, &mut events);

    // Two suppressed events: the counter is one short of a keep.
    assert_eq!(
        events.dispatch(&Event::scroll(0, 0.0, -1.0)),
        Propagation::Stop
    );
    assert_eq!(
        events.dispatch(&Event::scroll(5, 0.0, -1.0)),
        Propagation::Stop
    );

    ScrollThrottle::detach(&filter, &mut events, id);

    // While detached the stream flows untouched.
    assert_eq!(
        events.dispatch(&Event::scroll(50, 0.0, -1.0)),
        Propagation::Propagate
    );

    // Reattached: the pattern restarts from a zero counter, so the third
    // event is the first keep even though the pre-detach counter was at 2.
    ScrollThrottle::attach(&filter, &mut events);
    assert_eq!(
        events.dispatch(&Event::scroll(100, 0.0, -1.0)),
        Propagation::Stop
    );
    assert_eq!(
        events.dispatch(&Event::scroll(105, 0.0, -1.0)),
        Propagation::Stop
    );
    assert_eq!(
        events.dispatch(&Event::scroll(110, 0.0, -1.0)),
        Propagation::Propagate
    );
}
