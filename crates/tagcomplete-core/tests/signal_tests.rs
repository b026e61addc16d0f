//! Integration tests for the signal/slot system.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use tagcomplete_core::{ConnectionId, Signal};

#[test]
fn slots_run_in_connection_order() {
    let signal = Signal::<&'static str>::new();
    let order = Arc::new(Mutex::new(Vec::new()));

    for label in ["first", "second", "third"] {
        let order = order.clone();
        signal.connect(move |arg| {
            order.lock().push(format!("{label}:{arg}"));
        });
    }

    signal.emit("go");

    assert_eq!(
        *order.lock(),
        vec!["first:go", "second:go", "third:go"]
    );
}

#[test]
fn reconnected_slot_runs_after_older_slots() {
    let signal = Signal::<&'static str>::new();
    let order = Arc::new(Mutex::new(Vec::new()));

    let connect = |label: &'static str| {
        let order = order.clone();
        signal.connect(move |_| order.lock().push(label))
    };

    let a = connect("A");
    connect("B");
    assert!(signal.disconnect(a));
    connect("C");
    connect("D");

    signal.emit("go");

    assert_eq!(*order.lock(), vec!["B", "C", "D"]);
}

#[test]
fn disconnecting_one_slot_keeps_the_others() {
    let signal = Signal::<()>::new();
    let counter = Arc::new(AtomicUsize::new(0));

    let ids: Vec<ConnectionId> = (0..3)
        .map(|_| {
            let counter = counter.clone();
            signal.connect(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            })
        })
        .collect();

    assert!(signal.disconnect(ids[1]));
    signal.emit(());

    assert_eq!(counter.load(Ordering::SeqCst), 2);
    assert_eq!(signal.connection_count(), 2);
}

#[test]
fn slot_connected_during_emit_runs_from_next_emit() {
    let signal = Arc::new(Signal::<u32>::new());
    let late_hits = Arc::new(AtomicUsize::new(0));
    let connected = Arc::new(AtomicUsize::new(0));

    let signal_clone = signal.clone();
    let late_hits_clone = late_hits.clone();
    let connected_clone = connected.clone();
    signal.connect(move |_| {
        if connected_clone.fetch_add(1, Ordering::SeqCst) == 0 {
            let late_hits = late_hits_clone.clone();
            signal_clone.connect(move |_| {
                late_hits.fetch_add(1, Ordering::SeqCst);
            });
        }
    });

    signal.emit(1);
    assert_eq!(late_hits.load(Ordering::SeqCst), 0);

    signal.emit(2);
    assert_eq!(late_hits.load(Ordering::SeqCst), 1);
}

#[test]
fn default_signal_is_unblocked_and_empty() {
    let signal: Signal<String> = Signal::default();
    assert!(!signal.is_blocked());
    assert_eq!(signal.connection_count(), 0);
    signal.emit("nobody listening".to_string());
}
