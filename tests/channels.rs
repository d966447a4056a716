mod common;

use common::init_tracing;

use lazyseq::{enqueue, Seq};

use std::thread;
use std::time::Duration;

#[test]
fn test_channel() {
    init_tracing();

    const fn id<X>(x: X) -> X {
        x
    }

    let (tx, rx) = crossbeam::channel::unbounded();

    // a silly way to feed the channel with 1, 2, 3, 4, 5, 6
    let fill_channel = thread::spawn(move || {
        let ascending = Seq::iterate(1, |n: &usize| n + 1);

        for n in ascending.take(6) {
            tx.send(n).unwrap();
        }
    });

    let received = Seq::from_receiver(rx).map(id);
    let doubled = received.map(|n| n * 2);

    assert_eq!(doubled.take(2), vec![2, 4]);
    assert_eq!(received.skip(4).take(10), vec![5, 6]);
    // everything received is replayed
    assert_eq!(doubled.take(10), vec![2, 4, 6, 8, 10, 12]);

    fill_channel.join().unwrap();
}

#[test]
fn test_events() {
    const RUNS_REFERENCE: usize = 9;

    const INPUT_LATENCY: u64 = 10; // in millis

    #[derive(Copy, Clone, Debug, PartialEq)]
    enum Event {
        ShiftDepressed,
        ShiftReleased,
        Key(u8),
    }

    #[derive(Copy, Clone, Debug, PartialEq)]
    enum Mode {
        Default,
        Shifted,
    }

    let (tevents, events) = crossbeam::channel::bounded(100);

    let input_simulator = thread::spawn(move || {
        let events = [
            Event::Key(1),
            Event::ShiftDepressed,
            Event::Key(1),
            Event::Key(5),
            Event::ShiftReleased,
            Event::Key(5),
            Event::Key(7),
            Event::ShiftReleased,
            Event::Key(3),
            Event::ShiftDepressed,
            Event::Key(0),
        ];

        for event in events {
            thread::sleep(Duration::from_millis(INPUT_LATENCY));
            tevents.send(event).unwrap();
        }
    });

    let events = Seq::from_receiver(events);

    fn key_action(c: u8) -> bool {
        c != 0
    }

    // the mode after each event together with what the event's handling wrote, if anything
    let transitions = events.scan(
        (Mode::Default, None::<bool>),
        |(mode, _), event| match (mode, event) {
            (Mode::Default, Event::ShiftDepressed) => (Mode::Shifted, Some(true)),
            (Mode::Default, Event::ShiftReleased) => (Mode::Default, None),
            (Mode::Shifted, Event::ShiftDepressed) => (Mode::Shifted, None),
            (Mode::Shifted, Event::ShiftReleased) => (Mode::Default, Some(true)),
            (mode, Event::Key(c)) => (*mode, Some(key_action(c))),
        },
    );
    let outputs = transitions.flat_map(|(_, output)| output);

    let runs = outputs.take_while(|success| *success).take(100).len();

    input_simulator.join().unwrap();

    assert_eq!(runs, RUNS_REFERENCE);
    assert_eq!(transitions.nth(9).map(|(mode, _)| mode), Ok(Mode::Shifted));
}

#[test]
fn test_receiver_late_messages() {
    let (tx, rx) = crossbeam::channel::unbounded();
    enqueue!(tx, [3, 1, 4]);

    let seq = Seq::from_receiver(rx);
    assert_eq!(seq.take(3), vec![3, 1, 4]);

    let late = thread::spawn(move || {
        enqueue!(tx, [1, 5]);
    });
    late.join().unwrap();

    assert_eq!(seq.take(10), vec![3, 1, 4, 1, 5]);
}
