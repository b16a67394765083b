use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread;

use behavior_tree::builder::{leaf, selector, sequence};
use behavior_tree::{Error, Node, Status, Tick};

/// Leaf that sends `id` on `out` before returning `status`.
fn emit(out: &mpsc::Sender<u32>, id: u32, status: Status) -> Node {
    let out = Mutex::new(out.clone());
    leaf(move || {
        out.lock().unwrap().send(id).unwrap();
        Ok(status)
    })
}

/// Ticks `tree` on another thread, then sends `done`; returns everything sent plus the result.
fn tick_on_thread(
    tree: Node,
    out: mpsc::Sender<u32>,
    rx: mpsc::Receiver<u32>,
    done: u32,
) -> (Vec<u32>, Result<Status, Error>) {
    let handle = thread::spawn(move || {
        let result = tree.tick();
        out.send(done).unwrap();
        result
    });
    let result = handle.join().unwrap();
    (rx.try_iter().collect(), result)
}

#[test]
fn sequence_ticks_children_in_order() {
    let (tx, rx) = mpsc::channel();
    let tree = sequence(vec![
        emit(&tx, 1, Status::Success),
        emit(&tx, 2, Status::Success),
        emit(&tx, 3, Status::Success),
    ]);

    let (order, result) = tick_on_thread(tree, tx, rx, 4);

    assert_eq!(order, vec![1, 2, 3, 4]);
    assert!(matches!(result, Ok(Status::Success)));
}

#[test]
fn sequence_stops_after_failing_child() {
    let (tx, rx) = mpsc::channel();
    let tree = sequence(vec![
        emit(&tx, 1, Status::Success),
        emit(&tx, 2, Status::Failure),
        emit(&tx, 99, Status::Success),
    ]);

    let (order, result) = tick_on_thread(tree, tx, rx, 3);

    assert_eq!(order, vec![1, 2, 3]);
    assert!(matches!(result, Ok(Status::Failure)));
}

#[test]
fn sequence_with_absent_child_reports_error() {
    let (tx, rx) = mpsc::channel();
    let first = emit(&tx, 1, Status::Success);
    let last = emit(&tx, 99, Status::Success);
    let tree = Node::from_fn(move || {
        let tick: Tick = Arc::new(behavior_tree::sequence);
        (Some(tick), vec![Some(first.clone()), None, Some(last.clone())])
    });

    let (order, result) = tick_on_thread(tree, tx, rx, 2);

    assert_eq!(order, vec![1, 2]);
    assert!(matches!(result, Err(Error::AbsentChild { index: 1, .. })));
}

#[test]
fn sequence_without_children_succeeds() {
    let tree = sequence(Vec::new());
    assert!(matches!(tree.tick(), Ok(Status::Success)));
}

/// A door that takes three ticks to open; state lives outside the node.
fn open_door(progress: &Arc<Mutex<u32>>) -> Node {
    let progress = Arc::clone(progress);
    leaf(move || {
        let mut progress = progress.lock().unwrap();
        *progress += 1;
        if *progress < 3 {
            Ok(Status::Running)
        } else {
            Ok(Status::Success)
        }
    })
}

#[test]
fn running_child_is_resumed_on_later_ticks() {
    let progress = Arc::new(Mutex::new(0));
    let entered = Arc::new(Mutex::new(false));
    let tree = sequence(vec![open_door(&progress), {
        let entered = Arc::clone(&entered);
        leaf(move || {
            *entered.lock().unwrap() = true;
            Ok(Status::Success)
        })
    }]);

    assert!(matches!(tree.tick(), Ok(Status::Running)));
    assert!(matches!(tree.tick(), Ok(Status::Running)));
    assert!(!*entered.lock().unwrap());
    assert!(matches!(tree.tick(), Ok(Status::Success)));
    assert!(*entered.lock().unwrap());
}

#[test]
fn shape_can_change_between_ticks() {
    let armed = Arc::new(Mutex::new(false));
    let tree = {
        let armed = Arc::clone(&armed);
        let disarmed = leaf(|| Ok(Status::Failure));
        let ready = leaf(|| Ok(Status::Success));
        Node::from_fn(move || {
            let child = if *armed.lock().unwrap() {
                ready.clone()
            } else {
                disarmed.clone()
            };
            let tick: Tick = Arc::new(behavior_tree::selector);
            (Some(tick), vec![Some(child)])
        })
    };

    assert!(matches!(tree.tick(), Ok(Status::Failure)));
    *armed.lock().unwrap() = true;
    assert!(matches!(tree.tick(), Ok(Status::Success)));
}

#[test]
fn nested_error_propagates_to_root() {
    let tree = selector(vec![
        leaf(|| Ok(Status::Failure)),
        sequence(vec![
            leaf(|| Ok(Status::Success)),
            leaf(|| Err(Error::tick("battery low"))),
        ]),
        leaf(|| Ok(Status::Success)),
    ]);

    let err = tree.tick().unwrap_err();
    assert_eq!(err.to_string(), "battery low");
}

#[test]
fn one_shot_ticks_are_independent_across_threads() {
    let tree = sequence(vec![leaf(|| Ok(Status::Success)), leaf(|| Ok(Status::Running))]);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let tree = tree.clone();
            thread::spawn(move || tree.tick())
        })
        .collect();

    for handle in handles {
        assert!(matches!(handle.join().unwrap(), Ok(Status::Running)));
    }
}
