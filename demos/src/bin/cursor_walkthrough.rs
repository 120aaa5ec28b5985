// demos/src/bin/cursor_walkthrough.rs
//
// This demo walks through the forward list's positional protocol and value
// semantics, logging each step.
//
// Operations demonstrated:
// - `push_front()` / `pop_front()`: O(1) edits at the front
// - `before_begin_mut()` + `insert_after()`: insertion through the sentinel
// - `erase_after()`: removal while walking with a cursor
// - `clone_from()`: copy-and-swap assignment
// - lexicographic comparison and JSON serialization
//
// Run this demo with:
//   cargo run --bin cursor_walkthrough
//   (from the demos directory)

use forwardlist_rs::{ForwardList, ForwardListError};
use tracing::{Level, info, warn};

fn main() {
    // Set up logging; TRACE shows the list's own bulk-operation events.
    tracing_subscriber::fmt().with_max_level(Level::TRACE).init();
    info!("Forward List Cursor Walkthrough");

    demo_front_operations();

    if let Err(err) = demo_positional_edits() {
        warn!("positional edit failed: {err}");
    }

    demo_value_semantics();
    demo_serialization();
}

fn demo_front_operations() {
    info!("\n=== Front Operations ===");

    let mut list = ForwardList::new();
    list.push_front(5);
    list.push_front(3);
    info!("After push_front(5), push_front(3): {:?} (len {})", list, list.len());

    let popped = list.pop_front();
    info!("pop_front() -> {:?}, remaining {:?}", popped, list);

    list.pop_front();
    info!("pop_front() on the last element leaves {:?}", list);
    info!("pop_front() on an empty list -> {:?}", list.pop_front());
}

fn demo_positional_edits() -> Result<(), ForwardListError> {
    info!("\n=== Positional Edits ===");

    let mut list: ForwardList<u32> = (1..=10).collect();
    info!("Starting list: {:?}", list);

    // A new first element goes after the sentinel.
    list.before_begin_mut().insert_after(0)?;
    info!("insert_after(before_begin, 0): {:?}", list);

    // Remove every multiple of three, looking one element ahead.
    let mut cursor = list.before_begin_mut();
    let mut removed = Vec::new();
    while let Some(next) = cursor.peek_next().map(|value| *value) {
        if next % 3 == 0 {
            removed.push(cursor.erase_after()?);
        } else {
            cursor.move_next()?;
        }
    }
    info!("Removed multiples of three: {:?}", removed);
    info!("List is now {:?} (len {})", list, list.len());

    // Double every element in place and append a marker after the last one.
    let mut cursor = list.begin_mut();
    loop {
        if let Some(value) = cursor.current() {
            *value *= 2;
        }
        if cursor.peek_next().is_none() {
            cursor.insert_after(u32::MAX)?;
            break;
        }
        cursor.move_next()?;
    }
    info!("Doubled with trailing marker: {:?}", list);

    // Stepping past the end is reported instead of ignored.
    let mut end = list.end();
    match end.move_next() {
        Ok(()) => info!("unexpectedly advanced past the end"),
        Err(err) => info!("Advancing the end cursor: {err}"),
    }

    Ok(())
}

fn demo_value_semantics() {
    info!("\n=== Value Semantics ===");

    let original = ForwardList::from(["alpha", "beta", "gamma"]);
    let mut copy = original.clone();
    copy.push_front("omega");
    info!("original {:?}, modified copy {:?}", original, copy);

    let mut target = ForwardList::from(["stale"]);
    target.clone_from(&original);
    info!("clone_from(original) -> {:?}", target);
    info!("original == target: {}", original == target);

    let short = ForwardList::from([1, 2]);
    let long = ForwardList::from([1, 2, 3]);
    let diverging = ForwardList::from([1, 3]);
    info!("{:?} < {:?}: {}", short, long, short < long);
    info!("{:?} < {:?}: {}", long, diverging, long < diverging);
    info!("{:?} >= {:?}: {}", diverging, long, diverging >= long);
}

fn demo_serialization() {
    info!("\n=== Serialization ===");

    let list = ForwardList::from([10, 20, 30]);
    match serde_json::to_string(&list) {
        Ok(json) => {
            info!("JSON: {json}");
            match serde_json::from_str::<ForwardList<i32>>(&json) {
                Ok(restored) => info!("Restored {:?}, equal: {}", restored, restored == list),
                Err(err) => warn!("failed to restore list: {err}"),
            }
        }
        Err(err) => warn!("failed to serialize list: {err}"),
    }
}
