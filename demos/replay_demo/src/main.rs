//! Headless demo: traces a gesture with synthetic pointer events, runs the
//! wrong-password / auto-reset cycle on a virtual clock, then replays the
//! password string without pointer input.

use std::rc::Rc;

use anyhow::Result;
use gridlock_core::{GridConfig, PointerEvent, Rect, TestClock};
use gridlock_widget::{PasswordGrid, Phase};
use web_time::Duration;

fn main() -> Result<()> {
    env_logger::init();

    let clock = TestClock::new();
    let mut view = PasswordGrid::with_clock(
        GridConfig::default(),
        Rect::new(0.0, 0.0, 320.0, 320.0),
        Rc::new(clock.clone()),
    );
    view.set_on_password(Rc::new(|password| {
        log::info!("listener notified: {password}");
    }));

    // Trace 1 -> 2 -> 3 -> 6 -> 9 through the node centers.
    let path = [1u16, 2, 3, 6, 9];
    let points: Vec<_> = path.iter().filter_map(|&i| view.node_center(i)).collect();
    let first = *points.first().expect("node 1 exists");
    view.handle_pointer(&PointerEvent::down(first));
    let mut last = first;
    for &point in &points[1..] {
        view.handle_pointer(&PointerEvent::moved(point));
        last = point;
    }
    let entered = view
        .handle_pointer(&PointerEvent::up(last))
        .expect("gesture completed");
    println!("entered password: {}", entered.password);
    println!("polyline: {:?}", view.selection_polyline());

    // Pretend validation failed; lock, then let the reset deadline fire.
    view.show_wrong_password_ui_and_reset_after_with_end_block(
        1.0,
        Rc::new(|| println!("reset finished")),
    );
    println!("phase after failed validation: {:?}", view.phase());
    clock.advance(Duration::from_secs_f32(1.5));
    view.tick();
    assert_eq!(view.phase(), Phase::Idle);
    println!("password after reset: {:?}", view.current_password());

    // Replay the same password programmatically, digit grammar this time.
    view.show_gesture_with_password("12369");
    println!("replayed password: {}", view.current_password());

    view.clear_on_password();
    Ok(())
}
