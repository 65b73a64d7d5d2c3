//! Four-bar linkage probe: everything a renderer would consume.
//!
//! Purpose
//! - Show the hand-off surface: per-frame positions, the edge list, the
//!   driver id, and the tracked set, with no drawing involved.
//! - Give a quick plausibility check on the coupler path of the textbook
//!   Grashof four-bar.

use linkage::mechanisms::four_bar;

fn main() {
    let mut l = four_bar(1.0).expect("four-bar builds");

    println!("vertices={} driver={:?}", l.len(), l.driver_id());
    println!("edges={:?}", l.edges());
    println!("tracked={:?}", l.tracked_ids());

    for frame in (0u64..=600).step_by(100) {
        l.advance(frame);
        let coupler = l.positions()[3];
        println!("frame={frame:4} coupler=({:+.4}, {:+.4})", coupler.x, coupler.y);
    }
}
