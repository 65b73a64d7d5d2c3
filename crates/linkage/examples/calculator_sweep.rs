//! Mechanical-calculator sweep: squarer and reciprocal curves as tables.
//!
//! Purpose
//! - Drive the two composed calculators over a full crank period and
//!   print input/output pairs, the same numbers a trail renderer would
//!   plot.
//! - Logs (transient infeasibilities, if any) go through the fmt
//!   subscriber.

use linkage::mechanisms::{reciprocal, squarer};
use tracing_subscriber::fmt::SubscriberBuilder;

fn main() {
    SubscriberBuilder::default().with_target(false).init();

    let mut sq = squarer().expect("squarer builds");
    let probe = *sq.tracked_ids().last().expect("squarer tracks its output");
    println!("squarer: {} vertices", sq.len());
    println!("{:>8} {:>10} {:>10}", "frame", "x", "x^2");
    for frame in (0u64..=240).step_by(40) {
        sq.advance(frame);
        let p = sq.position(probe);
        println!("{frame:>8} {:>10.5} {:>10.5}", p.x, p.y);
    }

    let mut rec = reciprocal().expect("reciprocal builds");
    let probe = *rec.tracked_ids().last().expect("reciprocal tracks its output");
    println!("reciprocal: {} vertices", rec.len());
    println!("{:>8} {:>10} {:>10}", "frame", "x", "3/x");
    for frame in (0u64..=240).step_by(40) {
        rec.advance(frame);
        let p = rec.position(probe);
        println!("{frame:>8} {:>10.5} {:>10.5}", p.x, p.y);
    }
}
