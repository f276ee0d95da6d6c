//! Both demonstrations, in order: the shape manager, then the phone factories.
//!
//! Run with: cargo run --bin patterns_demo

use std::io;

use oop_patterns::{demo, logging};

fn main() -> oop_patterns::Result<()> {
    logging::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    demo::run_all(&mut out)
}
