//! Pattern 1 on its own: draw the manager's shapes.
//!
//! Run with: cargo run --bin shapes_demo

use std::io::{self, Write};

use oop_patterns::{demo, logging};

fn main() -> oop_patterns::Result<()> {
    logging::init();

    let mut out = io::stdout().lock();
    demo::run_shape_demo(&mut out)?;
    out.flush()?;
    Ok(())
}
