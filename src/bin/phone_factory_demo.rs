//! Pattern 2 on its own: one lineup per manufacturer.
//!
//! Run with: cargo run --bin phone_factory_demo [manufacturer...]
//!
//! Without arguments every manufacturer in the catalog is shown. Names are
//! matched case-insensitively; an unknown name is an error.

use std::env;
use std::io::{self, Write};

use oop_patterns::factory::Manufacturer;
use oop_patterns::{demo, logging};

fn main() -> oop_patterns::Result<()> {
    logging::init();

    let requested = env::args()
        .skip(1)
        .map(|name| name.parse::<Manufacturer>())
        .collect::<oop_patterns::Result<Vec<_>>>()?;

    let mut out = io::stdout().lock();
    if requested.is_empty() {
        demo::run_phone_demo(&mut out)?;
    } else {
        for manufacturer in requested {
            let factory = manufacturer.factory();
            demo::print_lineup(&mut out, manufacturer, factory.as_ref())?;
        }
    }
    out.flush()?;
    Ok(())
}
