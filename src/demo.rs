//! The demonstration driver. Everything writes to an injected writer so the
//! binaries can hand in stdout and the tests a buffer.

use std::io::Write;

use crate::draw_manager::DrawManager;
use crate::error::Result;
use crate::factory::{Manufacturer, PhoneFactory, CATALOG};

/// Prints `Draw Square!` then `Draw Circle!`.
pub fn run_shape_demo(out: &mut dyn Write) -> Result<()> {
    let manager = DrawManager::new();
    manager.draw_shapes(out)?;
    Ok(())
}

/// Builds one smartphone and one basic phone through `factory` and prints the
/// three-line block for `manufacturer`.
pub fn print_lineup(
    out: &mut dyn Write,
    manufacturer: Manufacturer,
    factory: &dyn PhoneFactory,
) -> Result<()> {
    let smartphone = factory.create_smartphone(&format!("{manufacturer} Smartphone"));
    let basic_phone = factory.create_basic_phone(&format!("{manufacturer} Basic Phone"));

    writeln!(out, "Manufacturer: {manufacturer}")?;
    // "Smarphone" is the label users have always seen; keep it.
    writeln!(out, "Smarphone: {}", smartphone.name())?;
    writeln!(out, "Basic phone: {}", basic_phone.name())?;
    Ok(())
}

/// One block per manufacturer, in catalog order.
pub fn run_phone_demo(out: &mut dyn Write) -> Result<()> {
    for manufacturer in CATALOG {
        let factory = manufacturer.factory();
        print_lineup(out, manufacturer, factory.as_ref())?;
    }
    Ok(())
}

/// Both demos back to back, then flush.
pub fn run_all(out: &mut dyn Write) -> Result<()> {
    run_shape_demo(out)?;
    run_phone_demo(out)?;
    out.flush()?;
    Ok(())
}
