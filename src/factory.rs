//! Pattern 2: Abstract Factory
//!
//! A `PhoneFactory` builds one product per family. Each concrete factory is
//! hard-bound to its own manufacturer's models, so a single factory can never
//! hand out a mixed lineup.
//!
//! ```
//! use oop_patterns::factory::{Manufacturer, PhoneFactory};
//!
//! let factory = Manufacturer::Samsung.factory();
//! let phone = factory.create_smartphone("Samsung Smartphone");
//! assert_eq!(phone.name(), "Samsung Smartphone");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{PatternError, Result};
use crate::phones::{
    BasicPhone, HtcBasicPhone, HtcSmartphone, NokiaBasicPhone, NokiaSmartphone,
    SamsungBasicPhone, SamsungSmartphone, Smartphone,
};

pub trait PhoneFactory {
    fn create_smartphone(&self, name: &str) -> Box<dyn Smartphone>;
    fn create_basic_phone(&self, name: &str) -> Box<dyn BasicPhone>;
}

// ============================================================================
// Concrete factories
// ============================================================================

#[derive(Debug, Default, Clone, Copy)]
pub struct NokiaFactory;

impl PhoneFactory for NokiaFactory {
    fn create_smartphone(&self, name: &str) -> Box<dyn Smartphone> {
        tracing::trace!(manufacturer = "Nokia", name, "create smartphone");
        Box::new(NokiaSmartphone::new(name))
    }

    fn create_basic_phone(&self, name: &str) -> Box<dyn BasicPhone> {
        tracing::trace!(manufacturer = "Nokia", name, "create basic phone");
        Box::new(NokiaBasicPhone::new(name))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SamsungFactory;

impl PhoneFactory for SamsungFactory {
    fn create_smartphone(&self, name: &str) -> Box<dyn Smartphone> {
        tracing::trace!(manufacturer = "Samsung", name, "create smartphone");
        Box::new(SamsungSmartphone::new(name))
    }

    fn create_basic_phone(&self, name: &str) -> Box<dyn BasicPhone> {
        tracing::trace!(manufacturer = "Samsung", name, "create basic phone");
        Box::new(SamsungBasicPhone::new(name))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct HtcFactory;

impl PhoneFactory for HtcFactory {
    fn create_smartphone(&self, name: &str) -> Box<dyn Smartphone> {
        tracing::trace!(manufacturer = "HTC", name, "create smartphone");
        Box::new(HtcSmartphone::new(name))
    }

    fn create_basic_phone(&self, name: &str) -> Box<dyn BasicPhone> {
        tracing::trace!(manufacturer = "HTC", name, "create basic phone");
        Box::new(HtcBasicPhone::new(name))
    }
}

// ============================================================================
// Manufacturer catalog
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Manufacturer {
    Nokia,
    Samsung,
    Htc,
}

impl Manufacturer {
    pub fn name(self) -> &'static str {
        match self {
            Manufacturer::Nokia => "Nokia",
            Manufacturer::Samsung => "Samsung",
            Manufacturer::Htc => "HTC",
        }
    }

    /// The constructor this manufacturer is bound to.
    pub fn constructor(self) -> FactoryConstructor {
        match self {
            Manufacturer::Nokia => boxed::<NokiaFactory>,
            Manufacturer::Samsung => boxed::<SamsungFactory>,
            Manufacturer::Htc => boxed::<HtcFactory>,
        }
    }

    /// A fresh factory for this manufacturer.
    pub fn factory(self) -> Box<dyn PhoneFactory> {
        tracing::debug!(manufacturer = self.name(), "select factory");
        (self.constructor())()
    }
}

impl fmt::Display for Manufacturer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Manufacturer {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        CATALOG
            .into_iter()
            .find(|manufacturer| manufacturer.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PatternError::unknown_manufacturer(s))
    }
}

pub type FactoryConstructor = fn() -> Box<dyn PhoneFactory>;

fn boxed<F: PhoneFactory + Default + 'static>() -> Box<dyn PhoneFactory> {
    Box::new(F::default())
}

/// Manufacturers in demo order.
pub const CATALOG: [Manufacturer; 3] = [Manufacturer::Nokia, Manufacturer::Samsung, Manufacturer::Htc];

/// `(manufacturer, factory constructor)` pairs in demo order.
pub fn catalog() -> impl Iterator<Item = (Manufacturer, FactoryConstructor)> {
    CATALOG
        .into_iter()
        .map(|manufacturer| (manufacturer, manufacturer.constructor()))
}

/// Resolves a manufacturer name (case-insensitive) to a new factory.
pub fn lookup(name: &str) -> Result<Box<dyn PhoneFactory>> {
    let manufacturer: Manufacturer = name.parse()?;
    Ok(manufacturer.factory())
}
