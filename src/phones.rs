//! Pattern 2: Abstract Factory products
//!
//! `Phone` is the capability every product shares. `Smartphone` and
//! `BasicPhone` tag the two product families; each manufacturer ships one
//! concrete type per family. The name is whatever the caller supplied, there
//! is no check that it matches the manufacturer.

use std::any::Any;

pub trait Phone: Any {
    fn name(&self) -> &str;

    /// Concrete type access, for callers that need to know which model they got.
    fn as_any(&self) -> &dyn Any;
}

pub trait Smartphone: Phone {}

pub trait BasicPhone: Phone {}

macro_rules! phone_model {
    ($model:ident: $family:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $model {
            name: String,
        }

        impl $model {
            pub fn new(name: impl Into<String>) -> Self {
                $model { name: name.into() }
            }
        }

        impl Phone for $model {
            fn name(&self) -> &str {
                &self.name
            }

            fn as_any(&self) -> &dyn Any {
                self
            }
        }

        impl $family for $model {}
    };
}

phone_model!(NokiaSmartphone: Smartphone);
phone_model!(NokiaBasicPhone: BasicPhone);
phone_model!(SamsungSmartphone: Smartphone);
phone_model!(SamsungBasicPhone: BasicPhone);
phone_model!(HtcSmartphone: Smartphone);
phone_model!(HtcBasicPhone: BasicPhone);
