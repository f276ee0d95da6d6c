//! Object-Oriented Patterns - Runnable Examples
//!
//! Two small demonstrations of classic designs expressed with traits:
//!
//! - **Open/Closed shapes** ([`shapes`], [`draw_manager`]): a manager draws a
//!   list of `Box<dyn Shape>` without ever asking which shape it holds.
//! - **Abstract Factory** ([`phones`], [`factory`]): one factory per
//!   manufacturer, each building that manufacturer's smartphone and basic phone.
//!
//! Run them with:
//! ```bash
//! cargo run --bin patterns_demo
//! cargo run --bin shapes_demo
//! cargo run --bin phone_factory_demo -- htc nokia
//! ```
//!
//! The capabilities are traits, not values, so they cannot be built on
//! their own:
//!
//! ```compile_fail
//! use oop_patterns::shapes::Shape;
//!
//! let shape: Box<dyn Shape> = Box::new(Shape);
//! ```
//!
//! ```compile_fail
//! use oop_patterns::phones::Phone;
//!
//! let phone: Box<dyn Phone> = Box::new(Phone);
//! ```
//!
//! and a new shape that forgets to say how it is drawn is rejected:
//!
//! ```compile_fail
//! use oop_patterns::shapes::{Point, Shape};
//!
//! struct Triangle {
//!     center: Point,
//! }
//!
//! impl Shape for Triangle {
//!     fn type_name(&self) -> &'static str {
//!         "Triangle"
//!     }
//!
//!     fn center(&self) -> Point {
//!         self.center
//!     }
//! }
//! ```
//!
//! Supplying `draw` is all it takes to join the lineup:
//!
//! ```
//! use std::io::{self, Write};
//! use oop_patterns::draw_manager::DrawManager;
//! use oop_patterns::shapes::{Point, Shape};
//!
//! struct Triangle;
//!
//! impl Shape for Triangle {
//!     fn draw(&self, out: &mut dyn Write) -> io::Result<()> {
//!         writeln!(out, "Draw Triangle!")
//!     }
//!
//!     fn type_name(&self) -> &'static str {
//!         "Triangle"
//!     }
//!
//!     fn center(&self) -> Point {
//!         Point::ORIGIN
//!     }
//! }
//!
//! let mut manager = DrawManager::new();
//! manager.push(Box::new(Triangle));
//!
//! let mut out = Vec::new();
//! manager.draw_shapes(&mut out).unwrap();
//! assert_eq!(out, b"Draw Square!\nDraw Circle!\nDraw Triangle!\n");
//! ```

pub mod demo;
pub mod draw_manager;
pub mod error;
pub mod factory;
pub mod logging;
pub mod phones;
pub mod shapes;

pub use error::{PatternError, Result};
