//! # Pricetag - Product Label Generator
//!
//! Pricetag turns a product code into a printable 5cm × 3cm price label.
//! It provides:
//!
//! - **Catalog lookup**: resolve a WSN or WID code, autocomplete partial input
//! - **Label rendering**: fixed template with prices, wrapped title and a
//!   decorative bar pattern
//! - **Export**: PNG download and hand-off to the system print spooler
//! - **Session**: the interactive controller, decoupled from any UI toolkit
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use pricetag::{
//!     catalog::Catalog,
//!     export,
//!     fonts::FontSet,
//!     label::{LabelConfig, LabelRenderer},
//!     surface::RasterSurface,
//! };
//!
//! let catalog = Catalog::sample();
//! let product = catalog.resolve("XIFKJOQ")?;
//!
//! let renderer = LabelRenderer::new(LabelConfig::reference());
//! let mut surface = RasterSurface::new(600, 360, Arc::new(FontSet::bitmap()));
//! renderer.render(&mut surface, &product)?;
//!
//! let png = export::encode_png(&surface)?;
//! assert!(png.starts_with(b"\x89PNG"));
//!
//! # Ok::<(), pricetag::PricetagError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`catalog`] | Product records, resolve and suggest |
//! | [`surface`] | Drawing surface trait, raster and recording backends |
//! | [`fonts`] | Bitmap and TrueType font faces |
//! | [`label`] | Label geometry, word wrap, bar pattern, renderer |
//! | [`export`] | PNG encoding and print hand-off |
//! | [`session`] | Interactive controller and its capability traits |
//! | [`terminal`] | Line-oriented front end for the session |
//! | [`logging`] | Tracing subscriber setup |
//! | [`error`] | Error types |

pub mod catalog;
pub mod error;
pub mod export;
pub mod fonts;
pub mod label;
pub mod logging;
pub mod session;
pub mod surface;
pub mod terminal;

pub use catalog::Catalog;
pub use error::PricetagError;
pub use label::{LabelConfig, LabelRenderer};
