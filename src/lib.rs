//! Norddeck - a Nord dark theme PowerPoint template generator
//!
//! This library builds a six-slide .pptx presentation template styled
//! with the [Nord](https://www.nordtheme.com/) color palette and writes
//! it as an OPC (Open Packaging Conventions) package. Output is
//! deterministic: building the same deck twice produces identical bytes.
//!
//! # Features
//!
//! - **Nord palette**: compile-time color table with strict name lookup
//! - **PresentationML writer**: slides, placeholders, shapes, text frames
//! - **OPC packaging**: content types, relationships, ZIP serialization
//! - **Dark everywhere**: slide, layout, and master backgrounds
//!
//! # Example - Building the template deck
//!
//! ```no_run
//! # fn main() -> norddeck::Result<()> {
//! let pres = norddeck::deck::build()?;
//! pres.save("nord_dark_theme.pptx")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Building a custom slide
//!
//! ```no_run
//! use norddeck::palette;
//! use norddeck::pptx::{Paragraph, Presentation, SlideLayout};
//!
//! # fn main() -> norddeck::Result<()> {
//! let mut pres = Presentation::new();
//! let slide = pres.add_slide(SlideLayout::TitleOnly);
//! slide.set_background(palette::lookup("polar1")?);
//! slide.set_title(Paragraph::new("Hello").size(44.0).bold());
//! pres.save("custom.pptx")?;
//! # Ok(())
//! # }
//! ```

pub mod common;
pub mod deck;
pub mod error;
pub mod opc;
pub mod palette;
pub mod pptx;

pub use error::{DeckError, Result};
pub use pptx::{Presentation, SlideLayout};
