//! PresentationML writer.
//!
//! A small writing-side model of a .pptx presentation: slides hold
//! placeholders and shapes, shapes hold text frames, and everything
//! serializes to PresentationML via [`Presentation::to_bytes`].

pub mod background;
pub mod layout;
pub mod package;
pub mod presentation;
pub mod shape;
pub mod slide;
pub mod template;
pub mod text;

pub use background::Background;
pub use layout::SlideLayout;
pub use presentation::Presentation;
pub use shape::Shape;
pub use slide::Slide;
pub use text::{Alignment, Paragraph, TextFormat, TextFrame};
