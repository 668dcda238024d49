//! Slide layouts.
//!
//! The deck references five of the stock PowerPoint layouts. Each maps to
//! one `slideLayoutN.xml` part whose template lives in
//! [`crate::pptx::template`].

/// The slide layouts shipped in the package, in part order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideLayout {
    /// Title slide with centered title and subtitle placeholders
    TitleSlide,
    /// Title plus body content placeholder
    TitleAndContent,
    /// Title plus two side-by-side content areas
    TwoContent,
    /// Title only
    TitleOnly,
    /// Blank
    Blank,
}

impl SlideLayout {
    /// All layouts, in part-number order.
    pub fn all() -> [SlideLayout; 5] {
        [
            SlideLayout::TitleSlide,
            SlideLayout::TitleAndContent,
            SlideLayout::TwoContent,
            SlideLayout::TitleOnly,
            SlideLayout::Blank,
        ]
    }

    /// One-based part number: `slideLayout{n}.xml`.
    pub fn part_number(self) -> usize {
        match self {
            SlideLayout::TitleSlide => 1,
            SlideLayout::TitleAndContent => 2,
            SlideLayout::TwoContent => 3,
            SlideLayout::TitleOnly => 4,
            SlideLayout::Blank => 5,
        }
    }

    /// Human-readable layout name, used as the `cSld` name.
    pub fn name(self) -> &'static str {
        match self {
            SlideLayout::TitleSlide => "Title Slide",
            SlideLayout::TitleAndContent => "Title and Content",
            SlideLayout::TwoContent => "Two Content",
            SlideLayout::TitleOnly => "Title Only",
            SlideLayout::Blank => "Blank",
        }
    }

    /// The `type` attribute value on `<p:sldLayout>`.
    pub(crate) fn type_attr(self) -> &'static str {
        match self {
            SlideLayout::TitleSlide => "title",
            SlideLayout::TitleAndContent => "obj",
            SlideLayout::TwoContent => "twoObj",
            SlideLayout::TitleOnly => "titleOnly",
            SlideLayout::Blank => "blank",
        }
    }

    /// Placeholder type the slide's title shape uses under this layout.
    pub(crate) fn title_ph_type(self) -> &'static str {
        match self {
            SlideLayout::TitleSlide => "ctrTitle",
            _ => "title",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_numbers_are_dense() {
        let numbers: Vec<usize> = SlideLayout::all()
            .iter()
            .map(|l| l.part_number())
            .collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_title_placeholder_kind() {
        assert_eq!(SlideLayout::TitleSlide.title_ph_type(), "ctrTitle");
        assert_eq!(SlideLayout::TitleOnly.title_ph_type(), "title");
    }
}
