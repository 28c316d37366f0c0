//! The styled-element input tree.
//!
//! A [`StyledElement`] is a read-only view over one node of a rendered
//! document: its document-space offset, content-box size, and the raw
//! computed style strings the surrounding document/style system reports.
//! Style values stay raw (`"3px"`, `"auto"`, `"rgb(255, 0, 0)"`) — turning
//! them into structured paint data is the job of [`crate::resolve`].
//!
//! The child list order is the paint order: later children paint over
//! earlier siblings, and both paint over their parent.

use serde::{Deserialize, Serialize};

/// One node of the styled input tree.
///
/// Because children are an owned `Vec`, the input is a tree by construction:
/// no cycles are representable and the recursive walk always terminates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyledElement {
    /// Document-space offset of the left edge, in pixels.
    pub left: f32,
    /// Document-space offset of the top edge, in pixels.
    pub top: f32,
    /// Content-box width in pixels.
    pub width: f32,
    /// Content-box height in pixels.
    pub height: f32,

    /// Raw `border-top-left-radius` value (e.g. `"8px"`).
    pub border_top_left_radius: String,
    /// Raw `border-top-right-radius` value.
    pub border_top_right_radius: String,
    /// Raw `border-bottom-left-radius` value.
    pub border_bottom_left_radius: String,
    /// Raw `border-bottom-right-radius` value.
    pub border_bottom_right_radius: String,
    /// Raw `border-top-width` value; the single width used for the whole
    /// stroke (uniform borders only).
    pub border_top_width: String,
    /// Raw `border-top-color` value.
    pub border_top_color: String,

    /// Raw `background-image` value: a gradient syntax string, a `url(...)`
    /// reference, or `"none"`.
    pub background_image: String,
    /// Raw `background-color` value, the solid fallback fill.
    pub background_color: String,

    /// Raw `font-weight` value (`"normal"`, `"bold"`, or a number).
    pub font_weight: String,
    /// Raw `font-size` value.
    pub font_size: String,
    /// Raw `font-family` value.
    pub font_family: String,
    /// Raw text `color` value.
    pub color: String,
    /// Raw `text-align` value.
    pub text_align: String,

    /// Raw inner content. May contain nested markup; text is only painted
    /// at nodes without a `<` (see [`StyledElement::has_markup`]).
    pub text: String,

    /// Child elements in paint order.
    pub children: Vec<StyledElement>,
}

impl StyledElement {
    /// Whether the raw content contains nested markup.
    ///
    /// Elements with markup inside delegate text painting to their
    /// descendant leaf nodes.
    #[must_use]
    pub fn has_markup(&self) -> bool {
        self.text.contains('<')
    }
}
