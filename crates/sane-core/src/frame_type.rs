//! `SANE_Frame`: layout of the image data a scan returns.

use crate::wire_enum::wire_enum;

wire_enum! {
    pub enum FrameType {
        Gray = 0 => "gray",
        /// Interleaved red, green, blue samples.
        Rgb = 1 => "rgb",
        Red = 2 => "red",
        Green = 3 => "green",
        Blue = 4 => "blue",
    }
}

impl FrameType {
    /// Whether this frame carries a single colour channel of a
    /// three-pass scan.
    pub fn is_single_channel(self) -> bool {
        matches!(self, FrameType::Red | FrameType::Green | FrameType::Blue)
    }
}
