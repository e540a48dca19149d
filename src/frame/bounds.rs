/// A frame's crop region within a sheet, in pixel coordinates.
/// `left`/`top` are inclusive, `right`/`bottom` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl FrameBox {
    pub const fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    /// Check that the box lies entirely within a sheet of the given size
    pub fn fits_within(&self, sheet_width: u32, sheet_height: u32) -> bool {
        self.right <= sheet_width && self.bottom <= sheet_height
    }
}
