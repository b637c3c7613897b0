use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// # Screen
/// A monochrome pixel grid the CPU draws sprites onto.
///
/// Coordinates outside the grid wrap around, so every method is total.
pub trait Screen {
    /// Turns every pixel off, then renders.
    fn clear(&mut self);

    /// Flushes the current pixels to wherever they are being shown.
    fn render(&mut self);

    /// Returns 1 if the pixel at `x`, `y` is on and 0 otherwise.
    fn get_pixel(&self, x: usize, y: usize) -> u8;

    /// XORs `value` into the pixel at `x`, `y`.
    fn set_pixel(&mut self, x: usize, y: usize, value: u8);
}

/// The pixels of a single frame, indexed as [y][x]
pub type Frame = [[u8; DISPLAY_WIDTH]; DISPLAY_HEIGHT];

/// # FrameBuffer
/// An in-memory `Screen`.
///
/// Rendering doesn't draw anything; it raises a flag so that whoever owns the
/// buffer knows to redraw the frame the next time it asks for one.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    pixels: Frame,
    draw_flag: bool,
}

impl FrameBuffer {
    pub fn new() -> Self {
        FrameBuffer {
            pixels: [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
            draw_flag: false,
        }
    }

    /// The current pixels, whether or not they've been rendered
    pub fn pixels(&self) -> &Frame {
        &self.pixels
    }

    /// Returns the frame if it has been rendered since the last call, lowering the draw flag
    pub fn take_frame(&mut self) -> Option<Frame> {
        if self.draw_flag {
            self.draw_flag = false;
            Some(self.pixels)
        } else {
            None
        }
    }

    /// Number of pixels that are on
    pub fn lit(&self) -> usize {
        self.pixels.iter().flatten().filter(|&&p| p == 1).count()
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for FrameBuffer {
    fn clear(&mut self) {
        self.pixels = [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
        self.render();
    }

    fn render(&mut self) {
        self.draw_flag = true;
    }

    fn get_pixel(&self, x: usize, y: usize) -> u8 {
        self.pixels[y % DISPLAY_HEIGHT][x % DISPLAY_WIDTH]
    }

    fn set_pixel(&mut self, x: usize, y: usize, value: u8) {
        self.pixels[y % DISPLAY_HEIGHT][x % DISPLAY_WIDTH] ^= value & 1;
    }
}
