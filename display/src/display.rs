use sdl2::pixels::PixelFormatEnum;
use thiserror::Error;

use chip8_core::{Frame, DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// SDL2 reports most failures as bare strings
#[derive(Debug, Error)]
#[error("sdl2: {0}")]
pub struct DisplayError(String);

impl DisplayError {
    fn from_sdl(err: impl ToString) -> Self {
        DisplayError(err.to_string())
    }
}

/// # Display
/// The Chip-8 display is composed of 64x32 pixels black/white pixels.
/// The on/off state of these pixels is encoded as 1/0 respectively in a 2d array of 64x32 bytes.
/// The display only gets a call to `render` when the Chip-8 FrameBuffer has been rendered to.
pub struct Display {
    canvas: sdl2::render::WindowCanvas,
}

impl Display {
    /// Creates a new display object bound to an sdl2 context.
    ///
    /// # Arguments
    /// * `sdl` an sdl2 context with which to draw
    /// * `title` the window title
    /// * `scale` the size multiplier for each pixel
    pub fn new(sdl: &sdl2::Sdl, title: &str, scale: u32) -> Result<Self, DisplayError> {
        let video_subsystem = sdl.video().map_err(DisplayError::from_sdl)?;
        let window = video_subsystem
            .window(
                title,
                DISPLAY_WIDTH as u32 * scale,
                DISPLAY_HEIGHT as u32 * scale,
            )
            .position_centered()
            .build()
            .map_err(DisplayError::from_sdl)?;
        let canvas = window
            .into_canvas()
            .build()
            .map_err(DisplayError::from_sdl)?;
        log::debug!("opened {}x scaled window", scale);

        Ok(Display { canvas })
    }

    /// Formats a Chip-8 Frame for rendering as an SDL2 texture.
    ///
    /// An SDL2 texture is a 1D array of ints that represent concatenated rows of RGB pixels.
    ///
    /// This creates a black and white rendering by:
    /// - Flattening the 2D frame into a 1D array by concatenating its rows
    /// - Triplicating each element of that 1D array to represent the RGB values of each pixel
    /// - Multiplying each value by 255 to convert from a binary state to 0-255 intensity
    ///
    /// # Arguments
    /// * `frame` a Chip-8 Frame
    fn frame_to_sdl_texture(frame: &Frame) -> Vec<u8> {
        frame
            .iter()
            .flat_map(|row| row.iter())
            .flat_map(|pixel| std::iter::repeat(pixel * 255).take(3))
            .collect()
    }

    /// Formats the Chip-8 Frame as an SDL2 RGB24 texture and presents it.
    ///
    /// # Arguments
    /// * `frame` a Chip-8 Frame
    pub fn render(&mut self, frame: &Frame) -> Result<(), DisplayError> {
        let texture_creator = self.canvas.texture_creator();

        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGB24,
                DISPLAY_WIDTH as u32,
                DISPLAY_HEIGHT as u32,
            )
            .map_err(DisplayError::from_sdl)?;

        let pixels = Display::frame_to_sdl_texture(frame);
        texture
            .update(None, &pixels, DISPLAY_WIDTH * 3)
            .map_err(DisplayError::from_sdl)?;

        self.canvas
            .copy(&texture, None, None)
            .map_err(DisplayError::from_sdl)?;
        self.canvas.present();
        Ok(())
    }
}
