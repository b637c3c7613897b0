pub use chip8::Chip8;
pub use constants::{CLOCK_SPEED, DISPLAY_HEIGHT, DISPLAY_WIDTH};
pub use error::{Error, Result};
pub use instruction::Instruction;
pub use keypad::{keymap, Input, Keypad};
pub use opcode::Opcode;
pub use screen::{Frame, FrameBuffer, Screen};
pub use state::{Mode, State};

mod chip8;
pub mod constants;
mod error;
mod instruction;
mod keypad;
mod opcode;
mod operations;
mod screen;
mod state;
