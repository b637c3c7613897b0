use crate::constants::{
    ADDRESS_MASK, FONT, FONT_START, MEMORY_SIZE, PROGRAM_START, STACK_DEPTH,
};
use crate::opcode::Opcode;

/// A snapshot of the Chip-8 internal state
///
/// ## CPU
/// Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) is the carry / borrow / collision flag
/// - (i) a 16-bit memory address register; only its low 12 bits reach memory
///
/// Counter
/// - (pc) a 16-bit program counter
///
/// Pointer
/// - (sp) the number of return addresses on the stack (0..=16)
///
/// Timers
/// - 2 8-bit timers (delay & sound) that count down to 0
///
/// ## Memory
/// - 16 entry stack of return addresses
/// - 4096 bytes of addressable memory
///     - 0x000..0x050 is reserved
///     - 0x050..0x0A0 holds the hexadecimal font
///     - 0x200.. holds the program
///
/// ## Execution
/// - (opcode) the most recently fetched opcode
/// - (mode) whether the CPU is running or halted until a key is pressed
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct State {
    pub v: [u8; 16],
    pub i: u16,
    pub pc: u16,
    pub sp: u8,
    pub delay_timer: u8,
    pub sound_timer: u8,
    pub stack: [u16; STACK_DEPTH],
    pub memory: [u8; MEMORY_SIZE],
    pub opcode: Opcode,
    pub mode: Mode,
}

/// What the CPU will do on its next cycle
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Fetch and execute the opcode at pc
    Running,
    /// Poll the keypad and store the first pressed key in `register`
    AwaitingKey { register: u8 },
}

impl State {
    pub fn new() -> Self {
        let mut memory = [0; MEMORY_SIZE];
        let font_start = FONT_START as usize;
        memory[font_start..font_start + FONT.len()].copy_from_slice(&FONT);

        State {
            v: [0; 16],
            i: 0,
            pc: PROGRAM_START,
            sp: 0,
            delay_timer: 0,
            sound_timer: 0,
            stack: [0; STACK_DEPTH],
            memory,
            opcode: Opcode(0),
            mode: Mode::Running,
        }
    }

    /// Reads the byte at `addr`, ignoring any bits above the 12-bit address space.
    pub fn read(&self, addr: u16) -> u8 {
        self.memory[(addr & ADDRESS_MASK) as usize]
    }

    /// Writes `value` at `addr`, ignoring any bits above the 12-bit address space.
    ///
    /// The font is read-only; writes that land on it are dropped.
    pub fn write(&mut self, addr: u16, value: u8) {
        let addr = addr & ADDRESS_MASK;
        if is_font(addr) {
            log::warn!("dropped write of {:02X} to font address {:03X}", value, addr);
            return;
        }
        self.memory[addr as usize] = value;
    }

    /// Gets the opcode currently pointed at by the pc.
    ///
    /// Memory is stored as bytes, but opcodes are 16 bits so we combine two subsequent bytes.
    pub fn peek_op(&self) -> Opcode {
        Opcode::from_bytes(self.read(self.pc), self.read(self.pc.wrapping_add(1)))
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

fn is_font(addr: u16) -> bool {
    (FONT_START..FONT_START + FONT.len() as u16).contains(&addr)
}
