use std::io::Read;

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::constants::{MAX_PROGRAM_SIZE, PROGRAM_START};
use crate::error::{Error, Result};
use crate::instruction::Instruction;
use crate::keypad::Input;
use crate::opcode::Opcode;
use crate::operations::first_pressed;
use crate::screen::Screen;
use crate::state::{Mode, State};

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Tracks:
///  - current `state`
///  - a random number generator for the RND instruction
///
/// Supplies interfaces for:
/// - loading roms
/// - advancing the CPU one step at a time against some screen and keypad
/// - inspecting its state and timers
///
/// It has no clock of its own; whoever owns it decides how often to `step`.
pub struct Chip8 {
    state: State,
    rng: StdRng,
}

impl Chip8 {
    pub fn new() -> Self {
        Chip8::with_rng(StdRng::from_entropy())
    }

    /// A Chip-8 whose RND instruction produces the same bytes for the same seed
    pub fn with_seed(seed: u64) -> Self {
        Chip8::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Chip8 {
            state: State::new(),
            rng,
        }
    }

    /// Copies a program image into memory at PROGRAM_START
    ///
    /// # Arguments
    /// * `program` the raw bytes of a ROM
    pub fn load_program(&mut self, program: &[u8]) -> Result<()> {
        if program.is_empty() {
            return Err(Error::EmptyProgram);
        }
        if program.len() > MAX_PROGRAM_SIZE {
            return Err(Error::ProgramTooLarge {
                size: program.len(),
                max: MAX_PROGRAM_SIZE,
            });
        }
        let start = PROGRAM_START as usize;
        self.state.memory[start..start + program.len()].copy_from_slice(program);
        debug!("loaded {} byte program at {:03X}", program.len(), start);
        Ok(())
    }

    /// Load a rom from a source file
    ///
    /// # Arguments
    /// * `reader` a file reader that contains a ROM
    pub fn load_rom(&mut self, reader: &mut dyn Read) -> Result<()> {
        let mut program = Vec::with_capacity(MAX_PROGRAM_SIZE);
        reader.read_to_end(&mut program)?;
        self.load_program(&program)
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }

    /// The register waiting for a key press, if the CPU is halted on one
    pub fn awaiting_key(&self) -> Option<u8> {
        match self.state.mode {
            Mode::AwaitingKey { register } => Some(register),
            Mode::Running => None,
        }
    }

    /// Whether the sound timer is still counting down
    pub fn sound_active(&self) -> bool {
        self.state.sound_timer > 0
    }

    /// Advances the CPU by a single step
    /// - counts the timers down
    /// - if awaiting a keypress, polls the keypad once and stops
    /// - otherwise fetches, decodes and executes the next opcode
    pub fn step(&mut self, screen: &mut dyn Screen, keys: &dyn Input) {
        self.advance_timers();

        if let Mode::AwaitingKey { register } = self.state.mode {
            if let Some(key) = first_pressed(keys) {
                debug!("key {:X} pressed, storing it in V{:X}", key, register);
                self.state.v[register as usize] = key;
                self.state.mode = Mode::Running;
            }
            return;
        }

        let pc = self.state.pc;
        let op = self.fetch();
        match Instruction::decode(op) {
            Some(instruction) => {
                trace!("{:03X}  {}  {}", pc, op, instruction);
                instruction.execute(&mut self.state, screen, keys, &mut self.rng);
            }
            None => debug!("{:03X}  {}  ignored unrecognised opcode", pc, op),
        }
    }

    /// Decrements both timers, stopping at 0
    fn advance_timers(&mut self) {
        self.state.delay_timer = self.state.delay_timer.saturating_sub(1);
        self.state.sound_timer = self.state.sound_timer.saturating_sub(1);
    }

    /// Reads the opcode at the pc and moves the pc past it
    fn fetch(&mut self) -> Opcode {
        let op = self.state.peek_op();
        self.state.opcode = op;
        self.state.pc = self.state.pc.wrapping_add(0x2);
        op
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}
