use std::fmt;

/// # Opcodes
///
/// Chip-8 opcodes are 16 bits wide, stored big-endian as two consecutive bytes.
/// Which instruction an opcode encodes is decided by some combination of:
/// - `[n___]` its family; applies to every opcode
/// - `[nnnn]` the whole word, for instructions without operands (e.g. CLS)
/// - `[n__n]` the family plus the low nibble (arithmetic and logic)
/// - `[n_nn]` the family plus the low byte (keys, timers and memory blocks)
///
/// The remaining nibbles carry operands:
/// - `[_x__]` the register Vx, or the upper bound of the range V0..=Vx
/// - `[__y_]` the register Vy
/// - `[__kk]` an immediate byte
/// - `[_nnn]` a 12-bit address
/// - `[___n]` a sprite height
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Opcode(pub u16);

impl Opcode {
    /// Combines the two bytes of an instruction, the first being most significant.
    pub fn from_bytes(high: u8, low: u8) -> Self {
        Opcode(u16::from(high) << 8 | u16::from(low))
    }

    /// The opcode's four nibbles, most significant first.
    pub fn nibbles(self) -> (u8, u8, u8, u8) {
        (((self.0 & 0xF000) >> 12) as u8, self.x(), self.y(), self.n())
    }

    /// `[_x__]`
    pub fn x(self) -> u8 {
        ((self.0 & 0x0F00) >> 8) as u8
    }

    /// `[__y_]`
    pub fn y(self) -> u8 {
        ((self.0 & 0x00F0) >> 4) as u8
    }

    /// `[___n]`
    pub fn n(self) -> u8 {
        (self.0 & 0x000F) as u8
    }

    /// `[__kk]`
    pub fn kk(self) -> u8 {
        (self.0 & 0x00FF) as u8
    }

    /// `[_nnn]`
    pub fn addr(self) -> u16 {
        self.0 & 0x0FFF
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:04X}", self.0)
    }
}
