//! The effects of each instruction.
//!
//! The pc has already been moved past the instruction by the time any of these run,
//! so skipping the next instruction is a single further bump of 2.
use log::warn;
use rand::{Rng, RngCore};

use crate::constants::{
    DISPLAY_HEIGHT, DISPLAY_WIDTH, FONT_GLYPH_SIZE, FONT_START, KEY_COUNT, STACK_DEPTH, VF,
};
use crate::keypad::Input;
use crate::screen::Screen;
use crate::state::{Mode, State};

fn skip_if(state: &mut State, condition: bool) {
    if condition {
        state.pc = state.pc.wrapping_add(0x2);
    }
}

/// The lowest numbered key that is currently pressed
pub fn first_pressed(keys: &dyn Input) -> Option<u8> {
    (0..KEY_COUNT as u8).find(|&key| keys.get_key(key))
}

/// clear
pub fn cls(screen: &mut dyn Screen) {
    screen.clear();
}

/// PC = STACK.pop()
pub fn ret(state: &mut State) {
    if state.sp == 0 {
        warn!(
            "RET at {:03X} with an empty call stack was ignored",
            state.pc.wrapping_sub(0x2)
        );
        return;
    }
    state.sp -= 1;
    state.pc = state.stack[state.sp as usize];
}

/// PC = addr
pub fn jump(state: &mut State, addr: u16) {
    state.pc = addr;
}

/// STACK.push(PC); PC = addr
/// A call that would overflow the stack is dropped.
pub fn call(state: &mut State, addr: u16) {
    if state.sp as usize == STACK_DEPTH {
        warn!(
            "CALL {:03X} at {:03X} would exceed {} nested calls and was ignored",
            addr,
            state.pc.wrapping_sub(0x2),
            STACK_DEPTH
        );
        return;
    }
    state.stack[state.sp as usize] = state.pc;
    state.sp += 1;
    state.pc = addr;
}

/// if Vx == kk then pc += 2
pub fn se(state: &mut State, x: u8, kk: u8) {
    skip_if(state, state.v[x as usize] == kk);
}

/// if Vx != kk then pc += 2
pub fn sne(state: &mut State, x: u8, kk: u8) {
    skip_if(state, state.v[x as usize] != kk);
}

/// if Vx == Vy then pc += 2
pub fn ser(state: &mut State, x: u8, y: u8) {
    skip_if(state, state.v[x as usize] == state.v[y as usize]);
}

/// if Vx != Vy then pc += 2
pub fn sner(state: &mut State, x: u8, y: u8) {
    skip_if(state, state.v[x as usize] != state.v[y as usize]);
}

/// Vx = kk
pub fn ld(state: &mut State, x: u8, kk: u8) {
    state.v[x as usize] = kk;
}

/// Vx += kk
/// Overflow wraps and is otherwise dropped; VF is untouched
pub fn add(state: &mut State, x: u8, kk: u8) {
    state.v[x as usize] = state.v[x as usize].wrapping_add(kk);
}

/// Vx = Vy
pub fn mv(state: &mut State, x: u8, y: u8) {
    state.v[x as usize] = state.v[y as usize];
}

/// Vx |= Vy
pub fn or(state: &mut State, x: u8, y: u8) {
    state.v[x as usize] |= state.v[y as usize];
}

/// Vx &= Vy
pub fn and(state: &mut State, x: u8, y: u8) {
    state.v[x as usize] &= state.v[y as usize];
}

/// Vx ^= Vy
pub fn xor(state: &mut State, x: u8, y: u8) {
    state.v[x as usize] ^= state.v[y as usize];
}

/// Vx += Vy; VF = carry
pub fn addr(state: &mut State, x: u8, y: u8) {
    let sum = u16::from(state.v[x as usize]) + u16::from(state.v[y as usize]);
    state.v[VF] = u8::from(sum > 0xFF);
    state.v[x as usize] = (sum & 0xFF) as u8;
}

/// Vx -= Vy; VF = Vx > Vy
pub fn sub(state: &mut State, x: u8, y: u8) {
    let (vx, vy) = (state.v[x as usize], state.v[y as usize]);
    state.v[VF] = u8::from(vx > vy);
    state.v[x as usize] = vx.wrapping_sub(vy);
}

/// Vx >>= 1; VF = lsb
pub fn shr(state: &mut State, x: u8) {
    let vx = state.v[x as usize];
    state.v[VF] = vx & 0x1;
    state.v[x as usize] = vx >> 1;
}

/// Vx = Vy - Vx; VF = Vy > Vx
pub fn subn(state: &mut State, x: u8, y: u8) {
    let (vx, vy) = (state.v[x as usize], state.v[y as usize]);
    state.v[VF] = u8::from(vy > vx);
    state.v[x as usize] = vy.wrapping_sub(vx);
}

/// Vx <<= 1; VF = msb
pub fn shl(state: &mut State, x: u8) {
    let vx = state.v[x as usize];
    state.v[VF] = vx >> 7;
    state.v[x as usize] = vx << 1;
}

/// I = addr
pub fn loadi(state: &mut State, addr: u16) {
    state.i = addr;
}

/// PC = V0 + addr
pub fn jumpi(state: &mut State, addr: u16) {
    state.pc = u16::from(state.v[0x0]) + addr;
}

/// Vx = rand_byte & kk
pub fn rnd(state: &mut State, rng: &mut dyn RngCore, x: u8, kk: u8) {
    let rand_byte: u8 = rng.gen();
    state.v[x as usize] = rand_byte & kk;
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs a sprite from memory i..i+n at position x, y on the screen with wrapping.
/// Sets VF if any pixel was erased, then renders once.
pub fn draw(state: &mut State, screen: &mut dyn Screen, x: u8, y: u8, n: u8) {
    let left = state.v[x as usize] as usize;
    let top = state.v[y as usize] as usize;
    let mut collision = 0;

    for row in 0..n {
        let sprite_row = state.read(state.i.wrapping_add(u16::from(row)));
        let py = (top + row as usize) % DISPLAY_HEIGHT;
        for bit in 0..8 {
            if (sprite_row >> (7 - bit)) & 0x1 == 0 {
                continue;
            }
            let px = (left + bit) % DISPLAY_WIDTH;
            collision |= screen.get_pixel(px, py);
            screen.set_pixel(px, py, 0x1);
        }
    }

    state.v[VF] = collision;
    screen.render();
}

/// if Vx.pressed then pc += 2
pub fn skp(state: &mut State, keys: &dyn Input, x: u8) {
    skip_if(state, keys.get_key(state.v[x as usize]));
}

/// if !Vx.pressed then pc += 2
pub fn sknp(state: &mut State, keys: &dyn Input, x: u8) {
    skip_if(state, !keys.get_key(state.v[x as usize]));
}

/// Vx = DT
pub fn moved(state: &mut State, x: u8) {
    state.v[x as usize] = state.delay_timer;
}

/// Vx = first pressed key
/// With no key down the CPU stops fetching until one is pressed
pub fn keyd(state: &mut State, keys: &dyn Input, x: u8) {
    match first_pressed(keys) {
        Some(key) => state.v[x as usize] = key,
        None => state.mode = Mode::AwaitingKey { register: x },
    }
}

/// DT = Vx
pub fn loadd(state: &mut State, x: u8) {
    state.delay_timer = state.v[x as usize];
}

/// ST = Vx
pub fn loads(state: &mut State, x: u8) {
    state.sound_timer = state.v[x as usize];
}

/// I += Vx
/// I is not wrapped to 12 bits here; only memory accesses through it are
pub fn addi(state: &mut State, x: u8) {
    state.i = state.i.wrapping_add(u16::from(state.v[x as usize]));
}

/// I = FONT_START + Vx * 5
/// Set I to the memory address of the font glyph for Vx
pub fn ldspr(state: &mut State, x: u8) {
    state.i = FONT_START + u16::from(state.v[x as usize]) * FONT_GLYPH_SIZE;
}

/// mem[I..I+3] = bcd(Vx)
/// Store the hundreds, tens and ones of Vx starting at address i
pub fn bcd(state: &mut State, x: u8) {
    let vx = state.v[x as usize];
    let digits = [vx / 100, vx / 10 % 10, vx % 10];
    for (offset, digit) in (0..).zip(digits) {
        state.write(state.i.wrapping_add(offset), digit);
    }
}

/// mem[I..=I+x] = V0..=Vx
pub fn stor(state: &mut State, x: u8) {
    for r in 0..=x {
        state.write(state.i.wrapping_add(u16::from(r)), state.v[r as usize]);
    }
}

/// V0..=Vx = mem[I..=I+x]
pub fn read(state: &mut State, x: u8) {
    for r in 0..=x {
        state.v[r as usize] = state.read(state.i.wrapping_add(u16::from(r)));
    }
}
