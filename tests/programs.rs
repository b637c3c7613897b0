//! Whole programs run through the public interface, step by step.

use chip8_core::{Chip8, FrameBuffer, Keypad, Mode, Screen};

/// A Chip-8 loaded with `program` plus the screen and keypad it runs against
fn boot(program: &[u8]) -> (Chip8, FrameBuffer, Keypad) {
    let mut chip8 = Chip8::with_seed(0);
    chip8.load_program(program).expect("program should load");
    (chip8, FrameBuffer::new(), Keypad::new())
}

fn run(chip8: &mut Chip8, screen: &mut FrameBuffer, keys: &Keypad, steps: usize) {
    for _ in 0..steps {
        chip8.step(screen, keys);
    }
}

#[test]
fn load_then_add() {
    let (mut chip8, mut screen, keys) = boot(&[0x60, 0x05, 0x70, 0x03]);
    run(&mut chip8, &mut screen, &keys, 2);
    assert_eq!(chip8.state().v[0x0], 8);
    assert_eq!(chip8.state().pc, 0x204);
}

#[test]
fn delay_timer_counts_down_once_per_step() {
    // LD V0, 10; LD DT, V0; then spin on JP 0x204
    let (mut chip8, mut screen, keys) = boot(&[0x60, 0x0A, 0xF0, 0x15, 0x12, 0x04]);
    run(&mut chip8, &mut screen, &keys, 2);
    assert_eq!(chip8.state().delay_timer, 10);
    run(&mut chip8, &mut screen, &keys, 9);
    assert_eq!(chip8.state().delay_timer, 1);
    run(&mut chip8, &mut screen, &keys, 1);
    assert_eq!(chip8.state().delay_timer, 0);
    run(&mut chip8, &mut screen, &keys, 5);
    assert_eq!(chip8.state().delay_timer, 0);
}

#[test]
fn delay_timer_reads_back() {
    // LD V0, 10; LD DT, V0; LD V1, DT
    let (mut chip8, mut screen, keys) = boot(&[0x60, 0x0A, 0xF0, 0x15, 0xF1, 0x07]);
    run(&mut chip8, &mut screen, &keys, 3);
    assert_eq!(chip8.state().v[0x1], 9);
}

#[test]
fn call_then_return() {
    // 200: CALL 0x206; 202: LD V0, 1; 204: JP 0x204; 206: RET
    let (mut chip8, mut screen, keys) =
        boot(&[0x22, 0x06, 0x60, 0x01, 0x12, 0x04, 0x00, 0xEE]);
    run(&mut chip8, &mut screen, &keys, 1);
    assert_eq!(chip8.state().pc, 0x206);
    assert_eq!(chip8.state().sp, 1);
    run(&mut chip8, &mut screen, &keys, 1);
    assert_eq!(chip8.state().pc, 0x202);
    assert_eq!(chip8.state().sp, 0);
    run(&mut chip8, &mut screen, &keys, 1);
    assert_eq!(chip8.state().v[0x0], 1);
}

#[test]
fn sixteen_nested_calls_unwind() {
    // 200: CALL 300; 202: JP 202
    // 300 + 4k: CALL 300 + 4(k+1); RET, with the 16th subroutine a lone RET
    let mut program = vec![0x00; 0x140];
    program[0..4].copy_from_slice(&[0x23, 0x00, 0x12, 0x02]);
    for k in 0..15u16 {
        let offset = 0x100 + 4 * k as usize;
        let target = 0x300 + 4 * (k + 1);
        program[offset..offset + 4]
            .copy_from_slice(&[0x20 | (target >> 8) as u8, target as u8, 0x00, 0xEE]);
    }
    program[0x13C..0x13E].copy_from_slice(&[0x00, 0xEE]);
    let (mut chip8, mut screen, keys) = boot(&program);

    run(&mut chip8, &mut screen, &keys, 16);
    assert_eq!(chip8.state().sp, 16);
    assert_eq!(chip8.state().pc, 0x33C);

    run(&mut chip8, &mut screen, &keys, 16);
    assert_eq!(chip8.state().sp, 0);
    // the outermost call returns to just after itself
    assert_eq!(chip8.state().pc, 0x202);
}

#[test]
fn seventeenth_nested_call_is_rejected() {
    // CALL 0x200 forever: every call nests one deeper
    let (mut chip8, mut screen, keys) = boot(&[0x22, 0x00]);
    run(&mut chip8, &mut screen, &keys, 16);
    assert_eq!(chip8.state().sp, 16);
    assert_eq!(chip8.state().pc, 0x200);

    run(&mut chip8, &mut screen, &keys, 1);
    assert_eq!(chip8.state().sp, 16);
    assert_eq!(chip8.state().pc, 0x202);
    assert!(chip8.state().stack.iter().all(|&addr| addr == 0x202));
}

#[test]
fn drawing_twice_restores_the_screen() {
    // LD I, 0x20A; DRW V0, V0, 1; DRW V0, V0, 1; JP 0x206; sprite 0xFF at 0x20A
    let (mut chip8, mut screen, keys) =
        boot(&[0xA2, 0x0A, 0xD0, 0x01, 0xD0, 0x01, 0x12, 0x06, 0xFF, 0x00, 0xFF]);
    screen.set_pixel(40, 20, 1);
    let before = *screen.pixels();

    run(&mut chip8, &mut screen, &keys, 2);
    assert_eq!(screen.pixels()[0][0..8], [1; 8]);
    assert_eq!(chip8.state().v[0xF], 0);

    run(&mut chip8, &mut screen, &keys, 1);
    assert_eq!(chip8.state().v[0xF], 1);
    assert_eq!(*screen.pixels(), before);
}

#[test]
fn clear_screen_renders() {
    let (mut chip8, mut screen, keys) = boot(&[0x00, 0xE0]);
    screen.set_pixel(1, 1, 1);
    run(&mut chip8, &mut screen, &keys, 1);
    let frame = screen.take_frame().expect("CLS should render");
    assert!(frame.iter().flatten().all(|&p| p == 0));
}

#[test]
fn font_glyphs_are_drawable() {
    // LD V0, 0xA; LD F, V0; DRW V1, V1, 5
    let (mut chip8, mut screen, keys) = boot(&[0x60, 0x0A, 0xF0, 0x29, 0xD1, 0x15]);
    run(&mut chip8, &mut screen, &keys, 3);
    let rows: Vec<[u8; 4]> = screen.pixels()[0..5]
        .iter()
        .map(|row| [row[0], row[1], row[2], row[3]])
        .collect();
    assert_eq!(
        rows,
        vec![[1, 1, 1, 1], [1, 0, 0, 1], [1, 1, 1, 1], [1, 0, 0, 1], [1, 0, 0, 1]]
    );
}

#[test]
fn bcd_of_157() {
    // LD V2, 157; LD I, 0x300; LD B, V2
    let (mut chip8, mut screen, keys) = boot(&[0x62, 0x9D, 0xA3, 0x00, 0xF2, 0x33]);
    run(&mut chip8, &mut screen, &keys, 3);
    assert_eq!(chip8.state().memory[0x300..0x303], [1, 5, 7]);
}

#[test]
fn await_key_resumes_after_a_press() {
    // LD V5, K; ADD V5, 1
    let (mut chip8, mut screen, mut keys) = boot(&[0xF5, 0x0A, 0x75, 0x01]);
    run(&mut chip8, &mut screen, &keys, 3);
    assert_eq!(chip8.state().mode, Mode::AwaitingKey { register: 0x5 });
    assert_eq!(chip8.state().pc, 0x202);

    keys.set_key("S", true);
    run(&mut chip8, &mut screen, &keys, 1);
    assert_eq!(chip8.state().mode, Mode::Running);
    assert_eq!(chip8.state().v[0x5], 0x9);

    run(&mut chip8, &mut screen, &keys, 1);
    assert_eq!(chip8.state().v[0x5], 0xA);
}

#[test]
fn key_skips_follow_the_keypad() {
    // LD V0, 4; SKP V0; LD V1, 1; SKNP V0; LD V2, 1
    let program = [0x60, 0x04, 0xE0, 0x9E, 0x61, 0x01, 0xE0, 0xA1, 0x62, 0x01];
    let (mut chip8, mut screen, mut keys) = boot(&program);
    keys.set_key("q", true);
    run(&mut chip8, &mut screen, &keys, 4);
    assert_eq!(chip8.state().v[0x1], 0);
    assert_eq!(chip8.state().v[0x2], 1);
}

#[test]
fn jump_with_offset() {
    // LD V0, 4; JP V0, 0x200 -> 0x204: LD V3, 3
    let (mut chip8, mut screen, keys) = boot(&[0x60, 0x04, 0xB2, 0x00, 0x63, 0x03]);
    run(&mut chip8, &mut screen, &keys, 2);
    assert_eq!(chip8.state().pc, 0x204);
    run(&mut chip8, &mut screen, &keys, 1);
    assert_eq!(chip8.state().v[0x3], 3);
}
