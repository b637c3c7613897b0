use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::time::{Duration, Instant};

use log::{debug, info};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use chip8_core::{Chip8, FrameBuffer, Keypad};
use display::Display;

use crate::Args;

pub fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let mut chip8 = match args.seed {
        Some(seed) => Chip8::with_seed(seed),
        None => Chip8::new(),
    };

    // Load ROM
    let file = File::open(&args.rom)?;
    chip8.load_rom(&mut BufReader::new(file))?;
    info!("loaded {}", args.rom.display());

    // Get SDL2 context
    let sdl: sdl2::Sdl = sdl2::init()?;
    let mut display = Display::new(&sdl, "Chip-8", args.scale)?;
    let mut events = sdl.event_pump()?;

    let mut frame_buffer = FrameBuffer::new();
    let mut keypad = Keypad::new();

    // Set initial timing
    let cycle_time = Duration::from_secs(1) / args.hz;
    let mut last_cycle = Instant::now();

    // Whether or not the clock speed should be respected
    let mut fast_forward = false;

    // No audio device; tone changes are only logged
    let mut beeping = false;

    'event: loop {
        // If the frame buffer was rendered to, show the new frame
        if let Some(frame) = frame_buffer.take_frame() {
            display.render(&frame)?;
        }

        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'event,
                Event::KeyDown {
                    keycode: Some(Keycode::Space),
                    ..
                } => fast_forward = true,
                Event::KeyUp {
                    keycode: Some(Keycode::Space),
                    ..
                } => fast_forward = false,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => keypad.set_key(&key.name(), true),
                Event::KeyUp {
                    keycode: Some(key), ..
                } => keypad.set_key(&key.name(), false),
                _ => continue,
            };
        }

        // Update state
        chip8.step(&mut frame_buffer, &keypad);
        if chip8.sound_active() != beeping {
            beeping = !beeping;
            debug!("tone {}", if beeping { "on" } else { "off" });
        }

        // Handle timing
        let elapsed_cycle_time = last_cycle.elapsed();
        if !fast_forward && cycle_time > elapsed_cycle_time {
            std::thread::sleep(cycle_time - elapsed_cycle_time);
        }
        last_cycle = Instant::now();
    }

    info!("quit");
    Ok(())
}
