use crate::constants::KEY_COUNT;

/// # Input
/// Reports which of the 16 hexadecimal keys are held down.
pub trait Input {
    /// Whether key `index` is pressed; indices past 0xF are never pressed.
    fn get_key(&self, index: u8) -> bool;
}

/// # Keymap
/// Chip-8 input is generated with a 16 key keypad.
///
/// The keys are taken from the left 4 alphanumeric columns, numbered row by row.
/// ```text
/// |1|2|3|4|      | 0| 1| 2| 3|
/// |Q|W|E|R|  ->  | 4| 5| 6| 7|
/// |A|S|D|F|  ->  | 8| 9|10|11|
/// |Z|X|C|V|      |12|13|14|15|
/// ```
/// Names are matched case-insensitively; anything else maps to nothing.
pub fn keymap(name: &str) -> Option<u8> {
    match name.to_ascii_uppercase().as_str() {
        "1" => Some(0x0),
        "2" => Some(0x1),
        "3" => Some(0x2),
        "4" => Some(0x3),
        "Q" => Some(0x4),
        "W" => Some(0x5),
        "E" => Some(0x6),
        "R" => Some(0x7),
        "A" => Some(0x8),
        "S" => Some(0x9),
        "D" => Some(0xA),
        "F" => Some(0xB),
        "Z" => Some(0xC),
        "X" => Some(0xD),
        "C" => Some(0xE),
        "V" => Some(0xF),
        _ => None,
    }
}

/// # Keypad
/// The pressed status of each key, fed by whatever is polling the real keyboard.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Keypad {
    pressed_keys: [bool; KEY_COUNT],
}

impl Keypad {
    pub fn new() -> Self {
        Keypad {
            pressed_keys: [false; KEY_COUNT],
        }
    }

    /// Sets the pressed status of the key bound to `name`
    ///
    /// # Arguments
    /// * `name` a platform key name such as `"Q"` or `"1"`; unmapped names are ignored
    /// * `pressed` whether the key is now down
    pub fn set_key(&mut self, name: &str, pressed: bool) {
        match keymap(name) {
            Some(index) if pressed => self.press(index),
            Some(index) => self.release(index),
            None => log::trace!("ignoring unmapped key {:?}", name),
        }
    }

    /// Set the pressed status of key `index`
    pub fn press(&mut self, index: u8) {
        if let Some(key) = self.pressed_keys.get_mut(index as usize) {
            *key = true;
        }
    }

    /// Unset the pressed status of key `index`
    pub fn release(&mut self, index: u8) {
        if let Some(key) = self.pressed_keys.get_mut(index as usize) {
            *key = false;
        }
    }
}

impl Input for Keypad {
    fn get_key(&self, index: u8) -> bool {
        self.pressed_keys
            .get(index as usize)
            .copied()
            .unwrap_or(false)
    }
}
