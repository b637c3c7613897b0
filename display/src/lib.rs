pub use display::{Display, DisplayError};

mod display;
