pub mod adjust;
pub mod clock;
pub mod color;
pub mod describe;
pub mod palette;
pub mod period;
pub mod sky;
pub mod zip;
