pub mod aria;
pub mod diffusion;
pub mod key_schedule;
pub mod sboxes;
