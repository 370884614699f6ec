//! Input processing module
//! Handles file detection, decoding to text, and input management

pub mod decoder;
pub mod file_detector;
pub mod manager;

pub use decoder::decode_to_text;
pub use manager::InputManager;
