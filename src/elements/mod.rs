//! Support elements: end anchors and pins

mod anchor;
mod pin;

pub use anchor::Anchor;
pub use pin::{Pin, PinId};
