//! Constant values for the toyrsa library

#![no_std]

pub mod traditional;

pub use traditional::rsa::{KEY_SPACE, MAX_KEY_SPACE, MIN_KEY_SPACE};
