#[macro_use]
extern crate quick_error;

#[cfg(test)] #[macro_use]
extern crate pretty_assertions;

pub mod machine;
pub mod hardware;
pub mod cpu;
pub mod memory;
pub mod tools;
pub mod hex;
