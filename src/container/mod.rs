//! Container module for the last-in-first-out storage used by the checker
//!
//! A [`Stack`] only exposes its top element. Reading from an empty stack is
//! not an error: `pop` and `peek` return `None`.

mod stack;

pub use stack::Stack;
