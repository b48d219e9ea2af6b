//! Delimiter balance checking
//!
//! A single left-to-right scan. Openers are pushed onto a private [`Stack`];
//! each closer must pop the opener it pairs with. Every other character is
//! ignored.

use crate::container::Stack;
use crate::engine::pairs::{is_opener, opener_for};

/// Check whether the delimiters in `expression` are correctly nested and closed
pub fn is_balanced(expression: &str) -> bool {
    is_balanced_chars(expression.chars())
}

/// Check any sequence of characters for balanced delimiters
pub fn is_balanced_chars<I>(chars: I) -> bool
where
    I: IntoIterator<Item = char>,
{
    let mut stack = Stack::new();

    for c in chars {
        if is_opener(c) {
            stack.push(c);
        } else if let Some(required) = opener_for(c) {
            // A closer with nothing pending, or the wrong kind pending
            match stack.pop() {
                Some(top) if top == required => {}
                _ => return false,
            }
        }
    }

    stack.is_empty()
}
