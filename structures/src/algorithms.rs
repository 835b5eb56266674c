//! Small utilities built on top of [`Stack`]

use crate::stack::Stack;

/// Whether every `(`, `[` and `{` is closed in the right order.
/// Characters other than brackets are ignored.
pub fn is_balanced(expression: &str) -> bool {
    let mut open: Stack<char> = Stack::new();

    for c in expression.chars() {
        match c {
            '(' | '[' | '{' => {
                // unbounded stack never refuses a push
                let _ = open.push(c);
            }
            ')' | ']' | '}' => {
                let expected = match c {
                    ')' => '(',
                    ']' => '[',
                    _ => '{',
                };
                match open.pop() {
                    Ok(top) if top == expected => {}
                    _ => return false,
                }
            }
            _ => {}
        }
    }

    open.is_empty()
}

/// Reverse `text` by pushing every character and popping them back
pub fn reverse_with_stack(text: &str) -> String {
    let mut stack: Stack<char> = Stack::new();
    for c in text.chars() {
        let _ = stack.push(c);
    }

    let mut reversed = String::with_capacity(text.len());
    while let Ok(c) = stack.pop() {
        reversed.push(c);
    }
    reversed
}

/// Binary representation of `value`, computed with repeated division
pub fn decimal_to_binary(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits: Stack<char> = Stack::new();
    while value > 0 {
        let _ = digits.push(if value % 2 == 1 { '1' } else { '0' });
        value /= 2;
    }

    let mut binary = String::with_capacity(digits.size());
    while let Ok(digit) = digits.pop() {
        binary.push(digit);
    }
    binary
}
