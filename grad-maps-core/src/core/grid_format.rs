//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Grid number templates
//!
//! A template like `"A000"` contains literal characters and placeholders. Every
//! placeholder (`0`-`9`, or `A`-`J` for a letter digit) holds one decimal digit
//! of the grid number, added onto the placeholder's own value.

const CHARS: &[u8; 10] = b"ABCDEFGHIJ";

#[derive(PartialEq, Clone, Debug)]
struct DigitPosition {
    /// Byte offset in the template
    str_index: usize,
    value: u8,
    is_char: bool,
}

/// Grid number formatter for one axis of a grid level
#[derive(Clone, Debug)]
pub struct GridFormat {
    format_str: String,
    digit_positions: Vec<DigitPosition>,
}

impl GridFormat {
    pub fn new(format_str: &str) -> GridFormat {
        let digit_positions = format_str
            .bytes()
            .enumerate()
            .filter_map(|(str_index, chr)| match chr {
                b'A'..=b'J' => Some(DigitPosition {
                    str_index,
                    value: chr - b'A',
                    is_char: true,
                }),
                b'0'..=b'9' => Some(DigitPosition {
                    str_index,
                    value: chr - b'0',
                    is_char: false,
                }),
                _ => None,
            })
            .collect::<Vec<_>>();
        if digit_positions.is_empty() {
            debug!("Grid format '{}' has no placeholders", format_str);
        }
        GridFormat {
            format_str: format_str.to_string(),
            digit_positions,
        }
    }

    pub fn template(&self) -> &str {
        &self.format_str
    }

    pub fn placeholder_count(&self) -> usize {
        self.digit_positions.len()
    }

    /// Number of distinct labels (`10^placeholders`), `None` if it exceeds `u64`
    pub fn max(&self) -> Option<u64> {
        10u64.checked_pow(self.digit_positions.len() as u32)
    }

    /// Format a grid line index. Indices wrap around modulo `max`, negative
    /// indices count down from `max`.
    pub fn format_grid_number(&self, num: i64) -> String {
        if self.digit_positions.is_empty() {
            return self.format_str.clone();
        }
        // Least significant digit first. Euclidean division yields the digits
        // of `num mod 10^k` for negative numbers as well.
        let mut rest = num as i128;
        let mut digits = Vec::with_capacity(self.digit_positions.len());
        for _ in 0..self.digit_positions.len() {
            digits.push(rest.rem_euclid(10) as u8);
            rest = rest.div_euclid(10);
        }
        digits.reverse();

        let mut replacements = self.digit_positions.iter().zip(digits).peekable();
        let mut formatted = String::with_capacity(self.format_str.len());
        for (index, chr) in self.format_str.char_indices() {
            match replacements.peek() {
                Some((pos, digit)) if pos.str_index == index => {
                    let new_value = (pos.value + digit) % 10;
                    formatted.push(if pos.is_char {
                        CHARS[new_value as usize] as char
                    } else {
                        (b'0' + new_value) as char
                    });
                    replacements.next();
                }
                _ => formatted.push(chr),
            }
        }
        formatted
    }
}

impl PartialEq for GridFormat {
    fn eq(&self, other: &GridFormat) -> bool {
        self.format_str == other.format_str
    }
}
