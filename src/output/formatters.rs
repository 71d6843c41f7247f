//! Formatting utilities shared by the terminal and web front-ends

use crate::core::RevealedMask;

/// Letters offered on the on-screen keyboard
pub const ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Format the mask with a space between characters
///
/// A space inside the word ends up as three spaces, keeping word gaps visible.
#[must_use]
pub fn spaced_mask(mask: &RevealedMask) -> String {
    let mut result = String::with_capacity(mask.len() * 2);

    for (i, c) in mask.display_chars().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(c);
    }

    result
}

/// Create a lives bar, one heart per remaining life
#[must_use]
pub fn lives_bar(lives: u32, max_lives: u32) -> String {
    let lives = lives.min(max_lives) as usize;
    let lost = max_lives as usize - lives;

    format!("{}{}", "♥".repeat(lives), "♡".repeat(lost))
}
