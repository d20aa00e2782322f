//! Pixel-width-driven text centering.
//!
//! The engine measures an already-rendered line against the width registry
//! and prepends enough spaces to balance it around the middle of the
//! display budget.

use chroma::MARKER;

use crate::width::CharTable;

/// Half of the default display budget, in pixels.
pub const DEFAULT_HALF_WIDTH: i32 = 154;

/// Pixels consumed by one padding space: the space glyph plus the gap.
const SPACE_UNIT: i32 = 4;

/// Prepend spaces so `rendered` sits visually centered.
///
/// Color sequences are not measured: a `§` marker enters a pending-code
/// state for exactly one following character. An `l` code sets the bold
/// flag, which persists until an explicit `r` reset or the end of the
/// string; every other code letter is skipped. Each measured character
/// contributes its glyph width (bold: one extra pixel) plus a one-pixel
/// inter-character gap.
///
/// Lines already wider than the budget are returned unchanged.
pub fn center_line(rendered: &str, table: &CharTable, half_width: i32) -> String {
    let mut total = 0i32;
    let mut pending = false;
    let mut bold = false;
    for c in rendered.chars() {
        if c == MARKER {
            pending = true;
        } else if pending {
            pending = false;
            match c.to_ascii_lowercase() {
                'l' => bold = true,
                'r' => bold = false,
                _ => {}
            }
        } else {
            let width = if bold {
                table.bold_width(c)
            } else {
                table.width(c)
            };
            total += i32::from(width) + 1;
        }
    }

    let target = half_width - total / 2;
    if target <= 0 {
        return rendered.to_string();
    }
    let pad = (target as u32).div_ceil(SPACE_UNIT as u32) as usize;
    let mut out = String::with_capacity(pad + rendered.len());
    for _ in 0..pad {
        out.push(' ');
    }
    out.push_str(rendered);
    out
}
