// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kindred-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kindred and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use memchr::memrchr;

use super::line::push_line;

pub const DEFAULT_MAX_LINE_LENGTH: usize = 80;

const CONT_TAG: &str = "CONT";
const CONC_TAG: &str = "CONC";

/// Emit `{level} {tag} {value}`, splitting over-length values across
/// continuation lines.
///
/// `CONT` marks a chunk boundary that reads back as a line break; `CONC`
/// marks silent concatenation and preserves every character of a forced
/// mid-word split. A chunk is only broken at a space when that space sits
/// at or beyond half the available chunk width; the dropped space reads
/// back as the `CONT` line break.
///
/// Widths are byte counts; split points are snapped to `char` boundaries so
/// a multi-byte character is never torn apart.
pub fn push_wrapped_line(
    out: &mut String,
    level: u8,
    tag: &str,
    value: &str,
    max_line_length: usize,
) {
    let head_prefix = prefix_width(level, tag);
    if head_prefix + value.len() <= max_line_length {
        push_line(out, level, None, tag, value);
        return;
    }

    let head_width = available_width(max_line_length, head_prefix);
    let head_end = floor_char_boundary(value, head_width);
    push_line(out, level, None, tag, &value[..head_end]);
    let mut rest = &value[head_end..];

    let cont_level = level.saturating_add(1);
    let cont_width = available_width(max_line_length, prefix_width(cont_level, CONT_TAG));

    while !rest.is_empty() {
        if rest.len() <= cont_width {
            push_line(out, cont_level, None, CONT_TAG, rest);
            return;
        }

        let chunk_end = floor_char_boundary(rest, cont_width);
        let chunk = &rest[..chunk_end];

        match memrchr(b' ', chunk.as_bytes()) {
            // Only a space in the back half of the chunk is an acceptable
            // break point; the space itself is dropped.
            Some(space_idx) if space_idx * 2 >= chunk.len() => {
                push_line(out, cont_level, None, CONT_TAG, &chunk[..space_idx]);
                rest = &rest[space_idx + 1..];
            }
            _ => {
                push_line(out, cont_level, None, CONC_TAG, chunk);
                rest = &rest[chunk_end..];
            }
        }
    }
}

fn prefix_width(level: u8, tag: &str) -> usize {
    let mut level_buf = itoa::Buffer::new();
    // "{level} {tag} "
    level_buf.format(level).len() + 1 + tag.len() + 1
}

fn available_width(max_line_length: usize, prefix: usize) -> usize {
    // Clamped so pathological limits still make progress.
    max_line_length.saturating_sub(prefix).max(1)
}

fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    let mut index = index;
    while !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}
