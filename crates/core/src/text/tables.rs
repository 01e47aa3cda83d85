//! Fixed character tables used by the canonicalization pipeline.

use std::ops::RangeInclusive;

/// Zero-width space, non-joiner, joiner, word joiner, byte-order mark.
pub(super) const ZERO_WIDTH: &[char] = &['\u{200B}', '\u{200C}', '\u{200D}', '\u{2060}', '\u{FEFF}'];

/// ‘ ’ ‚ ‛
pub(super) const CURLY_SINGLE_QUOTES: &[char] = &['\u{2018}', '\u{2019}', '\u{201A}', '\u{201B}'];

/// “ ” „ ‟
pub(super) const CURLY_DOUBLE_QUOTES: &[char] = &['\u{201C}', '\u{201D}', '\u{201E}', '\u{201F}'];

pub(super) const ARABIC_TATWEEL: char = '\u{0640}';

pub(super) const ARABIC_DIACRITICS: &[RangeInclusive<char>] = &[
    '\u{0610}'..='\u{061A}',
    '\u{064B}'..='\u{065F}',
    '\u{0670}'..='\u{0670}',
    '\u{06D6}'..='\u{06ED}',
];

/// Arabic-alphabet letter variants folded onto their Persian-script base letter.
pub(super) const ARABIC_LETTER_FOLDS: &[(char, char)] = &[
    ('\u{0622}', '\u{0627}'), // آ → ا
    ('\u{0623}', '\u{0627}'), // أ → ا
    ('\u{0625}', '\u{0627}'), // إ → ا
    ('\u{0671}', '\u{0627}'), // ٱ → ا
    ('\u{064A}', '\u{06CC}'), // ي → ی
    ('\u{0649}', '\u{06CC}'), // ى → ی
    ('\u{0643}', '\u{06A9}'), // ك → ک
    ('\u{0629}', '\u{0647}'), // ة → ه
    ('\u{0624}', '\u{0648}'), // ؤ → و
    ('\u{0626}', '\u{06CC}'), // ئ → ی
];

/// Hebrew points and cantillation marks.
pub(super) const HEBREW_DIACRITICS: &[RangeInclusive<char>] = &[
    '\u{0591}'..='\u{05BD}',
    '\u{05BF}'..='\u{05BF}',
    '\u{05C1}'..='\u{05C2}',
    '\u{05C4}'..='\u{05C5}',
    '\u{05C7}'..='\u{05C7}',
];

/// Full-width signs outside the contiguous ASCII block.
pub(super) const FULLWIDTH_SIGNS: &[(char, char)] = &[
    ('\u{3000}', ' '),
    ('\u{FFE0}', '\u{00A2}'),
    ('\u{FFE1}', '\u{00A3}'),
    ('\u{FFE2}', '\u{00AC}'),
    ('\u{FFE3}', '\u{00AF}'),
    ('\u{FFE4}', '\u{00A6}'),
    ('\u{FFE5}', '\u{00A5}'),
    ('\u{FFE6}', '\u{20A9}'),
];

/// U+FF01..=U+FF5E sit at a fixed offset from U+0021..=U+007E.
pub(super) const FULLWIDTH_ASCII: RangeInclusive<char> = '\u{FF01}'..='\u{FF5E}';
pub(super) const FULLWIDTH_ASCII_OFFSET: u32 = 0xFEE0;

pub(super) fn in_ranges(ranges: &[RangeInclusive<char>], c: char) -> bool {
    ranges.iter().any(|r| r.contains(&c))
}

pub(super) fn lookup(table: &[(char, char)], c: char) -> Option<char> {
    table.iter().find(|(from, _)| *from == c).map(|(_, to)| *to)
}
