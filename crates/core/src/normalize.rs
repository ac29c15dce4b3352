pub const ZERO_WIDTH_NON_JOINER: char = '\u{200C}';
pub const ZERO_WIDTH_JOINER: char = '\u{200D}';
pub const TATWEEL: char = '\u{0640}';

/// Letterform variants and the canonical Persian codepoint each one folds into.
pub const LETTERFORM_SUBSTITUTIONS: [(char, char); 7] = [
    ('\u{064A}', '\u{06CC}'), // ي arabic yeh
    ('\u{0649}', '\u{06CC}'), // ى alef maksura
    ('\u{0643}', '\u{06A9}'), // ك arabic kaf
    ('\u{0624}', '\u{0648}'), // ؤ waw with hamza
    ('\u{0623}', '\u{0627}'), // أ alef with hamza above
    ('\u{0625}', '\u{0627}'), // إ alef with hamza below
    ('\u{06C0}', '\u{0647}'), // ۀ heh with yeh above
];

pub fn is_joiner(ch: char) -> bool {
    ch == ZERO_WIDTH_NON_JOINER || ch == ZERO_WIDTH_JOINER
}

pub fn is_elongation(ch: char) -> bool {
    ch == TATWEEL
}

pub fn canonical_letterform(ch: char) -> char {
    LETTERFORM_SUBSTITUTIONS
        .iter()
        .find_map(|(variant, canonical)| (*variant == ch).then_some(*canonical))
        .unwrap_or(ch)
}

/// Canonicalizes extracted text and search phrases into one comparable form.
///
/// Joiners become spaces, letterform variants fold into their canonical
/// form, tatweel is dropped, and whitespace is collapsed to single spaces
/// with no leading or trailing space. The result is a fixed point:
/// normalizing it again returns it unchanged.
pub fn normalize(text: &str) -> String {
    let folded: String = text
        .chars()
        .filter(|ch| !is_elongation(*ch))
        .map(|ch| if is_joiner(ch) { ' ' } else { canonical_letterform(ch) })
        .collect();

    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}
