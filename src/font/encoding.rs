//! Character to single-byte code mappings for the standard fonts.

/// Map a character to its `WinAnsiEncoding` (cp1252) code.
pub(crate) fn win_ansi(ch: char) -> Option<u8> {
    match ch {
        ' '..='~' | '\u{A0}'..='\u{FF}' => Some(ch as u32 as u8),
        '€' => Some(0x80),
        '‚' => Some(0x82),
        'ƒ' => Some(0x83),
        '„' => Some(0x84),
        '…' => Some(0x85),
        '†' => Some(0x86),
        '‡' => Some(0x87),
        'ˆ' => Some(0x88),
        '‰' => Some(0x89),
        'Š' => Some(0x8A),
        '‹' => Some(0x8B),
        'Œ' => Some(0x8C),
        'Ž' => Some(0x8E),
        '‘' => Some(0x91),
        '’' => Some(0x92),
        '“' => Some(0x93),
        '”' => Some(0x94),
        '•' => Some(0x95),
        '–' => Some(0x96),
        '—' => Some(0x97),
        '˜' => Some(0x98),
        '™' => Some(0x99),
        'š' => Some(0x9A),
        '›' => Some(0x9B),
        'œ' => Some(0x9C),
        'ž' => Some(0x9E),
        'Ÿ' => Some(0x9F),
        _ => None,
    }
}

/// Map a character to its code and advance width in the Symbol font's built-in
/// encoding. Only the glyphs useful as fallbacks for Helvetica text are listed.
pub(crate) fn symbol(ch: char) -> Option<(u8, u16)> {
    let glyph = match ch {
        ' ' => (0x20, 250),
        '?' => (0x3F, 444),
        '♦' => (0xA8, 753),
        '♣' => (0xA7, 753),
        '♥' => (0xA9, 753),
        '♠' => (0xAA, 753),
        '↔' => (0xAB, 1042),
        '←' => (0xAC, 987),
        '↑' => (0xAD, 603),
        '→' => (0xAE, 987),
        '↓' => (0xAF, 603),
        '≤' => (0xA3, 549),
        '∞' => (0xA5, 713),
        '≥' => (0xB3, 549),
        '∝' => (0xB5, 713),
        '∂' => (0xB6, 494),
        '≠' => (0xB9, 549),
        '≡' => (0xBA, 549),
        '≈' => (0xBB, 549),
        '⇔' => (0xDB, 1042),
        '⇐' => (0xDC, 987),
        '⇑' => (0xDD, 603),
        '⇒' => (0xDE, 987),
        '⇓' => (0xDF, 603),
        '◊' => (0xE0, 494),
        '∑' => (0xE5, 713),
        '√' => (0xD6, 549),
        '∏' => (0xD5, 823),
        '∫' => (0xF2, 274),
        '∈' => (0xCE, 713),
        '∩' => (0xC7, 768),
        '∪' => (0xC8, 768),
        '∅' => (0xC6, 823),
        '∇' => (0xD1, 713),
        '∀' => (0x22, 713),
        '∃' => (0x24, 549),
        'α' => (0x61, 631),
        'β' => (0x62, 549),
        'γ' => (0x67, 411),
        'δ' => (0x64, 494),
        'π' => (0x70, 549),
        'λ' => (0x6C, 549),
        'Ω' => (0x57, 768),
        _ => return None,
    };
    Some(glyph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_and_latin1_map_to_themselves() {
        assert_eq!(win_ansi('A'), Some(0x41));
        assert_eq!(win_ansi('~'), Some(0x7E));
        assert_eq!(win_ansi('\u{A0}'), Some(0xA0));
        assert_eq!(win_ansi('ÿ'), Some(0xFF));
    }

    #[test]
    fn cp1252_specials_use_the_80_to_9f_block() {
        assert_eq!(win_ansi('–'), Some(0x96));
        assert_eq!(win_ansi('“'), Some(0x93));
        assert_eq!(win_ansi('™'), Some(0x99));
        assert_eq!(win_ansi('→'), None);
    }

    #[test]
    fn symbol_covers_arrows() {
        assert_eq!(symbol('→'), Some((0xAE, 987)));
        assert_eq!(symbol('↑'), Some((0xAD, 603)));
        assert_eq!(symbol('x'), None);
    }
}
