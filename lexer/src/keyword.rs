//! The keyword table. LOLCODE keywords are either a single word (`VISIBLE`)
//! or a fixed phrase of up to four words (`IF U SAY SO`); `fold_phrase`
//! tries the longest phrases first so `IS NOW A` doesn't get mis-split into
//! a bare `IS` followed by leftovers.

use crate::token::TokenKind;

const PHRASES_4: &[(&[&str], TokenKind)] = &[(&["IF", "U", "SAY", "SO"], TokenKind::IfUSaySo)];

const PHRASES_3: &[(&[&str], TokenKind)] = &[
    (&["IS", "NOW", "A"], TokenKind::IsNowA),
    (&["IM", "IN", "YR"], TokenKind::ImInYr),
    (&["IM", "OUTTA", "YR"], TokenKind::ImOuttaYr),
];

const PHRASES_2: &[(&[&str], TokenKind)] = &[
    (&["O", "RLY?"], TokenKind::ORly),
    (&["YA", "RLY"], TokenKind::YaRly),
    (&["NO", "WAI"], TokenKind::NoWai),
    (&["OMG", "WTF"], TokenKind::OmgWtf),
    (&["HAS", "A"], TokenKind::HasA),
    (&["HOW", "IZ"], TokenKind::HowIz),
    (&["FOUND", "YR"], TokenKind::FoundYr),
    (&["AN", "YR"], TokenKind::AnYr),
    (&["SUM", "OF"], TokenKind::SumOf),
    (&["DIFF", "OF"], TokenKind::DiffOf),
    (&["PRODUKT", "OF"], TokenKind::ProduktOf),
    (&["QUOSHUNT", "OF"], TokenKind::QuoshuntOf),
    (&["MOD", "OF"], TokenKind::ModOf),
    (&["BIGGR", "OF"], TokenKind::BiggrOf),
    (&["SMALLR", "OF"], TokenKind::SmallrOf),
    (&["BOTH", "OF"], TokenKind::BothOf),
    (&["EITHER", "OF"], TokenKind::EitherOf),
    (&["WON", "OF"], TokenKind::WonOf),
    (&["ALL", "OF"], TokenKind::AllOf),
    (&["ANY", "OF"], TokenKind::AnyOf),
    (&["BOTH", "SAEM"], TokenKind::BothSaem),
];

/// Tries to fold `words[start..]` into a multi-word keyword, longest match
/// first. Returns the matched kind and how many words it consumed.
pub fn fold_phrase(words: &[&str], start: usize) -> Option<(TokenKind, usize)> {
    for (phrases, len) in [(PHRASES_4, 4), (PHRASES_3, 3), (PHRASES_2, 2)] {
        if start + len > words.len() {
            continue;
        }
        for (phrase, kind) in phrases {
            if words[start..start + len]
                .iter()
                .zip(phrase.iter())
                .all(|(w, p)| *w == *p)
            {
                return Some((*kind, len));
            }
        }
    }
    None
}

/// Looks up a single word as a keyword or type name. Returns `None` for
/// anything that isn't a reserved word (the caller then tries literal and
/// identifier recognition).
pub fn lookup_word(word: &str) -> Option<TokenKind> {
    use TokenKind::*;
    Some(match word {
        "HAI" => Hai,
        "KTHXBYE" => KThxBye,
        "VISIBLE" => Visible,
        "!" => Bang,
        "GIMMEH" => Gimmeh,
        "R" => R,
        "ITZ" => Itz,
        "A" => A,
        "MEBBE" => Mebbe,
        "OIC" => Oic,
        "WTF?" => Wtf,
        "OMG" => Omg,
        "GTFO" => Gtfo,
        "UPPIN" => Uppin,
        "NERFIN" => Nerfin,
        "YR" => Yr,
        "TIL" => Til,
        "WILE" => Wile,
        "IZ" => Iz,
        "MKAY" => Mkay,
        "MAEK" => Maek,
        "AN" => An,
        "SMOOSH" => Smoosh,
        "NOT" => Not,
        "DIFFRINT" => Diffrint,
        "IT" => It,
        "NOOB" => Noob,
        "TROOF" => Troof,
        "NUMBR" => Numbr,
        "NUMBAR" => Numbar,
        "YARN" => Yarn,
        _ => return None,
    })
}
