//! Translation of pronoun codes to display text.
//!
//! Pronoun annotations arrive as short internal codes (e.g. `theythem`)
//! and are translated to human-readable text through a fixed table.

/// Translates an internal pronoun code to its display text.
///
/// Returns `None` for codes outside the fixed table so callers can fall
/// back to showing nothing.
#[must_use]
pub fn display(code: &str) -> Option<&'static str> {
    let text = match code {
        "aeaer" => "Ae/Aer",
        "any" => "Any",
        "eem" => "E/Em",
        "faefaer" => "Fae/Faer",
        "hehim" => "He/Him",
        "heshe" => "He/She",
        "hethem" => "He/They",
        "itits" => "It/Its",
        "other" => "Other",
        "perper" => "Per/Per",
        "sheher" => "She/Her",
        "shethem" => "She/They",
        "theythem" => "They/Them",
        "vever" => "Ve/Ver",
        "xexem" => "Xe/Xem",
        "ziehir" => "Zie/Hir",
        _ => return None,
    };

    Some(text)
}
