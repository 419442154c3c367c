//! # Display Shaping
//!
//! Small, pure string helpers shared by both controllers and the TUI:
//! capitalization, Pokédex number padding, id extraction from resource URLs,
//! and flavor-text sanitizing.

/// Character substitutions applied to species flavor text.
///
/// The upstream text is scraped from the games and carries hard line breaks,
/// page-break control characters and the accented "é" of "Pokémon".
/// Anything not listed passes through unchanged.
pub const FLAVOR_TEXT_SUBSTITUTIONS: &[(char, &str)] = &[
    ('\n', " "),
    ('\u{c}', " "),
    ('é', "e"),
];

/// Default colour for a Pokémon whose types are not known yet.
pub const DEFAULT_TYPE_COLOR: &str = "#A8A878";

/// Upper-cases the first character and leaves the rest untouched.
///
/// `"bulbasaur"` → `"Bulbasaur"`, `"mr-mime"` → `"Mr-mime"`.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Capitalizes a move name and turns its hyphens into spaces.
pub fn move_display_name(name: &str) -> String {
    capitalize(&name.replace('-', " "))
}

/// Renders a Pokédex number as `#` plus at least three digits.
pub fn format_dex_id(id: u32) -> String {
    format!("#{:03}", id)
}

/// Returns the second-to-last `/` segment of a resource URL.
///
/// PokéAPI URLs end with a slash, so for
/// `https://pokeapi.co/api/v2/pokemon/25/` this is `"25"`.
pub fn id_from_url(url: &str) -> Option<&str> {
    let segments: Vec<&str> = url.split('/').collect();
    segments
        .len()
        .checked_sub(2)
        .and_then(|index| segments.get(index).copied())
}

/// Applies [`FLAVOR_TEXT_SUBSTITUTIONS`] to `text`.
pub fn normalize_flavor_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match FLAVOR_TEXT_SUBSTITUTIONS.iter().find(|(from, _)| *from == c) {
            Some((_, to)) => out.push_str(to),
            None => out.push(c),
        }
    }
    out
}

/// Image URL for a Pokémon id. The core never downloads it.
pub fn artwork_url(base: &str, id: u32) -> String {
    format!("{}/{}.png", base.trim_end_matches('/'), id)
}

/// Card/header colour for a type name, as a `#RRGGBB` string.
pub fn type_color(type_name: &str) -> &'static str {
    match type_name {
        "grass" => "#48D0B0",
        "fire" => "#FB6C6C",
        "water" => "#76BDFE",
        "bug" => "#A8B820",
        "electric" => "#FFCE4B",
        "poison" => "#A040A0",
        "ground" => "#E0C068",
        "fairy" => "#EE99AC",
        "fighting" => "#C03028",
        "psychic" => "#F85888",
        "rock" => "#B8A038",
        "ghost" => "#705898",
        "ice" => "#98D8D8",
        "dragon" => "#7038F8",
        "dark" => "#705848",
        "steel" => "#B8B8D0",
        "flying" => "#A890F0",
        _ => DEFAULT_TYPE_COLOR,
    }
}

/// Parses a `#RRGGBB` string into its components.
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some((r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_flavor_rules {
        ( $($name:ident: $input:expr => $expected:expr,)+ ) => {
            $(
                #[test]
                fn $name() {
                    assert_eq!(normalize_flavor_text($input), $expected);
                }
            )+
        };
    }

    test_flavor_rules! {
        test_flavor_rules_newline: "A strange seed\nwas planted..." => "A strange seed was planted...",
        test_flavor_rules_form_feed: "on its\u{c}back" => "on its back",
        test_flavor_rules_accent: "POKéMON" => "POKeMON",
        test_flavor_rules_mixed: "It can\nuse\u{c}Pokémon moves" => "It can use Pokemon moves",
        test_flavor_rules_unmapped_pass_through: "Tab\there ü" => "Tab\there ü",
        test_flavor_rules_empty: "" => "",
    }

    #[test]
    fn test_capitalize_first_char_only() {
        assert_eq!(capitalize("bulbasaur"), "Bulbasaur");
        assert_eq!(capitalize("level-up"), "Level-up");
        assert_eq!(capitalize("mR MIME"), "MR MIME");
        assert_eq!(capitalize("a"), "A");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_capitalize_leaves_rest_unchanged_for_many_inputs() {
        for input in ["x", "xYz", "éclair", "123abc", " space", "ALREADY"] {
            let out = capitalize(input);
            let first_len = input.chars().next().map(char::len_utf8).unwrap_or(0);
            assert!(out.ends_with(&input[first_len..]), "{input} -> {out}");
        }
    }

    #[test]
    fn test_move_display_name() {
        assert_eq!(move_display_name("razor-wind"), "Razor wind");
        assert_eq!(move_display_name("swords-dance"), "Swords dance");
        assert_eq!(move_display_name("cut"), "Cut");
    }

    #[test]
    fn test_format_dex_id_pads_to_three() {
        assert_eq!(format_dex_id(7), "#007");
        assert_eq!(format_dex_id(25), "#025");
        assert_eq!(format_dex_id(125), "#125");
        assert_eq!(format_dex_id(1010), "#1010");
    }

    #[test]
    fn test_id_from_url_takes_second_to_last_segment() {
        assert_eq!(id_from_url("https://pokeapi.co/api/v2/pokemon/1/"), Some("1"));
        assert_eq!(
            id_from_url("https://pokeapi.co/api/v2/pokemon/10033/"),
            Some("10033")
        );
        // Without the trailing slash the "second-to-last" rule picks the resource name.
        assert_eq!(id_from_url("https://pokeapi.co/api/v2/pokemon/1"), Some("pokemon"));
        assert_eq!(id_from_url("no-slashes"), None);
    }

    #[test]
    fn test_artwork_url() {
        assert_eq!(
            artwork_url("https://img.example/pokemon/", 25),
            "https://img.example/pokemon/25.png"
        );
    }

    #[test]
    fn test_type_color_known_and_fallback() {
        assert_eq!(type_color("grass"), "#48D0B0");
        assert_eq!(type_color("shadow"), DEFAULT_TYPE_COLOR);
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#48D0B0"), Some((0x48, 0xD0, 0xB0)));
        assert_eq!(parse_hex_color("48D0B0"), None);
        assert_eq!(parse_hex_color("#12345"), None);
        assert_eq!(parse_hex_color("#GG0000"), None);
    }
}
