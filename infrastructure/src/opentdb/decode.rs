//! HTML entity decoding for question text.

use scraper::Html;

/// Decode HTML entities (`&quot;`, `&#039;`, `&eacute;` …) into plain text.
///
/// Any markup that slips through is dropped; only text nodes are kept.
pub fn decode_entities(raw: &str) -> String {
    if !raw.contains('&') && !raw.contains('<') {
        return raw.to_string();
    }

    let fragment = Html::parse_fragment(raw);
    fragment.root_element().text().collect::<String>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(decode_entities("Central Processing Unit"), "Central Processing Unit");
    }

    #[test]
    fn test_named_and_numeric_entities() {
        assert_eq!(
            decode_entities("What does &quot;CPU&quot; stand for?"),
            "What does \"CPU\" stand for?"
        );
        assert_eq!(decode_entities("Don&#039;t Panic"), "Don't Panic");
        assert_eq!(decode_entities("Pok&eacute;mon"), "Pokémon");
        assert_eq!(decode_entities("Tom &amp; Jerry"), "Tom & Jerry");
    }

    #[test]
    fn test_tags_are_stripped() {
        assert_eq!(decode_entities("<i>Star Wars</i>"), "Star Wars");
    }
}
