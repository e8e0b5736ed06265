// Copyright 2024 Peter Williams <pwil3058@gmail.com> <pwil3058@bigpond.net.au>

use serde_json::{Map, Value};

use pw_tool_lib::codec;

use crate::entry::CardEntry;

/// Deck builder sites that decks can be exported to as URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Gumgum,
    Egman,
    Cardkaizoku,
}

/// Build the deck builder URL for `format`, or the empty string when
/// there are no cards to put in it.
pub fn export_url(cards: &[CardEntry], format: ExportFormat) -> String {
    match format {
        ExportFormat::Gumgum => gumgum_url(cards),
        ExportFormat::Egman => egman_url(cards),
        ExportFormat::Cardkaizoku => cardkaizoku_url(cards),
    }
}

pub fn gumgum_url(cards: &[CardEntry]) -> String {
    if cards.is_empty() {
        return String::new();
    }
    let deck = cards
        .iter()
        .map(|card| format!("{}x{}", card.quantity, card.code))
        .collect::<Vec<_>>()
        .join(";");
    format!("https://gumgum.gg/deckbuilder?deck={deck}")
}

pub fn egman_url(cards: &[CardEntry]) -> String {
    if cards.is_empty() {
        return String::new();
    }
    let deck = cards
        .iter()
        .map(|card| format!("{}:{}", card.code, card.quantity))
        .collect::<Vec<_>>()
        .join(",");
    format!("https://deckbuilder.egmanevents.com/?deck={deck}&type=optcg")
}

pub fn cardkaizoku_url(cards: &[CardEntry]) -> String {
    if cards.is_empty() {
        return String::new();
    }
    let deck: Map<String, Value> = cards
        .iter()
        .map(|card| (card.code.clone(), Value::from(card.quantity)))
        .collect();
    let json = Value::Object(deck).to_string();
    format!(
        "https://deckbuilder.cardkaizoku.com/?deck={}",
        codec::encode_base64(&json)
    )
}

#[cfg(test)]
mod export_tests {
    use super::*;
    use crate::import::parse_deck_input;

    fn cards() -> Vec<CardEntry> {
        vec![CardEntry::new("OP01-001", 4), CardEntry::new("OP01-016", 2)]
    }

    #[test]
    fn gumgum_urls_render() {
        assert_eq!(
            gumgum_url(&cards()),
            "https://gumgum.gg/deckbuilder?deck=4xOP01-001;2xOP01-016"
        );
    }

    #[test]
    fn egman_urls_render() {
        assert_eq!(
            egman_url(&cards()),
            "https://deckbuilder.egmanevents.com/?deck=OP01-001:4,OP01-016:2&type=optcg"
        );
    }

    #[test]
    fn cardkaizoku_urls_render() {
        // The payload is base64 for {"OP01-001":4,"OP01-016":2}.
        assert_eq!(
            cardkaizoku_url(&cards()),
            "https://deckbuilder.cardkaizoku.com/?deck=eyJPUDAxLTAwMSI6NCwiT1AwMS0wMTYiOjJ9"
        );
    }

    #[test]
    fn every_format_returns_empty_for_no_cards() {
        assert_eq!(export_url(&[], ExportFormat::Gumgum), "");
        assert_eq!(export_url(&[], ExportFormat::Egman), "");
        assert_eq!(export_url(&[], ExportFormat::Cardkaizoku), "");
    }

    #[test]
    fn exported_urls_import_back() {
        for format in [
            ExportFormat::Gumgum,
            ExportFormat::Egman,
            ExportFormat::Cardkaizoku,
        ] {
            let url = export_url(&cards(), format);
            assert_eq!(parse_deck_input(&url), cards(), "{format:?}");
        }
    }
}
