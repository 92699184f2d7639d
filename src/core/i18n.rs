/// Reply language. Everything the action can say exists in English and
/// German; English is the fallback for every other locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    En,
    De,
}

impl Lang {
    /// Derive the reply language from a BCP-47 locale tag (e.g. "de-DE").
    /// Only the language subtag matters; anything unknown falls back to
    /// English.
    pub fn from_locale(locale: Option<&str>) -> Self {
        match locale.and_then(|tag| tag.get(..2)) {
            Some("de") => Lang::De,
            _ => Lang::En,
        }
    }
}

/// Message keys of the localized string table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    Closed,
    NothingOnMenu,
    AllStart,
    AllEnd,
    Cheapest,
    CheapestLoc,
    Veggie,
    NoVeggie,
    VeggieLoc,
    More,
    Cancel,
}

/// Resolve a message key for a language. Total over both enums; the table is
/// static and never changes at runtime.
///
/// Most strings carry a trailing space so consecutive sentences can be
/// concatenated into one speech prompt.
pub fn text(lang: Lang, msg: Msg) -> &'static str {
    use Lang::*;
    use Msg::*;

    match (msg, lang) {
        (Closed, En) => "The Mensa is closed today. 😔 ",
        (Closed, De) => "Die Mensa ist heute geschlossen. 😔 ",
        (NothingOnMenu, En) => "There is nothing on the menu today. ",
        (NothingOnMenu, De) => "Leider haben wir heute keine Angebote. ",
        (AllStart, En) => "Today, we have ",
        (AllStart, De) => "Heute haben wir ",
        (AllEnd, En) => " items on the menu. ",
        (AllEnd, De) => " Angebote. ",
        (Cheapest, En) => "Cheapest",
        (Cheapest, De) => "Billiger",
        (CheapestLoc, En) => " has the cheapest food. ",
        (CheapestLoc, De) => " hat das billigste Angebot. ",
        (Veggie, En) => "Meatless",
        (Veggie, De) => "Fleischlos",
        (NoVeggie, En) => "There is no vegetarian alternative available today. ",
        (NoVeggie, De) => "Fleischlose Alternative heute nicht verfügbar. ",
        (VeggieLoc, En) => "The meatless option is in ",
        (VeggieLoc, De) => "Die fleischlose Alternative ist in ",
        (More, En) => "Can I help you with anything else? ",
        (More, De) => "Kann ich sonst noch helfen? ",
        (Cancel, En) => "Cancel",
        (Cancel, De) => "Abbrechen",
    }
}
