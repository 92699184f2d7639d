use crate::core::i18n::{text, Lang, Msg};
use crate::core::menu::item_location;
use crate::domain::model::{
    Card, Collection, CollectionKey, Content, EntryDisplay, Image, MenuItem, Prompt,
    ResponseSession, Simple, Suggestion, SynonymEntries, SynonymEntry, TypeOverride,
    WebhookResponse,
};

/// Ordered output sink for one webhook invocation.
///
/// Handlers append text, rich elements and chips in the order they should be
/// presented; `into_response` folds everything into the platform payload.
pub struct Conversation {
    lang: Lang,
    elements: Vec<ResponseElement>,
    type_overrides: Vec<TypeOverride>,
}

enum ResponseElement {
    Text(String),
    Card(Card),
    Collection(Collection),
    Suggestion(Suggestion),
}

impl Conversation {
    pub fn new(lang: Lang) -> Self {
        Self {
            lang,
            elements: Vec::new(),
            type_overrides: Vec::new(),
        }
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    pub fn add_text(&mut self, text: impl Into<String>) {
        self.elements.push(ResponseElement::Text(text.into()));
    }

    /// Append a localized table string.
    pub fn say(&mut self, msg: Msg) {
        let line = text(self.lang, msg);
        self.add_text(line);
    }

    pub fn add_card(&mut self, card: Card) {
        self.elements.push(ResponseElement::Card(card));
    }

    pub fn add_collection(&mut self, collection: Collection) {
        self.elements.push(ResponseElement::Collection(collection));
    }

    /// Ask a follow-up question and offer localized suggestion chips.
    pub fn ask(&mut self, question: impl Into<String>, chips: &[Msg]) {
        self.add_text(question);
        for &chip in chips {
            self.elements.push(ResponseElement::Suggestion(Suggestion {
                title: text(self.lang, chip).to_string(),
            }));
        }
    }

    fn set_type_override(&mut self, type_override: TypeOverride) {
        self.type_overrides = vec![type_override];
    }

    /// Fold the collected elements into the webhook payload. Text elements
    /// concatenate into one speech prompt (the table strings carry their own
    /// trailing spaces); the last rich element wins the content slot.
    pub fn into_response(self, session_id: String) -> WebhookResponse {
        let mut speech = String::new();
        let mut content = None;
        let mut suggestions = Vec::new();

        for element in self.elements {
            match element {
                ResponseElement::Text(t) => speech.push_str(&t),
                ResponseElement::Card(card) => content = Some(Content::Card(card)),
                ResponseElement::Collection(c) => content = Some(Content::Collection(c)),
                ResponseElement::Suggestion(s) => suggestions.push(s),
            }
        }

        WebhookResponse {
            session: ResponseSession {
                id: session_id,
                type_overrides: self.type_overrides,
            },
            prompt: Prompt {
                first_simple: (!speech.is_empty()).then_some(Simple { speech }),
                content,
                suggestions,
            },
        }
    }
}

/// Card showing a single item: station as title, price and diet icon as
/// subtitle, the dish itself as body text.
pub fn card_for(item: &MenuItem) -> Card {
    Card {
        title: item_location(item).to_string(),
        subtitle: format!("€{} | {}", item.price, item.icon),
        text: item.title.clone(),
        image: Image {
            url: item.image.clone(),
            alt: item.title.clone(),
        },
    }
}

/// Collection over several items, keyed by location code. Registers the
/// matching synonym override on the conversation so the platform can map a
/// spoken answer back to a key; the entry set always equals the rendered
/// keys.
pub fn collection_for(items: &[&MenuItem], conv: &mut Conversation) -> Collection {
    let mut keys = Vec::with_capacity(items.len());
    let mut entries = Vec::with_capacity(items.len());

    for item in items {
        keys.push(CollectionKey {
            key: item.loc.clone(),
        });
        entries.push(SynonymEntry {
            name: item.loc.clone(),
            synonyms: Vec::new(),
            display: EntryDisplay {
                title: item.title.clone(),
                description: format!("€{} | {} | {}", item.price, item_location(item), item.icon),
                image: Image {
                    url: item.image.clone(),
                    alt: item.title.clone(),
                },
            },
        });
    }

    conv.set_type_override(TypeOverride {
        name: "prompt_option".to_string(),
        type_override_mode: "TYPE_REPLACE".to_string(),
        synonym: SynonymEntries { entries },
    });

    Collection {
        title: "TUK Mensa".to_string(),
        subtitle: items.first().map(|item| item.date.clone()).unwrap_or_default(),
        items: keys,
    }
}
