use serde::{Deserialize, Deserializer, Serialize};

/// One day's menu. Absence of data is the empty vector, never a null.
pub type Menu = Vec<MenuItem>;

/// A single offering as delivered by the mensa feed.
///
/// `image` starts out as the raw reference from the feed and is rewritten to
/// an absolute URL during normalization; nothing else is ever mutated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuItem {
    pub title: String,
    #[serde(deserialize_with = "price_as_string")]
    pub price: String,
    pub loc: String,
    pub icon: String,
    pub image: String,
    pub date: String,
}

// The feed usually sends prices as strings ("3.50") but bare numbers have
// been observed as well.
fn price_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum PriceField {
        Text(String),
        Number(f64),
    }

    Ok(match PriceField::deserialize(deserializer)? {
        PriceField::Text(text) => text,
        PriceField::Number(number) => number.to_string(),
    })
}

/// Inbound webhook payload from the conversational platform.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WebhookRequest {
    pub handler: HandlerRef,
    pub session: Session,
    pub user: UserInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandlerRef {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Session {
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserInfo {
    pub locale: Option<String>,
}

/// Outbound webhook payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookResponse {
    pub session: ResponseSession,
    pub prompt: Prompt,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResponseSession {
    pub id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub type_overrides: Vec<TypeOverride>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Prompt {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_simple: Option<Simple>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<Suggestion>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Simple {
    pub speech: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Content {
    Card(Card),
    Collection(Collection),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Card {
    pub title: String,
    pub subtitle: String,
    pub text: String,
    pub image: Image,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    pub url: String,
    pub alt: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Collection {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<CollectionKey>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionKey {
    pub key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Suggestion {
    pub title: String,
}

/// Session-scoped synonym registration so the voice platform can resolve a
/// spoken reference back to one of the displayed collection keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypeOverride {
    pub name: String,
    pub type_override_mode: String,
    pub synonym: SynonymEntries,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynonymEntries {
    pub entries: Vec<SynonymEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynonymEntry {
    pub name: String,
    pub synonyms: Vec<String>,
    pub display: EntryDisplay,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryDisplay {
    pub title: String,
    pub description: String,
    pub image: Image,
}
