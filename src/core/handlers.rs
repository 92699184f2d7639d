use crate::core::i18n::{text, Lang, Msg};
use crate::core::menu::{cheapest_items, item_location, parse_menu, resolve_images, veggie_item};
use crate::core::response::{card_for, collection_for, Conversation};
use crate::domain::model::{Menu, MenuItem, WebhookRequest, WebhookResponse};
use crate::domain::ports::{ConfigProvider, MenuSource};
use crate::utils::error::{MensaError, Result};

/// Webhook engine: resolves the reply language, dispatches the intent and
/// turns the conversation into the platform payload. Each invocation fetches
/// the feed exactly once and shares nothing with other invocations.
pub struct Fulfillment<S: MenuSource, C: ConfigProvider> {
    source: S,
    config: C,
}

impl<S: MenuSource, C: ConfigProvider> Fulfillment<S, C> {
    pub fn new(source: S, config: C) -> Self {
        Self { source, config }
    }

    pub async fn handle(&self, request: &WebhookRequest) -> Result<WebhookResponse> {
        let lang = Lang::from_locale(request.user.locale.as_deref());
        tracing::info!("Handling '{}' intent", request.handler.name);

        let mut conv = Conversation::new(lang);
        match request.handler.name.as_str() {
            "food" => self.handle_food(&mut conv).await,
            "veggie" => self.handle_veggie(&mut conv).await,
            "cheap" => self.handle_cheap(&mut conv).await,
            other => return Err(MensaError::UnknownHandlerError(other.to_string())),
        }

        Ok(conv.into_response(request.session.id.clone()))
    }

    /// Fetch and normalize the menu. Fetch and decode failures collapse to
    /// the empty menu; the distinction only survives in the logs.
    async fn load_menu(&self) -> Menu {
        let raw = match self.source.fetch_raw().await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("Menu fetch failed, replying as closed: {}", e);
                return Vec::new();
            }
        };

        let mut menu = parse_menu(&raw);
        resolve_images(
            &mut menu,
            self.config.image_base_url(),
            self.config.placeholder_image_url(),
        );
        tracing::debug!("Loaded {} menu item(s)", menu.len());
        menu
    }

    fn reply_closed(conv: &mut Conversation) {
        conv.say(Msg::Closed);
        let more = text(conv.lang(), Msg::More);
        conv.ask(more, &[Msg::Cancel]);
    }

    // What is for lunch today?
    async fn handle_food(&self, conv: &mut Conversation) {
        let menu = self.load_menu().await;
        if menu.is_empty() {
            Self::reply_closed(conv);
            return;
        }

        let lang = conv.lang();
        conv.add_text(format!(
            "{}{}{}",
            text(lang, Msg::AllStart),
            menu.len(),
            text(lang, Msg::AllEnd)
        ));

        let items: Vec<&MenuItem> = menu.iter().collect();
        let collection = collection_for(&items, conv);
        conv.add_collection(collection);
        conv.ask(text(lang, Msg::More), &[Msg::Veggie, Msg::Cheapest, Msg::Cancel]);
    }

    // Where is the meatless alternative?
    async fn handle_veggie(&self, conv: &mut Conversation) {
        let menu = self.load_menu().await;
        if menu.is_empty() {
            Self::reply_closed(conv);
            return;
        }

        let lang = conv.lang();
        match veggie_item(&menu) {
            None => {
                conv.say(Msg::NoVeggie);
                conv.ask(text(lang, Msg::More), &[Msg::Cheapest, Msg::Cancel]);
            }
            Some(item) => {
                conv.add_text(format!(
                    "{}{}. ",
                    text(lang, Msg::VeggieLoc),
                    item_location(item)
                ));
                conv.add_card(card_for(item));
                conv.ask(
                    format!("{} in €{}. {}", item.title, item.price, text(lang, Msg::More)),
                    &[Msg::Cheapest, Msg::Cancel],
                );
            }
        }
    }

    // Where is the cheapest option?
    async fn handle_cheap(&self, conv: &mut Conversation) {
        let menu = self.load_menu().await;
        if menu.is_empty() {
            Self::reply_closed(conv);
            return;
        }

        let lang = conv.lang();
        let cheapest = cheapest_items(&menu);
        if cheapest.is_empty() {
            // Reachable when no price on the feed parses as a number.
            conv.say(Msg::NothingOnMenu);
            conv.ask(text(lang, Msg::More), &[Msg::Cancel]);
            return;
        }

        conv.add_text(format!(
            "{}{}",
            item_location(cheapest[0]),
            text(lang, Msg::CheapestLoc)
        ));
        let collection = collection_for(&cheapest, conv);
        conv.add_collection(collection);
        conv.ask(text(lang, Msg::More), &[Msg::Veggie, Msg::Cancel]);
    }
}
