pub mod fetch;
pub mod handlers;
pub mod i18n;
pub mod menu;
pub mod response;

pub use crate::domain::model::{Menu, MenuItem, WebhookRequest, WebhookResponse};
pub use crate::domain::ports::{ConfigProvider, MenuSource};
pub use crate::utils::error::Result;
