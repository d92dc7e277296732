// prose-core-client/prose-muc-status
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use app::deps::{AppConfig, AppDependencies};
pub use app::event_handlers::StatusCodeHandler;
pub use app::services::RoomCreationNegotiator;
pub use infra::xmpp::MucPresenceExt;


pub mod app;
pub mod domain;
pub mod infra;
pub mod util;

pub mod dtos {
    pub use crate::domain::general::services::{SelectionDialog, TranslationArgs, TranslationKey};
    pub use crate::domain::rooms::models::{
        FormValue, NegotiationOutcome, NegotiationResolution, PresenceCodeSet, RoomConfig,
        RoomConfigurationResponse, RoomCreationChoice, RoomError, StatusCode, Value,
    };
}
