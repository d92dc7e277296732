// prose-core-client/prose-muc-status
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use negotiation::{
    CreationTrigger, NegotiationOutcome, NegotiationResolution, NegotiationState,
    RoomConfigurationResponse, RoomCreationChoice,
};
pub use presence_code_set::PresenceCodeSet;
pub use room_config::{FormValue, RoomConfig, Value, MUC_ROOMCONFIG_FORM_TYPE};
pub use room_error::RoomError;
pub use status_code::{StatusCode, StatusCodeAction, UnknownStatusCode};

mod negotiation;
mod presence_code_set;
mod room_config;
mod room_error;
mod status_code;
