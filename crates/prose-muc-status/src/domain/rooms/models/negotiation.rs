// prose-core-client/prose-muc-status
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

/// The branch the user picked when asked how a freshly created room should be configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomCreationChoice {
    /// Accept the default configuration and create an instant room.
    Default,
    /// Open the room configuration form.
    Change,
}

/// How the room configuration dialog was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomConfigurationResponse {
    /// The submitted configuration was acknowledged by the room.
    Acknowledged,
    Canceled,
}

/// The result of the interactive part of the negotiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NegotiationOutcome {
    /// The user accepted the default configuration and the instant room was created.
    Default,
    /// The user changed the configuration and the room acknowledged it.
    ChangeRequested,
    Canceled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NegotiationResolution {
    /// The room was created without asking the user.
    Created,
    Negotiated(NegotiationOutcome),
    /// Creating or configuring the room failed. Contains the error description.
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreationTrigger {
    AutoJoin,
    UserChoice,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NegotiationState {
    Decide,
    CreatingInstant { trigger: CreationTrigger },
    CreatingPreconfigured,
    AwaitingUserChoice,
    ConfiguringRoom,
    Done(NegotiationResolution),
}

