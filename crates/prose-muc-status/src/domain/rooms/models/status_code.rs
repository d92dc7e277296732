// prose-core-client/prose-muc-status
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Display, Formatter};

use crate::domain::general::services::TranslationKey;

/// XEP-0045: Multi-User Chat
/// https://xmpp.org/extensions/xep-0045.html#registrar-statuscodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum StatusCode {
    /// Any occupant is allowed to see the user's full JID.
    NonAnonymousRoom = 100,
    /// The user's affiliation changed while not in the room.
    AffiliationChange = 101,
    /// The room now shows unavailable members.
    ConfigShowsUnavailableMembers = 102,
    /// The room now does not show unavailable members.
    ConfigHidesUnavailableMembers = 103,
    /// A non-privacy-related room configuration change has occurred.
    ConfigNonPrivacyRelated = 104,
    /// The presence refers to the user itself.
    SelfPresence = 110,
    /// Room logging is now enabled.
    ConfigRoomLoggingEnabled = 170,
    /// Room logging is now disabled.
    ConfigRoomLoggingDisabled = 171,
    /// The room is now non-anonymous.
    ConfigRoomNonAnonymous = 172,
    /// The room is now semi-anonymous.
    ConfigRoomSemiAnonymous = 173,
    /// A new room has been created as a side effect of joining it.
    RoomHasBeenCreated = 201,
    /// The occupant has been banned from the room.
    Banned = 301,
    /// The occupant has been kicked from the room.
    Kicked = 307,
    /// The occupant is removed because of an affiliation change.
    RemovalFromRoom = 321,
    /// The occupant is removed because the room has been changed to members-only and the
    /// occupant is not a member.
    ConfigMembersOnly = 322,
    /// The occupant is removed because the MUC service is being shut down.
    ServiceShutdown = 332,
}

/// What needs to happen when a `StatusCode` is observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCodeAction {
    /// Append an informational notice.
    Notice(TranslationKey),
    /// Refresh the room's cached features, then append a notice.
    RefreshFeatures(TranslationKey),
    /// Reassert our own nickname and mark the member list as complete. Silent.
    ReassertSelfPresence,
    /// Start the room creation negotiation. Nothing is appended synchronously.
    NegotiateRoomCreation,
    /// Append a removal notice, phrased depending on whether we were removed or somebody else.
    Removal {
        self_key: TranslationKey,
        other_key: TranslationKey,
    },
    /// Append the shutdown notice regardless of who the presence is about.
    ServiceShutdown(TranslationKey),
}

#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone, Copy)]
#[error("Unknown MUC status code {0}.")]
pub struct UnknownStatusCode(pub u16);

impl StatusCode {
    pub fn action(self) -> StatusCodeAction {
        use StatusCodeAction::*;
        use TranslationKey as Key;

        match self {
            Self::NonAnonymousRoom => Notice(Key::EveryMemberCanSeeYourFullJid),
            Self::AffiliationChange => Notice(Key::YourAffiliationHasChanged),
            Self::ConfigShowsUnavailableMembers => Notice(Key::RoomShowsUnavailableMembers),
            Self::ConfigHidesUnavailableMembers => Notice(Key::RoomDoesNotShowUnavailableMembers),
            Self::ConfigNonPrivacyRelated => RefreshFeatures(Key::RoomConfigurationHasChanged),
            Self::SelfPresence => ReassertSelfPresence,
            Self::ConfigRoomLoggingEnabled => Notice(Key::RoomLoggingIsEnabled),
            Self::ConfigRoomLoggingDisabled => Notice(Key::RoomLoggingIsDisabled),
            Self::ConfigRoomNonAnonymous => RefreshFeatures(Key::RoomIsNowNonAnonymous),
            Self::ConfigRoomSemiAnonymous => RefreshFeatures(Key::RoomIsNowSemiAnonymous),
            Self::RoomHasBeenCreated => NegotiateRoomCreation,
            Self::Banned => Removal {
                self_key: Key::MucRemovedBanned,
                other_key: Key::MucRemovedInfoBanned,
            },
            Self::Kicked => Removal {
                self_key: Key::MucRemovedKicked,
                other_key: Key::MucRemovedInfoKicked,
            },
            Self::RemovalFromRoom => Removal {
                self_key: Key::MucRemovedAffiliation,
                other_key: Key::MucRemovedInfoAffiliation,
            },
            Self::ConfigMembersOnly => Removal {
                self_key: Key::MucRemovedMembersOnly,
                other_key: Key::MucRemovedInfoMembersOnly,
            },
            Self::ServiceShutdown => ServiceShutdown(Key::MucRemovedShutdown),
        }
    }
}

impl TryFrom<u16> for StatusCode {
    type Error = UnknownStatusCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            100 => Self::NonAnonymousRoom,
            101 => Self::AffiliationChange,
            102 => Self::ConfigShowsUnavailableMembers,
            103 => Self::ConfigHidesUnavailableMembers,
            104 => Self::ConfigNonPrivacyRelated,
            110 => Self::SelfPresence,
            170 => Self::ConfigRoomLoggingEnabled,
            171 => Self::ConfigRoomLoggingDisabled,
            172 => Self::ConfigRoomNonAnonymous,
            173 => Self::ConfigRoomSemiAnonymous,
            201 => Self::RoomHasBeenCreated,
            301 => Self::Banned,
            307 => Self::Kicked,
            321 => Self::RemovalFromRoom,
            322 => Self::ConfigMembersOnly,
            332 => Self::ServiceShutdown,
            _ => return Err(UnknownStatusCode(value)),
        };
        Ok(code)
    }
}

impl From<StatusCode> for u16 {
    fn from(value: StatusCode) -> Self {
        value as u16
    }
}

impl Display for StatusCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", u16::from(*self))
    }
}
