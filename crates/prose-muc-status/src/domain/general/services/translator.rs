// prose-core-client/prose-muc-status
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use strum_macros::{AsRefStr, Display, EnumIter};

use crate::util::{SendUnlessWasm, SyncUnlessWasm};

/// Looks up localized strings.
#[cfg_attr(feature = "test", mockall::automock)]
pub trait Translator: SendUnlessWasm + SyncUnlessWasm {
    fn translate(&self, key: TranslationKey, args: &TranslationArgs) -> String;
}

/// The catalog keys of all strings the status code handler may show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter)]
pub enum TranslationKey {
    #[strum(serialize = "Every_member_can_see_your_full_JID")]
    EveryMemberCanSeeYourFullJid,
    #[strum(serialize = "Your_affiliation_has_changed")]
    YourAffiliationHasChanged,
    #[strum(serialize = "Room_shows_unavailable_members")]
    RoomShowsUnavailableMembers,
    #[strum(serialize = "Room_does_not_show_unavailable_members")]
    RoomDoesNotShowUnavailableMembers,
    #[strum(serialize = "Room_configuration_has_changed")]
    RoomConfigurationHasChanged,
    #[strum(serialize = "Room_logging_is_enabled")]
    RoomLoggingIsEnabled,
    #[strum(serialize = "Room_logging_is_disabled")]
    RoomLoggingIsDisabled,
    // The misspelling is the established catalog key.
    #[strum(serialize = "Room_is_now_non-anoymous")]
    RoomIsNowNonAnonymous,
    #[strum(serialize = "Room_is_now_semi-anonymous")]
    RoomIsNowSemiAnonymous,
    #[strum(serialize = "muc_removed_banned")]
    MucRemovedBanned,
    #[strum(serialize = "muc_removed_info_banned")]
    MucRemovedInfoBanned,
    #[strum(serialize = "muc_removed_kicked")]
    MucRemovedKicked,
    #[strum(serialize = "muc_removed_info_kicked")]
    MucRemovedInfoKicked,
    #[strum(serialize = "muc_removed_affiliation")]
    MucRemovedAffiliation,
    #[strum(serialize = "muc_removed_info_affiliation")]
    MucRemovedInfoAffiliation,
    #[strum(serialize = "muc_removed_membersonly")]
    MucRemovedMembersOnly,
    #[strum(serialize = "muc_removed_info_membersonly")]
    MucRemovedInfoMembersOnly,
    #[strum(serialize = "muc_removed_shutdown")]
    MucRemovedShutdown,
    #[strum(serialize = "Room_creation")]
    RoomCreation,
    #[strum(serialize = "Do_you_want_to_change_the_default_room_configuration")]
    DoYouWantToChangeTheDefaultRoomConfiguration,
    #[strum(serialize = "Default")]
    Default,
    #[strum(serialize = "Change")]
    Change,
    #[strum(serialize = "Configuration_canceled")]
    ConfigurationCanceled,
    #[strum(serialize = "Room_creation_failed")]
    RoomCreationFailed,
}

/// Values to interpolate into a translated string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TranslationArgs {
    params: Vec<(&'static str, String)>,
    escape_interpolation: bool,
}

impl TranslationArgs {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_param(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.params.push((name, value.into()));
        self
    }

    /// Interpolated values must be sanitized before substitution, e.g. because they are
    /// nicknames chosen by other occupants.
    pub fn escaping_interpolation(mut self) -> Self {
        self.escape_interpolation = true;
        self
    }

    pub fn params(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.params
            .iter()
            .map(|(name, value)| (*name, value.as_str()))
    }

    pub fn escape_interpolation(&self) -> bool {
        self.escape_interpolation
    }
}
