// prose-core-client/prose-muc-status
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use pulldown_cmark_escape::escape_html;

use crate::domain::general::services::{TranslationArgs, TranslationKey, Translator};

/// A `Translator` backed by an in-memory catalog. Templates reference params as `{{name}}`.
#[derive(Debug, Clone, Default)]
pub struct CatalogTranslator {
    entries: HashMap<TranslationKey, String>,
}

impl CatalogTranslator {
    pub fn english() -> Self {
        use TranslationKey::*;

        Self::default()
            .with_entry(
                EveryMemberCanSeeYourFullJid,
                "Every member of this room can see your full JID.",
            )
            .with_entry(
                YourAffiliationHasChanged,
                "Your affiliation has changed while you were not in this room.",
            )
            .with_entry(
                RoomShowsUnavailableMembers,
                "This room now shows unavailable members.",
            )
            .with_entry(
                RoomDoesNotShowUnavailableMembers,
                "This room does not show unavailable members anymore.",
            )
            .with_entry(
                RoomConfigurationHasChanged,
                "The room configuration has changed.",
            )
            .with_entry(RoomLoggingIsEnabled, "Room logging is now enabled.")
            .with_entry(RoomLoggingIsDisabled, "Room logging is now disabled.")
            .with_entry(RoomIsNowNonAnonymous, "This room is now non-anonymous.")
            .with_entry(RoomIsNowSemiAnonymous, "This room is now semi-anonymous.")
            .with_entry(MucRemovedBanned, "You have been banned from this room.")
            .with_entry(
                MucRemovedInfoBanned,
                "{{nickname}} has been banned from this room.",
            )
            .with_entry(MucRemovedKicked, "You have been kicked from this room.")
            .with_entry(
                MucRemovedInfoKicked,
                "{{nickname}} has been kicked from this room.",
            )
            .with_entry(
                MucRemovedAffiliation,
                "You have been removed from this room because of an affiliation change.",
            )
            .with_entry(
                MucRemovedInfoAffiliation,
                "{{nickname}} has been removed from this room because of an affiliation change.",
            )
            .with_entry(
                MucRemovedMembersOnly,
                "You have been removed from this room because it is now members-only and you are not a member.",
            )
            .with_entry(
                MucRemovedInfoMembersOnly,
                "{{nickname}} has been removed from this room because it is now members-only.",
            )
            .with_entry(
                MucRemovedShutdown,
                "You have been removed from this room because the service is shutting down.",
            )
            .with_entry(RoomCreation, "Room creation")
            .with_entry(
                DoYouWantToChangeTheDefaultRoomConfiguration,
                "Do you want to change the default room configuration?",
            )
            .with_entry(TranslationKey::Default, "Default")
            .with_entry(TranslationKey::Change, "Change")
            .with_entry(ConfigurationCanceled, "Configuration canceled.")
            .with_entry(RoomCreationFailed, "The room could not be created.")
    }

    pub fn with_entry(mut self, key: TranslationKey, template: impl Into<String>) -> Self {
        self.entries.insert(key, template.into());
        self
    }

    pub fn contains(&self, key: TranslationKey) -> bool {
        self.entries.contains_key(&key)
    }
}

impl Translator for CatalogTranslator {
    fn translate(&self, key: TranslationKey, args: &TranslationArgs) -> String {
        let Some(template) = self.entries.get(&key) else {
            return key.to_string();
        };
        interpolate(template, args)
    }
}

/// Substitutes `{{name}}` placeholders in a single pass so that interpolated values are never
/// interpreted as placeholders themselves.
fn interpolate(template: &str, args: &TranslationArgs) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut remainder = template;

    while let Some(start) = remainder.find("{{") {
        rendered.push_str(&remainder[..start]);
        let placeholder = &remainder[start..];

        let Some(end) = placeholder.find("}}") else {
            remainder = placeholder;
            break;
        };

        let name = placeholder[2..end].trim();
        match args.params().find(|(param, _)| *param == name) {
            Some((_, value)) if args.escape_interpolation() => {
                if let Err(err) = escape_html(&mut rendered, value) {
                    unreachable!("writing to a String cannot fail: {err}");
                }
            }
            Some((_, value)) => rendered.push_str(value),
            None => rendered.push_str(&placeholder[..end + 2]),
        }

        remainder = &placeholder[end + 2..];
    }

    // An unterminated placeholder is kept verbatim.
    rendered.push_str(remainder);
    rendered
}
