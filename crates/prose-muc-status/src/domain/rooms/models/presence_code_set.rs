// prose-core-client/prose-muc-status
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::rooms::models::StatusCode;

/// The status codes attached to a single MUC presence, in stanza order.
///
/// Unknown values and duplicates are kept so that every occurrence is seen by the handler.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PresenceCodeSet {
    codes: Vec<u16>,
    is_self_referred: bool,
}

impl PresenceCodeSet {
    pub fn new(codes: impl IntoIterator<Item = u16>) -> Self {
        let codes = codes.into_iter().collect::<Vec<_>>();
        let is_self_referred = codes.contains(&u16::from(StatusCode::SelfPresence));

        Self {
            codes,
            is_self_referred,
        }
    }

    /// Whether the presence describes our own occupant, i.e. contains status code 110.
    pub fn is_self_referred(&self) -> bool {
        self.is_self_referred
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// The raw values as received, including the ones we don't know about.
    pub fn raw_codes(&self) -> &[u16] {
        &self.codes
    }

    /// The known status codes in order. Unknown values are skipped.
    pub fn status_codes(&self) -> impl Iterator<Item = StatusCode> + '_ {
        self.codes
            .iter()
            .filter_map(|value| StatusCode::try_from(*value).ok())
    }
}

impl From<Vec<u16>> for PresenceCodeSet {
    fn from(value: Vec<u16>) -> Self {
        Self::new(value)
    }
}

impl From<&[u16]> for PresenceCodeSet {
    fn from(value: &[u16]) -> Self {
        Self::new(value.iter().copied())
    }
}

impl FromIterator<StatusCode> for PresenceCodeSet {
    fn from_iter<T: IntoIterator<Item = StatusCode>>(iter: T) -> Self {
        Self::new(iter.into_iter().map(u16::from))
    }
}
