// prose-core-client/prose-muc-status
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use minidom::Element;
use tracing::warn;
use xmpp_parsers::ns;
use xmpp_parsers::presence::Presence;

use crate::domain::rooms::models::PresenceCodeSet;

pub trait MucPresenceExt {
    /// Returns the status codes of the `muc#user` payload or `None` if the presence has none.
    ///
    /// Codes are read straight from the payload instead of through `xmpp_parsers::muc::MucUser`,
    /// which rejects codes it doesn't know.
    fn muc_status_codes(&self) -> Option<PresenceCodeSet>;
}

impl MucPresenceExt for Presence {
    fn muc_status_codes(&self) -> Option<PresenceCodeSet> {
        self.payloads
            .iter()
            .find(|payload| payload.is("x", ns::MUC_USER))
            .map(status_codes_from_muc_user)
    }
}

fn status_codes_from_muc_user(muc_user: &Element) -> PresenceCodeSet {
    PresenceCodeSet::new(
        muc_user
            .children()
            .filter(|child| child.is("status", ns::MUC_USER))
            .filter_map(|status| {
                let code = status.attr("code")?;
                match code.parse::<u16>() {
                    Ok(code) => Some(code),
                    Err(_) => {
                        warn!("Ignoring malformed MUC status code '{}'.", code);
                        None
                    }
                }
            }),
    )
}
