// prose-core-client/prose-muc-status
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use jid::Jid;
use minidom::Element;
use xmpp_parsers::ns;

pub const MUC_ROOMCONFIG_FORM_TYPE: &str = "http://jabber.org/protocol/muc#roomconfig";

#[derive(Debug, PartialEq, Clone)]
pub enum Value {
    Boolean(bool),
    JidMulti(Vec<Jid>),
    JidSingle(Jid),
    ListMulti(Vec<String>),
    ListSingle(String),
    TextMulti(Vec<String>),
    TextSingle(String),
}

#[derive(Debug, PartialEq, Clone)]
pub struct FormValue {
    pub var: String,
    pub value: Value,
}

impl FormValue {
    pub fn new(var: impl Into<String>, value: Value) -> Self {
        Self {
            var: var.into(),
            value,
        }
    }
}

/// The configuration a room is created with.
///
/// https://xmpp.org/extensions/xep-0045.html#registrar-formtype-owner
#[derive(Debug, PartialEq, Clone, Default)]
pub struct RoomConfig {
    values: Vec<FormValue>,
}

impl RoomConfig {
    /// The built-in template which accepts the service's default configuration.
    pub fn instant() -> Self {
        Self::default()
    }

    pub fn new(values: impl IntoIterator<Item = FormValue>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    pub fn is_instant(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[FormValue] {
        &self.values
    }

    /// Renders the `jabber:x:data` form to submit to the room owner.
    ///
    /// The instant template yields an empty submit form, which is how XEP-0045 §10.1.2 asks
    /// for an instant room.
    pub fn to_submit_form(&self) -> Element {
        let mut form = Element::builder("x", ns::DATA_FORMS).attr("type", "submit");

        if self.is_instant() {
            return form.build();
        }

        form = form.append(
            Element::builder("field", ns::DATA_FORMS)
                .attr("var", "FORM_TYPE")
                .attr("type", "hidden")
                .append(
                    Element::builder("value", ns::DATA_FORMS)
                        .append(MUC_ROOMCONFIG_FORM_TYPE.to_string())
                        .build(),
                )
                .build(),
        );

        for value in &self.values {
            let mut field = Element::builder("field", ns::DATA_FORMS).attr("var", value.var.as_str());
            for text in value.value.field_values() {
                field = field.append(Element::builder("value", ns::DATA_FORMS).append(text).build());
            }
            form = form.append(field.build());
        }

        form.build()
    }
}

impl Value {
    /// https://xmpp.org/extensions/xep-0004.html#table-2
    fn field_values(&self) -> Vec<String> {
        match self {
            // XEP-0004 allows "0"/"1" as well as "false"/"true". Servers accept either.
            Value::Boolean(value) => vec![if *value { "1" } else { "0" }.to_string()],
            Value::JidMulti(values) => values.iter().map(ToString::to_string).collect(),
            Value::JidSingle(value) => vec![value.to_string()],
            Value::ListMulti(values) | Value::TextMulti(values) => values.clone(),
            Value::ListSingle(value) | Value::TextSingle(value) => vec![value.clone()],
        }
    }
}
