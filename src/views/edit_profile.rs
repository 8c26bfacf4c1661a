//! Edit-profile form
//!
//! Shows the fields for the signed-in user's role. Submitting sends every
//! field as-is (blank ones included) as a full replace of the profile;
//! beyond the controls' own `type`, nothing is validated client-side.

use super::{Surface, ViewState};
use crate::actions::Action;
use crate::app::AppContext;
use crate::dom::{build_element, AttrValue, Node};
use crate::guard::require_auth;
use crate::session::Role;

pub const FORM_ID: &str = "editProfileForm";

/// Form control kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Text,
    Number,
    Url,
    TextArea,
}

/// One editable profile field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub label: &'static str,
    pub control: Control,
}

const fn field(name: &'static str, label: &'static str, control: Control) -> Field {
    Field { name, label, control }
}

const BIO: Field = field("bio", "Bio", Control::TextArea);

const ENTREPRENEUR_FIELDS: &[Field] = &[
    BIO,
    field("startup_name", "Startup", Control::Text),
    field("startup_description", "Description", Control::TextArea),
    field("funding_need", "Funding Need", Control::Number),
    field("pitch_deck_url", "Pitch Deck", Control::Url),
];

const INVESTOR_FIELDS: &[Field] = &[
    BIO,
    field("investment_interests", "Interests", Control::TextArea),
    field("portfolio_companies", "Portfolio", Control::TextArea),
];

/// Editable fields for `role`; only the bio when the role is unknown
pub fn fields_for(role: Option<Role>) -> &'static [Field] {
    match role {
        Some(Role::Entrepreneur) => ENTREPRENEUR_FIELDS,
        Some(Role::Investor) => INVESTOR_FIELDS,
        None => &ENTREPRENEUR_FIELDS[..1],
    }
}

pub async fn load(ctx: &AppContext, surface: &dyn Surface) {
    if !require_auth(ctx, None) {
        return;
    }
    surface.show(ViewState::Rendered(render(ctx.session.role())));
}

pub fn render(role: Option<Role>) -> Vec<Node> {
    let mut children: Vec<Node> = fields_for(role).iter().map(control).collect();
    children.push(build_element(
        "button",
        vec![("class", "button".into()), ("type", "submit".into())],
        vec!["Save".into()],
    ));

    vec![build_element(
        "form",
        vec![
            ("id", FORM_ID.into()),
            ("class", "card".into()),
            ("onsubmit", Action::SubmitProfile.into()),
        ],
        children,
    )]
}

fn control(field: &Field) -> Node {
    let input = match field.control {
        Control::TextArea => build_element("textarea", vec![("name", field.name.into())], vec![]),
        other => {
            let mut attributes: Vec<(&str, AttrValue)> = vec![("name", field.name.into())];
            match other {
                Control::Number => {
                    attributes.push(("type", "number".into()));
                    attributes.push(("step", "0.01".into()));
                }
                Control::Url => attributes.push(("type", "url".into())),
                _ => attributes.push(("type", "text".into())),
            }
            build_element("input", attributes, vec![])
        }
    };

    build_element(
        "label",
        vec![],
        vec![Node::text(format!("{} ", field.label)), input],
    )
}
