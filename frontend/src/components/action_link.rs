use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActionVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
}

impl ActionVariant {
    pub fn class(self) -> &'static str {
        match self {
            ActionVariant::Primary => "action-link primary",
            ActionVariant::Secondary => "action-link secondary",
            ActionVariant::Outline => "action-link outline",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ActionLinkProps {
    #[prop_or(AttrValue::Static("Book a Free Call"))]
    pub label: AttrValue,
    #[prop_or_default]
    pub variant: ActionVariant,
    #[prop_or_default]
    pub icon: bool,
    #[prop_or_default]
    pub class: Classes,
}

/// WhatsApp call-to-action, opened in a new tab.
#[function_component(ActionLink)]
pub fn action_link(props: &ActionLinkProps) -> Html {
    html! {
        <a
            href={config::whatsapp_url()}
            target="_blank"
            rel="noopener noreferrer"
            class={classes!(props.variant.class(), props.class.clone())}
        >
            { if props.icon { html! { <span class="action-icon">{"💬"}</span> } } else { html! {} } }
            { props.label.clone() }
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_shares_base_class() {
        for variant in [ActionVariant::Primary, ActionVariant::Secondary, ActionVariant::Outline] {
            assert!(variant.class().starts_with("action-link "));
        }
    }

    #[test]
    fn variants_are_distinct() {
        assert_ne!(ActionVariant::Primary.class(), ActionVariant::Secondary.class());
        assert_ne!(ActionVariant::Secondary.class(), ActionVariant::Outline.class());
    }

    #[test]
    fn default_is_primary() {
        assert_eq!(ActionVariant::default(), ActionVariant::Primary);
    }
}
