use yew::prelude::*;

use crate::config;
use crate::schedule::build_outbound_link;

#[derive(Properties, PartialEq)]
pub struct ScheduleButtonProps {
    pub onclick: Callback<()>,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

#[function_component(ScheduleButton)]
pub fn schedule_button(props: &ScheduleButtonProps) -> Html {
    let onclick = {
        let onclick = props.onclick.clone();
        Callback::from(move |_: MouseEvent| onclick.emit(()))
    };

    html! {
        <button type="button" {onclick} class={props.class.clone()}>
            { for props.children.iter() }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct WhatsAppButtonProps {
    pub label: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Plain WhatsApp link carrying the general interest message.
#[function_component(WhatsAppButton)]
pub fn whatsapp_button(props: &WhatsAppButtonProps) -> Html {
    let href = build_outbound_link(Some(config::DEFAULT_WHATSAPP_MESSAGE));

    html! {
        <a {href} class={props.class.clone()} target="_blank" rel="noreferrer">
            <i class="fa-brands fa-whatsapp"></i>{" "}{ props.label.to_string() }
        </a>
    }
}
