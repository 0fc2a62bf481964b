use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::icon::{Icon, IconView};
use crate::components::toast::ToastHandle;
use crate::registration::{RegistrationStatus, RegistrationTracker};

/// The one tracker for the page, shared by every form placement.
#[derive(Clone, PartialEq)]
pub struct RegistrationContext {
    pub tracker: UseStateHandle<RegistrationTracker>,
}

#[derive(Properties, PartialEq)]
pub struct RegistrationPanelProps {
    pub submit_label: AttrValue,
    pub registered_title: AttrValue,
    pub registered_message: AttrValue,
}

#[function_component(RegistrationPanel)]
pub fn registration_panel(props: &RegistrationPanelProps) -> Html {
    let registration = use_context::<RegistrationContext>();
    let toasts = use_context::<ToastHandle>();
    let (Some(registration), Some(toasts)) = (registration, toasts) else {
        log::error!("RegistrationPanel rendered outside of its providers");
        return html! {};
    };
    let tracker = registration.tracker;

    if tracker.status() == RegistrationStatus::Registered {
        return html! {
            <div class="registered-panel">
                <IconView icon={Icon::CheckCircle} class={classes!("registered-icon")} />
                <h4>{ &props.registered_title }</h4>
                <p>{ &props.registered_message }</p>
            </div>
        };
    }

    let on_name = {
        let tracker = tracker.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*tracker).clone();
            next.set_name(input.value());
            tracker.set(next);
        })
    };

    let on_email = {
        let tracker = tracker.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*tracker).clone();
            next.set_email(input.value());
            tracker.set(next);
        })
    };

    let on_submit = {
        let tracker = tracker.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*tracker).clone();
            // A rejected submit has already told the visitor why.
            if next.submit(&toasts).is_ok() {
                tracker.set(next);
            }
        })
    };

    html! {
        <form class="registration-form" novalidate=true onsubmit={on_submit}>
            <input
                type="text"
                placeholder="Your Full Name"
                value={tracker.form().name.clone()}
                oninput={on_name}
            />
            <input
                type="email"
                placeholder="Your Email Address"
                value={tracker.form().email.clone()}
                oninput={on_email}
            />
            <button type="submit" class="registration-submit">
                { &props.submit_label }
            </button>
        </form>
    }
}
