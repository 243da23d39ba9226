use js_sys::{Function, Reflect};
use log::debug;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::schedule::{LinkOpener, ScheduleComposer, ScheduleState, message_preview};

/// Opens outbound links in a new tab of the current browser window.
pub struct BrowserWindow;

impl LinkOpener for BrowserWindow {
    fn open_link(&self, url: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.open_with_url_and_target(url, "_blank") {
            debug!("window.open failed: {:?}", err);
        }
    }
}

/// Calls `showPicker()` on browsers that have it.
fn show_picker(input: &HtmlInputElement) {
    let picker = Reflect::get(input, &JsValue::from_str("showPicker"))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok());
    if let Some(picker) = picker {
        if let Err(err) = picker.call0(input) {
            debug!("showPicker refused: {:?}", err);
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ScheduleModalProps {
    pub composer: ScheduleComposer,
    /// Earliest selectable day, `YYYY-MM-DD`.
    pub min_date: AttrValue,
    pub on_close: Callback<()>,
    /// Receives the raw input value and returns what the field should show
    /// afterwards: the value itself when accepted, the kept selection otherwise.
    pub on_date_change: Callback<String, String>,
    pub on_confirm: Callback<()>,
}

#[function_component(ScheduleModal)]
pub fn schedule_modal(props: &ScheduleModalProps) -> Html {
    let input_ref = use_node_ref();
    let is_open = props.composer.is_open();

    {
        let input_ref = input_ref.clone();
        use_effect_with_deps(
            move |is_open| {
                if *is_open {
                    if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                        let _ = input.focus();
                        show_picker(&input);
                    }
                }
                || ()
            },
            is_open,
        );
    }

    let ScheduleState::Open { date } = props.composer.state() else {
        return html! {};
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let open_calendar = {
        let input_ref = input_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                show_picker(&input);
            }
        })
    };
    let onchange = {
        let on_date_change = props.on_date_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let shown = on_date_change.emit(input.value());
            if input.value() != shown {
                debug!("Date input reset to {:?}", shown);
                input.set_value(&shown);
            }
        })
    };
    let confirm = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| on_confirm.emit(()))
    };

    html! {
        <div class="modal-overlay" onclick={close.clone()}>
            <div class="modal-content" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <div class="modal-header">
                    <h3>{"Escolha a data"}</h3>
                    <button type="button" onclick={close.clone()} aria-label="Fechar modal">
                        <i class="fa-solid fa-xmark"></i>
                    </button>
                </div>
                <p class="modal-hint">
                    {"Clique em \"Abrir calendário\", selecione a data e confirme para abrir o WhatsApp com a mensagem pronta incluindo o dia escolhido."}
                </p>
                <div class="modal-body">
                    <button type="button" class="modal-button secondary" onclick={open_calendar}>
                        <i class="fa-solid fa-calendar-days"></i>{" Abrir calendário"}
                    </button>
                    <input
                        ref={input_ref}
                        type="date"
                        value={props.composer.selected_date()}
                        min={props.min_date.clone()}
                        {onchange}
                    />
                    {
                        match date {
                            Some(date) => html! {
                                <p class="modal-preview">{ format!("Mensagem pronta: \"{}\"", message_preview(date)) }</p>
                            },
                            None => html! {},
                        }
                    }
                </div>
                <div class="modal-buttons">
                    <button type="button" class="modal-button confirm" onclick={confirm} disabled={date.is_none()}>
                        <i class="fa-solid fa-calendar-check"></i>{" Confirmar e abrir WhatsApp"}
                    </button>
                    <button type="button" class="modal-button cancel" onclick={close}>
                        {"Cancelar"}
                    </button>
                </div>
            </div>
        </div>
    }
}
