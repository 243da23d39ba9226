use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use log::{debug, warn};
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::NAV_ITEMS;
use crate::observer::{default_section_id, IntersectionSignal, ObserverBand, SectionObserver};

#[derive(Debug, Error)]
pub enum ObserverError {
    #[error("no browser window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("could not create IntersectionObserver: {0}")]
    Create(String),
}

fn js_error_text(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn signals_from(entries: &Array) -> Vec<IntersectionSignal> {
    entries
        .iter()
        .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
        .map(|entry| IntersectionSignal {
            anchor_id: entry.target().id(),
            is_intersecting: entry.is_intersecting(),
            ratio: entry.intersection_ratio(),
        })
        .collect()
}

/// Hands one batch to the core and reports the new active id, if any.
fn dispatch(core: &RefCell<SectionObserver>, batch: &[IntersectionSignal], on_change: &Callback<String>) {
    let changed = core.borrow_mut().deliver(batch).map(str::to_string);
    if let Some(active) = changed {
        on_change.emit(active);
    }
}

/// Browser IntersectionObserver feeding a `SectionObserver`. Cancelling is
/// idempotent and also happens on drop.
pub struct Subscription {
    observer: IntersectionObserver,
    core: Rc<RefCell<SectionObserver>>,
    watched: usize,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Subscription {
    pub fn attach(
        core: Rc<RefCell<SectionObserver>>,
        band: &ObserverBand,
        on_change: Callback<String>,
    ) -> Result<Self, ObserverError> {
        let window = web_sys::window().ok_or(ObserverError::NoWindow)?;
        let document = window.document().ok_or(ObserverError::NoDocument)?;

        let callback_core = core.clone();
        let callback = Closure::wrap(Box::new(move |entries: Array, _: IntersectionObserver| {
            dispatch(&callback_core, &signals_from(&entries), &on_change);
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let mut init = IntersectionObserverInit::new();
        init.root_margin(&band.root_margin());
        init.threshold(&JsValue::from_f64(band.threshold));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|err| ObserverError::Create(js_error_text(&err)))?;

        let mut watched = 0;
        for id in core.borrow().observed() {
            match document.get_element_by_id(id) {
                Some(element) => {
                    observer.observe(&element);
                    watched += 1;
                }
                None => debug!("Anchor #{} is not in the document, not observing it", id),
            }
        }

        Ok(Self {
            observer,
            core,
            watched,
            _callback: callback,
        })
    }

    /// Number of document elements handed to the browser observer.
    pub fn watched(&self) -> usize {
        self.watched
    }

    pub fn cancel(&self) {
        if self.core.borrow_mut().stop() {
            debug!("Disconnecting section observer");
            self.observer.disconnect();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Id of the section currently in the middle of the viewport. Starts at the
/// first navigation entry and follows scrolling once the page is mounted.
#[hook]
pub fn use_active_section(anchors: Rc<Vec<&'static str>>) -> String {
    let active = use_state(|| default_section_id(NAV_ITEMS).to_string());

    {
        let active = active.clone();
        use_effect_with_deps(
            move |anchors| {
                let mut core = SectionObserver::new(NAV_ITEMS);
                core.register_rendered(anchors);
                let on_change = Callback::from(move |id: String| active.set(id));
                let subscription = match Subscription::attach(
                    Rc::new(RefCell::new(core)),
                    &ObserverBand::default(),
                    on_change,
                ) {
                    Ok(subscription) => {
                        debug!("Observing {} sections", subscription.watched());
                        Some(subscription)
                    }
                    Err(err) => {
                        warn!("Section highlighting disabled: {}", err);
                        None
                    }
                };
                move || {
                    if let Some(subscription) = subscription {
                        subscription.cancel();
                    }
                }
            },
            anchors,
        );
    }

    (*active).clone()
}
