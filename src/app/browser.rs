use std::time::Duration;

use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener_with_options, use_window, UseEventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions};

use crate::session::{
    Host, HostError, PointerHandler, ScrollHandler, Subscription, TimerCallback, ViewStateCell,
};
use crate::view_state::{PointerPosition, Section, SectionExtent, SectionGeometry, ViewState};

/// Reads section extents from the live document.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomGeometry;

impl SectionGeometry for DomGeometry {
    fn extent(&self, section: Section) -> Option<SectionExtent> {
        let el = document()
            .get_element_by_id(section.id())?
            .dyn_into::<HtmlElement>()
            .ok()?;
        Some(SectionExtent::new(
            el.offset_top() as f64,
            el.offset_height() as f64,
        ))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHost;

fn passive() -> UseEventListenerOptions {
    UseEventListenerOptions::default().passive(true)
}

impl Host for BrowserHost {
    type Geometry = DomGeometry;

    fn geometry(&self) -> DomGeometry {
        DomGeometry
    }

    fn listen_scroll(&self, mut handler: ScrollHandler) -> Subscription {
        let stop = use_event_listener_with_options(
            use_window(),
            ev::scroll,
            move |_| {
                if let Ok(scroll_y) = window().scroll_y() {
                    handler(scroll_y);
                }
            },
            passive(),
        );
        Subscription::new(stop)
    }

    fn listen_pointer(&self, mut handler: PointerHandler) -> Subscription {
        let stop = use_event_listener_with_options(
            use_window(),
            ev::mousemove,
            move |ev| {
                handler(PointerPosition::new(
                    ev.client_x() as f64,
                    ev.client_y() as f64,
                ));
            },
            passive(),
        );
        Subscription::new(stop)
    }

    fn schedule(
        &self,
        delay: Duration,
        callback: TimerCallback,
    ) -> Result<Subscription, HostError> {
        let handle = set_timeout_with_handle(callback, delay)
            .map_err(|err| HostError::Timer(format!("{err:?}")))?;
        Ok(Subscription::new(move || handle.clear()))
    }

    fn reveal(&self, section: Section) -> bool {
        let Some(el) = document().get_element_by_id(section.id()) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

impl ViewStateCell for RwSignal<ViewState> {
    fn update(&self, f: impl FnOnce(&mut ViewState) -> bool) {
        self.maybe_update(f);
    }
}

/// Nav and button handler: scroll to `section`, doing nothing if it isn't mounted.
pub fn scroll_to(section: Section) {
    if !BrowserHost.reveal(section) {
        log::debug!("section {section} not mounted, ignoring scroll request");
    }
}
