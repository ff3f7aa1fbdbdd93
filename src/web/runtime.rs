//! SummaryRuntime: wires browser events into the widget controller
//!
//! Holds the controller plus every browser resource it needs for the rest
//! of the page's life: the wheel listener, the pending animation frame,
//! the hover listeners and the intersection observer.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use gloo::render::{request_animation_frame, AnimationFrame};
use js_sys::{Array, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverInit, WheelEvent, Window,
};

use super::dom::{js_err, WebDom};
use crate::error::PageError;
use crate::template::SummaryTemplate;
use crate::types::WidgetState;
use crate::widget::{ScrollSummaryWidget, Transition, SENSOR_ROOT_MARGIN};

pub type WebSummaryWidget = ScrollSummaryWidget<WebDom, SummaryTemplate>;

/// Ratio of the most recent entry in an observer batch.
///
/// Read by property so any entry-shaped object works.
pub fn latest_ratio(entries: &Array) -> Option<f64> {
    let last = entries.length().checked_sub(1)?;
    Reflect::get(&entries.get(last), &JsValue::from_str("intersectionRatio"))
        .ok()?
        .as_f64()
}

pub struct SummaryRuntime {
    widget: RefCell<WebSummaryWidget>,
    frame: RefCell<Option<AnimationFrame>>,
    listeners: RefCell<Vec<EventListener>>,
    observer: RefCell<Option<IntersectionObserver>>,
    sensor_callback: RefCell<Option<Closure<dyn FnMut(Array)>>>,
}

impl SummaryRuntime {
    /// Start listening for wheel input and watching the primary item.
    pub fn start(
        widget: WebSummaryWidget,
        window: &Window,
        primary: &Element,
        passive_wheel: bool,
    ) -> Result<Rc<Self>, PageError> {
        let runtime = Rc::new(Self {
            widget: RefCell::new(widget),
            frame: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
            observer: RefCell::new(None),
            sensor_callback: RefCell::new(None),
        });
        runtime.observe(primary)?;
        runtime.listen_wheel(window, passive_wheel);
        Ok(runtime)
    }

    pub fn widget_state(&self) -> WidgetState {
        self.widget.borrow().state()
    }

    pub fn is_observing(&self) -> bool {
        self.observer.borrow().is_some() && self.sensor_callback.borrow().is_some()
    }

    /// A frame has been requested at least once
    pub fn has_frame_handle(&self) -> bool {
        self.frame.borrow().is_some()
    }

    /// Root margin the sensor was created with, as the browser reports it
    pub fn root_margin(&self) -> Option<String> {
        self.observer.borrow().as_ref().map(|o| o.root_margin())
    }

    /// Wheel listener plus the two hover listeners once built
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn widget_element(&self) -> Option<HtmlElement> {
        self.widget.borrow().dom().widget_element().cloned()
    }

    /// Forward one sensor reading to the controller.
    pub fn report_visibility(&self, intersection_ratio: f64) -> Transition {
        self.widget.borrow_mut().on_visibility_change(intersection_ratio)
    }

    fn listen_wheel(self: &Rc<Self>, window: &Window, passive: bool) {
        let options = if passive {
            EventListenerOptions::default()
        } else {
            EventListenerOptions::enable_prevent_default()
        };
        let weak = Rc::downgrade(self);
        let listener = EventListener::new_with_options(window, "wheel", options, move |event| {
            let (Some(runtime), Some(wheel)) = (weak.upgrade(), event.dyn_ref::<WheelEvent>()) else {
                return;
            };
            runtime.on_wheel(wheel.delta_y());
        });
        self.listeners.borrow_mut().push(listener);
    }

    fn on_wheel(self: &Rc<Self>, delta_y: f64) {
        let needs_frame = self.widget.borrow_mut().on_wheel(delta_y);
        if needs_frame {
            self.request_frame();
        }
    }

    // Replacing a fired handle drops it; cancelling a fired frame is a no-op.
    fn request_frame(self: &Rc<Self>) {
        let weak = Rc::downgrade(self);
        let handle = request_animation_frame(move |_| {
            if let Some(runtime) = weak.upgrade() {
                runtime.run_frame();
            }
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    /// Animation frame body. Binds hover once the widget is built.
    pub fn run_frame(self: &Rc<Self>) -> Transition {
        let transition = self.widget.borrow_mut().on_frame();
        if transition == Transition::Built {
            self.bind_hover();
        }
        transition
    }

    fn bind_hover(self: &Rc<Self>) {
        let Some(element) = self.widget_element() else {
            return;
        };

        let weak = Rc::downgrade(self);
        let enter = EventListener::new(&element, "mouseenter", move |_| {
            if let Some(runtime) = weak.upgrade() {
                runtime.widget.borrow_mut().on_pointer_enter();
            }
        });
        let weak = Rc::downgrade(self);
        let leave = EventListener::new(&element, "mouseleave", move |_| {
            if let Some(runtime) = weak.upgrade() {
                runtime.widget.borrow_mut().on_pointer_leave();
            }
        });

        self.listeners.borrow_mut().extend([enter, leave]);
    }

    fn observe(self: &Rc<Self>, primary: &Element) -> Result<(), PageError> {
        let weak = Rc::downgrade(self);
        let callback = Closure::<dyn FnMut(Array)>::new(move |entries: Array| {
            let Some(runtime) = weak.upgrade() else {
                return;
            };
            // Batched entries: the last one is the most recent crossing.
            if let Some(ratio) = latest_ratio(&entries) {
                runtime.report_visibility(ratio);
            }
        });

        let init = IntersectionObserverInit::new();
        init.set_root_margin(SENSOR_ROOT_MARGIN);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|e| js_err("IntersectionObserver", e))?;
        observer.observe(primary);

        *self.observer.borrow_mut() = Some(observer);
        *self.sensor_callback.borrow_mut() = Some(callback);
        Ok(())
    }
}

impl Drop for SummaryRuntime {
    // The observer must stop before its callback closure is freed.
    fn drop(&mut self) {
        if let Some(observer) = self.observer.get_mut().take() {
            observer.disconnect();
        }
    }
}
