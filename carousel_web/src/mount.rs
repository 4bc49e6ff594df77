// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Binding a carousel to page markup.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use carousel::{
    Carousel, CarouselError, CarouselOptions, ClonePlan, Completion, Input, Key, PointerKind,
    Reaction, TrackMove, TracingTrace, TransitionEnd, TransitionProperty, TransitionTarget,
    parse_indicator_index,
};
use gloo::events::{EventListener, EventListenerOptions};
use gloo::render::{AnimationFrame, request_animation_frame};
use js_sys::Object;
use kurbo::Point;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, Event, HtmlElement, KeyboardEvent, Node, NodeList, PointerEvent, TransitionEvent,
};

use crate::markup::{Selectors, options_from_markup};

/// Error returned when a carousel cannot be mounted.
#[derive(Debug)]
pub enum MountError {
    /// No element under the root matches [`Selectors::track`].
    MissingTrack,
    /// The controller rejected the markup (no slides, indicator mismatch).
    Carousel(CarouselError),
    /// A DOM call threw.
    Js(JsValue),
}

impl fmt::Display for MountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTrack => f.write_str("carousel root has no track element"),
            Self::Carousel(err) => write!(f, "{err}"),
            Self::Js(value) => write!(f, "DOM call failed: {value:?}"),
        }
    }
}

impl std::error::Error for MountError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Carousel(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CarouselError> for MountError {
    fn from(err: CarouselError) -> Self {
        Self::Carousel(err)
    }
}

impl From<JsValue> for MountError {
    fn from(value: JsValue) -> Self {
        Self::Js(value)
    }
}

/// Returns `true` when the user asked the system to reduce motion.
#[must_use]
pub fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|window| {
            window
                .match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .is_some_and(|query| query.matches())
}

/// Options for `root`: its interval attribute plus the reduced-motion preference.
#[must_use]
pub fn page_options(root: &HtmlElement) -> CarouselOptions {
    let interval = root.get_attribute(Selectors::default().interval_attribute);
    options_from_markup(interval.as_deref(), prefers_reduced_motion())
}

struct Indicator {
    element: Element,
    bar: Option<HtmlElement>,
}

/// State shared between listeners and the frame loop.
struct Shared {
    carousel: RefCell<Carousel<TracingTrace>>,
    selectors: Selectors,
    track: HtmlElement,
    indicators: Vec<Indicator>,
    toggle: Option<HtmlElement>,
    frame: RefCell<Option<AnimationFrame>>,
}

/// A carousel mounted on page markup.
///
/// Dropping it stops the frame loop and removes all listeners. The inserted
/// clones stay in the page.
pub struct Mount {
    shared: Rc<Shared>,
    listeners: Vec<EventListener>,
}

impl fmt::Debug for Mount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mount")
            .field("logical_index", &self.logical_index())
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl Mount {
    /// Mounts on `root` using the default [`Selectors`].
    pub fn attach(root: &HtmlElement, options: CarouselOptions) -> Result<Self, MountError> {
        Self::attach_with(root, options, Selectors::default())
    }

    /// Mounts on `root` using custom selectors.
    pub fn attach_with(
        root: &HtmlElement,
        options: CarouselOptions,
        selectors: Selectors,
    ) -> Result<Self, MountError> {
        let track = root
            .query_selector(selectors.track)?
            .and_then(into_html)
            .ok_or(MountError::MissingTrack)?;
        let slides = elements(&track.query_selector_all(selectors.slide)?);
        let dots = elements(&root.query_selector_all(selectors.indicator)?);

        let carousel = Carousel::with_trace(slides.len(), options, TracingTrace)?;
        carousel.check_indicators(dots.len())?;
        insert_clones(&track, &slides, carousel.layout().clone_plan())?;

        let indicators = dots
            .into_iter()
            .map(|element| {
                let bar = element
                    .query_selector(selectors.indicator_bar)
                    .ok()
                    .flatten()
                    .and_then(into_html);
                Indicator { element, bar }
            })
            .collect();
        let toggle = root.query_selector(selectors.toggle)?.and_then(into_html);
        let pointer_region = root.query_selector(selectors.pointer_region)?;

        let shared = Rc::new(Shared {
            carousel: RefCell::new(carousel),
            selectors,
            track,
            indicators,
            toggle,
            frame: RefCell::new(None),
        });

        let resting = shared.carousel.borrow().resting_move();
        shared.apply(resting);
        shared.sync_indicators();
        shared.sync_toggle();

        let listeners = install_listeners(&shared, root, pointer_region.as_ref());
        schedule_frame(&shared);

        Ok(Self { shared, listeners })
    }

    /// Logical index of the current slide.
    #[must_use]
    pub fn logical_index(&self) -> usize {
        self.shared.carousel.borrow().logical_index()
    }

    /// Stop autoplay and remove listeners. Idempotent.
    pub fn stop(&mut self) {
        self.shared.carousel.borrow_mut().stop();
        self.shared.frame.borrow_mut().take();
        self.listeners.clear();
    }
}

impl Drop for Mount {
    fn drop(&mut self) {
        self.stop();
    }
}

impl Shared {
    /// Apply a strip position. Must not be called while the carousel is borrowed.
    fn apply(&self, track: TrackMove) {
        let style = self.carousel.borrow().track_style(track);
        let css = self.track.style();
        let _ = css.set_property("transition", &style.transition);
        let _ = css.set_property("transform", &style.transform);
        if !track.animated {
            // Commit the unanimated position before restoring the transition.
            let _ = self.track.offset_width();
            let restored = self
                .carousel
                .borrow()
                .track_style(TrackMove::animated(track.position));
            let _ = css.set_property("transition", &restored.transition);
        }
    }

    fn sync_indicators(&self) {
        let carousel = self.carousel.borrow();
        for (indicator, view) in self.indicators.iter().zip(carousel.indicators()) {
            let _ = indicator
                .element
                .class_list()
                .toggle_with_force(self.selectors.active_class, view.active);
            if let Some(bar) = &indicator.bar {
                let _ = bar.style().set_property("width", &view.bar_width());
            }
        }
    }

    fn sync_toggle(&self) {
        let Some(toggle) = &self.toggle else {
            return;
        };
        let carousel = self.carousel.borrow();
        let view = carousel.play_pause();
        toggle.set_text_content(Some(view.glyph));
        let _ = toggle.set_attribute("aria-pressed", view.aria_pressed());
        let _ = toggle.set_attribute("aria-label", view.label);
    }

    fn react(&self, reaction: Reaction, event: &Event) {
        if reaction.prevent_default {
            event.prevent_default();
        }
        if let Some(track) = reaction.track {
            self.apply(track);
            self.sync_indicators();
        }
        if reaction.pause_changed {
            self.sync_toggle();
        }
    }

    fn dispatch(&self, input: Input, event: &Event) {
        let reaction = self.carousel.borrow_mut().handle(input);
        self.react(reaction, event);
    }

    fn indicator_index(&self, element: &Element) -> Option<usize> {
        element
            .get_attribute(self.selectors.index_attribute)
            .as_deref()
            .and_then(parse_indicator_index)
    }

    /// Track position of `card`, counting clones.
    fn card_position(&self, card: &Element) -> Option<usize> {
        let cards = self.track.query_selector_all(self.selectors.card).ok()?;
        (0..cards.length()).find_map(|i| {
            let node = cards.get(i)?;
            Object::is(&node, card).then_some(i as usize)
        })
    }
}

fn into_html(element: Element) -> Option<HtmlElement> {
    element.dyn_into().ok()
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn insert_clones(track: &HtmlElement, slides: &[Element], plan: ClonePlan) -> Result<(), JsValue> {
    let (Some(first), Some(leading), Some(trailing)) = (
        slides.first(),
        slides.get(plan.leading_source),
        slides.get(plan.trailing_source),
    ) else {
        return Ok(());
    };
    let first: &Node = first;
    let leading_clone = leading.clone_node_with_deep(true)?;
    let trailing_clone = trailing.clone_node_with_deep(true)?;
    track.insert_before(&leading_clone, Some(first))?;
    track.append_child(&trailing_clone)?;
    Ok(())
}

fn schedule_frame(shared: &Rc<Shared>) {
    let weak: Weak<Shared> = Rc::downgrade(shared);
    let handle = request_animation_frame(move |timestamp| {
        if let Some(shared) = weak.upgrade() {
            run_frame(&shared, timestamp);
        }
    });
    *shared.frame.borrow_mut() = Some(handle);
}

fn run_frame(shared: &Rc<Shared>, timestamp: f64) {
    shared.frame.borrow_mut().take();
    let frame = shared.carousel.borrow_mut().tick(timestamp);
    if let Some(track) = frame.advance {
        shared.apply(track);
    }
    shared.sync_indicators();
    if frame.reschedule {
        schedule_frame(shared);
    }
}

fn pointer_point(event: &PointerEvent) -> Point {
    Point::new(f64::from(event.client_x()), f64::from(event.client_y()))
}

fn install_listeners(
    shared: &Rc<Shared>,
    root: &HtmlElement,
    pointer_region: Option<&Element>,
) -> Vec<EventListener> {
    let mut listeners = Vec::new();

    // Delegated on the strip so clones behave like the slides they copy.
    let s = Rc::clone(shared);
    listeners.push(EventListener::new(
        &shared.track,
        "transitionend",
        move |event: &Event| {
            let Some(event) = event.dyn_ref::<TransitionEvent>() else {
                return;
            };
            let target = if event
                .target()
                .is_some_and(|target| Object::is(&target, &s.track))
            {
                TransitionTarget::Track
            } else {
                TransitionTarget::Other
            };
            let end = TransitionEnd {
                target,
                property: TransitionProperty::from_property_name(&event.property_name()),
            };
            let completion = s.carousel.borrow_mut().transition_end(end);
            if let Completion::Snapped(track) = completion {
                s.apply(track);
            }
        },
    ));

    let s = Rc::clone(shared);
    listeners.push(EventListener::new(
        &shared.track,
        "click",
        move |event: &Event| {
            let Some(target) = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
            else {
                return;
            };
            let Ok(Some(card)) = target.closest(s.selectors.card) else {
                return;
            };
            let on_link = matches!(target.closest("a"), Ok(Some(_)));
            let Some(position) = s.card_position(&card) else {
                return;
            };
            let reaction = s
                .carousel
                .borrow_mut()
                .handle(Input::CardClick { position, on_link });
            // The forwarded click re-enters this listener with `on_link` set.
            if reaction.activate_link.is_some()
                && let Ok(Some(link)) = card.query_selector(s.selectors.card_link)
                && let Some(link) = into_html(link)
            {
                link.click();
            }
        },
    ));

    for indicator in &shared.indicators {
        for event_type in ["click", "focus"] {
            let s = Rc::clone(shared);
            let dot = indicator.element.clone();
            listeners.push(EventListener::new(
                &indicator.element,
                event_type,
                move |event: &Event| {
                    if let Some(index) = s.indicator_index(&dot) {
                        s.dispatch(Input::IndicatorActivated(index), event);
                    }
                },
            ));
        }

        let s = Rc::clone(shared);
        let dot = indicator.element.clone();
        listeners.push(EventListener::new_with_options(
            &indicator.element,
            "keydown",
            EventListenerOptions::enable_prevent_default(),
            move |event: &Event| {
                let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                let key = Key::from_key_value(&key_event.key());
                if !key.activates() {
                    return;
                }
                if let Some(index) = s.indicator_index(&dot) {
                    s.dispatch(Input::IndicatorKey { index, key }, event);
                }
            },
        ));
    }

    let s = Rc::clone(shared);
    listeners.push(EventListener::new_with_options(
        root,
        "keydown",
        EventListenerOptions::enable_prevent_default(),
        move |event: &Event| {
            if let Some(key_event) = event.dyn_ref::<KeyboardEvent>() {
                let key = Key::from_key_value(&key_event.key());
                s.dispatch(Input::Key(key), event);
            }
        },
    ));

    let s = Rc::clone(shared);
    listeners.push(EventListener::new(root, "mouseenter", move |event| {
        s.dispatch(Input::PointerEnter, event);
    }));
    let s = Rc::clone(shared);
    listeners.push(EventListener::new(root, "mouseleave", move |event| {
        s.dispatch(Input::PointerLeave, event);
    }));

    if let Some(toggle) = &shared.toggle {
        let s = Rc::clone(shared);
        listeners.push(EventListener::new(toggle, "click", move |event| {
            s.dispatch(Input::TogglePlayPause, event);
        }));
    }

    if let Some(region) = pointer_region {
        let s = Rc::clone(shared);
        listeners.push(EventListener::new(region, "pointerdown", move |event| {
            if let Some(pointer) = event.dyn_ref::<PointerEvent>() {
                let kind = PointerKind::from_pointer_type(&pointer.pointer_type());
                let pos = pointer_point(pointer);
                s.dispatch(Input::PointerDown { kind, pos }, event);
            }
        }));
        let s = Rc::clone(shared);
        listeners.push(EventListener::new(region, "pointerup", move |event| {
            if let Some(pointer) = event.dyn_ref::<PointerEvent>() {
                let pos = pointer_point(pointer);
                s.dispatch(Input::PointerUp { pos }, event);
            }
        }));
        let s = Rc::clone(shared);
        listeners.push(EventListener::new(region, "pointercancel", move |event| {
            s.dispatch(Input::PointerCancel, event);
        }));
    }

    listeners
}
