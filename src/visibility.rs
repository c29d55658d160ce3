use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::{REVEALED_CLASS, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, STATIC_REVEAL_CLASS};
use crate::error::Result;

type IntersectionCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Whether the runtime provides `IntersectionObserver` at all.
pub fn intersection_observer_supported() -> bool {
    web_sys::window().map_or(false, |window| {
        Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
    })
}

/// Observes one element and calls back each time it intersects the viewport.
/// Disconnects when dropped.
pub struct Watch {
    observer: IntersectionObserver,
    _callback: IntersectionCallback,
}

impl Watch {
    pub fn new<F>(element: &Element, options: Option<&IntersectionObserverInit>, mut on_visible: F) -> Result<Self>
    where
        F: FnMut(&Element, &IntersectionObserver) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    on_visible(&entry.target(), &observer);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let observer = match options {
            Some(options) => IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), options)?,
            None => IntersectionObserver::new(callback.as_ref().unchecked_ref())?,
        };
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for Watch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn reveal_options() -> IntersectionObserverInit {
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    options
}

/// Reveal state of an element watched by `use_reveal`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Reveal {
    #[default]
    Pending,
    /// Entered the viewport; plays the reveal animation.
    Animated,
    /// Shown without animation because no observer could be set up.
    Static,
}

impl Reveal {
    pub fn class(self) -> Option<&'static str> {
        match self {
            Reveal::Pending => None,
            Reveal::Animated => Some(REVEALED_CLASS),
            Reveal::Static => Some(STATIC_REVEAL_CLASS),
        }
    }
}

fn watch_reveal(node: &NodeRef, reveal: UseStateSetter<Reveal>) -> Option<Watch> {
    if !intersection_observer_supported() {
        debug!("IntersectionObserver unavailable, showing without animation");
        reveal.set(Reveal::Static);
        return None;
    }
    let element = node.cast::<Element>()?;

    let on_visible = {
        let reveal = reveal.clone();
        move |_: &Element, _: &IntersectionObserver| reveal.set(Reveal::Animated)
    };
    match Watch::new(&element, Some(&reveal_options()), on_visible) {
        Ok(watch) => Some(watch),
        Err(e) => {
            warn!("Reveal observer failed: {}", e);
            reveal.set(Reveal::Static);
            None
        }
    }
}

/// Reveal state of the referenced element. It stays observed after the first
/// intersection; later ones are no-ops.
#[hook]
pub fn use_reveal(node: NodeRef) -> Reveal {
    let reveal = use_state(Reveal::default);

    {
        let setter = reveal.setter();
        use_effect_with_deps(
            move |node| {
                let watch = watch_reveal(node, setter);
                move || drop(watch)
            },
            node,
        );
    }

    *reveal
}

fn watch_deferred(node: &NodeRef, loaded: UseStateSetter<bool>) -> Option<Watch> {
    if !intersection_observer_supported() {
        debug!("IntersectionObserver unavailable, deferred images stay unloaded");
        return None;
    }
    let element = node.cast::<Element>()?;

    Watch::new(&element, None, move |target, observer| {
        observer.unobserve(target);
        loaded.set(true);
    })
    .map_err(|e| warn!("Deferred image observer failed: {}", e))
    .ok()
}

#[derive(Properties, PartialEq)]
pub struct LazyImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Image whose source sits in `data-src` until it nears the viewport.
#[function_component(LazyImage)]
pub fn lazy_image(props: &LazyImageProps) -> Html {
    let img_ref = use_node_ref();
    let loaded = use_state(|| false);

    {
        let setter = loaded.setter();
        use_effect_with_deps(
            move |node| {
                let watch = watch_deferred(node, setter);
                move || drop(watch)
            },
            img_ref.clone(),
        );
    }

    let (src, data_src) = deferred_sources(*loaded, &props.src);

    html! {
        <img
            ref={img_ref}
            class={props.class.clone()}
            alt={props.alt.clone()}
            src={src}
            data-src={data_src}
        />
    }
}

/// `(src, data-src)` attribute values for a lazy image.
fn deferred_sources(loaded: bool, source: &AttrValue) -> (Option<AttrValue>, Option<AttrValue>) {
    if loaded {
        (Some(source.clone()), None)
    } else {
        (None, Some(source.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::{deferred_sources, Reveal};
    use yew::AttrValue;

    #[test]
    fn reveal_classes() {
        assert_eq!(Reveal::default(), Reveal::Pending);
        assert_eq!(Reveal::Pending.class(), None);
        assert_eq!(Reveal::Animated.class(), Some("animated"));
    }

    #[test]
    fn skipped_reveal_never_uses_the_animated_class() {
        assert_eq!(Reveal::Static.class(), Some("revealed-static"));
        assert_ne!(Reveal::Static.class(), Reveal::Animated.class());
    }

    #[test]
    fn source_is_deferred_until_loaded() {
        let source = AttrValue::from("/assets/clinic.jpg");
        assert_eq!(deferred_sources(false, &source), (None, Some(source.clone())));
    }

    #[test]
    fn loading_swaps_source_and_drops_flag() {
        let source = AttrValue::from("/assets/clinic.jpg");
        let (src, data_src) = deferred_sources(true, &source);
        assert_eq!(src.as_deref(), Some("/assets/clinic.jpg"));
        assert!(data_src.is_none());
    }
}
