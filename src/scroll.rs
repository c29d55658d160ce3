use log::{debug, error};
use web_sys::{Element, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use crate::context::use_page_context;
use crate::error::document;

/// Id targeted by an in-page link. A bare `#` and non-fragment hrefs have none.
pub fn fragment_target(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some("") | None => None,
        Some(id) => Some(id),
    }
}

/// How an anchor click is handled once its href and target are known.
#[derive(Debug, PartialEq, Eq)]
pub enum AnchorClick<T> {
    /// Not an in-page link, or a bare `#`: the browser's default runs.
    Default,
    /// Fragment with no matching element: the jump is suppressed, nothing else.
    Missing,
    /// Close the menu, then scroll to the target.
    ScrollTo(T),
}

impl<T> AnchorClick<T> {
    pub fn prevents_default(&self) -> bool {
        !matches!(self, AnchorClick::Default)
    }

    pub fn closes_menu(&self) -> bool {
        matches!(self, AnchorClick::ScrollTo(_))
    }
}

pub fn resolve_anchor<T>(href: &str, find: impl FnOnce(&str) -> Option<T>) -> AnchorClick<T> {
    match fragment_target(href) {
        None => AnchorClick::Default,
        Some(id) => find(id).map_or(AnchorClick::Missing, AnchorClick::ScrollTo),
    }
}

pub fn scroll_into_view(element: &Element, block: ScrollLogicalPosition) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(block);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[derive(Properties, PartialEq)]
pub struct ScrollLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Anchor that scrolls smoothly to its fragment target, closing the mobile menu first.
#[function_component(ScrollLink)]
pub fn scroll_link(props: &ScrollLinkProps) -> Html {
    let page = use_page_context();

    let onclick = {
        let href = props.href.clone();
        Callback::from(move |e: MouseEvent| {
            let lookup = |id: &str| match document() {
                Ok(doc) => doc.get_element_by_id(id),
                Err(e) => {
                    error!("Could not scroll to #{}: {}", id, e);
                    None
                }
            };

            let click = resolve_anchor(&href, lookup);
            if click.prevents_default() {
                e.prevent_default();
            }
            if click.closes_menu() {
                // The outside-click listener may close it for this click too.
                page.close_menu();
            }
            match click {
                AnchorClick::ScrollTo(target) => scroll_into_view(&target, ScrollLogicalPosition::Start),
                AnchorClick::Missing => debug!("No element for {}", href),
                AnchorClick::Default => {}
            }
        })
    };

    html! {
        <a href={props.href.clone()} class={props.class.clone()} onclick={onclick}>
            { for props.children.iter() }
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::{MenuAction, MenuState};
    use std::rc::Rc;

    #[test]
    fn bare_hash_is_left_to_the_browser() {
        assert_eq!(fragment_target("#"), None);
    }

    #[test]
    fn fragment_yields_element_id() {
        assert_eq!(fragment_target("#pricing"), Some("pricing"));
        assert_eq!(fragment_target("#appointment"), Some("appointment"));
    }

    #[test]
    fn other_links_are_not_intercepted() {
        assert_eq!(fragment_target("/terms"), None);
        assert_eq!(fragment_target("https://example.com/#pricing"), None);
        assert_eq!(fragment_target(""), None);
    }

    #[test]
    fn existing_target_is_scrolled_to_after_closing_the_menu() {
        let click = resolve_anchor("#pricing", |id| (id == "pricing").then_some(id.to_string()));
        assert!(click.prevents_default());
        assert!(click.closes_menu());
        assert_eq!(click, AnchorClick::ScrollTo("pricing".to_string()));

        let open = Rc::new(MenuState { open: true });
        assert!(!open.reduce(MenuAction::Close).open);
    }

    #[test]
    fn missing_target_leaves_the_menu_open() {
        let click = resolve_anchor("#nowhere", |_| None::<()>);
        assert_eq!(click, AnchorClick::Missing);
        assert!(click.prevents_default());
        assert!(!click.closes_menu());
    }

    #[test]
    fn bare_hash_keeps_default_and_skips_lookup() {
        let click = resolve_anchor("#", |_| -> Option<()> { panic!("bare # must not be looked up") });
        assert_eq!(click, AnchorClick::Default);
        assert!(!click.prevents_default());
        assert!(!click.closes_menu());
    }
}
