use std::rc::Rc;

use log::error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent, Node};
use yew::prelude::*;

use crate::context::use_page_context;
use crate::error::document;
use crate::scroll::ScrollLink;
use crate::theme::ThemeToggle;

const NAV_LINKS: [(&str, &str); 4] = [
    ("#services", "Services"),
    ("#trust", "Why us"),
    ("#pricing", "Pricing"),
    ("#appointment", "Book"),
];

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MenuState {
    pub open: bool,
}

pub enum MenuAction {
    Toggle,
    /// Closes an open menu; no-op when already closed.
    Close,
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            MenuAction::Toggle => Rc::new(MenuState { open: !self.open }),
            MenuAction::Close if self.open => Rc::new(MenuState { open: false }),
            MenuAction::Close => self,
        }
    }
}

/// Inline styles for the three hamburger bars; open turns them into an X.
pub fn bar_styles(open: bool) -> [&'static str; 3] {
    if open {
        [
            "transform: rotate(45deg) translate(6px, 6px);",
            "opacity: 0;",
            "transform: rotate(-45deg) translate(6px, -6px);",
        ]
    } else {
        ["transform: none;", "opacity: 1;", "transform: none;"]
    }
}

/// Action for a document click, given whether it landed in the toggle or the menu.
pub fn document_click_action(in_toggle: bool, in_menu: bool) -> Option<MenuAction> {
    (!in_toggle && !in_menu).then_some(MenuAction::Close)
}

fn contains(node_ref: &NodeRef, target: Option<&Node>) -> bool {
    node_ref.get().map_or(false, |node| node.contains(target))
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let page = use_page_context();
    let toggle_ref = use_node_ref();
    let menu_ref = use_node_ref();

    // Close the menu on clicks outside both the toggle and the menu.
    {
        let dispatcher = page.menu.dispatcher();
        let toggle_ref = toggle_ref.clone();
        let menu_ref = menu_ref.clone();
        use_effect_with_deps(
            move |_| {
                let click_callback = Closure::wrap(Box::new(move |e: Event| {
                    let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
                    let in_toggle = contains(&toggle_ref, target.as_ref());
                    let in_menu = contains(&menu_ref, target.as_ref());
                    if let Some(action) = document_click_action(in_toggle, in_menu) {
                        dispatcher.dispatch(action);
                    }
                }) as Box<dyn FnMut(Event)>);

                let doc = match document() {
                    Ok(doc) => doc
                        .add_event_listener_with_callback("click", click_callback.as_ref().unchecked_ref())
                        .map(|_| doc)
                        .map_err(|e| error!("Could not listen for outside clicks: {:?}", e))
                        .ok(),
                    Err(e) => {
                        error!("Could not wire mobile menu: {}", e);
                        None
                    }
                };

                move || {
                    if let Some(doc) = doc {
                        let _ = doc.remove_event_listener_with_callback("click", click_callback.as_ref().unchecked_ref());
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let page = page.clone();
        Callback::from(move |_: MouseEvent| page.toggle_menu())
    };

    let open = page.menu_open();
    let active = open.then_some("active");

    html! {
        <nav class="navbar">
            <div class="nav-container">
                <ScrollLink href="#home" class="nav-logo">
                    {"Northside Family Clinic"}
                </ScrollLink>
                <ul ref={menu_ref} class={classes!("nav-menu", active)}>
                    {
                        for NAV_LINKS.iter().map(|(href, label)| html! {
                            <li>
                                <ScrollLink href={*href} class="nav-link">{ *label }</ScrollLink>
                            </li>
                        })
                    }
                </ul>
                <div class="nav-actions">
                    <ThemeToggle />
                    <button
                        ref={toggle_ref}
                        class={classes!("nav-toggle", active)}
                        aria-label="Toggle navigation"
                        aria-expanded={open.to_string()}
                        onclick={toggle_menu}
                    >
                        { for bar_styles(open).into_iter().map(|style| html! { <span style={style}></span> }) }
                    </button>
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: &Rc<MenuState>, action: MenuAction) -> Rc<MenuState> {
        state.clone().reduce(action)
    }

    #[test]
    fn toggle_flips_open_state() {
        let closed = Rc::new(MenuState::default());
        let open = reduce(&closed, MenuAction::Toggle);
        assert!(open.open);
        assert!(!reduce(&open, MenuAction::Toggle).open);
    }

    #[test]
    fn close_on_closed_menu_keeps_state() {
        let closed = Rc::new(MenuState::default());
        let after = reduce(&closed, MenuAction::Close);
        assert!(Rc::ptr_eq(&closed, &after));
    }

    #[test]
    fn anchor_and_outside_click_close_exactly_once() {
        // An anchor click outside the menu reaches both the link handler and
        // the document listener, each dispatching Close.
        let open = Rc::new(MenuState { open: true });
        let once = reduce(&open, MenuAction::Close);
        let twice = reduce(&once, MenuAction::Close);
        assert!(!once.open);
        assert!(!twice.open);
        assert!(Rc::ptr_eq(&once, &twice));
    }

    fn after_document_click(state: &Rc<MenuState>, in_toggle: bool, in_menu: bool) -> Rc<MenuState> {
        match document_click_action(in_toggle, in_menu) {
            Some(action) => reduce(state, action),
            None => state.clone(),
        }
    }

    #[test]
    fn outside_click_closes_open_menu() {
        let open = Rc::new(MenuState { open: true });
        assert!(!after_document_click(&open, false, false).open);
    }

    #[test]
    fn click_inside_menu_keeps_it_open() {
        let open = Rc::new(MenuState { open: true });
        assert!(document_click_action(false, true).is_none());
        assert!(after_document_click(&open, false, true).open);
    }

    #[test]
    fn toggle_click_is_left_to_the_toggle_handler() {
        // The document listener ignores it; the button's own Toggle closes once.
        let open = Rc::new(MenuState { open: true });
        let after_listener = after_document_click(&open, true, false);
        assert!(Rc::ptr_eq(&open, &after_listener));
        assert!(!reduce(&after_listener, MenuAction::Toggle).open);
    }

    #[test]
    fn outside_click_on_closed_menu_is_a_no_op() {
        let closed = Rc::new(MenuState::default());
        assert!(Rc::ptr_eq(&closed, &after_document_click(&closed, false, false)));
    }

    #[test]
    fn toggle_click_while_open_closes() {
        let open = Rc::new(MenuState { open: true });
        assert!(!reduce(&open, MenuAction::Toggle).open);
    }

    #[test]
    fn bars_form_an_x_when_open() {
        let [top, middle, bottom] = bar_styles(true);
        assert!(top.contains("rotate(45deg)"));
        assert_eq!(middle, "opacity: 0;");
        assert!(bottom.contains("rotate(-45deg)"));
        assert_eq!(bar_styles(false), ["transform: none;", "opacity: 1;", "transform: none;"]);
    }
}
