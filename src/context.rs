use yew::prelude::*;

use crate::nav::{MenuAction, MenuState};
use crate::theme::Mode;

/// State shared by the page's handlers, created once by `App`.
#[derive(Clone, PartialEq)]
pub struct PageContext {
    pub menu: UseReducerHandle<MenuState>,
    /// Seeded from the mode `init_theme` applied at startup.
    pub mode: UseStateHandle<Mode>,
}

impl PageContext {
    pub fn menu_open(&self) -> bool {
        self.menu.open
    }

    pub fn toggle_menu(&self) {
        self.menu.dispatch(MenuAction::Toggle);
    }

    pub fn mode(&self) -> Mode {
        *self.mode
    }

    pub fn set_mode(&self, mode: Mode) {
        self.mode.set(mode);
    }

    pub fn close_menu(&self) {
        self.menu.dispatch(MenuAction::Close);
    }
}

#[hook]
pub fn use_page_context() -> PageContext {
    use_context::<PageContext>().expect("PageContext is provided by App")
}
