use gloo_timers::callback::Timeout;
use log::{debug, error, warn};
use web_sys::{MouseEvent, Storage};
use yew::prelude::*;

use crate::config::{THEME_PRESS_MS, THEME_STORAGE_KEY};
use crate::context::use_page_context;
use crate::error::{document, window, PageError, Result};

/// Light or dark visual theme. The string form doubles as the root class
/// and the persisted value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Light,
    Dark,
}

impl Mode {
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark-mode") => Mode::Dark,
            _ => Mode::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Light => "light-mode",
            Mode::Dark => "dark-mode",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Mode::Light => Mode::Dark,
            Mode::Dark => Mode::Light,
        }
    }

    /// Glyph for the mode a click would switch to.
    pub fn glyph(self) -> &'static str {
        match self {
            Mode::Light => "🌙",
            Mode::Dark => "☀️",
        }
    }
}

fn storage() -> Result<Storage> {
    window()?.local_storage()?.ok_or(PageError::StorageUnavailable)
}

/// Reads the persisted mode, falling back to light when nothing usable is stored
/// or storage can't be reached.
pub fn load_mode() -> Mode {
    match storage().and_then(|s| Ok(s.get_item(THEME_STORAGE_KEY)?)) {
        Ok(value) => Mode::from_stored(value.as_deref()),
        Err(e) => {
            warn!("Could not read saved theme, using default: {}", e);
            Mode::default()
        }
    }
}

pub fn save_mode(mode: Mode) -> Result<()> {
    storage()?.set_item(THEME_STORAGE_KEY, mode.as_str())?;
    Ok(())
}

pub fn apply_mode(mode: Mode) -> Result<()> {
    let root = document()?.document_element().ok_or(PageError::NoDocument)?;
    root.set_class_name(mode.as_str());
    Ok(())
}

/// Applies the persisted mode to the document root. Runs before the first render.
pub fn init_theme() -> Mode {
    let mode = load_mode();
    if let Err(e) = apply_mode(mode) {
        error!("Could not apply initial theme: {}", e);
    }
    mode
}

/// Flips `current`, applies and persists it, and returns the new mode.
/// A failed save leaves the switch in effect for this session only.
pub fn toggle_theme(
    current: Mode,
    apply: impl FnOnce(Mode) -> Result<()>,
    save: impl FnOnce(Mode) -> Result<()>,
) -> Mode {
    let next = current.toggled();
    if let Err(e) = apply(next) {
        error!("Could not apply theme: {}", e);
    }
    if let Err(e) = save(next) {
        warn!("Theme not persisted: {}", e);
    }
    debug!("Theme switched to {}", next.as_str());
    next
}

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let page = use_page_context();
    let pressed = use_state(|| false);

    // Release the press animation shortly after it starts.
    {
        let is_pressed = *pressed;
        let pressed = pressed.clone();
        use_effect_with_deps(
            move |is_pressed| {
                let timeout = is_pressed.then(|| {
                    let pressed = pressed.clone();
                    Timeout::new(THEME_PRESS_MS, move || pressed.set(false))
                });
                move || drop(timeout)
            },
            is_pressed,
        );
    }

    let onclick = {
        let page = page.clone();
        let pressed = pressed.clone();
        Callback::from(move |_: MouseEvent| {
            page.set_mode(toggle_theme(page.mode(), apply_mode, save_mode));
            pressed.set(true);
        })
    };

    let style = if *pressed {
        "transform: scale(0.9);"
    } else {
        "transform: scale(1);"
    };

    html! {
        <button class="theme-toggle" aria-label="Toggle theme" style={style} onclick={onclick}>
            <span class="theme-icon">{ page.mode().glyph() }</span>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_or_missing_value_means_light() {
        assert_eq!(Mode::from_stored(None), Mode::Light);
        assert_eq!(Mode::from_stored(Some("")), Mode::Light);
        assert_eq!(Mode::from_stored(Some("dark")), Mode::Light);
        assert_eq!(Mode::from_stored(Some("light-mode")), Mode::Light);
        assert_eq!(Mode::from_stored(Some("dark-mode")), Mode::Dark);
    }

    #[test]
    fn toggling_twice_restores_mode_and_stored_value() {
        for mode in [Mode::Light, Mode::Dark] {
            let stored = mode.as_str();
            let back = mode.toggled().toggled();
            assert_eq!(back, mode);
            assert_eq!(back.as_str(), stored);
            assert_eq!(Mode::from_stored(Some(stored)), mode);
        }
    }

    #[test]
    fn toggle_applies_and_saves_the_next_mode() {
        let mut applied = None;
        let mut saved = None;
        let next = toggle_theme(
            Mode::Light,
            |mode| {
                applied = Some(mode);
                Ok(())
            },
            |mode| {
                saved = Some(mode.as_str());
                Ok(())
            },
        );
        assert_eq!(next, Mode::Dark);
        assert_eq!(applied, Some(Mode::Dark));
        assert_eq!(saved, Some("dark-mode"));
    }

    #[test]
    fn blocked_storage_still_switches_for_the_session() {
        let next = toggle_theme(Mode::Dark, |_| Ok(()), |_| Err(PageError::StorageUnavailable));
        assert_eq!(next, Mode::Light);
        let back = toggle_theme(next, |_| Ok(()), |_| Err(PageError::StorageUnavailable));
        assert_eq!(back, Mode::Dark);
    }

    #[test]
    fn glyph_shows_the_next_mode() {
        assert_eq!(Mode::Light.glyph(), "🌙");
        assert_eq!(Mode::Dark.glyph(), "☀️");
        assert_eq!(Mode::Light.toggled().glyph(), "☀️");
    }
}
