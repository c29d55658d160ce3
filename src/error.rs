use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("local storage is unavailable")]
    StorageUnavailable,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        PageError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub type Result<T> = std::result::Result<T, PageError>;

pub fn window() -> Result<web_sys::Window> {
    web_sys::window().ok_or(PageError::NoWindow)
}

pub fn document() -> Result<web_sys::Document> {
    window()?.document().ok_or(PageError::NoDocument)
}
