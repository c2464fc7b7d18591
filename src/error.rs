use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum InteractionError {
    #[error("{missing} is not loaded, animations disabled")]
    EngineUnavailable { missing: &'static str },

    #[error("animation engine call failed: {0}")]
    Engine(String),

    #[error("invalid interactions config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("failed to convert animation descriptor: {0}")]
    Serialize(String),
}

impl InteractionError {
    /// Wraps an exception thrown on the JS side of an engine call.
    pub fn from_js(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        InteractionError::Engine(message)
    }
}

impl From<serde_wasm_bindgen::Error> for InteractionError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        InteractionError::Serialize(err.to_string())
    }
}
