use std::sync::Arc;

use sumd_inference::CompletionProvider;

pub struct AppState {
    /// `None` when no API key was configured at startup; every request then
    /// takes the mock path.
    pub provider: Option<Arc<dyn CompletionProvider>>,
    /// Model sent upstream when the request does not override it.
    pub default_model: String,
}
