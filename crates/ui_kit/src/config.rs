//! Startup configuration and translation backend injection through Leptos context.

use std::rc::Rc;

use leptos::*;
use ui_core::{SourceText, Translator, UiConfig};

#[derive(Clone)]
struct UiContext {
    config: Rc<UiConfig>,
    translator: Rc<dyn Translator>,
}

#[component]
/// Provides [`UiConfig`] and the translation backend to descendant components.
///
/// Without an explicit `translator`, the configuration's own message overrides are used, falling
/// back to the source strings.
pub fn UiProvider(
    /// Configuration assembled by the entry layer.
    #[prop(optional)]
    config: UiConfig,
    /// Replacement translation backend.
    #[prop(optional)]
    translator: Option<Rc<dyn Translator>>,
    children: Children,
) -> impl IntoView {
    let config = Rc::new(config);
    let translator = translator.unwrap_or_else(|| config.clone() as Rc<dyn Translator>);
    provide_context(UiContext { config, translator });

    children().into_view()
}

/// Returns the provided [`UiConfig`], or defaults outside [`UiProvider`].
pub fn use_ui_config() -> Rc<UiConfig> {
    use_context::<UiContext>()
        .map(|context| context.config)
        .unwrap_or_default()
}

/// Returns the provided translation backend, or source strings outside [`UiProvider`].
pub fn use_translator() -> Rc<dyn Translator> {
    use_context::<UiContext>()
        .map(|context| context.translator)
        .unwrap_or_else(|| Rc::new(SourceText))
}

pub(crate) fn translated(translator: &Rc<dyn Translator>, source: &str) -> String {
    translator.translate(source).into_owned()
}
