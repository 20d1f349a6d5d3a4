use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use ui_core::UiConfig;
use ui_kit::UiProvider;
use ui_showcase::UiShowcaseApp;

const UI_CONFIG_JSON: &str = include_str!("../ui.json");

/// Parses the bundled UI configuration, falling back to defaults when it is malformed.
pub fn site_config() -> UiConfig {
    match UiConfig::from_json(UI_CONFIG_JSON) {
        Ok(config) => config,
        Err(err) => {
            logging::warn!("ui config load failed: {err}");
            UiConfig::default()
        }
    }
}

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();
    let config = site_config();

    view! {
        <Html lang=config.lang().to_string() />
        <Title text="ui_kit showcase" />
        <Meta name="description" content="Dropdowns, sidebars, and presentational components for Leptos." />

        <UiProvider config>
            <Router>
                <Routes>
                    <Route path="/*any" view=ShowcaseEntry />
                </Routes>
            </Router>
        </UiProvider>
    }
}

#[component]
pub fn ShowcaseEntry() -> impl IntoView {
    let location = use_location();

    move || view! { <UiShowcaseApp path=location.pathname.get() /> }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn bundled_config_parses_with_overrides() {
        let config = site_config();
        assert_eq!(config.lang(), "en");
        assert_eq!(
            config.messages.get("Open sidebar").map(String::as_str),
            Some("Open navigation")
        );
    }
}
