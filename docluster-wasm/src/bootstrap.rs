//! Startup: configuration, logging and mounting

use docluster_core::{ClientError, FrontendConfig, Result};
use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::components::App;

/// Global the hosting page may define to override defaults
pub const CONFIG_GLOBAL: &str = "DOCLUSTER_CONFIG";

/// Read `window.DOCLUSTER_CONFIG`
///
/// `Ok(None)` when the page defines no configuration.
pub fn read_page_config() -> Result<Option<FrontendConfig>> {
    let window = web_sys::window().ok_or_else(|| ClientError::config("no window object"))?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
        .map_err(|e| ClientError::config(format!("cannot read {CONFIG_GLOBAL}: {e:?}")))?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }

    let json: String = js_sys::JSON::stringify(&value)
        .map_err(|e| ClientError::config(format!("cannot serialize {CONFIG_GLOBAL}: {e:?}")))?
        .into();
    FrontendConfig::from_json(&json).map(Some)
}

/// Initialize logging and mount the application on `<body>`
pub fn start() {
    console_error_panic_hook::set_once();

    let loaded = read_page_config();
    let config = match &loaded {
        Ok(Some(config)) => config.clone(),
        _ => FrontendConfig::default(),
    };

    wasm_logger::init(wasm_logger::Config::new(config.log_level()));
    match loaded {
        Ok(Some(_)) => log::info!("Loaded page configuration from window.{CONFIG_GLOBAL}"),
        Ok(None) => log::debug!("No page configuration; using defaults"),
        Err(err) => log::warn!("{err}; using default configuration"),
    }
    log::info!("Document clustering front end started (api base: {:?})", config.api_base);

    leptos::mount::mount_to_body(move || view! { <App config=config/> });
}
