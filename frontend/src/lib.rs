use log::info;
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

pub mod api;
pub mod config;
pub mod message;

pub use api::{use_api, ApiProvider, DeviceApi};
pub use config::EndpointConfig;
pub use message::{use_message, HidePolicy, MessageContext};
#[cfg(target_arch = "wasm32")]
pub use message::MessageProvider;

#[cfg(target_arch = "wasm32")]
#[derive(Properties, PartialEq)]
pub struct ConsoleProviderProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub endpoint: Option<EndpointConfig>,
    #[prop_or_default]
    pub policy: HidePolicy,
}

/// Injects the device API and the notification store for the views below it.
#[cfg(target_arch = "wasm32")]
#[function_component(ConsoleProvider)]
pub fn console_provider(props: &ConsoleProviderProps) -> Html {
    html! {
        <ApiProvider endpoint={props.endpoint.clone()}>
            <MessageProvider policy={props.policy}>
                {props.children.clone()}
            </MessageProvider>
        </ApiProvider>
    }
}

/// Installs the console logger and panic hook. Call once before mounting.
#[wasm_bindgen(js_name = initConsole)]
pub fn init_console() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    console_error_panic_hook::set_once();
    info!("Logger initialized at {}", level);
}
