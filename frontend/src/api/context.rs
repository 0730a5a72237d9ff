use yew::prelude::*;

use super::device::DeviceApi;
use crate::config::EndpointConfig;

#[derive(Properties, Clone, PartialEq)]
pub struct ApiProviderProps {
    #[prop_or_default]
    pub children: Children,
    /// Resolved from the page location when absent.
    #[prop_or_default]
    pub endpoint: Option<EndpointConfig>,
}

/// Resolves the endpoint once and injects a `DeviceApi`.
#[function_component(ApiProvider)]
pub fn api_provider(props: &ApiProviderProps) -> Html {
    let api = use_memo(props.endpoint.clone(), |endpoint| {
        DeviceApi::new(endpoint.clone().unwrap_or_else(EndpointConfig::from_window))
    });

    html! {
        <ContextProvider<DeviceApi> context={(*api).clone()}>
            {props.children.clone()}
        </ContextProvider<DeviceApi>>
    }
}

#[hook]
pub fn use_api() -> DeviceApi {
    use_context::<DeviceApi>().expect("API context not found")
}
