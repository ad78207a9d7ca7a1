use shared::SharedError;
use yew::prelude::*;

use crate::config::Config;

/// Text shown when the app cannot start with its bundled data.
pub fn config_error_message(error: &SharedError) -> String {
    format!("{} could not start: {}", Config::APP_NAME, error)
}

#[derive(Properties, PartialEq)]
pub struct ConfigErrorProps {
    pub message: AttrValue,
}

#[function_component(ConfigError)]
pub fn config_error(props: &ConfigErrorProps) -> Html {
    html! {
        <div class="config-error-page min-h-screen flex flex-col items-center justify-center bg-gray-50 px-4">
            <h1 class="text-2xl font-bold text-red-700">{"Something went wrong"}</h1>
            <p class="mt-4 text-gray-700">{props.message.clone()}</p>
        </div>
    }
}
