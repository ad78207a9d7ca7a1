use yew::prelude::*;

use crate::config::Config;
use crate::head::use_document_title;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    use_document_title(Config::NOT_FOUND_TITLE);
    html! {
        <div class="not-found-page">
            <h1>{"404 - Page Not Found"}</h1>
            <p>{"The page you're looking for doesn't exist."}</p>
        </div>
    }
}
