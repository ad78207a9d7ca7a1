use yew::prelude::*;

use crate::components::auth::verification::Verification;
use crate::config::Config;
use crate::head::use_document_title;

#[function_component(VerificationPage)]
pub fn verification_page() -> Html {
    use_document_title(Config::VERIFICATION_TITLE);
    html! {
        <div class={Config::FONT_CLASS}>
            <Verification />
        </div>
    }
}
