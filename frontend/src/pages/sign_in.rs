use yew::prelude::*;
use yew::events::SubmitEvent;
use yew_router::prelude::*;
use web_sys::HtmlInputElement;
use log::debug;
use shared::Identity;
use validator::validate_email;

use crate::auth::AuthContext;
use crate::config::Config;
use crate::head::use_document_title;
use crate::Route;

/// Builds the local identity for a sign-in attempt.
pub fn identity_for_email(email: &str) -> Option<Identity> {
    let email = email.trim().to_lowercase();
    if !validate_email(email.as_str()) {
        return None;
    }
    Some(Identity::new(email.clone(), email))
}

#[function_component(SignIn)]
pub fn sign_in() -> Html {
    use_document_title(Config::SIGN_IN_TITLE);

    let email = use_state(String::new);
    let error = use_state(String::new);

    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let navigator = use_navigator();

    // Head back to analytics once a user is present
    {
        let navigator = navigator.clone();
        use_effect_with(auth.state.user.clone(), move |user| {
            if user.is_some() {
                debug!("User signed in, redirecting to analytics");
                if let Some(navigator) = &navigator {
                    navigator.push(&Route::Analytics);
                }
            }
            || ()
        });
    }

    let onsubmit = {
        let email = email.clone();
        let error = error.clone();
        let auth = auth.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match identity_for_email(&email) {
                Some(user) => {
                    error.set(String::new());
                    auth.sign_in.emit(user);
                }
                None => error.set("Please enter a valid email address".to_string()),
            }
        })
    };

    let onemailchange = {
        let email = email.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    html! {
        <div class={classes!(Config::FONT_CLASS, "min-h-screen", "flex", "items-center", "justify-center", "bg-gray-50", "py-12", "px-4", "sm:px-6", "lg:px-8")}>
            <div class="max-w-md w-full space-y-8">
                <h2 class="mt-6 text-center text-3xl font-extrabold text-gray-900">
                    {"Sign in to your account"}
                </h2>
                <form class="mt-8 space-y-6" onsubmit={onsubmit}>
                    <div>
                        <label for="email" class="sr-only">{"Email address"}</label>
                        <input
                            id="email"
                            name="email"
                            type="email"
                            required=true
                            class="appearance-none rounded-md relative block w-full px-3 py-2 border border-gray-300 placeholder-gray-500 text-gray-900 focus:outline-none focus:ring-green-500 focus:border-green-500 sm:text-sm"
                            placeholder="Email address"
                            onchange={onemailchange}
                        />
                    </div>

                    if !error.is_empty() {
                        <div class="text-red-600 text-sm text-center">{&*error}</div>
                    }

                    <button
                        type="submit"
                        class="group relative w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-white bg-green-600 hover:bg-green-700"
                    >
                        {"Sign in"}
                    </button>
                </form>
            </div>
        </div>
    }
}
