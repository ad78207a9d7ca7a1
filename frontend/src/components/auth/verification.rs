use log::debug;
use shared::{Identity, SharedError, VerificationRequest};
use web_sys::HtmlInputElement;
use yew::events::SubmitEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::AuthContext;
use crate::Route;

/// Message shown for a rejected verification form.
pub fn verification_error_message(error: &SharedError) -> String {
    match error {
        SharedError::Validation(_) => {
            "Please enter a valid email address and the 6-digit code we sent you".to_string()
        }
        other => other.to_string(),
    }
}

/// Checks a submission against the signed-in identity.
pub fn check_verification(
    user: Option<&Identity>,
    email: &str,
    code: &str,
) -> Result<VerificationRequest, String> {
    let Some(user) = user else {
        return Err("Please sign in before verifying your email".to_string());
    };
    let request = VerificationRequest::new(email.to_lowercase(), code);
    request.check().map_err(|err| verification_error_message(&err))?;
    if request.email != user.email.trim().to_lowercase() {
        return Err("This email does not match the signed-in account".to_string());
    }
    Ok(request)
}

#[function_component(Verification)]
pub fn verification() -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let navigator = use_navigator();

    let email = {
        let initial = auth.state.user.as_ref().map(|u| u.email.clone()).unwrap_or_default();
        use_state(move || initial)
    };
    let code = use_state(String::new);
    let error = use_state(String::new);

    let onsubmit = {
        let email = email.clone();
        let code = code.clone();
        let error = error.clone();
        let auth = auth.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = match check_verification(auth.state.user.as_ref(), &email, &code) {
                Ok(request) => request,
                Err(message) => {
                    debug!("Rejected verification: {}", message);
                    error.set(message);
                    return;
                }
            };
            debug!("Verified {}", request.email);

            error.set(String::new());
            auth.mark_verified.emit(());
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Analytics);
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

    let oncodechange = {
        let code = code.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            code.set(input.value());
        })
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <h2 class="mt-6 text-center text-3xl font-extrabold text-gray-900">
                    {"Verify your email"}
                </h2>
                if auth.state.is_verified() {
                    <p class="text-center text-green-700">{"Your email is already verified."}</p>
                }
                <form class="mt-8 space-y-6" onsubmit={onsubmit}>
                    <div class="rounded-md shadow-sm -space-y-px">
                        <div>
                            <label for="verify-email" class="sr-only">{"Email address"}</label>
                            <input
                                id="verify-email"
                                name="email"
                                type="email"
                                required=true
                                value={(*email).clone()}
                                class="appearance-none rounded-none relative block w-full px-3 py-2 border border-gray-300 placeholder-gray-500 text-gray-900 rounded-t-md focus:outline-none focus:ring-green-500 focus:border-green-500 sm:text-sm"
                                placeholder="Email address"
                                onchange={onemailchange}
                            />
                        </div>
                        <div>
                            <label for="verify-code" class="sr-only">{"Verification code"}</label>
                            <input
                                id="verify-code"
                                name="code"
                                type="text"
                                inputmode="numeric"
                                maxlength="6"
                                required=true
                                class="appearance-none rounded-none relative block w-full px-3 py-2 border border-gray-300 placeholder-gray-500 text-gray-900 rounded-b-md focus:outline-none focus:ring-green-500 focus:border-green-500 sm:text-sm"
                                placeholder="6-digit code"
                                onchange={oncodechange}
                            />
                        </div>
                    </div>

                    if !error.is_empty() {
                        <div class="text-red-600 text-sm text-center verification-error">{&*error}</div>
                    }

                    <button
                        type="submit"
                        class="group relative w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-white bg-green-600 hover:bg-green-700"
                    >
                        {"Verify"}
                    </button>
                </form>
            </div>
        </div>
    }
}
