use yew::prelude::*;
use yew_router::prelude::*;
use crate::auth::AuthContext;
use crate::config::Config;
use crate::Route;

fn link_classes(active: bool) -> Classes {
    classes!(
        "px-3", "py-2", "rounded-md", "text-sm", "font-medium",
        "transition-colors", "duration-200", "min-h-[44px]", "flex", "items-center",
        if active {
            classes!("bg-white/20", "text-white")
        } else {
            classes!("text-white/90", "hover:bg-white/10", "hover:text-white")
        }
    )
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let navigator = use_navigator();
    let current_route = use_route::<Route>().unwrap_or(Route::Home);

    let on_sign_out_click = {
        let auth = auth.clone();
        Callback::from(move |_: MouseEvent| {
            auth.sign_out.emit(());
            if let Some(navigator) = &navigator {
                navigator.push(&Route::SignIn);
            }
        })
    };

    html! {
        <nav class={classes!(
            "sticky", "top-0", "z-50", "bg-gradient-to-r", "from-green-600", "to-blue-600",
            "text-white", "shadow-lg"
        )}>
            <div class={classes!("max-w-7xl", "mx-auto", "px-4", "sm:px-6", "lg:px-8")}>
                <div class={classes!("flex", "justify-between", "h-16", "items-center")}>
                    <div class={classes!("flex", "items-center", "space-x-4", "sm:space-x-8")}>
                        <Link<Route> to={Route::Home} classes={classes!("flex", "items-center", "space-x-2")}>
                            <img src={Config::LOGO_PATH} alt="Logo" width="32" height="32" />
                            <span class={classes!("text-lg", "sm:text-xl", "font-semibold")}>{Config::APP_NAME}</span>
                        </Link<Route>>
                        if auth.state.user.is_some() {
                            <div class={classes!("hidden", "md:flex", "space-x-6")}>
                                <Link<Route> to={Route::Analytics} classes={link_classes(current_route == Route::Analytics)}>
                                    {"Analytics"}
                                </Link<Route>>
                                if !auth.state.is_verified() {
                                    <Link<Route> to={Route::Verification} classes={link_classes(current_route == Route::Verification)}>
                                        {"Verify Email"}
                                    </Link<Route>>
                                }
                            </div>
                        }
                    </div>

                    <div class={classes!("flex", "items-center", "space-x-2", "sm:space-x-4")}>
                        if let Some(user) = &auth.state.user {
                            <span class={classes!("hidden", "md:inline", "text-sm", "text-white/90")}>
                                {&user.email}
                            </span>
                            <button
                                onclick={on_sign_out_click}
                                class={classes!("px-3", "py-2", "rounded-md", "text-sm", "font-medium", "bg-white/10", "hover:bg-white/20")}
                            >
                                {"Sign out"}
                            </button>
                        } else {
                            <Link<Route> to={Route::SignIn} classes={link_classes(current_route == Route::SignIn)}>
                                {"Sign in"}
                            </Link<Route>>
                        }
                    </div>
                </div>
            </div>
        </nav>
    }
}
