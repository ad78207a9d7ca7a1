use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use shared::{AnalyticsView, AuthSource, PageViewState, RevealController, RevealEffect, StageCatalog};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::AuthContext;
use crate::components::stage_card::StageCard;
use crate::config::Config;
use crate::head::use_document_title;
use crate::Route;

#[function_component(Processing)]
fn processing() -> Html {
    html! {
        <div class="flex flex-col justify-center items-center h-screen">
            <img src={Config::LOGO_PATH} alt="Logo" width="200" height="200" class="animate-spin" />
            <h1 class="text-2xl font-bold mt-4">{"Processing..."}</h1>
        </div>
    }
}

#[function_component(Analytics)]
pub fn analytics() -> Html {
    use_document_title(Config::ANALYTICS_TITLE);

    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let catalog = use_context::<Rc<StageCatalog>>().expect("Stage catalog not provided");
    let navigator = use_navigator();
    let user = auth.current_user();

    // Chosen once per visit
    let view_state = use_state(|| PageViewState::new(&catalog, &mut rand::thread_rng()));
    let controller = use_mut_ref(|| RevealController::new(Config::reveal_delay_ms()));

    {
        let view_state = view_state.clone();
        let controller = controller.clone();
        use_effect_with(user.clone(), move |user| {
            let effects = controller.borrow_mut().activate(user.as_ref());
            let mut timeout = None;
            for effect in effects {
                match effect {
                    RevealEffect::Navigate(path) => {
                        debug!("Analytics redirecting to {}", path);
                        if let Some(navigator) = &navigator {
                            navigator.push(&Route::SignIn);
                        }
                    }
                    RevealEffect::Schedule { ticket, delay_ms } => {
                        let controller = controller.clone();
                        let view_state = view_state.clone();
                        timeout = Some(Timeout::new(delay_ms, move || {
                            if controller.borrow_mut().fire(ticket) {
                                view_state.set(view_state.revealed());
                            }
                        }));
                    }
                    // Dropping the previous Timeout in the last teardown already cleared it.
                    RevealEffect::Cancel(_) => {}
                }
            }

            move || {
                controller.borrow_mut().deactivate();
                drop(timeout);
            }
        });
    }

    match view_state.view(user.is_some()) {
        AnalyticsView::Processing => html! { <Processing /> },
        AnalyticsView::Revealed { title, record } => html! {
            <StageCard record={record.clone()} show_title={title.is_some()} />
        },
    }
}
