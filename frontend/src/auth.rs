use log::{debug, error};
use yew::prelude::*;
use yew::functional::use_reducer_eq;
use gloo_storage::{LocalStorage, Storage};
use shared::{AuthSource, Identity};
use std::rc::Rc;

use crate::config::Config;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<Identity>,
}

impl AuthState {
    pub fn is_verified(&self) -> bool {
        self.user.as_ref().map(|u| u.verified).unwrap_or(false)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AuthAction {
    SignIn(Identity),
    SignOut,
    MarkVerified,
}

fn persist(user: &Identity) {
    if let Err(e) = LocalStorage::set(Config::USER_STORAGE_KEY, user) {
        error!("Failed to store user in local storage: {}", e);
    }
}

impl Reducible for AuthState {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AuthAction::SignIn(user) => {
                debug!("Signed in as {}", user.id);
                persist(&user);
                Rc::new(Self { user: Some(user) })
            }
            AuthAction::SignOut => {
                LocalStorage::delete(Config::USER_STORAGE_KEY);
                Rc::new(Self { user: None })
            }
            AuthAction::MarkVerified => {
                let Some(user) = self.user.clone() else {
                    debug!("Ignoring verification with no signed-in user");
                    return self;
                };
                let user = Identity { verified: true, ..user };
                persist(&user);
                Rc::new(Self { user: Some(user) })
            }
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct AuthProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AuthContext {
    pub state: AuthState,
    pub sign_in: Callback<Identity>,
    pub sign_out: Callback<()>,
    pub mark_verified: Callback<()>,
}

impl AuthSource for AuthContext {
    fn current_user(&self) -> Option<Identity> {
        self.state.user.clone()
    }
}

#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    // Restore the previous session, if any
    let auth = use_reducer_eq(|| AuthState {
        user: LocalStorage::get(Config::USER_STORAGE_KEY).ok(),
    });

    let sign_in = {
        let auth = auth.clone();
        Callback::from(move |user: Identity| auth.dispatch(AuthAction::SignIn(user)))
    };

    let sign_out = {
        let auth = auth.clone();
        Callback::from(move |_: ()| auth.dispatch(AuthAction::SignOut))
    };

    let mark_verified = {
        let auth = auth.clone();
        Callback::from(move |_: ()| auth.dispatch(AuthAction::MarkVerified))
    };

    let context = AuthContext {
        state: (*auth).clone(),
        sign_in,
        sign_out,
        mark_verified,
    };

    html! {
        <ContextProvider<AuthContext> context={context}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}
