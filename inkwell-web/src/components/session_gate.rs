//! Bootstrap gate for protected subtrees.
//!
//! On a hard reload the access token is gone even though the refresh
//! cookie may still be good. Until one silent refresh resolves, nothing
//! behind the gate is mounted — guards therefore never see a
//! half-initialized session.

use crate::api::ApiClient;
use crate::auth::session::{self, BootstrapPlan};
use crate::components::Loading;
use crate::models::app_state::{AppState, SessionPhase};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::prelude::use_store;

#[derive(Properties, PartialEq)]
pub struct SessionGateProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(SessionGate)]
pub fn session_gate(props: &SessionGateProps) -> Html {
    let (_state, dispatch) = use_store::<AppState>();
    let verifying = use_state(|| true);

    {
        let verifying = verifying.clone();
        let dispatch = dispatch.clone();
        use_effect_with((), move |_| {
            let mounted = Rc::new(Cell::new(true));
            let unmount_guard = mounted.clone();
            spawn_local(async move {
                let client = ApiClient::shared();
                let plan = session::bootstrap_plan(
                    client.credentials().is_authenticated(),
                    session::is_signed_in(),
                );
                let phase = match plan {
                    BootstrapPlan::UseExistingToken => match client.credentials().role() {
                        Some(role) => SessionPhase::Authenticated(role),
                        None => SessionPhase::Anonymous,
                    },
                    BootstrapPlan::TreatAsAnonymous => SessionPhase::Anonymous,
                    BootstrapPlan::AttemptRefresh => match client.refresh().await {
                        Ok(auth) => SessionPhase::Authenticated(auth.role),
                        Err(err) => {
                            // Marker cleanup already happened inside the
                            // refresh when the failure was definitive.
                            if err.is_unauthorized() {
                                log::info!("refresh credential expired; continuing anonymously");
                            } else {
                                log::warn!("silent refresh failed: {err}");
                            }
                            SessionPhase::Anonymous
                        }
                    },
                };
                // Skip the state writes if the user navigated away
                // while the refresh was in flight.
                if mounted.get() {
                    dispatch.reduce_mut(|state| state.session = phase);
                    verifying.set(false);
                }
            });
            move || unmount_guard.set(false)
        });
    }

    if *verifying {
        html! { <Loading /> }
    } else {
        html! { <>{ props.children.clone() }</> }
    }
}
