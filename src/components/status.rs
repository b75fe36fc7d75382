use crate::hooks::use_exchange_rates::ViewState;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusProps {
    pub state: ViewState,
}

/// Full-screen placeholder shown while loading or after a failure.
#[function_component(Status)]
pub fn status(props: &StatusProps) -> Html {
    match &props.state {
        ViewState::Loading => html! {
            <div class="status loading">
                <p>
                    {"Loading..."}
                    <br />
                    {"Please Wait ..."}
                </p>
            </div>
        },
        ViewState::Error(msg) => html! {
            <div class="status error">
                <p>{msg}</p>
            </div>
        },
        ViewState::Ready(_) => html! {},
    }
}
