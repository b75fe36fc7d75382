use yew::prelude::*;

use rate_board::components::{Footnotes, RateTable, Status};
use rate_board::config::{ConfigResult, CurrencyConfig};
use rate_board::hooks::use_exchange_rates::use_exchange_rates;

#[derive(Properties, PartialEq)]
struct AppProps {
    config: ConfigResult,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let state = use_exchange_rates(props.config.clone());

    html! {
        <div class="app-container">
            if let Some(rates) = state.data() {
                <main class="rate-board">
                    <RateTable rates={rates.clone()} />
                    <Footnotes />
                </main>
            } else {
                <Status state={(*state).clone()} />
            }

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    let config = CurrencyConfig::from_env();
    if let Err(e) = &config {
        web_sys::console::warn_1(&format!("Configuration error: {e}").into());
    }

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
