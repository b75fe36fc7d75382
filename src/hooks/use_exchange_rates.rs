use std::rc::Rc;
use yew::prelude::*;

use crate::config::ConfigResult;
use crate::models::{error::FetchError, rates::RateMap};
use crate::services::api::{ExchangeRateClient, RateSource};
use crate::utils::mount::MountFlag;
use wasm_bindgen_futures::spawn_local;

/// What the rate board is showing. Only moves out of `Loading`, never back.
#[derive(Clone, PartialEq, Debug)]
pub enum ViewState {
    Loading,
    Error(String),
    Ready(Rc<RateMap>),
}

impl ViewState {
    /// State before any fetch has settled. Bad configuration fails immediately.
    pub fn initial(config: &ConfigResult) -> Self {
        match config {
            Ok(_) => Self::Loading,
            Err(e) => Self::failed(e),
        }
    }

    pub fn failed(error: &impl std::fmt::Display) -> Self {
        Self::Error(error.to_string())
    }

    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the rates if they are loaded
    pub const fn data(&self) -> Option<&Rc<RateMap>> {
        match self {
            Self::Ready(rates) => Some(rates),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

impl From<Result<RateMap, FetchError>> for ViewState {
    fn from(result: Result<RateMap, FetchError>) -> Self {
        match result {
            Ok(rates) => Self::Ready(Rc::new(rates)),
            Err(e) => Self::failed(&e),
        }
    }
}

/// Resolves the settled state for one mount. A configuration error returns
/// without touching `source`.
pub async fn load_rates<S: RateSource>(source: &S, config: &ConfigResult) -> ViewState {
    match config {
        Ok(config) => source.fetch_rates(config).await.into(),
        Err(e) => ViewState::failed(e),
    }
}

#[hook]
pub fn use_exchange_rates(config: ConfigResult) -> UseStateHandle<ViewState> {
    let state = {
        let config = config.clone();
        use_state(move || ViewState::initial(&config))
    };

    {
        let state = state.clone();

        // Fetch once per mount; there is no refresh
        use_effect_with((), move |_| {
            let mounted = MountFlag::new();

            if state.is_loading() {
                let task_flag = mounted.clone();

                spawn_local(async move {
                    let next = match ExchangeRateClient::new() {
                        Ok(client) => load_rates(&client, &config).await,
                        Err(e) => {
                            gloo::console::error!(&format!("Error fetching data: {}", e.cause()));
                            ViewState::failed(&e)
                        }
                    };

                    // Component may be gone by the time the request settles
                    task_flag.run_if_mounted(|| state.set(next));
                });
            }

            move || mounted.unmount()
        });
    }

    state
}
