use crate::config::Config;
use yew::prelude::*;

#[function_component(Footnotes)]
pub fn footnotes() -> Html {
    html! {
        <div class="footnotes">
            <p>{format!("* base currency is {}", Config::BASE_CURRENCY)}</p>
            <p>
                {"* As for the API, "}
                <a href={Config::PROVIDER_URL}>{Config::PROVIDER_URL}</a>
                {" is used."}
            </p>
        </div>
    }
}
