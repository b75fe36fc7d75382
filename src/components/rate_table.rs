use crate::models::rates::RateMap;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RateTableProps {
    pub rates: Rc<RateMap>,
}

#[function_component(RateTable)]
pub fn rate_table(props: &RateTableProps) -> Html {
    let rows = use_memo(props.rates.clone(), |rates| rates.rows());

    html! {
        <table class="rate-table">
            <thead>
                <tr>
                    <th>{"CURRENCY"}</th>
                    <th>{"WE BUY"}</th>
                    <th>{"EXCHANGE RATE"}</th>
                    <th>{"WE SELL"}</th>
                </tr>
            </thead>
            <tbody>
                {
                    rows.iter().map(|row| {
                        html! {
                            <tr key={row.currency.code()} title={row.currency.description()}>
                                <td>{row.currency.code()}</td>
                                <td>{&row.we_buy}</td>
                                <td>{&row.exchange_rate}</td>
                                <td>{&row.we_sell}</td>
                            </tr>
                        }
                    }).collect::<Html>()
                }
            </tbody>
        </table>
    }
}
