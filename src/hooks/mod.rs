pub mod use_exchange_rates;
