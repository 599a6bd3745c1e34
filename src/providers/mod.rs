pub mod exchange_rates_api;
pub mod util;

pub use exchange_rates_api::ExchangeRatesApiProvider;
