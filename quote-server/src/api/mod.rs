mod exchange;

pub use exchange::ExchangeRateClient;
