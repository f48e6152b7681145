//! CSV ingestion into price series

pub mod loader;

pub use loader::{
    load_btc, load_csv, load_sp500, parse_date, parse_rows, LoadError, BTC_DATE_COLUMN,
    BTC_PRICE_COLUMN, DATE_FORMAT, SP500_DATE_COLUMN, SP500_PRICE_COLUMN,
};
