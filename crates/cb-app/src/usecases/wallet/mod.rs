mod fetch_summary;

pub use fetch_summary::FetchWalletSummary;
