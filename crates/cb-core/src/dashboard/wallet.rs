use serde::{Deserialize, Serialize};

use crate::ids::UserId;

/// Reference rate used to show the naira equivalent of a BTC balance.
pub const BTC_TO_NGN_RATE: f64 = 25_000_000.0;
/// Reference rate used to show the naira equivalent of a USDT balance.
pub const USDT_TO_NGN_RATE: f64 = 1_500.0;

/// Per-user balance snapshot, one row of the `wallets` table.
///
/// Treated as opaque and read-only by every screen. Missing balances read as
/// zero; unknown columns are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WalletSummary {
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub naira_balance: Option<f64>,
    #[serde(default)]
    pub btc_balance: Option<f64>,
    #[serde(default)]
    pub usdt_balance: Option<f64>,
}

impl WalletSummary {
    pub fn naira(&self) -> f64 {
        self.naira_balance.unwrap_or(0.0)
    }

    pub fn btc(&self) -> f64 {
        self.btc_balance.unwrap_or(0.0)
    }

    pub fn usdt(&self) -> f64 {
        self.usdt_balance.unwrap_or(0.0)
    }

    pub fn btc_in_naira(&self) -> f64 {
        self.btc() * BTC_TO_NGN_RATE
    }

    pub fn usdt_in_naira(&self) -> f64 {
        self.usdt() * USDT_TO_NGN_RATE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wallet_row_with_extra_columns() {
        let json = r#"{
            "id": 7,
            "user_id": "u1",
            "naira_balance": 150000,
            "btc_balance": 0.5,
            "usdt_balance": null,
            "updated_at": "2025-02-01T10:00:00Z"
        }"#;
        let summary: WalletSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.user_id, Some(UserId::from("u1")));
        assert_eq!(summary.naira(), 150_000.0);
        assert_eq!(summary.usdt(), 0.0);
        assert_eq!(summary.btc_in_naira(), 12_500_000.0);
    }

    #[test]
    fn empty_summary_reads_as_zero() {
        let summary = WalletSummary::default();
        assert_eq!(summary.naira(), 0.0);
        assert_eq!(summary.btc_in_naira(), 0.0);
        assert_eq!(summary.usdt_in_naira(), 0.0);
    }
}
