use cb_core::catalog::{MockTransaction, MOCK_TRANSACTIONS};
use cb_core::dashboard::WalletSummary;
use cb_core::format;

use crate::dashboard::WalletLoad;

/// Shown in place of figures while the wallet fetch is in flight.
pub const BALANCE_PLACEHOLDER: &str = "…";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WalletSubTab {
    #[default]
    Assets,
    History,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssetRow {
    pub symbol: &'static str,
    pub name: &'static str,
    pub amount: String,
    pub naira_equivalent: String,
}

/// Wallet tab. Reads the shell's wallet record; `None` renders as zero.
#[derive(Debug, Clone, Default)]
pub struct WalletView {
    sub_tab: WalletSubTab,
}

impl WalletView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sub_tab(&self) -> WalletSubTab {
        self.sub_tab
    }

    pub fn select_sub_tab(&mut self, sub_tab: WalletSubTab) {
        self.sub_tab = sub_tab;
    }

    /// `₦ 12,500`, `₦ 0` when there is no record, placeholder while loading.
    pub fn balance_label(&self, load: &WalletLoad) -> String {
        if load.loading {
            return BALANCE_PLACEHOLDER.to_string();
        }
        let naira = load.summary.as_ref().map(WalletSummary::naira).unwrap_or(0.0);
        format!("₦ {}", format::grouped(naira))
    }

    /// `None` while loading.
    pub fn assets(&self, load: &WalletLoad) -> Option<Vec<AssetRow>> {
        if load.loading {
            return None;
        }
        let summary = load.summary.clone().unwrap_or_default();
        Some(vec![
            AssetRow {
                symbol: "BTC",
                name: "Bitcoin",
                amount: format!("{} BTC", format::grouped(summary.btc())),
                naira_equivalent: format!("≈ ₦ {}", format::grouped(summary.btc_in_naira())),
            },
            AssetRow {
                symbol: "USDT",
                name: "Tether",
                amount: format!("{} USDT", format::grouped(summary.usdt())),
                naira_equivalent: format!("≈ ₦ {}", format::grouped(summary.usdt_in_naira())),
            },
        ])
    }

    pub fn history(&self) -> &'static [MockTransaction] {
        &MOCK_TRANSACTIONS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(summary: Option<WalletSummary>) -> WalletLoad {
        WalletLoad {
            loading: false,
            summary,
        }
    }

    #[test]
    fn missing_record_renders_zero() {
        let view = WalletView::new();
        assert_eq!(view.balance_label(&loaded(None)), "₦ 0");

        let assets = view.assets(&loaded(None)).unwrap();
        assert_eq!(assets[0].amount, "0 BTC");
        assert_eq!(assets[0].naira_equivalent, "≈ ₦ 0");
        assert_eq!(assets[1].amount, "0 USDT");
    }

    #[test]
    fn loading_renders_placeholder() {
        let view = WalletView::new();
        let load = WalletLoad {
            loading: true,
            summary: None,
        };
        assert_eq!(view.balance_label(&load), BALANCE_PLACEHOLDER);
        assert!(view.assets(&load).is_none());
    }

    #[test]
    fn record_values_are_grouped_and_converted() {
        let summary = WalletSummary {
            naira_balance: Some(125_000.5),
            btc_balance: Some(0.5),
            usdt_balance: Some(20.0),
            ..Default::default()
        };
        let view = WalletView::new();

        assert_eq!(view.balance_label(&loaded(Some(summary.clone()))), "₦ 125,000.5");
        let assets = view.assets(&loaded(Some(summary))).unwrap();
        assert_eq!(assets[0].naira_equivalent, "≈ ₦ 12,500,000");
        assert_eq!(assets[1].naira_equivalent, "≈ ₦ 30,000");
    }

    #[test]
    fn history_sub_tab_lists_mock_transactions() {
        let mut view = WalletView::new();
        view.select_sub_tab(WalletSubTab::History);
        assert_eq!(view.sub_tab(), WalletSubTab::History);
        assert_eq!(view.history().len(), 5);
    }
}
