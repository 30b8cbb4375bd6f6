use cb_core::catalog::{CryptoAsset, QuickAction, CRYPTO_ASSETS, QUICK_ACTIONS};
use cb_core::dashboard::DashboardTab;
use cb_core::format;

/// Home screen never reveals the balance.
pub const MASKED_BALANCE: &str = "₦****";

#[derive(Debug, Clone, Default)]
pub struct HomeView;

impl HomeView {
    pub fn new() -> Self {
        Self
    }

    pub fn balance_label(&self) -> &'static str {
        MASKED_BALANCE
    }

    pub fn quick_actions(&self) -> &'static [QuickAction] {
        &QUICK_ACTIONS
    }

    /// Tab a quick action opens. Unknown ids open nothing.
    pub fn action_target(&self, action_id: &str) -> Option<DashboardTab> {
        QUICK_ACTIONS
            .iter()
            .find(|action| action.id == action_id)
            .map(|action| action.target)
    }

    pub fn market(&self) -> &'static [CryptoAsset] {
        &CRYPTO_ASSETS
    }

    /// `$103,560.47`
    pub fn price_label(asset: &CryptoAsset) -> String {
        format!("${}", format::grouped(asset.price))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn giftcard_action_opens_gift_cards_tab() {
        let home = HomeView::new();
        assert_eq!(home.action_target("giftcard"), Some(DashboardTab::GiftCards));
        assert_eq!(home.action_target("buy"), Some(DashboardTab::Wallet));
        assert_eq!(home.action_target("loans"), None);
    }

    #[test]
    fn prices_use_grouped_format() {
        let btc = CRYPTO_ASSETS.iter().find(|a| a.symbol == "BTC").unwrap();
        assert_eq!(HomeView::price_label(btc), "$103,560.47");
        let usdt = CRYPTO_ASSETS.iter().find(|a| a.symbol == "USDT").unwrap();
        assert_eq!(HomeView::price_label(usdt), "$1");
    }

    #[test]
    fn balance_is_masked() {
        assert_eq!(HomeView::new().balance_label(), "₦****");
        assert_eq!(HomeView::new().market().len(), 10);
    }
}
