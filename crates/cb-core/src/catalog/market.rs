use crate::dashboard::DashboardTab;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CryptoAsset {
    pub symbol: &'static str,
    pub name: &'static str,
    /// USD price.
    pub price: f64,
    pub change_24h: &'static str,
}

pub const CRYPTO_ASSETS: [CryptoAsset; 10] = [
    CryptoAsset { symbol: "BCH", name: "Bitcoin Cash", price: 398.76, change_24h: "+0.00" },
    CryptoAsset { symbol: "BNB", name: "Binance Coin", price: 652.82, change_24h: "+0.00" },
    CryptoAsset { symbol: "BTC", name: "Bitcoin", price: 103_560.47, change_24h: "+0.00" },
    CryptoAsset { symbol: "ETH", name: "Ethereum", price: 2_603.58, change_24h: "+0.00" },
    CryptoAsset { symbol: "LTC", name: "Litecoin", price: 100.94, change_24h: "+0.00" },
    CryptoAsset { symbol: "SOL", name: "Solana", price: 172.32, change_24h: "+0.00" },
    CryptoAsset { symbol: "TRX", name: "TRON", price: 0.27, change_24h: "+0.00" },
    CryptoAsset { symbol: "USDC", name: "USD Coin", price: 1.0, change_24h: "+0.00" },
    CryptoAsset { symbol: "USDT", name: "Tether", price: 1.0, change_24h: "+0.00" },
    CryptoAsset { symbol: "NGN", name: "Nigerian Naira", price: 1_585.0, change_24h: "+0.00" },
];

/// Home-screen shortcut and the tab it opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAction {
    pub id: &'static str,
    pub name: &'static str,
    pub target: DashboardTab,
}

pub const QUICK_ACTIONS: [QuickAction; 6] = [
    QuickAction { id: "buy", name: "Buy Crypto", target: DashboardTab::Wallet },
    QuickAction { id: "sell", name: "Sell Crypto", target: DashboardTab::Wallet },
    QuickAction { id: "swap", name: "Swap Crypto", target: DashboardTab::Wallet },
    QuickAction { id: "deposit", name: "Deposit", target: DashboardTab::Wallet },
    QuickAction { id: "giftcard", name: "Giftcard", target: DashboardTab::GiftCards },
    QuickAction { id: "withdraw", name: "Withdraw", target: DashboardTab::Wallet },
];
