use cb_core::catalog::{matches_query, GiftCard, GIFT_CARDS};

pub const NO_GIFT_CARDS_FOUND: &str = "No gift cards found";
pub const NO_RECENT_PURCHASES: &str = "No recent purchases";

#[derive(Debug, Clone, Default)]
pub struct GiftCardsView {
    pub search: String,
}

impl GiftCardsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cards(&self) -> Vec<&'static GiftCard> {
        GIFT_CARDS
            .iter()
            .filter(|card| matches_query(card.name, &self.search))
            .collect()
    }

    /// Message shown when the filter leaves nothing.
    pub fn empty_message(&self) -> Option<&'static str> {
        self.cards().is_empty().then_some(NO_GIFT_CARDS_FOUND)
    }
}
