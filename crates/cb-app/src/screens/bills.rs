use cb_core::catalog::{matches_query, providers_for, BillCategory, BillProvider, BILL_CATEGORIES};

pub const NO_RECENT_PAYMENTS: &str = "No recent payments";

/// Bills tab: category list with search, drill-down to providers.
#[derive(Debug, Clone, Default)]
pub struct BillsView {
    pub search: String,
    selected: Option<&'static BillCategory>,
}

impl BillsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &'static str {
        self.selected.map_or("Pay Bills", |category| category.name)
    }

    pub fn categories(&self) -> Vec<&'static BillCategory> {
        BILL_CATEGORIES
            .iter()
            .filter(|category| matches_query(category.name, &self.search))
            .collect()
    }

    /// Returns false for an unknown id.
    pub fn select_category(&mut self, category_id: &str) -> bool {
        self.selected = BILL_CATEGORIES.iter().find(|c| c.id == category_id);
        self.selected.is_some()
    }

    pub fn selected_category(&self) -> Option<&'static BillCategory> {
        self.selected
    }

    pub fn back(&mut self) {
        self.selected = None;
    }

    /// Providers of the selected category; empty with no selection.
    pub fn providers(&self) -> &'static [BillProvider] {
        match self.selected {
            Some(category) => providers_for(category.id),
            None => &[],
        }
    }

    pub fn recent_payments_label(&self) -> &'static str {
        NO_RECENT_PAYMENTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_filters_categories_case_insensitively() {
        let mut bills = BillsView::new();
        assert_eq!(bills.categories().len(), 4);

        bills.search = "ELEC".into();
        let names: Vec<_> = bills.categories().iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Electricity"]);

        bills.search = "gas".into();
        assert!(bills.categories().is_empty());
    }

    #[test]
    fn selecting_category_shows_providers_and_back_returns() {
        let mut bills = BillsView::new();
        assert!(bills.select_category("tv"));
        assert_eq!(bills.title(), "TV Subscription");
        let providers: Vec<_> = bills.providers().iter().map(|p| p.name).collect();
        assert_eq!(providers, vec!["DSTV", "GoTV", "StarTimes"]);

        bills.back();
        assert_eq!(bills.title(), "Pay Bills");
        assert!(bills.providers().is_empty());
    }

    #[test]
    fn airtime_category_offers_network_providers() {
        let mut bills = BillsView::new();
        assert!(bills.select_category("airtime"));
        assert_eq!(bills.providers().len(), 4);
        assert_eq!(bills.providers()[0].name, "MTN");
    }

    #[test]
    fn unknown_category_is_ignored() {
        let mut bills = BillsView::new();
        assert!(!bills.select_category("water"));
        assert!(bills.selected_category().is_none());
    }
}
