//! Plain-text rendering of screens.
//!
//! Every function returns whole lines; the front end decides where they go.

use cb_app::screens::{
    AuthForm, AuthMode, BillsView, GiftCardsView, HomeView, OnboardingCarousel, SettingsView,
    WalletSubTab, WalletView, NO_RECENT_PURCHASES,
};
use cb_app::WalletLoad;
use cb_core::dashboard::DashboardTab;
use cb_core::identity::Identity;
use cb_core::session::NavigationDecision;

pub fn loading() -> Vec<String> {
    vec!["Loading...".to_string()]
}

pub fn onboarding(carousel: &OnboardingCarousel) -> Vec<String> {
    let slide = carousel.slide();
    let mut lines = vec![
        format!(
            "[{}/{}] {}",
            carousel.index() + 1,
            carousel.slide_count(),
            slide.title
        ),
        slide.description.to_string(),
        String::new(),
    ];

    let mut actions = Vec::new();
    if carousel.can_go_back() {
        actions.push("back".to_string());
    }
    if carousel.can_skip() {
        actions.push("skip".to_string());
    }
    actions.push(format!("next ({})", carousel.primary_label()));
    lines.push(format!("Actions: {}", actions.join(" | ")));
    lines
}

pub fn auth(form: &AuthForm) -> Vec<String> {
    let mut lines = vec![form.title().to_string()];
    if form.mode() == AuthMode::SignUp {
        lines.push(format!("  Full name: {}", form.full_name));
    }
    lines.push(format!("  Email:     {}", form.email));
    if form.mode() == AuthMode::SignUp {
        lines.push(format!("  Phone:     {}", form.phone));
    }
    lines.push(format!("  Password:  {}", form.password_display()));

    let checklist = form.criteria_checklist();
    if !checklist.is_empty() {
        lines.push(format!("  Strength:  {}/4", form.strength()));
        for (label, met) in checklist {
            lines.push(format!("    [{}] {label}", if met { "x" } else { " " }));
        }
    }
    if let Some(error) = form.error() {
        lines.push(format!("  ! {error}"));
    }
    lines.push(format!("  submit ({}) | mode ({})", form.submit_label(), form.toggle_prompt()));
    lines
}

pub fn tab_bar(selected: DashboardTab) -> String {
    DashboardTab::ALL
        .iter()
        .map(|tab| {
            if *tab == selected {
                format!("[{}]", tab.label())
            } else {
                tab.label().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

pub fn home(view: &HomeView, identity: &Identity) -> Vec<String> {
    let mut lines = vec![
        format!("Hello, {}", identity.display_name_or_default()),
        format!("Total balance: {}", view.balance_label()),
        String::new(),
        "Quick actions:".to_string(),
    ];
    for action in view.quick_actions() {
        lines.push(format!("  {:<10} -> {}", action.id, action.target.label()));
    }
    lines.push(String::new());
    lines.push("Market:".to_string());
    for asset in view.market() {
        lines.push(format!(
            "  {:<5} {:<16} {:>14}",
            asset.symbol,
            asset.name,
            HomeView::price_label(asset)
        ));
    }
    lines
}

pub fn wallet(view: &WalletView, load: &WalletLoad) -> Vec<String> {
    let mut lines = vec![format!("Total balance: {}", view.balance_label(load))];
    match view.sub_tab() {
        WalletSubTab::Assets => {
            lines.push("[Assets]  History".to_string());
            match view.assets(load) {
                Some(rows) => {
                    for row in rows {
                        lines.push(format!(
                            "  {:<5} {:<8} {:>16}  {}",
                            row.symbol, row.name, row.amount, row.naira_equivalent
                        ));
                    }
                }
                None => lines.push("  Loading...".to_string()),
            }
        }
        WalletSubTab::History => {
            lines.push("Assets  [History]".to_string());
            for tx in view.history() {
                lines.push(format!(
                    "  {:<22} {:>14}  {}",
                    tx.description,
                    tx.display_amount(),
                    tx.date
                ));
            }
        }
    }
    lines
}

pub fn bills(view: &BillsView) -> Vec<String> {
    let mut lines = vec![view.title().to_string()];
    match view.selected_category() {
        Some(_) => {
            for provider in view.providers() {
                lines.push(format!("  {}", provider.name));
            }
            lines.push("  back".to_string());
        }
        None => {
            if !view.search.is_empty() {
                lines.push(format!("  search: {}", view.search));
            }
            for category in view.categories() {
                lines.push(format!("  {:<12} {}", category.id, category.name));
            }
        }
    }
    lines.push(String::new());
    lines.push(format!("Recent: {}", view.recent_payments_label()));
    lines
}

pub fn gift_cards(view: &GiftCardsView) -> Vec<String> {
    let mut lines = vec!["Gift Cards".to_string()];
    if !view.search.is_empty() {
        lines.push(format!("  search: {}", view.search));
    }
    match view.empty_message() {
        Some(message) => lines.push(format!("  {message}")),
        None => {
            for card in view.cards() {
                lines.push(format!("  {:<12} {}", card.name, card.description));
            }
        }
    }
    lines.push(String::new());
    lines.push(format!("Recent: {NO_RECENT_PURCHASES}"));
    lines
}

pub fn settings(identity: &Identity) -> Vec<String> {
    let view = SettingsView::new(identity);
    let mut lines = vec![
        format!("({}) {}", view.avatar_initial(), view.name()),
        format!("    {}", view.email()),
        String::new(),
    ];
    for option in view.options() {
        lines.push(format!("  {:<24} {}", option.name, option.description));
    }
    lines.push("  signout".to_string());
    lines.push(String::new());
    lines.push(view.version_label());
    lines.push(view.copyright().to_string());
    lines
}

/// One-line summary of a decision, for `status` and logs.
pub fn decision_label(decision: &NavigationDecision) -> String {
    match decision {
        NavigationDecision::Loading => "loading".to_string(),
        NavigationDecision::ShowOnboarding => "onboarding".to_string(),
        NavigationDecision::ShowAuth => "auth".to_string(),
        NavigationDecision::ShowDashboard(tab) => format!("dashboard ({})", tab.label()),
        NavigationDecision::Redirect(route) => format!("redirect to {route}"),
    }
}
