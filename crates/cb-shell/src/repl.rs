//! Line-oriented terminal front end.
//!
//! Holds the per-screen view state that the gate does not own (carousel
//! position, form fields, search text) and turns typed lines into commands.

use std::sync::Arc;

use cb_app::screens::{
    AuthForm, AuthSubmission, BillsView, CarouselStep, GiftCardsView, HomeView, OnboardingCarousel, WalletSubTab,
    WalletView,
};
use cb_core::dashboard::DashboardTab;
use cb_core::session::NavigationDecision;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::bootstrap::AppRuntime;
use crate::commands;
use crate::render;

const PROMPT: &str = "> ";
const CONFIRM_EMAIL_NOTICE: &str = "Account created. Confirm your email, then sign in.";

const HELP: &[&str] = &[
    "Anywhere:   help | status | go <path> | quit",
    "Onboarding: next | back | skip",
    "Auth:       mode | email <v> | password <v> | name <v> | phone <v> | show | submit",
    "Dashboard:  tab <home|wallet|bills|giftcards|settings> | action <id> | signout",
    "  wallet:   assets | history",
    "  bills:    search <text> | category <id> | back",
    "  gifts:    search <text>",
];

/// Result of one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Continue(Vec<String>),
    Quit,
}

pub struct Repl {
    runtime: Arc<AppRuntime>,
    carousel: OnboardingCarousel,
    auth_form: AuthForm,
    home: HomeView,
    wallet: WalletView,
    bills: BillsView,
    gift_cards: GiftCardsView,
}

fn parse_tab(name: &str) -> Option<DashboardTab> {
    match name.to_ascii_lowercase().as_str() {
        "home" => Some(DashboardTab::Home),
        "gift" | "gifts" | "gift-cards" => Some(DashboardTab::GiftCards),
        other => DashboardTab::from_path_segment(other).filter(|_| !other.is_empty()),
    }
}

impl Repl {
    pub fn new(runtime: Arc<AppRuntime>) -> Self {
        Self {
            runtime,
            carousel: OnboardingCarousel::new(),
            auth_form: AuthForm::new(),
            home: HomeView::new(),
            wallet: WalletView::new(),
            bills: BillsView::new(),
            gift_cards: GiftCardsView::new(),
        }
    }

    /// Render whatever the gate currently shows.
    pub async fn screen(&self) -> Vec<String> {
        match commands::current_decision(&self.runtime) {
            NavigationDecision::Loading | NavigationDecision::Redirect(_) => render::loading(),
            NavigationDecision::ShowOnboarding => render::onboarding(&self.carousel),
            NavigationDecision::ShowAuth => render::auth(&self.auth_form),
            NavigationDecision::ShowDashboard(tab) => self.dashboard_screen(tab).await,
        }
    }

    async fn dashboard_screen(&self, tab: DashboardTab) -> Vec<String> {
        let Some(identity) = commands::current_identity(&self.runtime).await else {
            return render::loading();
        };
        let mut lines = vec![render::tab_bar(tab), String::new()];
        lines.extend(match tab {
            DashboardTab::Home => render::home(&self.home, &identity),
            DashboardTab::Wallet => match commands::wallet_status(&self.runtime).await {
                Ok(load) => render::wallet(&self.wallet, &load),
                Err(message) => vec![message],
            },
            DashboardTab::Bills => render::bills(&self.bills),
            DashboardTab::GiftCards => render::gift_cards(&self.gift_cards),
            DashboardTab::Settings => render::settings(&identity),
        });
        lines
    }

    /// Apply one line of input. Returns the lines to print.
    pub async fn handle_line(&mut self, line: &str) -> Outcome {
        let line = line.trim();
        let (command, arg) = line
            .split_once(char::is_whitespace)
            .map(|(c, a)| (c, a.trim()))
            .unwrap_or((line, ""));
        debug!(command, "input");

        let notice = match command {
            "quit" | "exit" => return Outcome::Quit,
            "" => None,
            "help" => return Outcome::Continue(HELP.iter().map(|l| l.to_string()).collect()),
            "status" => {
                let status = commands::status(&self.runtime).await;
                let mut lines = vec![format!("screen: {}", render::decision_label(&status.decision))];
                lines.push(format!("route: {}", status.route));
                lines.push(format!("onboarding complete: {}", status.onboarding_complete));
                if let Some(email) = status.signed_in_as {
                    lines.push(format!("signed in as: {email}"));
                }
                return Outcome::Continue(lines);
            }
            "go" => {
                commands::navigate(&self.runtime, arg).await;
                None
            }
            _ => self.dispatch(command, arg).await,
        };

        let mut lines: Vec<String> = notice.into_iter().collect();
        lines.extend(self.screen().await);
        Outcome::Continue(lines)
    }

    async fn dispatch(&mut self, command: &str, arg: &str) -> Option<String> {
        match commands::current_decision(&self.runtime) {
            NavigationDecision::ShowOnboarding => self.onboarding_command(command).await,
            NavigationDecision::ShowAuth => self.auth_command(command, arg).await,
            NavigationDecision::ShowDashboard(tab) => self.dashboard_command(tab, command, arg).await,
            NavigationDecision::Loading | NavigationDecision::Redirect(_) => {
                Some("Still loading, try again.".to_string())
            }
        }
    }

    async fn onboarding_command(&mut self, command: &str) -> Option<String> {
        let step = match command {
            "next" => self.carousel.next(),
            "back" => self.carousel.back(),
            "skip" if self.carousel.can_skip() => self.carousel.skip(),
            _ => return Some(unknown(command)),
        };
        if step != CarouselStep::Finished {
            return None;
        }
        match commands::complete_onboarding(&self.runtime).await {
            Ok(_) => {
                self.carousel = OnboardingCarousel::new();
                None
            }
            Err(message) => Some(message),
        }
    }

    async fn auth_command(&mut self, command: &str, arg: &str) -> Option<String> {
        match command {
            "mode" => self.auth_form.toggle_mode(),
            "email" => self.auth_form.email = arg.to_string(),
            "password" => self.auth_form.set_password(arg),
            "name" => self.auth_form.full_name = arg.to_string(),
            "phone" => self.auth_form.phone = arg.to_string(),
            "show" => self.auth_form.toggle_show_password(),
            "submit" => {
                // Validation failures are kept on the form and rendered inline.
                let submission = self.auth_form.begin_submit()?;
                let result = commands::submit_auth(&self.runtime, &submission).await;
                match result {
                    Ok(NavigationDecision::ShowDashboard(_)) => self.auth_form = AuthForm::new(),
                    Ok(_) => {
                        self.auth_form.finish_submit(None);
                        if let AuthSubmission::SignUp(_) = submission {
                            return Some(CONFIRM_EMAIL_NOTICE.to_string());
                        }
                    }
                    Err(message) => self.auth_form.finish_submit(Some(message)),
                }
            }
            _ => return Some(unknown(command)),
        }
        None
    }

    async fn dashboard_command(
        &mut self,
        tab: DashboardTab,
        command: &str,
        arg: &str,
    ) -> Option<String> {
        match (tab, command) {
            (_, "tab") => {
                let Some(target) = parse_tab(arg) else {
                    return Some(format!("Unknown tab: {arg}"));
                };
                return commands::select_tab(&self.runtime, target).await.err();
            }
            (_, "signout") => {
                return match commands::sign_out(&self.runtime).await {
                    Ok(_) => {
                        self.reset_dashboard_views();
                        None
                    }
                    Err(message) => Some(message),
                };
            }
            (DashboardTab::Home, "action") => {
                let Some(target) = self.home.action_target(arg) else {
                    return Some(format!("Unknown action: {arg}"));
                };
                return commands::select_tab(&self.runtime, target).await.err();
            }
            (DashboardTab::Wallet, "assets") => self.wallet.select_sub_tab(WalletSubTab::Assets),
            (DashboardTab::Wallet, "history") => self.wallet.select_sub_tab(WalletSubTab::History),
            (DashboardTab::Bills, "search") => self.bills.search = arg.to_string(),
            (DashboardTab::Bills, "category") => {
                if !self.bills.select_category(arg) {
                    return Some(format!("Unknown category: {arg}"));
                }
            }
            (DashboardTab::Bills, "back") => self.bills.back(),
            (DashboardTab::GiftCards, "search") => self.gift_cards.search = arg.to_string(),
            _ => return Some(unknown(command)),
        }
        None
    }

    fn reset_dashboard_views(&mut self) {
        self.wallet = WalletView::new();
        self.bills = BillsView::new();
        self.gift_cards = GiftCardsView::new();
    }

    /// Read lines until end of input or `quit`, printing each resulting
    /// screen.
    pub async fn run<R, W>(&mut self, input: R, mut output: W) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        write_lines(&mut output, &self.screen().await).await?;
        let mut lines = input.lines();
        loop {
            output.write_all(PROMPT.as_bytes()).await?;
            output.flush().await?;
            let Some(line) = lines.next_line().await? else {
                break;
            };
            match self.handle_line(&line).await {
                Outcome::Continue(rendered) => write_lines(&mut output, &rendered).await?,
                Outcome::Quit => break,
            }
        }
        output.flush().await?;
        Ok(())
    }
}

fn unknown(command: &str) -> String {
    format!("Unknown command: {command}. Type `help` for a list.")
}

async fn write_lines<W: AsyncWrite + Unpin>(output: &mut W, lines: &[String]) -> std::io::Result<()> {
    for line in lines {
        output.write_all(line.as_bytes()).await?;
        output.write_all(b"\n").await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_names_accept_segments_and_aliases() {
        assert_eq!(parse_tab("home"), Some(DashboardTab::Home));
        assert_eq!(parse_tab("Wallet"), Some(DashboardTab::Wallet));
        assert_eq!(parse_tab("giftcards"), Some(DashboardTab::GiftCards));
        assert_eq!(parse_tab("gifts"), Some(DashboardTab::GiftCards));
        assert_eq!(parse_tab(""), None);
        assert_eq!(parse_tab("nope"), None);
    }
}
