mod common;

use cb_core::dashboard::DashboardTab;
use cb_core::session::NavigationDecision;
use cb_shell::commands;
use cb_shell::repl::{Outcome, Repl};
use common::{mock_sign_in, mock_wallet, started_runtime};
use serde_json::json;

async fn lines(repl: &mut Repl, input: &str) -> Vec<String> {
    match repl.handle_line(input).await {
        Outcome::Continue(lines) => lines,
        Outcome::Quit => panic!("unexpected quit on {input:?}"),
    }
}

fn contains(lines: &[String], needle: &str) -> bool {
    lines.iter().any(|l| l.contains(needle))
}

#[tokio::test]
async fn test_first_launch_walks_from_onboarding_to_dashboard() {
    let mut server = mockito::Server::new_async().await;
    let sign_in = mock_sign_in(&mut server).await;
    mock_wallet(&mut server, json!([{ "user_id": "u-ada", "naira_balance": 12500 }])).await;

    let runtime = started_runtime(&server).await;
    let mut repl = Repl::new(runtime.clone());

    assert!(contains(&repl.screen().await, "Fast Crypto Bill Payments"));

    let out = lines(&mut repl, "skip").await;
    assert!(contains(&out, "Welcome Back"));

    lines(&mut repl, "email ada@example.com").await;
    lines(&mut repl, "password Secret1!").await;
    let out = lines(&mut repl, "submit").await;
    assert!(contains(&out, "[Home]"), "{out:#?}");
    assert!(contains(&out, "Hello, Ada Obi"));
    sign_in.assert_async().await;

    let shell = runtime.gate().dashboard().await.unwrap();
    let mut wallet = shell.subscribe_wallet();
    wallet.wait_for(|load| !load.loading).await.unwrap();

    let out = lines(&mut repl, "tab wallet").await;
    assert!(contains(&out, "Total balance: ₦ 12,500"), "{out:#?}");
    assert_eq!(
        commands::current_decision(&runtime),
        NavigationDecision::ShowDashboard(DashboardTab::Wallet)
    );

    runtime.shutdown().await;
}

#[tokio::test]
async fn test_weak_sign_up_is_rejected_inline() {
    let mut server = mockito::Server::new_async().await;
    let signup = server
        .mock("POST", "/auth/v1/signup")
        .expect(0)
        .create_async()
        .await;

    let runtime = started_runtime(&server).await;
    commands::complete_onboarding(&runtime).await.unwrap();
    let mut repl = Repl::new(runtime.clone());

    lines(&mut repl, "mode").await;
    lines(&mut repl, "name Ada Obi").await;
    lines(&mut repl, "email ada@example.com").await;
    lines(&mut repl, "phone 08012345678").await;
    lines(&mut repl, "password abc").await;
    let out = lines(&mut repl, "submit").await;

    assert!(contains(&out, "Create Account"));
    assert!(contains(&out, "! "), "{out:#?}");
    assert_eq!(commands::current_decision(&runtime), NavigationDecision::ShowAuth);
    signup.assert_async().await;
    runtime.shutdown().await;
}

#[tokio::test]
async fn test_sign_out_returns_to_auth() {
    let mut server = mockito::Server::new_async().await;
    mock_sign_in(&mut server).await;
    mock_wallet(&mut server, json!([])).await;
    server
        .mock("POST", "/auth/v1/logout")
        .with_status(204)
        .create_async()
        .await;

    let runtime = started_runtime(&server).await;
    commands::complete_onboarding(&runtime).await.unwrap();
    let mut repl = Repl::new(runtime.clone());

    lines(&mut repl, "email ada@example.com").await;
    lines(&mut repl, "password Secret1!").await;
    lines(&mut repl, "submit").await;
    let out = lines(&mut repl, "tab settings").await;
    assert!(contains(&out, "App Version 1.0.0"));

    let out = lines(&mut repl, "signout").await;
    assert!(contains(&out, "Welcome Back"), "{out:#?}");
    assert_eq!(commands::current_decision(&runtime), NavigationDecision::ShowAuth);
    runtime.shutdown().await;
}

#[tokio::test]
async fn test_dashboard_path_while_signed_out_shows_auth() {
    let server = mockito::Server::new_async().await;
    let runtime = started_runtime(&server).await;
    commands::complete_onboarding(&runtime).await.unwrap();
    let mut repl = Repl::new(runtime.clone());

    let out = lines(&mut repl, "go /dashboard/wallet").await;
    assert!(contains(&out, "Welcome Back"));

    let status = commands::status(&runtime).await;
    assert_eq!(status.route, "/auth");
    assert_eq!(status.signed_in_as, None);
    runtime.shutdown().await;
}

#[tokio::test]
async fn test_run_loop_stops_on_quit() {
    let server = mockito::Server::new_async().await;
    let runtime = started_runtime(&server).await;
    let mut repl = Repl::new(runtime.clone());

    let input: &[u8] = b"help\nquit\nnext\n";
    let mut output = Vec::new();
    repl.run(input, &mut output).await.unwrap();

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("Onboarding: next | back | skip"));
    assert!(text.contains("[1/4]"));
    assert!(!text.contains("[2/4]"));
    runtime.shutdown().await;
}
