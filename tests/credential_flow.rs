mod common;

use std::sync::Arc;

use common::{AccountCall, MemoryRouter, MockAccountService};
use storefront::account::{AccountFault, AccountResponse, FormError};
use storefront::auth::{AuthStatus, GuardDecision};
use storefront::config::RoutesConfig;
use storefront::router::{NavigationIntent, RouteQuery, Router};
use storefront::ui::credential::{CredentialFlow, FlowMode, FlowStatus, SubmitOutcome};

fn change_flow(service: Arc<MockAccountService>) -> CredentialFlow {
    CredentialFlow::new(FlowMode::Change, &RoutesConfig::default(), service)
}

fn fill(flow: &CredentialFlow, password: &str, confirm: &str) {
    flow.set_password(password);
    flow.set_confirm_password(confirm);
}

#[tokio::test]
async fn mismatch_fails_without_calling_service() {
    let service = MockAccountService::new();
    let flow = change_flow(service.clone());
    fill(&flow, "a", "b");

    let outcome = flow.submit().await;

    assert_eq!(
        outcome,
        SubmitOutcome::Failed(vec![FormError::new("Passwords don't match")])
    );
    assert_eq!(service.call_count(), 0);
    assert_eq!(
        flow.state().status,
        FlowStatus::Failed {
            errors: vec![FormError::new("Passwords don't match")]
        }
    );
}

#[tokio::test]
async fn empty_error_list_succeeds_and_navigates_to_login() {
    let service = MockAccountService::with_responses(vec![Ok(AccountResponse::with_errors(vec![]))]);
    let flow = change_flow(service.clone());
    fill(&flow, "correct horse", "correct horse");

    let outcome = flow.submit().await;

    assert_eq!(
        outcome,
        SubmitOutcome::Succeeded(NavigationIntent::push("/account/login"))
    );
    assert_eq!(flow.state().status, FlowStatus::Succeeded);
    assert_eq!(
        service.calls(),
        vec![AccountCall::Update {
            new_password: "correct horse".into()
        }]
    );
}

#[tokio::test]
async fn success_intent_drives_router() {
    let flow = change_flow(MockAccountService::new());
    let mut router = MemoryRouter::new("/account/password", "");
    fill(&flow, "pw", "pw");

    if let SubmitOutcome::Succeeded(intent) = flow.submit().await {
        router.push(intent);
    }

    assert_eq!(router.pathname(), "/account/login");
}

#[tokio::test]
async fn fault_fails_and_stays_resubmittable() {
    let service = MockAccountService::with_responses(vec![
        Err(AccountFault::Request("Network request failed".into())),
        Ok(AccountResponse::ok()),
    ]);
    let flow = change_flow(service.clone());
    fill(&flow, "pw", "pw");

    let first = flow.submit().await;
    assert_eq!(
        first,
        SubmitOutcome::Failed(vec![FormError::new("Network request failed")])
    );
    assert!(flow.can_submit());
    assert!(flow.state().is_invalid());
    assert!(!flow.state().fields_disabled());

    let second = flow.submit().await;
    assert!(matches!(second, SubmitOutcome::Succeeded(_)));
    assert_eq!(service.call_count(), 2);
}

#[tokio::test]
async fn application_errors_are_shown_in_order() {
    let reported = vec![
        FormError::new("Password is too short"),
        FormError::new("Password was used recently"),
    ];
    let service = MockAccountService::with_responses(vec![Ok(AccountResponse::with_errors(
        reported.clone(),
    ))]);
    let flow = change_flow(service);
    fill(&flow, "pw", "pw");

    assert_eq!(flow.submit().await, SubmitOutcome::Failed(reported.clone()));
    assert_eq!(flow.state().errors(), reported.as_slice());
}

#[tokio::test]
async fn reset_mode_sends_token_and_password() {
    let service = MockAccountService::new();
    let query = RouteQuery::parse("resetUrl=https%3A%2F%2Fshop.example%2Freset%2F42");
    let flow = CredentialFlow::from_query(&query, &RoutesConfig::default(), service.clone());
    fill(&flow, "new-pass", "new-pass");

    assert_eq!(flow.heading(), "Reset password");
    assert!(matches!(flow.submit().await, SubmitOutcome::Succeeded(_)));
    assert_eq!(
        service.calls(),
        vec![AccountCall::Reset {
            reset_url: "https://shop.example/reset/42".into(),
            password: "new-pass".into(),
        }]
    );
}

#[tokio::test]
async fn guard_follows_mode() {
    let routes = RoutesConfig::default();
    let change = CredentialFlow::from_query(&RouteQuery::new(), &routes, MockAccountService::new());
    assert_eq!(change.guard().evaluate(AuthStatus::Authenticated), GuardDecision::Render);
    assert_eq!(
        change.guard().evaluate(AuthStatus::Unauthenticated),
        GuardDecision::Redirect("/account/login".into())
    );

    let reset = CredentialFlow::from_query(
        &RouteQuery::parse("resetUrl=tok"),
        &routes,
        MockAccountService::new(),
    );
    assert_eq!(reset.guard().evaluate(AuthStatus::Unauthenticated), GuardDecision::Render);
    assert_eq!(
        reset.guard().evaluate(AuthStatus::Authenticated),
        GuardDecision::Redirect("/account".into())
    );
}

#[tokio::test]
async fn second_submit_while_in_flight_is_ineligible() {
    let (service, release) = MockAccountService::gated(vec![]);
    let flow = change_flow(service.clone());
    fill(&flow, "pw", "pw");

    let pending = tokio::spawn({
        let flow = flow.clone();
        async move { flow.submit().await }
    });
    service.wait_for_calls(1).await;

    assert!(flow.state().fields_disabled());
    assert!(!flow.can_submit());
    assert_eq!(flow.submit().await, SubmitOutcome::Ineligible);

    release.send(()).expect("submit still pending");
    assert!(matches!(pending.await.unwrap(), SubmitOutcome::Succeeded(_)));
    assert_eq!(service.call_count(), 1);
}

#[tokio::test]
async fn typing_is_ignored_while_in_flight() {
    let (service, release) = MockAccountService::gated(vec![]);
    let flow = change_flow(service.clone());
    fill(&flow, "pw", "pw");

    let pending = tokio::spawn({
        let flow = flow.clone();
        async move { flow.submit().await }
    });
    service.wait_for_calls(1).await;

    flow.set_password("changed");
    assert_eq!(flow.state().form.password, "pw");

    release.send(()).expect("submit still pending");
    pending.await.unwrap();
}

#[tokio::test]
async fn teardown_before_response_discards_result() {
    let (service, release) = MockAccountService::gated(vec![Ok(AccountResponse::ok())]);
    let flow = change_flow(service.clone());
    fill(&flow, "pw", "pw");

    let pending = tokio::spawn({
        let flow = flow.clone();
        async move { flow.submit().await }
    });
    service.wait_for_calls(1).await;

    flow.teardown();
    release.send(()).expect("submit still pending");

    assert_eq!(pending.await.unwrap(), SubmitOutcome::Discarded);
    assert_eq!(flow.state().status, FlowStatus::Submitting);
}

#[tokio::test]
async fn teardown_also_discards_failures() {
    let (service, release) =
        MockAccountService::gated(vec![Err(AccountFault::Unavailable("503".into()))]);
    let flow = change_flow(service.clone());
    fill(&flow, "pw", "pw");

    let pending = tokio::spawn({
        let flow = flow.clone();
        async move { flow.submit().await }
    });
    service.wait_for_calls(1).await;

    flow.teardown();
    release.send(()).expect("submit still pending");

    assert_eq!(pending.await.unwrap(), SubmitOutcome::Discarded);
    assert!(flow.state().errors().is_empty());
}
