//! Scripted account service for flow tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::oneshot;

use storefront::account::{
    AccountFault, AccountResponse, AccountService, ResetPassword, UpdateCustomer,
};

/// A captured service call for assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountCall {
    Update { new_password: String },
    Reset { reset_url: String, password: String },
}

/// Answers calls from a queue of scripted results.
///
/// An empty queue answers with a successful response. When gated, the
/// first call waits until the returned sender fires.
#[derive(Default)]
pub struct MockAccountService {
    calls: Mutex<Vec<AccountCall>>,
    responses: Mutex<VecDeque<Result<AccountResponse, AccountFault>>>,
    gate: Mutex<Option<oneshot::Receiver<()>>>,
}

impl MockAccountService {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_responses(
        responses: Vec<Result<AccountResponse, AccountFault>>,
    ) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            ..Self::default()
        })
    }

    /// Service whose first call blocks until the sender is used.
    pub fn gated(
        responses: Vec<Result<AccountResponse, AccountFault>>,
    ) -> (Arc<Self>, oneshot::Sender<()>) {
        let (tx, rx) = oneshot::channel();
        let service = Arc::new(Self {
            responses: Mutex::new(responses.into()),
            gate: Mutex::new(Some(rx)),
            ..Self::default()
        });
        (service, tx)
    }

    pub fn calls(&self) -> Vec<AccountCall> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Wait until at least `count` calls arrived.
    pub async fn wait_for_calls(&self, count: usize) {
        tokio::time::timeout(Duration::from_secs(5), async {
            while self.call_count() < count {
                tokio::task::yield_now().await;
            }
        })
        .await
        .expect("account service was not called in time");
    }

    async fn answer(&self, call: AccountCall) -> Result<AccountResponse, AccountFault> {
        self.calls.lock().push(call);

        let gate = self.gate.lock().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }

        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(AccountResponse::ok()))
    }
}

#[async_trait]
impl AccountService for MockAccountService {
    async fn update_customer(&self, input: UpdateCustomer) -> Result<AccountResponse, AccountFault> {
        self.answer(AccountCall::Update {
            new_password: input.new_password,
        })
        .await
    }

    async fn reset_password(&self, input: ResetPassword) -> Result<AccountResponse, AccountFault> {
        self.answer(AccountCall::Reset {
            reset_url: input.reset_url,
            password: input.password,
        })
        .await
    }
}
