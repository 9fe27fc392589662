//! Test utilities and fixtures for ticketdesk tests
#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use ticketdesk::config::Config;
use ticketdesk::data::{DueDate, Ticket, TicketId, TicketQuery};
use ticketdesk::integrations::{ApiError, TicketApi};
use ticketdesk::tui::App;

/// A backend call as seen by the fake.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List(TicketQuery),
    Get(TicketId),
    Update(Ticket),
    Delete(TicketId),
}

/// In-memory backend that records every call.
#[derive(Default)]
pub struct FakeTicketApi {
    calls: Mutex<Vec<Call>>,
    tickets: Mutex<Vec<Ticket>>,
    pub fail_list: AtomicBool,
    pub fail_get: AtomicBool,
    pub fail_update: AtomicBool,
    pub fail_delete: AtomicBool,
}

impl FakeTicketApi {
    pub fn with_tickets(tickets: Vec<Ticket>) -> Arc<Self> {
        let api = Self::default();
        *api.tickets.lock().unwrap() = tickets;
        Arc::new(api)
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    /// Only the list queries, in order.
    pub fn list_calls(&self) -> Vec<TicketQuery> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::List(q) => Some(q),
                _ => None,
            })
            .collect()
    }

    pub fn fail(flag: &AtomicBool) {
        flag.store(true, Ordering::SeqCst);
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn error(method: &'static str) -> ApiError {
        ApiError::Status {
            method,
            url: "http://fake/tickets".to_string(),
            status: 500,
        }
    }
}

#[async_trait]
impl TicketApi for FakeTicketApi {
    async fn list(&self, query: &TicketQuery) -> Result<Vec<Ticket>, ApiError> {
        self.record(Call::List(query.clone()));
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(Self::error("GET"));
        }
        Ok(self.tickets.lock().unwrap().clone())
    }

    async fn get(&self, id: &TicketId) -> Result<Ticket, ApiError> {
        self.record(Call::Get(id.clone()));
        if self.fail_get.load(Ordering::SeqCst) {
            return Err(Self::error("GET"));
        }
        self.tickets
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id == *id)
            .cloned()
            .ok_or(ApiError::Status {
                method: "GET",
                url: format!("http://fake/tickets/{}", id),
                status: 404,
            })
    }

    async fn update(&self, ticket: &Ticket) -> Result<(), ApiError> {
        self.record(Call::Update(ticket.clone()));
        if self.fail_update.load(Ordering::SeqCst) {
            return Err(Self::error("PUT"));
        }
        Ok(())
    }

    async fn delete(&self, id: &TicketId) -> Result<(), ApiError> {
        self.record(Call::Delete(id.clone()));
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(Self::error("DELETE"));
        }
        Ok(())
    }
}

pub fn test_config() -> Config {
    Config::default()
}

pub fn make_ticket(id: i64, title: &str, due: Option<&str>) -> Ticket {
    Ticket {
        id: TicketId::Number(id),
        title: title.to_string(),
        description: format!("{} description", title),
        status: "open".to_string(),
        due_date: due.map(|d| DueDate::Text(d.to_string())),
        extra: serde_json::Map::new(),
    }
}

pub fn make_app(config: Config, api: &Arc<FakeTicketApi>) -> App {
    let api: Arc<dyn TicketApi> = api.clone();
    App::new(config, api)
}

/// Apply events until no request is in flight, including requests spawned
/// while applying (a successful update triggers a refetch).
pub async fn settle(app: &mut App) {
    while app.is_loading() {
        let applied = tokio::time::timeout(Duration::from_secs(5), app.next_event())
            .await
            .expect("timed out waiting for an API event");
        assert!(applied, "event channel closed");
    }
}
