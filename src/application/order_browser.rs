use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::errors::DomainError;
use crate::domain::order::{CurrentPage, Order};
use crate::domain::ports::OrderRepository;

use super::formatter::format_order;
use super::paginator::Paginator;
use super::transcript::TranscriptLog;

/// What the order list renders: the page plus at most one error notice.
#[derive(Debug, Clone)]
pub struct PageView {
    pub page: CurrentPage,
    pub notice: Option<String>,
}

#[derive(Debug, Clone)]
pub struct OrderDetail {
    pub order_id: u32,
    pub text: String,
    pub notice: Option<String>,
}

struct BrowserState {
    paginator: Paginator,
    page: CurrentPage,
}

/// Order screen. The state mutex is held across the fetch so only one query
/// runs at a time.
pub struct OrderBrowser {
    repo: Arc<dyn OrderRepository>,
    transcript: TranscriptLog,
    state: Mutex<BrowserState>,
}

impl OrderBrowser {
    pub fn new(repo: Arc<dyn OrderRepository>, transcript: TranscriptLog) -> Self {
        let paginator = Paginator::new();
        let page = CurrentPage::empty(paginator.window());
        Self {
            repo,
            transcript,
            state: Mutex::new(BrowserState { paginator, page }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, BrowserState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn refresh(&self) -> PageView {
        let mut state = self.lock();
        self.load(&mut state)
    }

    pub fn next_page(&self) -> PageView {
        let mut state = self.lock();
        state.paginator.next();
        self.load(&mut state)
    }

    pub fn previous_page(&self) -> PageView {
        let mut state = self.lock();
        state.paginator.previous();
        self.load(&mut state)
    }

    pub fn set_limit(&self, limit: i64) -> Result<PageView, DomainError> {
        let mut state = self.lock();
        state.paginator.set_limit(limit)?;
        Ok(self.load(&mut state))
    }

    fn load(&self, state: &mut BrowserState) -> PageView {
        let window = state.paginator.window();
        let (page, notice) = match self.repo.fetch_orders(window) {
            Ok(orders) => (CurrentPage { window, orders }, None),
            Err(e) => {
                log::error!("Failed to fetch orders for {:?}: {}", window, e);
                (
                    CurrentPage::empty(window),
                    Some(format!(
                        "No se pudo conectar a la base de datos:\n{}",
                        notice_message(&e)
                    )),
                )
            }
        };
        state.page = page.clone();
        PageView { page, notice }
    }

    /// Render an order from the page currently on screen, fetching its items.
    pub fn order_detail(&self, order_id: u32) -> Result<OrderDetail, DomainError> {
        let order = self.current_order(order_id)?;

        let (items, notice) = match self.repo.fetch_line_items(order.id) {
            Ok(items) => (items, None),
            Err(e) => {
                log::error!("Failed to fetch line items for order {}: {}", order.id, e);
                (
                    Vec::new(),
                    Some(format!(
                        "No se pudo obtener los productos:\n{}",
                        notice_message(&e)
                    )),
                )
            }
        };

        Ok(OrderDetail {
            order_id: order.id,
            text: format_order(&order, &items),
            notice,
        })
    }

    /// Append the order's block to the transcript. Nothing is written when
    /// its line items cannot be fetched.
    pub fn transcribe(&self, order_id: u32) -> Result<OrderDetail, DomainError> {
        let order = self.current_order(order_id)?;
        let items = self.repo.fetch_line_items(order.id).map_err(|e| {
            log::error!("Not transcribing order {}: {}", order.id, e);
            e
        })?;

        let text = format_order(&order, &items);
        self.transcript.append(&text)?;
        Ok(OrderDetail {
            order_id: order.id,
            text,
            notice: None,
        })
    }

    fn current_order(&self, order_id: u32) -> Result<Order, DomainError> {
        self.lock()
            .page
            .find(order_id)
            .cloned()
            .ok_or(DomainError::NotFound)
    }
}

fn notice_message(e: &DomainError) -> String {
    match e {
        DomainError::DataSource(msg) => msg.clone(),
        other => other.to_string(),
    }
}
