use std::cell::RefCell;
use std::cmp::Reverse;
use std::rc::Rc;

use billed_types::BillRecord;
use dioxus_logger::tracing::{debug, error, info};
use futures_util::future::{FutureExt, LocalBoxFuture};

use crate::document::DocumentMount;
use crate::error::StoreError;
use crate::router::ViewToken;
use crate::routes::RouteName;
use crate::store::BillStore;
use crate::views::bills::{bills_ui, receipt_modal, BillRow};
use crate::views::status::error_page;
use crate::views::RenderContext;

/// Lifecycle of the bill list
#[derive(Debug, Clone, PartialEq)]
pub enum ListState {
    Idle,
    Loading,
    Error(StoreError),
    Ready(Vec<BillRow>),
}

/// Most recent first. Stable, so equal dates keep their collection order;
/// bills whose date does not parse go last.
pub fn sort_antichrono(bills: &mut [BillRecord]) {
    bills.sort_by_key(|bill| Reverse(bill.parsed_date()));
}

pub struct BillsContainer {
    token: ViewToken,
    ctx: RenderContext,
    store: Rc<dyn BillStore>,
    document: Rc<dyn DocumentMount>,
    state: Rc<RefCell<ListState>>,
}

impl BillsContainer {
    pub fn new(
        token: ViewToken,
        ctx: RenderContext,
        store: Rc<dyn BillStore>,
        document: Rc<dyn DocumentMount>,
    ) -> Self {
        Self {
            token,
            ctx,
            store,
            document,
            state: Rc::new(RefCell::new(ListState::Idle)),
        }
    }

    pub fn state(&self) -> ListState {
        self.state.borrow().clone()
    }

    /// Fetch the bills and mount the list, or the error view.
    ///
    /// The returned task mounts nothing if another navigation happened
    /// while the list was in flight.
    pub fn activate(&self) -> LocalBoxFuture<'static, ()> {
        *self.state.borrow_mut() = ListState::Loading;

        let token = self.token.clone();
        let ctx = self.ctx.clone();
        let store = Rc::clone(&self.store);
        let document = Rc::clone(&self.document);
        let state = Rc::clone(&self.state);

        async move {
            let result = store.list().await;

            if !token.is_current() {
                debug!(
                    "Discarding bill list for superseded view (generation {})",
                    token.generation()
                );
                return;
            }

            match result {
                Ok(mut bills) => {
                    sort_antichrono(&mut bills);
                    let rows: Vec<BillRow> = bills.iter().map(BillRow::from).collect();
                    info!("Loaded {} bills", rows.len());
                    document.mount(&bills_ui(&ctx, &rows));
                    *state.borrow_mut() = ListState::Ready(rows);
                }
                Err(e) => {
                    error!("Failed to fetch bills: {}", e);
                    document.mount(&error_page(&ctx, Some(RouteName::Bills), &e));
                    *state.borrow_mut() = ListState::Error(e);
                }
            }
        }
        .boxed_local()
    }

    /// Open the receipt overlay for a row's file reference
    pub fn preview_receipt(&self, file_url: Option<&str>) {
        self.document.show_overlay(&receipt_modal(file_url));
    }

    /// Route the "new bill" control leads to
    pub fn create_new_bill(&self) -> RouteName {
        RouteName::NewBill
    }
}
