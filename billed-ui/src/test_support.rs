//! In-memory collaborators shared by the unit tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;
use billed_types::{BillRecord, BillStatus, CreatedBill, NewBill, Session, UserType};
use chrono::NaiveDate;

use crate::clock::FixedClock;
use crate::config::AppConfig;
use crate::containers::FormSnapshot;
use crate::document::DocumentMount;
use crate::error::StoreError;
use crate::router::Router;
use crate::session::{MemorySessionStore, SessionStore};
use crate::store::{BillStore, UploadFile};
use crate::views::{Binding, RenderContext, View};

pub(crate) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2022, 4, 1).unwrap()
}

pub(crate) fn employee_session() -> Session {
    Session {
        user_type: UserType::Employee,
        email: "employee@test.tld".to_string(),
    }
}

pub(crate) fn employee_context() -> RenderContext {
    RenderContext {
        session: Some(employee_session()),
        today: today(),
    }
}

pub(crate) fn admin_context() -> RenderContext {
    RenderContext {
        session: Some(Session {
            user_type: UserType::Admin,
            email: "admin@test.tld".to_string(),
        }),
        today: today(),
    }
}

pub(crate) fn bill(date: &str, name: &str, file_url: Option<&str>) -> BillRecord {
    BillRecord {
        id: Some(format!("id-{name}")),
        email: "employee@test.tld".to_string(),
        expense_type: "Transports".to_string(),
        name: name.to_string(),
        amount: 100.0,
        date: date.to_string(),
        vat: "20".to_string(),
        pct: 20.0,
        commentary: String::new(),
        file_url: file_url.map(str::to_string),
        file_name: "receipt.jpg".to_string(),
        status: BillStatus::Pending,
    }
}

pub(crate) fn png(name: &str) -> UploadFile {
    UploadFile::new(name, "image/png", b"img".to_vec())
}

pub(crate) fn filled_form() -> FormSnapshot {
    FormSnapshot {
        expense_type: "Transports".to_string(),
        name: "Vol Toulouse Paris".to_string(),
        date: "2022-01-25".to_string(),
        amount: "120".to_string(),
        vat: "70".to_string(),
        pct: "20".to_string(),
        commentary: "Diner professionnel".to_string(),
    }
}

/// Records everything the router and containers do to the page
#[derive(Default)]
pub(crate) struct MemoryDocument {
    markup: RefCell<String>,
    bindings: RefCell<Vec<Binding>>,
    mounts: Cell<usize>,
    overlay: RefCell<Option<String>>,
    texts: RefCell<HashMap<String, String>>,
    cleared: RefCell<Vec<String>>,
    history: RefCell<Vec<String>>,
    listener_installs: Cell<usize>,
}

impl MemoryDocument {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn markup(&self) -> String {
        self.markup.borrow().clone()
    }

    pub(crate) fn bindings(&self) -> Vec<Binding> {
        self.bindings.borrow().clone()
    }

    pub(crate) fn mount_count(&self) -> usize {
        self.mounts.get()
    }

    pub(crate) fn overlay(&self) -> Option<String> {
        self.overlay.borrow().clone()
    }

    pub(crate) fn text(&self, hook: &str) -> Option<String> {
        self.texts.borrow().get(hook).cloned()
    }

    pub(crate) fn cleared_inputs(&self) -> Vec<String> {
        self.cleared.borrow().clone()
    }

    pub(crate) fn history(&self) -> Vec<String> {
        self.history.borrow().clone()
    }

    pub(crate) fn listener_installs(&self) -> usize {
        self.listener_installs.get()
    }
}

impl DocumentMount for MemoryDocument {
    fn mount(&self, view: &View) {
        *self.markup.borrow_mut() = view.markup.clone();
        *self.bindings.borrow_mut() = view.bindings.clone();
        *self.overlay.borrow_mut() = None;
        self.texts.borrow_mut().clear();
        self.mounts.set(self.mounts.get() + 1);
    }

    fn show_overlay(&self, markup: &str) {
        *self.overlay.borrow_mut() = Some(markup.to_string());
    }

    fn hide_overlay(&self) {
        *self.overlay.borrow_mut() = None;
    }

    fn set_text(&self, hook: &str, text: &str) {
        self.texts
            .borrow_mut()
            .insert(hook.to_string(), text.to_string());
    }

    fn clear_input(&self, hook: &str) {
        self.cleared.borrow_mut().push(hook.to_string());
    }

    fn push_location(&self, path: &str) {
        self.history.borrow_mut().push(path.to_string());
    }

    fn install_listeners(&self, _router: Router) {
        self.listener_installs.set(self.listener_installs.get() + 1);
    }
}

/// Scriptable bill store that records every call
#[derive(Default)]
pub(crate) struct MockStore {
    bills: RefCell<Vec<BillRecord>>,
    list_error: RefCell<Option<StoreError>>,
    create_error: RefCell<Option<StoreError>>,
    list_calls: Cell<usize>,
    create_calls: RefCell<Vec<(NewBill, UploadFile)>>,
}

impl MockStore {
    pub(crate) fn with_bills(bills: Vec<BillRecord>) -> Self {
        let store = Self::default();
        store.set_bills(bills);
        store
    }

    pub(crate) fn failing_list(error: StoreError) -> Self {
        let store = Self::default();
        store.fail_list(error);
        store
    }

    pub(crate) fn failing_create(error: StoreError) -> Self {
        let store = Self::default();
        *store.create_error.borrow_mut() = Some(error);
        store
    }

    pub(crate) fn set_bills(&self, bills: Vec<BillRecord>) {
        *self.bills.borrow_mut() = bills;
    }

    pub(crate) fn fail_list(&self, error: StoreError) {
        *self.list_error.borrow_mut() = Some(error);
    }

    pub(crate) fn succeed_create(&self) {
        *self.create_error.borrow_mut() = None;
    }

    pub(crate) fn list_calls(&self) -> usize {
        self.list_calls.get()
    }

    pub(crate) fn create_calls(&self) -> Vec<(NewBill, UploadFile)> {
        self.create_calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl BillStore for MockStore {
    async fn list(&self) -> Result<Vec<BillRecord>, StoreError> {
        self.list_calls.set(self.list_calls.get() + 1);
        if let Some(error) = self.list_error.borrow().clone() {
            return Err(error);
        }
        Ok(self.bills.borrow().clone())
    }

    async fn create(&self, bill: &NewBill, file: &UploadFile) -> Result<CreatedBill, StoreError> {
        self.create_calls
            .borrow_mut()
            .push((bill.clone(), file.clone()));
        if let Some(error) = self.create_error.borrow().clone() {
            return Err(error);
        }
        Ok(CreatedBill {
            id: format!("bill-{}", self.create_calls.borrow().len()),
            file_url: format!("https://localhost:3456/images/{}", file.name),
        })
    }
}

/// A router wired to in-memory collaborators
pub(crate) struct Harness {
    pub(crate) router: Router,
    pub(crate) document: Rc<MemoryDocument>,
    pub(crate) store: Rc<MockStore>,
    pub(crate) session: Rc<MemorySessionStore>,
}

impl Harness {
    pub(crate) fn employee() -> Self {
        Self::with_session(Some(r#"{"type":"Employee","email":"employee@test.tld"}"#))
    }

    pub(crate) fn with_session(raw: Option<&str>) -> Self {
        let config = AppConfig::default();
        let document = Rc::new(MemoryDocument::new());
        let store = Rc::new(MockStore::default());
        let session = Rc::new(MemorySessionStore::new());
        if let Some(raw) = raw {
            session.set_item(&config.session_key, raw);
        }

        let router = Router::new(
            config,
            store.clone(),
            document.clone(),
            session.clone(),
            Rc::new(FixedClock(today())),
        );

        Self {
            router,
            document,
            store,
            session,
        }
    }
}
