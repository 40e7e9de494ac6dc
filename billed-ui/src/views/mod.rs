//! View renderer: pure functions from a payload to markup plus the event
//! bindings the markup expects.
//!
//! Views never touch the document. The router mounts the markup and hands
//! the binding list to the document adapter, which resolves DOM events
//! against it.

pub mod bills;
pub mod dashboard;
pub mod layout;
pub mod login;
pub mod new_bill;
pub mod not_found;
pub mod status;

use billed_types::Session;
use chrono::NaiveDate;

use crate::routes::RouteName;

/// Stable `data-testid` hooks shared by views, handlers and tests
pub mod hooks {
    pub const ICON_WINDOW: &str = "icon-window";
    pub const ICON_MAIL: &str = "icon-mail";
    pub const LAYOUT_DISCONNECT: &str = "layout-disconnect";
    pub const TBODY: &str = "tbody";
    pub const BTN_NEW_BILL: &str = "btn-new-bill";
    pub const ICON_EYE: &str = "icon-eye";
    pub const MODAL: &str = "modale-file";
    pub const MODAL_CLOSE: &str = "modal-close";
    pub const LOADING: &str = "loading";
    pub const ERROR_MESSAGE: &str = "error-message";
    pub const NOT_FOUND: &str = "not-found";
    pub const NOT_FOUND_HOME: &str = "not-found-home";
    pub const FORM_NEW_BILL: &str = "form-new-bill";
    pub const EXPENSE_TYPE: &str = "expense-type";
    pub const EXPENSE_NAME: &str = "expense-name";
    pub const DATEPICKER: &str = "datepicker";
    pub const AMOUNT: &str = "amount";
    pub const VAT: &str = "vat";
    pub const PCT: &str = "pct";
    pub const COMMENTARY: &str = "commentary";
    pub const FILE: &str = "file";
    pub const FILE_STATUS: &str = "file-status";
    pub const SUBMIT_ERROR: &str = "submit-error";
}

/// Attribute carrying a row's receipt URL on the preview control
pub const BILL_URL_ATTR: &str = "data-bill-url";

/// DOM events a view can bind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Change,
    Submit,
}

impl EventKind {
    pub const ALL: [EventKind; 3] = [EventKind::Click, EventKind::Change, EventKind::Submit];

    pub fn dom_name(&self) -> &'static str {
        match self {
            EventKind::Click => "click",
            EventKind::Change => "change",
            EventKind::Submit => "submit",
        }
    }
}

/// What the router does when a bound event fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Navigate(RouteName),
    Logout,
    PreviewReceipt,
    CloseOverlay,
    CreateNewBill,
    SelectFile,
    SubmitBill,
}

/// One declarative event binding: `event` on the element tagged `hook`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub hook: &'static str,
    pub event: EventKind,
    pub action: Action,
}

impl Binding {
    pub const fn new(hook: &'static str, event: EventKind, action: Action) -> Self {
        Self {
            hook,
            event,
            action,
        }
    }
}

/// Rendered screen: markup plus the bindings it needs once mounted
#[derive(Debug, Clone, Default, PartialEq)]
pub struct View {
    pub markup: String,
    pub bindings: Vec<Binding>,
}

impl View {
    pub fn new(markup: String, bindings: Vec<Binding>) -> Self {
        Self { markup, bindings }
    }

    pub fn action_for(&self, hook: &str, event: EventKind) -> Option<Action> {
        find_action(&self.bindings, hook, event)
    }
}

pub fn find_action(bindings: &[Binding], hook: &str, event: EventKind) -> Option<Action> {
    bindings
        .iter()
        .find(|binding| binding.hook == hook && binding.event == event)
        .map(|binding| binding.action)
}

/// Inputs every view may read
#[derive(Debug, Clone, PartialEq)]
pub struct RenderContext {
    pub session: Option<Session>,
    pub today: NaiveDate,
}

impl RenderContext {
    pub fn is_admin(&self) -> bool {
        self.session.as_ref().is_some_and(Session::is_admin)
    }
}

/// Escape HTML special characters
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
