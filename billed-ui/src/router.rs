//! Navigation controller.
//!
//! The router owns the mount point and the active container. Every
//! navigation bumps a generation counter and hands out a [`ViewToken`];
//! asynchronous continuations check their token before touching the
//! document so a slow response never overwrites a newer view.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use dioxus_logger::tracing::{debug, info, warn};
use futures_util::future::{FutureExt, LocalBoxFuture};

use crate::clock::Clock;
use crate::config::AppConfig;
use crate::containers::{BillsContainer, FormSnapshot, NewBillContainer, SubmissionState};
use crate::document::DocumentMount;
use crate::routes::{RouteName, RouteTable};
use crate::session::{read_session, SessionStore};
use crate::store::{BillStore, UploadFile};
use crate::views::not_found::not_found_ui;
use crate::views::RenderContext;

/// Work a navigation or an event schedules after its synchronous part.
/// The host decides how to run it (`spawn_local` in the browser).
pub type Task = LocalBoxFuture<'static, ()>;

/// Identifies the view a continuation was started for
#[derive(Debug, Clone)]
pub struct ViewToken {
    generation: u64,
    latest: Rc<Cell<u64>>,
}

impl ViewToken {
    fn issue(latest: &Rc<Cell<u64>>) -> Self {
        let generation = latest.get() + 1;
        latest.set(generation);
        Self {
            generation,
            latest: Rc::clone(latest),
        }
    }

    fn current(latest: &Rc<Cell<u64>>) -> Self {
        Self {
            generation: latest.get(),
            latest: Rc::clone(latest),
        }
    }

    /// A token no router will ever supersede
    pub fn detached() -> Self {
        Self::issue(&Rc::new(Cell::new(0)))
    }

    #[cfg(test)]
    pub(crate) fn pair() -> (Self, Rc<Cell<u64>>) {
        let latest = Rc::new(Cell::new(0));
        (Self::issue(&latest), latest)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_current(&self) -> bool {
        self.latest.get() == self.generation
    }
}

/// Result of a navigation: what got mounted and what is still pending
pub struct Navigation {
    pub route: Option<RouteName>,
    pub token: ViewToken,
    pub task: Option<Task>,
}

impl std::fmt::Debug for Navigation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Navigation")
            .field("route", &self.route)
            .field("token", &self.token)
            .field("pending", &self.task.is_some())
            .finish()
    }
}

/// User input, already decoded from the DOM
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    Navigate(String),
    Logout,
    PreviewReceipt { file_url: Option<String> },
    CloseOverlay,
    CreateNewBill,
    FileSelected(UploadFile),
    SubmitBill(FormSnapshot),
}

enum ActiveView {
    None,
    Fallback,
    Static(RouteName),
    Bills(BillsContainer),
    NewBill(NewBillContainer),
}

impl ActiveView {
    fn label(&self) -> &'static str {
        match self {
            ActiveView::None => "none",
            ActiveView::Fallback => "not-found",
            ActiveView::Static(route) => route.as_str(),
            ActiveView::Bills(_) => "Bills",
            ActiveView::NewBill(_) => "NewBill",
        }
    }
}

struct RouterInner {
    config: AppConfig,
    routes: RouteTable,
    store: Rc<dyn BillStore>,
    document: Rc<dyn DocumentMount>,
    session: Rc<dyn SessionStore>,
    clock: Rc<dyn Clock>,
    generation: Rc<Cell<u64>>,
    installed: Cell<bool>,
    current: Cell<Option<RouteName>>,
    active: RefCell<ActiveView>,
}

/// Cheap to clone; clones share the same state
#[derive(Clone)]
pub struct Router {
    inner: Rc<RouterInner>,
}

impl Router {
    pub fn new(
        config: AppConfig,
        store: Rc<dyn BillStore>,
        document: Rc<dyn DocumentMount>,
        session: Rc<dyn SessionStore>,
        clock: Rc<dyn Clock>,
    ) -> Self {
        Self {
            inner: Rc::new(RouterInner {
                config,
                routes: RouteTable::new(),
                store,
                document,
                session,
                clock,
                generation: Rc::new(Cell::new(0)),
                installed: Cell::new(false),
                current: Cell::new(None),
                active: RefCell::new(ActiveView::None),
            }),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    /// Install the document listeners. Returns `false` if they already were.
    pub fn initialize(&self) -> bool {
        if self.inner.installed.replace(true) {
            debug!("Router already initialized");
            return false;
        }
        self.inner.document.install_listeners(self.clone());
        info!("Router initialized");
        true
    }

    pub fn current_route(&self) -> Option<RouteName> {
        self.inner.current.get()
    }

    /// Navigate to a path or route name and record it in the history
    pub fn navigate_to(&self, target: &str) -> Navigation {
        self.navigate(target, true)
    }

    /// Mount the view for a location the browser already shows
    pub fn follow_location(&self, location: &str) -> Navigation {
        self.navigate(location, false)
    }

    pub fn go(&self, route: RouteName) -> Navigation {
        self.navigate_to(route.path())
    }

    /// Token of the view mounted right now. Capture it before awaiting
    /// browser work and hand it to [`Router::dispatch_if_current`].
    pub fn view_token(&self) -> ViewToken {
        ViewToken::current(&self.inner.generation)
    }

    pub fn render_context(&self) -> RenderContext {
        RenderContext {
            session: read_session(self.inner.session.as_ref(), &self.inner.config.session_key),
            today: self.inner.clock.today(),
        }
    }

    fn navigate(&self, target: &str, push: bool) -> Navigation {
        let inner = &self.inner;
        let token = ViewToken::issue(&inner.generation);
        let ctx = self.render_context();

        let Some(route) = inner.routes.resolve(target).copied() else {
            warn!("No route for '{}', mounting fallback", target);
            inner.document.mount(&not_found_ui(&ctx, target));
            inner.current.set(None);
            *inner.active.borrow_mut() = ActiveView::Fallback;
            return Navigation {
                route: None,
                token,
                task: None,
            };
        };

        debug!("Navigating to {} (generation {})", route.path, token.generation());
        inner.document.mount(&(route.render)(&ctx));
        if push {
            inner.document.push_location(route.path);
        }
        inner.current.set(Some(route.name));

        let (active, task) = match route.name {
            RouteName::Bills => {
                let container = BillsContainer::new(
                    token.clone(),
                    ctx,
                    Rc::clone(&inner.store),
                    Rc::clone(&inner.document),
                );
                let task = container.activate();
                (ActiveView::Bills(container), Some(task))
            }
            RouteName::NewBill => {
                let container = NewBillContainer::new(
                    token.clone(),
                    ctx.session,
                    Rc::clone(&inner.store),
                    Rc::clone(&inner.document),
                );
                (ActiveView::NewBill(container), None)
            }
            name @ (RouteName::Login | RouteName::Dashboard) => (ActiveView::Static(name), None),
        };
        *inner.active.borrow_mut() = active;

        Navigation {
            route: Some(route.name),
            token,
            task,
        }
    }

    /// Like [`Router::dispatch`], for events decoded after an await.
    /// Dropped if a navigation happened since `token` was taken.
    pub fn dispatch_if_current(&self, token: &ViewToken, event: UiEvent) -> Option<Task> {
        if !token.is_current() {
            debug!(
                "Dropping event for superseded view (generation {})",
                token.generation()
            );
            return None;
        }
        self.dispatch(event)
    }

    /// Route a user event to the active container.
    ///
    /// Events aimed at a screen that is no longer mounted are dropped.
    pub fn dispatch(&self, event: UiEvent) -> Option<Task> {
        let inner = &self.inner;
        match event {
            UiEvent::Navigate(target) => self.navigate_to(&target).task,
            UiEvent::Logout => {
                inner.session.remove_item(&inner.config.session_key);
                info!("Session cleared");
                self.go(RouteName::Login).task
            }
            UiEvent::CloseOverlay => {
                inner.document.hide_overlay();
                None
            }
            UiEvent::PreviewReceipt { file_url } => {
                match &*inner.active.borrow() {
                    ActiveView::Bills(container) => container.preview_receipt(file_url.as_deref()),
                    other => debug!("Receipt preview ignored on {} view", other.label()),
                }
                None
            }
            UiEvent::CreateNewBill => {
                let next = match &*inner.active.borrow() {
                    ActiveView::Bills(container) => Some(container.create_new_bill()),
                    other => {
                        debug!("New bill trigger ignored on {} view", other.label());
                        None
                    }
                };
                next.and_then(|route| self.go(route).task)
            }
            UiEvent::FileSelected(file) => {
                match &*inner.active.borrow() {
                    ActiveView::NewBill(container) => {
                        container.handle_file_change(file);
                    }
                    other => debug!("File selection ignored on {} view", other.label()),
                }
                None
            }
            UiEvent::SubmitBill(form) => {
                let (pending, token) = match &*inner.active.borrow() {
                    ActiveView::NewBill(container) => {
                        (container.handle_submit(form)?, container.token().clone())
                    }
                    other => {
                        debug!("Submit ignored on {} view", other.label());
                        return None;
                    }
                };

                let router = self.clone();
                Some(
                    async move {
                        if pending.await != SubmissionState::Submitted || !token.is_current() {
                            return;
                        }
                        if let Some(task) = router.go(RouteName::Bills).task {
                            task.await;
                        }
                    }
                    .boxed_local(),
                )
            }
        }
    }
}
