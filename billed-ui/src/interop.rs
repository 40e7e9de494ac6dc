//! Browser adapters: the DOM mount point, `localStorage` and boot.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{
    window, Element, Event, HtmlElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, Storage,
};

use crate::api::HttpBillStore;
use crate::clock::BrowserClock;
use crate::config::AppConfig;
use crate::containers::FormSnapshot;
use crate::document::DocumentMount;
use crate::router::{Router, Task, UiEvent};
use crate::session::{MemorySessionStore, SessionStore};
use crate::store::UploadFile;
use crate::views::{find_action, hooks, Action, Binding, EventKind, View, BILL_URL_ATTR};

fn hook_selector(hook: &str) -> String {
    format!("[data-testid=\"{hook}\"]")
}

fn spawn(task: Option<Task>) {
    if let Some(task) = task {
        spawn_local(task);
    }
}

/// The `#root` element, with the binding table of the mounted view
pub struct WebDocument {
    root: Element,
    bindings: Rc<RefCell<Vec<Binding>>>,
}

impl WebDocument {
    pub fn new(mount_id: &str) -> Result<Self, String> {
        let document = window()
            .and_then(|w| w.document())
            .ok_or("no document on window")?;
        let root = document
            .get_element_by_id(mount_id)
            .ok_or_else(|| format!("no element with id '{mount_id}'"))?;
        Ok(Self {
            root,
            bindings: Rc::new(RefCell::new(Vec::new())),
        })
    }

    fn find(&self, hook: &str) -> Option<Element> {
        self.root.query_selector(&hook_selector(hook)).ok().flatten()
    }

    fn listen(&self, kind: EventKind, router: Router) -> Result<(), String> {
        let bindings = Rc::clone(&self.bindings);
        let closure = Closure::wrap(Box::new(move |event: Event| {
            // Dispatch may remount, which replaces the table
            let current = bindings.borrow().clone();
            handle_event(&router, &current, kind, &event);
        }) as Box<dyn FnMut(Event)>);

        self.root
            .add_event_listener_with_callback(kind.dom_name(), closure.as_ref().unchecked_ref())
            .map_err(|e| format!("failed to add {} listener: {:?}", kind.dom_name(), e))?;

        // Lives as long as the page
        closure.forget();
        Ok(())
    }
}

impl DocumentMount for WebDocument {
    fn mount(&self, view: &View) {
        self.root.set_inner_html(&view.markup);
        *self.bindings.borrow_mut() = view.bindings.clone();
    }

    fn show_overlay(&self, markup: &str) {
        let Some(modal) = self.find(hooks::MODAL) else {
            log::warn!("No receipt modal in the mounted view");
            return;
        };
        modal.set_inner_html(markup);
        if let Err(e) = modal.class_list().add_1("show") {
            log::error!("Failed to show modal: {:?}", e);
        }
        if let Some(modal) = modal.dyn_ref::<HtmlElement>() {
            let _ = modal.style().set_property("display", "block");
        }
    }

    fn hide_overlay(&self) {
        let Some(modal) = self.find(hooks::MODAL) else {
            return;
        };
        let _ = modal.class_list().remove_1("show");
        if let Some(modal) = modal.dyn_ref::<HtmlElement>() {
            let _ = modal.style().set_property("display", "none");
        }
        modal.set_inner_html("");
    }

    fn set_text(&self, hook: &str, text: &str) {
        if let Some(element) = self.find(hook) {
            element.set_text_content(Some(text));
        }
    }

    fn clear_input(&self, hook: &str) {
        if let Some(input) = self
            .find(hook)
            .and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
        {
            input.set_value("");
        }
    }

    fn push_location(&self, path: &str) {
        let Some(window) = window() else {
            return;
        };
        match window.history() {
            Ok(history) => {
                if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(path)) {
                    log::error!("Failed to push '{}': {:?}", path, e);
                }
            }
            Err(e) => log::error!("No history on window: {:?}", e),
        }
    }

    fn install_listeners(&self, router: Router) {
        for kind in EventKind::ALL {
            if let Err(e) = self.listen(kind, router.clone()) {
                log::error!("{}", e);
            }
        }
        if let Err(e) = listen_hash_changes(router.clone()) {
            log::error!("{}", e);
        }
        if let Err(e) = expose_on_navigate(router) {
            log::error!("{}", e);
        }
    }
}

fn handle_event(router: &Router, bindings: &[Binding], kind: EventKind, event: &Event) {
    let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return;
    };
    let Ok(Some(hooked)) = target.closest("[data-testid]") else {
        return;
    };
    let Some(hook) = hooked.get_attribute("data-testid") else {
        return;
    };
    let Some(action) = find_action(bindings, &hook, kind) else {
        return;
    };
    if kind != EventKind::Change {
        event.prevent_default();
    }

    let ui_event = match action {
        Action::Navigate(route) => UiEvent::Navigate(route.path().to_string()),
        Action::Logout => UiEvent::Logout,
        Action::PreviewReceipt => UiEvent::PreviewReceipt {
            file_url: hooked.get_attribute(BILL_URL_ATTR),
        },
        Action::CloseOverlay => UiEvent::CloseOverlay,
        Action::CreateNewBill => UiEvent::CreateNewBill,
        Action::SubmitBill => UiEvent::SubmitBill(read_form(&hooked)),
        Action::SelectFile => {
            let router = router.clone();
            let token = router.view_token();
            spawn_local(async move {
                match read_selected_file(&hooked).await {
                    Ok(Some(file)) => {
                        spawn(router.dispatch_if_current(&token, UiEvent::FileSelected(file)))
                    }
                    Ok(None) => log::debug!("File input emptied"),
                    Err(e) => log::error!("Failed to read receipt: {}", e),
                }
            });
            return;
        }
    };
    spawn(router.dispatch(ui_event));
}

async fn read_selected_file(input: &Element) -> Result<Option<UploadFile>, String> {
    let input = input
        .dyn_ref::<HtmlInputElement>()
        .ok_or("file hook is not an input")?;
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return Ok(None);
    };
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{e:?}"))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(Some(UploadFile::new(file.name(), file.type_(), bytes)))
}

fn read_form(form: &Element) -> FormSnapshot {
    let value = |hook: &str| -> String {
        let Ok(Some(field)) = form.query_selector(&hook_selector(hook)) else {
            return String::new();
        };
        if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(select) = field.dyn_ref::<HtmlSelectElement>() {
            select.value()
        } else if let Some(textarea) = field.dyn_ref::<HtmlTextAreaElement>() {
            textarea.value()
        } else {
            String::new()
        }
    };

    FormSnapshot {
        expense_type: value(hooks::EXPENSE_TYPE),
        name: value(hooks::EXPENSE_NAME),
        date: value(hooks::DATEPICKER),
        amount: value(hooks::AMOUNT),
        vat: value(hooks::VAT),
        pct: value(hooks::PCT),
        commentary: value(hooks::COMMENTARY),
    }
}

fn listen_hash_changes(router: Router) -> Result<(), String> {
    let window = window().ok_or("no global `window` exists")?;
    let closure = Closure::wrap(Box::new(move |_event: Event| {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        spawn(router.follow_location(&hash).task);
    }) as Box<dyn FnMut(Event)>);

    window
        .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref())
        .map_err(|e| format!("failed to add hashchange listener: {:?}", e))?;
    closure.forget();
    Ok(())
}

/// `window.onNavigate(pathOrName)` for links and scripts outside the router
fn expose_on_navigate(router: Router) -> Result<(), String> {
    let window = window().ok_or("no global `window` exists")?;
    let closure = Closure::wrap(Box::new(move |target: String| {
        spawn(router.navigate_to(&target).task);
    }) as Box<dyn FnMut(String)>);

    js_sys::Reflect::set(&window, &JsValue::from_str("onNavigate"), closure.as_ref())
        .map_err(|e| format!("failed to set onNavigate: {:?}", e))?;
    closure.forget();
    Ok(())
}

/// Session storage over `window.localStorage`
pub struct LocalSessionStore {
    storage: Storage,
}

impl LocalSessionStore {
    pub fn new() -> Result<Self, String> {
        let storage = window()
            .ok_or("no global `window` exists")?
            .local_storage()
            .map_err(|e| format!("{e:?}"))?
            .ok_or("localStorage unavailable")?;
        Ok(Self { storage })
    }
}

impl SessionStore for LocalSessionStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) {
        if let Err(e) = self.storage.set_item(key, value) {
            log::error!("Failed to store '{}': {:?}", key, e);
        }
    }

    fn remove_item(&self, key: &str) {
        if let Err(e) = self.storage.remove_item(key) {
            log::error!("Failed to remove '{}': {:?}", key, e);
        }
    }
}

/// Wire the router to the page and mount the view for the current location
pub fn boot() -> Result<Router, String> {
    let config = AppConfig::from_location();
    let document = WebDocument::new(&config.mount_id)?;
    let session: Rc<dyn SessionStore> = match LocalSessionStore::new() {
        Ok(storage) => Rc::new(storage),
        Err(e) => {
            log::warn!("Falling back to in-memory session: {}", e);
            Rc::new(MemorySessionStore::new())
        }
    };
    let store = Rc::new(HttpBillStore::new(config.api_base.clone()));

    let router = Router::new(config, store, Rc::new(document), session, Rc::new(BrowserClock));
    router.initialize();

    let location = window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default();
    spawn(router.follow_location(&location).task);
    Ok(router)
}
