use std::cell::RefCell;
use std::rc::Rc;

use billed_types::{BillStatus, NewBill, Session, DEFAULT_PCT};
use dioxus_logger::tracing::{debug, error, info, warn};
use futures_util::future::{FutureExt, LocalBoxFuture};

use crate::document::DocumentMount;
use crate::error::SubmitError;
use crate::router::ViewToken;
use crate::store::{BillStore, UploadFile};
use crate::views::hooks;
use crate::views::new_bill::{FILE_ACCEPTED_TEXT, FILE_REJECTED_TEXT};

/// Receipt extensions the client accepts, compared lower-cased
pub const ALLOWED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// `true` iff the text after the last `.` is an allowed extension
pub fn is_allowed_receipt(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ALLOWED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// The file the user picked, before anything is uploaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadCandidate {
    pub file_name: String,
    pub mime_type: String,
    pub is_valid: bool,
}

impl UploadCandidate {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>) -> Self {
        let file_name = file_name.into();
        Self {
            is_valid: is_allowed_receipt(&file_name),
            file_name,
            mime_type: mime_type.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    Empty,
    FileSelected { valid: bool },
    Submitting,
    Submitted,
    SubmissionFailed { message: String },
}

/// Raw field values read from the form on submit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    pub expense_type: String,
    pub name: String,
    pub date: String,
    pub amount: String,
    pub vat: String,
    pub pct: String,
    pub commentary: String,
}

impl FormSnapshot {
    /// Build the create payload; `pct` falls back to the default rate when empty
    pub fn to_new_bill(&self, email: &str, file_name: &str) -> Result<NewBill, SubmitError> {
        let amount = self
            .amount
            .trim()
            .parse::<f64>()
            .map_err(|_| SubmitError::InvalidAmount(self.amount.clone()))?;

        let pct = match self.pct.trim() {
            "" => DEFAULT_PCT,
            raw => raw
                .parse::<f64>()
                .map_err(|_| SubmitError::InvalidPct(self.pct.clone()))?,
        };

        Ok(NewBill {
            email: email.to_string(),
            expense_type: self.expense_type.clone(),
            name: self.name.clone(),
            amount,
            date: self.date.clone(),
            vat: self.vat.clone(),
            pct,
            commentary: self.commentary.clone(),
            file_name: file_name.to_string(),
            status: BillStatus::Pending,
        })
    }
}

#[derive(Debug)]
struct Submission {
    state: SubmissionState,
    history: Vec<SubmissionState>,
    candidate: Option<UploadCandidate>,
    queued: Option<UploadFile>,
}

impl Submission {
    fn new() -> Self {
        Self {
            state: SubmissionState::Empty,
            history: vec![SubmissionState::Empty],
            candidate: None,
            queued: None,
        }
    }

    fn transition(&mut self, next: SubmissionState) {
        debug!("Bill submission {:?} -> {:?}", self.state, next);
        self.history.push(next.clone());
        self.state = next;
    }

    fn can_submit(&self) -> bool {
        let state_allows = matches!(
            self.state,
            SubmissionState::FileSelected { valid: true } | SubmissionState::SubmissionFailed { .. }
        );
        state_allows && self.queued.is_some()
    }
}

pub struct NewBillContainer {
    token: ViewToken,
    session: Option<Session>,
    store: Rc<dyn BillStore>,
    document: Rc<dyn DocumentMount>,
    submission: Rc<RefCell<Submission>>,
}

impl NewBillContainer {
    pub fn new(
        token: ViewToken,
        session: Option<Session>,
        store: Rc<dyn BillStore>,
        document: Rc<dyn DocumentMount>,
    ) -> Self {
        Self {
            token,
            session,
            store,
            document,
            submission: Rc::new(RefCell::new(Submission::new())),
        }
    }

    pub fn token(&self) -> &ViewToken {
        &self.token
    }

    pub fn state(&self) -> SubmissionState {
        self.submission.borrow().state.clone()
    }

    /// Every state the submission went through, oldest first
    pub fn history(&self) -> Vec<SubmissionState> {
        self.submission.borrow().history.clone()
    }

    pub fn candidate(&self) -> Option<UploadCandidate> {
        self.submission.borrow().candidate.clone()
    }

    /// Validate the picked file. Rejected files are dropped and the input
    /// cleared; accepted ones are queued for the submit.
    ///
    /// While a submit is in flight a rejected file still clears the input
    /// and the queue, but an accepted one does not replace the upload.
    pub fn handle_file_change(&self, file: UploadFile) -> UploadCandidate {
        let candidate = UploadCandidate::new(file.name.clone(), file.mime_type.clone());
        let mut submission = self.submission.borrow_mut();

        if submission.state == SubmissionState::Submitting {
            if candidate.is_valid {
                warn!("Ignoring file change while a bill is being submitted");
            } else {
                warn!("Receipt '{}' rejected during submit", candidate.file_name);
                submission.queued = None;
                submission.candidate = Some(candidate.clone());
                self.document.clear_input(hooks::FILE);
                self.document.set_text(hooks::FILE_STATUS, FILE_REJECTED_TEXT);
            }
            return candidate;
        }

        if candidate.is_valid {
            info!("Receipt '{}' accepted", candidate.file_name);
            submission.queued = Some(file);
            self.document.set_text(hooks::FILE_STATUS, FILE_ACCEPTED_TEXT);
        } else {
            warn!("Receipt '{}' rejected: unsupported extension", candidate.file_name);
            submission.queued = None;
            self.document.clear_input(hooks::FILE);
            self.document.set_text(hooks::FILE_STATUS, FILE_REJECTED_TEXT);
        }
        self.document.set_text(hooks::SUBMIT_ERROR, "");

        submission.candidate = Some(candidate.clone());
        submission.transition(SubmissionState::FileSelected {
            valid: candidate.is_valid,
        });
        candidate
    }

    /// Persist the bill. `None` when there is nothing to send: no valid
    /// receipt queued, a submit already in flight, or a payload that could
    /// not be assembled.
    ///
    /// The task resolves to the final state, `Submitted` or
    /// `SubmissionFailed`. The form is left untouched on failure.
    pub fn handle_submit(
        &self,
        form: FormSnapshot,
    ) -> Option<LocalBoxFuture<'static, SubmissionState>> {
        let file = {
            let submission = self.submission.borrow();
            if !submission.can_submit() {
                debug!("Submit ignored in state {:?}", submission.state);
                return None;
            }
            submission.queued.clone()?
        };

        let payload = match self.assemble(&form, &file) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Bill not submitted: {}", e);
                self.fail(e.to_string());
                return None;
            }
        };

        self.submission
            .borrow_mut()
            .transition(SubmissionState::Submitting);
        self.document.set_text(hooks::SUBMIT_ERROR, "");

        let token = self.token.clone();
        let store = Rc::clone(&self.store);
        let document = Rc::clone(&self.document);
        let submission = Rc::clone(&self.submission);

        Some(
            async move {
                let result = store.create(&payload, &file).await;
                let mut submission = submission.borrow_mut();
                match result {
                    Ok(created) => {
                        let record = payload.into_record(created);
                        info!("Bill {:?} created", record.id);
                        submission.queued = None;
                        submission.candidate = None;
                        submission.transition(SubmissionState::Submitted);
                    }
                    Err(e) => {
                        error!("Failed to create bill: {}", e);
                        let message = SubmitError::from(e).to_string();
                        if token.is_current() {
                            document.set_text(hooks::SUBMIT_ERROR, &message);
                        }
                        submission.transition(SubmissionState::SubmissionFailed { message });
                    }
                }
                submission.state.clone()
            }
            .boxed_local(),
        )
    }

    fn assemble(&self, form: &FormSnapshot, file: &UploadFile) -> Result<NewBill, SubmitError> {
        let session = self.session.as_ref().ok_or(SubmitError::MissingSession)?;
        form.to_new_bill(&session.email, &file.name)
    }

    fn fail(&self, message: String) {
        self.document.set_text(hooks::SUBMIT_ERROR, &message);
        self.submission
            .borrow_mut()
            .transition(SubmissionState::SubmissionFailed { message });
    }
}
