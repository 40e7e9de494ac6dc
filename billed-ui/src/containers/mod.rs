//! Stateful coordinators, one per screen, between the store and the views.

pub mod bills;
pub mod new_bill;

pub use bills::{BillsContainer, ListState};
pub use new_bill::{FormSnapshot, NewBillContainer, SubmissionState, UploadCandidate};
