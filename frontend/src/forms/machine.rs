use serde::Serialize;
use std::future::Future;
use std::marker::PhantomData;

use super::outcome::status_for_failure;
use super::status::SubmissionStatus;
use super::validation::ValidationError;
use crate::sink::{DataSink, SinkError};

/// One kind of form: what it holds, where it goes, what it says.
pub trait FormKind {
    type Fields: Default + Clone + PartialEq;
    type Record: Serialize + 'static;

    const TABLE: &'static str;
    /// Used in "Configuration error: <label> table not found".
    const LABEL: &'static str;
    const SUCCESS_MESSAGE: &'static str;
    /// Set when an already-existing record should read as a success.
    const DUPLICATE_MESSAGE: Option<&'static str> = None;

    /// Checks fields in a fixed order, stopping at the first failure.
    fn validate(fields: &Self::Fields) -> Result<Self::Record, ValidationError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
}

#[derive(Debug, PartialEq)]
pub enum Attempt<R> {
    /// A submission is already in flight; nothing changed.
    Busy,
    /// Validation failed; the status now holds the reason.
    Rejected,
    /// Valid. Carries the record, or the pending insert from `begin_insert`.
    /// Its result must go back through `settle`.
    Dispatch(R),
}

pub struct FormMachine<K: FormKind> {
    fields: K::Fields,
    status: Option<SubmissionStatus>,
    phase: Phase,
    _kind: PhantomData<K>,
}

impl<K: FormKind> Default for FormMachine<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: FormKind> FormMachine<K> {
    pub fn new() -> Self {
        Self {
            fields: K::Fields::default(),
            status: None,
            phase: Phase::Idle,
            _kind: PhantomData,
        }
    }

    pub fn fields(&self) -> &K::Fields {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut K::Fields {
        &mut self.fields
    }

    pub fn status(&self) -> Option<&SubmissionStatus> {
        self.status.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn begin(&mut self) -> Attempt<K::Record> {
        if self.is_submitting() {
            log::debug!("{} form: submit ignored, request in flight", K::LABEL);
            return Attempt::Busy;
        }

        match K::validate(&self.fields) {
            Err(reason) => {
                log::debug!("{} form: rejected locally ({:?})", K::LABEL, reason);
                self.status = Some(SubmissionStatus::failure(reason.to_string()));
                Attempt::Rejected
            }
            Ok(record) => {
                self.phase = Phase::Submitting;
                self.status = None;
                log::debug!("{} form: submitting to {}", K::LABEL, K::TABLE);
                Attempt::Dispatch(record)
            }
        }
    }

    /// Applies the result of the insert started by `begin`.
    pub fn settle(&mut self, result: Result<(), SinkError>) -> &SubmissionStatus {
        if !self.is_submitting() {
            log::warn!("{} form: settle called with no request in flight", K::LABEL);
        }
        self.phase = Phase::Idle;

        let status = match result {
            Ok(()) => {
                self.fields = K::Fields::default();
                SubmissionStatus::success(K::SUCCESS_MESSAGE)
            }
            Err(e) => {
                log::error!("{} form: insert failed: {:?}", K::LABEL, e);
                status_for_failure::<K>(&e)
            }
        };
        self.status.insert(status)
    }

    /// Like `begin`, but hands back the insert into `K::TABLE` ready to await.
    /// The future owns `sink` and the record, so it can outlive the borrow.
    pub fn begin_insert<S: DataSink>(
        &mut self,
        sink: S,
    ) -> Attempt<impl Future<Output = Result<(), SinkError>>> {
        match self.begin() {
            Attempt::Busy => Attempt::Busy,
            Attempt::Rejected => Attempt::Rejected,
            Attempt::Dispatch(record) => {
                Attempt::Dispatch(async move { sink.insert(K::TABLE, &record).await })
            }
        }
    }

    /// Runs a whole attempt against `sink`. Returns `None` when the machine was busy.
    #[cfg(test)]
    pub async fn submit<S: DataSink>(&mut self, sink: S) -> Option<&SubmissionStatus> {
        match self.begin_insert(sink) {
            Attempt::Busy => None,
            Attempt::Rejected => self.status.as_ref(),
            Attempt::Dispatch(insert) => {
                let result = insert.await;
                Some(self.settle(result))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::contact::{Contact, ContactFields};
    use crate::forms::waitlist::Waitlist;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Records every insert and answers from a queue of canned results.
    #[derive(Default)]
    struct RecordingSink {
        pub calls: RefCell<Vec<(String, serde_json::Value)>>,
        replies: RefCell<VecDeque<Result<(), SinkError>>>,
    }

    impl RecordingSink {
        pub fn replying(reply: Result<(), SinkError>) -> Self {
            let sink = Self::default();
            sink.replies.borrow_mut().push_back(reply);
            sink
        }
    }

    impl DataSink for RecordingSink {
        async fn insert<R: Serialize>(&self, table: &str, record: &R) -> Result<(), SinkError> {
            let value = serde_json::to_value(record).unwrap();
            self.calls.borrow_mut().push((table.to_string(), value));
            self.replies.borrow_mut().pop_front().unwrap_or(Ok(()))
        }
    }

    fn waitlist_with(email: &str) -> FormMachine<Waitlist> {
        let mut form = FormMachine::<Waitlist>::new();
        form.fields_mut().email = email.to_string();
        form
    }

    fn contact_with(name: &str, email: &str, message: &str) -> FormMachine<Contact> {
        let mut form = FormMachine::<Contact>::new();
        *form.fields_mut() = ContactFields {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        };
        form
    }

    #[test]
    fn invalid_waitlist_email_never_reaches_the_sink() {
        let sink = RecordingSink::default();
        let mut form = waitlist_with("not-an-email");

        let status = block_on(form.submit(&sink)).cloned();

        assert_eq!(status, Some(SubmissionStatus::failure("Please enter a valid email address")));
        assert!(sink.calls.borrow().is_empty());
        assert_eq!(form.fields().email, "not-an-email");
        assert!(!form.is_submitting());
    }

    #[test]
    fn waitlist_success_clears_email() {
        let sink = RecordingSink::replying(Ok(()));
        let mut form = waitlist_with("new@user.com");

        let status = block_on(form.submit(&sink)).cloned();

        assert_eq!(status, Some(SubmissionStatus::success("Thank you for joining our waitlist!")));
        assert_eq!(form.fields().email, "");
        let calls = sink.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "waitlist_users");
        assert_eq!(calls[0].1, serde_json::json!({ "email": "new@user.com" }));
    }

    #[test]
    fn waitlist_duplicate_reads_as_success_but_keeps_email() {
        let sink = RecordingSink::replying(Err(SinkError::rejected("23505", "duplicate key")));
        let mut form = waitlist_with("dup@user.com");

        let status = block_on(form.submit(&sink)).cloned();

        assert_eq!(status, Some(SubmissionStatus::success("You're already on our waitlist!")));
        // Only a successful insert clears the fields.
        assert_eq!(form.fields().email, "dup@user.com");
    }

    #[test]
    fn contact_empty_name_is_rejected_first() {
        let sink = RecordingSink::default();
        let mut form = contact_with("   ", "not-an-email", "");

        let status = block_on(form.submit(&sink)).cloned();

        assert_eq!(status, Some(SubmissionStatus::failure("Please enter your name")));
        assert!(sink.calls.borrow().is_empty());
        assert_eq!(form.fields().email, "not-an-email");
        assert_eq!(form.fields().message, "");
    }

    #[test]
    fn contact_validation_order() {
        let sink = RecordingSink::default();

        let mut form = contact_with("Ada", "ada@", "");
        assert_eq!(
            block_on(form.submit(&sink)).map(|s| s.message.clone()).as_deref(),
            Some("Please enter a valid email address")
        );

        let mut form = contact_with("Ada", "ada@lovelace.io", " \n ");
        assert_eq!(
            block_on(form.submit(&sink)).map(|s| s.message.clone()).as_deref(),
            Some("Please enter a message")
        );
        assert!(sink.calls.borrow().is_empty());
    }

    #[test]
    fn contact_permission_denied_keeps_fields() {
        let sink = RecordingSink::replying(Err(SinkError::rejected(
            "",
            "permission denied for table contactUs",
        )));
        let mut form = contact_with("Ada", "ada@lovelace.io", "Hello there");

        let status = block_on(form.submit(&sink)).cloned();

        assert_eq!(status, Some(SubmissionStatus::failure("Configuration error: Permission denied")));
        assert_eq!(form.fields(), &ContactFields {
            name: "Ada".into(),
            email: "ada@lovelace.io".into(),
            message: "Hello there".into(),
        });
        assert_eq!(sink.calls.borrow()[0].0, "contactUs");
    }

    #[test]
    fn contact_success_clears_all_fields() {
        let sink = RecordingSink::replying(Ok(()));
        let mut form = contact_with("Ada", "ada@lovelace.io", "Hello there");

        let status = block_on(form.submit(&sink)).cloned();

        assert_eq!(
            status,
            Some(SubmissionStatus::success("Thank you for your message! We'll get back to you soon."))
        );
        assert_eq!(form.fields(), &ContactFields::default());
        assert_eq!(
            sink.calls.borrow()[0].1,
            serde_json::json!({ "name": "Ada", "email": "ada@lovelace.io", "message": "Hello there" })
        );
    }

    #[test]
    fn submit_while_in_flight_is_a_no_op() {
        let mut form = waitlist_with("new@user.com");

        let Attempt::Dispatch(record) = form.begin() else {
            panic!("a valid email should dispatch");
        };
        assert!(form.is_submitting());
        assert_eq!(form.status(), None);

        assert_eq!(form.begin(), Attempt::Busy);
        assert!(form.is_submitting());

        assert_eq!(record.email, "new@user.com");
        form.settle(Ok(()));
        assert!(!form.is_submitting());
    }

    #[test]
    fn pending_insert_blocks_a_second_attempt() {
        let sink = RecordingSink::replying(Err(SinkError::rejected("23505", "duplicate key")));
        let mut form = waitlist_with("dup@user.com");

        let Attempt::Dispatch(insert) = form.begin_insert(&sink) else {
            panic!("a valid email should dispatch");
        };
        assert!(matches!(form.begin_insert(&sink), Attempt::Busy));
        // Nothing is sent until the insert is awaited.
        assert!(sink.calls.borrow().is_empty());

        let result = block_on(insert);
        assert_eq!(sink.calls.borrow()[0].0, "waitlist_users");
        assert_eq!(
            form.settle(result),
            &SubmissionStatus::success("You're already on our waitlist!")
        );
        assert!(!form.is_submitting());
    }

    #[test]
    fn every_attempt_overwrites_the_previous_status() {
        let sink = RecordingSink::replying(Err(SinkError::Transport("Failed to fetch".into())));
        let mut form = waitlist_with("new@user.com");

        block_on(form.submit(&sink));
        assert_eq!(form.status(), Some(&SubmissionStatus::failure("Error: Failed to fetch")));

        form.fields_mut().email = "oops".into();
        block_on(form.submit(&sink));
        assert_eq!(
            form.status(),
            Some(&SubmissionStatus::failure("Please enter a valid email address"))
        );
    }

    #[test]
    fn dispatch_clears_stale_status() {
        let mut form = waitlist_with("bad");
        assert_eq!(form.begin(), Attempt::Rejected);
        assert!(form.status().is_some());

        form.fields_mut().email = "new@user.com".into();
        assert!(matches!(form.begin(), Attempt::Dispatch(_)));
        assert_eq!(form.status(), None);
    }

    #[test]
    fn failed_inserts_keep_fields_for_any_error() {
        let errors = [
            SinkError::rejected("42P01", "relation does not exist"),
            SinkError::rejected("XX000", ""),
            SinkError::Transport("Failed to fetch".into()),
            SinkError::Timeout(15_000),
        ];
        for err in errors {
            let sink = RecordingSink::replying(Err(err));
            let mut form = contact_with("Ada", "ada@lovelace.io", "Hi");
            let status = block_on(form.submit(&sink)).cloned().unwrap();
            assert!(!status.is_success);
            assert_eq!(form.fields().name, "Ada");
            assert_eq!(form.fields().message, "Hi");
        }
    }
}
