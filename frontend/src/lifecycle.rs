//! Submission lifecycle shared by the inline contact form and the
//! partnership modal.
//!
//! Transitions are pure: `Submission::handle` mutates the state and returns
//! the effects the caller has to run (relay call, reset timer). The caller
//! feeds outcomes back in as events.

use log::{debug, info, warn};

use crate::config;
use crate::inquiry::{Inquiry, InquiryField};
use crate::relay::SubmissionError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Error,
}

impl SubmissionStatus {
    pub fn accepts_submit(self) -> bool {
        matches!(self, SubmissionStatus::Idle | SubmissionStatus::Error)
    }

    /// Submit buttons are disabled while a call is out or just succeeded.
    pub fn is_locked(self) -> bool {
        !self.accepts_submit()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionEvent {
    Edit(InquiryField, String),
    Submit,
    Resolved(Result<(), SubmissionError>),
    /// A reset timer fired. Carries the epoch it was scheduled for.
    ResetElapsed(u64),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionEffect {
    Send(Inquiry),
    ScheduleReset { epoch: u64, after_ms: u32 },
    CancelReset,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Submission {
    status: SubmissionStatus,
    inquiry: Inquiry,
    epoch: u64,
}

impl Submission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn inquiry(&self) -> &Inquiry {
        &self.inquiry
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn handle(&mut self, event: SubmissionEvent) -> Vec<SubmissionEffect> {
        match event {
            SubmissionEvent::Edit(field, value) => {
                self.inquiry.set(field, value);
                Vec::new()
            }
            SubmissionEvent::Submit => self.submit(),
            SubmissionEvent::Resolved(outcome) => self.resolve(outcome),
            SubmissionEvent::ResetElapsed(epoch) => {
                self.reset(epoch);
                Vec::new()
            }
        }
    }

    fn submit(&mut self) -> Vec<SubmissionEffect> {
        if !self.status.accepts_submit() {
            debug!("Ignoring submit while {:?}", self.status);
            return Vec::new();
        }

        let mut effects = Vec::with_capacity(2);
        if self.status == SubmissionStatus::Error {
            effects.push(SubmissionEffect::CancelReset);
        }
        self.epoch += 1;
        self.status = SubmissionStatus::Sending;
        info!("Submitting inquiry (attempt {})", self.epoch);
        effects.push(SubmissionEffect::Send(self.inquiry.clone()));
        effects
    }

    fn resolve(&mut self, outcome: Result<(), SubmissionError>) -> Vec<SubmissionEffect> {
        if self.status != SubmissionStatus::Sending {
            warn!("Dropping relay outcome received while {:?}", self.status);
            return Vec::new();
        }

        match outcome {
            Ok(()) => {
                self.status = SubmissionStatus::Sent;
                self.inquiry.clear();
            }
            Err(e) => {
                warn!("Inquiry not delivered: {}", e);
                self.status = SubmissionStatus::Error;
            }
        }

        vec![SubmissionEffect::ScheduleReset {
            epoch: self.epoch,
            after_ms: config::RESET_DELAY_MS,
        }]
    }

    fn reset(&mut self, epoch: u64) {
        let terminal = matches!(self.status, SubmissionStatus::Sent | SubmissionStatus::Error);
        if epoch != self.epoch || !terminal {
            debug!("Stale reset for attempt {} (current {})", epoch, self.epoch);
            return;
        }
        self.status = SubmissionStatus::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> Vec<SubmissionEvent> {
        [
            (InquiryField::Name, "Jane Doe"),
            (InquiryField::Institution, "Acme U"),
            (InquiryField::ContactEmail, "jane@acme.edu"),
            (InquiryField::Message, "Interested in LMS rollout"),
        ]
        .into_iter()
        .map(|(field, value)| SubmissionEvent::Edit(field, value.to_string()))
        .collect()
    }

    fn filled() -> Submission {
        let mut submission = Submission::new();
        for edit in jane() {
            assert!(submission.handle(edit).is_empty());
        }
        submission
    }

    fn sends(effects: &[SubmissionEffect]) -> usize {
        effects
            .iter()
            .filter(|effect| matches!(effect, SubmissionEffect::Send(_)))
            .count()
    }

    #[test]
    fn successful_relay_ends_sent_with_cleared_fields() {
        let mut submission = filled();
        let snapshot = submission.inquiry().clone();
        let mut trace = vec![submission.status()];

        let effects = submission.handle(SubmissionEvent::Submit);
        trace.push(submission.status());
        assert_eq!(effects, vec![SubmissionEffect::Send(snapshot)]);

        let effects = submission.handle(SubmissionEvent::Resolved(Ok(())));
        trace.push(submission.status());

        assert_eq!(
            trace,
            [SubmissionStatus::Idle, SubmissionStatus::Sending, SubmissionStatus::Sent]
        );
        assert!(submission.inquiry().is_empty());
        assert_eq!(
            effects,
            vec![SubmissionEffect::ScheduleReset { epoch: 1, after_ms: 4_000 }]
        );
    }

    #[test]
    fn rejected_relay_ends_error_with_fields_kept() {
        let mut submission = filled();
        let before = submission.inquiry().clone();

        submission.handle(SubmissionEvent::Submit);
        assert_eq!(submission.status(), SubmissionStatus::Sending);
        let effects = submission.handle(SubmissionEvent::Resolved(Err(
            SubmissionError::Rejected { status: 500 },
        )));

        assert_eq!(submission.status(), SubmissionStatus::Error);
        assert_eq!(submission.inquiry(), &before);
        assert_eq!(
            effects,
            vec![SubmissionEffect::ScheduleReset { epoch: 1, after_ms: 4_000 }]
        );
    }

    #[test]
    fn transport_fault_is_the_same_error_state() {
        let mut submission = filled();
        let before = submission.inquiry().clone();
        submission.handle(SubmissionEvent::Submit);
        submission.handle(SubmissionEvent::Resolved(Err(SubmissionError::Transport(
            "Failed to fetch".into(),
        ))));
        assert_eq!(submission.status(), SubmissionStatus::Error);
        assert_eq!(submission.inquiry(), &before);
    }

    #[test]
    fn double_submit_issues_one_call() {
        let mut submission = filled();
        let first = submission.handle(SubmissionEvent::Submit);
        let second = submission.handle(SubmissionEvent::Submit);
        assert_eq!(sends(&first) + sends(&second), 1);
        assert!(second.is_empty());
        assert_eq!(submission.status(), SubmissionStatus::Sending);
        assert_eq!(submission.epoch(), 1);
    }

    #[test]
    fn submit_while_sent_is_a_no_op() {
        let mut submission = filled();
        submission.handle(SubmissionEvent::Submit);
        submission.handle(SubmissionEvent::Resolved(Ok(())));
        let before = submission.clone();

        assert!(submission.handle(SubmissionEvent::Submit).is_empty());
        assert_eq!(submission, before);
    }

    #[test]
    fn resets_return_to_idle_from_both_terminal_states() {
        for outcome in [Ok(()), Err(SubmissionError::Rejected { status: 404 })] {
            let mut submission = filled();
            submission.handle(SubmissionEvent::Submit);
            submission.handle(SubmissionEvent::Resolved(outcome));
            assert_ne!(submission.status(), SubmissionStatus::Idle);

            submission.handle(SubmissionEvent::ResetElapsed(1));
            assert_eq!(submission.status(), SubmissionStatus::Idle);
        }
    }

    #[test]
    fn retry_from_error_cancels_pending_reset() {
        let mut submission = filled();
        submission.handle(SubmissionEvent::Submit);
        submission.handle(SubmissionEvent::Resolved(Err(SubmissionError::Rejected {
            status: 503,
        })));

        let effects = submission.handle(SubmissionEvent::Submit);
        assert_eq!(effects[0], SubmissionEffect::CancelReset);
        assert_eq!(sends(&effects), 1);
        assert_eq!(submission.status(), SubmissionStatus::Sending);

        // The first attempt's timer fires late; it must not touch the retry.
        submission.handle(SubmissionEvent::ResetElapsed(1));
        assert_eq!(submission.status(), SubmissionStatus::Sending);
    }

    #[test]
    fn reset_while_sending_is_ignored() {
        let mut submission = filled();
        submission.handle(SubmissionEvent::Submit);
        submission.handle(SubmissionEvent::ResetElapsed(1));
        assert_eq!(submission.status(), SubmissionStatus::Sending);
    }

    #[test]
    fn late_outcome_outside_sending_is_dropped() {
        let mut submission = filled();
        let before = submission.clone();
        assert!(submission.handle(SubmissionEvent::Resolved(Ok(()))).is_empty());
        assert_eq!(submission, before);
    }

    #[test]
    fn edits_are_accepted_while_sending() {
        let mut submission = filled();
        submission.handle(SubmissionEvent::Submit);
        submission.handle(SubmissionEvent::Edit(InquiryField::Message, "Also AI".into()));
        assert_eq!(submission.inquiry().message, "Also AI");
        assert_eq!(submission.status(), SubmissionStatus::Sending);
    }

    #[test]
    fn lock_follows_status() {
        assert!(!SubmissionStatus::Idle.is_locked());
        assert!(SubmissionStatus::Sending.is_locked());
        assert!(SubmissionStatus::Sent.is_locked());
        assert!(!SubmissionStatus::Error.is_locked());
    }
}
