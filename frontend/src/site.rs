//! Top-level page state owned by the `App` controller.

use crate::lifecycle::{Submission, SubmissionEffect, SubmissionEvent};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Home,
    Expertise,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SiteMsg {
    Select(View),
    OpenModal,
    CloseModal,
    Submission(SubmissionEvent),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    ScrollToTop,
    Submission(SubmissionEffect),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Site {
    pub view: View,
    pub modal_open: bool,
    pub submission: Submission,
}

impl Site {
    pub fn update(&mut self, msg: SiteMsg) -> Vec<Effect> {
        match msg {
            SiteMsg::Select(view) => {
                self.view = view;
                vec![Effect::ScrollToTop]
            }
            SiteMsg::OpenModal => {
                self.modal_open = true;
                Vec::new()
            }
            SiteMsg::CloseModal => {
                self.modal_open = false;
                Vec::new()
            }
            SiteMsg::Submission(event) => self
                .submission
                .handle(event)
                .into_iter()
                .map(Effect::Submission)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inquiry::InquiryField;
    use crate::lifecycle::SubmissionStatus;

    #[test]
    fn starts_on_home_with_modal_closed() {
        let site = Site::default();
        assert_eq!(site.view, View::Home);
        assert!(!site.modal_open);
        assert_eq!(site.submission.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn every_selection_scrolls_to_top() {
        let mut site = Site::default();
        for view in [View::Expertise, View::Expertise, View::Home] {
            assert_eq!(site.update(SiteMsg::Select(view)), vec![Effect::ScrollToTop]);
            assert_eq!(site.view, view);
        }
    }

    #[test]
    fn modal_toggling_leaves_the_submission_alone() {
        let mut site = Site::default();
        site.update(SiteMsg::Submission(SubmissionEvent::Edit(
            InquiryField::Name,
            "Jane Doe".into(),
        )));
        site.update(SiteMsg::Submission(SubmissionEvent::Submit));
        let submission = site.submission.clone();

        assert!(site.update(SiteMsg::OpenModal).is_empty());
        assert!(site.modal_open);
        assert!(site.update(SiteMsg::CloseModal).is_empty());
        assert!(!site.modal_open);
        assert_eq!(site.submission, submission);
    }

    #[test]
    fn both_forms_share_one_lifecycle() {
        let mut site = Site::default();
        site.update(SiteMsg::OpenModal);
        let effects = site.update(SiteMsg::Submission(SubmissionEvent::Submit));
        assert!(matches!(
            effects.as_slice(),
            [Effect::Submission(SubmissionEffect::Send(_))]
        ));

        // Closing the modal and submitting from the inline form is still locked out.
        site.update(SiteMsg::CloseModal);
        assert!(site.update(SiteMsg::Submission(SubmissionEvent::Submit)).is_empty());
        assert_eq!(site.submission.status(), SubmissionStatus::Sending);
    }
}
