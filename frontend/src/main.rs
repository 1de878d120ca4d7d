use gloo_timers::callback::Timeout;
use log::{debug, info};
use yew::prelude::*;

mod browser;
mod config;
mod content;
mod inquiry;
mod lifecycle;
mod relay;
mod site;
mod components {
    pub mod inquiry_form;
    pub mod logo;
    pub mod navbar;
    pub mod partnership_modal;
    pub mod section;
}
mod pages {
    pub mod expertise;
    pub mod home;
}

use components::partnership_modal::PartnershipModal;
use inquiry::InquiryField;
use lifecycle::{SubmissionEffect, SubmissionEvent};
use pages::{expertise::Expertise, home::Home};
use site::{Effect, Site, SiteMsg, View};

/// Owns every piece of page state and runs the effects the state emits.
pub struct App {
    site: Site,
    /// Pending SENT/ERROR reset. Dropping the handle cancels the timer.
    reset_timer: Option<Timeout>,
}

impl App {
    fn run(&mut self, ctx: &Context<Self>, effect: Effect) {
        match effect {
            Effect::ScrollToTop => browser::scroll_to_top(),
            Effect::Submission(SubmissionEffect::Send(inquiry)) => {
                ctx.link().send_future(async move {
                    let outcome = relay::send_inquiry(&inquiry).await;
                    SiteMsg::Submission(SubmissionEvent::Resolved(outcome))
                });
            }
            Effect::Submission(SubmissionEffect::ScheduleReset { epoch, after_ms }) => {
                let link = ctx.link().clone();
                self.reset_timer = Some(Timeout::new(after_ms, move || {
                    link.send_message(SiteMsg::Submission(SubmissionEvent::ResetElapsed(epoch)));
                }));
            }
            Effect::Submission(SubmissionEffect::CancelReset) => {
                if let Some(timer) = self.reset_timer.take() {
                    debug!("Cancelling pending form reset");
                    drop(timer);
                }
            }
        }
    }
}

impl Component for App {
    type Message = SiteMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            site: Site::default(),
            reset_timer: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let before = self.site.clone();
        for effect in self.site.update(msg) {
            self.run(ctx, effect);
        }
        self.site != before
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_select = link.callback(SiteMsg::Select);
        let on_change = link.callback(|(field, value): (InquiryField, String)| {
            SiteMsg::Submission(SubmissionEvent::Edit(field, value))
        });
        let on_submit = link.callback(|_: ()| SiteMsg::Submission(SubmissionEvent::Submit));
        let on_open_modal = link.callback(|_: ()| SiteMsg::OpenModal);
        let on_close_modal = link.callback(|_: ()| SiteMsg::CloseModal);

        let inquiry = self.site.submission.inquiry().clone();
        let status = self.site.submission.status();

        let page = match self.site.view {
            View::Home => html! {
                <Home
                    on_select={on_select}
                    on_open_modal={on_open_modal}
                    inquiry={inquiry.clone()}
                    status={status}
                    on_change={on_change.clone()}
                    on_submit={on_submit.clone()}
                />
            },
            View::Expertise => html! { <Expertise on_select={on_select} /> },
        };

        html! {
            <>
                { page }
                <PartnershipModal
                    open={self.site.modal_open}
                    on_close={on_close_modal}
                    inquiry={inquiry}
                    status={status}
                    on_change={on_change}
                    on_submit={on_submit}
                />
            </>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if self.reset_timer.take().is_some() {
            debug!("Dropped pending form reset on teardown");
        }
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::get_log_level()).expect("error initializing log");

    info!("Starting application");
    debug!("Relaying inquiries to {}", config::get_relay_url());
    yew::Renderer::<App>::new().render();
}
