use yew::prelude::*;

use crate::components::inquiry_form::{FormVariant, InquiryForm};
use crate::inquiry::{Inquiry, InquiryField};
use crate::lifecycle::SubmissionStatus;

#[derive(Properties, PartialEq)]
pub struct PartnershipModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub inquiry: Inquiry,
    pub status: SubmissionStatus,
    pub on_change: Callback<(InquiryField, String)>,
    pub on_submit: Callback<()>,
}

#[function_component(PartnershipModal)]
pub fn partnership_modal(props: &PartnershipModalProps) -> Html {
    if !props.open {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal">
            <div class="modal__backdrop" onclick={close.clone()}></div>
            <div class="modal__panel">
                <button class="modal__close" onclick={close}>{"✕"}</button>

                <div class="modal__intro">
                    <span class="modal__eyebrow">{"Strategic Partnership"}</span>
                    <h3 class="modal__title">
                        {"Join the Future"}<br/>{"of "}<span class="modal__accent">{"Education"}</span>{"."}
                    </h3>
                    <p class="modal__lede">
                        {"Our consultants will reach out to discuss how Bayl can integrate with your institutional vision."}
                    </p>
                </div>

                <InquiryForm
                    variant={FormVariant::Modal}
                    inquiry={props.inquiry.clone()}
                    status={props.status}
                    on_change={props.on_change.clone()}
                    on_submit={props.on_submit.clone()}
                />
            </div>
            <style>
                {r#"
                .modal {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 0 1rem;
                }
                .modal__backdrop {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.95);
                    backdrop-filter: blur(12px);
                }
                .modal__panel {
                    position: relative;
                    width: 100%;
                    max-width: 48rem;
                    max-height: 90vh;
                    overflow-y: auto;
                    background: #ffffff;
                    color: #0a0a0a;
                    padding: 3.5rem;
                    border-radius: 2px;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
                    animation: modal-in 0.3s ease-out;
                }
                @keyframes modal-in {
                    from { transform: scale(0.95); opacity: 0; }
                    to { transform: scale(1); opacity: 1; }
                }
                .modal__close {
                    position: absolute;
                    top: 1.5rem;
                    right: 1.5rem;
                    padding: 0.5rem;
                    background: none;
                    border: none;
                    border-radius: 9999px;
                    font-size: 1.25rem;
                    cursor: pointer;
                }
                .modal__close:hover {
                    background: #f3f4f6;
                }
                .modal__intro {
                    margin-bottom: 3rem;
                }
                .modal__eyebrow {
                    display: block;
                    font-size: 10px;
                    font-weight: 700;
                    color: #94a3b8;
                    text-transform: uppercase;
                    letter-spacing: 0.4em;
                    margin-bottom: 1rem;
                }
                .modal__title {
                    font-family: Georgia, serif;
                    font-size: 3rem;
                    line-height: 1.2;
                    margin: 0 0 1rem;
                }
                .modal__accent {
                    font-style: italic;
                    color: #9ca3af;
                }
                .modal__lede {
                    max-width: 28rem;
                    font-size: 0.875rem;
                    line-height: 1.6;
                    color: #64748b;
                }
                "#}
            </style>
        </div>
    }
}
