use log::warn;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::inquiry::{Inquiry, InquiryField};
use crate::lifecycle::SubmissionStatus;

/// The two surfaces that render the inquiry fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormVariant {
    /// Contact section on the home view.
    Inline,
    /// Partnership modal.
    Modal,
}

impl FormVariant {
    fn modifier(self) -> &'static str {
        match self {
            FormVariant::Inline => "inquiry-form--inline",
            FormVariant::Modal => "inquiry-form--modal",
        }
    }

    fn idle_label(self) -> &'static str {
        match self {
            FormVariant::Inline => "Send Inquiry →",
            FormVariant::Modal => "Initiate Partnership →",
        }
    }

    fn label(self, field: InquiryField) -> &'static str {
        match (self, field) {
            (_, InquiryField::Name) => "Full Name",
            (FormVariant::Inline, InquiryField::Institution) => "Institution",
            (FormVariant::Modal, InquiryField::Institution) => "Institution / Company",
            (FormVariant::Inline, InquiryField::ContactEmail) => "Email Address",
            (FormVariant::Modal, InquiryField::ContactEmail) => "Work Email",
            (FormVariant::Inline, InquiryField::Message) => "Briefly tell us what you need",
            (FormVariant::Modal, InquiryField::Message) => "Partnership Objectives",
        }
    }

    fn message_hint(self) -> &'static str {
        match self {
            FormVariant::Inline => "2000 Words Accepted",
            FormVariant::Modal => "Up to 2000 words",
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            FormVariant::Inline => "Briefly outline your current objectives...",
            FormVariant::Modal => "Describe your institutional goals...",
        }
    }

    fn message_rows(self) -> &'static str {
        match self {
            FormVariant::Inline => "6",
            FormVariant::Modal => "8",
        }
    }
}

pub fn button_label(variant: FormVariant, status: SubmissionStatus) -> &'static str {
    match status {
        SubmissionStatus::Idle => variant.idle_label(),
        SubmissionStatus::Sending => "Sending...",
        SubmissionStatus::Sent => "✓ SENT",
        SubmissionStatus::Error => "Error - Try Again",
    }
}

pub fn button_class(status: SubmissionStatus) -> &'static str {
    match status {
        SubmissionStatus::Idle => "submit-button--ready",
        SubmissionStatus::Sending => "submit-button--sending",
        SubmissionStatus::Sent => "submit-button--sent",
        SubmissionStatus::Error => "submit-button--error",
    }
}

#[derive(Properties, PartialEq)]
pub struct InquiryFormProps {
    pub variant: FormVariant,
    pub inquiry: Inquiry,
    pub status: SubmissionStatus,
    pub on_change: Callback<(InquiryField, String)>,
    pub on_submit: Callback<()>,
}

#[function_component(InquiryForm)]
pub fn inquiry_form(props: &InquiryFormProps) -> Html {
    let variant = props.variant;

    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let (name, value) = if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                (input.name(), input.value())
            } else if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
                (area.name(), area.value())
            } else {
                return;
            };
            match name.parse::<InquiryField>() {
                Ok(field) => on_change.emit((field, value)),
                Err(err) => warn!("Dropping edit: {}", err),
            }
        })
    };

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let text_field = |field: InquiryField, kind: &'static str, autocomplete: Option<&'static str>| {
        let autocomplete = match variant {
            FormVariant::Inline => autocomplete,
            FormVariant::Modal => None,
        };
        html! {
            <div class="inquiry-field">
                <label class="inquiry-field__label">{variant.label(field)}</label>
                <input
                    type={kind}
                    name={field.as_str()}
                    required=true
                    autocomplete={autocomplete}
                    value={props.inquiry.get(field).to_string()}
                    oninput={oninput.clone()}
                    class="inquiry-field__input"
                />
            </div>
        }
    };

    html! {
        <form class={classes!("inquiry-form", variant.modifier())} {onsubmit}>
            <div class="inquiry-form__row">
                { text_field(InquiryField::Name, "text", Some("name")) }
                { text_field(InquiryField::Institution, "text", None) }
            </div>
            { text_field(InquiryField::ContactEmail, "email", Some("email")) }
            <div class="inquiry-field">
                <div class="inquiry-field__header">
                    <label class="inquiry-field__label">{variant.label(InquiryField::Message)}</label>
                    <span class="inquiry-field__hint">{variant.message_hint()}</span>
                </div>
                <textarea
                    name={InquiryField::Message.as_str()}
                    required=true
                    rows={variant.message_rows()}
                    value={props.inquiry.message.clone()}
                    oninput={oninput.clone()}
                    placeholder={variant.placeholder()}
                    class="inquiry-field__textarea"
                />
            </div>
            <button
                type="submit"
                disabled={props.status.is_locked()}
                class={classes!("submit-button", button_class(props.status))}
            >
                {button_label(variant, props.status)}
            </button>
            <style>
                {r#"
                .inquiry-form {
                    display: flex;
                    flex-direction: column;
                    gap: 2.5rem;
                }
                .inquiry-form__row {
                    display: grid;
                    grid-template-columns: repeat(2, minmax(0, 1fr));
                    gap: 2.5rem 2rem;
                }
                .inquiry-field {
                    display: flex;
                    flex-direction: column;
                }
                .inquiry-field__header {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-end;
                    margin-bottom: 0.75rem;
                }
                .inquiry-field__label {
                    font-size: 10px;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    color: #64748b;
                    margin-bottom: 0.5rem;
                    transition: color 0.2s;
                }
                .inquiry-field:focus-within .inquiry-field__label {
                    color: #000000;
                }
                .inquiry-field__hint {
                    font-size: 9px;
                    font-family: monospace;
                    font-style: italic;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    color: #cbd5e1;
                }
                .inquiry-field__input {
                    width: 100%;
                    background: transparent;
                    border: none;
                    border-bottom: 1px solid #e2e8f0;
                    padding: 0.5rem 0;
                    font-size: 1.125rem;
                }
                .inquiry-field__input:focus {
                    outline: none;
                    border-bottom-color: #000000;
                }
                .inquiry-field__textarea {
                    width: 100%;
                    background: #f8fafc;
                    border: 1px solid #f1f5f9;
                    padding: 1.25rem;
                    font-size: 1rem;
                    line-height: 1.6;
                    resize: vertical;
                    min-height: 180px;
                    border-radius: 2px;
                }
                .inquiry-form--modal .inquiry-field__textarea {
                    min-height: 240px;
                }
                .inquiry-field__textarea:focus {
                    outline: none;
                    border-color: #000000;
                    background: #ffffff;
                }
                .submit-button {
                    width: 100%;
                    padding: 1.5rem 0;
                    margin-top: 1rem;
                    border: none;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.25em;
                    font-size: 11px;
                    color: #ffffff;
                    background: #000000;
                    transition: all 0.3s;
                    cursor: pointer;
                }
                .submit-button--ready:hover {
                    background: #27272a;
                    transform: scale(1.01);
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }
                .submit-button--sending {
                    cursor: wait;
                }
                .submit-button--sent {
                    cursor: default;
                }
                .submit-button--error {
                    background: #ef4444;
                }
                @media (max-width: 767px) {
                    .inquiry-form__row {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_label_depends_on_the_surface() {
        assert_eq!(button_label(FormVariant::Inline, SubmissionStatus::Idle), "Send Inquiry →");
        assert_eq!(
            button_label(FormVariant::Modal, SubmissionStatus::Idle),
            "Initiate Partnership →"
        );
    }

    #[test]
    fn other_labels_are_shared() {
        for status in [SubmissionStatus::Sending, SubmissionStatus::Sent, SubmissionStatus::Error] {
            assert_eq!(
                button_label(FormVariant::Inline, status),
                button_label(FormVariant::Modal, status)
            );
        }
        assert_eq!(button_label(FormVariant::Inline, SubmissionStatus::Error), "Error - Try Again");
    }

    #[test]
    fn error_button_is_red() {
        assert_eq!(button_class(SubmissionStatus::Error), "submit-button--error");
    }
}
