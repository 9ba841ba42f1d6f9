use serde::Serialize;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::machine::{Attempt, FormKind, FormMachine};
use super::status::StatusBanner;
use super::validation::{require_email, require_text, ValidationError};
use crate::config;
use crate::sink::{SinkError, SupabaseClient};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct ContactRecord {
    pub name: String,
    pub email: String,
    pub message: String,
}

pub struct Contact;

impl FormKind for Contact {
    type Fields = ContactFields;
    type Record = ContactRecord;

    const TABLE: &'static str = config::CONTACT_TABLE;
    const LABEL: &'static str = "Contact";
    const SUCCESS_MESSAGE: &'static str =
        "Thank you for your message! We'll get back to you soon.";

    fn validate(fields: &ContactFields) -> Result<ContactRecord, ValidationError> {
        require_text(&fields.name, ValidationError::MissingName)?;
        require_email(&fields.email)?;
        require_text(&fields.message, ValidationError::MissingMessage)?;

        Ok(ContactRecord {
            name: fields.name.clone(),
            email: fields.email.clone(),
            message: fields.message.clone(),
        })
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub sink: SupabaseClient,
}

pub enum ContactMsg {
    SetName(String),
    SetEmail(String),
    SetMessage(String),
    Submit,
    Settled(Result<(), SinkError>),
}

pub struct ContactForm {
    form: FormMachine<Contact>,
}

impl Component for ContactForm {
    type Message = ContactMsg;
    type Properties = ContactFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: FormMachine::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactMsg::SetName(name) => {
                self.form.fields_mut().name = name;
                true
            }
            ContactMsg::SetEmail(email) => {
                self.form.fields_mut().email = email;
                true
            }
            ContactMsg::SetMessage(message) => {
                self.form.fields_mut().message = message;
                true
            }
            ContactMsg::Submit => match self.form.begin_insert(ctx.props().sink.clone()) {
                Attempt::Busy => false,
                Attempt::Rejected => true,
                Attempt::Dispatch(insert) => {
                    ctx.link().send_future(async move { ContactMsg::Settled(insert.await) });
                    true
                }
            },
            ContactMsg::Settled(result) => {
                self.form.settle(result);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let submitting = self.form.is_submitting();
        let fields = self.form.fields();
        let link = ctx.link();

        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactMsg::Submit
        });

        html! {
            <form class="contact-form fade-in" data-reveal="contact-form" onsubmit={onsubmit}>
                <div class="contact-row">
                    <label>
                        <span>{"Your Name"}</span>
                        <input
                            type="text"
                            placeholder="John Doe"
                            value={fields.name.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                ContactMsg::SetName(input.value())
                            })}
                        />
                    </label>
                    <label>
                        <span>{"Your Email"}</span>
                        <input
                            type="email"
                            placeholder="john@example.com"
                            value={fields.email.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                ContactMsg::SetEmail(input.value())
                            })}
                        />
                    </label>
                </div>
                <label>
                    <span>{"Your Message"}</span>
                    <textarea
                        placeholder="Tell us what's on your mind..."
                        rows="4"
                        value={fields.message.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            let input: HtmlTextAreaElement = e.target_unchecked_into();
                            ContactMsg::SetMessage(input.value())
                        })}
                    />
                </label>
                <button type="submit" class="primary-button" disabled={submitting}>
                    { if submitting { "Sending..." } else { "Send Message" } }
                </button>
                if let Some(status) = self.form.status() {
                    <StatusBanner status={status.clone()} />
                }
            </form>
        }
    }
}
