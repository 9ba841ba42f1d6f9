use serde::Serialize;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::machine::{Attempt, FormKind, FormMachine};
use super::status::StatusBanner;
use super::validation::{require_email, ValidationError};
use crate::config;
use crate::sink::{SinkError, SupabaseClient};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct WaitlistFields {
    pub email: String,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct WaitlistRecord {
    pub email: String,
}

pub struct Waitlist;

impl FormKind for Waitlist {
    type Fields = WaitlistFields;
    type Record = WaitlistRecord;

    const TABLE: &'static str = config::WAITLIST_TABLE;
    const LABEL: &'static str = "Waitlist";
    const SUCCESS_MESSAGE: &'static str = "Thank you for joining our waitlist!";
    const DUPLICATE_MESSAGE: Option<&'static str> = Some("You're already on our waitlist!");

    fn validate(fields: &WaitlistFields) -> Result<WaitlistRecord, ValidationError> {
        require_email(&fields.email)?;
        Ok(WaitlistRecord {
            email: fields.email.clone(),
        })
    }
}

#[derive(Properties, PartialEq)]
pub struct WaitlistFormProps {
    pub sink: SupabaseClient,
}

pub enum WaitlistMsg {
    SetEmail(String),
    Submit,
    Settled(Result<(), SinkError>),
}

pub struct WaitlistForm {
    form: FormMachine<Waitlist>,
}

impl Component for WaitlistForm {
    type Message = WaitlistMsg;
    type Properties = WaitlistFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: FormMachine::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            WaitlistMsg::SetEmail(email) => {
                self.form.fields_mut().email = email;
                true
            }
            WaitlistMsg::Submit => match self.form.begin_insert(ctx.props().sink.clone()) {
                Attempt::Busy => false,
                Attempt::Rejected => true,
                Attempt::Dispatch(insert) => {
                    ctx.link().send_future(async move { WaitlistMsg::Settled(insert.await) });
                    true
                }
            },
            WaitlistMsg::Settled(result) => {
                self.form.settle(result);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let submitting = self.form.is_submitting();
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            WaitlistMsg::Submit
        });
        let oninput = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            WaitlistMsg::SetEmail(input.value())
        });

        html! {
            <div class="waitlist">
                <form class="waitlist-form" onsubmit={onsubmit}>
                    <input
                        type="email"
                        placeholder="Enter your email address"
                        value={self.form.fields().email.clone()}
                        oninput={oninput}
                        disabled={submitting}
                    />
                    <button type="submit" class="primary-button" disabled={submitting}>
                        { if submitting { "Submitting..." } else { "Get Early Access" } }
                    </button>
                </form>
                {
                    if let Some(status) = self.form.status() {
                        html! { <StatusBanner status={status.clone()} /> }
                    } else {
                        html! { <p class="waitlist-hint">{"Selected users will receive beta access"}</p> }
                    }
                }
            </div>
        }
    }
}
