use std::fmt;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use gloo_timers::callback::Timeout;
use log::{debug, error, info};
use thiserror::Error;
use web_sys::{
    Element, HtmlFormElement, HtmlInputElement, HtmlSelectElement, MouseEvent, ScrollLogicalPosition, SubmitEvent,
};
use yew::prelude::*;

use crate::config::{
    CODE_PREFIX, CODE_RANGE, CODE_SUFFIX, FADE_IN_TRANSITION, FADE_OUT_MS, MISSING_FIELDS_ALERT, STAGGER_MS,
};
use crate::error::window;
use crate::scroll::scroll_into_view;
use crate::visibility::use_reveal;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Phone,
    Email,
    Date,
    Reason,
}

impl Field {
    pub const ALL: [Field; 5] = [Field::Name, Field::Phone, Field::Email, Field::Date, Field::Reason];

    /// Element id and form name of the field.
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::Date => "date",
            Field::Reason => "reason",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("required field `{}` is empty", .0.id())]
    MissingField(Field),
}

/// The five booking fields, trimmed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppointmentRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub date: String,
    pub reason: String,
}

impl AppointmentRequest {
    pub fn from_reader(mut read: impl FnMut(Field) -> String) -> Self {
        let mut value = |field| read(field).trim().to_string();
        Self {
            name: value(Field::Name),
            phone: value(Field::Phone),
            email: value(Field::Email),
            date: value(Field::Date),
            reason: value(Field::Reason),
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::Date => &self.date,
            Field::Reason => &self.reason,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match Field::ALL.into_iter().find(|field| self.value(*field).is_empty()) {
            Some(field) => Err(ValidationError::MissingField(field)),
            None => Ok(()),
        }
    }
}

/// Cosmetic booking number shown after a simulated submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmationCode(String);

impl ConfirmationCode {
    pub fn from_draw(draw: u32) -> Self {
        Self(format!("{}{}{}", CODE_PREFIX, draw % CODE_RANGE, CODE_SUFFIX))
    }

    /// Maps a uniform draw in `[0, 1)` onto the code range.
    pub fn from_unit(unit: f64) -> Self {
        let draw = (unit.clamp(0.0, 1.0) * f64::from(CODE_RANGE)).floor() as u32;
        Self::from_draw(draw.min(CODE_RANGE - 1))
    }

    pub fn generate() -> Self {
        let code = Self::from_unit(web_sys::js_sys::Math::random());
        debug_assert!(Self::is_well_formed(code.as_str()));
        code
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_well_formed(code: &str) -> bool {
        code.strip_prefix(CODE_PREFIX)
            .and_then(|rest| rest.strip_suffix(CODE_SUFFIX))
            .map_or(false, |n| (1..=4).contains(&n.len()) && n.bytes().all(|b| b.is_ascii_digit()))
    }
}

impl fmt::Display for ConfirmationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where the form/confirmation cross-fade stands. Transient phases advance
/// on their own after `hold_ms`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Form,
    FormLeaving,
    ConfirmationEntering,
    Confirmed,
    ConfirmationLeaving,
    FormEntering,
}

impl Phase {
    pub fn hold_ms(self) -> Option<u32> {
        match self {
            Phase::FormLeaving | Phase::ConfirmationLeaving => Some(FADE_OUT_MS),
            Phase::ConfirmationEntering | Phase::FormEntering => Some(STAGGER_MS),
            Phase::Form | Phase::Confirmed => None,
        }
    }

    fn next(self) -> Self {
        match self {
            Phase::FormLeaving => Phase::ConfirmationEntering,
            Phase::ConfirmationEntering => Phase::Confirmed,
            Phase::ConfirmationLeaving => Phase::FormEntering,
            Phase::FormEntering => Phase::Form,
            settled => settled,
        }
    }

    pub fn form_style(self) -> String {
        match self {
            Phase::Form => format!("opacity: 1; transform: translateY(0); transition: {};", FADE_IN_TRANSITION),
            Phase::FormLeaving => format!("opacity: 0; transform: translateY(-20px); transition: {};", FADE_IN_TRANSITION),
            Phase::FormEntering => "display: block; opacity: 0; transform: translateY(-20px);".to_string(),
            Phase::ConfirmationEntering | Phase::Confirmed | Phase::ConfirmationLeaving => "display: none;".to_string(),
        }
    }

    pub fn confirmation_style(self) -> String {
        match self {
            Phase::Form | Phase::FormLeaving | Phase::FormEntering => "display: none;".to_string(),
            Phase::ConfirmationEntering => "display: block; opacity: 0; transform: translateY(20px);".to_string(),
            Phase::Confirmed => format!(
                "display: block; opacity: 1; transform: translateY(0); transition: {};",
                FADE_IN_TRANSITION
            ),
            Phase::ConfirmationLeaving => format!(
                "display: block; opacity: 0; transform: translateY(20px); transition: {};",
                FADE_IN_TRANSITION
            ),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Flow {
    pub phase: Phase,
    pub code: Option<ConfirmationCode>,
}

pub enum FlowAction {
    Submit(ConfirmationCode),
    Advance,
    StartNew,
}

impl Reducible for Flow {
    type Action = FlowAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match (self.phase, action) {
            (Phase::Form, FlowAction::Submit(code)) => Rc::new(Flow {
                phase: Phase::FormLeaving,
                code: Some(code),
            }),
            (Phase::Confirmed, FlowAction::StartNew) => Rc::new(Flow {
                phase: Phase::ConfirmationLeaving,
                code: self.code.clone(),
            }),
            (phase, FlowAction::Advance) if phase.hold_ms().is_some() => {
                let phase = phase.next();
                let code = if phase == Phase::Form { None } else { self.code.clone() };
                Rc::new(Flow { phase, code })
            }
            _ => self,
        }
    }
}

/// What a form submission should do.
#[derive(Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The form is mid-transition; the submission is dropped.
    Ignore,
    Alert(ValidationError),
    Confirm,
}

pub fn submit_outcome(phase: Phase, request: &AppointmentRequest) -> SubmitOutcome {
    if phase != Phase::Form {
        return SubmitOutcome::Ignore;
    }
    match request.validate() {
        Ok(()) => SubmitOutcome::Confirm,
        Err(err) => SubmitOutcome::Alert(err),
    }
}

/// Earliest bookable date, as the `min` of the date input.
pub fn min_appointment_date(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%d").to_string()
}

fn read_field(refs: &[NodeRef; 5], field: Field) -> String {
    let node = &refs[field as usize];
    let value = match field {
        Field::Reason => node.cast::<HtmlSelectElement>().map(|select| select.value()),
        _ => node.cast::<HtmlInputElement>().map(|input| input.value()),
    };
    value.unwrap_or_default()
}

fn alert(message: &str) {
    if let Err(e) = window().and_then(|w| Ok(w.alert_with_message(message)?)) {
        error!("Could not show alert: {}", e);
    }
}

fn scroll_ref_into_view(node: &NodeRef) {
    if let Some(element) = node.cast::<Element>() {
        scroll_into_view(&element, ScrollLogicalPosition::Nearest);
    }
}

#[function_component(AppointmentSection)]
pub fn appointment_section() -> Html {
    let flow = use_reducer(Flow::default);
    let container_ref = use_node_ref();
    let form_ref = use_node_ref();
    let confirmation_ref = use_node_ref();
    let field_refs = use_state(|| Field::ALL.map(|_| NodeRef::default()));
    let min_date = use_state(|| min_appointment_date(Utc::now()));
    let reveal = use_reveal(container_ref.clone());

    // Each transient phase schedules the next; entering phases scroll the
    // incoming panel into view once it is displayed.
    {
        let dispatcher = flow.dispatcher();
        let form_ref = form_ref.clone();
        let confirmation_ref = confirmation_ref.clone();
        use_effect_with_deps(
            move |phase: &Phase| {
                match phase {
                    Phase::ConfirmationEntering => scroll_ref_into_view(&confirmation_ref),
                    Phase::FormEntering => {
                        if let Some(form) = form_ref.cast::<HtmlFormElement>() {
                            form.reset();
                        }
                        scroll_ref_into_view(&form_ref);
                    }
                    _ => {}
                }
                let timeout = phase
                    .hold_ms()
                    .map(|ms| Timeout::new(ms, move || dispatcher.dispatch(FlowAction::Advance)));
                move || drop(timeout)
            },
            flow.phase,
        );
    }

    let onsubmit = {
        let flow = flow.clone();
        let field_refs = field_refs.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = AppointmentRequest::from_reader(|field| read_field(&field_refs, field));
            match submit_outcome(flow.phase, &request) {
                SubmitOutcome::Ignore => {}
                SubmitOutcome::Alert(err) => {
                    debug!("Appointment not submitted: {}", err);
                    alert(MISSING_FIELDS_ALERT);
                }
                SubmitOutcome::Confirm => {
                    let code = ConfirmationCode::generate();
                    info!("Appointment confirmed with number {}", code);
                    flow.dispatch(FlowAction::Submit(code));
                }
            }
        })
    };

    let start_new = {
        let flow = flow.clone();
        Callback::from(move |_: MouseEvent| flow.dispatch(FlowAction::StartNew))
    };

    let [name_ref, phone_ref, email_ref, date_ref, reason_ref] = (*field_refs).clone();
    let code = flow.code.as_ref().map(|code| code.to_string()).unwrap_or_default();

    html! {
        <section id="appointment" class="appointment-section">
            <div ref={container_ref} class={classes!("appointment-container", reveal.class())}>
                <h2>{"Book an appointment"}</h2>
                <form
                    id="appointment-form"
                    ref={form_ref}
                    style={flow.phase.form_style()}
                    onsubmit={onsubmit}
                >
                    <label for="name">{"Full name"}</label>
                    <input ref={name_ref} type="text" id="name" name="name" autocomplete="name" />

                    <label for="phone">{"Phone"}</label>
                    <input ref={phone_ref} type="tel" id="phone" name="phone" autocomplete="tel" />

                    <label for="email">{"Email"}</label>
                    <input ref={email_ref} type="email" id="email" name="email" autocomplete="email" />

                    <label for="date">{"Preferred date"}</label>
                    <input ref={date_ref} type="date" id="date" name="date" min={(*min_date).clone()} />

                    <label for="reason">{"Reason for visit"}</label>
                    <select ref={reason_ref} id="reason" name="reason">
                        <option value="" selected={true}>{"Select a reason"}</option>
                        <option value="checkup">{"General check-up"}</option>
                        <option value="consultation">{"Consultation"}</option>
                        <option value="vaccination">{"Vaccination"}</option>
                        <option value="follow-up">{"Follow-up visit"}</option>
                    </select>

                    <button type="submit" class="submit-button">{"Request appointment"}</button>
                </form>

                <div
                    id="confirmation-message"
                    ref={confirmation_ref}
                    class="confirmation-message"
                    style={flow.phase.confirmation_style()}
                >
                    <h3>{"Appointment requested"}</h3>
                    <p>
                        {"Your appointment number is "}
                        <strong id="appointment-number">{ code }</strong>
                    </p>
                    <p>{"We'll call you to confirm the time."}</p>
                    <button id="new-appointment" type="button" onclick={start_new}>
                        {"Book another appointment"}
                    </button>
                </div>
            </div>
        </section>
    }
}
