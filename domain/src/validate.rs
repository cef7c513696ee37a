//! Lightweight input validation helpers. Keep logic minimal and deterministic.

use crate::model::{AppointmentPatch, NewAppointment, Testimonial};
use crate::{CoreError, FieldError};

/// Bookable slot start times, identical at every branch.
pub const TIME_SLOTS: [&str; 18] = [
    "09:00", "09:30", "10:00", "10:30", "11:00", "11:30", "14:00", "14:30", "15:00", "15:30",
    "16:00", "16:30", "17:00", "17:30", "18:00", "18:30", "19:00", "19:30",
];

/// Minimum password length accepted by the login form.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Loose email shape check: some whitespace-free run of the input reads
/// `x@y.z`, each part at least one character. The match is unanchored, so
/// surrounding text and trailing dots are tolerated.
pub fn is_email_shaped(s: &str) -> bool {
    s.split_whitespace().any(|run| {
        let bytes = run.as_bytes();
        let Some(at) = bytes.iter().skip(1).position(|&b| b == b'@') else {
            return false;
        };
        let at = at + 1;
        bytes.len() >= at + 3 && bytes[at + 2..bytes.len() - 1].contains(&b'.')
    })
}

/// Collects field errors and turns them into a single `CoreError::Invalid`.
#[derive(Default)]
struct Errors(Vec<FieldError>);

impl Errors {
    fn push(&mut self, field: &'static str, message: &str) {
        self.0.push(FieldError {
            field,
            message: message.to_string(),
        });
    }

    fn require(&mut self, field: &'static str, value: &str) -> bool {
        if value.trim().is_empty() {
            self.push(field, "is required");
            return false;
        }
        true
    }

    fn email(&mut self, field: &'static str, value: &str) {
        if self.require(field, value) && !is_email_shaped(value.trim()) {
            self.push(field, "must be a valid email address");
        }
    }

    fn time_slot(&mut self, field: &'static str, value: &str) {
        if self.require(field, value) && !TIME_SLOTS.contains(&value) {
            self.push(field, "is not a bookable time slot");
        }
    }

    fn finish(self) -> Result<(), CoreError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Invalid(self.0))
        }
    }
}

/// Validate the login form before credentials are compared.
pub fn validate_login_form(email: &str, password: &str) -> Result<(), CoreError> {
    let mut errors = Errors::default();
    errors.email("email", email);
    if password.is_empty() {
        errors.push("password", "is required");
    } else if password.chars().count() < MIN_PASSWORD_LEN {
        errors.push("password", "must be at least 6 characters");
    }
    errors.finish()
}

/// Validate booking data for a new appointment.
pub fn validate_new_appointment(input: &NewAppointment) -> Result<(), CoreError> {
    let mut errors = Errors::default();
    errors.require("userName", &input.user_name);
    errors.require("userPhone", &input.user_phone);
    errors.require("serviceId", &input.service_id);
    if input.date.is_none() {
        errors.push("date", "is required");
    }
    errors.time_slot("time", &input.time);
    errors.finish()
}

/// Validate the fields an appointment edit provides; omitted fields keep
/// their stored values.
pub fn validate_appointment_patch(patch: &AppointmentPatch) -> Result<(), CoreError> {
    let mut errors = Errors::default();
    let required = [
        ("userName", &patch.user_name),
        ("userPhone", &patch.user_phone),
        ("serviceId", &patch.service_id),
    ];
    for (field, value) in required {
        if let Some(value) = value {
            errors.require(field, value);
        }
    }
    if let Some(time) = &patch.time {
        errors.time_slot("time", time);
    }
    errors.finish()
}

/// Validate a testimonial before it is stored.
pub fn validate_testimonial(t: &Testimonial) -> Result<(), CoreError> {
    let mut errors = Errors::default();
    errors.require("name", &t.name);
    errors.require("content", &t.content);
    if !(1..=5).contains(&t.rating) {
        errors.push("rating", "must be between 1 and 5");
    }
    errors.finish()
}

/// Validate a message submitted through the public contact form.
pub fn validate_contact_message(name: &str, email: &str, message: &str) -> Result<(), CoreError> {
    let mut errors = Errors::default();
    errors.require("name", name);
    errors.email("email", email);
    errors.require("message", message);
    errors.finish()
}
