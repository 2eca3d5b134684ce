//! Order lead-capture form state.
//!
//! The form holds seven named text fields and a terminal `submitted` flag.
//! Submitting only flips the flag and hands back a snapshot of the fields;
//! delivery of that snapshot is the job of an
//! [`OrderSubmitter`](crate::submit::OrderSubmitter).

use serde::Serialize;
use std::fmt;

/// A named field of the order form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderField {
    Name,
    Phone,
    Email,
    From,
    To,
    Weight,
    Comment,
}

impl OrderField {
    /// All fields, in form order.
    pub const ALL: [OrderField; 7] = [
        OrderField::Name,
        OrderField::Phone,
        OrderField::Email,
        OrderField::From,
        OrderField::To,
        OrderField::Weight,
        OrderField::Comment,
    ];

    /// Returns the form control name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::From => "from",
            Self::To => "to",
            Self::Weight => "weight",
            Self::Comment => "comment",
        }
    }

    /// Returns the visible label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Имя",
            Self::Phone => "Телефон",
            Self::Email => "Email",
            Self::From => "Откуда",
            Self::To => "Куда",
            Self::Weight => "Вес, кг",
            Self::Comment => "Комментарий",
        }
    }

    /// Returns true for fields that must be non-empty on submit.
    #[must_use]
    pub const fn is_required(self) -> bool {
        matches!(self, Self::Name | Self::Phone | Self::From | Self::To)
    }

    const fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for OrderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors from order form operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// One or more required fields are empty.
    MissingRequired { fields: Vec<OrderField> },
    /// The form was already submitted.
    AlreadySubmitted,
}

impl fmt::Display for OrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRequired { fields } => {
                let names: Vec<&str> = fields.iter().map(|field| field.name()).collect();
                write!(f, "required fields are empty: {}", names.join(", "))
            }
            Self::AlreadySubmitted => write!(f, "order form was already submitted"),
        }
    }
}

impl std::error::Error for OrderError {}

/// Snapshot of a submitted order, handed to the submission boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub from: String,
    pub to: String,
    pub weight: String,
    pub comment: String,
}

/// Field values plus the submitted flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderForm {
    values: [String; 7],
    submitted: bool,
}

impl OrderForm {
    /// Creates a form with every field empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of `field`.
    #[must_use]
    pub fn get(&self, field: OrderField) -> &str {
        &self.values[field.slot()]
    }

    /// Overwrites `field`, leaving the others untouched.
    ///
    /// Ignored once the form is submitted.
    pub fn set(&mut self, field: OrderField, value: impl Into<String>) {
        if self.submitted {
            return;
        }
        self.values[field.slot()] = value.into();
    }

    /// Returns true once the form has been submitted.
    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Returns the required fields that are still empty, in form order.
    #[must_use]
    pub fn missing_required(&self) -> Vec<OrderField> {
        OrderField::ALL
            .into_iter()
            .filter(|field| field.is_required() && self.get(*field).is_empty())
            .collect()
    }

    /// Submits the form.
    ///
    /// Only emptiness of the required fields is checked, matching what a
    /// browser `required` attribute enforces. On success the form becomes
    /// submitted for good and a snapshot of every field is returned.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::MissingRequired`] if a required field is empty,
    /// or [`OrderError::AlreadySubmitted`] on a repeated submit.
    pub fn submit(&mut self) -> crate::Result<OrderRequest, OrderError> {
        if self.submitted {
            return Err(OrderError::AlreadySubmitted.into());
        }
        let missing = self.missing_required();
        if !missing.is_empty() {
            return Err(OrderError::MissingRequired { fields: missing }.into());
        }
        self.submitted = true;
        Ok(self.request())
    }

    fn request(&self) -> OrderRequest {
        let value = |field: OrderField| self.get(field).to_string();
        OrderRequest {
            name: value(OrderField::Name),
            phone: value(OrderField::Phone),
            email: value(OrderField::Email),
            from: value(OrderField::From),
            to: value(OrderField::To),
            weight: value(OrderField::Weight),
            comment: value(OrderField::Comment),
        }
    }
}
