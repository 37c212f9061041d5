//! Product validation shared by both sides of the submission pipeline.
//!
//! Both variants evaluate [`rules::PRODUCT_RULES`]; they differ only in their
//! [`FilePolicy`]. Validation never stops at the first failing field: every
//! violation is collected and returned in rule order.

use thiserror::Error;
use validator::{ValidateLength, ValidateRange};

use crate::domain::asset::AssetFile;

pub mod rules;
mod sanitize;

pub use rules::Field;
use rules::{
    Constraint, FILE_INVALID_SELECTION, FILE_INVALID_UPLOAD, FILE_REQUIRED, FieldRule,
    PRICE_NOT_A_NUMBER, PRODUCT_RULES,
};

/// How the `file` field treats a value that has not been chosen yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilePolicy {
    /// Client side: a missing file is pending rather than invalid.
    LenientPending,
    /// Server side: a missing file is an error and the value must be a real
    /// file part.
    StrictRequired,
}

/// Raw price value before coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum PriceInput {
    Missing,
    Number(f64),
    Text(String),
}

/// Raw `file` value before validation.
#[derive(Debug, Clone, PartialEq)]
pub enum FileInput {
    Missing,
    /// Something was sent under the `file` name, but not a file.
    NotAFile,
    File(AssetFile),
}

/// Unvalidated product payload, from either the draft or a multipart body.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCandidate {
    pub name_product: Option<String>,
    pub description: Option<String>,
    pub price: PriceInput,
    pub file: FileInput,
}

/// Normalized payload that passed every rule.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidProduct {
    pub name_product: String,
    pub description: String,
    pub price: f64,
    /// Always present under [`FilePolicy::StrictRequired`].
    pub file: Option<AssetFile>,
}

/// A violation of one field rule.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

/// Every violation found in a candidate, in rule order.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("validation failed with {} error(s)", .errors.len())]
pub struct ValidationFailure {
    errors: Vec<FieldError>,
}

impl ValidationFailure {
    pub fn single(field: Field, message: impl Into<String>) -> Self {
        Self {
            errors: vec![FieldError {
                field,
                message: message.into(),
            }],
        }
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn messages(&self) -> Vec<String> {
        self.errors
            .iter()
            .map(|error| error.message.clone())
            .collect()
    }
}

pub type ValidationResult = Result<ValidProduct, ValidationFailure>;

/// Validate `candidate` against the full rule set.
pub fn validate(candidate: ProductCandidate, policy: FilePolicy) -> ValidationResult {
    let normalized = Normalized::from_candidate(&candidate);

    let errors: Vec<FieldError> = PRODUCT_RULES
        .iter()
        .filter_map(|rule| normalized.evaluate(rule, policy))
        .collect();

    if !errors.is_empty() {
        return Err(ValidationFailure { errors });
    }

    let price = match normalized.price {
        Price::Number(value) => value,
        Price::Missing | Price::NotANumber => 0.0,
    };
    let Normalized {
        name_product,
        description,
        ..
    } = normalized;

    Ok(ValidProduct {
        name_product: name_product.unwrap_or_default(),
        description: description.unwrap_or_default(),
        price,
        file: match candidate.file {
            FileInput::File(file) => Some(file),
            FileInput::Missing | FileInput::NotAFile => None,
        },
    })
}

/// Validate a single field, for inline feedback while the form is edited.
pub fn validate_field(
    candidate: &ProductCandidate,
    field: Field,
    policy: FilePolicy,
) -> Option<FieldError> {
    let rule = rules::rule_for(field)?;
    Normalized::from_candidate(candidate).evaluate(rule, policy)
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Price {
    Missing,
    Number(f64),
    NotANumber,
}

impl Price {
    fn coerce(input: &PriceInput) -> Self {
        match input {
            PriceInput::Missing => Price::Missing,
            PriceInput::Number(value) if value.is_finite() => Price::Number(*value),
            PriceInput::Number(_) => Price::NotANumber,
            PriceInput::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Price::Missing;
                }
                match trimmed.parse::<f64>() {
                    Ok(value) if value.is_finite() => Price::Number(value),
                    _ => Price::NotANumber,
                }
            }
        }
    }
}

enum Value<'a> {
    Text(Option<&'a String>),
    Price(Price),
    File(&'a FileInput),
}

enum Check {
    Pass,
    /// Stop checking this field without reporting anything.
    Pending,
    Fail(String),
}

struct Normalized<'a> {
    name_product: Option<String>,
    description: Option<String>,
    price: Price,
    file: &'a FileInput,
}

impl<'a> Normalized<'a> {
    fn from_candidate(candidate: &'a ProductCandidate) -> Self {
        Self {
            name_product: candidate.name_product.as_deref().map(sanitize::inline_text),
            description: candidate
                .description
                .as_deref()
                .map(sanitize::multiline_text),
            price: Price::coerce(&candidate.price),
            file: &candidate.file,
        }
    }

    fn value(&self, field: Field) -> Value<'_> {
        match field {
            Field::NameProduct => Value::Text(self.name_product.as_ref()),
            Field::Description => Value::Text(self.description.as_ref()),
            Field::Price => Value::Price(self.price),
            Field::File => Value::File(self.file),
        }
    }

    fn evaluate(&self, rule: &FieldRule, policy: FilePolicy) -> Option<FieldError> {
        let value = self.value(rule.field);
        for constraint in rule.constraints {
            match check(*constraint, rule.field, &value, policy) {
                Check::Pass => continue,
                Check::Pending => return None,
                Check::Fail(message) => {
                    return Some(FieldError {
                        field: rule.field,
                        message,
                    });
                }
            }
        }
        None
    }
}

fn check(constraint: Constraint, field: Field, value: &Value<'_>, policy: FilePolicy) -> Check {
    let key = field.key();
    match (constraint, value) {
        (Constraint::Required, Value::Text(text)) => {
            if text.is_some_and(|text| !text.is_empty()) {
                Check::Pass
            } else {
                Check::Fail(format!("{key} is a required field"))
            }
        }
        (Constraint::MinLength(min), Value::Text(Some(text))) => {
            if text.validate_length(Some(min), None, None) {
                Check::Pass
            } else {
                Check::Fail(format!("{key} must be at least {min} characters"))
            }
        }
        (Constraint::Required, Value::Price(Price::Missing)) => {
            Check::Fail(format!("{key} is a required field"))
        }
        (Constraint::Numeric, Value::Price(Price::NotANumber)) => {
            Check::Fail(PRICE_NOT_A_NUMBER.to_string())
        }
        (Constraint::Positive, Value::Price(Price::Number(price))) => {
            if price.validate_range(None, None, Some(0.0), None) {
                Check::Pass
            } else {
                Check::Fail(format!("{key} must be a positive number"))
            }
        }
        (Constraint::Required, Value::File(FileInput::Missing)) => match policy {
            FilePolicy::LenientPending => Check::Pending,
            FilePolicy::StrictRequired => Check::Fail(FILE_REQUIRED.to_string()),
        },
        (Constraint::FileObject, Value::File(FileInput::NotAFile)) => match policy {
            FilePolicy::LenientPending => Check::Fail(FILE_INVALID_SELECTION.to_string()),
            FilePolicy::StrictRequired => Check::Fail(FILE_INVALID_UPLOAD.to_string()),
        },
        _ => Check::Pass,
    }
}
