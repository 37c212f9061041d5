//! Submitting side of the product pipeline.
//!
//! [`SubmissionController`] owns the form draft, validates it with the
//! lenient rule variant, sends it through a [`ProductApi`] and reports every
//! outcome to a [`NotificationSink`].

use crate::domain::asset::AssetFile;
use crate::domain::product::ProductRecord;
use crate::domain::response::{MESSAGE_CREATED, ProductResponse};
use crate::validation::{
    self, FieldError, FileInput, FilePolicy, PriceInput, ProductCandidate, rules::PRODUCT_RULES,
};

pub mod api;
pub mod notify;
pub mod preview;

#[cfg(test)]
pub mod mock;

pub use api::{HttpProductApi, ProductApi, ProductPayload, TransportError};
pub use notify::{LogNotifier, NotificationSink, Severity};
pub use preview::{PreviewProvider, TempFilePreviews};

pub const MESSAGE_FILE_NOT_SELECTED: &str = "Debes seleccionar un archivo";
pub const MESSAGE_SUBMIT_FAILED: &str = "Error al crear producto";

/// In-progress form state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductDraft {
    pub name_product: String,
    pub description: String,
    pub price: f64,
    pub file: Option<AssetFile>,
}

impl ProductDraft {
    fn to_candidate(&self) -> ProductCandidate {
        ProductCandidate {
            name_product: Some(self.name_product.clone()),
            description: Some(self.description.clone()),
            price: PriceInput::Number(self.price),
            file: match &self.file {
                Some(file) => FileInput::File(file.clone()),
                None => FileInput::Missing,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

/// Result of one call to [`SubmissionController::submit`].
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The server stored the product.
    Created(Option<ProductRecord>),
    /// The draft failed validation; nothing was sent.
    Invalid(Vec<String>),
    /// The draft passed validation but no file was chosen; nothing was sent.
    FileNotSelected,
    /// The server answered with a failure envelope.
    Rejected(Vec<String>),
    /// No envelope could be obtained.
    TransportFailed,
    /// A submission was already in progress; nothing happened.
    Busy,
}

/// Keeps the submit control disabled for as long as it is alive.
struct SubmitGuard<'a> {
    state: &'a mut SubmissionState,
}

impl<'a> SubmitGuard<'a> {
    fn engage(state: &'a mut SubmissionState) -> Self {
        *state = SubmissionState::Validating;
        Self { state }
    }

    fn advance(&mut self, next: SubmissionState) {
        log::debug!("Submission state {:?} -> {:?}", self.state, next);
        *self.state = next;
    }
}

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        *self.state = SubmissionState::Idle;
    }
}

/// Drives a single product form.
///
/// `submit` takes `&mut self`, so one form instance never runs two
/// submissions at once; the state flag refuses re-entry as well.
pub struct SubmissionController<A, N, P: PreviewProvider> {
    api: A,
    notifier: N,
    previews: P,
    draft: ProductDraft,
    preview: Option<P::Handle>,
    state: SubmissionState,
    last_result: Option<SubmissionState>,
}

impl<A, N, P> SubmissionController<A, N, P>
where
    A: ProductApi,
    N: NotificationSink,
    P: PreviewProvider,
{
    pub fn new(api: A, notifier: N, previews: P) -> Self {
        Self {
            api,
            notifier,
            previews,
            draft: ProductDraft::default(),
            preview: None,
            state: SubmissionState::Idle,
            last_result: None,
        }
    }

    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// `Succeeded` or `Failed` for the most recent submission.
    pub fn last_result(&self) -> Option<SubmissionState> {
        self.last_result
    }

    pub fn is_submit_enabled(&self) -> bool {
        self.state == SubmissionState::Idle
    }

    pub fn preview(&self) -> Option<&P::Handle> {
        self.preview.as_ref()
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn previews(&self) -> &P {
        &self.previews
    }

    pub fn set_name_product(&mut self, value: impl Into<String>) {
        self.draft.name_product = value.into();
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.draft.description = value.into();
    }

    pub fn set_price(&mut self, value: f64) {
        self.draft.price = value;
    }

    /// Replace the selected file, releasing the previous preview.
    pub fn select_file(&mut self, file: Option<AssetFile>) {
        self.release_preview();
        self.preview = file
            .as_ref()
            .filter(|file| file.is_image())
            .and_then(|file| self.previews.create(file));
        self.draft.file = file;
    }

    /// Inline errors for the current draft; a file not chosen yet is not
    /// reported.
    pub fn field_errors(&self) -> Vec<FieldError> {
        let candidate = self.draft.to_candidate();
        PRODUCT_RULES
            .iter()
            .filter_map(|rule| {
                validation::validate_field(&candidate, rule.field, FilePolicy::LenientPending)
            })
            .collect()
    }

    fn release_preview(&mut self) {
        if let Some(handle) = self.preview.take() {
            self.previews.revoke(handle);
        }
    }

    /// Validate the draft and, if it passes, send it to the server.
    ///
    /// The submit control is disabled for the duration of the call and
    /// enabled again on every exit path.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if !self.is_submit_enabled() {
            return SubmitOutcome::Busy;
        }

        let Self {
            api,
            notifier,
            previews,
            draft,
            preview,
            state,
            last_result,
        } = self;
        let mut guard = SubmitGuard::engage(state);

        let outcome = match validation::validate(draft.to_candidate(), FilePolicy::LenientPending)
        {
            Err(failure) => {
                let messages = failure.messages();
                for message in &messages {
                    notifier.notify(message, Severity::Error);
                }
                SubmitOutcome::Invalid(messages)
            }
            Ok(product) => match product.file {
                None => {
                    notifier.notify(MESSAGE_FILE_NOT_SELECTED, Severity::Error);
                    SubmitOutcome::FileNotSelected
                }
                Some(file) => {
                    guard.advance(SubmissionState::Submitting);
                    let payload = ProductPayload {
                        name_product: product.name_product,
                        description: product.description,
                        price: product.price,
                        file,
                    };

                    match api.create_product(payload).await {
                        Ok(response) if response.success => {
                            *draft = ProductDraft::default();
                            if let Some(handle) = preview.take() {
                                previews.revoke(handle);
                            }
                            notifier.notify(success_message(&response), Severity::Success);
                            SubmitOutcome::Created(response.data)
                        }
                        Ok(response) => {
                            let messages = failure_messages(response);
                            for message in &messages {
                                notifier.notify(message, Severity::Error);
                            }
                            SubmitOutcome::Rejected(messages)
                        }
                        Err(err) => {
                            log::error!("Failed to submit product: {err}");
                            notifier.notify(MESSAGE_SUBMIT_FAILED, Severity::Error);
                            SubmitOutcome::TransportFailed
                        }
                    }
                }
            },
        };

        let finished = match outcome {
            SubmitOutcome::Created(_) => SubmissionState::Succeeded,
            _ => SubmissionState::Failed,
        };
        guard.advance(finished);
        *last_result = Some(finished);

        outcome
    }
}

fn success_message(response: &ProductResponse) -> &str {
    if response.message.is_empty() {
        MESSAGE_CREATED
    } else {
        &response.message
    }
}

fn failure_messages(response: ProductResponse) -> Vec<String> {
    match response.errors {
        Some(errors) if !errors.is_empty() => errors,
        _ if !response.message.is_empty() => vec![response.message],
        _ => vec![MESSAGE_SUBMIT_FAILED.to_string()],
    }
}
