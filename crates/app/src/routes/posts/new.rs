use std::future::Future;

use dioxus::prelude::*;
use shared_types::{AppError, FormField, FormState, Post, PostField, PostFormValues};
use shared_ui::components::{
    Button, ButtonType, ButtonVariant, Form, FormActions, PageHeader, PageTitle, TextField,
};

use crate::routes::Route;

/// Hand validated values to the dispatcher, then navigate once it succeeds.
///
/// `navigate` is only called after `dispatch` resolves `Ok`. A failed create
/// is returned to the caller without navigating.
pub async fn submit_post<D, Fut, N>(
    values: PostFormValues,
    dispatch: D,
    navigate: N,
) -> Result<Post, AppError>
where
    D: FnOnce(PostFormValues) -> Fut,
    Fut: Future<Output = Result<Post, AppError>>,
    N: FnOnce(),
{
    let post = dispatch(values).await?;
    navigate();
    Ok(post)
}

async fn dispatch_create(values: PostFormValues) -> Result<Post, AppError> {
    server::api::create_post(values)
        .await
        .map_err(|e| AppError::from_server_error_or_generic(&e.to_string()))
}

/// Claim the in-flight slot and pull validated values out of the form.
///
/// Returns `None` while an earlier submission is still pending or when the
/// validator blocks it. The flag is set before any task is spawned, so a
/// second submit event handled in the same tick is rejected.
fn begin_submit(form: &mut FormState<PostFormValues>, submitting: &mut bool) -> Option<PostFormValues> {
    if *submitting {
        return None;
    }
    match form.handle_submit() {
        Ok(values) => {
            *submitting = true;
            Some(values)
        }
        Err(errors) => {
            let missing: Vec<&str> = errors.fields().map(|f| f.name()).collect();
            tracing::debug!(?missing, "post form blocked by validation");
            None
        }
    }
}

#[component]
pub fn PostsNew() -> Element {
    let mut form = use_signal(|| FormState::new(PostFormValues::default()));
    let mut error_msg = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |_evt: FormEvent| {
        let claimed = {
            let mut busy = submitting.write();
            begin_submit(&mut form.write(), &mut *busy)
        };
        let Some(values) = claimed else {
            return;
        };
        error_msg.set(None);

        spawn(async move {
            let result = submit_post(values, dispatch_create, || {
                navigator().push(Route::PostsIndex {});
            })
            .await;

            if let Err(err) = result {
                tracing::warn!(kind = %err.kind, "create post failed");
                form.write().apply_server_errors(&err.field_errors);
                error_msg.set(Some(err.message));
                submitting.set(false);
            }
        });
    };

    rsx! {
        PageHeader {
            PageTitle { "New Post" }
        }

        if let Some(err) = error_msg.read().as_ref() {
            div { class: "alert alert-error", "{err}" }
        }

        Form { onsubmit: handle_submit,
            for field in PostField::ALL.iter().copied() {
                TextField {
                    key: "{field.name()}",
                    label: field.label(),
                    name: field.name(),
                    value: form.read().value(field).to_string(),
                    meta: form.read().meta(field),
                    disabled: *submitting.read(),
                    on_value_change: move |value: String| form.write().change(field, value),
                    on_focus: move |_| form.write().focus(field),
                    on_blur: move |_| form.write().blur(field),
                }
            }

            FormActions {
                Button {
                    button_type: ButtonType::Submit,
                    disabled: *submitting.read(),
                    if *submitting.read() { "Submitting..." } else { "Submit" }
                }
                Link { to: Route::PostsIndex {},
                    Button { variant: ButtonVariant::Destructive, "Cancel" }
                }
            }
        }
    }
}
