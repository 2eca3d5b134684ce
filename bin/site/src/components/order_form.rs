//! Order lead-capture form.

use crate::submission::use_submitter;
use leptos::prelude::*;
use transblue_core::order::{self, OrderField};

type FormState = order::OrderForm;

fn input_type(field: OrderField) -> &'static str {
    match field {
        OrderField::Email => "email",
        _ => "text",
    }
}

fn missing_message(fields: &[OrderField]) -> String {
    let labels: Vec<&str> = fields.iter().map(|field| field.label()).collect();
    format!("Заполните обязательные поля: {}", labels.join(", "))
}

/// Order form that swaps itself for a thank-you note once submitted.
///
/// Submitting hands the fields to the submitter from context. Nothing is
/// sent over the network by the form itself.
#[component]
pub fn OrderForm() -> impl IntoView {
    let form = RwSignal::new(FormState::new());
    let missing = RwSignal::new(Vec::<OrderField>::new());
    let submitter = StoredValue::new(use_submitter());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.try_update(FormState::submit) {
            Some(Ok(request)) => {
                missing.set(Vec::new());
                submitter.with_value(|submitter| submitter.deliver(&request));
            }
            Some(Err(e)) => {
                tracing::debug!(error = %e, "Order form rejected");
                missing.set(form.with_untracked(FormState::missing_required));
            }
            None => {}
        }
    };

    view! {
        <Show
            when=move || !form.with(FormState::is_submitted)
            fallback=|| view! { <OrderConfirmation/> }
        >
            <form class="order-form" on:submit=on_submit>
                <div class="form-grid">
                    {OrderField::ALL
                        .into_iter()
                        .filter(|field| *field != OrderField::Comment)
                        .map(|field| view! { <FieldInput form field/> })
                        .collect_view()}
                </div>
                <FieldTextArea form field=OrderField::Comment/>
                {move || {
                    let fields = missing.get();
                    (!fields.is_empty())
                        .then(|| view! { <p class="form-error">{missing_message(&fields)}</p> })
                }}
                <button type="submit" class="primary-button">"Отправить заявку"</button>
            </form>
        </Show>
    }
}

/// Single-line input bound to one form field.
#[component]
fn FieldInput(form: RwSignal<FormState>, field: OrderField) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field-label">{field.label()}</span>
            <input
                type=input_type(field)
                name=field.name()
                required=field.is_required()
                prop:value=move || form.with(|f| f.get(field).to_string())
                on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
            />
        </label>
    }
}

/// Multi-line input bound to one form field.
#[component]
fn FieldTextArea(form: RwSignal<FormState>, field: OrderField) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field-label">{field.label()}</span>
            <textarea
                rows="4"
                name=field.name()
                prop:value=move || form.with(|f| f.get(field).to_string())
                on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
            ></textarea>
        </label>
    }
}

#[component]
fn OrderConfirmation() -> impl IntoView {
    view! {
        <div class="order-confirmation">
            <div class="confirmation-title">"Спасибо! 🎉"</div>
            <p class="muted">"Мы получили вашу заявку и скоро свяжемся с вами."</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_email_uses_email_input() {
        for field in OrderField::ALL {
            let expected = if field == OrderField::Email { "email" } else { "text" };
            assert_eq!(input_type(field), expected);
        }
    }

    #[test]
    fn missing_message_uses_labels() {
        assert_eq!(
            missing_message(&[OrderField::Name, OrderField::To]),
            "Заполните обязательные поля: Имя, Куда"
        );
    }
}
