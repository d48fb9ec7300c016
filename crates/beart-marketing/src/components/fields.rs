//! Form controls bound to a [`FormController`]

use beart_contact::{Field, FormController, CATALOG};
use leptos::*;

const CONTROL_CLASS: &str = "w-full px-4 py-3 border border-gray-300 rounded-lg transition-shadow focus:shadow-md focus:ring-2 focus:ring-indigo-500 disabled:opacity-60 text-sm sm:text-base";

fn value_of(form: RwSignal<FormController>, field: Field) -> impl Fn() -> String + Copy {
    move || form.with(|f| f.value(field).to_string())
}

fn busy(form: RwSignal<FormController>) -> impl Fn() -> bool + Copy {
    move || form.with(FormController::is_submitting)
}

#[component]
fn FieldLabel(field: Field) -> impl IntoView {
    view! {
        <label for=field.name() class="sr-only md:not-sr-only block text-sm font-medium text-gray-700 mb-2">
            {field.label()}
        </label>
    }
}

#[component]
fn FieldMessage(form: RwSignal<FormController>, field: Field) -> impl IntoView {
    let message = move || form.with(|f| f.error(field).map(|error| error.to_string()));

    view! {
        <Show when=move || message().is_some()>
            <p class="text-sm font-medium text-red-600 mt-1" role="alert">
                {move || message().unwrap_or_default()}
            </p>
        </Show>
    }
}

/// Single-line input for name or email
#[component]
pub fn TextField(
    form: RwSignal<FormController>,
    field: Field,
    #[prop(default = "text")] input_type: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div>
            <FieldLabel field=field/>
            <input
                id=field.name()
                name=field.name()
                type=input_type
                placeholder=placeholder
                class=CONTROL_CLASS
                prop:value=value_of(form, field)
                prop:disabled=busy(form)
                on:input=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
                on:blur=move |_| form.update(|f| f.revalidate(field))
            />
            <FieldMessage form=form field=field/>
        </div>
    }
}

#[component]
pub fn TextAreaField(
    form: RwSignal<FormController>,
    field: Field,
    placeholder: &'static str,
    #[prop(default = 4)] rows: u32,
) -> impl IntoView {
    view! {
        <div>
            <FieldLabel field=field/>
            <textarea
                id=field.name()
                name=field.name()
                rows=rows
                placeholder=placeholder
                class=CONTROL_CLASS
                prop:value=value_of(form, field)
                prop:disabled=busy(form)
                on:input=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
                on:blur=move |_| form.update(|f| f.revalidate(field))
            ></textarea>
            <FieldMessage form=form field=field/>
        </div>
    }
}

/// Grouped single-select populated from the subject catalog
#[component]
pub fn SubjectSelect(form: RwSignal<FormController>) -> impl IntoView {
    let field = Field::Subject;
    let current = value_of(form, field);

    view! {
        <div>
            <FieldLabel field=field/>
            <select
                id=field.name()
                name=field.name()
                class=CONTROL_CLASS
                prop:value=current
                prop:disabled=busy(form)
                on:change=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
                on:blur=move |_| form.update(|f| f.revalidate(field))
            >
                <option value="" disabled=true selected=move || current().is_empty()>
                    "Select a subject"
                </option>
                {CATALOG.categories().iter().map(|category| view! {
                    <optgroup label=category.name>
                        {category.options.iter().map(|option| view! {
                            <option
                                value=option.value
                                selected=move || current() == option.value
                            >
                                {option.label}
                            </option>
                        }).collect_view()}
                    </optgroup>
                }).collect_view()}
            </select>
            <FieldMessage form=form field=field/>
        </div>
    }
}
