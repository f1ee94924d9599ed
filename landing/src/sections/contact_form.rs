use cocowangi::inquiry::{FormField, InquiryForm, InquirySink, SubmitOutcome, SubmitRefused};
use cocowangi::links;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::browser::WhatsAppHandOff;
use crate::state::{AppState, ToastKind, use_app};

/// Inquiry form. The `?product=` parameter pre-selects the product of
/// interest, and a later quote link re-selects it until the visitor starts
/// typing. A successful hand-off clears every field.
#[component]
pub fn ContactForm() -> impl IntoView {
    let app = use_app();
    let search = use_location().search;
    let form = RwSignal::new(InquiryForm::seeded(links::product_from_query(
        &search.get_untracked(),
    )));

    Effect::new(move || {
        let seed = links::product_from_query(&search.get());
        form.update(|f| {
            f.reseed(seed);
        });
    });

    let (countries, products, quantities, whatsapp) = app.with_config(|config| {
        let options = &config.inquiry;
        (
            options
                .countries
                .iter()
                .map(|c| (c.value.clone(), format!("{} {}", c.flag, c.value)))
                .collect::<Vec<_>>(),
            options
                .products
                .iter()
                .map(|p| (p.clone(), p.clone()))
                .collect::<Vec<_>>(),
            options
                .quantities
                .iter()
                .map(|q| (q.clone(), q.clone()))
                .collect::<Vec<_>>(),
            config.social.whatsapp.clone(),
        )
    });

    // A product linked from the catalog may not be in the option list.
    let listed: Vec<String> = products.iter().map(|(value, _)| value.clone()).collect();
    let linked = Memo::new(move |_| {
        let interest = form.with(|f| f.value(FormField::ProductInterest).to_string());
        (!interest.is_empty() && !listed.contains(&interest)).then_some(interest)
    });

    let busy = move || form.with(InquiryForm::is_submitting);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(started) = form.try_update(InquiryForm::begin_submit) else {
            return;
        };
        match started {
            Err(SubmitRefused::InFlight) => {}
            Err(SubmitRefused::MissingFields(missing)) => {
                let lang = app.lang();
                let fields = missing
                    .iter()
                    .map(|field| field.label(lang))
                    .collect::<Vec<_>>()
                    .join(", ");
                app.notify(
                    ToastKind::Error,
                    app.t("Please complete the form", "Mohon lengkapi formulir"),
                    fields,
                );
            }
            Ok(snapshot) => {
                let sink = WhatsAppHandOff::new(whatsapp.clone(), app.lang());
                leptos::task::spawn_local(async move {
                    let result = sink.deliver(&snapshot).await;
                    let outcome = form.try_update(|f| f.finish_submit(result)).flatten();
                    report(app, outcome);
                });
            }
        }
    };

    view! {
        <form class="contact-form" on:submit=on_submit>
            <div class="form-row">
                {text_input(app, form, FormField::Name, "text")}
                {text_input(app, form, FormField::Email, "email")}
            </div>
            <div class="form-row">
                {text_input(app, form, FormField::Company, "text")}
                {select_input(app, form, FormField::Country, countries, Signal::derive(|| None))}
            </div>
            <div class="form-row">
                {text_input(app, form, FormField::Phone, "tel")}
                {select_input(app, form, FormField::ProductInterest, products, linked.into())}
            </div>
            {select_input(app, form, FormField::Quantity, quantities, Signal::derive(|| None))}
            <label class="form-field">
                <span class="form-label">{move || FormField::Message.label(app.lang())}</span>
                <textarea
                    name=FormField::Message.html_name()
                    rows="5"
                    placeholder=move || FormField::Message.placeholder(app.lang())
                    prop:value=move || form.with(|f| f.value(FormField::Message).to_string())
                    prop:disabled=busy
                    on:input=move |ev| {
                        form.update(|f| {
                            f.update(FormField::Message, event_target_value(&ev));
                        })
                    }
                ></textarea>
            </label>
            <button type="submit" class="btn btn-primary btn-full" disabled=busy>
                {move || {
                    if busy() {
                        app.t("Sending...", "Mengirim...")
                    } else {
                        app.t("Send Inquiry", "Kirim Permintaan")
                    }
                }}
            </button>
        </form>
    }
}

fn report(app: AppState, outcome: Option<SubmitOutcome>) {
    match outcome {
        Some(SubmitOutcome::Delivered) => app.notify(
            ToastKind::Success,
            app.t("Inquiry sent", "Permintaan terkirim"),
            app.t(
                "Thank you for your inquiry! We will contact you within 24 hours.",
                "Terima kasih atas permintaan Anda! Kami akan menghubungi Anda dalam 24 jam.",
            ),
        ),
        Some(SubmitOutcome::Retained(err)) => app.notify(
            ToastKind::Error,
            app.t("Inquiry not sent", "Permintaan belum terkirim"),
            format!(
                "{} ({err})",
                app.t(
                    "Your details are kept, please try again.",
                    "Data Anda tetap tersimpan, silakan coba lagi.",
                )
            ),
        ),
        None => {}
    }
}

fn label(app: AppState, field: FormField) -> impl IntoView {
    view! {
        <span class="form-label">
            {move || field.label(app.lang())}
            {field.is_required().then_some(" *")}
        </span>
    }
}

fn text_input(
    app: AppState,
    form: RwSignal<InquiryForm>,
    field: FormField,
    kind: &'static str,
) -> impl IntoView {
    view! {
        <label class="form-field">
            {label(app, field)}
            <input
                type=kind
                name=field.html_name()
                required=field.is_required()
                placeholder=move || field.placeholder(app.lang())
                prop:value=move || form.with(|f| f.value(field).to_string())
                prop:disabled=move || form.with(InquiryForm::is_submitting)
                on:input=move |ev| {
                    form.update(|f| {
                        f.update(field, event_target_value(&ev));
                    })
                }
            />
        </label>
    }
}

fn select_input(
    app: AppState,
    form: RwSignal<InquiryForm>,
    field: FormField,
    options: Vec<(String, String)>,
    extra: Signal<Option<String>>,
) -> impl IntoView {
    let options = options
        .into_iter()
        .map(|(value, text)| {
            let current = value.clone();
            view! {
                <option
                    value=value
                    prop:selected=move || form.with(|f| f.value(field) == current)
                >
                    {text}
                </option>
            }
        })
        .collect_view();
    let extra = move || {
        extra
            .get()
            .map(|value| view! { <option value=value.clone() prop:selected=true>{value}</option> })
    };

    view! {
        <label class="form-field">
            {label(app, field)}
            <select
                name=field.html_name()
                required=field.is_required()
                prop:disabled=move || form.with(InquiryForm::is_submitting)
                on:change=move |ev| {
                    form.update(|f| {
                        f.update(field, event_target_value(&ev));
                    })
                }
            >
                <option value="">{move || field.placeholder(app.lang())}</option>
                {options}
                {extra}
            </select>
        </label>
    }
}
