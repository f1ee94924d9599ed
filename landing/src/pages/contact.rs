// Contact page - inquiry form and direct channels
use cocowangi::links;
use leptos::prelude::*;

use crate::sections::ContactForm;
use crate::state::use_app;

#[component]
pub fn ContactPage() -> impl IntoView {
    let app = use_app();
    let (company, whatsapp) =
        app.with_config(|config| (config.company.clone(), config.social.whatsapp.clone()));
    let maps = links::maps_search(&company.address);

    let channels = [
        (("Visit Our Office", "Kunjungi Kantor Kami"), company.address.clone(), maps.clone(), true),
        (("Call Us", "Telepon Kami"), company.phone.clone(), links::tel(&company.phone), false),
        (("Email Us", "Email Kami"), company.email.clone(), links::mailto(&company.email), false),
        (("WhatsApp", "WhatsApp"), company.whatsapp.clone(), whatsapp, true),
    ]
    .into_iter()
    .map(|((en, id), text, href, external)| {
        view! {
            <a href=href class="channel-card" target=external.then_some("_blank")>
                <h3>{move || app.t(en, id)}</h3>
                <p>{text}</p>
            </a>
        }
    })
    .collect_view();

    let hours = [
        (("Monday - Friday", "Senin - Jumat"), ("08:00 - 17:00", "08:00 - 17:00")),
        (("Saturday", "Sabtu"), ("08:00 - 12:00", "08:00 - 12:00")),
        (("Sunday", "Minggu"), ("Closed", "Tutup")),
    ]
    .into_iter()
    .map(|((day_en, day_id), (time_en, time_id))| {
        view! {
            <li class="hours-row">
                <span>{move || app.t(day_en, day_id)}</span>
                <span>{move || app.t(time_en, time_id)}</span>
            </li>
        }
    })
    .collect_view();

    view! {
        <section class="page-header">
            <div class="container">
                <h1>{move || app.t("Contact Us", "Hubungi Kami")}</h1>
                <p>
                    {move || app.t(
                        "Tell us what you need and we will prepare a quote for your market.",
                        "Sampaikan kebutuhan Anda dan kami akan menyiapkan penawaran untuk pasar Anda.",
                    )}
                </p>
            </div>
        </section>

        <section class="section">
            <div class="container">
                <div class="channels">{channels}</div>
            </div>
        </section>

        <section class="section">
            <div class="container two-column">
                <div>
                    <h2>{move || app.t("Send Us a Message", "Kirim Pesan kepada Kami")}</h2>
                    <ContactForm />
                </div>
                <aside>
                    <h3>{move || app.t("Business Hours", "Jam Kerja")}</h3>
                    <ul class="hours">{hours}</ul>
                    <h3>{move || app.t("Response Time", "Waktu Respons")}</h3>
                    <ul class="hours">
                        <li class="hours-row">
                            <span>{move || app.t("Email Inquiries", "Pertanyaan Email")}</span>
                            <span>{move || app.t("24 hours", "24 jam")}</span>
                        </li>
                        <li class="hours-row">
                            <span>"WhatsApp"</span>
                            <span>{move || app.t("1-2 hours", "1-2 jam")}</span>
                        </li>
                        <li class="hours-row">
                            <span>{move || app.t("Phone Calls", "Panggilan Telepon")}</span>
                            <span>{move || app.t("Immediate", "Segera")}</span>
                        </li>
                    </ul>
                </aside>
            </div>
        </section>

        <section class="section section-alt">
            <div class="container">
                <h2 class="section-title">{move || app.t("Find Our Location", "Temukan Lokasi Kami")}</h2>
                <p>{company.address.clone()}</p>
                <a href=maps target="_blank" class="btn btn-outline">
                    {move || app.t("Open in Google Maps", "Buka di Google Maps")}
                </a>
            </div>
        </section>
    }
}
