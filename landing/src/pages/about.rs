// About page - story, values, milestones, leadership
use leptos::prelude::*;

use crate::state::use_app;

type Bilingual = (&'static str, &'static str);

const VALUES: [(Bilingual, Bilingual); 4] = [
    (
        ("Quality Excellence", "Keunggulan Kualitas"),
        (
            "We keep the highest standard in every product we export.",
            "Kami menjaga standar tertinggi dalam setiap produk yang kami ekspor.",
        ),
    ),
    (
        ("Customer First", "Pelanggan Utama"),
        (
            "Long-term relationships built on reliable service.",
            "Hubungan jangka panjang yang dibangun di atas layanan yang andal.",
        ),
    ),
    (
        ("Sustainability", "Keberlanjutan"),
        (
            "Eco-friendly processing and support for local coconut farmers.",
            "Pengolahan ramah lingkungan dan dukungan bagi petani kelapa lokal.",
        ),
    ),
    (
        ("Global Vision", "Visi Global"),
        (
            "Connecting Indonesian coconut products to the world.",
            "Menghubungkan produk kelapa Indonesia ke dunia.",
        ),
    ),
];

const MILESTONES: [(&str, Bilingual); 3] = [
    ("2024", ("Company founded in Banyuwangi", "Perusahaan didirikan di Banyuwangi")),
    ("2024", ("First container shipped", "Kontainer pertama dikirim")),
    ("2025", ("Export documents complete: PEB, phytosanitary, COO, COA", "Dokumen ekspor lengkap: PEB, fitosanitari, COO, COA")),
];

const LEADERS: [(&str, Bilingual, &str); 3] = [
    ("Novia Gita Kharisma", ("CEO & Founder", "CEO & Pendiri"), "2+"),
    ("Paundra Afif Zamroni", ("Export Director", "Direktur Ekspor"), "2+"),
    ("Dimas Firdianto", ("Operations Director", "Direktur Operasi"), "8+"),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    let app = use_app();
    let (name, established, certifications) = app.with_config(|config| {
        (
            config.company.name.clone(),
            config.company.established.clone(),
            config.certifications.clone(),
        )
    });

    let values = VALUES
        .into_iter()
        .map(|((title_en, title_id), (body_en, body_id))| {
            view! {
                <div class="value-card">
                    <h3>{move || app.t(title_en, title_id)}</h3>
                    <p>{move || app.t(body_en, body_id)}</p>
                </div>
            }
        })
        .collect_view();

    let milestones = MILESTONES
        .into_iter()
        .map(|(year, (en, id))| {
            view! {
                <li class="milestone">
                    <span class="milestone-year">{year}</span>
                    <span class="milestone-title">{move || app.t(en, id)}</span>
                </li>
            }
        })
        .collect_view();

    let leaders = LEADERS
        .into_iter()
        .map(|(person, (role_en, role_id), years)| {
            view! {
                <div class="leader-card">
                    <h3>{person}</h3>
                    <p class="leader-role">{move || app.t(role_en, role_id)}</p>
                    <p class="leader-experience">
                        {years} " " {move || app.t("years experience", "tahun pengalaman")}
                    </p>
                </div>
            }
        })
        .collect_view();

    let badges = certifications
        .into_iter()
        .map(|cert| view! { <span class="cert-badge">{cert}</span> })
        .collect_view();

    view! {
        <section class="page-header">
            <div class="container">
                <h1>{move || app.t("About ", "Tentang ")} {name}</h1>
                <p>{move || app.with_config(|config| config.description(app.lang()).to_string())}</p>
            </div>
        </section>

        <section class="section">
            <div class="container two-column">
                <div>
                    <h2>{move || app.t("Our Story", "Cerita Kami")}</h2>
                    <p>
                        {move || app.t(
                            "Founded in Banyuwangi, East Java, we work directly with local coconut growers and processors.",
                            "Didirikan di Banyuwangi, Jawa Timur, kami bekerja langsung dengan petani dan pengolah kelapa lokal.",
                        )}
                        " (" {established} ")"
                    </p>
                </div>
                <div>
                    <h2>{move || app.t("Our Mission", "Misi Kami")}</h2>
                    <p>
                        {move || app.t(
                            "To deliver consistent, fully documented coconut products to buyers worldwide.",
                            "Mengirimkan produk kelapa yang konsisten dan terdokumentasi lengkap kepada pembeli di seluruh dunia.",
                        )}
                    </p>
                    <h2>{move || app.t("Our Vision", "Visi Kami")}</h2>
                    <p>
                        {move || app.t(
                            "To be the trusted coconut partner from East Java to the world.",
                            "Menjadi mitra kelapa terpercaya dari Jawa Timur ke dunia.",
                        )}
                    </p>
                </div>
            </div>
        </section>

        <section class="section section-alt">
            <div class="container">
                <h2 class="section-title">{move || app.t("Our Values", "Nilai-Nilai Kami")}</h2>
                <div class="values">{values}</div>
            </div>
        </section>

        <section class="section">
            <div class="container">
                <h2 class="section-title">{move || app.t("Our Journey", "Perjalanan Kami")}</h2>
                <ol class="milestones">{milestones}</ol>
            </div>
        </section>

        <section class="section section-alt">
            <div class="container">
                <h2 class="section-title">{move || app.t("Leadership Team", "Tim Kepemimpinan")}</h2>
                <div class="leaders">{leaders}</div>
                <h3 class="section-subtitle">
                    {move || app.t("Certifications & Standards", "Sertifikasi & Standar")}
                </h3>
                <div class="cert-badges">{badges}</div>
            </div>
        </section>
    }
}
