use cocowangi::types::Testimonial;
use leptos::prelude::*;

use crate::state::use_app;

#[component]
pub fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    let app = use_app();

    let stars = testimonial
        .stars()
        .into_iter()
        .map(|filled| {
            let class = if filled { "star filled" } else { "star" };
            view! { <span class=class>"★"</span> }
        })
        .collect_view();
    let initial = testimonial.initial().map(String::from).unwrap_or_default();
    let (name, company, country, flag) = (
        testimonial.name.clone(),
        testimonial.company.clone(),
        testimonial.country.clone(),
        testimonial.flag.clone(),
    );
    let volume = (!testimonial.order_volume.is_empty()).then(|| testimonial.order_volume.clone());

    let testimonial = StoredValue::new(testimonial);

    view! {
        <article class="testimonial-card">
            <div class="testimonial-stars" aria-label=move || testimonial.with_value(|t| format!("{}/5", t.rating))>
                {stars}
            </div>
            <blockquote class="testimonial-review">
                {move || testimonial.with_value(|t| t.review(app.lang()).to_string())}
            </blockquote>
            <footer class="testimonial-author">
                <span class="testimonial-avatar">{initial}</span>
                <div>
                    <p class="testimonial-name">{name}</p>
                    <p class="testimonial-company">{company}</p>
                    <p class="testimonial-country">{flag} " " {country}</p>
                </div>
            </footer>
            {volume.map(|volume| view! {
                <p class="testimonial-volume">
                    {move || app.t("Order volume:", "Volume pesanan:")} " " {volume}
                </p>
            })}
        </article>
    }
}
