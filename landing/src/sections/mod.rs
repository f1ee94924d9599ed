// Site-wide sections and cards
// Built in Banyuwangi by the CocoWangi team (c)2025

mod contact_form;
mod footer;
mod nav;
mod product_card;
mod testimonial_card;
mod toast;
mod whatsapp_button;

pub use contact_form::ContactForm;
pub use footer::Footer;
pub use nav::Nav;
pub use product_card::ProductCard;
pub use testimonial_card::TestimonialCard;
pub use toast::ToastHost;
pub use whatsapp_button::WhatsAppButton;
