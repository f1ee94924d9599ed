// Routed pages
// Built in Banyuwangi by the CocoWangi team (c)2025

mod about;
mod contact;
mod home;
mod not_found;
mod products;
mod track_record;

pub use about::AboutPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use not_found::NotFound;
pub use products::ProductsPage;
pub use track_record::TrackRecordPage;
