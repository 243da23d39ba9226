pub mod config;
pub mod content;
pub mod observer;
pub mod pricing;
pub mod schedule;
pub mod components {
    pub mod buttons;
    pub mod nav;
    pub mod schedule_modal;
    pub mod scroll_spy;
    pub mod section;
}
pub mod pages {
    pub mod landing;
}
