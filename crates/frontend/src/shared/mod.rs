pub mod browser_storage;
pub mod clock;
pub mod components;
pub mod dialogs;
pub mod feedback;
pub mod modal_frame;
pub mod record_modal;
