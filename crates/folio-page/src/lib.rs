pub mod modal;
pub mod render;
pub mod service_page;

pub use modal::{transition, Effect, FormInput, ModalEvent, ModalState, ProjectPanel};
pub use service_page::{populate, service_slug, ServiceView};
