// web_app/state/mod.rs - View state without framework dependencies
//
// Each page owns its signals; the types here hold the rules those signals
// follow so they can be tested natively without a reactive runtime.
//
// - listing.rs: fetch settling and search filtering
// - selection.rs: detail modal selection
// - product_form.rs: create/edit form and its submit protocol
// - deletion.rs: two-step delete confirmation
// - timer.rs: cancellable timers and the not-found countdown

pub mod listing;
pub mod selection;
pub mod product_form;
pub mod deletion;
pub mod timer;

pub use listing::{filter_products, ListingState};
pub use selection::Selection;
pub use product_form::{send_draft, take_hint, FormMode, ProductFields, ProductForm, SubmitStatus};
pub use deletion::DeletePrompt;
pub use timer::{Cancel, Countdown, CountdownStep, ScheduledTask};
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use timer::scoped_task;
