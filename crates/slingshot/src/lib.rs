pub mod arrow;
pub mod sizes;
pub mod slingshot;
pub mod spinner;

pub use sizes::IndicatorSizes;
pub use slingshot::{Slingshot, calculate_slingshot};
pub use spinner::SpinnerFrame;
