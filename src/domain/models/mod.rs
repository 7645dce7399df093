pub mod keys;
pub mod profile;
pub mod screen;
pub mod step;

pub use keys::{Modifier, NamedKey};
pub use profile::Profile;
pub use screen::{ClickPoint, ScreenFraction, ScreenSize};
pub use step::{Cancelled, Step, StepFailure};
