pub use adw::prelude::*;
pub use adw::subclass::prelude::*;
pub use anyhow::{bail, Context, Result};
