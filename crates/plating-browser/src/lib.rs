mod browser_finder;
mod error;
mod launcher;

pub use browser_finder::BrowserFinder;
pub use error::{Error, Result};
pub use launcher::BrowserLauncher;
