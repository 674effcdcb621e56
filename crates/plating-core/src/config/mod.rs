mod locator;
mod reader;
mod types;
mod writer;

pub use locator::ConfigLocator;
pub use reader::ConfigReader;
pub use types::*;
pub use writer::ConfigWriter;
