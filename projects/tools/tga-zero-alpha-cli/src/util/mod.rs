mod file_io;
mod paths;
mod report;

pub use file_io::*;
pub use paths::*;
pub use report::*;
