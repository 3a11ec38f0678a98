mod source;
mod util;

pub use source::TwitterSource;
