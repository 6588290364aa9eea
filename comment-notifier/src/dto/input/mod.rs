mod comment;

pub use comment::*;
