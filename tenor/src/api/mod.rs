mod err;
mod msgs;

pub(crate) mod raw;

pub use err::TenorApiError;
pub use msgs::*;
