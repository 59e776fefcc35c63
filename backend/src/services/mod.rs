//! Service layer for business logic.
//!
//! The conversion engine lives here. It is independent of the HTTP layer and
//! can be used directly as a library.

pub mod conversion;


pub use conversion::{
    convert, convert_all, convert_request, is_physically_valid, ConversionError,
    ConversionOutcome, NO_CONVERSION_NEEDED,
};
