pub mod format;
pub(crate) mod lut;
