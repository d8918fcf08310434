// CWMP value codecs - the TR-069 Annex A textual encodings of parameter values

pub mod boolean;
pub mod date;
pub mod types;

pub use boolean::CwmpBool;
pub use types::{ParamType, ParamValue};
