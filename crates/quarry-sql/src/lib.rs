pub mod serializer;
pub use serializer::{ParameterInfo, ParameterList, Params, Serializer};
