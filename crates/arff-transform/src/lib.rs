//! Dataset transformation: the frame wrapper and label encoding.

pub mod frame;
pub mod label;

pub use frame::{DatasetFrame, DatasetFrameMeta};
pub use label::{LabelEncoding, encode_labels};
