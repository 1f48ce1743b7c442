//! Condition Parsing Module
//!
//! A condition is one constraint entry in an S3 POST upload policy. The array
//! form arrives in one of three shapes:
//!
//! ```json
//! ["eq", "$acl", "public-read"]
//! ["starts-with", "$key", "user/eric/"]
//! ["content-length-range", 1048579, 10485760]
//! ```
//!
//! The dictionary form (`{"bucket": "name-of-bucket"}`) is recognized as a
//! valid shape but has no implemented semantics; [`ConditionParser::parse`]
//! returns `Ok(None)` for it.
//!
//! See <https://docs.aws.amazon.com/AmazonS3/latest/API/sigv4-HTTPPOSTConstructPolicy.html>

mod parser;
mod types;

pub use parser::ConditionParser;
pub use types::{Condition, ConditionOperator, ConditionValue};
