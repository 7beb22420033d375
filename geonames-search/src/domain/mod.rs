mod city_document;
mod query;
mod response;

pub use city_document::*;
pub use query::*;
pub use response::*;
