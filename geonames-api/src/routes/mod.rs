pub(crate) mod city;
pub(crate) mod error;
pub(crate) mod ip;

pub(crate) use error::ApiError;
