mod admin_area;
mod city_search;
mod country;
mod geolocation;
#[cfg(test)]
pub mod mock;

pub use admin_area::*;
pub use city_search::*;
pub use country::*;
pub use geolocation::*;
