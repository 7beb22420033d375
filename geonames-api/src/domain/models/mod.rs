mod admin_area;
mod city;
mod client_ip;
mod country;
mod geo;
mod ids;
mod lookup;

pub use admin_area::*;
pub use city::*;
pub use client_ip::*;
pub use country::*;
pub use geo::*;
pub use ids::*;
pub use lookup::*;
