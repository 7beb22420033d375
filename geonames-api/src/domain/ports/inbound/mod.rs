mod city_lookup;

pub use city_lookup::*;
