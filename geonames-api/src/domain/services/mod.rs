mod admin_join;
mod city_lookup;
mod country_codes;
mod ranking;
mod sort_mode;

pub use admin_join::join_admin_names;
pub use city_lookup::CityLookupServiceImpl;
pub use country_codes::resolve_country_codes;
pub use ranking::{rank_by_country, select_last};
pub use sort_mode::select_sort_mode;
