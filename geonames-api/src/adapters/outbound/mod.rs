pub mod elasticsearch;
pub mod maxmind;
pub mod postgres;
