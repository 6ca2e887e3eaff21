pub mod common;

pub mod a001_city;
pub mod a002_country;
pub mod a003_department;
pub mod a004_language;
pub mod a005_industry;
pub mod a006_object;
pub mod a007_sub_industry;
