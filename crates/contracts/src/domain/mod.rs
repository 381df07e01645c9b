pub mod a001_category_filter;
pub mod a002_volume_calculator;
