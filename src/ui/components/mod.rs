pub mod bars;
pub mod year_slider;
