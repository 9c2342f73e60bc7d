pub mod analysis;
pub mod generation_unit;
pub mod load_level;
pub mod trial;
