pub mod descriptor;
pub mod overhead;
pub mod params;
