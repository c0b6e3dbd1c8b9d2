//! Location resolution: turn a city name or an explicit coordinate pair into
//! the coordinates the forecast provider is queried with.

mod table;

pub use table::{CityTable, Coordinates, LocationQuery};
