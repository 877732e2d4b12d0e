//! # yatri-weather
//!
//! OpenWeather current-conditions client. Forwards a city or coordinate
//! query upstream and reshapes the answer into a [`WeatherReport`].

mod openweather;

#[cfg(test)]
mod tests;

pub use openweather::OpenWeatherProvider;
pub use yatri_core::weather::{Condition, WeatherQuery, WeatherReport};
