//! OpenWeatherMap forecast document parser
//!
//! Walks the generic document tree of a `mode=xml` forecast response:
//!
//! ```text
//! <weatherdata>
//!   <sun rise="…" set="…"/>
//!   <forecast>
//!     <time from="…" to="…">
//!       <symbol number="500"/> <precipitation type="rain"/>
//!       <windDirection deg="200"/> <windSpeed mps="4.1"/>
//!       <temperature value="283.15"/> <pressure value="1012"/>
//!       <humidity value="80"/> <clouds all="90"/>
//!     </time>
//!     …
//!   </forecast>
//! </weatherdata>
//! ```
//!
//! A malformed document fails as a whole. A single slot with a bad
//! timestamp or number is dropped and the rest of the document is kept.

use domain::units::{kelvin_to_celsius, mps_to_mph};
use domain::{Conditions, Forecast, ForecastPoint, OrderedList, Precipitation, SunTimes};
use tracing::{debug, trace, warn};

use crate::client::WeatherError;
use crate::document::XmlNode;
use crate::timestamp::decode_timestamp;

/// Parse a forecast document
///
/// # Errors
///
/// Returns `WeatherError::ParseError` if the input is not well-formed
/// markup. No partial forecast is produced in that case.
pub fn parse_forecast(xml: &str) -> Result<Forecast, WeatherError> {
    let root = XmlNode::parse(xml).map_err(|e| WeatherError::ParseError(e.to_string()))?;
    Ok(forecast_from_document(&root))
}

/// Build a forecast from an already parsed document tree
pub fn forecast_from_document(root: &XmlNode) -> Forecast {
    let points = OrderedList::new();
    let mut sun = None;

    for node in &root.children {
        match node.tag.as_str() {
            "sun" => match parse_sun(node) {
                Ok(times) => sun = Some(times),
                Err(e) => warn!(error = %e, "Ignoring unreadable sunrise/sunset"),
            },
            "forecast" => {
                for slot in node.children_named("time") {
                    match parse_slot(slot) {
                        Ok(Some(point)) => points.append(point),
                        Ok(None) => trace!("Skipping forecast slot without data"),
                        Err(e) => warn!(error = %e, "Dropping forecast slot"),
                    }
                }
            },
            _ => {},
        }
    }

    let forecast = Forecast::new(points.into_vec(), sun);
    debug!(
        points = forecast.point_count(),
        has_sun = forecast.sun().is_some(),
        "Parsed forecast document"
    );
    forecast
}

fn parse_sun(node: &XmlNode) -> Result<SunTimes, WeatherError> {
    Ok(SunTimes {
        sunrise: decode_timestamp(required(node, "rise")?)?,
        sunset: decode_timestamp(required(node, "set")?)?,
    })
}

/// Decode one `time` slot; `Ok(None)` when it carries no measurement
fn parse_slot(slot: &XmlNode) -> Result<Option<ForecastPoint>, WeatherError> {
    let start = decode_timestamp(required(slot, "from")?)?;
    let end = decode_timestamp(required(slot, "to")?)?;

    let mut point = ForecastPoint::new(start, end);
    for element in &slot.children {
        point = match element.tag.as_str() {
            "temperature" => point.with_temperature(kelvin_to_celsius(number(element, "value")?)),
            "symbol" => point.with_conditions(Conditions::new(integer(element, "number")?)),
            "precipitation" => point.with_precipitation(
                element
                    .attribute("type")
                    .map_or(Precipitation::None, Precipitation::from_provider),
            ),
            "windDirection" => point.with_wind_direction(number(element, "deg")?),
            "windSpeed" => point.with_wind_speed(mps_to_mph(number(element, "mps")?)),
            "pressure" => point.with_pressure(number(element, "value")?),
            "humidity" => point.with_humidity(number(element, "value")?),
            "clouds" => point.with_cloud_cover(number(element, "all")?),
            _ => point,
        };
    }

    Ok(point.has_data().then_some(point))
}

fn required<'a>(node: &'a XmlNode, attribute: &str) -> Result<&'a str, WeatherError> {
    node.attribute(attribute)
        .ok_or_else(|| WeatherError::invalid_attribute(&node.tag, attribute))
}

fn number(node: &XmlNode, attribute: &str) -> Result<f64, WeatherError> {
    required(node, attribute)?
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| WeatherError::invalid_attribute(&node.tag, attribute))
}

fn integer(node: &XmlNode, attribute: &str) -> Result<i32, WeatherError> {
    required(node, attribute)?
        .trim()
        .parse::<i32>()
        .map_err(|_| WeatherError::invalid_attribute(&node.tag, attribute))
}
