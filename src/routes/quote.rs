//! Quote endpoint data types and assembly.

use crate::api::{AircraftId, RouteItinerary};
use crate::models::{AircraftCatalog, FlightQuote};
use crate::services::quoting::{quote_for_route, QuoteError};
use crate::services::rates::RateSource;
use serde::{Deserialize, Serialize};

/// A quote plus everything the booking UI needs to display it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteBreakdown {
    pub aircraft_id: AircraftId,
    pub aircraft_name: String,
    pub round_trip: bool,
    pub quote: FlightQuote,
    /// Display currency of `display_price`
    pub currency: String,
    /// `quote.total_price` converted at the display rate
    pub display_price: f64,
}

/// Failures while assembling a quote response.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QuoteRouteError {
    #[error("unknown aircraft '{0}'")]
    UnknownAircraft(AircraftId),

    #[error("unsupported display currency '{0}'")]
    UnsupportedCurrency(String),

    #[error(transparent)]
    Quote(#[from] QuoteError),
}

/// Build the quote response for one itinerary/aircraft pair.
pub fn build_quote_breakdown(
    catalog: &AircraftCatalog,
    rates: &dyn RateSource,
    itinerary: &RouteItinerary,
    aircraft_id: &AircraftId,
    currency: &str,
) -> Result<QuoteBreakdown, QuoteRouteError> {
    let aircraft = catalog
        .get(aircraft_id)
        .ok_or_else(|| QuoteRouteError::UnknownAircraft(aircraft_id.clone()))?;

    let quote = quote_for_route(itinerary, aircraft)?;

    let display_price = rates
        .convert(quote.total_price as f64, currency)
        .ok_or_else(|| QuoteRouteError::UnsupportedCurrency(currency.to_string()))?;

    Ok(QuoteBreakdown {
        aircraft_id: aircraft.id.clone(),
        aircraft_name: aircraft.name.clone(),
        round_trip: itinerary.round_trip,
        quote,
        currency: currency.to_uppercase(),
        display_price,
    })
}

pub const CREATE_QUOTE: &str = "create_quote";
