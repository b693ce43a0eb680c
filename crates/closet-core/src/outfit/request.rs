use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// What the outfit is for. Unknown words are kept in `Other` and have no rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum Occasion {
    Casual,
    Formal,
    Workout,
    Other(String),
}

impl Occasion {
    pub fn parse(raw: &str) -> Self {
        let key = raw.trim().to_lowercase();
        match key.as_str() {
            "casual" => Self::Casual,
            "formal" => Self::Formal,
            "workout" => Self::Workout,
            _ => Self::Other(key),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Casual => "casual",
            Self::Formal => "formal",
            Self::Workout => "workout",
            Self::Other(key) => key,
        }
    }
}

/// Current weather. Only `Rainy` and `Cold` change the casual rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum Weather {
    Sunny,
    Cloudy,
    Rainy,
    Cold,
    Hot,
    Other(String),
}

impl Weather {
    pub fn parse(raw: &str) -> Self {
        let key = raw.trim().to_lowercase();
        match key.as_str() {
            "sunny" => Self::Sunny,
            "cloudy" => Self::Cloudy,
            "rainy" => Self::Rainy,
            "cold" => Self::Cold,
            "hot" => Self::Hot,
            _ => Self::Other(key),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Sunny => "sunny",
            Self::Cloudy => "cloudy",
            Self::Rainy => "rainy",
            Self::Cold => "cold",
            Self::Hot => "hot",
            Self::Other(key) => key,
        }
    }

    /// Weather that calls for an extra outer layer.
    pub fn needs_layer(&self) -> bool {
        matches!(self, Self::Rainy | Self::Cold)
    }
}

macro_rules! impl_text_enum {
    ($ty:ty) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(<$ty>::parse(s))
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.as_str().to_string()
            }
        }
    };
}

impl_text_enum!(Occasion);
impl_text_enum!(Weather);

/// A single "find me an outfit" request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutfitRequest {
    pub occasion: Occasion,
    pub weather: Weather,
}

impl OutfitRequest {
    pub fn new(occasion: Occasion, weather: Weather) -> Self {
        Self { occasion, weather }
    }

    /// Build a request from the words a user typed or selected.
    pub fn parse(occasion: &str, weather: &str) -> Self {
        Self::new(Occasion::parse(occasion), Weather::parse(weather))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occasion_parse() {
        assert_eq!(Occasion::parse("Casual"), Occasion::Casual);
        assert_eq!(Occasion::parse(" formal "), Occasion::Formal);
        assert_eq!(Occasion::parse("WORKOUT"), Occasion::Workout);
        assert_eq!(
            Occasion::parse("Picnic"),
            Occasion::Other("picnic".to_string())
        );
    }

    #[test]
    fn test_weather_parse() {
        assert_eq!(Weather::parse("rainy"), Weather::Rainy);
        assert_eq!("Cold".parse::<Weather>().unwrap(), Weather::Cold);
        assert_eq!(Weather::parse("foggy"), Weather::Other("foggy".to_string()));
    }

    #[test]
    fn test_needs_layer() {
        assert!(Weather::Rainy.needs_layer());
        assert!(Weather::Cold.needs_layer());
        assert!(!Weather::Sunny.needs_layer());
        assert!(!Weather::Other("snowy".into()).needs_layer());
    }

    #[test]
    fn test_display_round_trip() {
        let request = OutfitRequest::parse("casual", "hot");
        assert_eq!(request.occasion.to_string(), "casual");
        assert_eq!(request.weather.to_string(), "hot");
    }
}
