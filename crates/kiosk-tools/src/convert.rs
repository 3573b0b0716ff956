use crate::error::ConvertError;
use std::collections::BTreeMap;

const FEET_PER_METER: f64 = 3.28084;
const SQUARE_FEET_PER_SQUARE_METER: f64 = 10.7639;
const POUNDS_PER_KILOGRAM: f64 = 2.20462;
const SECONDS_PER_MINUTE: f64 = 60.0;
const GALLONS_PER_LITER: f64 = 0.264172;
const TEASPOONS_PER_TABLESPOON: f64 = 3.0;

#[derive(Clone, Copy)]
enum Formula {
    Unary(fn(f64) -> f64),
    Binary(fn(f64, f64) -> f64),
}

struct Conversion {
    category: &'static str,
    name: &'static str,
    formula: Formula,
}

const fn unary(category: &'static str, name: &'static str, f: fn(f64) -> f64) -> Conversion {
    Conversion {
        category,
        name,
        formula: Formula::Unary(f),
    }
}

const fn binary(
    category: &'static str,
    name: &'static str,
    f: fn(f64, f64) -> f64,
) -> Conversion {
    Conversion {
        category,
        name,
        formula: Formula::Binary(f),
    }
}

static CONVERSIONS: &[Conversion] = &[
    unary("length", "metersToFeet", |m| m * FEET_PER_METER),
    unary("length", "feetToMeters", |ft| ft / FEET_PER_METER),
    unary("area", "squareMetersToSquareFeet", |m2| {
        m2 * SQUARE_FEET_PER_SQUARE_METER
    }),
    unary("area", "squareFeetToSquareMeters", |ft2| {
        ft2 / SQUARE_FEET_PER_SQUARE_METER
    }),
    unary("weight", "kilogramsToPounds", |kg| kg * POUNDS_PER_KILOGRAM),
    unary("weight", "poundsToKilograms", |lb| lb / POUNDS_PER_KILOGRAM),
    unary("time", "secondsToMinutes", |s| s / SECONDS_PER_MINUTE),
    unary("time", "minutesToSeconds", |min| min * SECONDS_PER_MINUTE),
    unary("volume", "litersToGallons", |l| l * GALLONS_PER_LITER),
    unary("volume", "gallonsToLiters", |gal| gal / GALLONS_PER_LITER),
    unary("temperature", "celsiusToFahrenheit", |c| c * 9.0 / 5.0 + 32.0),
    unary("temperature", "fahrenheitToCelsius", |f| (f - 32.0) * 5.0 / 9.0),
    unary("cooking", "teaspoonsToTablespoons", |tsp| {
        tsp / TEASPOONS_PER_TABLESPOON
    }),
    unary("cooking", "tablespoonsToTeaspoons", |tbsp| {
        tbsp * TEASPOONS_PER_TABLESPOON
    }),
    binary("ohmsLaw", "voltage", |current, resistance| current * resistance),
    binary("ohmsLaw", "current", |voltage, resistance| voltage / resistance),
    binary("ohmsLaw", "resistance", |voltage, current| voltage / current),
];

/// Applies the named conversion.
///
/// `ohmsLaw` conversions take two operands and read `value2` as the second.
/// For the other categories `value2` is ignored.
pub fn convert(
    category: &str,
    conversion: &str,
    value: f64,
    value2: Option<f64>,
) -> Result<f64, ConvertError> {
    if !CONVERSIONS.iter().any(|c| c.category == category) {
        return Err(ConvertError::UnknownCategory(category.to_string()));
    }

    let entry = CONVERSIONS
        .iter()
        .find(|c| c.category == category && c.name == conversion)
        .ok_or_else(|| ConvertError::UnknownConversion {
            category: category.to_string(),
            conversion: conversion.to_string(),
        })?;

    let result = match entry.formula {
        Formula::Unary(f) => f(value),
        Formula::Binary(f) => {
            let second =
                value2.ok_or_else(|| ConvertError::MissingOperand(conversion.to_string()))?;
            f(value, second)
        }
    };

    if result.is_finite() {
        Ok(result)
    } else {
        Err(ConvertError::NonFinite)
    }
}

/// Every category with the names of its conversions, in declaration order.
pub fn conversion_options() -> BTreeMap<&'static str, Vec<&'static str>> {
    let mut options: BTreeMap<&'static str, Vec<&'static str>> = BTreeMap::new();
    for conversion in CONVERSIONS {
        options
            .entry(conversion.category)
            .or_default()
            .push(conversion.name);
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn single_operand_conversions() {
        assert!(close(convert("length", "metersToFeet", 1.0, None).unwrap(), 3.28084));
        assert!(close(
            convert("weight", "poundsToKilograms", 2.20462, None).unwrap(),
            1.0
        ));
        assert!(close(convert("time", "minutesToSeconds", 2.5, None).unwrap(), 150.0));
        assert!(close(
            convert("cooking", "teaspoonsToTablespoons", 9.0, None).unwrap(),
            3.0
        ));
    }

    #[test]
    fn temperature() {
        assert!(close(
            convert("temperature", "celsiusToFahrenheit", 100.0, None).unwrap(),
            212.0
        ));
        assert!(close(
            convert("temperature", "fahrenheitToCelsius", -40.0, None).unwrap(),
            -40.0
        ));
    }

    #[test]
    fn second_operand_is_ignored_for_unary() {
        assert_eq!(
            convert("length", "feetToMeters", 0.0, Some(99.0)),
            Ok(0.0)
        );
    }

    #[test]
    fn ohms_law_takes_two_operands() {
        assert_eq!(convert("ohmsLaw", "voltage", 2.0, Some(5.0)), Ok(10.0));
        assert_eq!(convert("ohmsLaw", "current", 10.0, Some(5.0)), Ok(2.0));
        assert_eq!(convert("ohmsLaw", "resistance", 10.0, Some(2.0)), Ok(5.0));
        assert_eq!(
            convert("ohmsLaw", "voltage", 2.0, None),
            Err(ConvertError::MissingOperand("voltage".to_string()))
        );
    }

    #[test]
    fn division_by_zero_is_rejected() {
        assert_eq!(
            convert("ohmsLaw", "current", 10.0, Some(0.0)),
            Err(ConvertError::NonFinite)
        );
    }

    #[test]
    fn unknown_names() {
        assert!(matches!(
            convert("speed", "kphToMph", 1.0, None),
            Err(ConvertError::UnknownCategory(_))
        ));
        assert!(matches!(
            convert("length", "metersToMiles", 1.0, None),
            Err(ConvertError::UnknownConversion { .. })
        ));
        // Conversions are scoped to their own category.
        assert!(matches!(
            convert("area", "metersToFeet", 1.0, None),
            Err(ConvertError::UnknownConversion { .. })
        ));
    }

    #[test]
    fn options_list_every_conversion() {
        let options = conversion_options();
        assert_eq!(options.len(), 8);
        assert_eq!(options["ohmsLaw"], vec!["voltage", "current", "resistance"]);
        assert_eq!(options["length"], vec!["metersToFeet", "feetToMeters"]);
        assert_eq!(options.values().map(Vec::len).sum::<usize>(), 17);
    }
}
