//! Feature record construction for the power model.
//!
//! The scaler and model were fitted on seven features in a fixed order:
//! irradiation, module temperature, ambient temperature, hour, day, month,
//! day-of-week. `FeatureRecord` owns that ordering so the rest of the crate
//! never has to repeat it.

use crate::error::InferenceError;
use time::{Date, Time};

/// Number of features the artifacts were fitted with.
pub const FEATURE_COUNT: usize = 7;

/// The three environmental readings collected from the form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorReadings {
    pub irradiation: f64,
    pub module_temp_c: f64,
    pub ambient_temp_c: f64,
}

impl SensorReadings {
    /// Validates that every reading is a finite, non-negative number.
    pub fn new(
        irradiation: f64,
        module_temp_c: f64,
        ambient_temp_c: f64,
    ) -> Result<Self, InferenceError> {
        Ok(Self {
            irradiation: validate_reading("irradiation", irradiation)?,
            module_temp_c: validate_reading("module temperature", module_temp_c)?,
            ambient_temp_c: validate_reading("ambient temperature", ambient_temp_c)?,
        })
    }
}

fn validate_reading(field: &'static str, value: f64) -> Result<f64, InferenceError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(InferenceError::InvalidReading { field, value })
    }
}

/// One prediction request record in training order.
///
/// Day-of-week uses the Monday = 0 .. Sunday = 6 convention the artifacts
/// were trained with.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRecord {
    pub irradiation: f64,
    pub module_temperature: f64,
    pub ambient_temperature: f64,
    pub hour: u8,
    pub day: u8,
    pub month: u8,
    pub day_of_week: u8,
}

impl FeatureRecord {
    pub fn build(date: Date, time: Time, readings: SensorReadings) -> Self {
        Self {
            irradiation: readings.irradiation,
            module_temperature: readings.module_temp_c,
            ambient_temperature: readings.ambient_temp_c,
            hour: time.hour(),
            day: date.day(),
            month: u8::from(date.month()),
            day_of_week: date.weekday().number_days_from_monday(),
        }
    }

    /// Returns the record as `FEATURE_COUNT` values in training order.
    pub fn to_vec(&self) -> Vec<f64> {
        vec![
            self.irradiation,
            self.module_temperature,
            self.ambient_temperature,
            f64::from(self.hour),
            f64::from(self.day),
            f64::from(self.month),
            f64::from(self.day_of_week),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, time};

    #[test]
    fn reference_inputs_produce_training_order_record() -> Result<(), InferenceError> {
        let readings = SensorReadings::new(5.0, 45.0, 30.0)?;

        let record = FeatureRecord::build(date!(2020 - 06 - 15), time!(14:00), readings);

        // 2020-06-15 was a Monday.
        assert_eq!(record.to_vec(), vec![5.0, 45.0, 30.0, 14.0, 15.0, 6.0, 0.0]);
        assert_eq!(record.to_vec().len(), FEATURE_COUNT);
        Ok(())
    }

    #[test]
    fn day_of_week_is_monday_zero_through_sunday_six() -> Result<(), InferenceError> {
        let readings = SensorReadings::new(0.0, 0.0, 0.0)?;

        let monday = FeatureRecord::build(date!(2020 - 06 - 15), time!(00:00), readings);
        let sunday = FeatureRecord::build(date!(2020 - 06 - 21), time!(23:59), readings);

        assert_eq!(monday.day_of_week, 0);
        assert_eq!(sunday.day_of_week, 6);
        assert_eq!(sunday.hour, 23);
        Ok(())
    }

    #[test]
    fn calendar_fields_match_conventional_decomposition() -> Result<(), InferenceError> {
        let readings = SensorReadings::new(1.0, 2.0, 3.0)?;

        let record = FeatureRecord::build(date!(2021 - 12 - 31), time!(09:30), readings);

        assert_eq!(record.hour, 9);
        assert_eq!(record.day, 31);
        assert_eq!(record.month, 12);
        // 2021-12-31 was a Friday.
        assert_eq!(record.day_of_week, 4);
        Ok(())
    }

    #[test]
    fn negative_reading_is_rejected() {
        let result = SensorReadings::new(5.0, -0.1, 30.0);

        assert!(matches!(
            result,
            Err(InferenceError::InvalidReading {
                field: "module temperature",
                ..
            })
        ));
    }

    #[test]
    fn non_finite_reading_is_rejected() {
        let result = SensorReadings::new(f64::NAN, 45.0, 30.0);

        assert!(matches!(
            result,
            Err(InferenceError::InvalidReading {
                field: "irradiation",
                ..
            })
        ));
    }

    #[test]
    fn zero_readings_are_valid() {
        assert!(SensorReadings::new(0.0, 0.0, 0.0).is_ok());
    }
}
