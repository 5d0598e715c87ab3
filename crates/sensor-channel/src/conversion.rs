//! Raw Reading Conversion
//!
//! TMP36 analog temperature sensor on a 10-bit ADC with a 5 V reference:
//! 10 mV per degree with a 500 mV offset at 0 °C. Temperatures are carried
//! as integer centi-degrees so the filters never touch floating point.

use crate::error::ChannelError;

/// Largest reading a 10-bit ADC produces
pub const ADC_MAX: u16 = 1023;

/// Convert a raw ADC count to centi-degrees Celsius.
///
/// Readings below 0 °C come out negative, which the history recorder
/// treats as unset; callers logging outdoor sensors should offset first.
pub fn adc_to_centi_celsius(raw: u16) -> Result<i32, ChannelError> {
    if raw > ADC_MAX {
        return Err(ChannelError::AdcOutOfRange {
            value: raw,
            max: ADC_MAX,
        });
    }
    // raw * 5000 mV / 1024, minus 500 mV, at 10 mV per degree, times 100
    Ok(i32::from(raw) * 50_000 / 1024 - 5_000)
}

pub fn centi_celsius_to_centi_fahrenheit(centi_c: i32) -> i32 {
    centi_c * 9 / 5 + 3_200
}
