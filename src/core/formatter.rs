// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Result formatting for display

/// Decimal places kept when rounding away floating-point noise
pub const DISPLAY_PRECISION: usize = 10;

/// Format a numeric result for the display
///
/// - Rounds to 10 decimal places (`0.1 + 0.2` shows as `0.3`)
/// - Whole numbers have no decimal point (`4`, not `4.0`)
/// - Otherwise the shortest decimal form is used (`0.3333333333`)
///
/// # Example
/// ```ignore
/// assert_eq!(format_result(4.0), "4");
/// assert_eq!(format_result(5.5), "5.5");
/// ```
pub fn format_result(value: f64) -> String {
    let rounded = round_to_precision(value, DISPLAY_PRECISION);

    if rounded == rounded.trunc() {
        // Also turns -0 into 0
        format!("{:.0}", rounded + 0.0)
    } else {
        format!("{}", rounded)
    }
}

/// Round to `places` decimal places
///
/// Goes through the decimal string rather than scaling by `10^places`,
/// which would reintroduce representation noise (`263861.09` would come
/// back as `263861.0900000001`).
pub fn round_to_precision(value: f64, places: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }

    format!("{:.*}", places, value).parse().unwrap_or(value)
}
