//! Display Formatting
//!
//! Compact human-readable numbers shared by the rendering layer and the
//! analysis prompt builder.

use rust_decimal::Decimal;

const BILLION: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);
const MILLION: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);
const THOUSAND: Decimal = Decimal::from_parts(1_000, 0, 0, false, 0);

/// Formats a USD amount as `$x.xxB` / `$x.xxM` / `$x.xxK`, or `-` for zero
/// (zero means "not yet priced" everywhere this is rendered).
pub fn format_usd(value: Decimal) -> String {
    if value.is_zero() {
        return "-".into();
    }
    if value >= BILLION {
        format!("${:.2}B", value / BILLION)
    } else if value >= MILLION {
        format!("${:.2}M", value / MILLION)
    } else if value >= THOUSAND {
        format!("${:.2}K", value / THOUSAND)
    } else {
        format!("${:.2}", value)
    }
}

/// Formats a raw count as `x.xxM` / `x.xxK`, or `-` for zero.
pub fn format_count(value: u64) -> String {
    if value == 0 {
        return "-".into();
    }
    let value = Decimal::from(value);
    if value >= MILLION {
        format!("{:.2}M", value / MILLION)
    } else if value >= THOUSAND {
        format!("{:.2}K", value / THOUSAND)
    } else {
        value.to_string()
    }
}
