// =============================================================================
// Alert Message Template
// =============================================================================
//
// The fixed HTML template embeds the coin id, price and currency code, 24h
// change, both indicators and the report's UTC generation timestamp. An
// indicator that could not be computed renders as "n/a"; the `Option` only
// becomes display text here, at the formatting boundary.

use crate::types::CoinReport;

/// Marker rendered for an indicator that could not be computed.
const NOT_AVAILABLE: &str = "n/a";

/// Render the alert for one report.
///
/// The price is written with the default float `Display`, which is exact and
/// round-trippable: the id, price and currency can be parsed back out of the
/// message unchanged.
pub fn render(report: &CoinReport, vs_currency: &str) -> String {
    let rsi = report
        .indicators
        .rsi
        .map_or_else(|| NOT_AVAILABLE.to_string(), |v| v.to_string());
    let macd_diff = report
        .indicators
        .macd_diff
        .map_or_else(|| NOT_AVAILABLE.to_string(), |v| v.to_string());

    format!(
        "🚀 <b>{id}</b>\n\
         \n\
         💰 Price: {price} {currency}\n\
         📈 24h Change: {change:.2}%\n\
         📊 RSI: {rsi}\n\
         📉 MACD Diff: {macd_diff}\n\
         🔄 24h Volume: {volume}\n\
         \n\
         ⏰ {generated} UTC",
        id = report.snapshot.id.to_uppercase(),
        price = report.snapshot.price,
        currency = vs_currency.to_uppercase(),
        change = report.snapshot.change_24h,
        volume = grouped_2dp(report.snapshot.volume_24h),
        generated = report.generated_at.format("%Y-%m-%d %H:%M:%S"),
    )
}

/// Render the marker message for a run that found nothing to analyze.
pub fn render_no_data() -> String {
    "ℹ️ No trending coins found this run.".to_string()
}

/// Format a value with two decimals and comma-grouped thousands,
/// e.g. 1234567.5 => "1,234,567.50".
fn grouped_2dp(value: f64) -> String {
    let raw = format!("{value:.2}");
    let (int_part, frac_part) = raw.split_once('.').unwrap_or((raw.as_str(), "00"));
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}{grouped}.{frac_part}")
}
