//! Output line formatting.

use rust_decimal::{Decimal, RoundingStrategy};

use topln_types::{ConversionRequest, RateQuote};

const DECIMAL_PLACES: u32 = 4;

/// Formats a conversion as
/// `<date>; 1 <CODE> = <rate> PLN; <amount> <CODE> = <total> PLN`,
/// with every number printed to four decimal places.
///
/// `total` is the PLN value of the request at `quote`, computed by the caller
/// with overflow checking.
pub fn format_report(request: &ConversionRequest, quote: &RateQuote, total: Decimal) -> String {
    let code = request.currency();
    format!(
        "{}; 1 {} = {} PLN; {} {} = {} PLN",
        quote.as_of,
        code,
        fixed(quote.unit_rate),
        fixed(request.amount()),
        code,
        fixed(total),
    )
}

fn fixed(value: Decimal) -> String {
    let mut value =
        value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    value.rescale(DECIMAL_PLACES);
    value.to_string()
}
