//! ISO-4217 currency metadata

use super::MoneyError;

#[derive(Debug, PartialEq, Eq)]
pub struct Currency {
    pub code: &'static str,
    /// Number of decimal digits in the minor unit (2 for cents).
    pub minor_units: u32,
    /// Symbol used when no locale-specific override exists.
    pub symbol: &'static str,
}

impl Currency {
    /// Looks up a currency by its three-letter code, case-insensitively.
    pub fn find(code: &str) -> Result<&'static Currency, MoneyError> {
        let code = code.trim();
        CURRENCIES
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(code))
            .ok_or_else(|| MoneyError::UnknownCurrency(code.to_string()))
    }

    pub fn subunit_factor(&self) -> i64 {
        10i64.pow(self.minor_units)
    }

    /// Alphabetic symbols such as `CHF` are separated from the amount.
    pub fn is_alphabetic_symbol(&self) -> bool {
        self.symbol
            .chars()
            .last()
            .map(|c| c.is_ascii_alphabetic())
            .unwrap_or(false)
    }
}

const fn currency(code: &'static str, minor_units: u32, symbol: &'static str) -> Currency {
    Currency {
        code,
        minor_units,
        symbol,
    }
}

/// Active ISO-4217 codes. Symbols are the English display symbols; codes
/// without one print the code itself.
static CURRENCIES: &[Currency] = &[
    currency("AED", 2, "AED"),
    currency("AFN", 2, "AFN"),
    currency("ALL", 2, "ALL"),
    currency("AMD", 2, "AMD"),
    currency("ANG", 2, "ANG"),
    currency("AOA", 2, "AOA"),
    currency("ARS", 2, "ARS"),
    currency("AUD", 2, "A$"),
    currency("AWG", 2, "AWG"),
    currency("AZN", 2, "AZN"),
    currency("BAM", 2, "BAM"),
    currency("BBD", 2, "BBD"),
    currency("BDT", 2, "BDT"),
    currency("BGN", 2, "BGN"),
    currency("BHD", 3, "BHD"),
    currency("BIF", 0, "BIF"),
    currency("BMD", 2, "BMD"),
    currency("BND", 2, "BND"),
    currency("BOB", 2, "BOB"),
    currency("BOV", 2, "BOV"),
    currency("BRL", 2, "R$"),
    currency("BSD", 2, "BSD"),
    currency("BTN", 2, "BTN"),
    currency("BWP", 2, "BWP"),
    currency("BYN", 2, "BYN"),
    currency("BZD", 2, "BZD"),
    currency("CAD", 2, "CA$"),
    currency("CDF", 2, "CDF"),
    currency("CHE", 2, "CHE"),
    currency("CHF", 2, "CHF"),
    currency("CHW", 2, "CHW"),
    currency("CLF", 4, "CLF"),
    currency("CLP", 0, "CLP"),
    currency("CNY", 2, "CN¥"),
    currency("COP", 2, "COP"),
    currency("COU", 2, "COU"),
    currency("CRC", 2, "CRC"),
    currency("CUC", 2, "CUC"),
    currency("CUP", 2, "CUP"),
    currency("CVE", 2, "CVE"),
    currency("CZK", 2, "CZK"),
    currency("DJF", 0, "DJF"),
    currency("DKK", 2, "DKK"),
    currency("DOP", 2, "DOP"),
    currency("DZD", 2, "DZD"),
    currency("EGP", 2, "EGP"),
    currency("ERN", 2, "ERN"),
    currency("ETB", 2, "ETB"),
    currency("EUR", 2, "€"),
    currency("FJD", 2, "FJD"),
    currency("FKP", 2, "FKP"),
    currency("GBP", 2, "£"),
    currency("GEL", 2, "GEL"),
    currency("GHS", 2, "GHS"),
    currency("GIP", 2, "GIP"),
    currency("GMD", 2, "GMD"),
    currency("GNF", 0, "GNF"),
    currency("GTQ", 2, "GTQ"),
    currency("GYD", 2, "GYD"),
    currency("HKD", 2, "HK$"),
    currency("HNL", 2, "HNL"),
    currency("HTG", 2, "HTG"),
    currency("HUF", 2, "HUF"),
    currency("IDR", 2, "IDR"),
    currency("ILS", 2, "₪"),
    currency("INR", 2, "₹"),
    currency("IQD", 3, "IQD"),
    currency("IRR", 2, "IRR"),
    currency("ISK", 0, "ISK"),
    currency("JMD", 2, "JMD"),
    currency("JOD", 3, "JOD"),
    currency("JPY", 0, "¥"),
    currency("KES", 2, "KES"),
    currency("KGS", 2, "KGS"),
    currency("KHR", 2, "KHR"),
    currency("KMF", 0, "KMF"),
    currency("KPW", 2, "KPW"),
    currency("KRW", 0, "₩"),
    currency("KWD", 3, "KWD"),
    currency("KYD", 2, "KYD"),
    currency("KZT", 2, "KZT"),
    currency("LAK", 2, "LAK"),
    currency("LBP", 2, "LBP"),
    currency("LKR", 2, "LKR"),
    currency("LRD", 2, "LRD"),
    currency("LSL", 2, "LSL"),
    currency("LYD", 3, "LYD"),
    currency("MAD", 2, "MAD"),
    currency("MDL", 2, "MDL"),
    currency("MGA", 2, "MGA"),
    currency("MKD", 2, "MKD"),
    currency("MMK", 2, "MMK"),
    currency("MNT", 2, "MNT"),
    currency("MOP", 2, "MOP"),
    currency("MRU", 2, "MRU"),
    currency("MUR", 2, "MUR"),
    currency("MVR", 2, "MVR"),
    currency("MWK", 2, "MWK"),
    currency("MXN", 2, "MX$"),
    currency("MXV", 2, "MXV"),
    currency("MYR", 2, "MYR"),
    currency("MZN", 2, "MZN"),
    currency("NAD", 2, "NAD"),
    currency("NGN", 2, "NGN"),
    currency("NIO", 2, "NIO"),
    currency("NOK", 2, "NOK"),
    currency("NPR", 2, "NPR"),
    currency("NZD", 2, "NZ$"),
    currency("OMR", 3, "OMR"),
    currency("PAB", 2, "PAB"),
    currency("PEN", 2, "PEN"),
    currency("PGK", 2, "PGK"),
    currency("PHP", 2, "₱"),
    currency("PKR", 2, "PKR"),
    currency("PLN", 2, "PLN"),
    currency("PYG", 0, "PYG"),
    currency("QAR", 2, "QAR"),
    currency("RON", 2, "RON"),
    currency("RSD", 2, "RSD"),
    currency("RUB", 2, "RUB"),
    currency("RWF", 0, "RWF"),
    currency("SAR", 2, "SAR"),
    currency("SBD", 2, "SBD"),
    currency("SCR", 2, "SCR"),
    currency("SDG", 2, "SDG"),
    currency("SEK", 2, "SEK"),
    currency("SGD", 2, "SGD"),
    currency("SHP", 2, "SHP"),
    currency("SLE", 2, "SLE"),
    currency("SLL", 2, "SLL"),
    currency("SOS", 2, "SOS"),
    currency("SRD", 2, "SRD"),
    currency("SSP", 2, "SSP"),
    currency("STN", 2, "STN"),
    currency("SVC", 2, "SVC"),
    currency("SYP", 2, "SYP"),
    currency("SZL", 2, "SZL"),
    currency("THB", 2, "THB"),
    currency("TJS", 2, "TJS"),
    currency("TMT", 2, "TMT"),
    currency("TND", 3, "TND"),
    currency("TOP", 2, "TOP"),
    currency("TRY", 2, "TRY"),
    currency("TTD", 2, "TTD"),
    currency("TWD", 2, "NT$"),
    currency("TZS", 2, "TZS"),
    currency("UAH", 2, "UAH"),
    currency("UGX", 0, "UGX"),
    currency("USD", 2, "$"),
    currency("USN", 2, "USN"),
    currency("UYI", 0, "UYI"),
    currency("UYU", 2, "UYU"),
    currency("UYW", 4, "UYW"),
    currency("UZS", 2, "UZS"),
    currency("VED", 2, "VED"),
    currency("VES", 2, "VES"),
    currency("VND", 0, "₫"),
    currency("VUV", 0, "VUV"),
    currency("WST", 2, "WST"),
    currency("XAF", 0, "FCFA"),
    currency("XCD", 2, "EC$"),
    currency("XOF", 0, "F CFA"),
    currency("XPF", 0, "CFPF"),
    currency("YER", 2, "YER"),
    currency("ZAR", 2, "ZAR"),
    currency("ZMW", 2, "ZMW"),
    currency("ZWG", 2, "ZWG"),
    currency("ZWL", 2, "ZWL"),
];
