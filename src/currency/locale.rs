//! Locale and currency conventions used by the formatter.

/// No-break space, used between symbol and number.
pub(crate) const NBSP: &str = "\u{a0}";

/// Narrow no-break space, the French group separator.
const NNBSP: &str = "\u{202f}";

/// Where the currency symbol goes relative to the number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SymbolPosition {
    /// `R$ 10,00`, `$10.00`. `spaced` adds a no-break space.
    Prefix { spaced: bool },
    /// `10,00 €`.
    Suffix,
}

/// Number formatting conventions for one locale.
#[derive(Clone, Copy, Debug)]
pub(crate) struct LocaleStyle {
    pub tag: &'static str,
    pub group: &'static str,
    pub decimal: &'static str,
    pub position: SymbolPosition,
}

const STYLES: &[LocaleStyle] = &[
    LocaleStyle { tag: "pt-BR", group: ".", decimal: ",", position: SymbolPosition::Prefix { spaced: true } },
    LocaleStyle { tag: "en-US", group: ",", decimal: ".", position: SymbolPosition::Prefix { spaced: false } },
    LocaleStyle { tag: "en-GB", group: ",", decimal: ".", position: SymbolPosition::Prefix { spaced: false } },
    LocaleStyle { tag: "de-DE", group: ".", decimal: ",", position: SymbolPosition::Suffix },
    LocaleStyle { tag: "fr-FR", group: NNBSP, decimal: ",", position: SymbolPosition::Suffix },
    LocaleStyle { tag: "ja-JP", group: ",", decimal: ".", position: SymbolPosition::Prefix { spaced: false } },
];

/// Look up a locale by tag, ignoring ASCII case.
pub(crate) fn style_for(locale: &str) -> Option<&'static LocaleStyle> {
    STYLES.iter().find(|s| s.tag.eq_ignore_ascii_case(locale))
}

/// Conventions used when a locale is not known.
pub(crate) fn fallback_style() -> &'static LocaleStyle {
    &STYLES[1]
}

/// All supported locale tags.
pub fn supported_locales() -> impl Iterator<Item = &'static str> {
    STYLES.iter().map(|s| s.tag)
}

/// Currency symbol as displayed in `locale`.
///
/// Unknown codes display as the code itself.
pub(crate) fn symbol_for<'a>(currency_code: &'a str, locale: &LocaleStyle) -> &'a str {
    match currency_code {
        "BRL" => "R$",
        "USD" if locale.tag == "en-US" => "$",
        "USD" => "US$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" if locale.tag == "ja-JP" => "￥",
        "JPY" => "¥",
        other => other,
    }
}

/// Minor-unit digits for a currency.
pub(crate) fn fraction_digits(currency_code: &str) -> u32 {
    match currency_code {
        "JPY" | "KRW" | "CLP" | "ISK" => 0,
        _ => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_lookup_ignores_case() {
        assert_eq!(style_for("pt-br").map(|s| s.tag), Some("pt-BR"));
        assert!(style_for("xx-YY").is_none());
    }

    #[test]
    fn test_symbols() {
        let br = style_for("pt-BR").unwrap();
        let us = style_for("en-US").unwrap();
        assert_eq!(symbol_for("BRL", br), "R$");
        assert_eq!(symbol_for("USD", us), "$");
        assert_eq!(symbol_for("USD", br), "US$");
        assert_eq!(symbol_for("CHF", us), "CHF");
    }

    #[test]
    fn test_fraction_digits() {
        assert_eq!(fraction_digits("JPY"), 0);
        assert_eq!(fraction_digits("BRL"), 2);
    }

    #[test]
    fn test_supported_locales_include_default() {
        assert!(supported_locales().any(|tag| tag == "pt-BR"));
    }
}
