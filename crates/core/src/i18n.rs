//! Locale negotiation and message placeholder substitution.

/// Default message language.
pub const DEFAULT_LOCALE: &str = "zh_CN";

/// Supported locale tags and their canonical forms.
const SUPPORTED: &[(&str, &str)] = &[
    ("zh_cn", "zh_CN"),
    ("zh_hk", "zh_HK"),
    ("zh_tw", "zh_TW"),
    ("en", "en"),
    ("ja", "ja"),
    ("ko", "ko"),
    ("fr", "fr"),
    ("de", "de"),
    ("es", "es"),
    ("it", "it"),
    ("pt", "pt"),
    ("ru", "ru"),
];

/// Canonicalize a locale tag (`zh-HK`, `zh_hk` → `zh_HK`). Unknown tags are
/// rejected so callers fall back to the default.
pub fn normalize(tag: &str) -> Option<&'static str> {
    let key = tag.trim().replace('-', "_").to_ascii_lowercase();
    SUPPORTED
        .iter()
        .find(|(raw, _)| *raw == key)
        .map(|(_, canonical)| *canonical)
}

/// Pick the request locale from an `Accept-Language` header value: the first
/// supported tag wins, otherwise [`DEFAULT_LOCALE`].
pub fn negotiate(accept_language: Option<&str>) -> &'static str {
    let Some(header) = accept_language else {
        return DEFAULT_LOCALE;
    };

    for part in header.split(',') {
        let tag = part.split(';').next().unwrap_or("").trim();
        if tag.is_empty() {
            continue;
        }
        if let Some(canonical) = normalize(tag) {
            return canonical;
        }
    }

    DEFAULT_LOCALE
}

/// Substitute `{key}` placeholders in `template` with the matching param.
///
/// The template is scanned once, so substitution is order-independent and a
/// param value containing `{other}` is never re-substituted. Placeholders
/// with no matching param stay literal.
pub fn render(template: &str, params: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let key = &after[..close];
                match params.iter().find(|(k, _)| *k == key) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(key);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                // Unterminated brace: keep the rest literally.
                out.push_str(&rest[open..]);
                return out;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn negotiates_first_supported_tag() {
        assert_eq!(negotiate(Some("zh-HK,zh;q=0.9,en;q=0.8")), "zh_HK");
        assert_eq!(negotiate(Some("en-US,en;q=0.9")), "en");
        assert_eq!(negotiate(Some("xx,yy")), DEFAULT_LOCALE);
        assert_eq!(negotiate(None), DEFAULT_LOCALE);
    }

    #[test]
    fn normalizes_case_and_separator() {
        assert_eq!(normalize("ZH-hk"), Some("zh_HK"));
        assert_eq!(normalize("zh_CN"), Some("zh_CN"));
        assert_eq!(normalize("klingon"), None);
    }

    #[test]
    fn renders_placeholders() {
        assert_eq!(
            render("字段（{field}）不能为空", &[("field", "email")]),
            "字段（email）不能为空"
        );
        assert_eq!(
            render("({a}) [{b}]", &[("b", "two"), ("a", "one")]),
            "(one) [two]"
        );
    }

    #[test]
    fn missing_params_stay_literal() {
        assert_eq!(render("hello {name}", &[]), "hello {name}");
        assert_eq!(render("dangling {brace", &[]), "dangling {brace");
    }

    #[test]
    fn values_are_not_resubstituted() {
        // A param value that looks like a placeholder must come through as-is.
        assert_eq!(
            render("{a} {b}", &[("a", "{b}"), ("b", "B")]),
            "{b} B"
        );
    }

    proptest! {
        #[test]
        fn render_without_braces_is_identity(s in "[^{}]*") {
            prop_assert_eq!(render(&s, &[("k", "v")]), s);
        }

        #[test]
        fn param_order_is_irrelevant(a in "[a-z0-9]{0,8}", b in "[a-z0-9]{0,8}") {
            let forward = render("{x}-{y}", &[("x", a.as_str()), ("y", b.as_str())]);
            let reverse = render("{x}-{y}", &[("y", b.as_str()), ("x", a.as_str())]);
            prop_assert_eq!(forward, reverse);
        }
    }
}
