//! Navigation token propagation.
//!
//! A learner arrives at a lesson from a roadmap step (`?from=<step>`); the
//! lesson's "back to roadmap" link echoes that token so the roadmap can put
//! the learner back where they were. The token is opaque and never parsed.

use url::form_urlencoded;

/// Query parameter carrying the navigation token.
pub const FROM_PARAM: &str = "from";

/// Where the token is placed on an outgoing link.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LinkStyle {
    /// `base?from=<token>`
    #[default]
    Query,
    /// `base#<token>`
    Fragment,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationContext {
    from: Option<String>,
}

impl NavigationContext {
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Wrap an optional token. An empty token is the same as no token.
    #[must_use]
    pub fn from_token(token: Option<&str>) -> Self {
        Self {
            from: token.filter(|t| !t.is_empty()).map(str::to_owned),
        }
    }

    /// Read `from` out of a raw query string (with or without leading `?`).
    /// Other parameters are ignored; the first `from` wins.
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let token = form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == FROM_PARAM)
            .map(|(_, value)| value.into_owned());
        Self::from_token(token.as_deref())
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.from.as_deref()
    }

    #[must_use]
    pub fn is_present(&self) -> bool {
        self.from.is_some()
    }

    /// Build an outgoing link carrying the token, or `base` unchanged when
    /// there is no token.
    #[must_use]
    pub fn link(&self, base: &str, style: LinkStyle) -> String {
        let Some(token) = self.from.as_deref() else {
            return base.to_owned();
        };
        let encoded: String = form_urlencoded::byte_serialize(token.as_bytes()).collect();

        let (path, fragment) = match base.split_once('#') {
            Some((path, fragment)) => (path, Some(fragment)),
            None => (base, None),
        };

        match style {
            LinkStyle::Query => {
                let sep = match path.find('?') {
                    None => "?",
                    Some(_) if path.ends_with('?') || path.ends_with('&') => "",
                    Some(_) => "&",
                };
                let mut out = format!("{path}{sep}{FROM_PARAM}={encoded}");
                if let Some(fragment) = fragment {
                    out.push('#');
                    out.push_str(fragment);
                }
                out
            }
            LinkStyle::Fragment => format!("{path}#{encoded}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn absent_token_leaves_base_untouched() {
        for ctx in [
            NavigationContext::none(),
            NavigationContext::from_token(Some("")),
            NavigationContext::from_query(""),
            NavigationContext::from_query("?other=1"),
        ] {
            assert!(!ctx.is_present());
            let link = ctx.link("/roadmap", LinkStyle::Query);
            assert_eq!(link, "/roadmap");
            assert!(!link.contains("undefined") && !link.contains("null"));
            assert_eq!(ctx.link("/roadmap", LinkStyle::Fragment), "/roadmap");
        }
    }

    #[test]
    fn query_style_picks_separator() {
        let ctx = NavigationContext::from_token(Some("step-4"));
        assert_eq!(ctx.link("/roadmap", LinkStyle::Query), "/roadmap?from=step-4");
        assert_eq!(
            ctx.link("/roadmap?track=kids", LinkStyle::Query),
            "/roadmap?track=kids&from=step-4"
        );
        assert_eq!(
            ctx.link("/roadmap#top", LinkStyle::Query),
            "/roadmap?from=step-4#top"
        );
    }

    #[test]
    fn fragment_style_replaces_fragment() {
        let ctx = NavigationContext::from_token(Some("step-4"));
        assert_eq!(ctx.link("/roadmap#top", LinkStyle::Fragment), "/roadmap#step-4");
    }

    #[test]
    fn from_query_decodes_and_ignores_other_params() {
        let ctx = NavigationContext::from_query("?lang=en&from=budget%20basics&from=later");
        assert_eq!(ctx.token(), Some("budget basics"));
    }

    #[test]
    fn unsafe_characters_are_encoded() {
        let ctx = NavigationContext::from_token(Some("a&b#c"));
        assert_eq!(ctx.link("/r", LinkStyle::Query), "/r?from=a%26b%23c");
    }

    proptest! {
        #[test]
        fn url_safe_tokens_appear_verbatim(token in "[A-Za-z0-9_.-]{1,24}") {
            let ctx = NavigationContext::from_token(Some(&token));
            let link = ctx.link("/roadmap", LinkStyle::Query);
            prop_assert_eq!(link, format!("/roadmap?from={token}"));
            let link = ctx.link("/roadmap", LinkStyle::Fragment);
            prop_assert_eq!(link, format!("/roadmap#{token}"));
        }

        #[test]
        fn any_token_survives_a_round_trip(token in "\\PC{1,24}") {
            let ctx = NavigationContext::from_token(Some(&token));
            let link = ctx.link("/roadmap", LinkStyle::Query);
            let (_, query) = link.split_once('?').unwrap();
            let back = NavigationContext::from_query(query);
            prop_assert_eq!(back.token(), Some(token.as_str()));
        }
    }
}
