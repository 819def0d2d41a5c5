//! Marketing copy categories.
//!
//! The content type selects which extra suggestion rules run on top of the
//! common ones (see [`crate::suggestions`]).

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ParseContentTypeError;

/// The kind of copy being critiqued.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ContentType {
    /// Email body copy.
    #[default]
    Email,
    /// Call-to-action button or link label.
    Cta,
    /// Landing page text.
    LandingPage,
    /// Social network advertisement.
    SocialAd,
}

impl ContentType {
    /// Every content type, in display order.
    pub const ALL: [Self; 4] = [Self::Email, Self::Cta, Self::LandingPage, Self::SocialAd];

    /// Returns the kebab-case label used in config files and on the command line.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Cta => "cta",
            Self::LandingPage => "landing-page",
            Self::SocialAd => "social-ad",
        }
    }

    /// Human-readable label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Cta => "CTA",
            Self::LandingPage => "Texte de landing page",
            Self::SocialAd => "Publicité réseaux sociaux",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = ParseContentTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|ct| ct.as_str() == wanted)
            .ok_or_else(|| ParseContentTypeError {
                name: s.to_string(),
                available: Self::ALL.map(|ct| ct.as_str()).join(", "),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_label() {
        for ct in ContentType::ALL {
            assert_eq!(ct.as_str().parse::<ContentType>().unwrap(), ct);
        }
    }

    #[test]
    fn parse_ignores_case_and_padding() {
        assert_eq!(
            " Landing-Page ".parse::<ContentType>().unwrap(),
            ContentType::LandingPage
        );
    }

    #[test]
    fn unknown_label_lists_alternatives() {
        let err = "newsletter".parse::<ContentType>().unwrap_err();
        assert_eq!(err.name, "newsletter");
        assert_eq!(err.available, "email, cta, landing-page, social-ad");
        assert!(err.to_string().starts_with("unknown content type: newsletter"));
    }

    #[test]
    fn default_is_email() {
        assert_eq!(ContentType::default(), ContentType::Email);
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&ContentType::SocialAd).unwrap();
        assert_eq!(json, "\"social-ad\"");
        let back: ContentType = serde_json::from_str("\"landing-page\"").unwrap();
        assert_eq!(back, ContentType::LandingPage);
    }
}
