//! Design tokens consumed by every component tier.
//!
//! Tokens are plain configuration: a palette with one color quad per
//! [`AlertVariant`], a neutral grayscale, a spacing scale, and a typography
//! scale. The built-in set is returned by [`DesignTokens::default`]; hosts that
//! ship their own token file load it with [`DesignTokens::from_json`] and hand
//! it to the component tree through [`provide_design_tokens`].

use std::rc::Rc;

use leptos::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Semantic message variants shared by alerts, notifications, and icon tinting.
pub enum AlertVariant {
    /// Completed or positive outcome.
    Success,
    /// Attention required, not yet a failure.
    Warning,
    /// Failed operation.
    Error,
    /// Neutral information.
    Info,
}

impl AlertVariant {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 4] = [Self::Success, Self::Warning, Self::Error, Self::Info];

    /// Stable lowercase token used for labels and `data-ui-variant` hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

#[derive(Debug, Error)]
/// Errors raised while loading an external token file.
pub enum TokenError {
    /// The document is not valid JSON or does not match the token schema.
    #[error("design tokens could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),
    /// A color token is not a `#` hex literal.
    #[error("color token `{token}` must be a hex literal, got `{value}`")]
    InvalidColor {
        /// Dotted token path.
        token: String,
        /// Offending value.
        value: String,
    },
    /// A spacing or font-size token is not a pixel length.
    #[error("length token `{token}` must be a px value, got `{value}`")]
    InvalidLength {
        /// Dotted token path.
        token: String,
        /// Offending value.
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Background, border, text, and icon colors for one semantic variant.
pub struct VariantColors {
    /// Container fill.
    pub background: String,
    /// Container outline.
    pub border: String,
    /// Foreground copy.
    pub text: String,
    /// Saturated accent used for glyph strokes.
    pub icon: String,
}

impl VariantColors {
    fn new(background: &str, border: &str, text: &str, icon: &str) -> Self {
        Self {
            background: background.to_string(),
            border: border.to_string(),
            text: text.to_string(),
            icon: icon.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Neutral grayscale ramp.
pub struct NeutralColors {
    /// Pure white surface.
    pub white: String,
    /// Lightest gray.
    pub gray100: String,
    /// Subtle fill and dividers.
    pub gray200: String,
    /// Outlines.
    pub gray300: String,
    /// Muted copy.
    pub gray600: String,
    /// Dark copy on light fills.
    pub gray800: String,
    /// Default body copy.
    pub gray900: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Full color palette.
pub struct ColorTokens {
    /// Grayscale ramp.
    pub neutral: NeutralColors,
    /// Success quad.
    pub success: VariantColors,
    /// Warning quad.
    pub warning: VariantColors,
    /// Error quad.
    pub error: VariantColors,
    /// Info quad.
    pub info: VariantColors,
}

impl ColorTokens {
    /// Returns the color quad for a semantic variant.
    pub fn variant(&self, variant: AlertVariant) -> &VariantColors {
        match variant {
            AlertVariant::Success => &self.success,
            AlertVariant::Warning => &self.warning,
            AlertVariant::Error => &self.error,
            AlertVariant::Info => &self.info,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Spacing scale in CSS pixel lengths.
pub struct SpacingScale {
    /// Extra small step.
    pub xs: String,
    /// Small step.
    pub sm: String,
    /// Medium step.
    pub md: String,
    /// Large step.
    pub lg: String,
    /// Extra large step.
    pub xl: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Font family stacks.
pub struct FontFamilies {
    /// Body copy stack.
    pub base: String,
    /// Code stack.
    pub mono: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Font-size steps.
pub struct FontSizes {
    /// Fine print.
    pub xs: String,
    /// Secondary copy.
    pub sm: String,
    /// Body copy.
    pub base: String,
    /// Section headings.
    pub lg: String,
    /// Page headings.
    pub xl: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Numeric font-weight steps.
pub struct FontWeights {
    /// Regular copy.
    pub normal: u16,
    /// Controls and badges.
    pub medium: u16,
    /// Emphasis.
    pub semibold: u16,
    /// Titles.
    pub bold: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Typography scale.
pub struct Typography {
    /// Family stacks.
    pub font_family: FontFamilies,
    /// Size steps.
    pub font_size: FontSizes,
    /// Weight steps.
    pub font_weight: FontWeights,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Complete token set consumed by the component tiers.
pub struct DesignTokens {
    /// Palette.
    pub colors: ColorTokens,
    /// Spacing scale.
    pub spacing: SpacingScale,
    /// Typography scale.
    pub typography: Typography,
}

impl Default for DesignTokens {
    fn default() -> Self {
        Self {
            colors: ColorTokens {
                neutral: NeutralColors {
                    white: "#ffffff".to_string(),
                    gray100: "#f8f9fa".to_string(),
                    gray200: "#e9ecef".to_string(),
                    gray300: "#dee2e6".to_string(),
                    gray600: "#6c757d".to_string(),
                    gray800: "#343a40".to_string(),
                    gray900: "#212529".to_string(),
                },
                success: VariantColors::new("#d4edda", "#c3e6cb", "#155724", "#28a745"),
                warning: VariantColors::new("#fff3cd", "#ffeeba", "#856404", "#ffc107"),
                error: VariantColors::new("#f8d7da", "#f5c6cb", "#721c24", "#dc3545"),
                info: VariantColors::new("#d1ecf1", "#bee5eb", "#0c5460", "#17a2b8"),
            },
            spacing: SpacingScale {
                xs: "4px".to_string(),
                sm: "8px".to_string(),
                md: "16px".to_string(),
                lg: "24px".to_string(),
                xl: "32px".to_string(),
            },
            typography: Typography {
                font_family: FontFamilies {
                    base: "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif"
                        .to_string(),
                    mono: "'SFMono-Regular', Menlo, Consolas, monospace".to_string(),
                },
                font_size: FontSizes {
                    xs: "12px".to_string(),
                    sm: "14px".to_string(),
                    base: "16px".to_string(),
                    lg: "18px".to_string(),
                    xl: "20px".to_string(),
                },
                font_weight: FontWeights {
                    normal: 400,
                    medium: 500,
                    semibold: 600,
                    bold: 700,
                },
            },
        }
    }
}

impl DesignTokens {
    /// Parses and validates a token document.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Parse`] for malformed JSON and
    /// [`TokenError::InvalidColor`] / [`TokenError::InvalidLength`] when a value
    /// does not have the expected CSS shape.
    pub fn from_json(raw: &str) -> Result<Self, TokenError> {
        let tokens: Self = serde_json::from_str(raw)?;
        tokens.validate()?;
        Ok(tokens)
    }

    /// Checks that every color is a hex literal and every length a px value.
    ///
    /// # Errors
    ///
    /// Returns the first offending token.
    pub fn validate(&self) -> Result<(), TokenError> {
        let neutral = &self.colors.neutral;
        for (name, value) in [
            ("white", &neutral.white),
            ("gray100", &neutral.gray100),
            ("gray200", &neutral.gray200),
            ("gray300", &neutral.gray300),
            ("gray600", &neutral.gray600),
            ("gray800", &neutral.gray800),
            ("gray900", &neutral.gray900),
        ] {
            check_color(&format!("colors.neutral.{name}"), value)?;
        }

        for variant in AlertVariant::ALL {
            let quad = self.colors.variant(variant);
            let prefix = format!("colors.{}", variant.token());
            check_color(&format!("{prefix}.background"), &quad.background)?;
            check_color(&format!("{prefix}.border"), &quad.border)?;
            check_color(&format!("{prefix}.text"), &quad.text)?;
            check_color(&format!("{prefix}.icon"), &quad.icon)?;
        }

        let spacing = &self.spacing;
        for (name, value) in [
            ("xs", &spacing.xs),
            ("sm", &spacing.sm),
            ("md", &spacing.md),
            ("lg", &spacing.lg),
            ("xl", &spacing.xl),
        ] {
            check_length(&format!("spacing.{name}"), value)?;
        }

        let sizes = &self.typography.font_size;
        for (name, value) in [
            ("xs", &sizes.xs),
            ("sm", &sizes.sm),
            ("base", &sizes.base),
            ("lg", &sizes.lg),
            ("xl", &sizes.xl),
        ] {
            check_length(&format!("typography.fontSize.{name}"), value)?;
        }

        Ok(())
    }
}

fn check_color(token: &str, value: &str) -> Result<(), TokenError> {
    let hex = value.strip_prefix('#').unwrap_or_default();
    let valid = matches!(hex.len(), 3 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit());
    if valid {
        Ok(())
    } else {
        Err(TokenError::InvalidColor {
            token: token.to_string(),
            value: value.to_string(),
        })
    }
}

fn check_length(token: &str, value: &str) -> Result<(), TokenError> {
    let valid = value
        .strip_suffix("px")
        .is_some_and(|number| number.parse::<f32>().is_ok_and(|px| px >= 0.0));
    if valid {
        Ok(())
    } else {
        Err(TokenError::InvalidLength {
            token: token.to_string(),
            value: value.to_string(),
        })
    }
}

#[derive(Debug, Clone)]
struct DesignTokenContext(Rc<DesignTokens>);

/// Makes `tokens` available to every component rendered below the current owner.
pub fn provide_design_tokens(tokens: DesignTokens) {
    provide_context(DesignTokenContext(Rc::new(tokens)));
}

/// Returns the tokens provided by the nearest [`provide_design_tokens`] call.
///
/// Falls back to [`DesignTokens::default`] when none were provided.
pub fn use_design_tokens() -> Rc<DesignTokens> {
    use_context::<DesignTokenContext>()
        .map(|context| context.0)
        .unwrap_or_else(|| Rc::new(DesignTokens::default()))
}
