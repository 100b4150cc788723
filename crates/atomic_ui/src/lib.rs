//! Presentational component library organized by atomic-design tier.
//!
//! Atoms ([`Icon`], [`Text`], [`Button`], [`Badge`]) render one primitive
//! element each, molecules ([`Alert`], [`AlertWithAction`]) compose atoms into
//! a message unit, and the [`NotificationCenter`] organism lays out a capped
//! list of alerts. Every component is a pure function of its props and the
//! [`DesignTokens`] in context; styling is emitted inline next to the
//! `data-ui-*` DOM hooks.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod atoms;
mod molecules;
mod organisms;
mod style;
mod tokens;

pub use atoms::{
    badge_style, button_style, icon_stroke, text_style, Badge, BadgeSize, BadgeVariant, Button,
    ButtonSize, ButtonVariant, Icon, IconName, IconSemantics, Text, TextElement, TextSize,
    TextWeight,
};
pub use molecules::{Alert, AlertAlign, AlertLayout, AlertWithAction, DISMISS_LABEL};
pub use organisms::{
    dismiss_handler, pluralize, Notification, NotificationCenter, NotificationWindow,
    DEFAULT_MAX_VISIBLE, DEFAULT_TITLE, EMPTY_MESSAGE, LIST_LABEL,
};
pub use style::InlineStyle;
pub use tokens::{
    provide_design_tokens, use_design_tokens, AlertVariant, ColorTokens, DesignTokens,
    FontFamilies, FontSizes, FontWeights, NeutralColors, SpacingScale, TokenError, Typography,
    VariantColors,
};

/// Convenience imports for applications composing the component tiers.
pub mod prelude {
    pub use crate::{
        provide_design_tokens, use_design_tokens, Alert, AlertVariant, AlertWithAction, Badge,
        BadgeSize, BadgeVariant, Button, ButtonSize, ButtonVariant, DesignTokens, Icon, IconName,
        Notification, NotificationCenter, Text, TextElement, TextSize, TextWeight,
    };
}
