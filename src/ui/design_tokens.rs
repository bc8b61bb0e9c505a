// SPDX-License-Identifier: MPL-2.0
//! Design tokens: colors, spacing, component sizes and font sizes.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Fixed height of the toolbar above the image area.
    pub const TOOLBAR_HEIGHT: f32 = 48.0;

    /// Fixed height of the status bar below the image area.
    pub const STATUS_BAR_HEIGHT: f32 = 32.0;

    /// Stroke width of the cursor overlay circle.
    pub const CURSOR_STROKE: f32 = 2.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    pub const TITLE_LG: f32 = 30.0;
    pub const CAPTION: f32 = 12.0;
}

const _: () = {
    assert!(spacing::MD == spacing::XS * 2.0);
    assert!(spacing::LG == spacing::XS * 3.0);
    assert!(sizing::TOOLBAR_HEIGHT > 0.0);
    assert!(sizing::STATUS_BAR_HEIGHT > 0.0);
    assert!(typography::TITLE_LG > typography::CAPTION);
};
