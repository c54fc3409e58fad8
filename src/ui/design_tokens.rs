// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared design constants for the comparison view.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale

## Examples

```
use iced_compare::ui::design_tokens::{palette, opacity};
use iced::Color;

let caption_bg = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);

    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Comparison handle
    pub const DIVIDER_LINE: f32 = 2.0;
    pub const HANDLE_KNOB_RADIUS: f32 = 14.0;
    /// Extra distance around line and knob that still counts as a hit.
    pub const HANDLE_HIT_SLOP: f32 = 8.0;
    pub const HANDLE_OUTLINE: f32 = 2.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Standard body - Captions over the layers
    pub const BODY: f32 = 14.0;

    /// Caption - Status line
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);

    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);
    assert!(opacity::OVERLAY_STRONG > opacity::OVERLAY_MEDIUM);

    assert!(sizing::HANDLE_KNOB_RADIUS > sizing::DIVIDER_LINE);

    assert!(typography::BODY > typography::CAPTION);
};
