//! Inline SVG icons.
//!
//! All glyphs use a 256x256 view box and are filled with `currentColor`.
//! Feature and social glyphs are chosen through exhaustive matches on
//! [`FeatureIcon`] and [`SocialPlatform`].

use leptos::prelude::*;

use crate::content::{FeatureIcon, SocialPlatform};

/// Renders an inline SVG icon from a path data string.
///
/// # Props
///
/// * `path` - SVG path data (d attribute)
/// * `size` - Icon size in pixels (default: "20")
/// * `color` - Fill color (default: "currentColor")
/// * `class` - Additional CSS classes (default: "")
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon path=ICON_MAP_PIN size="16" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    #[prop(into)]
    path: &'static str,
    /// Icon size in pixels
    #[prop(default = "20")]
    size: &'static str,
    /// Fill color (CSS color value)
    #[prop(default = "currentColor")]
    color: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            fill=color
            viewBox="0 0 256 256"
            class=class
            aria-hidden="true"
        >
            <path d=path fill-rule="evenodd"></path>
        </svg>
    }
}

impl FeatureIcon {
    /// SVG path data for this glyph.
    pub fn glyph(self) -> &'static str {
        match self {
            FeatureIcon::ShieldCheck => ICON_SHIELD_CHECK,
            FeatureIcon::Home => ICON_HOUSE,
            FeatureIcon::Users => ICON_USERS,
            FeatureIcon::Award => ICON_AWARD,
            FeatureIcon::Building => ICON_BUILDINGS,
            FeatureIcon::Handshake => ICON_HANDSHAKE,
            FeatureIcon::Headset => ICON_HEADSET,
            FeatureIcon::TrendingUp => ICON_TRENDING_UP,
            FeatureIcon::Key => ICON_KEY,
            FeatureIcon::MapPin => ICON_MAP_PIN,
            FeatureIcon::Other => ICON_SPARKLE,
        }
    }
}

impl SocialPlatform {
    /// SVG path data for this glyph.
    pub fn glyph(self) -> &'static str {
        match self {
            SocialPlatform::Facebook => ICON_FACEBOOK,
            SocialPlatform::Instagram => ICON_INSTAGRAM,
            SocialPlatform::Twitter => ICON_X,
            SocialPlatform::Linkedin => ICON_LINKEDIN,
            SocialPlatform::Youtube => ICON_YOUTUBE,
            SocialPlatform::Whatsapp => ICON_WHATSAPP,
            SocialPlatform::Other => ICON_LINK,
        }
    }
}

// =============================================================================
// Interface glyphs
// =============================================================================

/// Caret/chevron down icon (FAQ accordion)
pub const ICON_CARET_DOWN: &str = "M213.66,101.66l-80,80a8,8,0,0,1-11.32,0l-80-80A8,8,0,0,1,53.66,90.34L128,164.69l74.34-74.35a8,8,0,0,1,11.32,11.32Z";

pub const ICON_CARET_LEFT: &str = "M165.66,202.34a8,8,0,0,1-11.32,11.32l-80-80a8,8,0,0,1,0-11.32l80-80a8,8,0,0,1,11.32,11.32L91.31,128Z";

pub const ICON_CARET_RIGHT: &str = "M181.66,133.66l-80,80a8,8,0,0,1-11.32-11.32L164.69,128,90.34,53.66a8,8,0,0,1,11.32-11.32l80,80A8,8,0,0,1,181.66,133.66Z";

/// Close (X) icon
pub const ICON_CLOSE: &str = "M205.66,194.34a8,8,0,0,1-11.32,11.32L128,139.31,61.66,205.66a8,8,0,0,1-11.32-11.32L116.69,128,50.34,61.66A8,8,0,0,1,61.66,50.34L128,116.69l66.34-66.35a8,8,0,0,1,11.32,11.32L139.31,128Z";

/// Play icon (virtual tours)
pub const ICON_PLAY: &str = "M72,40V216L216,128Z";

/// Bed icon (project cards)
pub const ICON_BED: &str = "M24,72V208H40V176H216v32h16V136a40,40,0,0,0-40-40H112v64H40V72Zm56,40a24,24,0,1,0-24-24A24,24,0,0,0,80,112Z";

// =============================================================================
// Feature glyphs
// =============================================================================

pub const ICON_SHIELD_CHECK: &str = "M128,24,216,56v64c0,56-40,96-88,112C80,216,40,176,40,120V56Zm-12,140,60-60-12-12-48,48-20-20-12,12Z";

pub const ICON_HOUSE: &str = "M128,32,24,120H56v104h56V160h32v64h56V120h32Z";

pub const ICON_USERS: &str = "M96,120a40,40,0,1,0-40-40A40,40,0,0,0,96,120Zm64,0a32,32,0,1,0-32-32A32,32,0,0,0,160,120ZM16,216c0-44,36-72,80-72s80,28,80,72Zm176,0c0-24-8-44-24-58,40-6,72,18,72,58Z";

pub const ICON_AWARD: &str = "M128,24a64,64,0,1,0,64,64A64,64,0,0,0,128,24ZM88,160l-24,72,40-16,24,32,16-64Zm80,0,24,72-40-16-24,32-16-64Z";

pub const ICON_BUILDINGS: &str = "M40,224V48H152V224Zm128,0V104h48V224ZM64,72v24H88V72Zm40,0v24h24V72ZM64,120v24H88V120Zm40,0v24h24V120ZM64,168v24H88V168Zm40,0v24h24V168Z";

pub const ICON_HANDSHAKE: &str = "M16,104,64,56l48,24,16-8,16,8,48-24,48,48-40,40-48,48a16,16,0,0,1-24,0L56,152Z";

pub const ICON_HEADSET: &str = "M128,32A96,96,0,0,0,32,128v56a24,24,0,0,0,24,24H80V136H48v-8a80,80,0,0,1,160,0v8H176v72h24a24,24,0,0,0,24-24V128A96,96,0,0,0,128,32Z";

pub const ICON_TRENDING_UP: &str = "M24,184l72-72,40,40,64-64H168V72h64v64H216V104l-80,80-40-40L40,200Z";

pub const ICON_KEY: &str = "M160,24a72,72,0,0,0-68,96L24,188v44H68V208H92V184h24l20-20A72,72,0,1,0,160,24Zm24,64a16,16,0,1,1,16-16A16,16,0,0,1,184,88Z";

pub const ICON_MAP_PIN: &str = "M128,16a80,80,0,0,0-80,80c0,72,80,144,80,144s80-72,80-144A80,80,0,0,0,128,16Zm0,112a32,32,0,1,1,32-32A32,32,0,0,1,128,128Z";

/// Neutral glyph for unrecognised feature icons
pub const ICON_SPARKLE: &str = "M128,16l28,84,84,28-84,28-28,84-28-84-84-28,84-28Z";

// =============================================================================
// Social glyphs
// =============================================================================

pub const ICON_FACEBOOK: &str = "M144,232V144h32l8-40H144V80c0-12,4-20,20-20h24V24a224,224,0,0,0-32-2c-32,0-52,20-52,54v28H72v40h32v88Z";

pub const ICON_INSTAGRAM: &str = "M80,24h96a56,56,0,0,1,56,56v96a56,56,0,0,1-56,56H80a56,56,0,0,1-56-56V80A56,56,0,0,1,80,24Zm0,20A36,36,0,0,0,44,80v96a36,36,0,0,0,36,36h96a36,36,0,0,0,36-36V80a36,36,0,0,0-36-36Zm48,36a48,48,0,1,1-48,48A48,48,0,0,1,128,80Zm0,20a28,28,0,1,0,28,28A28,28,0,0,0,128,100Zm52-36a12,12,0,1,1-12,12A12,12,0,0,1,180,64Z";

pub const ICON_X: &str = "M40,32H96l40,56,48-56h24L146,106l74,118H164l-44-64-56,64H40l70-82Z";

pub const ICON_LINKEDIN: &str = "M40,96H80V224H40Zm20-64a24,24,0,1,1-24,24A24,24,0,0,1,60,32ZM104,96h38v18c6-12,22-22,44-22,40,0,46,26,46,60v72H192V160c0-16,0-34-22-34s-26,16-26,34v64H104Z";

pub const ICON_YOUTUBE: &str = "M232,80c-2-20-16-32-36-34-24-2-48-2-68-2s-44,0-68,2C40,48,26,60,24,80a300,300,0,0,0,0,96c2,20,16,32,36,34,24,2,48,2,68,2s44,0,68-2c20-2,34-14,36-34a300,300,0,0,0,0-96ZM104,168V88l64,40Z";

pub const ICON_WHATSAPP: &str = "M128,24A104,104,0,0,0,38,180L24,232l54-14A104,104,0,1,0,128,24Zm52,142c-6,10-20,16-30,14-32-6-64-34-76-66-4-10,0-24,10-30l12-6,16,28-8,10c6,14,18,26,32,32l10-8,28,16Z";

/// Generic link glyph for unrecognised social platforms
pub const ICON_LINK: &str = "M136,88l24-24a40,40,0,0,1,56,56l-40,40a40,40,0,0,1-56,0l-12,12a56,56,0,0,0,80,0l40-40a56,56,0,0,0-80-80L124,76ZM120,168l-24,24a40,40,0,0,1-56-56l40-40a40,40,0,0,1,56,0l12-12a56,56,0,0,0-80,0L28,124a56,56,0,0,0,80,80l24-24Z";
