//! Glyph tables for every icon namespace, and the runtime side of lazy
//! icon-set loading.

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons as fa;
use dioxus_free_icons::Icon;
use input_core::{
    load_icon_set, IconBundle, IconLoadError, IconRef, IconResolver, IconResourceCache,
    IconSetLoader, ResolveDecision, DEFAULT_NAMESPACE,
};

/// Draws one glyph.
pub type GlyphRenderer = fn() -> Element;

/// The glyphs of one namespace.
pub struct IconSet {
    pub namespace: &'static str,
    pub glyphs: &'static [(&'static str, GlyphRenderer)],
}

impl IconSet {
    pub fn glyph(&self, name: &str) -> Option<GlyphRenderer> {
        self.glyphs
            .iter()
            .find(|(glyph, _)| *glyph == name)
            .map(|(_, draw)| *draw)
    }
}

macro_rules! glyphs {
    ($($name:literal => $shape:ident),* $(,)?) => {
        &[$(($name, {
            fn draw() -> Element {
                rsx! { Icon::<fa::$shape> { icon: fa::$shape } }
            }
            draw as GlyphRenderer
        })),*]
    };
}

pub static ICON_SETS: &[IconSet] = &[
    IconSet {
        namespace: DEFAULT_NAMESPACE,
        glyphs: glyphs! {
            "search" => FaMagnifyingGlass,
            "close" => FaXmark,
            "clear" => FaXmark,
            "menu" => FaBars,
            "check" => FaCheck,
            "add" => FaPlus,
            "settings" => FaGear,
            "star" => FaStar,
            "favorite" => FaHeart,
            "info" => FaCircleInfo,
            "delete" => FaTrash,
            "home" => FaHouse,
        },
    },
    IconSet {
        namespace: "av",
        glyphs: glyphs! {
            "play-arrow" => FaPlay,
            "pause" => FaPause,
            "mic" => FaMicrophone,
            "volume-up" => FaVolumeHigh,
            "videocam" => FaVideo,
        },
    },
    IconSet {
        namespace: "communication",
        glyphs: glyphs! {
            "email" => FaEnvelope,
            "phone" => FaPhone,
            "chat" => FaMessage,
        },
    },
    IconSet {
        namespace: "device",
        glyphs: glyphs! {
            "network-wifi" => FaWifi,
            "battery-full" => FaBatteryFull,
        },
    },
    IconSet {
        namespace: "editor",
        glyphs: glyphs! {
            "format-bold" => FaBold,
            "format-italic" => FaItalic,
            "format-underlined" => FaUnderline,
        },
    },
    IconSet {
        namespace: "hardware",
        glyphs: glyphs! {
            "headset" => FaHeadphones,
            "keyboard" => FaKeyboard,
            "mouse" => FaComputerMouse,
            "computer" => FaDesktop,
            "laptop" => FaLaptop,
            "smartphone" => FaMobileScreen,
            "memory" => FaMicrochip,
        },
    },
    IconSet {
        namespace: "image",
        glyphs: glyphs! {
            "image" => FaImage,
            "camera-alt" => FaCamera,
        },
    },
    IconSet {
        namespace: "maps",
        glyphs: glyphs! {
            "place" => FaLocationDot,
            "map" => FaMap,
            "navigation" => FaCompass,
            "restaurant" => FaUtensils,
        },
    },
    IconSet {
        namespace: "notification",
        glyphs: glyphs! {
            "sms" => FaMessage,
            "wifi" => FaWifi,
        },
    },
    IconSet {
        namespace: "social",
        glyphs: glyphs! {
            "person" => FaUser,
            "group" => FaUsers,
            "share" => FaShareNodes,
            "notifications" => FaBell,
            "notifications-off" => FaBellSlash,
        },
    },
    IconSet {
        namespace: "places",
        glyphs: glyphs! {
            "free-breakfast" => FaMugHot,
            "room-service" => FaBellConcierge,
        },
    },
];

pub fn icon_set(namespace: &str) -> Option<&'static IconSet> {
    ICON_SETS.iter().find(|set| set.namespace == namespace)
}

/// Drawing for `icon`, if its namespace is loaded and the glyph exists.
pub fn lookup_glyph(icon: &IconRef, cache: &IconResourceCache) -> Option<GlyphRenderer> {
    if !cache.is_available(icon.namespace()) {
        return None;
    }
    icon_set(icon.namespace())?.glyph(icon.glyph())
}

/// Loads icon sets that ship inside this crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledIconSets;

impl IconSetLoader for BundledIconSets {
    async fn load(&self, bundle: &'static IconBundle) -> Result<(), IconLoadError> {
        match icon_set(bundle.namespace) {
            Some(_) => Ok(()),
            None => Err(IconLoadError::bundle_unavailable(
                bundle.namespace,
                format!("{} is not bundled", bundle.module),
            )),
        }
    }
}

/// Bumped every time a background icon-set load settles. Glyphs read it so
/// they redraw once their namespace becomes available.
pub static ICON_SETS_REVISION: GlobalSignal<u64> = Signal::global(|| 0);

/// Resolve the namespace of `icon` and, if this is the first request for
/// it, start loading it in the background.
///
/// The load is detached from the calling component: it keeps running if the
/// widget that asked for it goes away.
pub fn request_icon_set(icon: &IconRef) -> ResolveDecision {
    let decision = IconResolver::global().resolve(icon);
    if let ResolveDecision::Load(bundle) = decision {
        spawn_forever(async move {
            load_icon_set(&BundledIconSets, bundle, IconResourceCache::global()).await;
            *ICON_SETS_REVISION.write() += 1;
        });
    }
    decision
}
