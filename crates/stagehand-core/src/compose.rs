// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Static composition of concrete source types.
//!
//! One row per [`SourceKind`] names the wrapper type and the capability
//! bundles it implements. Everything else (the wrapper structs, the bundle
//! impls, [`ComposedSource`], and [`SourceKind::capabilities`]) is generated
//! from that row, so adding a type is a one-line change here.

use futures::future::join_all;
use stagehand_port::ItemId;
use tracing::{instrument, trace};

use crate::capability::{Capability, Chroma, Color, HasItem, Layout, Transition};
use crate::classify::{classify, SourceKind};
use crate::enumerate::ItemEnumerator;
use crate::error::{SdkError, SdkResult};
use crate::host::Host;
use crate::item::Item;

// Yields `Some($src as &dyn $want)` when `$want` is in the list, else `None`.
macro_rules! pick {
    (Layout, $src:ident; Layout $(, $rest:ident)*) => { Some($src as &dyn Layout) };
    (Color, $src:ident; Color $(, $rest:ident)*) => { Some($src as &dyn Color) };
    (Chroma, $src:ident; Chroma $(, $rest:ident)*) => { Some($src as &dyn Chroma) };
    (Transition, $src:ident; Transition $(, $rest:ident)*) => { Some($src as &dyn Transition) };
    ($want:ident, $src:ident; $other:ident $(, $rest:ident)*) => { pick!($want, $src; $($rest),*) };
    ($want:ident, $src:ident;) => {{
        let _ = $src;
        None
    }};
}

macro_rules! composition_table {
    ($(
        $(#[$meta:meta])*
        $kind:ident => $ty:ident [$($cap:ident),*];
    )*) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Debug)]
            pub struct $ty(Item);

            impl $ty {
                /// Unwrap the base item.
                pub fn into_item(self) -> Item {
                    self.0
                }
            }

            impl HasItem for $ty {
                fn item(&self) -> &Item {
                    &self.0
                }
            }

            $(impl $cap for $ty {})*
        )*

        /// A classified source wrapped in its concrete type.
        #[derive(Clone, Debug)]
        pub enum ComposedSource {
            $(
                #[doc = concat!("See [`", stringify!($ty), "`].")]
                $kind($ty),
            )*
        }

        impl SourceKind {
            /// Capability bundles composed into this kind, in table order.
            pub fn capabilities(self) -> &'static [Capability] {
                match self {
                    $(Self::$kind => &[$(Capability::$cap),*],)*
                }
            }
        }

        impl ComposedSource {
            /// Wrap `item` in the concrete type for `kind`.
            pub fn compose(kind: SourceKind, item: Item) -> Self {
                match kind {
                    $(SourceKind::$kind => Self::$kind($ty(item)),)*
                }
            }

            /// Concrete kind.
            pub fn kind(&self) -> SourceKind {
                match self {
                    $(Self::$kind(_) => SourceKind::$kind,)*
                }
            }

            /// Unwrap the base item.
            pub fn into_item(self) -> Item {
                match self {
                    $(Self::$kind(s) => s.0,)*
                }
            }

            /// Layout bundle, when composed.
            pub fn as_layout(&self) -> Option<&dyn Layout> {
                match self {
                    $(Self::$kind(s) => pick!(Layout, s; $($cap),*),)*
                }
            }

            /// Color bundle, when composed.
            pub fn as_color(&self) -> Option<&dyn Color> {
                match self {
                    $(Self::$kind(s) => pick!(Color, s; $($cap),*),)*
                }
            }

            /// Chroma bundle, when composed.
            pub fn as_chroma(&self) -> Option<&dyn Chroma> {
                match self {
                    $(Self::$kind(s) => pick!(Chroma, s; $($cap),*),)*
                }
            }

            /// Transition bundle, when composed.
            pub fn as_transition(&self) -> Option<&dyn Transition> {
                match self {
                    $(Self::$kind(s) => pick!(Transition, s; $($cap),*),)*
                }
            }
        }

        impl HasItem for ComposedSource {
            fn item(&self) -> &Item {
                match self {
                    $(Self::$kind(s) => &s.0,)*
                }
            }
        }
    };
}

composition_table! {
    /// Game capture.
    Game => GameSource [Layout, Color, Chroma, Transition];
    /// Video playlist.
    VideoPlaylist => VideoPlaylistSource [Layout, Color, Chroma, Transition];
    /// Web page.
    Html => HtmlSource [Layout, Color, Chroma, Transition];
    /// Screen region capture.
    Screen => ScreenSource [Layout, Color, Chroma, Transition];
    /// Still or animated image.
    Image => ImageSource [Layout, Color, Chroma, Transition];
    /// Video or audio file.
    Media => MediaSource [Layout, Color, Chroma, Transition];
    /// Video capture device.
    Camera => CameraSource [Layout, Color, Chroma, Transition];
    /// Audio capture device; not rendered, so no visual bundles.
    Audio => AudioSource [];
    /// Flash movie.
    Flash => FlashSource [Layout, Color, Chroma, Transition];
    /// Unrecognized source; base accessors only.
    Generic => GenericSource [];
}

impl ComposedSource {
    /// Whether `capability` is composed into this source.
    pub fn has(&self, capability: Capability) -> bool {
        self.kind().capabilities().contains(&capability)
    }
}

/// Enumerate, classify, and compose every unique source visible from
/// `context_item` (or the local context).
#[instrument(skip(host))]
pub async fn resolve_sources(
    host: &Host,
    context_item: Option<&ItemId>,
) -> SdkResult<Vec<ComposedSource>> {
    let identities = ItemEnumerator::new(host).enumerate(context_item).await?;
    let attached = identities.into_iter().map(|identity| async move {
        let kind = classify(&identity);
        trace!(item = %identity.id, %kind, "classified source");
        let item = Item::attach(host, identity).await?;
        Ok::<_, SdkError>(ComposedSource::compose(kind, item))
    });
    join_all(attached).await.into_iter().collect()
}
