//! Callout draws anchored tooltip bubbles: a rounded body with a pointer notch and a
//! single-line label.
//!
//! A bubble is placed by its host in local drawing coordinates. At paint time it consults the
//! latest screen sample of the anchor it is attached to and:
//!
//! 1. **Shifts** the whole body horizontally so it stays `layout_margin` inside the anchor's
//!    visible display frame ([`compute_pointer_offset`]).
//! 2. **Counter-shifts** the notch along the bottom edge so it keeps aiming at the anchor,
//!    clamped so it never leaves the body ([`compute_clamped_edge_offset`]).
//! 3. **Centers** the label on a baseline derived from typeface metrics only, so the label does
//!    not jump as its characters change ([`compute_text_draw_origin_y`]).
//!
//! Painting goes through the [`Surface`] trait. [`CpuSurface`] rasterizes with `vello_cpu`;
//! [`RecordingSurface`] captures draw calls for inspection. Text is measured and shaped through
//! [`TextService`], implemented on top of `parley` by [`ParleyTextService`].
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Single-threaded**: anchors and trackers share state through `Rc`/`Cell` on the UI thread.
//! - **Premultiplied RGBA8**: [`CpuSurface`] outputs premultiplied pixels.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod anchor;
mod bubble;
mod foundation;
mod geometry;
mod render;
mod shape;
mod text;

pub use anchor::tracker::{ScreenLocationTracker, ScreenSample};
pub use anchor::view::{AnchorView, LayoutAnchor, LayoutListener};
pub use bubble::config::BubbleConfig;
pub use bubble::renderer::BubbleRenderer;
pub use foundation::core::{Affine, BezPath, Point, Rect, Rgba8, Vec2};
pub use foundation::error::{CalloutError, CalloutResult};
pub use geometry::baseline::{
    FontMetrics, compute_text_center_from_baseline, compute_text_draw_origin_y, intrinsic_height,
    intrinsic_width,
};
pub use geometry::pointer::{
    compute_clamped_edge_offset, compute_pointer_offset, max_arrow_offset, notch_protrusion,
};
pub use render::cpu::{CpuSurface, FrameRGBA};
pub use render::surface::{RecordingSurface, Surface, SurfaceOp};
pub use shape::edge::{EdgeTreatment, MarkerEdge, OffsetEdge, StraightEdge};
pub use shape::primitive::{ShapePrimitive, ShapeStyle};
pub use text::appearance::{TextAppearance, TypefaceKey};
pub use text::engine::ParleyTextService;
pub use text::helper::TextLayoutHelper;
pub use text::service::{FontData, ShapedGlyph, ShapedRun, ShapedText, TextService};
