//! Layout and navigation engine for ring and strip carousels in a 3D scene.
//!
//! The crate is headless: it never draws anything. For every frame it tells
//! the host where each item sits and which item is active, and it turns
//! pointer-drag gestures into a continuous animated offset that settles on a
//! discrete item when the gesture ends. The host scene graph copies the
//! returned [`scene::Scene`] into its own node types and feeds gesture updates
//! from its pointer recognizer back into the [`carousel::Carousel`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`carousel`] | Widget assembly: [`carousel::CircularCarousel`] and [`carousel::LinearCarousel`] |
//! | [`controller`] | Active index ownership and next / prev / go-to navigation |
//! | [`drag`] | Drag-to-index state machine |
//! | [`policy`] | Strategy trait each widget kind implements for the drag engine |
//! | [`ring`] | Ring layout strategy (always wraps) |
//! | [`strip`] | Strip layout strategy (wraps only when infinite) |
//! | [`geometry`] | Resting transforms for items and the root node |
//! | [`path`] | Shortest-path resolution on the periodic ring domain |
//! | [`context`] | Scoped navigation handle for trigger regions |
//! | [`input`] | Gesture updates, drag configuration, drag session state |
//! | [`spring`] | Animated scalar contract and the default damped spring |
//! | [`surface`] | Pointer capture and cursor side effects |
//! | [`scene`] | Scene description handed back to the renderer |
//! | [`options`] | Construction parameters and their validation |
//! | [`consts`] | Shared numeric constants and defaults |

pub mod carousel;
pub mod consts;
pub mod context;
pub mod controller;
pub mod drag;
pub mod geometry;
pub mod input;
pub mod options;
pub mod path;
pub mod policy;
pub mod ring;
pub mod scene;
pub mod spring;
pub mod strip;
pub mod surface;

pub use carousel::{Carousel, CircularCarousel, LinearCarousel};
pub use context::{CarouselHandle, CarouselKind, ContextError, Navigate, Scope, Trigger, TriggerRole};
pub use controller::{IndexController, Navigation, WrapMode};
pub use input::{DragAxis, DragConfig, GestureOptions, GestureUpdate};
pub use options::{CarouselOptions, OptionsError, RingOptions, StripOptions};
pub use scene::{Child, Scene, SceneNode};
pub use spring::{Animator, Spring, SpringConfig};
pub use surface::{NullSurface, PointerSurface, SurfaceError, SurfaceStyle};
