//! Aspect detection and scoring between chart points.
//!
//! Points are compared pairwise by ecliptic angular separation. Each pair
//! is assigned its nearest aspect kind, gated by an orb limit that depends
//! on the points' classes and the comparison mode (natal or synastry), and
//! scored from the aspect weight, the point-class weights, and the
//! tightness of the orb. Matches also carry an applying/separating flag
//! derived from mean daily motion.

pub mod aspect_types;
pub mod engine;
pub mod motion;
pub mod orbs;

pub use aspect_types::{
    ALL_ASPECT_KINDS, AspectKind, AspectMatch, AspectOptions, ChartLayer, MatchPoint, OrbMode,
};
pub use engine::{aspects_within, find_aspects};
pub use motion::is_applying;
pub use orbs::max_orb_deg;
