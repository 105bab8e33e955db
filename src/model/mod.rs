mod document;
mod keyframe;
mod matrix;
mod sprite;
mod symbol;
mod tween;

pub use self::document::Document;
pub use self::keyframe::Keyframe;
pub use self::matrix::Matrix;
pub use self::sprite::{Rect, Sprite};
pub use self::symbol::Symbol;
pub use self::tween::Tween;
