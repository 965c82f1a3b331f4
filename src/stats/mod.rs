mod accessor;
mod array;
mod dispatch;
mod matrix;
mod options;

pub use accessor::Accessor;
pub use array::{nanstdev_array, nanstdev_by, try_nanstdev_by};
pub use dispatch::{Input, NanStdev, nanstdev, nanstdev_value};
pub use matrix::{Axis, nanstdev_matrix};
pub use options::NanStdevOptions;
