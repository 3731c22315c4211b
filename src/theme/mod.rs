//! Theme resolution: design tokens on the nearest presentation root, brand defaults otherwise.

pub(crate) mod resolver;
pub(crate) mod schemes;
