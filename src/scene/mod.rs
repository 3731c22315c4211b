//! Scene host: JSON scene definitions and the lifecycle driver that attaches, renders, ticks and
//! detaches component instances.

pub(crate) mod def;
pub(crate) mod host;
pub(crate) mod opts;
