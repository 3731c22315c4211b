//! Prop decoding: serialized attribute text in, schema-less [`PropertyBag`](bag::PropertyBag) out.

pub(crate) mod bag;
pub(crate) mod decode;
