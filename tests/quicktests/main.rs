mod op;
mod render;
mod tree;

pub(crate) use op::Op;
