pub(crate) mod baseline;
pub(crate) mod pointer;
