pub(crate) mod olympics;
