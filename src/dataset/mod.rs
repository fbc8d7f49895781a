pub(crate) mod load;
pub(crate) mod player;
pub(crate) mod validate;
