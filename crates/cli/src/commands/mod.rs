pub(crate) mod pairs;
pub(crate) mod sayings;
pub(crate) mod suggestions;
